//! Mock data standing in for the booking backend.

use crate::model::*;

fn airline(id: &str, name: &str, logo_url: &str) -> Airline {
    Airline {
        id: id.to_string(),
        name: name.to_string(),
        logo_url: logo_url.to_string(),
    }
}

fn endpoint(time: &str, airport_name: &str, airport_code: &str) -> Endpoint {
    Endpoint {
        time: time.to_string(),
        airport_name: airport_name.to_string(),
        airport_code: airport_code.to_string(),
    }
}

fn stop(airport_name: &str, layover_duration: &str) -> StopDetail {
    StopDetail {
        airport_name: airport_name.to_string(),
        layover_duration: layover_duration.to_string(),
    }
}

/// Airline choices offered by the filter panel, as `(id, display name)`.
pub const AIRLINE_OPTIONS: [(&str, &str); 5] = [
    ("delta", "Delta Airlines"),
    ("united", "United Airlines"),
    ("american", "American Airlines"),
    ("lufthansa", "Lufthansa"),
    ("emirates", "Emirates"),
];

pub fn flight_offers() -> Vec<FlightOffer> {
    let jfk = |time: &str| endpoint(time, "New York (JFK)", "JFK");
    let lax = |time: &str| endpoint(time, "Los Angeles (LAX)", "LAX");

    vec![
        FlightOffer {
            id: "fl-001".into(),
            airline: airline("delta", "Delta Airlines", "https://logos.skyvoyage.example/delta.png"),
            departure: jfk("08:30"),
            arrival: lax("11:45"),
            duration: "5h 15m".into(),
            stop_count: 0,
            stop_details: vec![],
            price: "$320".into(),
            discount_label: Some("-15%".into()),
            seats_remaining: Some(5),
        },
        FlightOffer {
            id: "fl-002".into(),
            airline: airline("united", "United Airlines", "https://logos.skyvoyage.example/united.png"),
            departure: jfk("10:15"),
            arrival: lax("14:30"),
            duration: "6h 15m".into(),
            stop_count: 1,
            stop_details: vec![stop("Chicago (ORD)", "1h 20m")],
            price: "$280".into(),
            discount_label: None,
            seats_remaining: None,
        },
        FlightOffer {
            id: "fl-003".into(),
            airline: airline("american", "American Airlines", "https://logos.skyvoyage.example/american.png"),
            departure: jfk("14:20"),
            arrival: lax("17:35"),
            duration: "5h 15m".into(),
            stop_count: 0,
            stop_details: vec![],
            price: "$350".into(),
            discount_label: None,
            seats_remaining: Some(2),
        },
        FlightOffer {
            id: "fl-004".into(),
            airline: airline("emirates", "Emirates", "https://logos.skyvoyage.example/emirates.png"),
            departure: jfk("19:45"),
            arrival: lax("23:15"),
            duration: "5h 30m".into(),
            stop_count: 0,
            stop_details: vec![],
            price: "$410".into(),
            discount_label: None,
            seats_remaining: None,
        },
        FlightOffer {
            id: "fl-005".into(),
            airline: airline("lufthansa", "Lufthansa", "https://logos.skyvoyage.example/lufthansa.png"),
            departure: jfk("07:30"),
            arrival: lax("13:20"),
            duration: "7h 50m".into(),
            stop_count: 2,
            stop_details: vec![stop("Chicago (ORD)", "1h 20m"), stop("Denver (DEN)", "1h 05m")],
            price: "$260".into(),
            discount_label: Some("-25%".into()),
            seats_remaining: None,
        },
    ]
}

fn promotion(
    id: u32,
    title: &str,
    description: &str,
    discount: &str,
    expiry: &str,
    badge: &str,
    code: &str,
    expired: bool,
) -> Promotion {
    Promotion {
        id,
        title: title.to_string(),
        description: description.to_string(),
        discount: discount.to_string(),
        expiry: expiry.to_string(),
        badge: badge.to_string(),
        code: code.to_string(),
        expired,
    }
}

pub fn promotions() -> Vec<Promotion> {
    vec![
        promotion(
            1,
            "Summer Special",
            "Fly to top summer destinations worldwide with our exclusive discount.",
            "15% OFF",
            "Valid until August 31, 2025",
            "Limited Time",
            "SUMMER15",
            false,
        ),
        promotion(
            2,
            "Early Bird Discount",
            "Book your flights 60 days in advance and enjoy special savings.",
            "20% OFF",
            "Always available for early bookings",
            "Popular",
            "EARLYBIRD20",
            false,
        ),
        promotion(
            3,
            "Weekend Getaway",
            "Special rates for weekend flights to selected destinations.",
            "10% OFF",
            "Valid for travel on Fri-Sun",
            "Trending",
            "WEEKEND10",
            false,
        ),
        promotion(
            4,
            "Family Package",
            "Special discount for family bookings with children.",
            "12% OFF",
            "Valid until December 31, 2025",
            "Family",
            "FAMILY12",
            false,
        ),
        promotion(
            5,
            "Business Class Upgrade",
            "Upgrade to business class at a special rate when booking economy.",
            "25% OFF Upgrade",
            "Limited availability",
            "Premium",
            "UPGRADE25",
            false,
        ),
        promotion(
            101,
            "Spring Break Special",
            "Special rates for spring break destinations.",
            "18% OFF",
            "Expired on April 15, 2025",
            "Expired",
            "SPRING18",
            true,
        ),
        promotion(
            102,
            "Valentine's Day Offer",
            "Special couple packages for Valentine's day travel.",
            "14% OFF",
            "Expired on February 28, 2025",
            "Expired",
            "LOVE14",
            true,
        ),
        promotion(
            103,
            "New Year Promotion",
            "Welcome the new year with special flight rates.",
            "22% OFF",
            "Expired on January 31, 2025",
            "Expired",
            "NEWYEAR22",
            true,
        ),
    ]
}

pub fn active_promotions() -> Vec<Promotion> {
    promotions().into_iter().filter(|p| !p.expired).collect()
}

pub fn expired_promotions() -> Vec<Promotion> {
    promotions().into_iter().filter(|p| p.expired).collect()
}

pub fn destinations() -> Vec<Destination> {
    [
        (1, "Paris", "France", "paris", "$299"),
        (2, "New York", "United States", "new-york", "$350"),
        (3, "Tokyo", "Japan", "tokyo", "$650"),
        (4, "Dubai", "UAE", "dubai", "$420"),
    ]
    .into_iter()
    .map(|(id, name, country, slug, price)| Destination {
        id,
        name: name.to_string(),
        country: country.to_string(),
        image_url: format!("https://images.skyvoyage.example/destinations/{slug}.jpg"),
        price: price.to_string(),
    })
    .collect()
}

pub fn admin_users() -> Vec<AdminUser> {
    [
        (1, "John Doe", "john@example.com", "2025-05-01", AccountStatus::Active),
        (2, "Jane Smith", "jane@example.com", "2025-05-03", AccountStatus::Active),
        (3, "Bob Johnson", "bob@example.com", "2025-05-05", AccountStatus::Inactive),
        (4, "Sarah Williams", "sarah@example.com", "2025-05-07", AccountStatus::Active),
        (5, "Michael Brown", "michael@example.com", "2025-05-09", AccountStatus::Active),
    ]
    .into_iter()
    .map(|(id, name, email, joined, status)| AdminUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        joined: joined.to_string(),
        status,
    })
    .collect()
}

pub fn bookings() -> Vec<Booking> {
    [
        ("B-1001", "John Doe", "john@example.com", "New York → Paris", "2025-06-15", "$450", BookingStatus::Confirmed),
        ("B-1002", "Jane Smith", "jane@example.com", "London → Tokyo", "2025-06-20", "$780", BookingStatus::Confirmed),
        ("B-1003", "Bob Johnson", "bob@example.com", "Dubai → Singapore", "2025-06-25", "$520", BookingStatus::Pending),
        ("B-1004", "Sarah Williams", "sarah@example.com", "Sydney → Rome", "2025-07-01", "$630", BookingStatus::Cancelled),
    ]
    .into_iter()
    .map(|(reference, passenger, email, route, date, amount, status)| Booking {
        reference: reference.to_string(),
        passenger: passenger.to_string(),
        last_name: passenger
            .rsplit(' ')
            .next()
            .unwrap_or(passenger)
            .to_string(),
        email: email.to_string(),
        route: route.to_string(),
        date: date.to_string(),
        amount: amount.to_string(),
        status,
    })
    .collect()
}
