use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::bookings::DashboardSummary;
use crate::i18n::Locale;
use crate::model::{Booking, Destination, FlightOffer, Promotion};
use crate::support::Faq;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn price_cell(offer: &FlightOffer) -> String {
    match &offer.discount_label {
        Some(discount) => format!("{} ({discount})", offer.price),
        None => offer.price.clone(),
    }
}

fn stops_cell(offer: &FlightOffer) -> String {
    if offer.stop_details.is_empty() {
        return offer.stops_label();
    }
    let via: Vec<String> = offer
        .stop_details
        .iter()
        .map(|s| format!("{} {}", s.airport_name, s.layover_duration))
        .collect();
    format!("{}\n{}", offer.stops_label(), via.join("\n"))
}

pub fn seats_note(offer: &FlightOffer) -> Option<String> {
    if !offer.is_low_inventory() {
        return None;
    }
    offer
        .seats_remaining
        .map(|n| format!("Only {n} seat{} left", if n == 1 { "" } else { "s" }))
}

pub fn render_offers(offers: &[FlightOffer], locale: &Locale) -> String {
    let mut table = new_table(vec![
        "Airline",
        locale.t("from"),
        locale.t("to"),
        "Duration",
        "Stops",
        "Price",
        "Seats",
    ]);

    for offer in offers {
        let from = format!("{} {}", offer.departure.time, offer.departure.airport_code);
        let to = format!("{} {}", offer.arrival.time, offer.arrival.airport_code);
        let seats = seats_note(offer).unwrap_or_default();

        table.add_row(vec![
            &offer.airline.name,
            &from,
            &to,
            &offer.duration,
            &stops_cell(offer),
            &price_cell(offer),
            &seats,
        ]);
    }

    table.to_string()
}

pub fn compact_line(offer: &FlightOffer) -> String {
    let stops = match offer.stop_count {
        0 => "nonstop".to_string(),
        n => {
            let via: Vec<&str> = offer
                .stop_details
                .iter()
                .map(|s| s.airport_name.as_str())
                .collect();
            format!("{n} stop {}", via.join(","))
        }
    };
    let mut line = format!(
        "{} | {}>{} | {} | {stops} | {} | {}>{}",
        offer.price,
        offer.departure.airport_code,
        offer.arrival.airport_code,
        offer.duration,
        offer.airline.name,
        offer.departure.time,
        offer.arrival.time,
    );
    if let Some(note) = seats_note(offer) {
        line.push_str(" | ");
        line.push_str(&note);
    }
    line
}

pub fn render_promotions(promotions: &[Promotion]) -> String {
    let mut table = new_table(vec!["Offer", "Discount", "Code", "Validity", "Badge"]);
    for promo in promotions {
        let title = format!("{}\n{}", promo.title, promo.description);
        table.add_row(vec![
            &title,
            &promo.discount,
            &promo.code,
            &promo.expiry,
            &promo.badge,
        ]);
    }
    table.to_string()
}

pub fn render_destinations(destinations: &[Destination]) -> String {
    let mut table = new_table(vec!["Destination", "Country", "From"]);
    for dest in destinations {
        table.add_row(vec![&dest.name, &dest.country, &dest.price]);
    }
    table.to_string()
}

pub fn render_bookings(bookings: &[Booking], locale: &Locale) -> String {
    let mut table = new_table(vec![
        locale.t("bookingReference"),
        "Passenger",
        "Route",
        "Date",
        "Amount",
        "Status",
    ]);
    for booking in bookings {
        table.add_row(vec![
            booking.reference.clone(),
            booking.passenger.clone(),
            booking.route.clone(),
            booking.date.clone(),
            booking.amount.clone(),
            booking.status.to_string(),
        ]);
    }
    table.to_string()
}

pub fn render_dashboard(summary: &DashboardSummary) -> String {
    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec!["Users".to_string(), summary.total_users.to_string()]);
    table.add_row(vec!["Active users".to_string(), summary.active_users.to_string()]);
    table.add_row(vec!["Bookings".to_string(), summary.total_bookings.to_string()]);
    for (status, count) in &summary.bookings_by_status {
        table.add_row(vec![format!("  {status}"), count.to_string()]);
    }
    table.add_row(vec!["Revenue".to_string(), format!("${}", summary.revenue)]);
    table.to_string()
}

pub fn render_faqs(faqs: &[Faq]) -> String {
    let mut table = new_table(vec!["Question", "Answer"]);
    for faq in faqs {
        table.add_row(vec![&faq.question, &faq.answer]);
    }
    table.to_string()
}
