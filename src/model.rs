use serde::{Deserialize, Serialize};

/// Below this many remaining seats an offer shows a low-inventory warning.
pub const LOW_SEAT_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    pub id: String,
    pub name: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub time: String,
    pub airport_name: String,
    pub airport_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopDetail {
    pub airport_name: String,
    pub layover_duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub airline: Airline,
    pub departure: Endpoint,
    pub arrival: Endpoint,
    pub duration: String,
    pub stop_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_details: Vec<StopDetail>,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats_remaining: Option<u32>,
}

impl FlightOffer {
    /// Numeric value of the display price. See [`parse_price`].
    pub fn price_value(&self) -> u64 {
        parse_price(&self.price)
    }

    pub fn is_consistent(&self) -> bool {
        self.stop_count == 0 || self.stop_details.len() == self.stop_count as usize
    }

    pub fn is_low_inventory(&self) -> bool {
        self.seats_remaining
            .is_some_and(|seats| seats < LOW_SEAT_THRESHOLD)
    }

    pub fn stops_label(&self) -> String {
        match self.stop_count {
            0 => "Direct".to_string(),
            1 => "1 Stop".to_string(),
            n => format!("{n} Stops"),
        }
    }
}

/// Parses a currency-formatted display string by keeping only its ASCII
/// digits. Strings with no digits, or too many to fit, yield 0.
pub fn parse_price(display: &str) -> u64 {
    let digits: String = display.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub discount: String,
    pub expiry: String,
    pub badge: String,
    pub code: String,
    pub expired: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub image_url: String,
    pub price: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub reference: String,
    pub passenger: String,
    pub last_name: String,
    pub email: String,
    pub route: String,
    pub date: String,
    pub amount: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub joined: String,
    pub status: AccountStatus,
}
