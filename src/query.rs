use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::passengers::PassengerCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn from_str_loose(s: &str) -> Result<Self, BookingError> {
        match s {
            "economy" => Ok(Self::Economy),
            "premium-economy" | "premium" => Ok(Self::PremiumEconomy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            _ => Err(BookingError::Validation(format!("invalid cabin class: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    RoundTrip,
    OneWay,
}

impl TripType {
    pub fn from_str_loose(s: &str) -> Result<Self, BookingError> {
        match s {
            "round-trip" | "round" => Ok(Self::RoundTrip),
            "one-way" | "oneway" => Ok(Self::OneWay),
            _ => Err(BookingError::Validation(format!("invalid trip type: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub trip: TripType,
    pub origin: String,
    pub destination: String,
    pub depart_date: String,
    pub return_date: Option<String>,
    pub passengers: PassengerCounts,
    pub cabin: CabinClass,
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Parses `YYYY-MM-DD` into `(year, month, day)`, rejecting impossible
/// calendar days.
pub fn parse_date(date: &str) -> Result<(u32, u32, u32), BookingError> {
    let invalid = || BookingError::InvalidDate(date.to_string());

    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return Err(invalid());
    }
    if !parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
        return Err(invalid());
    }
    let year: u32 = parts[0].parse().map_err(|_| invalid())?;
    let month: u32 = parts[1].parse().map_err(|_| invalid())?;
    let day: u32 = parts[2].parse().map_err(|_| invalid())?;

    if year < 2000 || !(1..=12).contains(&month) {
        return Err(invalid());
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(invalid());
    }

    Ok((year, month, day))
}

fn require(value: &str, field: &'static str) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        return Err(BookingError::MissingField(field));
    }
    Ok(())
}

impl SearchRequest {
    pub fn validate(&self) -> Result<(), BookingError> {
        require(&self.origin, "origin")?;
        require(&self.destination, "destination")?;
        require(&self.depart_date, "departure date")?;

        let depart = parse_date(&self.depart_date)?;

        match (self.trip, self.return_date.as_deref()) {
            (TripType::RoundTrip, None) => {
                return Err(BookingError::MissingField("return date (round trip)"));
            }
            (_, Some(ret)) => {
                let back = parse_date(ret)?;
                if back < depart {
                    return Err(BookingError::Validation(format!(
                        "return date {ret} is before departure date {}",
                        self.depart_date
                    )));
                }
            }
            (TripType::OneWay, None) => {}
        }

        if self.origin.trim().eq_ignore_ascii_case(self.destination.trim()) {
            return Err(BookingError::Validation(
                "origin and destination must differ".into(),
            ));
        }

        self.passengers.validate()
    }
}
