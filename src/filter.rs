use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::BookingError;
use crate::model::FlightOffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// Slider bounds of the filter panel.
    pub const PANEL_DEFAULT: PriceRange = PriceRange { min: 0, max: 2000 };

    pub const UNBOUNDED: PriceRange = PriceRange {
        min: 0,
        max: u64::MAX,
    };

    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StopCategory {
    #[serde(rename = "nonstop")]
    Nonstop,
    #[serde(rename = "1stop")]
    OneStop,
    #[serde(rename = "2stops")]
    TwoPlusStops,
}

impl StopCategory {
    pub fn from_str_loose(s: &str) -> Result<Self, BookingError> {
        match s.trim().to_lowercase().as_str() {
            "nonstop" | "non-stop" | "0" => Ok(Self::Nonstop),
            "1stop" | "1-stop" | "1" => Ok(Self::OneStop),
            "2stops" | "2+stops" | "2+" | "2" => Ok(Self::TwoPlusStops),
            _ => Err(BookingError::InvalidToken {
                kind: "stop category",
                token: s.to_string(),
            }),
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Nonstop => "nonstop",
            Self::OneStop => "1stop",
            Self::TwoPlusStops => "2stops",
        }
    }

    pub fn matches(&self, stop_count: u32) -> bool {
        match self {
            Self::Nonstop => stop_count == 0,
            Self::OneStop => stop_count == 1,
            Self::TwoPlusStops => stop_count >= 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    pub fn from_str_loose(s: &str) -> Result<Self, BookingError> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            _ => Err(BookingError::InvalidToken {
                kind: "departure time",
                token: s.to_string(),
            }),
        }
    }
}

/// Lowercases and strips all whitespace, so "Delta Airlines" and
/// "deltaairlines" compare equal.
pub fn normalize_airline(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub airlines: BTreeSet<String>,
    pub stops: BTreeSet<StopCategory>,
    /// Collected from the panel but never applied to results.
    pub times: BTreeSet<DayPart>,
}

impl FilterCriteria {
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_airline(mut self, airline: &str) -> Self {
        self.airlines.insert(normalize_airline(airline));
        self
    }

    pub fn with_stop(mut self, stop: StopCategory) -> Self {
        self.stops.insert(stop);
        self
    }

    pub fn with_time(mut self, time: DayPart) -> Self {
        self.times.insert(time);
        self
    }

    /// Builds criteria from comma-separated CLI tokens.
    pub fn from_tokens(
        range: PriceRange,
        airlines: Option<&str>,
        stops: Option<&str>,
        times: Option<&str>,
    ) -> Result<Self, BookingError> {
        if range.min > range.max {
            return Err(BookingError::Validation(format!(
                "minimum price ({}) exceeds maximum price ({})",
                range.min, range.max
            )));
        }

        let mut criteria = FilterCriteria::default().with_price_range(range);
        for airline in split_tokens(airlines) {
            criteria = criteria.with_airline(airline);
        }
        for stop in split_tokens(stops) {
            criteria = criteria.with_stop(StopCategory::from_str_loose(stop)?);
        }
        for time in split_tokens(times) {
            criteria = criteria.with_time(DayPart::from_str_loose(time)?);
        }
        Ok(criteria)
    }

    pub fn is_identity(&self) -> bool {
        self.price_range == PriceRange::UNBOUNDED && self.airlines.is_empty() && self.stops.is_empty()
    }

    fn matches_airline(&self, offer: &FlightOffer) -> bool {
        self.airlines.is_empty()
            || self.airlines.contains(&normalize_airline(&offer.airline.id))
            || self.airlines.contains(&normalize_airline(&offer.airline.name))
    }

    fn matches_stops(&self, offer: &FlightOffer) -> bool {
        self.stops.is_empty() || self.stops.iter().any(|s| s.matches(offer.stop_count))
    }

    pub fn matches(&self, offer: &FlightOffer) -> bool {
        self.price_range.contains(offer.price_value())
            && self.matches_airline(offer)
            && self.matches_stops(offer)
    }
}

fn split_tokens(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.into_iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Returns the offers satisfying every active criterion, in their original
/// order. Never fails; unparsable prices count as 0.
pub fn reconcile(offers: &[FlightOffer], criteria: &FilterCriteria) -> Vec<FlightOffer> {
    if !criteria.times.is_empty() {
        warn!(
            times = ?criteria.times,
            "departure-time filter is collected but not applied"
        );
    }

    let kept: Vec<FlightOffer> = offers
        .iter()
        .filter(|offer| criteria.matches(offer))
        .cloned()
        .collect();

    debug!(total = offers.len(), kept = kept.len(), "reconciled offers");
    kept
}
