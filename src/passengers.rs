use serde::{Deserialize, Serialize};

use crate::error::BookingError;

pub const MAX_PER_CATEGORY: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerCategory {
    Adults,
    Children,
    Infants,
    Seniors,
}

impl PassengerCategory {
    pub const ALL: [PassengerCategory; 4] = [
        Self::Adults,
        Self::Children,
        Self::Infants,
        Self::Seniors,
    ];

    pub fn from_str_loose(s: &str) -> Result<Self, BookingError> {
        match s.trim().to_lowercase().as_str() {
            "adult" | "adults" => Ok(Self::Adults),
            "child" | "children" => Ok(Self::Children),
            "infant" | "infants" => Ok(Self::Infants),
            "senior" | "seniors" => Ok(Self::Seniors),
            _ => Err(BookingError::InvalidToken {
                kind: "passenger category",
                token: s.to_string(),
            }),
        }
    }

    pub fn min(&self) -> u32 {
        match self {
            Self::Adults => 1,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adults => "adults",
            Self::Children => "children",
            Self::Infants => "infants",
            Self::Seniors => "seniors",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Adults => "Adults (18+)",
            Self::Children => "Children (2-17)",
            Self::Infants => "Infants (0-2)",
            Self::Seniors => "Seniors (65+)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub seniors: u32,
}

impl Default for PassengerCounts {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
            seniors: 0,
        }
    }
}

impl PassengerCounts {
    pub fn get(&self, category: PassengerCategory) -> u32 {
        match category {
            PassengerCategory::Adults => self.adults,
            PassengerCategory::Children => self.children,
            PassengerCategory::Infants => self.infants,
            PassengerCategory::Seniors => self.seniors,
        }
    }

    fn slot(&mut self, category: PassengerCategory) -> &mut u32 {
        match category {
            PassengerCategory::Adults => &mut self.adults,
            PassengerCategory::Children => &mut self.children,
            PassengerCategory::Infants => &mut self.infants,
            PassengerCategory::Seniors => &mut self.seniors,
        }
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants + self.seniors
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        for category in PassengerCategory::ALL {
            let count = self.get(category);
            if count < category.min() || count > MAX_PER_CATEGORY {
                return Err(BookingError::InvalidPassengers(format!(
                    "{} must be between {} and {MAX_PER_CATEGORY}, got {count}",
                    category.as_str(),
                    category.min()
                )));
            }
        }
        Ok(())
    }
}

/// Bounded passenger counters, each paired with one name slot per
/// passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerSelector {
    counts: PassengerCounts,
    adults: Vec<String>,
    children: Vec<String>,
    infants: Vec<String>,
    seniors: Vec<String>,
}

impl Default for PassengerSelector {
    fn default() -> Self {
        Self::new(PassengerCounts::default())
    }
}

impl PassengerSelector {
    /// Starts from `initial`, clamping each count into its bounds.
    pub fn new(initial: PassengerCounts) -> Self {
        let mut counts = initial;
        for category in PassengerCategory::ALL {
            let c = counts.slot(category);
            *c = (*c).clamp(category.min(), MAX_PER_CATEGORY);
        }
        let slots = |n: u32| vec![String::new(); n as usize];
        Self {
            adults: slots(counts.adults),
            children: slots(counts.children),
            infants: slots(counts.infants),
            seniors: slots(counts.seniors),
            counts,
        }
    }

    fn names_mut(&mut self, category: PassengerCategory) -> &mut Vec<String> {
        match category {
            PassengerCategory::Adults => &mut self.adults,
            PassengerCategory::Children => &mut self.children,
            PassengerCategory::Infants => &mut self.infants,
            PassengerCategory::Seniors => &mut self.seniors,
        }
    }

    pub fn counts(&self) -> PassengerCounts {
        self.counts
    }

    pub fn count(&self, category: PassengerCategory) -> u32 {
        self.counts.get(category)
    }

    pub fn names(&self, category: PassengerCategory) -> &[String] {
        match category {
            PassengerCategory::Adults => &self.adults,
            PassengerCategory::Children => &self.children,
            PassengerCategory::Infants => &self.infants,
            PassengerCategory::Seniors => &self.seniors,
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.total()
    }

    pub fn label(&self) -> String {
        match self.total() {
            1 => "1 Passenger".to_string(),
            n => format!("{n} Passengers"),
        }
    }

    pub fn can_increment(&self, category: PassengerCategory) -> bool {
        self.count(category) < MAX_PER_CATEGORY
    }

    pub fn can_decrement(&self, category: PassengerCategory) -> bool {
        self.count(category) > category.min()
    }

    /// Moves a counter by `delta`, clamped to its bounds. Growing appends
    /// empty name slots; shrinking drops slots from the end along with any
    /// names typed into them.
    pub fn adjust(&mut self, category: PassengerCategory, delta: i32) -> u32 {
        let current = i64::from(self.count(category));
        let next = (current + i64::from(delta))
            .clamp(i64::from(category.min()), i64::from(MAX_PER_CATEGORY)) as u32;

        *self.counts.slot(category) = next;
        self.names_mut(category).resize(next as usize, String::new());
        next
    }

    pub fn increment(&mut self, category: PassengerCategory) -> u32 {
        self.adjust(category, 1)
    }

    pub fn decrement(&mut self, category: PassengerCategory) -> u32 {
        self.adjust(category, -1)
    }

    pub fn set_name(
        &mut self,
        category: PassengerCategory,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), BookingError> {
        let names = self.names_mut(category);
        let len = names.len();
        match names.get_mut(index) {
            Some(slot) => {
                *slot = name.into();
                Ok(())
            }
            None => Err(BookingError::SlotOutOfRange {
                category: category.as_str(),
                index,
                len,
            }),
        }
    }
}
