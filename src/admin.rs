//! Admin forms for publishing a new promotion or destination. Submissions
//! are simulated: validated, delayed, then confirmed.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BookingError;
use crate::fetch::{self, FetchOptions};
use crate::query;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferDraft {
    pub title: String,
    pub description: String,
    pub discount: String,
    pub code: String,
    pub expiry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationDraft {
    pub name: String,
    pub country: String,
    pub price: String,
    pub image_url: String,
}

fn require(value: &str, field: &'static str) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        return Err(BookingError::MissingField(field));
    }
    Ok(())
}

impl OfferDraft {
    pub fn validate(&self) -> Result<(), BookingError> {
        require(&self.title, "title")?;
        require(&self.description, "description")?;
        require(&self.discount, "discount")?;
        require(&self.code, "code")?;
        require(&self.expiry, "expiry date")?;
        query::parse_date(self.expiry.trim())?;
        Ok(())
    }
}

impl DestinationDraft {
    pub fn validate(&self) -> Result<(), BookingError> {
        require(&self.name, "name")?;
        require(&self.country, "country")?;
        require(&self.price, "price")?;
        require(&self.image_url, "image URL")
    }
}

/// Submits `draft` and returns the confirmation shown to the admin.
pub async fn create_offer(
    draft: &OfferDraft,
    options: &FetchOptions,
) -> Result<String, BookingError> {
    draft.validate()?;
    fetch::simulate_latency(options).await;
    info!(title = %draft.title, code = %draft.code, "offer created");
    Ok(format!(
        "Offer Created: New offer \"{}\" has been added successfully.",
        draft.title.trim()
    ))
}

pub async fn add_destination(
    draft: &DestinationDraft,
    options: &FetchOptions,
) -> Result<String, BookingError> {
    draft.validate()?;
    fetch::simulate_latency(options).await;
    info!(name = %draft.name, country = %draft.country, "destination added");
    Ok(format!(
        "Destination Added: New destination \"{}, {}\" has been added successfully.",
        draft.name.trim(),
        draft.country.trim()
    ))
}
