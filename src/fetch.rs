use std::time::Duration;

use tracing::debug;

use crate::catalog;
use crate::error::BookingError;
use crate::model::FlightOffer;
use crate::query::SearchRequest;

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub delay_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

impl FetchOptions {
    pub fn instant() -> Self {
        Self { delay_ms: 0 }
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Waits out the configured delay; a zero delay returns at once.
pub async fn simulate_latency(options: &FetchOptions) {
    if options.delay_ms > 0 {
        tokio::time::sleep(options.delay()).await;
    }
}

/// Stands in for the flight search API: waits out the configured delay and
/// returns the mock offer list. The result does not depend on the route.
pub async fn fetch_offers(
    request: &SearchRequest,
    options: &FetchOptions,
) -> Result<Vec<FlightOffer>, BookingError> {
    debug!(
        origin = %request.origin,
        destination = %request.destination,
        delay_ms = options.delay_ms,
        "fetching offers"
    );
    simulate_latency(options).await;
    Ok(catalog::flight_offers())
}

fn validate_email(email: &str) -> Result<(), BookingError> {
    let trimmed = email.trim();
    let valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        });
    if !valid || trimmed.contains(char::is_whitespace) {
        return Err(BookingError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Simulated newsletter sign-up.
pub async fn subscribe(email: &str, options: &FetchOptions) -> Result<(), BookingError> {
    validate_email(email)?;
    debug!(email, "subscribing to newsletter");
    simulate_latency(options).await;
    Ok(())
}
