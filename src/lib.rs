pub mod admin;
pub mod bookings;
pub mod catalog;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod i18n;
pub mod mcp;
pub mod model;
pub mod notify;
pub mod passengers;
pub mod prefs;
pub mod query;
pub mod store;
pub mod support;
pub mod table;

use std::time::Duration;

use error::BookingError;
use fetch::FetchOptions;
use filter::FilterCriteria;
use model::FlightOffer;
use notify::Notifier;
use query::SearchRequest;
use store::ResultStore;

pub const SEARCH_COMPLETED: &str = "Flight search completed!";
pub const NO_FILTER_MATCHES: &str = "No flights match the selected filters.";
pub const SUBSCRIBED: &str = "You've been subscribed to our newsletter!";

const PROGRESS_TICK: Duration = Duration::from_millis(100);
const PROGRESS_STEP: u8 = 8;

pub async fn search(
    request: &SearchRequest,
    options: &FetchOptions,
) -> Result<Vec<FlightOffer>, BookingError> {
    request.validate()?;
    fetch::fetch_offers(request, options).await
}

/// Runs one search through `store` and, when given, applies `criteria` to
/// the fresh results. Progress advances every 100 ms while the fetch is in
/// flight. Returns what the store now displays.
pub async fn search_into(
    store: &mut ResultStore,
    request: &SearchRequest,
    criteria: Option<&FilterCriteria>,
    options: &FetchOptions,
    notifier: &dyn Notifier,
) -> Result<Vec<FlightOffer>, BookingError> {
    request.validate()?;

    let ticket = store.begin_search();
    let pending = fetch::fetch_offers(request, options);
    tokio::pin!(pending);
    let mut ticker = tokio::time::interval(PROGRESS_TICK);
    // the first tick fires immediately
    ticker.tick().await;
    let offers = loop {
        tokio::select! {
            result = &mut pending => break result?,
            _ = ticker.tick() => notifier.progress(store.advance_progress(PROGRESS_STEP)),
        }
    };
    store.complete(ticket, offers);
    notifier.success(SEARCH_COMPLETED);

    if let Some(criteria) = criteria {
        let none_shown = store.apply_filter(criteria).is_empty();
        if none_shown && !store.all().is_empty() {
            notifier.error(NO_FILTER_MATCHES);
        }
    }

    Ok(store.displayed().to_vec())
}
