use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::BookingError;
use crate::fetch::FetchOptions;
use crate::filter::{FilterCriteria, PriceRange};
use crate::model::{parse_price, FlightOffer};
use crate::notify::QuietNotifier;
use crate::passengers::PassengerCounts;
use crate::query::{CabinClass, SearchRequest, TripType};
use crate::store::ResultStore;
use crate::support;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct SearchArgs {
    #[schemars(description = "Origin city or airport. Example: New York (JFK)")]
    from: String,
    #[schemars(description = "Destination city or airport. Example: Los Angeles (LAX)")]
    to: String,
    #[schemars(description = "Departure date in YYYY-MM-DD format. Example: 2026-03-01")]
    date: String,
    #[schemars(
        description = "Return date in YYYY-MM-DD for round-trip. Auto-sets trip type to round-trip"
    )]
    return_date: Option<String>,
    #[schemars(
        description = "One of: economy, premium-economy, business, first. Default: economy"
    )]
    cabin: Option<String>,
    #[schemars(description = "Adult passengers (18+), 1-9. Default: 1")]
    adults: Option<u32>,
    #[schemars(description = "Child passengers (2-17), 0-9. Default: 0")]
    children: Option<u32>,
    #[schemars(description = "Infants (0-2), 0-9. Default: 0")]
    infants: Option<u32>,
    #[schemars(description = "Seniors (65+), 0-9. Default: 0")]
    seniors: Option<u32>,
    #[schemars(description = "Lowest price to include, in dollars")]
    min_price: Option<u64>,
    #[schemars(description = "Highest price to include, in dollars")]
    max_price: Option<u64>,
    #[schemars(description = "Airline ids or names, comma-separated. Example: delta,emirates")]
    airlines: Option<String>,
    #[schemars(description = "Stop categories, comma-separated: nonstop, 1stop, 2stops")]
    stops: Option<String>,
    #[schemars(description = "Return only N cheapest results")]
    top: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct OffersArgs {
    #[schemars(description = "true for expired offers, false or omitted for active ones")]
    expired: Option<bool>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct DestinationsArgs {
    #[schemars(description = "Only destinations whose starting price is at most this many dollars")]
    max_price: Option<u64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct SupportArgs {
    #[schemars(
        description = "Customer question. Omit to get the FAQ list instead. Example: How much luggage can I bring?"
    )]
    message: Option<String>,
}

#[derive(Serialize)]
struct SupportReply {
    reply: &'static str,
}

#[derive(Serialize)]
struct SearchReply {
    total: usize,
    offers: Vec<FlightOffer>,
}

fn tool_error(msg: impl Into<String>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg.into())]))
}

fn json_reply<T: Serialize + ?Sized>(value: &T) -> Result<CallToolResult, McpError> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Ok(CallToolResult::success(vec![Content::text(json)])),
        Err(e) => tool_error(BookingError::from(e).to_string()),
    }
}

fn build_request(args: &SearchArgs) -> Result<SearchRequest, BookingError> {
    let cabin = args
        .cabin
        .as_deref()
        .map(CabinClass::from_str_loose)
        .transpose()?
        .unwrap_or(CabinClass::Economy);

    Ok(SearchRequest {
        trip: if args.return_date.is_some() {
            TripType::RoundTrip
        } else {
            TripType::OneWay
        },
        origin: args.from.clone(),
        destination: args.to.clone(),
        depart_date: args.date.clone(),
        return_date: args.return_date.clone(),
        passengers: PassengerCounts {
            adults: args.adults.unwrap_or(1),
            children: args.children.unwrap_or(0),
            infants: args.infants.unwrap_or(0),
            seniors: args.seniors.unwrap_or(0),
        },
        cabin,
    })
}

fn build_criteria(args: &SearchArgs) -> Result<FilterCriteria, BookingError> {
    let range = PriceRange::new(
        args.min_price.unwrap_or(PriceRange::UNBOUNDED.min),
        args.max_price.unwrap_or(PriceRange::UNBOUNDED.max),
    );
    FilterCriteria::from_tokens(range, args.airlines.as_deref(), args.stops.as_deref(), None)
}

fn apply_top(offers: &mut Vec<FlightOffer>, n: usize) {
    offers.sort_by_key(FlightOffer::price_value);
    offers.truncate(n);
}

#[derive(Debug, Clone)]
struct SkyVoyageMcp {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SkyVoyageMcp {
    fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search SkyVoyage flights and return the matching offers as JSON. Optional price, airline and stop filters narrow the results; omit them to get every offer. Each offer carries airline, departure/arrival times and airports, duration, stop details, display price and remaining seats."
    )]
    async fn skyvoyage_search(
        &self,
        Parameters(args): Parameters<SearchArgs>,
    ) -> Result<CallToolResult, McpError> {
        let request = match build_request(&args) {
            Ok(r) => r,
            Err(e) => return tool_error(e.to_string()),
        };
        let criteria = match build_criteria(&args) {
            Ok(c) => c,
            Err(e) => return tool_error(e.to_string()),
        };

        let mut store = ResultStore::new();
        let result = crate::search_into(
            &mut store,
            &request,
            Some(&criteria),
            &FetchOptions::instant(),
            &QuietNotifier,
        )
        .await;

        match result {
            Ok(mut offers) => {
                if let Some(n) = args.top {
                    apply_top(&mut offers, n);
                }
                json_reply(&SearchReply {
                    total: store.all().len(),
                    offers,
                })
            }
            Err(e) => tool_error(e.to_string()),
        }
    }

    #[tool(description = "List SkyVoyage promotional offers with discount, promo code and validity.")]
    async fn skyvoyage_offers(
        &self,
        Parameters(args): Parameters<OffersArgs>,
    ) -> Result<CallToolResult, McpError> {
        let promotions = if args.expired.unwrap_or(false) {
            catalog::expired_promotions()
        } else {
            catalog::active_promotions()
        };
        json_reply(&promotions)
    }

    #[tool(description = "List popular SkyVoyage destinations with their starting prices.")]
    async fn skyvoyage_destinations(
        &self,
        Parameters(args): Parameters<DestinationsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let destinations: Vec<_> = catalog::destinations()
            .into_iter()
            .filter(|d| args.max_price.is_none_or(|max| parse_price(&d.price) <= max))
            .collect();
        json_reply(&destinations)
    }

    #[tool(
        description = "Ask the SkyVoyage support assistant about cancellations, refunds, baggage, check-in or flight changes. Without a message, returns the FAQ list."
    )]
    async fn skyvoyage_support(
        &self,
        Parameters(args): Parameters<SupportArgs>,
    ) -> Result<CallToolResult, McpError> {
        match args.message.as_deref().map(str::trim) {
            Some("") => tool_error(BookingError::MissingField("message").to_string()),
            Some(message) => json_reply(&SupportReply {
                reply: support::reply(message),
            }),
            None => json_reply(&support::faqs()),
        }
    }
}

#[tool_handler]
impl ServerHandler for SkyVoyageMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "skyvoyage".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "SkyVoyage flight deals. Use skyvoyage_search to find and filter flights, skyvoyage_offers for promo codes, skyvoyage_destinations for popular routes and skyvoyage_support for help with bookings.".into(),
            ),
        }
    }
}

pub async fn run() {
    let service = match SkyVoyageMcp::new().serve(rmcp::transport::stdio()).await {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(error = %e, "failed to start MCP server");
            return;
        }
    };
    if let Err(e) = service.waiting().await {
        tracing::error!(error = %e, "MCP server error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SearchArgs {
        SearchArgs {
            from: "New York".into(),
            to: "Los Angeles".into(),
            date: "2026-03-01".into(),
            return_date: None,
            cabin: None,
            adults: None,
            children: None,
            infants: None,
            seniors: None,
            min_price: None,
            max_price: None,
            airlines: None,
            stops: None,
            top: None,
        }
    }

    #[test]
    fn build_request_defaults() {
        let request = build_request(&args()).unwrap();
        assert_eq!(request.trip, TripType::OneWay);
        assert_eq!(request.cabin, CabinClass::Economy);
        assert_eq!(request.passengers, PassengerCounts::default());
    }

    #[test]
    fn build_request_with_return_date_is_round_trip() {
        let mut a = args();
        a.return_date = Some("2026-03-08".into());
        let request = build_request(&a).unwrap();
        assert_eq!(request.trip, TripType::RoundTrip);
    }

    #[test]
    fn build_request_rejects_unknown_cabin() {
        let mut a = args();
        a.cabin = Some("luxury".into());
        assert!(build_request(&a).is_err());
    }

    #[test]
    fn build_criteria_without_filters_is_identity() {
        assert!(build_criteria(&args()).unwrap().is_identity());
    }
}
