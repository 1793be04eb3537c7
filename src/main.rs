use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skyvoyage::admin::{self, DestinationDraft, OfferDraft};
use skyvoyage::bookings::{self, BookingLookup, DashboardSummary};
use skyvoyage::catalog;
use skyvoyage::error::BookingError;
use skyvoyage::fetch::{self, FetchOptions};
use skyvoyage::filter::{FilterCriteria, PriceRange};
use skyvoyage::i18n::{Language, Locale};
use skyvoyage::model::FlightOffer;
use skyvoyage::notify::{Notifier, QuietNotifier, StderrNotifier};
use skyvoyage::passengers::{PassengerCategory, PassengerCounts, PassengerSelector};
use skyvoyage::prefs::{self, PreferenceStore};
use skyvoyage::query::{CabinClass, SearchRequest, TripType};
use skyvoyage::store::ResultStore;
use skyvoyage::support;
use skyvoyage::table;

#[derive(Parser)]
#[command(
    name = "skyvoyage",
    about = "Search, filter and browse SkyVoyage flight deals from the terminal",
    version,
    after_help = "\
Examples:
  skyvoyage search -f JFK -t LAX -d 2026-04-01
  skyvoyage search -f JFK -t LAX -d 2026-04-01 --return-date 2026-04-08 --json --pretty
  skyvoyage search -f JFK -t LAX -d 2026-04-01 --min-price 270 --max-price 360
  skyvoyage search -f JFK -t LAX -d 2026-04-01 --stops nonstop --airlines delta,emirates
  skyvoyage offers --expired
  skyvoyage support ask \"How much baggage can I bring?\"
  skyvoyage lang set hi"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Preference file (default: $SKYVOYAGE_PREFS or <config dir>/skyvoyage/prefs.json)"
    )]
    prefs: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Log debug details to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(
        about = "Search for flights and filter the results",
        long_about = "Search for flights between two places on specific dates.\n\
            Results come from the mock SkyVoyage catalog after a simulated network delay.\n\
            Filter flags narrow the displayed results; without them every result is shown.",
        after_help = "\
Examples:
  One-way:      skyvoyage search -f JFK -t LAX -d 2026-04-01
  Round-trip:   skyvoyage search -f JFK -t LAX -d 2026-04-01 --return-date 2026-04-08
  Price band:   skyvoyage search -f JFK -t LAX -d 2026-04-01 --min-price 270 --max-price 360
  Nonstop:      skyvoyage search -f JFK -t LAX -d 2026-04-01 --stops nonstop
  Family:       skyvoyage search -f JFK -t LAX -d 2026-04-01 --adults 2 --children 1 \\
                  --traveler \"adult:Jane Doe\" --traveler \"child:Sam Doe\"
  JSON output:  skyvoyage search -f JFK -t LAX -d 2026-04-01 --json --pretty"
    )]
    Search(SearchArgs),

    #[command(about = "List promotional offers")]
    Offers(OffersArgs),

    #[command(about = "List popular destinations")]
    Destinations(OutputArgs),

    #[command(about = "Find a booking by reference and last name, or by email")]
    Booking(BookingArgs),

    #[command(about = "Subscribe to the deals newsletter")]
    Subscribe(SubscribeArgs),

    #[command(about = "Show or change the interface language")]
    Lang(LangArgs),

    #[command(about = "Ask the support assistant or read the FAQ")]
    Support(SupportArgs),

    #[command(
        about = "Show the admin dashboard summary, or publish an offer or destination",
        after_help = "\
Examples:
  skyvoyage admin --json
  skyvoyage admin add-offer --title \"Autumn Sale\" --description \"Fares to Europe\" \\
    --discount 20% --code AUTUMN20 --expiry 2026-11-30
  skyvoyage admin add-destination --name Rome --country Italy --price '$399' \\
    --image-url https://img.skyvoyage.example/rome.jpg"
    )]
    Admin(AdminArgs),

    #[command(about = "Start MCP server for AI agents (stdio transport)")]
    Mcp,
}

#[derive(clap::Args)]
struct OutputArgs {
    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,
}

impl OutputArgs {
    fn is_json(&self) -> bool {
        self.json || self.pretty
    }
}

#[derive(clap::Args)]
struct SearchArgs {
    #[arg(short, long, value_name = "PLACE", help = "Origin city or airport")]
    from: Option<String>,

    #[arg(short, long, value_name = "PLACE", help = "Destination city or airport")]
    to: Option<String>,

    #[arg(short, long, value_name = "YYYY-MM-DD", help = "Departure date")]
    date: Option<String>,

    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Return date (auto-sets round-trip)"
    )]
    return_date: Option<String>,

    #[arg(
        long,
        default_value = "one-way",
        value_name = "TYPE",
        help = "Trip type [one-way, round-trip]"
    )]
    trip: String,

    #[arg(
        long,
        default_value = "economy",
        value_name = "CLASS",
        help = "Cabin class [economy, premium-economy, business, first]"
    )]
    cabin: String,

    #[arg(long, default_value = "1", value_name = "N", help = "Adults (18+), 1-9")]
    adults: u32,

    #[arg(long, default_value = "0", value_name = "N", help = "Children (2-17), 0-9")]
    children: u32,

    #[arg(long, default_value = "0", value_name = "N", help = "Infants (0-2), 0-9")]
    infants: u32,

    #[arg(long, default_value = "0", value_name = "N", help = "Seniors (65+), 0-9")]
    seniors: u32,

    #[arg(
        long,
        value_name = "CATEGORY:NAME",
        help = "Traveler name for the next free slot (repeatable)",
        num_args = 1
    )]
    traveler: Vec<String>,

    #[arg(long, value_name = "N", help = "Lowest price to show")]
    min_price: Option<u64>,

    #[arg(long, value_name = "N", help = "Highest price to show")]
    max_price: Option<u64>,

    #[arg(
        long,
        value_name = "delta,united,...",
        help = "Only these airlines (ids or names, comma-separated)"
    )]
    airlines: Option<String>,

    #[arg(
        long,
        value_name = "nonstop,1stop,2stops",
        help = "Only these stop categories (comma-separated)"
    )]
    stops: Option<String>,

    #[arg(
        long,
        value_name = "morning,afternoon,...",
        help = "Departure times (accepted, not yet applied)"
    )]
    times: Option<String>,

    #[arg(long, value_name = "N", help = "Show only the N cheapest results")]
    top: Option<usize>,

    #[arg(long, help = "One-line-per-flight output")]
    compact: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[arg(
        long,
        default_value = "1500",
        value_name = "MS",
        help = "Simulated search latency"
    )]
    delay_ms: u64,
}

#[derive(clap::Args)]
struct OffersArgs {
    #[arg(long, help = "Show expired offers instead of active ones")]
    expired: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args)]
struct BookingArgs {
    #[arg(long, value_name = "REF", requires = "last_name", help = "Booking reference")]
    reference: Option<String>,

    #[arg(long, value_name = "NAME", help = "Last name on the booking")]
    last_name: Option<String>,

    #[arg(long, value_name = "EMAIL", conflicts_with = "reference", help = "Email used for the booking")]
    email: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args)]
struct SubscribeArgs {
    #[arg(long, value_name = "EMAIL", help = "Address to subscribe")]
    email: String,

    #[arg(
        long,
        default_value = "1000",
        value_name = "MS",
        help = "Simulated request latency"
    )]
    delay_ms: u64,
}

#[derive(clap::Args)]
struct LangArgs {
    #[command(subcommand)]
    action: Option<LangAction>,
}

#[derive(clap::Subcommand)]
enum LangAction {
    #[command(about = "Print the saved language")]
    Show,
    #[command(about = "Save a new language [en, hi, ur, te]")]
    Set { code: String },
    #[command(about = "List supported languages")]
    List,
}

#[derive(clap::Args)]
struct SupportArgs {
    #[command(subcommand)]
    action: Option<SupportAction>,
}

#[derive(clap::Subcommand)]
enum SupportAction {
    #[command(about = "Ask a question (cancellation, baggage, check-in, changes)")]
    Ask {
        #[arg(value_name = "MESSAGE")]
        message: String,

        #[arg(
            long,
            default_value = "1000",
            value_name = "MS",
            help = "Simulated typing delay"
        )]
        delay_ms: u64,
    },
    #[command(about = "List frequently asked questions")]
    Faq(OutputArgs),
}

#[derive(clap::Args)]
struct AdminArgs {
    #[command(subcommand)]
    action: Option<AdminAction>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Subcommand)]
enum AdminAction {
    #[command(about = "Publish a new promotional offer")]
    AddOffer(AddOfferArgs),
    #[command(about = "Add a popular destination")]
    AddDestination(AddDestinationArgs),
}

#[derive(clap::Args)]
struct AddOfferArgs {
    #[arg(long, help = "Offer title")]
    title: String,

    #[arg(long, help = "Short description")]
    description: String,

    #[arg(long, value_name = "PERCENT", help = "Discount label, e.g. 15%")]
    discount: String,

    #[arg(long, help = "Promo code")]
    code: String,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Expiry date")]
    expiry: String,

    #[arg(
        long,
        default_value = "1000",
        value_name = "MS",
        help = "Simulated request latency"
    )]
    delay_ms: u64,
}

#[derive(clap::Args)]
struct AddDestinationArgs {
    #[arg(long, help = "City name")]
    name: String,

    #[arg(long, help = "Country")]
    country: String,

    #[arg(long, value_name = "PRICE", help = "Starting price, e.g. $299")]
    price: String,

    #[arg(long, value_name = "URL", help = "Image URL")]
    image_url: String,

    #[arg(
        long,
        default_value = "1000",
        value_name = "MS",
        help = "Simulated request latency"
    )]
    delay_ms: u64,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    total: usize,
    shown: usize,
    passengers: &'a PassengerSelector,
    offers: &'a [FlightOffer],
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn error_code(err: &BookingError) -> i32 {
    match err {
        BookingError::MissingField(_)
        | BookingError::InvalidDate(_)
        | BookingError::InvalidPassengers(_)
        | BookingError::InvalidEmail(_)
        | BookingError::InvalidLanguage(_)
        | BookingError::InvalidToken { .. }
        | BookingError::SlotOutOfRange { .. }
        | BookingError::Validation(_) => 2,
        BookingError::Preferences(_) => 5,
        BookingError::Serialization(_) => 6,
    }
}

fn error_kind(err: &BookingError) -> &'static str {
    match err {
        BookingError::MissingField(_) => "missing_field",
        BookingError::InvalidDate(_) => "invalid_date",
        BookingError::InvalidPassengers(_) => "invalid_passengers",
        BookingError::InvalidEmail(_) => "invalid_email",
        BookingError::InvalidLanguage(_) => "invalid_language",
        BookingError::InvalidToken { .. } => "invalid_token",
        BookingError::SlotOutOfRange { .. } => "invalid_traveler",
        BookingError::Validation(_) => "validation_error",
        BookingError::Preferences(_) => "preferences_error",
        BookingError::Serialization(_) => "serialization_error",
    }
}

fn die(err: &BookingError, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.to_string(),
            }
        });
        println!("{json}");
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, BookingError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

fn load_locale(path: &std::path::Path) -> Locale {
    match PreferenceStore::open(path) {
        Ok(store) => Locale::new(store.language()),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to English");
            Locale::default()
        }
    }
}

fn determine_trip(args: &SearchArgs) -> Result<TripType, BookingError> {
    if args.return_date.is_some() {
        return Ok(TripType::RoundTrip);
    }
    TripType::from_str_loose(&args.trip)
}

fn build_request(args: &SearchArgs) -> Result<SearchRequest, BookingError> {
    let request = SearchRequest {
        trip: determine_trip(args)?,
        origin: args.from.clone().unwrap_or_default(),
        destination: args.to.clone().unwrap_or_default(),
        depart_date: args.date.clone().unwrap_or_default(),
        return_date: args.return_date.clone(),
        passengers: PassengerCounts {
            adults: args.adults,
            children: args.children,
            infants: args.infants,
            seniors: args.seniors,
        },
        cabin: CabinClass::from_str_loose(&args.cabin)?,
    };
    request.validate()?;
    Ok(request)
}

fn build_selector(args: &SearchArgs, counts: PassengerCounts) -> Result<PassengerSelector, BookingError> {
    let mut selector = PassengerSelector::new(counts);
    let mut next = [0usize; 4];

    for entry in &args.traveler {
        let (category, name) = entry.split_once(':').ok_or_else(|| {
            BookingError::Validation(format!(
                "--traveler must be \"CATEGORY:NAME\", got: \"{entry}\""
            ))
        })?;
        let category = PassengerCategory::from_str_loose(category)?;
        let slot = PassengerCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0);
        selector.set_name(category, next[slot], name.trim())?;
        next[slot] += 1;
    }

    Ok(selector)
}

fn build_criteria(args: &SearchArgs) -> Result<Option<FilterCriteria>, BookingError> {
    let any = args.min_price.is_some()
        || args.max_price.is_some()
        || args.airlines.is_some()
        || args.stops.is_some()
        || args.times.is_some();
    if !any {
        return Ok(None);
    }

    let range = PriceRange::new(
        args.min_price.unwrap_or(PriceRange::UNBOUNDED.min),
        args.max_price.unwrap_or(PriceRange::UNBOUNDED.max),
    );
    FilterCriteria::from_tokens(
        range,
        args.airlines.as_deref(),
        args.stops.as_deref(),
        args.times.as_deref(),
    )
    .map(Some)
}

fn known_airlines() -> String {
    let names: Vec<String> = catalog::AIRLINE_OPTIONS
        .iter()
        .map(|(id, name)| format!("{id} ({name})"))
        .collect();
    format!("Known airlines: {}", names.join(", "))
}

fn apply_top(offers: &mut Vec<FlightOffer>, n: usize) {
    offers.sort_by_key(FlightOffer::price_value);
    offers.truncate(n);
}

async fn run_search(args: SearchArgs, locale: Locale) -> Result<(), BookingError> {
    let json_mode = args.json || args.pretty;

    let request = build_request(&args)?;
    let selector = build_selector(&args, request.passengers)?;
    let criteria = build_criteria(&args)?;

    let notifier: Box<dyn Notifier> = if json_mode {
        Box::new(QuietNotifier)
    } else {
        Box::new(StderrNotifier)
    };

    let mut store = ResultStore::new();
    let options = FetchOptions {
        delay_ms: args.delay_ms,
    };
    let mut offers = skyvoyage::search_into(
        &mut store,
        &request,
        criteria.as_ref(),
        &options,
        notifier.as_ref(),
    )
    .await?;

    if let Some(n) = args.top {
        apply_top(&mut offers, n);
    }

    if json_mode {
        let output = SearchOutput {
            total: store.all().len(),
            shown: offers.len(),
            passengers: &selector,
            offers: &offers,
        };
        println!("{}", to_json(&output, args.pretty)?);
        return Ok(());
    }

    if offers.is_empty() {
        println!("No flights found. Try adjusting your filters or search criteria.");
        if args.airlines.is_some() {
            println!("{}", known_airlines());
        }
        return Ok(());
    }

    if args.compact {
        for offer in &offers {
            println!("{}", table::compact_line(offer));
        }
    } else {
        println!(
            "{} of {} flights · {}",
            offers.len(),
            store.all().len(),
            selector.label()
        );
        println!("{}", table::render_offers(&offers, &locale));
    }
    Ok(())
}

fn run_offers(args: &OffersArgs) -> Result<(), BookingError> {
    let promotions = if args.expired {
        catalog::expired_promotions()
    } else {
        catalog::active_promotions()
    };
    if args.output.is_json() {
        println!("{}", to_json(&promotions, args.output.pretty)?);
    } else {
        println!("{}", table::render_promotions(&promotions));
    }
    Ok(())
}

fn run_destinations(args: &OutputArgs) -> Result<(), BookingError> {
    let destinations = catalog::destinations();
    if args.is_json() {
        println!("{}", to_json(&destinations, args.pretty)?);
    } else {
        println!("{}", table::render_destinations(&destinations));
    }
    Ok(())
}

fn run_booking(args: &BookingArgs, locale: &Locale) -> Result<(), BookingError> {
    let lookup = match (&args.reference, &args.last_name, &args.email) {
        (Some(reference), Some(last_name), None) => BookingLookup::Reference {
            reference: reference.clone(),
            last_name: last_name.clone(),
        },
        (None, _, Some(email)) => BookingLookup::Email {
            email: email.clone(),
        },
        _ => {
            return Err(BookingError::Validation(
                "provide --reference with --last-name, or --email".into(),
            ))
        }
    };

    let found = bookings::find_bookings(&catalog::bookings(), &lookup);
    if args.output.is_json() {
        println!("{}", to_json(&found, args.output.pretty)?);
    } else if found.is_empty() {
        println!("No booking found. Check the details and try again.");
    } else {
        println!("{}", table::render_bookings(&found, locale));
    }
    Ok(())
}

async fn run_subscribe(args: &SubscribeArgs) -> Result<(), BookingError> {
    let options = FetchOptions {
        delay_ms: args.delay_ms,
    };
    fetch::subscribe(&args.email, &options).await?;
    StderrNotifier.success(skyvoyage::SUBSCRIBED);
    Ok(())
}

fn run_lang(args: &LangArgs, prefs_path: &std::path::Path) -> Result<(), BookingError> {
    match &args.action {
        None | Some(LangAction::Show) => {
            let store = PreferenceStore::open(prefs_path)?;
            let language = store.language();
            println!("{} ({})", language.code(), language.native_name());
        }
        Some(LangAction::Set { code }) => {
            let language = Language::from_code(code)?;
            let mut store = PreferenceStore::open(prefs_path)?;
            store.set_language(language)?;
            println!("{} ({})", language.code(), language.native_name());
        }
        Some(LangAction::List) => {
            for language in Language::ALL {
                println!("{}  {}", language.code(), language.native_name());
            }
        }
    }
    Ok(())
}

async fn run_support(args: &SupportArgs, locale: &Locale) -> Result<(), BookingError> {
    match &args.action {
        None => {
            println!("{}", support::greeting(locale.language()));
            println!("Try: skyvoyage support ask \"How do I cancel my booking?\"");
        }
        Some(SupportAction::Ask { message, delay_ms }) => {
            let options = FetchOptions {
                delay_ms: *delay_ms,
            };
            println!("{}", support::ask(message, &options).await?);
        }
        Some(SupportAction::Faq(output)) => {
            let faqs = support::faqs();
            if output.is_json() {
                println!("{}", to_json(&faqs, output.pretty)?);
            } else {
                println!("{}", table::render_faqs(&faqs));
            }
        }
    }
    Ok(())
}

async fn run_admin(args: AdminArgs) -> Result<(), BookingError> {
    match args.action {
        None => {
            let summary =
                DashboardSummary::compute(&catalog::admin_users(), &catalog::bookings());
            if args.output.is_json() {
                println!("{}", to_json(&summary, args.output.pretty)?);
            } else {
                println!("{}", table::render_dashboard(&summary));
            }
        }
        Some(AdminAction::AddOffer(a)) => {
            let draft = OfferDraft {
                title: a.title,
                description: a.description,
                discount: a.discount,
                code: a.code,
                expiry: a.expiry,
            };
            let options = FetchOptions { delay_ms: a.delay_ms };
            let message = admin::create_offer(&draft, &options).await?;
            StderrNotifier.success(&message);
        }
        Some(AdminAction::AddDestination(a)) => {
            let draft = DestinationDraft {
                name: a.name,
                country: a.country,
                price: a.price,
                image_url: a.image_url,
            };
            let options = FetchOptions { delay_ms: a.delay_ms };
            let message = admin::add_destination(&draft, &options).await?;
            StderrNotifier.success(&message);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let prefs_path = prefs::resolve_path(cli.prefs.as_deref());
    let locale = load_locale(&prefs_path);

    let (result, json_mode) = match cli.command {
        Commands::Mcp => {
            skyvoyage::mcp::run().await;
            return;
        }
        Commands::Search(args) => {
            let json_mode = args.json || args.pretty;
            (run_search(args, locale).await, json_mode)
        }
        Commands::Offers(args) => (run_offers(&args), args.output.is_json()),
        Commands::Destinations(args) => (run_destinations(&args), args.is_json()),
        Commands::Booking(args) => (run_booking(&args, &locale), args.output.is_json()),
        Commands::Subscribe(args) => (run_subscribe(&args).await, false),
        Commands::Lang(args) => (run_lang(&args, &prefs_path), false),
        Commands::Support(args) => {
            let json_mode = matches!(&args.action, Some(SupportAction::Faq(o)) if o.is_json());
            (run_support(&args, &locale).await, json_mode)
        }
        Commands::Admin(args) => {
            let json_mode = args.output.is_json();
            (run_admin(args).await, json_mode)
        }
    };

    if let Err(e) = result {
        die(&e, json_mode);
    }
}
