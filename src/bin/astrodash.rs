use astrodash::{
    render, AstroDash, AstroDashError, DashboardState, PhaseSelector, ProviderConfig, ALL_PHASES,
    API_KEY_ENV, BASE_URL_ENV, CITY_ENV, DEFAULT_BASE_URL, DEFAULT_CITY, DEFAULT_DAY_COUNT,
    DEFAULT_START_DATE,
};
use chrono::NaiveDate;
use clap::Parser;

/// Fetch historic weather and moon data for a city, then filter and summarise it.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// WeatherAPI key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: String,

    /// City to query
    #[arg(long, env = CITY_ENV, default_value = DEFAULT_CITY)]
    city: String,

    /// Base URL of the WeatherAPI v1 endpoints
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// First day to fetch (YYYY-MM-DD)
    #[arg(long, default_value_t = DEFAULT_START_DATE)]
    start: NaiveDate,

    /// Number of consecutive days to fetch
    #[arg(long, default_value_t = DEFAULT_DAY_COUNT)]
    days: usize,

    /// Only show dates containing this text
    #[arg(long, default_value = "")]
    date: String,

    /// Only show this exact moon phase
    #[arg(long, default_value = ALL_PHASES)]
    phase: String,

    /// Lowest average temperature to show (°F)
    #[arg(long, default_value_t = 0.0)]
    min: f64,

    /// Highest average temperature to show (°F)
    #[arg(long, default_value_t = 100.0)]
    max: f64,

    /// Print the matching records as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), AstroDashError> {
    env_logger::init();
    let args = Args::parse();

    let config = ProviderConfig::builder()
        .api_key(args.api_key)
        .city(args.city)
        .base_url(args.base_url)
        .build();
    let client = AstroDash::with_config(config);

    let mut dashboard = client
        .load_dashboard()
        .start(args.start)
        .days(args.days)
        .call()
        .await;
    dashboard.set_date_query(args.date);
    dashboard.set_phase(PhaseSelector::from(args.phase.as_str()));
    dashboard.set_temperature_range(args.min, args.max)?;

    match (args.json, dashboard.filtered()) {
        (true, Some(view)) => println!("{}", serde_json::to_string_pretty(&view)?),
        _ => print!("{}", render(&dashboard)),
    }

    if let DashboardState::Failed(_) = dashboard.state() {
        std::process::exit(1);
    }
    Ok(())
}
