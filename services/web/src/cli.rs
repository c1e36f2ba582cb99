use crate::routes::HomeSnapshot;
use crate::server;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use crimedb_home::config::{AppConfig, BackendConfig};
use crimedb_home::error::AppError;
use crimedb_home::home::{render_text, HomePage};
use crimedb_home::stats::HttpStatsClient;
use crimedb_home::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "CrimeDB Home",
    about = "Serve or print the CrimeDB landing page",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Fetch the dashboard once and print it to stdout
    Home(HomeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the CrimeDB backend base URL
    #[arg(long)]
    pub(crate) api_url: Option<String>,
}

#[derive(Args, Debug)]
struct HomeArgs {
    /// Override the CrimeDB backend base URL
    #[arg(long)]
    api_url: Option<String>,
    /// Print the view state as JSON instead of text
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Home(args) => run_home(args).await,
    }
}

pub(crate) fn apply_api_url(
    config: &mut AppConfig,
    api_url: Option<String>,
) -> Result<(), AppError> {
    if let Some(url) = api_url {
        config.backend.base_url = BackendConfig::normalize_base_url(&url)?;
    }
    Ok(())
}

async fn run_home(args: HomeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    apply_api_url(&mut config, args.api_url)?;
    telemetry::init(&config.telemetry)?;

    let client = HttpStatsClient::new(&config.backend)?;
    let mut page = HomePage::new();
    page.load(&client).await;

    if args.json {
        let snapshot = HomeSnapshot::from(&page);
        let rendered = serde_json::to_string_pretty(&snapshot).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_text(&page, Utc::now()));
    }
    Ok(())
}
