//! Currency Converter CLI
//!
//! Presentation layer for the conversion service: renders the supported
//! currency listing and conversion results or error strings as terminal
//! text. All validation lives in the service; amount and currency
//! arguments pass through as the user typed them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_core::ConversionService;
use converter_rates::{DEFAULT_BASE_URL, ExchangeRateApi};
use converter_types::{ConversionInput, ConvertError};

#[derive(Parser)]
#[command(name = "currency-converter")]
#[command(author, version, about = "Convert between currencies using live exchange rates", long_about = None)]
struct Cli {
    /// exchangerate-api.com API key
    #[arg(long, env = "EXCHANGE_RATE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the exchange rate API
    #[arg(long, env = "EXCHANGE_RATE_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the currencies the rate service supports
    Currencies,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        #[arg(long)]
        amount: String,
        /// Source currency code (e.g. USD)
        #[arg(long)]
        from: String,
        /// Target currency code (e.g. EUR)
        #[arg(long)]
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,converter_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::debug!("using rate endpoint {}", cli.api_url);

    let provider = ExchangeRateApi::with_base_url(&cli.api_url, &cli.api_key);
    let service = ConversionService::new(provider);

    match cli.command {
        Commands::Currencies => match service.initialize_currencies().await {
            Ok(currencies) => {
                for code in currencies {
                    println!("{code}");
                }
            }
            Err(e) => render_error(e),
        },
        Commands::Convert { amount, from, to } => {
            match service.convert(ConversionInput::new(amount, from, to)).await {
                Ok(result) => println!("{result}"),
                Err(e) => render_error(e),
            }
        }
    }

    Ok(())
}

/// Every service error becomes display text and a non-zero exit,
/// never a panic or a backtrace.
fn render_error(err: ConvertError) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
