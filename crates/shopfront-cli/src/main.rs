//! Shopfront CLI
//!
//! Usage:
//!   shopfront clause --color blue --color green --size M --max-price 40
//!   shopfront query --api-url http://localhost:8080 --sort price-asc

use clap::{Args, Parser, Subcommand};
use shopfront_client::{ApiClient, ProductFetcher};
use shopfront_core::{build_clause, ClientConfig, Color, FilterPayload, Size, SortOrder};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Storefront catalog CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Color to select; repeatable (default: all colors)
    #[arg(long = "color")]
    colors: Vec<Color>,

    /// Size to select; repeatable (default: all sizes)
    #[arg(long = "size")]
    sizes: Vec<Size>,

    /// Lower price bound
    #[arg(long, default_value_t = 0.0)]
    min_price: f64,

    /// Upper price bound
    #[arg(long, default_value_t = 100.0)]
    max_price: f64,

    /// Sort order: none, price-asc, price-desc
    #[arg(long, default_value = "none")]
    sort: SortOrder,
}

impl FilterArgs {
    fn payload(&self) -> FilterPayload {
        FilterPayload {
            sort: self.sort,
            color: if self.colors.is_empty() {
                Color::ALL.to_vec()
            } else {
                self.colors.clone()
            },
            size: if self.sizes.is_empty() {
                Size::ALL.to_vec()
            } else {
                self.sizes.clone()
            },
            price: [self.min_price, self.max_price],
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the index filter clause for a filter selection
    Clause {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Query a running shopfront API and print the matches
    Query {
        #[command(flatten)]
        filter: FilterArgs,

        /// Base URL of the shopfront API
        #[arg(long, default_value = "http://localhost:8080")]
        api_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clause { filter } => {
            let clause = build_clause(&filter.payload());
            println!("{}", clause.expression);
        }
        Commands::Query { filter, api_url } => {
            let client = ApiClient::new(&ClientConfig {
                api_url,
                ..ClientConfig::default()
            });

            let matches = client.fetch_products(&filter.payload()).await?;
            if matches.is_empty() {
                println!("No products matched the selected filters.");
                return Ok(());
            }

            for entry in matches {
                match entry.metadata {
                    Some(product) => println!(
                        "{:<24} {:>6.2} $  color={} size={} (score {:.3})",
                        product.name, product.price, product.color, product.size, entry.score
                    ),
                    None => println!("{} (score {:.3}, no metadata)", entry.id, entry.score),
                }
            }
        }
    }

    Ok(())
}
