//! Mortgage Desk CLI
//!
//! Command-line access to the dashboard views:
//! - Server status
//! - Overview distributions
//! - Deal lookup and processing order
//! - Eligibility simulation
//!
//! Talks to a running server by default; `--offline <csv>` evaluates the
//! views locally against a deal table instead.

use clap::{Parser, Subcommand};
use mortgage_desk::analytics::{Overview, Summary};
use mortgage_desk::api::dto::{DealListResponse, LookupResponse, RankedDeal, SimulationResponse};
use mortgage_desk::config::Config;
use mortgage_desk::deals::{DealResult, DealTable};
use mortgage_desk::lookup::{self, LookupRequest};
use mortgage_desk::simulator::{SimulationRequest, Simulator};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mortgage-desk-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query the Mortgage Desk dashboard from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8050", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Evaluate against a local CSV instead of the server
    #[arg(long, global = true)]
    pub offline: Option<PathBuf>,

    /// Config file for offline mode (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Income multiplier for offline simulation, overrides [simulator]
    #[arg(long, global = true)]
    pub income_multiplier: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show server status
    Status,

    /// Show price and churn distributions
    Overview {
        /// Histogram bins
        #[arg(short, long)]
        bins: Option<usize>,
    },

    /// Look up one deal
    Lookup {
        /// Deal id (row index)
        id: i64,
    },

    /// Check eligibility for a hypothetical application
    Simulate {
        /// Property price (millions)
        #[arg(long)]
        price: Option<f64>,
        /// Monthly income (thousands)
        #[arg(long)]
        income: Option<f64>,
        /// Deal priority
        #[arg(long)]
        priority: Option<f64>,
    },

    /// List deals in processing order
    Top {
        #[arg(short, long, default_value = "20")]
        limit: usize,
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where view data comes from
enum Source {
    Remote {
        client: reqwest::Client,
        api_url: String,
    },
    Offline {
        table: DealTable,
        simulator: Simulator,
    },
}

impl Source {
    async fn get(&self, path: &str) -> Result<Value, Box<dyn std::error::Error>> {
        let Source::Remote { client, api_url } = self else {
            return Err("not connected to a server".into());
        };

        let response = client.get(format!("{}{}", api_url, path)).send().await?;
        read_response(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, Box<dyn std::error::Error>> {
        let Source::Remote { client, api_url } = self else {
            return Err("not connected to a server".into());
        };

        let response = client
            .post(format!("{}{}", api_url, path))
            .json(body)
            .send()
            .await?;
        read_response(response).await
    }
}

/// Offline source reading the table with the configured column names
fn offline_source(path: &Path, config: &Config, income_multiplier: Option<f64>) -> DealResult<Source> {
    Ok(Source::Offline {
        table: DealTable::load(path, &config.data.columns)?,
        simulator: Simulator::new(income_multiplier.unwrap_or(config.simulator.income_multiplier)),
    })
}

async fn read_response(response: reqwest::Response) -> Result<Value, Box<dyn std::error::Error>> {
    if !response.status().is_success() {
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body["error"]["message"].as_str().unwrap_or("unknown error");
        return Err(format!("request failed ({}): {}", status, message).into());
    }
    Ok(response.json().await?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let source = match &cli.offline {
        Some(path) => {
            let config = mortgage_desk::logging::with_bootstrap(|| match &cli.config {
                Some(config_path) => Config::load_with_env(config_path),
                None => Ok(Config::load_default()),
            })?;
            offline_source(path, &config, cli.income_multiplier)?
        }
        None => Source::Remote {
            client: reqwest::Client::new(),
            api_url: cli.api_url.trim_end_matches('/').to_string(),
        },
    };

    let json = cli.format == "json";

    match cli.command {
        Commands::Status => match &source {
            Source::Offline { table, .. } => {
                let info = table.info();
                println!("Mortgage Desk v{} (offline)", env!("CARGO_PKG_VERSION"));
                println!();
                println!("Source: {}", info.source);
                println!("Deals:  {}", info.rows);
            }
            Source::Remote { api_url, .. } => match source.get("/health").await {
                Ok(health) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }
                    println!("Mortgage Desk v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("API Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Source:     {}", health["source"].as_str().unwrap_or("-"));
                    println!("Deals:      {}", health["rows"].as_u64().unwrap_or(0));
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime:     {}", format_duration(uptime));
                    }
                }
                Err(e) => {
                    eprintln!("Cannot reach Mortgage Desk API at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin mortgage-desk -- --data <deals.csv>");
                    std::process::exit(1);
                }
            },
        },

        Commands::Overview { bins } => {
            let data = match &source {
                Source::Offline { table, .. } => serde_json::to_value(Overview::compute(table, bins))?,
                Source::Remote { .. } => {
                    let path = match bins {
                        Some(b) => format!("/api/v1/overview?bins={}", b),
                        None => "/api/v1/overview".to_string(),
                    };
                    source.get(&path).await?
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                let overview: OverviewView = serde_json::from_value(data)?;
                println!("Deals: {}", overview.rows);
                print_distribution(&overview.price);
                print_distribution(&overview.churn);
            }
        }

        Commands::Lookup { id } => {
            let data = match &source {
                Source::Offline { table, .. } => serde_json::to_value(LookupResponse::from(
                    lookup::lookup(table, &LookupRequest::triggered(id)),
                ))?,
                Source::Remote { .. } => {
                    source
                        .get(&format!("/api/v1/deals/lookup?deal_id={}&n_clicks=1", id))
                        .await?
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else if data["status"] == "found" {
                println!("Deal {}", data["id"]);
                println!("  Property price:      {:.4} M", data["price"].as_f64().unwrap_or(f64::NAN));
                println!("  Churn probability:   {:.4}", data["churn"].as_f64().unwrap_or(f64::NAN));
                println!(
                    "  Priority rank:       {} of {}",
                    data["rank"],
                    data["total"]
                );
            } else {
                println!("{}", data["message"].as_str().unwrap_or(""));
            }
        }

        Commands::Simulate {
            price,
            income,
            priority,
        } => {
            let request = SimulationRequest {
                price,
                income,
                priority,
                n_clicks: Some(1),
            };

            let data = match &source {
                Source::Offline { simulator, .. } => {
                    let outcome = simulator.simulate(&request);
                    serde_json::to_value(SimulationResponse {
                        outcome,
                        message: outcome.message().map(str::to_string),
                        income_multiplier: simulator.income_multiplier(),
                    })?
                }
                Source::Remote { .. } => {
                    source
                        .post("/api/v1/simulate", &serde_json::to_value(request)?)
                        .await?
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}", data["message"].as_str().unwrap_or(""));
            }
        }

        Commands::Top { limit, offset } => {
            let data = match &source {
                Source::Offline { table, .. } => {
                    let deals = table
                        .page(offset, limit)
                        .into_iter()
                        .map(|(rank, deal)| RankedDeal::new(rank, deal))
                        .collect();
                    serde_json::to_value(DealListResponse {
                        total: table.len(),
                        offset,
                        limit,
                        deals,
                    })?
                }
                Source::Remote { .. } => {
                    source
                        .get(&format!("/api/v1/deals?offset={}&limit={}", offset, limit))
                        .await?
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                let list: DealListResponse = serde_json::from_value(data)?;
                print_deals(&list);
            }
        }

        Commands::Config { output } => {
            let content = mortgage_desk::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Client-side view of the overview payload
#[derive(serde::Deserialize)]
struct OverviewView {
    rows: usize,
    price: DistributionView,
    churn: DistributionView,
}

#[derive(serde::Deserialize)]
struct DistributionView {
    title: String,
    summary: Summary,
    histogram: HistogramView,
}

#[derive(serde::Deserialize)]
struct HistogramView {
    bins: Vec<BinView>,
}

#[derive(serde::Deserialize)]
struct BinView {
    start: f64,
    end: f64,
    count: usize,
}

fn print_distribution(dist: &DistributionView) {
    println!();
    println!("{}", dist.title);
    println!("{}", "-".repeat(dist.title.len()));

    let fmt = |v: Option<f64>| v.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".into());
    println!(
        "count={} mean={} median={} min={} max={}",
        dist.summary.count,
        fmt(dist.summary.mean),
        fmt(dist.summary.median),
        fmt(dist.summary.min),
        fmt(dist.summary.max)
    );

    let max = dist.histogram.bins.iter().map(|b| b.count).max().unwrap_or(0);
    for bin in &dist.histogram.bins {
        let width = if max == 0 { 0 } else { bin.count * 40 / max };
        println!(
            "{:>12.4} .. {:<12.4} {:>7} {}",
            bin.start,
            bin.end,
            bin.count,
            "#".repeat(width)
        );
    }
}

fn print_deals(list: &DealListResponse) {
    if list.deals.is_empty() {
        println!("No deals in range (total: {})", list.total);
        return;
    }

    println!(
        "{:<6} {:<8} {:>14} {:>10} {:>12}",
        "Rank", "ID", "Price (M)", "Churn", "Priority"
    );
    println!("{}", "-".repeat(54));

    for deal in &list.deals {
        println!(
            "{:<6} {:<8} {:>14.4} {:>10.4} {:>12.4}",
            deal.rank, deal.id, deal.price, deal.churn, deal.priority
        );
    }

    println!();
    println!(
        "Showing {}-{} of {}",
        list.offset + 1,
        list.offset + list.deals.len(),
        list.total
    );
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_offline_source_uses_configured_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "price,churn,score\n4.5,0.25,2.0\n9.0,0.75,8.0\n").unwrap();

        let mut config = Config::default();
        config.data.columns.price = "price".to_string();
        config.data.columns.churn = "churn".to_string();
        config.data.columns.priority = "score".to_string();
        config.simulator.income_multiplier = 20.0;

        match offline_source(file.path(), &config, None).unwrap() {
            Source::Offline { table, simulator } => {
                assert_eq!(table.len(), 2);
                assert_eq!(table.rank_of(1), Some(0));
                assert_eq!(simulator.income_multiplier(), 20.0);
            }
            Source::Remote { .. } => panic!("expected an offline source"),
        }

        match offline_source(file.path(), &config, Some(5.0)).unwrap() {
            Source::Offline { simulator, .. } => assert_eq!(simulator.income_multiplier(), 5.0),
            Source::Remote { .. } => panic!("expected an offline source"),
        }
    }

    #[test]
    fn test_offline_source_default_columns_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "price,churn,score\n4.5,0.25,2.0\n").unwrap();

        assert!(offline_source(file.path(), &Config::default(), None).is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(7260), "2h 1m");
        assert_eq!(format_duration(90000), "1d 1h");
    }
}
