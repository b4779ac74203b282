use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use tracing::info;
use weather_core::{AppViewModel, ClientId, Coordinate, client_from_id};

use crate::{config::Config, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather demo backed by swappable clients")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the default client and live endpoint settings.
    Configure,

    /// Fetch the forecast and show it.
    Show {
        /// Client to use: live, empty, happy-path or failed.
        #[arg(long)]
        client: Option<String>,

        /// Start with the connectivity flag cleared.
        #[arg(long)]
        offline: bool,

        /// Print the results as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search locations around a coordinate.
    Search {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Client to use: live, empty, happy-path or failed.
        #[arg(long)]
        client: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config)?,
            Command::Show { client, offline, json } => {
                show(&config, client.as_deref(), !offline, json).await?;
            }
            Command::Search { lat, lon, client } => {
                search(&config, client.as_deref(), Coordinate::new(lat, lon)).await?;
            }
        }

        Ok(())
    }
}

fn resolve_client_id(config: &Config, requested: Option<&str>) -> Result<ClientId> {
    match requested {
        Some(name) => Ok(ClientId::try_from(name)?),
        None => config.default_client_id(),
    }
}

async fn show(config: &Config, client: Option<&str>, is_connected: bool, json: bool) -> Result<()> {
    let id = resolve_client_id(config, client)?;
    let client = client_from_id(id, &config.live_settings())
        .with_context(|| format!("Failed to build '{id}' client"))?;
    info!(client = %id, "showing weather");

    let mut view_model = AppViewModel::with_connectivity(is_connected, client);
    view_model.settle().await;
    let state = view_model.state();

    if json {
        let body = serde_json::to_string_pretty(&state.weather_results)
            .context("Failed to serialize weather results")?;
        println!("{body}");
    } else {
        print!("{}", render::render(&state));
    }

    Ok(())
}

async fn search(config: &Config, client: Option<&str>, coordinate: Coordinate) -> Result<()> {
    let id = resolve_client_id(config, client)?;
    let client = client_from_id(id, &config.live_settings())
        .with_context(|| format!("Failed to build '{id}' client"))?;

    let locations = client
        .search_locations(coordinate)
        .await
        .with_context(|| format!("Location search failed using '{id}' client"))?;

    println!(
        "Found {} location(s) near {:.4}, {:.4}",
        locations.len(),
        coordinate.latitude,
        coordinate.longitude
    );

    Ok(())
}

fn configure(mut config: Config) -> Result<()> {
    let current = config.default_client_id().unwrap_or_default();
    let starting = ClientId::all().iter().position(|id| *id == current).unwrap_or(0);

    let id = Select::new("Default client:", ClientId::all().to_vec())
        .with_starting_cursor(starting)
        .prompt()
        .context("Client selection aborted")?;
    config.set_default_client(id);

    if id == ClientId::Live {
        let settings = config.live_settings();

        let url = Text::new("Live endpoint URL:")
            .with_default(&settings.url)
            .prompt()
            .context("Endpoint prompt aborted")?;
        let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
            .with_default(settings.timeout.as_secs())
            .with_error_message("Please enter a whole number of seconds")
            .prompt()
            .context("Timeout prompt aborted")?;

        config.live.url = Some(url);
        config.live.timeout_secs = Some(timeout_secs);
    }

    let path = config.save()?;
    println!("Saved default client '{id}' to {}", path.display());

    Ok(())
}
