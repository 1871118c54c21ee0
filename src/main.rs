//! Entry point: parse CLI and dispatch to the web server or a one-off lookup.

use anyhow::Context;
use clap::Parser;
use courtside::{
    balldontlie::BallDontLieClient,
    cli::{Commands, Courtside},
    commands::lookup::handle_lookup,
    config::{load_dotenv, RandomPageSettings, ServerConfig, UpstreamSettings},
    logging::setup_logging,
    web::{self, AppState},
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before parsing so `.env` values feed clap's env fallbacks
    let dotenv = load_dotenv();
    let app = Courtside::parse();
    setup_logging(app.verbose).context("failed to initialise logging")?;
    dotenv.log();

    match app.command {
        Commands::Serve {
            server,
            upstream,
            random,
        } => {
            let client = BallDontLieClient::new(&UpstreamSettings::from_args(&upstream))?;
            let random = RandomPageSettings::from_args(&random)?;
            let config = ServerConfig::from_args(&server);
            let state = AppState::new(client, random, config.latest_season);

            web::serve(&config, state).await?
        }

        Commands::Get { upstream, cmd } => {
            let client = BallDontLieClient::new(&UpstreamSettings::from_args(&upstream))?;
            handle_lookup(&client, cmd).await?
        }
    }

    Ok(())
}
