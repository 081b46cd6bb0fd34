use anyhow::{Context, Result};
use appacc::{
    cli::{Cli, Commands},
    config::Config,
    service::SelectionService,
    technology::{DeploymentTarget, Technology},
};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Techs { json, strict } => {
            let service = start_session(cli.config.as_deref(), cli.server)?;
            let techs = match service.fetch_technology_catalog().await {
                Ok(techs) => techs,
                Err(e) if strict => {
                    return Err(e).context("Failed to fetch technology catalog");
                }
                Err(e) => {
                    warn!("Technology catalog unavailable: {}", e);
                    Vec::new()
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&techs)?);
            } else {
                for tech in &techs {
                    let marker = if tech.options { "*" } else { " " };
                    println!("{} {:<20} {}", marker, tech.id, tech.name());
                }
            }
        }
        Commands::Options { id } => {
            let service = start_session(cli.config.as_deref(), cli.server)?;
            let techs = service
                .fetch_technology_catalog()
                .await
                .context("Failed to fetch technology catalog")?;
            let tech = techs
                .iter()
                .find(|t| t.id == id)
                .with_context(|| format!("Unknown technology: {}", id))?;

            match service
                .fetch_options_template(tech)
                .await
                .with_context(|| format!("Failed to fetch options for {}", id))?
            {
                Some(template) => print!("{}", template),
                None => info!("Technology {} has no options", id),
            }
        }
        Commands::Url {
            techs: ids,
            deploy,
            bluemix,
            name,
        } => {
            let mut service = start_session(cli.config.as_deref(), cli.server)?;
            let mut catalog = service.fetch_technology_catalog().await.unwrap_or_else(|e| {
                warn!("Technology catalog unavailable: {}", e);
                Vec::new()
            });

            for id in &ids {
                match catalog.iter_mut().find(|t| &t.id == id) {
                    Some(tech) => service.select(tech),
                    None => {
                        warn!("Technology {} is not in the catalog, selecting it anyway", id);
                        service.select(&mut Technology::new(id.as_str()));
                    }
                }
            }

            let deploy = if bluemix {
                Some(DeploymentTarget::Bluemix)
            } else {
                deploy
            };
            service.deployment_target(deploy);
            service.project_name(name.as_deref());

            let url = service
                .download_url()
                .context("No technologies selected")?;
            let count = service.selected_count();
            let target = service.deployment_target(None);
            info!("Selected {} technologies for {} deployment", count, target);
            println!("{}", url);
        }
        Commands::Version => {
            println!("appacc {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn start_session(config_path: Option<&Path>, server: Option<String>) -> Result<SelectionService> {
    let mut config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(server) = server {
        config.server_url = server;
    }
    SelectionService::new(config)
}
