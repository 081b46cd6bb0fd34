use crate::technology::DeploymentTarget;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appacc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Accelerator server URL (e.g., http://localhost:9080)
    #[arg(long, global = true, env = "APPACC_SERVER")]
    pub server: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the technologies offered by the accelerator
    Techs {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,

        /// Fail instead of printing an empty list when the catalog is unavailable
        #[arg(long)]
        strict: bool,
    },

    /// Print the options template for a technology
    Options {
        /// Technology id (e.g., rest)
        id: String,
    },

    /// Print the download URL for a set of technologies
    Url {
        /// Technology ids to select
        /// Can be specified multiple times or as a comma-separated list
        #[arg(long = "tech", value_delimiter = ',', required = true)]
        techs: Vec<String>,

        /// Deployment target (local or bluemix)
        #[arg(long, value_name = "TARGET")]
        deploy: Option<DeploymentTarget>,

        /// Shorthand for --deploy bluemix
        #[arg(long, conflicts_with = "deploy")]
        bluemix: bool,

        /// Project name
        #[arg(long)]
        name: Option<String>,
    },

    /// Show version information
    Version,
}
