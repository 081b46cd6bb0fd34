pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod service;
pub mod technology;

pub use anyhow::Result;
pub use error::FetchError;
pub use service::SelectionService;
pub use technology::{DeploymentTarget, Technology};
