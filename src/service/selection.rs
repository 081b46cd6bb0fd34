//! Selection bookkeeping and download URL construction.

use crate::client::AcceleratorClient;
use crate::config::Config;
use crate::constants::query;
use crate::technology::{DeploymentTarget, Technology};
use anyhow::Result;
use tracing::debug;

/// State for one selection session.
///
/// The service is constructed explicitly and handed to whatever needs it.
/// Callers sharing it between tasks wrap it in their own lock.
pub struct SelectionService {
    pub(crate) config: Config,
    pub(crate) client: AcceleratorClient,
    selected: Vec<Technology>,
    deploy: DeploymentTarget,
    project_name: Option<String>,
}

impl SelectionService {
    pub fn new(config: Config) -> Result<Self> {
        debug!("Initialising selection service for {}", config.server_url);
        let client = AcceleratorClient::new(&config.server_url)?;
        Ok(Self {
            deploy: config.deploy,
            project_name: config.project_name.clone(),
            config,
            client,
            selected: Vec::new(),
        })
    }

    /// Mark a technology selected and remember it.
    ///
    /// A technology whose id is already selected is not added twice.
    pub fn select(&mut self, technology: &mut Technology) {
        debug!("Adding technology: {}", technology.id);
        technology.selected = true;

        if self.is_selected(&technology.id) {
            debug!("Technology {} already selected", technology.id);
            return;
        }
        self.selected.push(technology.clone());
    }

    /// Mark a technology deselected and forget it, if it was selected.
    pub fn deselect(&mut self, technology: &mut Technology) {
        debug!("Removing technology: {}", technology.id);
        technology.selected = false;

        if let Some(pos) = self.selected.iter().position(|t| t.id == technology.id) {
            self.selected.remove(pos);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|t| t.id == id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected technologies in selection order
    pub fn selected(&self) -> &[Technology] {
        &self.selected
    }

    /// Set the deployment target when given one; returns the current target.
    pub fn deployment_target(&mut self, target: Option<DeploymentTarget>) -> DeploymentTarget {
        if let Some(target) = target {
            self.deploy = target;
        }
        self.deploy
    }

    /// Set the project name when given one; returns the current name.
    pub fn project_name(&mut self, name: Option<&str>) -> Option<&str> {
        if let Some(name) = name {
            self.project_name = Some(name.to_string());
        }
        self.project_name.as_deref()
    }

    /// Server-relative URL that downloads a project for the current
    /// selections, or `None` when nothing is selected.
    ///
    /// Only stored entries still flagged `selected` are included.
    pub fn build_download_url(&self) -> Option<String> {
        let techs: Vec<String> = self
            .selected
            .iter()
            .filter(|t| {
                if !t.selected {
                    debug!("Technology {} is not selected so not adding", t.id);
                }
                t.selected
            })
            .map(|t| format!("{}={}", query::TECH, t.id))
            .collect();

        if techs.is_empty() {
            debug!("Nothing has been selected");
            return None;
        }

        let url = format!(
            "{}?{}&{}={}&{}={}",
            self.config.data_path(),
            techs.join("&"),
            query::DEPLOY,
            self.deploy,
            query::NAME,
            self.project_name.as_deref().unwrap_or_default()
        );
        debug!("Constructed {}", url);
        Some(url)
    }

    /// [`build_download_url`](Self::build_download_url) resolved against the
    /// configured server.
    pub fn download_url(&self) -> Option<String> {
        self.build_download_url()
            .map(|path| self.client.url_for(&path))
    }

    /// Flip the `selected` flag of a stored entry without removing it.
    ///
    /// Entries flagged off stay counted but are left out of the download
    /// URL. Returns `false` if no entry has that id.
    pub fn set_flag(&mut self, id: &str, selected: bool) -> bool {
        match self.selected.iter_mut().find(|t| t.id == id) {
            Some(tech) => {
                debug!("Technology {} flagged selected={}", id, selected);
                tech.selected = selected;
                true
            }
            None => false,
        }
    }
}
