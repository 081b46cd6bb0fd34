//! Catalog and options template fetches.

use super::SelectionService;
use crate::error::FetchError;
use crate::technology::Technology;
use hyper::StatusCode;
use tracing::debug;

impl SelectionService {
    /// Fetch the list of available technologies.
    ///
    /// A 2xx answer other than 200 yields an empty list. Callers that only
    /// need something to show can use `unwrap_or_default()` on failure.
    pub async fn fetch_technology_catalog(&self) -> Result<Vec<Technology>, FetchError> {
        debug!("GET : available technology list");
        let path = self.config.tech_path();
        let (status, body) = self.client.get(&path).await?;

        if status != StatusCode::OK {
            debug!("Catalog answered {}, returning no technologies", status);
            return Ok(Vec::new());
        }

        let techs: Vec<Technology> =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: self.client.url_for(&path),
                source,
            })?;
        debug!("Catalog returned {} technologies", techs.len());
        Ok(techs)
    }

    /// Fetch the options template for a technology.
    ///
    /// Technologies without options resolve to `None` without touching the
    /// network.
    pub async fn fetch_options_template(
        &self,
        technology: &Technology,
    ) -> Result<Option<String>, FetchError> {
        if !technology.options {
            debug!("Technology {} has no options", technology.id);
            return Ok(None);
        }

        debug!("GET : options for {}", technology.id);
        let path = self.config.options_template_path(&technology.id);
        let (_, body) = self.client.get(&path).await?;

        let template = String::from_utf8(body.to_vec()).map_err(|e| FetchError::Body {
            url: self.client.url_for(&path),
            reason: e.to_string(),
        })?;
        Ok(Some(template))
    }
}
