use crate::error::FetchError;
use anyhow::{Context, Result};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::{ACCEPT, USER_AGENT};
use hyper::{Request, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tracing::debug;


/// Plain HTTP GET access to the accelerator server.
///
/// Paths handed to [`AcceleratorClient::get`] are resolved against the
/// server URL the client was created with.
pub struct AcceleratorClient {
    server: String,
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
}

impl AcceleratorClient {
    pub fn new(server_url: &str) -> Result<Self> {
        let server = server_url.trim_end_matches('/').to_string();
        let uri: Uri = server
            .parse()
            .with_context(|| format!("Failed to parse server URL: {}", server_url))?;
        if uri.scheme().is_none() || uri.host().is_none() {
            anyhow::bail!("Server URL must be absolute: {}", server_url);
        }

        let https = HttpsConnector::new();
        let client = Client::builder(TokioExecutor::new()).build(https);

        Ok(Self { server, client })
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Absolute URL for a server-relative path
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.server, path)
        } else {
            format!("{}/{}", self.server, path)
        }
    }

    /// GET a server-relative path.
    ///
    /// Any 2xx answer is returned with its status and body; everything else
    /// is a [`FetchError`].
    pub async fn get(&self, path: &str) -> Result<(StatusCode, Bytes), FetchError> {
        let url = self.url_for(path);
        let uri = url.parse::<Uri>().map_err(|e| FetchError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let request = Request::get(uri)
            .header(USER_AGENT, concat!("appacc/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "*/*")
            .body(Empty::new())
            .map_err(|e| FetchError::InvalidUrl {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        debug!("GET {}", url);
        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| FetchError::Body {
                url: url.clone(),
                reason: e.to_string(),
            })?
            .to_bytes();

        if !status.is_success() {
            debug!("{} {} - FAILED", status, url);
            return Err(FetchError::Status { url, status });
        }

        debug!("{} {} - OK ({} bytes)", status, url, body.len());
        Ok((status, body))
    }
}
