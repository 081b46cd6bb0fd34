/// Endpoint constants for the accelerator API
pub mod endpoint {
    /// Default server the relative API paths are resolved against
    pub const DEFAULT_SERVER: &str = "http://localhost:9080";

    /// Base path of the accelerator REST API
    pub const SERVICE_PATH: &str = "/start/api/v1";

    /// Base path of the per-technology options templates
    pub const OPTIONS_PATH: &str = "/start/options";

    /// Technology catalog, relative to the service path
    pub const TECH: &str = "/tech";

    /// Project download, relative to the service path
    pub const DATA: &str = "/data";
}

/// Query string keys used in the download URL
pub mod query {
    pub const TECH: &str = "tech";
    pub const DEPLOY: &str = "deploy";
    pub const NAME: &str = "name";
}

/// Deployment target values
pub mod deploy {
    /// Run the generated project locally
    pub const LOCAL: &str = "local";

    /// Configure the generated project for Bluemix
    pub const BLUEMIX: &str = "bluemix";
}
