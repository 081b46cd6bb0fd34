#[cfg(test)]
mod tests {
    use super::super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:9080");
        assert_eq!(config.service_path, "/start/api/v1");
        assert_eq!(config.options_path, "/start/options");
        assert_eq!(config.deploy, DeploymentTarget::Local);
        assert!(config.project_name.is_none());
    }

    #[test]
    fn test_endpoint_paths() {
        let config = Config::default();
        assert_eq!(config.tech_path(), "/start/api/v1/tech");
        assert_eq!(config.data_path(), "/start/api/v1/data");
        assert_eq!(
            config.options_template_path("rest"),
            "/start/options/rest/rest.html"
        );
    }

    #[test]
    fn test_trailing_slashes_ignored() {
        let config = Config {
            service_path: "/api/".to_string(),
            options_path: "/opts/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.tech_path(), "/api/tech");
        assert_eq!(config.options_template_path("web"), "/opts/web/web.html");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
server_url = "https://start.example.com"
deploy = "bluemix"
project_name = "demo"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server_url, "https://start.example.com");
        assert_eq!(config.service_path, "/start/api/v1");
        assert_eq!(config.deploy, DeploymentTarget::Bluemix);
        assert_eq!(config.project_name.as_deref(), Some("demo"));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "deploy = \"mars\"").unwrap();

        let result = Config::load_from(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config"));
    }
}
