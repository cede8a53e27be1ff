use crate::domain::view::ViewId;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardSettings {
    #[serde(default)]
    pub default_view: ViewId,
}

fn default_timeout_secs() -> u64 {
    10
}

/// Load `config/dashboard.*`, overridden by `DASHBOARD_*` environment variables
/// (e.g. `DASHBOARD_API__BASE_URL`).
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> anyhow::Result<DashboardConfig> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
            [api]
            base_url = "http://localhost:8000"
            timeout_secs = 3

            [server]
            bind_addr = "127.0.0.1:9000"

            [dashboard]
            default_view = "drivers"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.dashboard.default_view, ViewId::Drivers);
    }

    #[test]
    fn test_defaults() {
        let config = parse(
            r#"
            [api]
            base_url = "http://localhost:8000"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.dashboard.default_view, ViewId::Executive);
    }

    #[test]
    fn test_unknown_default_view_is_rejected() {
        let result = parse(
            r#"
            [api]
            base_url = "http://localhost:8000"

            [dashboard]
            default_view = "inventory"
            "#,
        );
        assert!(result.is_err());
    }
}
