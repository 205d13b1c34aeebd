use crate::domain::datasource::{DataSource, ACCESS_MODE_PROXY};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_CONFIG_PATH: &str = "config/grafana";
pub const ENV_PREFIX: &str = "DASHBOARDS";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub grafana: GrafanaSettings,
    pub datasource: DataSourceSettings,
    pub build: BuildSettings,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct GrafanaSettings {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl GrafanaSettings {
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl Default for GrafanaSettings {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 3000,
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for GrafanaSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrafanaSettings")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataSourceSettings {
    /// Name every panel queries; also the name registered in each organization.
    pub name: String,
    pub url: String,
    pub access: String,
    pub register: bool,
}

impl DataSourceSettings {
    pub fn to_datasource(&self) -> DataSource {
        DataSource {
            access: self.access.clone(),
            ..DataSource::prometheus(self.name.as_str(), self.url.as_str())
        }
    }
}

impl Default for DataSourceSettings {
    fn default() -> Self {
        Self {
            name: "Prometheus".to_string(),
            url: "http://localhost:9090".to_string(),
            access: ACCESS_MODE_PROXY.to_string(),
            register: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BuildSettings {
    /// Value of the `interval` constant variable, e.g. `30s`.
    pub interval: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            interval: "30s".to_string(),
        }
    }
}

/// Loads `path` (or the optional default file) with `DASHBOARDS_*` environment overrides on top.
pub fn load_app_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let file = File::with_name(path.unwrap_or(DEFAULT_CONFIG_PATH)).required(path.is_some());
    deserialize(Config::builder().add_source(file).add_source(environment()))
}

/// `DASHBOARDS_GRAFANA__PASSWORD` maps to `grafana.password`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn deserialize(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<AppConfig> {
    let settings = builder.build()?;
    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_without_sources() {
        let config = deserialize(Config::builder()).unwrap();

        assert_eq!(config.grafana.base_url(), "http://localhost:3000");
        assert_eq!(config.grafana.username, "admin");
        assert_eq!(config.datasource.name, "Prometheus");
        assert!(config.datasource.register);
        assert_eq!(config.build.interval, "30s");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let toml = r#"
            [grafana]
            scheme = "https"
            host = "grafana.internal"
            port = 443

            [datasource]
            register = false
        "#;
        let config = deserialize(Config::builder().add_source(File::from_str(toml, FileFormat::Toml))).unwrap();

        assert_eq!(config.grafana.base_url(), "https://grafana.internal:443");
        assert_eq!(config.grafana.password, "admin");
        assert!(!config.datasource.register);
        assert_eq!(config.datasource.url, "http://localhost:9090");
    }

    #[test]
    fn test_environment_overrides_file() {
        let toml = r#"
            [grafana]
            password = "from-file"

            [build]
            interval = "1m"
        "#;
        let env = config::Map::from([
            ("DASHBOARDS_GRAFANA__PASSWORD".to_string(), "from-env".to_string()),
            ("DASHBOARDS_GRAFANA__PORT".to_string(), "3300".to_string()),
        ]);
        let config = deserialize(
            Config::builder()
                .add_source(File::from_str(toml, FileFormat::Toml))
                .add_source(environment().source(Some(env))),
        )
        .unwrap();

        assert_eq!(config.grafana.password, "from-env");
        assert_eq!(config.grafana.port, 3300);
        assert_eq!(config.build.interval, "1m");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(load_app_config(Some("config/does-not-exist")).is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let settings = GrafanaSettings {
            password: "s3cret".to_string(),
            ..GrafanaSettings::default()
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_datasource_settings_to_datasource() {
        let datasource = DataSourceSettings::default().to_datasource();
        assert_eq!(datasource, DataSource::prometheus("Prometheus", "http://localhost:9090"));
    }
}
