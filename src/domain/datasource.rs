// Datasource domain model
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TYPE_PROMETHEUS: &str = "prometheus";

/// Grafana queries the datasource through its own backend.
pub const ACCESS_MODE_PROXY: &str = "proxy";

/// A datasource registered in the current organization.
///
/// `id` is assigned by Grafana and ignored when the datasource is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    #[serde(default, skip_serializing)]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub access: String,
}

impl DataSource {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        url: impl Into<String>,
        access: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            kind: kind.into(),
            url: url.into(),
            access: access.into(),
        }
    }

    pub fn prometheus(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, TYPE_PROMETHEUS, url, ACCESS_MODE_PROXY)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DataSource{{id={}, name='{}', type='{}', url='{}', access='{}'}}",
            self.id, self.name, self.kind, self.url, self.access
        )
    }
}
