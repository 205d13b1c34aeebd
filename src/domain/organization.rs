// Organization domain model
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Grafana organization. Each Prometheus job maps to exactly one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
}

impl Organization {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Organization{{id={}, name='{}'}}", self.id, self.name)
    }
}
