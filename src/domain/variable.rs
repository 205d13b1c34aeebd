// Dashboard template variables
use serde::Serialize;

/// Sort query results alphabetically, case-insensitive ascending.
pub const SORT_ALPHABETICAL_CASE_INSENSITIVE_ASC: u8 = 5;

/// Refresh query results when the dashboard loads.
pub const REFRESH_ON_DASHBOARD_LOAD: u8 = 1;

/// A template variable, resolved by Grafana at view time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Variable {
    Constant(Constant),
    Query(Query),
}

impl Variable {
    pub fn name(&self) -> &str {
        match self {
            Variable::Constant(constant) => &constant.name,
            Variable::Query(query) => &query.name,
        }
    }
}

/// A hidden variable with a single pre-selected value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constant {
    pub name: String,
    pub query: String,
    pub options: Vec<VariableOption>,
    pub current: CurrentOption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableOption {
    pub selected: bool,
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentOption {
    pub text: String,
    pub value: String,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            options: vec![VariableOption {
                selected: true,
                text: value.clone(),
                value: value.clone(),
            }],
            current: CurrentOption {
                text: value.clone(),
                value: value.clone(),
            },
            query: value,
        }
    }
}

/// A variable whose values come from a datasource query, filtered by `regex`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub datasource: String,
    pub name: String,
    pub label: String,
    pub query: String,
    pub regex: String,
    pub sort: u8,
    pub refresh: u8,
}

impl Query {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        query: impl Into<String>,
        regex: impl Into<String>,
        datasource: impl Into<String>,
    ) -> Self {
        Self {
            datasource: datasource.into(),
            name: name.into(),
            label: label.into(),
            query: query.into(),
            regex: regex.into(),
            sort: SORT_ALPHABETICAL_CASE_INSENSITIVE_ASC,
            refresh: REFRESH_ON_DASHBOARD_LOAD,
        }
    }
}

impl From<Constant> for Variable {
    fn from(constant: Constant) -> Self {
        Variable::Constant(constant)
    }
}

impl From<Query> for Variable {
    fn from(query: Query) -> Self {
        Variable::Query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constant_preselects_its_value() {
        let constant = Constant::new("interval", "30s");

        assert_eq!(constant.query, "30s");
        assert_eq!(constant.options.len(), 1);
        assert!(constant.options[0].selected);
        assert_eq!(constant.options[0].text, "30s");
        assert_eq!(constant.options[0].value, "30s");
        assert_eq!(constant.current.text, "30s");
        assert_eq!(constant.current.value, "30s");
    }

    #[test]
    fn test_constant_serialization() {
        let variable = Variable::from(Constant::new("job", "demo-project"));

        assert_eq!(
            serde_json::to_value(&variable).unwrap(),
            json!({
                "type": "constant",
                "name": "job",
                "query": "demo-project",
                "options": [{"selected": true, "text": "demo-project", "value": "demo-project"}],
                "current": {"text": "demo-project", "value": "demo-project"}
            })
        );
    }

    #[test]
    fn test_query_serialization() {
        let variable = Variable::from(Query::new(
            "name",
            "Name",
            r#"naivecache_memcached_error_count{job="demo"}"#,
            r#"/.*name="([^"]*).*/"#,
            "Prometheus",
        ));

        assert_eq!(variable.name(), "name");
        assert_eq!(
            serde_json::to_value(&variable).unwrap(),
            json!({
                "type": "query",
                "datasource": "Prometheus",
                "name": "name",
                "label": "Name",
                "query": "naivecache_memcached_error_count{job=\"demo\"}",
                "regex": "/.*name=\"([^\"]*).*/",
                "sort": 5,
                "refresh": 1
            })
        );
    }
}
