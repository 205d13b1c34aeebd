// Grafana HTTP API seam
use crate::application::error::GrafanaError;
use async_trait::async_trait;
use serde_json::Value;

/// Authenticated JSON access to a Grafana server. Paths are relative to its base URL.
#[async_trait]
pub trait GrafanaApi: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, GrafanaError>;

    /// `None` sends an empty body.
    async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value, GrafanaError>;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub method: &'static str,
        pub path: String,
        pub body: Option<Value>,
    }

    /// Replays queued responses in order and records every call it receives.
    #[derive(Default)]
    pub struct ScriptedGrafana {
        responses: Mutex<VecDeque<Result<Value, GrafanaError>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl ScriptedGrafana {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, response: Value) -> Self {
            self.push(Ok(response))
        }

        pub fn fail(self, error: GrafanaError) -> Self {
            self.push(Err(error))
        }

        fn push(self, response: Result<Value, GrafanaError>) -> Self {
            self.responses.lock().unwrap().push_back(response);
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        fn next(&self, method: &'static str, path: &str, body: Option<&Value>) -> Result<Value, GrafanaError> {
            self.calls.lock().unwrap().push(RecordedCall {
                method,
                path: path.to_string(),
                body: body.cloned(),
            });
            self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
                Err(GrafanaError::Request {
                    method,
                    path: path.to_string(),
                    body: None,
                    source: "no scripted response left".into(),
                })
            })
        }
    }

    #[async_trait]
    impl GrafanaApi for ScriptedGrafana {
        async fn get(&self, path: &str) -> Result<Value, GrafanaError> {
            self.next("GET", path, None)
        }

        async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value, GrafanaError> {
            self.next("POST", path, body)
        }
    }
}
