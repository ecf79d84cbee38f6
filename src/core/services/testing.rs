//! In-memory fakes for provider tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::provider::ProviderLog;
use super::transport::HttpFetch;
use crate::error::NetworkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Captures every message a provider logs.
#[derive(Default)]
pub struct RecordingLog {
    events: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLog {
    pub fn events(&self) -> Vec<(LogLevel, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.events().iter().filter(|(l, _)| *l == level).count()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.events.lock().unwrap().push((level, message.to_string()));
    }
}

impl ProviderLog for RecordingLog {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

pub enum Canned {
    Body(Option<String>),
    Unavailable,
}

/// Answers every fetch with the same canned response and remembers the query.
pub struct StaticFetcher {
    canned: Canned,
    requests: Mutex<Vec<Vec<(String, String)>>>,
}

impl StaticFetcher {
    pub fn body(body: impl Into<String>) -> Self {
        Self::new(Canned::Body(Some(body.into())))
    }

    pub fn absent() -> Self {
        Self::new(Canned::Body(None))
    }

    pub fn unavailable() -> Self {
        Self::new(Canned::Unavailable)
    }

    fn new(canned: Canned) -> Self {
        Self {
            canned,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<(String, String)>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetch for StaticFetcher {
    async fn fetch(&self, params: &[(&str, String)]) -> Result<Option<String>, NetworkError> {
        self.requests.lock().unwrap().push(
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        );

        match &self.canned {
            Canned::Body(body) => Ok(body.clone()),
            Canned::Unavailable => Err(NetworkError::Status {
                status: 503,
                url: self.endpoint().to_string(),
            }),
        }
    }

    fn endpoint(&self) -> &str {
        "http://catalog.test/search"
    }
}
