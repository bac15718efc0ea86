//! Error taxonomy for the conformance run.
//!
//! Only configuration-level defects are surfaced as [`RunError`]: missing or
//! unparsable config, malformed static vector data, and bad CLI arguments.
//! A status or plaintext mismatch for a single vector is never a `RunError`;
//! it is recorded as a failing result row and the run continues.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunErrorKind {
    MissingConfig,
    ConfigParse,
    MalformedVector,
    VectorsNotFound,
    ProviderTimeout,
    InvalidArgs,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RunError {
    pub kind: RunErrorKind,
    pub message: String,
    pub path: Option<String>,
    pub detail: Option<String>,
}

impl RunError {
    pub fn new(kind: RunErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
            detail: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn missing_config(path: impl Into<String>, detail: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            RunErrorKind::MissingConfig,
            format!("Config file not found: {}", path),
        )
        .with_path(path)
        .with_detail(detail)
    }

    pub fn config_parse(path: Option<String>, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let mut err = Self::new(RunErrorKind::ConfigParse, detail.clone()).with_detail(detail);
        if let Some(path) = path {
            err = err.with_path(path);
        }
        err
    }

    pub fn malformed_vector(id: impl Into<String>, detail: impl Into<String>) -> Self {
        let id = id.into();
        let detail = detail.into();
        Self::new(
            RunErrorKind::MalformedVector,
            format!("Malformed vector '{}': {}", id, detail),
        )
        .with_detail(detail)
    }

    pub fn vectors_not_found(path: impl Into<String>, detail: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            RunErrorKind::VectorsNotFound,
            format!("Vector file not found: {}", path),
        )
        .with_path(path)
        .with_detail(detail)
    }

    pub fn provider_timeout(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::new(RunErrorKind::ProviderTimeout, detail.clone()).with_detail(detail)
    }

    pub fn invalid_args(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::new(RunErrorKind::InvalidArgs, detail.clone()).with_detail(detail)
    }

    /// Stable machine-readable code for summary.json consumers. Downstream
    /// branches on this, never on display strings.
    pub fn reason_code(&self) -> &'static str {
        match self.kind {
            RunErrorKind::MissingConfig => "E_CONFIG_NOT_FOUND",
            RunErrorKind::ConfigParse => "E_CONFIG_PARSE",
            RunErrorKind::MalformedVector => "E_MALFORMED_VECTOR",
            RunErrorKind::VectorsNotFound => "E_VECTORS_NOT_FOUND",
            RunErrorKind::ProviderTimeout => "E_PROVIDER_TIMEOUT",
            RunErrorKind::InvalidArgs => "E_INVALID_ARGS",
            RunErrorKind::Other => "E_UNKNOWN",
        }
    }

    pub fn from_anyhow(e: &anyhow::Error) -> Self {
        e.downcast_ref::<RunError>()
            .cloned()
            .unwrap_or_else(|| Self::new(RunErrorKind::Other, e.to_string()))
    }
}
