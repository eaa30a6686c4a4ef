use thiserror::Error;

/// Why a render call fell back to a diagnostic.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{message}: {source}")]
    Serialize {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing field `{field}` in {context}")]
    MissingField {
        field: &'static str,
        context: String,
    },

    #[error("usage must be a mapping of counters, got {kind}")]
    UsageShape { kind: &'static str },

    #[error("usage counter `{key}` is not an integer: {value}")]
    UsageValue { key: String, value: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a render call. Rendering never fails outright; a degraded
/// render still produced output, with a diagnostic in place of the part it
/// could not format.
#[derive(Debug)]
pub enum RenderStatus {
    Complete,
    Degraded(RenderError),
}

impl RenderStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, RenderStatus::Complete)
    }

    pub fn error(&self) -> Option<&RenderError> {
        match self {
            RenderStatus::Complete => None,
            RenderStatus::Degraded(err) => Some(err),
        }
    }

    /// Record `err` unless an earlier error was already recorded.
    pub(crate) fn degrade(&mut self, err: RenderError) {
        if self.is_complete() {
            *self = RenderStatus::Degraded(err);
        }
    }
}
