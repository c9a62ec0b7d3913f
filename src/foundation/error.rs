/// Convenience result type used across eventsketch.
pub type SketchResult<T> = Result<T, SketchError>;

/// Top-level error taxonomy for the fatal paths of a render run.
///
/// Per-event problems (bad magnitude payload, unmatched "off") are not errors; they are
/// reported as [`crate::Diagnostic`] values and the run continues.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// The event log could not be read into well-formed rows.
    #[error("ingest error: {0}")]
    Ingest(String),

    /// Input that is well-formed but unusable (e.g. an empty log).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization or image encoding failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SketchError {
    /// Build a [`SketchError::Ingest`] value.
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest(msg.into())
    }

    /// Build a [`SketchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SketchError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
