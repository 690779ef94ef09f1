use thiserror::Error;

pub type Result<T> = std::result::Result<T, TfidfError>;

#[derive(Debug, Error)]
pub enum TfidfError {
    /// Caller supplied neither a document descriptor nor a sequence of descriptors.
    #[error("invalid input shape: {0}")]
    InputShape(String),

    /// No stopword data exists for the requested language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Setup-time resource (stopword file, segmentation data) could not be loaded.
    #[error("resource unavailable: {resource}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl TfidfError {
    pub fn input_shape<S: Into<String>>(msg: S) -> Self { TfidfError::InputShape(msg.into()) }

    pub fn resource<S: Into<String>>(resource: S, source: std::io::Error) -> Self {
        TfidfError::ResourceUnavailable { resource: resource.into(), source: Some(source) }
    }

    /// True for failures that must be remedied before the engine serves calls.
    pub fn is_setup_error(&self) -> bool {
        matches!(self, TfidfError::UnsupportedLanguage(_) | TfidfError::ResourceUnavailable { .. })
    }
}
