use thiserror::Error;

/// Result type alias using FieldkitError
pub type Result<T> = std::result::Result<T, FieldkitError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every recoverable error raised by fieldkit. Each
/// kind maps to a stable code usable by admin frontends and tests.
///
/// Caller-contract violations (deleting an unsaved record, restoring a record
/// that is not deleted) are not represented here: they panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FkErrorKind {
    // Validation
    InvalidInput,
    InvalidTitle,
    InvalidWindow,

    // Lookup
    NotFound,
    UnknownRelation,
    UnknownContentType,

    // Integration wiring
    NotMounted,

    // Rendering / configuration
    Template,
    Config,
    Io,

    // Internal
    Internal,
}

impl FkErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FkErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            FkErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            FkErrorKind::InvalidWindow => "ERR_INVALID_WINDOW",
            FkErrorKind::NotFound => "ERR_NOT_FOUND",
            FkErrorKind::UnknownRelation => "ERR_UNKNOWN_RELATION",
            FkErrorKind::UnknownContentType => "ERR_UNKNOWN_CONTENT_TYPE",
            FkErrorKind::NotMounted => "ERR_NOT_MOUNTED",
            FkErrorKind::Template => "ERR_TEMPLATE",
            FkErrorKind::Config => "ERR_CONFIG",
            FkErrorKind::Io => "ERR_IO",
            FkErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification fields used by the logging macros plus context
/// for debugging.
#[derive(Debug, Clone)]
pub struct FkError {
    kind: FkErrorKind,
    op: Option<String>,
    model: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl FkError {
    /// Create a new error with the specified kind
    pub fn new(kind: FkErrorKind) -> Self {
        Self {
            kind,
            op: None,
            model: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add model context (`app_label.ObjectName`)
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> FkErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for FkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(model) = &self.model {
            write!(f, " (model: {})", model)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for FkError {}

// ========== End Error Facility ==========

/// Error taxonomy for fieldkit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldkitError {
    /// No record with this identity key exists in the store
    #[error("{model} matching pk {pk} does not exist")]
    RecordNotFound { model: String, pk: String },

    /// The record type exposes no relation under this accessor
    #[error("{model} has no relation named '{accessor}'")]
    UnknownRelation { model: String, accessor: String },

    /// The related type has no admin page mounted on the site
    #[error("{model} is not mounted on the admin site \"{site}\"")]
    NotMounted { model: String, site: String },

    /// The record type was never registered with the content-type registry
    #[error("No content type registered for {model}")]
    UnknownContentType { model: String },

    /// A recency window could not be represented as a time delta
    #[error("Invalid recency window: {reason}")]
    InvalidWindow { reason: String },

    /// Title is empty or whitespace-only
    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    /// A generic reference could not be interpreted
    #[error("Invalid generic reference: {reason}")]
    InvalidReference { reason: String },

    /// HTML template failed to compile or render
    #[error("Template error: {message}")]
    Template { message: String },

    /// Settings or message catalogue could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Settings file could not be read
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should never happen)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FieldkitError {
    /// Get the canonical kind for this error
    pub fn kind(&self) -> FkErrorKind {
        FkError::from(self.clone()).kind()
    }
}

impl From<FieldkitError> for FkError {
    fn from(err: FieldkitError) -> Self {
        match err {
            FieldkitError::RecordNotFound { model, pk } => FkError::new(FkErrorKind::NotFound)
                .with_model(model)
                .with_entity_id(pk)
                .with_message("Record not found"),

            FieldkitError::UnknownRelation { model, accessor } => {
                FkError::new(FkErrorKind::UnknownRelation)
                    .with_model(model)
                    .with_message(format!("No relation named '{}'", accessor))
            }

            FieldkitError::NotMounted { model, site } => FkError::new(FkErrorKind::NotMounted)
                .with_model(model)
                .with_op("reverse")
                .with_message(format!("Not mounted on admin site \"{}\"", site)),

            FieldkitError::UnknownContentType { model } => {
                FkError::new(FkErrorKind::UnknownContentType)
                    .with_model(model)
                    .with_message("Content type not registered")
            }

            FieldkitError::InvalidWindow { reason } => {
                FkError::new(FkErrorKind::InvalidWindow).with_message(reason)
            }

            FieldkitError::InvalidTitle { reason } => {
                FkError::new(FkErrorKind::InvalidTitle).with_message(reason)
            }

            FieldkitError::InvalidReference { reason } => {
                FkError::new(FkErrorKind::InvalidInput).with_message(reason)
            }

            FieldkitError::Template { message } => FkError::new(FkErrorKind::Template)
                .with_op("render")
                .with_message(message),

            FieldkitError::Config { message } => {
                FkError::new(FkErrorKind::Config).with_message(message)
            }

            FieldkitError::Io { message } => FkError::new(FkErrorKind::Io).with_message(message),

            FieldkitError::Internal { message } => {
                FkError::new(FkErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<minijinja::Error> for FieldkitError {
    fn from(err: minijinja::Error) -> Self {
        FieldkitError::Template {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FieldkitError {
    fn from(err: toml::de::Error) -> Self {
        FieldkitError::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for FieldkitError {
    fn from(err: std::io::Error) -> Self {
        FieldkitError::Io {
            message: err.to_string(),
        }
    }
}
