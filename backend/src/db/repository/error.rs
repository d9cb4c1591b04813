//! Repository failures and where they happened.
//!
//! The HTTP layer turns the variant into a status code and the attached
//! [`ErrorContext`] into the `details` field of the error body, so a client
//! sees e.g. `[operation=update_rig, entity=rig, id=r-7]` next to the message.

use std::fmt;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Which call failed, on what record.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Repository method name, e.g. `create_inspection`.
    pub operation: Option<String>,
    /// `inspection`, `rig`, `inspector` or `seed`.
    pub entity: Option<String>,
    pub entity_id: Option<String>,
    /// Free text, e.g. the seed file path.
    pub details: Option<String>,
    /// Set for store outages; never for bad input.
    pub retryable: bool,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("operation", self.operation.as_deref()),
            ("entity", self.entity.as_deref()),
            ("id", self.entity_id.as_deref()),
            ("details", self.details.as_deref()),
            ("retryable", self.retryable.then_some("true")),
        ];
        let parts: Vec<String> = fields
            .iter()
            .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Failure of an inspection, rig or inspector repository call.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Store marked unhealthy; the only retryable kind.
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// Draft rejected: empty title or name, bad `scheduleDate`, negative duration.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Rig or inspector name already taken.
    #[error("Conflict: {message} {context}")]
    Conflict {
        message: String,
        context: ErrorContext,
    },

    /// Unreadable `repository.toml`, unknown repository type or bad seed file.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    #[error("Internal error: {message} {context}")]
    InternalError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::connection_with_context(message, ErrorContext::default())
    }

    /// Outage errors are always flagged retryable.
    pub fn connection_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: context.retryable(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::not_found_with_context(message, ErrorContext::default())
    }

    pub fn not_found_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::validation_with_context(message, ErrorContext::default())
    }

    pub fn validation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    pub fn conflict_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Conflict {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::configuration_with_context(message, ErrorContext::default())
    }

    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }

    pub fn message(&self) -> &str {
        self.parts().0
    }

    pub fn context(&self) -> &ErrorContext {
        self.parts().1
    }

    fn parts(&self) -> (&str, &ErrorContext) {
        match self {
            Self::ConnectionError { message, context }
            | Self::NotFound { message, context }
            | Self::ValidationError { message, context }
            | Self::Conflict { message, context }
            | Self::ConfigurationError { message, context }
            | Self::InternalError { message, context } => (message, context),
        }
    }
}
