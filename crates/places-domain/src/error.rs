//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the places dataset
///
/// Schema violations are not errors: they are reported as
/// [`ValidationIssue`](crate::value_objects::ValidationIssue)s so that batch
/// ingestion can collect every per-row outcome.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// A raw row could not be parsed into typed fields
    #[error("{}", describe_decode(.row, .field, .message))]
    Decode {
        /// Position of the row in its source, when known
        row: Option<usize>,
        /// Column that failed to decode
        field: String,
        /// Description of the failure
        message: String,
    },

    /// Vector length disagrees with the established dimensionality
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality fixed by the store
        expected: usize,
        /// Length of the offending vector
        actual: usize,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn describe_decode(row: &Option<usize>, field: &str, message: &str) -> String {
    match row {
        Some(row) => format!("Decode error at row {row}, field '{field}': {message}"),
        None => format!("Decode error in field '{field}': {message}"),
    }
}

// Dataset error creation methods
impl Error {
    /// Create a decode error for a field
    pub fn decode<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::Decode {
            row: None,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Attach a row position to a decode error; other errors pass through
    #[must_use]
    pub fn at_row(self, index: usize) -> Self {
        match self {
            Self::Decode { field, message, .. } => Self::Decode {
                row: Some(index),
                field,
                message,
            },
            other => other,
        }
    }

    /// Whether this error means a row could not be turned into a record
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Json { .. })
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
