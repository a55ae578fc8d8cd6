//! Error handling and result types for AvlTree operations.
//!
//! The engine itself never fails: duplicates, absent keys and an empty history
//! are defined as no-ops. Errors only surface at the boundary (parsing input,
//! validating configuration) and from the checked `try_*` operations.

use thiserror::Error;

/// Error type for AVL tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvlTreeError {
    /// Input could not be turned into a comparable key.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Invalid configuration specified.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Key is already present in the tree.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    /// Key not found in the tree.
    #[error("Key not found in tree")]
    KeyNotFound,
    /// Internal data structure integrity violation.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
}

impl AvlTreeError {
    /// Create an InvalidArgument error for a rejected input token
    pub fn invalid_argument(token: &str, reason: &str) -> Self {
        Self::InvalidArgument(format!("'{}' {}", token, reason))
    }

    /// Create an InvalidConfig error with context
    pub fn invalid_config(field: &str, details: &str) -> Self {
        Self::InvalidConfig(format!("{}: {}", field, details))
    }

    /// Create a DuplicateKey error from the offending key
    pub fn duplicate_key<K: std::fmt::Debug>(key: &K) -> Self {
        Self::DuplicateKey(format!("{:?}", key))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error was caused by caller input
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidConfig(_))
    }
}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, AvlTreeError>;

/// Result type for key parsing and lookup
pub type KeyResult<T> = Result<T, AvlTreeError>;

/// Result type for checked tree modifications
pub type ModifyResult<T> = Result<T, AvlTreeError>;

/// Result type for tree construction and validation
pub type InitResult<T> = Result<T, AvlTreeError>;

/// Result extension trait for attaching context to tree errors
pub trait TreeResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> Result<T, AvlTreeError>;

    /// Log the error and continue with a default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> TreeResultExt<T> for Result<T, AvlTreeError> {
    fn with_context(self, context: &str) -> Result<T, AvlTreeError> {
        self.map_err(|e| match e {
            AvlTreeError::KeyNotFound => AvlTreeError::KeyNotFound,
            AvlTreeError::InvalidArgument(msg) => {
                AvlTreeError::InvalidArgument(format!("{}: {}", context, msg))
            }
            AvlTreeError::InvalidConfig(msg) => AvlTreeError::invalid_config(context, &msg),
            AvlTreeError::DuplicateKey(msg) => {
                AvlTreeError::DuplicateKey(format!("{}: {}", context, msg))
            }
            AvlTreeError::DataIntegrityError(msg) => AvlTreeError::data_integrity(context, &msg),
        })
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "AVL tree operation failed, using default");
                T::default()
            }
        }
    }
}
