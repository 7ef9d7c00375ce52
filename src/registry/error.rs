//! Registry errors.

use crate::binder::BindError;
use thiserror::Error;

/// Errors that can occur when configuring triggers or validating fired
/// arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Parameters for trigger '{trigger}' are already configured and cannot be changed")]
    AlreadyConfigured { trigger: String },

    #[error("Invalid arguments for trigger '{trigger}': {source}")]
    Binding { trigger: String, source: BindError },
}

impl RegistryError {
    /// The binding failure, when this error wraps one.
    pub fn bind_error(&self) -> Option<&BindError> {
        match self {
            RegistryError::Binding { source, .. } => Some(source),
            RegistryError::AlreadyConfigured { .. } => None,
        }
    }
}
