//! Manifest error types.

use crate::registry::RegistryError;
use std::fmt;
use thiserror::Error;

/// Encoding a manifest is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Binary,
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Json => f.write_str("JSON"),
            ManifestFormat::Binary => f.write_str("binary"),
        }
    }
}

/// Errors that can occur when saving, loading or restoring a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Could not encode manifest as {format}: {reason}")]
    Encode {
        format: ManifestFormat,
        reason: String,
    },

    #[error("Could not decode {format} manifest: {reason}")]
    Decode {
        format: ManifestFormat,
        reason: String,
    },

    #[error("Unsupported manifest version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Two entries declare parameters for the same trigger.
    #[error("Trigger '{trigger}' is declared at entries {first} and {duplicate}")]
    DuplicateTrigger {
        trigger: String,
        first: usize,
        duplicate: usize,
    },

    #[error("Could not restore registry: {0}")]
    Registry(#[from] RegistryError),
}

impl ManifestError {
    /// Name of the trigger the error is about, if any.
    pub fn trigger(&self) -> Option<&str> {
        match self {
            ManifestError::DuplicateTrigger { trigger, .. } => Some(trigger),
            ManifestError::Registry(
                RegistryError::AlreadyConfigured { trigger }
                | RegistryError::Binding { trigger, .. },
            ) => Some(trigger),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_trigger_names_both_entries() {
        let error = ManifestError::DuplicateTrigger {
            trigger: "Call".to_string(),
            first: 0,
            duplicate: 2,
        };

        assert_eq!(
            error.to_string(),
            "Trigger 'Call' is declared at entries 0 and 2"
        );
        assert_eq!(error.trigger(), Some("Call"));
    }

    #[test]
    fn registry_errors_keep_the_trigger_name() {
        let error = ManifestError::from(RegistryError::AlreadyConfigured {
            trigger: "Hold".to_string(),
        });

        assert_eq!(error.trigger(), Some("Hold"));
        assert!(error.to_string().starts_with("Could not restore registry"));
    }

    #[test]
    fn format_is_part_of_the_message() {
        let error = ManifestError::Decode {
            format: ManifestFormat::Binary,
            reason: "unexpected end of input".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Could not decode binary manifest: unexpected end of input"
        );
        assert_eq!(error.trigger(), None);
    }
}
