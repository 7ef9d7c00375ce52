//! Signature manifests for saving and restoring trigger registries.
//!
//! A manifest is a versioned snapshot of every declared trigger signature.
//! It lets tooling inspect a machine's trigger parameters and lets a
//! registry be rebuilt without re-running the code that declared it.

use crate::core::{ParameterSignature, Trigger};
use crate::registry::TriggerRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub mod error;

pub use error::{ManifestError, ManifestFormat};

/// Version identifier for manifest format
pub const MANIFEST_VERSION: u32 = 1;

/// One declared trigger and its parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TriggerSignature<T: Trigger> {
    pub trigger: T,
    pub signature: ParameterSignature,
}

/// Serializable snapshot of a trigger registry.
/// Does NOT include the binder's null policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SignatureManifest<T: Trigger> {
    /// Manifest format version
    pub version: u32,

    /// Unique manifest identifier
    pub id: String,

    /// When the manifest was generated
    pub generated_at: DateTime<Utc>,

    /// Declared triggers, in configuration order
    pub entries: Vec<TriggerSignature<T>>,
}

impl<T: Trigger> SignatureManifest<T> {
    /// Snapshot every signature declared in `registry`.
    pub fn from_registry(registry: &TriggerRegistry<T>) -> Self {
        let entries = registry
            .entries()
            .map(|(trigger, signature)| TriggerSignature {
                trigger: trigger.clone(),
                signature: signature.clone(),
            })
            .collect();

        Self {
            version: MANIFEST_VERSION,
            id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            entries,
        }
    }

    /// Check the version and that no trigger is declared twice.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion {
                found: self.version,
                supported: MANIFEST_VERSION,
            });
        }

        let mut seen = HashMap::new();
        for (position, entry) in self.entries.iter().enumerate() {
            if let Some(&first) = seen.get(&entry.trigger) {
                return Err(ManifestError::DuplicateTrigger {
                    trigger: entry.trigger.name().to_string(),
                    first,
                    duplicate: position,
                });
            }
            seen.insert(&entry.trigger, position);
        }

        Ok(())
    }

    /// Rebuild a registry from this manifest, using the default binder.
    pub fn into_registry(self) -> Result<TriggerRegistry<T>, ManifestError> {
        self.validate()?;

        let mut registry = TriggerRegistry::new();
        for entry in self.entries {
            registry.configure(entry.trigger, entry.signature)?;
        }
        Ok(registry)
    }

    pub fn to_json(&self) -> Result<String, ManifestError> {
        serde_json::to_string_pretty(self).map_err(|e| ManifestError::Encode {
            format: ManifestFormat::Json,
            reason: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json).map_err(|e| ManifestError::Decode {
            format: ManifestFormat::Json,
            reason: e.to_string(),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ManifestError> {
        bincode::serialize(self).map_err(|e| ManifestError::Encode {
            format: ManifestFormat::Binary,
            reason: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ManifestError> {
        let manifest: Self = bincode::deserialize(bytes).map_err(|e| ManifestError::Decode {
            format: ManifestFormat::Binary,
            reason: e.to_string(),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::core::ParamKind;

    crate::trigger_enum! {
        enum Lift {
            Call,
            Hold,
            Release,
        }
    }

    fn registry() -> TriggerRegistry<Lift> {
        let mut registry = TriggerRegistry::new();
        registry
            .configure(
                Lift::Call,
                ParameterSignature::new([ParamKind::Int, ParamKind::optional(ParamKind::Text)]),
            )
            .unwrap();
        registry
            .configure(Lift::Hold, ParameterSignature::new([ParamKind::Number]))
            .unwrap();
        registry
    }

    #[test]
    fn manifest_captures_registry_in_order() {
        let manifest = SignatureManifest::from_registry(&registry());

        assert_eq!(manifest.version, MANIFEST_VERSION);
        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(manifest.entries[0].trigger, Lift::Call);
        assert_eq!(manifest.entries[1].trigger, Lift::Hold);
        assert!(Uuid::parse_str(&manifest.id).is_ok());
    }

    #[test]
    fn json_manifest_restores_registry() {
        let manifest = SignatureManifest::from_registry(&registry());
        let json = manifest.to_json().unwrap();

        let restored = SignatureManifest::<Lift>::from_json(&json)
            .unwrap()
            .into_registry()
            .unwrap();

        assert_eq!(restored.len(), 2);
        assert!(restored.validate(&Lift::Call, &args![3, "lobby"]).is_ok());
        assert!(restored.validate(&Lift::Hold, &args!["now"]).is_err());
        assert!(!restored.is_configured(&Lift::Release));
    }

    #[test]
    fn binary_manifest_roundtrip() {
        let manifest = SignatureManifest::from_registry(&registry());
        let bytes = manifest.to_bytes().unwrap();
        let decoded = SignatureManifest::<Lift>::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.id, manifest.id);
        assert_eq!(decoded.entries, manifest.entries);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut manifest = SignatureManifest::from_registry(&registry());
        manifest.version = MANIFEST_VERSION + 1;
        let json = serde_json::to_string(&manifest).unwrap();

        let result = SignatureManifest::<Lift>::from_json(&json);
        assert!(matches!(
            result,
            Err(ManifestError::UnsupportedVersion { found, supported })
                if found == MANIFEST_VERSION + 1 && supported == MANIFEST_VERSION
        ));
    }

    #[test]
    fn duplicate_triggers_are_rejected() {
        let mut manifest = SignatureManifest::from_registry(&registry());
        let duplicate = manifest.entries[0].clone();
        manifest.entries.push(duplicate);

        match manifest.validate() {
            Err(ManifestError::DuplicateTrigger {
                trigger,
                first,
                duplicate,
            }) => {
                assert_eq!(trigger, "Call");
                assert_eq!((first, duplicate), (0, 2));
            }
            other => panic!("Expected duplicate trigger error, got {other:?}"),
        }
        assert!(matches!(
            manifest.into_registry(),
            Err(ManifestError::DuplicateTrigger { .. })
        ));
    }

    #[test]
    fn malformed_json_reports_deserialization_failure() {
        let result = SignatureManifest::<Lift>::from_json("{ not json");
        assert!(matches!(
            result,
            Err(ManifestError::Decode {
                format: ManifestFormat::Json,
                ..
            })
        ));
    }

    #[test]
    fn truncated_bytes_report_binary_decode_failure() {
        let bytes = SignatureManifest::from_registry(&registry()).to_bytes().unwrap();
        let result = SignatureManifest::<Lift>::from_bytes(&bytes[..bytes.len() / 2]);

        assert!(matches!(
            result,
            Err(ManifestError::Decode {
                format: ManifestFormat::Binary,
                ..
            })
        ));
    }
}
