//! Core Trigger trait for state machine triggers.
//!
//! Triggers are the named events a caller fires. Parameterized triggers
//! carry a payload whose shape is declared once, up front, as a
//! `ParameterSignature`.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine triggers.
///
/// # Required Traits
///
/// - `Clone`, `Eq`, `Hash`: triggers key the signature registry
/// - `Debug`: triggers must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: triggers appear in signature manifests
///
/// # Example
///
/// ```rust
/// use trigger_args::core::Trigger;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorTrigger {
///     Open,
///     Close,
///     Lock,
/// }
///
/// impl Trigger for DoorTrigger {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Close => "Close",
///             Self::Lock => "Lock",
///         }
///     }
/// }
///
/// assert_eq!(DoorTrigger::Lock.name(), "Lock");
/// ```
pub trait Trigger:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &str;
}
