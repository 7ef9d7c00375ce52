//! Per-trigger parameter signatures, as owned by a state machine.
//!
//! The registry is the seam between a state machine engine and the
//! binder: the engine declares each parameterized trigger once, then asks
//! the registry to validate every bundle fired with that trigger before
//! it runs guards or actions.

pub mod error;
pub mod parameters;

pub use error::RegistryError;
pub use parameters::TriggerWithParameters;

use crate::binder::{ArgumentBinder, ParamTypes};
use crate::core::{ArgValue, ParameterSignature, Trigger};
use std::collections::HashMap;
use tracing::debug;

/// Signature table keyed by trigger.
///
/// # Example
///
/// ```rust
/// use trigger_args::args;
/// use trigger_args::binder::BindError;
/// use trigger_args::core::{ParamKind, ParameterSignature};
/// use trigger_args::registry::TriggerRegistry;
/// use trigger_args::trigger_enum;
///
/// trigger_enum! {
///     enum Phone {
///         Dial,
///         Hangup,
///     }
/// }
///
/// let mut registry = TriggerRegistry::new();
/// registry
///     .configure(Phone::Dial, ParameterSignature::new([ParamKind::Text]))
///     .unwrap();
///
/// assert!(registry.validate(&Phone::Dial, &args!["555-0100"]).is_ok());
///
/// let error = registry.validate(&Phone::Dial, &args!["555-0100", 1]).unwrap_err();
/// assert_eq!(
///     error.bind_error(),
///     Some(&BindError::TooManyArguments { expected: 1, actual: 2 })
/// );
///
/// // Triggers without declared parameters are not checked.
/// assert!(registry.validate(&Phone::Hangup, &args![true]).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TriggerRegistry<T: Trigger> {
    signatures: HashMap<T, ParameterSignature>,
    order: Vec<T>,
    binder: ArgumentBinder,
}

impl<T: Trigger> TriggerRegistry<T> {
    /// Create an empty registry using the permissive binder.
    pub fn new() -> Self {
        Self::with_binder(ArgumentBinder::new())
    }

    pub fn with_binder(binder: ArgumentBinder) -> Self {
        Self {
            signatures: HashMap::new(),
            order: Vec::new(),
            binder,
        }
    }

    pub fn binder(&self) -> &ArgumentBinder {
        &self.binder
    }

    /// Declare the parameters of a trigger.
    ///
    /// A trigger's parameters can only be declared once.
    pub fn configure(
        &mut self,
        trigger: T,
        signature: ParameterSignature,
    ) -> Result<(), RegistryError> {
        if self.signatures.contains_key(&trigger) {
            return Err(RegistryError::AlreadyConfigured {
                trigger: trigger.name().to_string(),
            });
        }

        debug!(trigger = trigger.name(), %signature, "Configured trigger parameters");
        self.order.push(trigger.clone());
        self.signatures.insert(trigger, signature);
        Ok(())
    }

    /// Declare the parameters of a trigger from a tuple type, returning a
    /// typed handle for binding.
    pub fn configure_typed<A: ParamTypes>(
        &mut self,
        trigger: T,
    ) -> Result<TriggerWithParameters<T, A>, RegistryError> {
        let typed = TriggerWithParameters::new(trigger.clone());
        self.configure(trigger, typed.signature().clone())?;
        Ok(typed)
    }

    pub fn signature(&self, trigger: &T) -> Option<&ParameterSignature> {
        self.signatures.get(trigger)
    }

    pub fn is_configured(&self, trigger: &T) -> bool {
        self.signatures.contains_key(trigger)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Configured triggers, in configuration order.
    pub fn triggers(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    /// Configured triggers with their signatures, in configuration order.
    pub fn entries(&self) -> impl Iterator<Item = (&T, &ParameterSignature)> {
        self.order
            .iter()
            .filter_map(|trigger| self.signatures.get(trigger).map(|sig| (trigger, sig)))
    }

    /// Validate a bundle fired with `trigger`.
    ///
    /// Triggers without declared parameters accept any bundle.
    pub fn validate(&self, trigger: &T, args: &[ArgValue]) -> Result<(), RegistryError> {
        let Some(signature) = self.signatures.get(trigger) else {
            return Ok(());
        };

        self.binder.validate_all(args, signature).map_err(|source| {
            debug!(trigger = trigger.name(), error = %source, "Rejected trigger arguments");
            RegistryError::Binding {
                trigger: trigger.name().to_string(),
                source,
            }
        })
    }
}

impl<T: Trigger> Default for TriggerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
