//! Triggers with statically typed parameters.

use crate::binder::{ArgumentBinder, BindError, FromArguments, ParamTypes};
use crate::core::{ArgValue, ParameterSignature, Trigger};
use std::fmt;
use std::marker::PhantomData;

/// A trigger whose parameters are the Rust tuple type `A`.
///
/// The signature is derived from `A` once, at construction, and binding
/// an argument bundle yields a value of type `A`.
///
/// # Example
///
/// ```rust
/// use trigger_args::args;
/// use trigger_args::binder::BindError;
/// use trigger_args::registry::TriggerWithParameters;
/// use trigger_args::trigger_enum;
///
/// trigger_enum! {
///     enum Call {
///         Dial,
///     }
/// }
///
/// let dial = TriggerWithParameters::<Call, (String, i64)>::new(Call::Dial);
///
/// let (number, retries) = dial.bind(&args!["555-0100", 3]).unwrap();
/// assert_eq!(number, "555-0100");
/// assert_eq!(retries, 3);
///
/// assert!(matches!(
///     dial.bind(&args!["555-0100"]),
///     Err(BindError::Arity { index: 1, .. })
/// ));
/// ```
pub struct TriggerWithParameters<T: Trigger, A> {
    trigger: T,
    signature: ParameterSignature,
    _args: PhantomData<fn() -> A>,
}

impl<T: Trigger, A: ParamTypes> TriggerWithParameters<T, A> {
    pub fn new(trigger: T) -> Self {
        Self {
            trigger,
            signature: A::signature(),
            _args: PhantomData,
        }
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn signature(&self) -> &ParameterSignature {
        &self.signature
    }

    /// Validate and bind a bundle with the permissive binder.
    pub fn bind<'a>(&self, args: &'a [ArgValue]) -> Result<A, BindError>
    where
        A: FromArguments<'a>,
    {
        self.bind_with(&ArgumentBinder::new(), args)
    }

    pub fn bind_with<'a>(&self, binder: &ArgumentBinder, args: &'a [ArgValue]) -> Result<A, BindError>
    where
        A: FromArguments<'a>,
    {
        binder.bind(args)
    }
}

impl<T: Trigger, A> Clone for TriggerWithParameters<T, A> {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger.clone(),
            signature: self.signature.clone(),
            _args: PhantomData,
        }
    }
}

impl<T: Trigger, A> fmt::Debug for TriggerWithParameters<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerWithParameters")
            .field("trigger", &self.trigger)
            .field("signature", &self.signature)
            .finish()
    }
}
