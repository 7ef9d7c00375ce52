//! Argument binding and validation for parameterized triggers.
//!
//! `ArgumentBinder` checks an untyped argument bundle against a trigger's
//! `ParameterSignature` and hands out positional, typed views of the
//! arguments. It holds no state besides its null policy, so a single
//! binder can be shared freely across threads.
//!
//! # Arity contract
//!
//! The argument count is only checked up front against the upper bound:
//! a bundle longer than the signature is rejected with
//! `TooManyArguments`. A missing argument is reported as `Arity` for the
//! specific position that was asked for. `extract_at` on a short bundle
//! therefore only fails when a missing slot is actually requested, and
//! `validate_all` reports the first missing position after type-checking
//! every position before it.
//!
//! # Example
//!
//! ```rust
//! use trigger_args::args;
//! use trigger_args::binder::{ArgumentBinder, BindError};
//! use trigger_args::core::{ParamKind, ParameterSignature};
//!
//! let binder = ArgumentBinder::new();
//! let signature = ParameterSignature::new([ParamKind::Int, ParamKind::Text]);
//! let bundle = args![5, "x"];
//!
//! binder.validate_all(&bundle, &signature).unwrap();
//! assert_eq!(binder.extract_typed::<i64>(&bundle, 0), Ok(5));
//! assert_eq!(binder.extract_typed::<&str>(&bundle, 1), Ok("x"));
//!
//! let short = args![5];
//! assert_eq!(
//!     binder.extract_at(&short, &ParamKind::Text, 1),
//!     Err(BindError::Arity { index: 1, expected: ParamKind::Text })
//! );
//! ```

pub mod convert;
pub mod error;
pub mod tuple;

pub use convert::{FromArgument, ParamType};
pub use error::BindError;
pub use tuple::{FromArguments, ParamTypes};

use crate::core::{ArgValue, ParamKind, ParameterSignature};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// How null arguments are treated against declared kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullPolicy {
    /// Null passes every slot check. Whether the slot may really be
    /// absent is left to the caller.
    #[default]
    Permissive,

    /// Null fails with `NullArgument` against kinds that require a value.
    Strict,
}

/// Validates argument bundles against parameter signatures.
///
/// All methods are pure: they read their inputs, never mutate them, and
/// never log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgumentBinder {
    null_policy: NullPolicy,
}

impl ArgumentBinder {
    /// Binder with the permissive null policy.
    pub const fn new() -> Self {
        Self::with_null_policy(NullPolicy::Permissive)
    }

    /// Binder that rejects null against non-nullable kinds.
    pub const fn strict() -> Self {
        Self::with_null_policy(NullPolicy::Strict)
    }

    pub const fn with_null_policy(null_policy: NullPolicy) -> Self {
        Self { null_policy }
    }

    pub fn null_policy(&self) -> NullPolicy {
        self.null_policy
    }

    /// Borrow the argument at `index`, checked against `expected`.
    ///
    /// Fails with `Arity` when the bundle has no argument at `index`, and
    /// with `TypeMismatch` when a non-null argument is not assignable to
    /// `expected`. Null passes unless the binder is strict and `expected`
    /// is not nullable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trigger_args::binder::{ArgumentBinder, BindError};
    /// use trigger_args::core::{ArgValue, ParamKind, ValueKind};
    ///
    /// let binder = ArgumentBinder::new();
    /// let bundle = vec![ArgValue::from("notAnInt")];
    ///
    /// assert_eq!(
    ///     binder.extract_at(&bundle, &ParamKind::Int, 0),
    ///     Err(BindError::TypeMismatch {
    ///         index: 0,
    ///         expected: ParamKind::Int,
    ///         actual: ValueKind::Text,
    ///     })
    /// );
    /// assert!(binder.extract_at(&bundle, &ParamKind::Any, 0).is_ok());
    /// ```
    pub fn extract_at<'a>(
        &self,
        args: &'a [ArgValue],
        expected: &ParamKind,
        index: usize,
    ) -> Result<&'a ArgValue, BindError> {
        let value = args.get(index).ok_or_else(|| BindError::Arity {
            index,
            expected: expected.clone(),
        })?;
        self.check_slot(value, expected, index)?;
        Ok(value)
    }

    /// Extract the argument at `index` as `T`.
    ///
    /// The expected kind is `T::kind()`. Besides the `extract_at` failures,
    /// a null argument fails with `NullArgument` unless `T` is an `Option`.
    pub fn extract_typed<'a, T: FromArgument<'a>>(
        &self,
        args: &'a [ArgValue],
        index: usize,
    ) -> Result<T, BindError> {
        let expected = T::kind();
        let value = self.extract_at(args, &expected, index)?;
        convert::narrow(value, expected, index)
    }

    /// Check a whole bundle against `signature`, stopping at the first
    /// failure.
    pub fn validate_all(
        &self,
        args: &[ArgValue],
        signature: &ParameterSignature,
    ) -> Result<(), BindError> {
        if args.len() > signature.len() {
            return Err(BindError::TooManyArguments {
                expected: signature.len(),
                actual: args.len(),
            });
        }

        for (index, expected) in signature.iter().enumerate() {
            self.extract_at(args, expected, index)?;
        }

        Ok(())
    }

    /// Check a whole bundle against `signature`, accumulating ALL failures.
    ///
    /// Reports excess arguments, every missing position and every
    /// mismatched position in one pass. Use `validate_all` on the dispatch
    /// path; this is for diagnostics.
    pub fn diagnose(
        &self,
        args: &[ArgValue],
        signature: &ParameterSignature,
    ) -> Validation<(), NonEmptyVec<BindError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BindError>>> = Vec::new();

        if args.len() > signature.len() {
            checks.push(Validation::fail(BindError::TooManyArguments {
                expected: signature.len(),
                actual: args.len(),
            }));
        }

        for (index, expected) in signature.iter().enumerate() {
            let check = match self.extract_at(args, expected, index) {
                Ok(_) => Validation::success(()),
                Err(error) => Validation::fail(error),
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate a bundle and bind it into a tuple of typed parameters.
    pub fn bind<'a, A: FromArguments<'a>>(&self, args: &'a [ArgValue]) -> Result<A, BindError> {
        A::bind(self, args)
    }

    fn check_slot(
        &self,
        value: &ArgValue,
        expected: &ParamKind,
        index: usize,
    ) -> Result<(), BindError> {
        match value.kind() {
            None => match self.null_policy {
                NullPolicy::Strict if !expected.is_nullable() => Err(BindError::NullArgument {
                    index,
                    expected: expected.clone(),
                }),
                _ => Ok(()),
            },
            Some(actual) if expected.accepts(&actual) => Ok(()),
            Some(actual) => Err(BindError::TypeMismatch {
                index,
                expected: expected.clone(),
                actual,
            }),
        }
    }
}
