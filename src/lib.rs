//! Typed trigger parameters for state machines.
//!
//! Parameterized triggers carry a payload. This crate lets a state machine
//! declare the shape of that payload once, as a `ParameterSignature`, and
//! check every fired argument bundle against it before any guard or action
//! sees the arguments.
//!
//! # Core Concepts
//!
//! - **ParamKind**: closed set of parameter kinds with assignability rules
//! - **ArgValue**: one untyped argument; a bundle is a slice of them
//! - **ArgumentBinder**: pure validation and typed extraction
//! - **TriggerRegistry**: the signatures a machine has declared
//! - **SignatureManifest**: versioned snapshot of a registry
//!
//! # Example
//!
//! ```rust
//! use trigger_args::args;
//! use trigger_args::binder::{ArgumentBinder, BindError};
//! use trigger_args::core::{ParamKind, ParameterSignature};
//!
//! let binder = ArgumentBinder::new();
//! let signature = ParameterSignature::new([ParamKind::Int]);
//!
//! assert_eq!(
//!     binder.validate_all(&args![5, "extra"], &signature),
//!     Err(BindError::TooManyArguments { expected: 1, actual: 2 })
//! );
//!
//! let (count,): (i64,) = binder.bind(&args![5]).unwrap();
//! assert_eq!(count, 5);
//! ```

mod macros;

pub mod binder;
pub mod core;
pub mod manifest;
pub mod registry;

// Re-export commonly used types
pub use crate::binder::{ArgumentBinder, BindError, FromArgument, NullPolicy};
pub use crate::core::{ArgValue, ParamKind, ParameterSignature, Trigger, ValueKind};
pub use crate::registry::{RegistryError, TriggerRegistry, TriggerWithParameters};
