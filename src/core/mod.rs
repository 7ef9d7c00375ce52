//! Core types for typed trigger parameters.
//!
//! This module contains the data model shared by the binder and the
//! registry:
//! - Parameter kinds and their assignability rules
//! - Untyped argument values
//! - Immutable parameter signatures
//! - The `Trigger` trait
//!
//! Everything here is plain data with pure methods.

mod kind;
mod signature;
mod trigger;
mod value;

pub use kind::{ObjectTag, ObjectType, ParamKind, ValueKind};
pub use signature::ParameterSignature;
pub use trigger::Trigger;
pub use value::{ArgValue, OpaqueRef};
