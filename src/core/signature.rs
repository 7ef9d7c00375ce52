//! Parameter signatures declared by parameterized triggers.

use super::kind::ParamKind;
use crate::binder::ParamTypes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of parameter kinds a trigger's payload must match.
///
/// A signature is immutable once built. Its length is the trigger's arity.
///
/// # Example
///
/// ```rust
/// use trigger_args::core::{ParamKind, ParameterSignature};
///
/// let explicit = ParameterSignature::new([ParamKind::Int, ParamKind::Text]);
/// let derived = ParameterSignature::of::<(i64, String)>();
///
/// assert_eq!(explicit, derived);
/// assert_eq!(explicit.len(), 2);
/// assert_eq!(explicit.to_string(), "(int, text)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSignature {
    kinds: Vec<ParamKind>,
}

impl ParameterSignature {
    pub fn new(kinds: impl IntoIterator<Item = ParamKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Signature of a trigger that takes no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive the signature from a tuple of Rust parameter types.
    pub fn of<A: ParamTypes>() -> Self {
        A::signature()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParamKind> {
        self.kinds.get(index)
    }

    pub fn kinds(&self) -> &[ParamKind] {
        &self.kinds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamKind> {
        self.kinds.iter()
    }
}

impl<'s> IntoIterator for &'s ParameterSignature {
    type Item = &'s ParamKind;
    type IntoIter = std::slice::Iter<'s, ParamKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ParamKind> for ParameterSignature {
    fn from_iter<I: IntoIterator<Item = ParamKind>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for ParameterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, kind) in self.kinds.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}")?;
        }
        f.write_str(")")
    }
}
