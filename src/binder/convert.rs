//! Typed narrowing from `ArgValue` into Rust types.

use crate::binder::error::BindError;
use crate::core::{ArgValue, ParamKind};
use std::any::Any;
use std::sync::Arc;

/// A Rust type that can be declared as a trigger parameter.
pub trait ParamType {
    /// The parameter kind a slot of this type declares.
    fn kind() -> ParamKind;
}

/// A Rust type that can be narrowed out of a borrowed `ArgValue`.
///
/// `from_argument` returns `None` when the value does not fit, including
/// when it is null and `Self` cannot represent null. Borrowing
/// implementations (`&'a str`, `&'a ArgValue`) are views into the bundle
/// and cannot outlive it.
pub trait FromArgument<'a>: ParamType + Sized {
    fn from_argument(value: &'a ArgValue) -> Option<Self>;
}

/// Narrow a value that already passed the slot check for `expected`.
pub(crate) fn narrow<'a, T: FromArgument<'a>>(
    value: &'a ArgValue,
    expected: ParamKind,
    index: usize,
) -> Result<T, BindError> {
    T::from_argument(value).ok_or_else(|| match value.kind() {
        None => BindError::NullArgument { index, expected },
        Some(actual) => BindError::TypeMismatch {
            index,
            expected,
            actual,
        },
    })
}

impl ParamType for bool {
    fn kind() -> ParamKind {
        ParamKind::Bool
    }
}

impl<'a> FromArgument<'a> for bool {
    fn from_argument(value: &'a ArgValue) -> Option<Self> {
        value.as_bool()
    }
}

impl ParamType for i64 {
    fn kind() -> ParamKind {
        ParamKind::Int
    }
}

impl<'a> FromArgument<'a> for i64 {
    fn from_argument(value: &'a ArgValue) -> Option<Self> {
        value.as_int()
    }
}

impl ParamType for f64 {
    fn kind() -> ParamKind {
        ParamKind::Float
    }
}

impl<'a> FromArgument<'a> for f64 {
    fn from_argument(value: &'a ArgValue) -> Option<Self> {
        value.as_float()
    }
}

impl ParamType for String {
    fn kind() -> ParamKind {
        ParamKind::Text
    }
}

impl<'a> FromArgument<'a> for String {
    fn from_argument(value: &'a ArgValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

impl ParamType for &str {
    fn kind() -> ParamKind {
        ParamKind::Text
    }
}

impl<'a> FromArgument<'a> for &'a str {
    fn from_argument(value: &'a ArgValue) -> Option<Self> {
        value.as_text()
    }
}

// The raw value: any kind, null included.
impl ParamType for &ArgValue {
    fn kind() -> ParamKind {
        ParamKind::Any
    }
}

impl<'a> FromArgument<'a> for &'a ArgValue {
    fn from_argument(value: &'a ArgValue) -> Option<Self> {
        Some(value)
    }
}

impl<T: Any + Send + Sync> ParamType for Arc<T> {
    fn kind() -> ParamKind {
        ParamKind::object_of::<T>()
    }
}

impl<'a, T: Any + Send + Sync> FromArgument<'a> for Arc<T> {
    fn from_argument(value: &'a ArgValue) -> Option<Self> {
        value.as_object()?.downcast::<T>()
    }
}

impl<T: ParamType> ParamType for Option<T> {
    fn kind() -> ParamKind {
        ParamKind::optional(T::kind())
    }
}

impl<'a, T: FromArgument<'a>> FromArgument<'a> for Option<T> {
    fn from_argument(value: &'a ArgValue) -> Option<Self> {
        if value.is_null() {
            Some(None)
        } else {
            T::from_argument(value).map(Some)
        }
    }
}
