//! Untyped argument values supplied when firing a trigger.

use super::kind::{ObjectTag, ValueKind};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Shared handle to an opaque, caller-defined object.
///
/// Equality is identity: two handles are equal when they point at the
/// same allocation.
#[derive(Clone)]
pub struct OpaqueRef {
    value: Arc<dyn Any + Send + Sync>,
    tag: ObjectTag,
}

impl OpaqueRef {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            value,
            tag: ObjectTag::of::<T>(),
        }
    }

    /// Runtime type of the wrapped value.
    pub fn tag(&self) -> ObjectTag {
        self.tag
    }

    /// Concrete type name of the wrapped value. Not guaranteed unique.
    pub fn type_name(&self) -> &'static str {
        self.tag.name()
    }

    pub fn type_id(&self) -> TypeId {
        self.tag.type_id()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Clone out a typed handle to the wrapped value.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }
}

impl PartialEq for OpaqueRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for OpaqueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueRef")
            .field("type_name", &self.tag.name())
            .finish_non_exhaustive()
    }
}

/// One positional argument in an argument bundle.
///
/// An argument bundle is simply a slice of these values. Any position may
/// hold `Null`.
///
/// # Example
///
/// ```rust
/// use trigger_args::core::{ArgValue, ValueKind};
///
/// let bundle: Vec<ArgValue> = vec![5.into(), "x".into(), ArgValue::Null];
///
/// assert_eq!(bundle[0].kind(), Some(ValueKind::Int));
/// assert_eq!(bundle[1].as_text(), Some("x"));
/// assert!(bundle[2].is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ArgValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Object(OpaqueRef),
}

impl ArgValue {
    /// Wrap an arbitrary value as an opaque object argument.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        ArgValue::Object(OpaqueRef::new(value))
    }

    /// Wrap an already shared value as an opaque object argument.
    pub fn shared<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        ArgValue::Object(OpaqueRef::from_arc(value))
    }

    /// Runtime kind of this value, or `None` for null.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            ArgValue::Null => None,
            ArgValue::Bool(_) => Some(ValueKind::Bool),
            ArgValue::Int(_) => Some(ValueKind::Int),
            ArgValue::Float(_) => Some(ValueKind::Float),
            ArgValue::Text(_) => Some(ValueKind::Text),
            ArgValue::Object(object) => Some(ValueKind::Object(object.tag())),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ArgValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&OpaqueRef> {
        match self {
            ArgValue::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

macro_rules! int_into_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    ArgValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_into_arg!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers only convert when the value fits in an `i64`.
macro_rules! int_try_into_arg {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for ArgValue {
                type Error = std::num::TryFromIntError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(ArgValue::Int)
                }
            }
        )*
    };
}

int_try_into_arg!(u64, usize, isize, i128, u128);

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        ArgValue::Float(f64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl From<OpaqueRef> for ArgValue {
    fn from(value: OpaqueRef) -> Self {
        ArgValue::Object(value)
    }
}

impl<T: Into<ArgValue>> From<Option<T>> for ArgValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ArgValue::Null, Into::into)
    }
}
