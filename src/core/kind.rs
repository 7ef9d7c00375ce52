//! Parameter kinds and runtime value kinds.
//!
//! A `ParamKind` is what a trigger declares for one positional slot. A
//! `ValueKind` is what a supplied argument actually is. Assignability is a
//! pure predicate over the pair, so checking an argument never needs
//! open-ended runtime type objects.

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt;

/// Declared type of an opaque object slot.
///
/// Types declared in code carry their `TypeId` and match on it. Types
/// restored from serialized data only carry a name; those match on the
/// type name, which is not guaranteed to be unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ObjectType {
    name: String,
    type_id: Option<TypeId>,
}

impl ObjectType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>().to_string(),
            type_id: Some(TypeId::of::<T>()),
        }
    }

    /// Object type known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    pub fn matches(&self, actual: &ObjectTag) -> bool {
        match self.type_id {
            Some(type_id) => type_id == actual.type_id(),
            None => self.name == actual.name(),
        }
    }
}

impl From<String> for ObjectType {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<ObjectType> for String {
    fn from(object_type: ObjectType) -> Self {
        object_type.name
    }
}

/// Runtime type of an opaque object argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectTag {
    name: &'static str,
    type_id: TypeId,
}

impl ObjectTag {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

/// Declared kind of a single trigger parameter.
///
/// Kinds form a small covariance lattice:
///
/// - `Any` accepts every value
/// - `Number` accepts `Int` and `Float` values
/// - `Object(None)` accepts every opaque object
/// - `Object(Some(ty))` accepts objects of type `ty`
/// - `Optional(k)` accepts whatever `k` accepts, and also permits null
///
/// # Example
///
/// ```rust
/// use trigger_args::core::{ParamKind, ValueKind};
///
/// assert!(ParamKind::Number.accepts(&ValueKind::Int));
/// assert!(ParamKind::Number.accepts(&ValueKind::Float));
/// assert!(!ParamKind::Int.accepts(&ValueKind::Float));
/// assert!(ParamKind::Any.accepts(&ValueKind::Text));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Any,
    Bool,
    Int,
    Float,
    Number,
    Text,
    Object(Option<ObjectType>),
    Optional(Box<ParamKind>),
}

impl ParamKind {
    /// Opaque object slot restricted to values of type `T`.
    pub fn object_of<T: ?Sized + 'static>() -> Self {
        ParamKind::Object(Some(ObjectType::of::<T>()))
    }

    /// Opaque object slot restricted to a type known only by name.
    pub fn object_named(name: impl Into<String>) -> Self {
        ParamKind::Object(Some(ObjectType::named(name)))
    }

    /// Wrap a kind so that it also permits null.
    pub fn optional(inner: ParamKind) -> Self {
        match inner {
            ParamKind::Optional(_) => inner,
            other => ParamKind::Optional(Box::new(other)),
        }
    }

    /// Check whether a value of kind `actual` may fill a slot of this kind.
    ///
    /// Subtypes satisfy supertype-typed slots; an exact match is not
    /// required.
    pub fn accepts(&self, actual: &ValueKind) -> bool {
        match self {
            ParamKind::Any => true,
            ParamKind::Bool => matches!(actual, ValueKind::Bool),
            ParamKind::Int => matches!(actual, ValueKind::Int),
            ParamKind::Float => matches!(actual, ValueKind::Float),
            ParamKind::Number => matches!(actual, ValueKind::Int | ValueKind::Float),
            ParamKind::Text => matches!(actual, ValueKind::Text),
            ParamKind::Object(None) => matches!(actual, ValueKind::Object(_)),
            ParamKind::Object(Some(expected)) => {
                matches!(actual, ValueKind::Object(tag) if expected.matches(tag))
            }
            ParamKind::Optional(inner) => inner.accepts(actual),
        }
    }

    /// Check whether a slot of this kind permits the absence of a value.
    ///
    /// Scalar value kinds (`Bool`, `Int`, `Float`, `Number`) do not.
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            ParamKind::Any | ParamKind::Text | ParamKind::Object(_) | ParamKind::Optional(_)
        )
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Any => f.write_str("any"),
            ParamKind::Bool => f.write_str("bool"),
            ParamKind::Int => f.write_str("int"),
            ParamKind::Float => f.write_str("float"),
            ParamKind::Number => f.write_str("number"),
            ParamKind::Text => f.write_str("text"),
            ParamKind::Object(None) => f.write_str("object"),
            ParamKind::Object(Some(ty)) => write!(f, "object<{}>", ty.name()),
            ParamKind::Optional(inner) => write!(f, "optional<{inner}>"),
        }
    }
}

/// Runtime kind of a supplied, non-null argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    Object(ObjectTag),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => f.write_str("bool"),
            ValueKind::Int => f.write_str("int"),
            ValueKind::Float => f.write_str("float"),
            ValueKind::Text => f.write_str("text"),
            ValueKind::Object(tag) => write!(f, "object<{}>", tag.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sensor;
    struct Actuator;

    fn object_tag_of<T: 'static>(_: &T) -> ObjectTag {
        ObjectTag::of::<T>()
    }

    fn object_kind_of<T: 'static>(_: &T) -> ParamKind {
        ParamKind::object_of::<T>()
    }

    #[test]
    fn scalar_kinds_accept_only_themselves() {
        assert!(ParamKind::Bool.accepts(&ValueKind::Bool));
        assert!(!ParamKind::Bool.accepts(&ValueKind::Int));
        assert!(ParamKind::Int.accepts(&ValueKind::Int));
        assert!(!ParamKind::Int.accepts(&ValueKind::Text));
        assert!(ParamKind::Float.accepts(&ValueKind::Float));
        assert!(!ParamKind::Float.accepts(&ValueKind::Int));
        assert!(ParamKind::Text.accepts(&ValueKind::Text));
        assert!(!ParamKind::Text.accepts(&ValueKind::Bool));
    }

    #[test]
    fn supertypes_accept_subtypes() {
        assert!(ParamKind::Number.accepts(&ValueKind::Int));
        assert!(ParamKind::Number.accepts(&ValueKind::Float));
        assert!(!ParamKind::Number.accepts(&ValueKind::Text));

        for actual in [
            ValueKind::Bool,
            ValueKind::Int,
            ValueKind::Float,
            ValueKind::Text,
            ValueKind::Object(ObjectTag::of::<Sensor>()),
        ] {
            assert!(ParamKind::Any.accepts(&actual));
        }
    }

    #[test]
    fn object_kinds_match_by_type() {
        let sensor = ValueKind::Object(ObjectTag::of::<Sensor>());
        let actuator = ValueKind::Object(ObjectTag::of::<Actuator>());

        assert!(ParamKind::Object(None).accepts(&sensor));
        assert!(ParamKind::Object(None).accepts(&actuator));
        assert!(ParamKind::object_of::<Sensor>().accepts(&sensor));
        assert!(!ParamKind::object_of::<Sensor>().accepts(&actuator));
        assert!(!ParamKind::Object(None).accepts(&ValueKind::Text));
    }

    #[test]
    fn same_named_types_are_told_apart() {
        let first = || 1;
        let second = || 2;

        let actual = ValueKind::Object(object_tag_of(&first));
        assert!(object_kind_of(&first).accepts(&actual));
        assert!(!object_kind_of(&second).accepts(&actual));
    }

    #[test]
    fn named_object_kinds_match_by_name() {
        let sensor = ValueKind::Object(ObjectTag::of::<Sensor>());
        let name = std::any::type_name::<Sensor>();

        assert!(ParamKind::object_named(name).accepts(&sensor));
        assert!(!ParamKind::object_named("other::Sensor").accepts(&sensor));
    }

    #[test]
    fn optional_delegates_to_inner_kind() {
        let kind = ParamKind::optional(ParamKind::Int);
        assert!(kind.accepts(&ValueKind::Int));
        assert!(!kind.accepts(&ValueKind::Text));
        assert!(kind.is_nullable());
    }

    #[test]
    fn optional_does_not_nest() {
        let kind = ParamKind::optional(ParamKind::optional(ParamKind::Bool));
        assert_eq!(kind, ParamKind::Optional(Box::new(ParamKind::Bool)));
    }

    #[test]
    fn nullability_follows_value_and_reference_kinds() {
        assert!(!ParamKind::Bool.is_nullable());
        assert!(!ParamKind::Int.is_nullable());
        assert!(!ParamKind::Float.is_nullable());
        assert!(!ParamKind::Number.is_nullable());
        assert!(ParamKind::Text.is_nullable());
        assert!(ParamKind::Any.is_nullable());
        assert!(ParamKind::Object(None).is_nullable());
    }

    #[test]
    fn kinds_display_readably() {
        assert_eq!(ParamKind::Int.to_string(), "int");
        assert_eq!(ParamKind::Object(None).to_string(), "object");
        assert_eq!(
            ParamKind::object_named("app::Door").to_string(),
            "object<app::Door>"
        );
        assert_eq!(
            ParamKind::optional(ParamKind::Text).to_string(),
            "optional<text>"
        );
        assert_eq!(
            ValueKind::Object(ObjectTag::of::<Sensor>()).to_string(),
            format!("object<{}>", std::any::type_name::<Sensor>())
        );
    }

    #[test]
    fn param_kind_serializes_correctly() {
        let kind = ParamKind::optional(ParamKind::object_named("app::Door"));
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "{\"optional\":{\"object\":\"app::Door\"}}");

        let deserialized: ParamKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
        assert_eq!(serde_json::to_string(&ParamKind::Int).unwrap(), "\"int\"");
    }

    #[test]
    fn deserialized_object_kinds_keep_only_the_name() {
        let json = serde_json::to_string(&ParamKind::object_of::<Sensor>()).unwrap();
        let restored: ParamKind = serde_json::from_str(&json).unwrap();

        assert_eq!(
            restored,
            ParamKind::object_named(std::any::type_name::<Sensor>())
        );
        assert!(restored.accepts(&ValueKind::Object(ObjectTag::of::<Sensor>())));
    }
}
