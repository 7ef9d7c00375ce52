//! Macros for building argument bundles and declaring triggers.

/// Build an argument bundle (`Vec<ArgValue>`) from anything convertible
/// into `ArgValue`.
///
/// `u64`, `usize`, `isize` and 128-bit integers only convert fallibly, so
/// pass them through `ArgValue::try_from` (or cast) first.
///
/// # Example
///
/// ```
/// use trigger_args::args;
/// use trigger_args::core::ArgValue;
///
/// let bundle = args![5, "x", None::<bool>];
/// assert_eq!(bundle, vec![ArgValue::Int(5), ArgValue::from("x"), ArgValue::Null]);
///
/// let items = ["a", "b", "c"];
/// let bundle = args![ArgValue::try_from(items.len()).unwrap()];
/// assert_eq!(bundle, vec![ArgValue::Int(3)]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::core::ArgValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::ArgValue::from($value)),+]
    };
}

/// Generate Trigger trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use trigger_args::trigger_enum;
/// use trigger_args::core::Trigger;
///
/// trigger_enum! {
///     pub enum CallTrigger {
///         Dial,
///         Hangup,
///         SetVolume,
///     }
/// }
///
/// assert_eq!(CallTrigger::SetVolume.name(), "SetVolume");
/// ```
#[macro_export]
macro_rules! trigger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
