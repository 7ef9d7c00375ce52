//! Whole-bundle binding into tuples of typed parameters.

use crate::binder::convert::{FromArgument, ParamType};
use crate::binder::error::BindError;
use crate::binder::ArgumentBinder;
use crate::core::{ArgValue, ParameterSignature};

/// A tuple of parameter types that together describe a signature.
pub trait ParamTypes {
    fn signature() -> ParameterSignature;
}

/// A tuple that can be bound from a complete argument bundle.
///
/// Binding runs `validate_all` against `Self::signature()` first, so a
/// bundle is either bound in full or rejected with one error.
pub trait FromArguments<'a>: ParamTypes + Sized {
    fn bind(binder: &ArgumentBinder, args: &'a [ArgValue]) -> Result<Self, BindError>;
}

macro_rules! tuple_arguments {
    ($($name:ident $index:tt),*) => {
        impl<$($name: ParamType),*> ParamTypes for ($($name,)*) {
            fn signature() -> ParameterSignature {
                ParameterSignature::new(vec![$($name::kind()),*])
            }
        }

        impl<'a, $($name: FromArgument<'a>),*> FromArguments<'a> for ($($name,)*) {
            fn bind(binder: &ArgumentBinder, args: &'a [ArgValue]) -> Result<Self, BindError> {
                binder.validate_all(args, &Self::signature())?;
                Ok(($(binder.extract_typed::<$name>(args, $index)?,)*))
            }
        }
    };
}

tuple_arguments!();
tuple_arguments!(A 0);
tuple_arguments!(A 0, B 1);
tuple_arguments!(A 0, B 1, C 2);
tuple_arguments!(A 0, B 1, C 2, D 3);
