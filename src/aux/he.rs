use std::panic::Location;

/// Defines an error struct whose fields are the context of the failure.
///
/// The message is written with `write!` after the fields are bound by name,
/// so the format arguments can refer to them directly.
///
/// ```ignore
/// make_custom_error!(TooSmall { got: i32, min: i32 }, "{} is below {}", got, min);
/// ```
macro_rules! make_custom_error {
    ($n:ident { $($field:ident : $ty:ty),* $(,)? }, $($error_msg:tt)*) => {
        #[derive(Clone, PartialEq)]
        pub struct $n {
            $(pub $field: $ty,)*
        }

        impl $n {
            #[allow(clippy::new_without_default)]
            pub fn new($($field: $ty),*) -> Self {
                Self { $($field,)* }
            }
        }

        impl ::std::fmt::Display for $n {
            #[allow(unused_variables)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let Self { $($field,)* } = self;
                write!(f, $($error_msg)*)
            }
        }

        impl ::std::fmt::Debug for $n {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($n))
                    $(.field(stringify!($field), &self.$field))*
                    .finish()
            }
        }

        impl ::std::error::Error for $n {}
    };
}

pub(crate) use make_custom_error;

/// Caller location of the failing call, for debug logs.
#[track_caller]
pub(crate) fn caller_loc() -> String {
    let loc = Location::caller();
    format!("{}:{}:{}", loc.file(), loc.line(), loc.column())
}
