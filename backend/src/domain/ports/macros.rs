//! Helper macro generating port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field type, so adapters
//! can write `LectureRepositoryError::io(err.to_string())` or
//! `LectureRepositoryError::io("disk full")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $(#[doc = concat!("`", stringify!($field), "` field.")] $field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };

    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };
}

pub(crate) use define_port_error;
