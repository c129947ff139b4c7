//! Macro for the message-carrying error enums ports return.
//!
//! Every variant holds one `message: String`. The macro derives `thiserror`,
//! adds a snake_case constructor per variant that accepts anything
//! `Into<String>`, and a `message()` accessor shared by all variants.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant {
                    /// Detail reported to the caller.
                    message: String,
                },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    /// Build this variant from its message.
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )+

            /// Detail carried by the error, without the display prefix.
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message } => message.as_str(),)+
                }
            }
        }
    };
}

pub(crate) use define_port_error;
