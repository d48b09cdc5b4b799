//! Helper macro for declaring storage port error enums.

/// Declare a `thiserror` enum for a driven port together with snake_case
/// constructor functions whose parameters accept `impl Into<FieldType>`.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    /// Constructor for the corresponding variant.
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Connection { message: String } => "connection failed: {message}",
            Shortfall { balance: i64, price: i64 } => "balance {balance} below price {price}",
        }
    }

    #[test]
    fn constructors_accept_into_values() {
        let err = SamplePortError::connection("refused");
        assert_eq!(err.to_string(), "connection failed: refused");
    }

    #[test]
    fn constructors_keep_numeric_fields() {
        let err = SamplePortError::shortfall(3_i64, 50_i64);
        assert_eq!(err.to_string(), "balance 3 below price 50");
    }
}
