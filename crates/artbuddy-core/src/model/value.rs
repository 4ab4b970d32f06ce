//! Shared plumbing for validated string values
//!
//! Every string-backed value type validates on construction, serializes as
//! a bare string and re-validates when deserialized.

/// Declare a validated string newtype
///
/// The generated type exposes `new`, `is_valid`, `as_str`, a
/// `MESSAGE_CONSTRAINTS` constant, `FromStr`, `Display` and serde support
/// that goes through `new`.
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $name:ident,
        field = $field:literal,
        constraints = $msg:literal,
        validator = $validator:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Rule the raw input must satisfy
            pub const MESSAGE_CONSTRAINTS: &'static str = $msg;

            /// Validate `raw` and wrap it
            ///
            /// # Errors
            /// * `InvalidValue` - if `raw` breaks `MESSAGE_CONSTRAINTS`
            pub fn new(raw: impl Into<String>) -> $crate::errors::Result<Self> {
                let raw = raw.into();
                if !Self::is_valid(&raw) {
                    return Err($crate::errors::ModelError::InvalidValue {
                        field: $field,
                        reason: $msg.to_string(),
                    });
                }
                Ok(Self(raw))
            }

            /// True if `raw` would be accepted by `new`
            pub fn is_valid(raw: &str) -> bool {
                let check: fn(&str) -> bool = $validator;
                check(raw)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::errors::ModelError;

            fn try_from(raw: String) -> $crate::errors::Result<Self> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::ModelError;

            fn from_str(raw: &str) -> $crate::errors::Result<Self> {
                Self::new(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use validated_string;

/// True if `raw` has at least one character and does not start with whitespace
pub(crate) fn starts_non_blank(raw: &str) -> bool {
    raw.chars().next().is_some_and(|c| !c.is_whitespace())
}
