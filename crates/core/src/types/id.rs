//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_entity_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types. Dashboard
//! IDs are human-readable strings of the form `<PREFIX>-NNNN`, e.g.
//! `CUST-0042` or `PROD-001`.

/// Errors that can occur when parsing an entity ID.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty.
    #[error("id cannot be empty")]
    Empty,
    /// The input does not start with the expected entity prefix.
    #[error("id must start with \"{expected}-\"")]
    WrongPrefix {
        /// The prefix required by this ID type.
        expected: &'static str,
    },
    /// The part after the prefix is empty or not all ASCII digits.
    #[error("id must end in a numeric sequence")]
    InvalidSequence,
}

/// Macro to define a type-safe entity ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `parse()` validating the `<PREFIX>-NNNN` shape
/// - `from_seq()` formatting a sequence number with zero padding
/// - `seq()` recovering the numeric suffix
/// - `Display`, `FromStr`, and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use orderdesk_core::define_entity_id;
/// define_entity_id!(WarehouseId, "WH");
///
/// let id = WarehouseId::from_seq(7);
/// assert_eq!(id.as_str(), "WH-0007");
/// assert_eq!(WarehouseId::parse("WH-0007").unwrap(), id);
///
/// // Seed-style three-digit ids parse too:
/// assert_eq!(WarehouseId::parse("WH-001").unwrap().seq(), Some(1));
/// ```
#[macro_export]
macro_rules! define_entity_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// The prefix identifying this entity type, without the dash.
            pub const PREFIX: &'static str = $prefix;

            /// Parse an ID, validating the `<PREFIX>-NNNN` shape.
            ///
            /// # Errors
            ///
            /// Returns [`IdError`](crate::types::id::IdError) if the input is
            /// empty, carries the wrong prefix, or does not end in a numeric
            /// sequence.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::types::id::IdError> {
                if s.is_empty() {
                    return Err($crate::types::id::IdError::Empty);
                }

                let suffix = s.strip_prefix(concat!($prefix, "-")).ok_or(
                    $crate::types::id::IdError::WrongPrefix {
                        expected: Self::PREFIX,
                    },
                )?;

                if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
                    return Err($crate::types::id::IdError::InvalidSequence);
                }

                Ok(Self(s.to_owned()))
            }

            /// Format a sequence number as an ID, zero-padded to 4 digits.
            #[must_use]
            pub fn from_seq(seq: u32) -> Self {
                Self(format!(concat!($prefix, "-{:04}"), seq))
            }

            /// The numeric suffix of this ID.
            ///
            /// `None` only if the suffix overflows `u32`, which no generated
            /// or seeded ID does.
            #[must_use]
            pub fn seq(&self) -> Option<u32> {
                self.0
                    .get(Self::PREFIX.len() + 1..)
                    .and_then(|s| s.parse().ok())
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the ID and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Standard entity IDs
define_entity_id!(CustomerId, "CUST");
define_entity_id!(ProductId, "PROD");
define_entity_id!(OrderId, "ORD");
