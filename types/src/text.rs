//! Bounded proposal fields.
//!
//! Oversized titles, descriptions and payloads are rejected when the value is
//! built (or deserialized), so the governance engine only ever sees values
//! that fit.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;
/// Maximum action payload size in bytes.
pub const MAX_PAYLOAD_BYTES: usize = 1024;

macro_rules! bounded_text {
    ($(#[$meta:meta])* $name:ident, $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(text: impl Into<String>) -> Result<Self, TypesError> {
                let text = text.into();
                let len = text.chars().count();
                if len > $max {
                    return Err(TypesError::TooLong {
                        field: $field,
                        len,
                        max: $max,
                    });
                }
                Ok(Self(text))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypesError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.0
            }
        }
    };
}

bounded_text!(
    /// Proposal title, at most 100 characters.
    Title,
    "title",
    MAX_TITLE_CHARS
);

bounded_text!(
    /// Proposal description, at most 500 characters.
    Description,
    "description",
    MAX_DESCRIPTION_CHARS
);

/// Opaque action payload attached to a proposal, at most 1024 bytes.
///
/// Stored verbatim and never interpreted or executed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ActionPayload(Vec<u8>);

impl ActionPayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, TypesError> {
        let bytes = bytes.into();
        if bytes.len() > MAX_PAYLOAD_BYTES {
            return Err(TypesError::TooLong {
                field: "action payload",
                len: bytes.len(),
                max: MAX_PAYLOAD_BYTES,
            });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<u8>> for ActionPayload {
    type Error = TypesError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl From<ActionPayload> for Vec<u8> {
    fn from(p: ActionPayload) -> Self {
        p.0
    }
}
