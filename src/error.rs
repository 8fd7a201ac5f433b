//! Error types for claim construction and writing.
//!
//! All fallible operations in this crate return [`Result`] with this module's
//! [`Error`]. There are three failure families:
//!
//! - **Out of memory**: the target buffer could not grow to hold the output
//! - **Invalid argument**: an explicit key/value length points outside its text
//! - **Malformed claim**: a producer handed in an unrecognized type tag, or scalar
//!   text that does not parse as the tagged type
//!
//! The write operation never retries internally and never leaves the buffer in a
//! usable state after a failure; callers should discard the accumulated output and,
//! if desired, retry with corrected input.
//!
//! ## Examples
//!
//! ```rust
//! use jwt_claims::{Claim, Error, to_fragment};
//!
//! // Explicit length past the end of the key text.
//! let claim = Claim::new("iss", "auth0").with_key_len(64);
//! match to_fragment(&[claim]) {
//!     Err(Error::InvalidArgument(msg)) => assert!(msg.contains("length")),
//!     other => panic!("expected InvalidArgument, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while building or writing claims.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The output buffer could not be grown.
    ///
    /// Surfaced when a [`ClaimBuffer`](crate::ClaimBuffer) append fails under
    /// allocation pressure. The buffer then holds a partial fragment and must be
    /// discarded.
    #[error("out of memory: output buffer could not be grown")]
    OutOfMemory,

    /// A caller-supplied argument was unusable, e.g. an explicit length that
    /// points past the end of its text or splits a UTF-8 character.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A claim could not be constructed from producer input.
    ///
    /// Raised for type tags outside the public `0..=7` range and for scalar text
    /// that does not parse as the tagged type (e.g. `"yes"` under the boolean tag).
    #[error("malformed claim: {0}")]
    MalformedClaim(String),
}

impl Error {
    /// Creates a [`MalformedClaim`](Error::MalformedClaim) error for a type tag
    /// outside the public `0..=7` contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwt_claims::Error;
    ///
    /// let err = Error::unknown_tag(9);
    /// assert!(err.to_string().contains("tag 9"));
    /// ```
    #[must_use]
    pub fn unknown_tag(tag: u8) -> Self {
        Error::MalformedClaim(format!("unrecognized claim type tag {}", tag))
    }

    /// Creates a [`MalformedClaim`](Error::MalformedClaim) error for scalar text
    /// that does not parse as its tagged type.
    #[must_use]
    pub fn unparsable<T: fmt::Display>(kind: &str, text: T) -> Self {
        Error::MalformedClaim(format!(
            "{:?} is not a valid {} payload",
            text.to_string(),
            kind
        ))
    }

    /// Creates an [`InvalidArgument`](Error::InvalidArgument) error for an explicit
    /// length that does not fit its text.
    #[must_use]
    pub fn invalid_length(len: usize, text_len: usize) -> Self {
        Error::InvalidArgument(format!(
            "explicit length {} exceeds text length {} or splits a character",
            len, text_len
        ))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
