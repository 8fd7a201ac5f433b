//! The claim entry type and registered claim names.
//!
//! A [`Claim`] pairs a key with a typed [`ClaimValue`] payload. Keys borrow or own
//! their text: a claim built from a string literal borrows it for the duration of
//! the write, while a decoder-produced claim owns heap text that is released when
//! the claim is dropped. The two paths are distinguished by the type system, not
//! by convention.
//!
//! ## Optional explicit lengths
//!
//! Producers that track byte lengths separately from their text (ported decoders,
//! FFI layers) can pin a key or value to an explicit byte length. Absent a length,
//! the effective text is derived: it runs up to the first embedded NUL, or the
//! whole string if there is none. An explicit length reads exactly that many bytes,
//! even past an embedded NUL. A genuinely empty string is a valid value, distinct
//! from "derive the length".
//!
//! ## Examples
//!
//! ```rust
//! use jwt_claims::{Claim, ClaimValue, to_fragment};
//!
//! let claims = [
//!     Claim::new("iss", "auth0"),
//!     Claim::new("iat", 1516239022),
//! ];
//! assert_eq!(to_fragment(&claims).unwrap(), r#""iss":"auth0","iat":1516239022"#);
//! ```

use crate::value::{ClaimKind, ClaimValue};
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// Registered claim names from RFC 7519 §4.1.
pub mod registered {
    /// `"iss"`: token issuer.
    pub const ISSUER: &str = "iss";
    /// `"sub"`: token subject.
    pub const SUBJECT: &str = "sub";
    /// `"aud"`: intended audience.
    pub const AUDIENCE: &str = "aud";
    /// `"exp"`: expiration time (NumericDate).
    pub const EXPIRATION: &str = "exp";
    /// `"nbf"`: not-before time (NumericDate).
    pub const NOT_BEFORE: &str = "nbf";
    /// `"iat"`: issued-at time (NumericDate).
    pub const ISSUED_AT: &str = "iat";
    /// `"jti"`: unique token identifier.
    pub const JWT_ID: &str = "jti";
}

/// One key/value claim entry.
///
/// Claims are constructed by callers or by external producers (decoders), consumed
/// read-only by the writer, and destroyed by dropping them: owned key/value text is
/// freed exactly once, borrowed text is left untouched.
///
/// # Examples
///
/// ```rust
/// use jwt_claims::{Claim, ClaimKind};
///
/// let claim = Claim::new("active", true);
/// assert_eq!(claim.key(), "active");
/// assert_eq!(claim.kind(), ClaimKind::Boolean);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Claim<'a> {
    key: Cow<'a, str>,
    key_len: Option<usize>,
    value: ClaimValue<'a>,
    value_len: Option<usize>,
}

impl<'a> Claim<'a> {
    /// Creates a claim from a key and any [`ClaimValue`]-convertible payload.
    ///
    /// Lengths default to derived (see the module docs).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwt_claims::{Claim, ClaimValue};
    ///
    /// let iss = Claim::new("iss", "auth0");
    /// let iat = Claim::new("iat", 1516239022);
    /// let aud = Claim::new("aud", ClaimValue::string_array(&["api", "web"]));
    /// ```
    pub fn new(key: impl Into<Cow<'a, str>>, value: impl Into<ClaimValue<'a>>) -> Self {
        Claim {
            key: key.into(),
            key_len: None,
            value: value.into(),
            value_len: None,
        }
    }

    /// Pins the key to an explicit byte length.
    ///
    /// The writer uses exactly the first `len` bytes of the key text, even past an
    /// embedded NUL; a length beyond the text (or one that splits a UTF-8
    /// character) fails the write with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument).
    #[must_use]
    pub fn with_key_len(mut self, len: usize) -> Self {
        self.key_len = Some(len);
        self
    }

    /// Pins the value's textual payload to an explicit byte length.
    ///
    /// Honored for string, array, object, and other payloads; typed scalar
    /// payloads render from their value and ignore it.
    #[must_use]
    pub fn with_value_len(mut self, len: usize) -> Self {
        self.value_len = Some(len);
        self
    }

    /// Returns the full key text (before any length rule is applied).
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the explicit key length, if one was set.
    #[inline]
    #[must_use]
    pub fn key_len(&self) -> Option<usize> {
        self.key_len
    }

    /// Returns the claim's payload.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &ClaimValue<'a> {
        &self.value
    }

    /// Returns the explicit value length, if one was set.
    #[inline]
    #[must_use]
    pub fn value_len(&self) -> Option<usize> {
        self.value_len
    }

    /// Returns the wire kind of the payload.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ClaimKind {
        self.value.kind()
    }

    /// Converts any borrowed key/value text into owned text, yielding a
    /// `Claim<'static>` for the decoder/release path.
    #[must_use]
    pub fn into_owned(self) -> Claim<'static> {
        Claim {
            key: Cow::Owned(self.key.into_owned()),
            key_len: self.key_len,
            value: self.value.into_owned(),
            value_len: self.value_len,
        }
    }

    /// Creates an `"iss"` (issuer) claim.
    pub fn issuer(issuer: impl Into<Cow<'a, str>>) -> Self {
        Claim::new(registered::ISSUER, ClaimValue::String(issuer.into()))
    }

    /// Creates a `"sub"` (subject) claim.
    pub fn subject(subject: impl Into<Cow<'a, str>>) -> Self {
        Claim::new(registered::SUBJECT, ClaimValue::String(subject.into()))
    }

    /// Creates an `"aud"` (audience) claim with a single audience string.
    ///
    /// For the multi-audience form, pass
    /// [`ClaimValue::string_array`](crate::ClaimValue::string_array) to
    /// [`Claim::new`] instead.
    pub fn audience(audience: impl Into<Cow<'a, str>>) -> Self {
        Claim::new(registered::AUDIENCE, ClaimValue::String(audience.into()))
    }

    /// Creates an `"exp"` (expiration time) claim from a UTC instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use jwt_claims::{Claim, to_fragment};
    ///
    /// let exp = Claim::expires_at(Utc.timestamp_opt(1516242622, 0).unwrap());
    /// assert_eq!(to_fragment(&[exp]).unwrap(), r#""exp":1516242622"#);
    /// ```
    #[must_use]
    pub fn expires_at(instant: DateTime<Utc>) -> Self {
        Claim::new(registered::EXPIRATION, ClaimValue::Date(instant))
    }

    /// Creates an `"nbf"` (not-before time) claim from a UTC instant.
    #[must_use]
    pub fn not_before(instant: DateTime<Utc>) -> Self {
        Claim::new(registered::NOT_BEFORE, ClaimValue::Date(instant))
    }

    /// Creates an `"iat"` (issued-at time) claim from a UTC instant.
    #[must_use]
    pub fn issued_at(instant: DateTime<Utc>) -> Self {
        Claim::new(registered::ISSUED_AT, ClaimValue::Date(instant))
    }

    /// Creates a `"jti"` (token identifier) claim.
    pub fn jwt_id(id: impl Into<Cow<'a, str>>) -> Self {
        Claim::new(registered::JWT_ID, ClaimValue::String(id.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_defaults_to_derived_lengths() {
        let claim = Claim::new("iss", "auth0");
        assert_eq!(claim.key(), "iss");
        assert_eq!(claim.key_len(), None);
        assert_eq!(claim.value_len(), None);
    }

    #[test]
    fn test_with_len_builders() {
        let claim = Claim::new("iss", "auth0").with_key_len(3).with_value_len(5);
        assert_eq!(claim.key_len(), Some(3));
        assert_eq!(claim.value_len(), Some(5));
    }

    #[test]
    fn test_registered_constructors() {
        assert_eq!(Claim::issuer("auth0").key(), "iss");
        assert_eq!(Claim::subject("user-1").key(), "sub");
        assert_eq!(Claim::audience("api").key(), "aud");
        assert_eq!(Claim::jwt_id("abc").key(), "jti");

        let instant = Utc.timestamp_opt(1516239022, 0).unwrap();
        assert_eq!(Claim::issued_at(instant).value().as_i64(), Some(1516239022));
        assert_eq!(Claim::expires_at(instant).key(), "exp");
        assert_eq!(Claim::not_before(instant).key(), "nbf");
    }

    #[test]
    fn test_into_owned_extends_lifetime() {
        let owned: Claim<'static> = {
            let key = String::from("scoped");
            Claim::new(key.as_str(), "value").into_owned()
        };
        assert_eq!(owned.key(), "scoped");
    }
}
