//! Typed claim values and the public type-tag contract.
//!
//! This module provides [`ClaimValue`], the sum type representing one claim payload,
//! and [`ClaimKind`], the stable small-integer tag enumeration shared with external
//! producers such as token decoders.
//!
//! ## Core Types
//!
//! - [`ClaimValue`]: one variant per claim kind (string, integer, number, boolean,
//!   null, array, object, other) plus the [`Date`](ClaimValue::Date) and
//!   [`BigInt`](ClaimValue::BigInt) conveniences layered on top
//! - [`ClaimKind`]: the wire tag `0..=7`; a public contract that must not be
//!   renumbered
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jwt_claims::ClaimValue;
//!
//! let null = ClaimValue::Null;
//! let flag = ClaimValue::from(true);
//! let count = ClaimValue::from(42);
//! let name = ClaimValue::from("auth0");
//! ```
//!
//! ### The Producer Boundary
//!
//! Decoders that carry a raw tag and textual payload construct values through
//! [`ClaimValue::from_tag`], which enforces the `0..=7` contract:
//!
//! ```rust
//! use jwt_claims::ClaimValue;
//!
//! let value = ClaimValue::from_tag(1, "1516239022").unwrap();
//! assert_eq!(value, ClaimValue::Integer(1516239022));
//! assert!(ClaimValue::from_tag(9, "").is_err());
//! ```
//!
//! ### Pre-Rendered Fragments
//!
//! Array, object, and "other" payloads hold already-valid JSON text that the writer
//! emits verbatim; the producer is trusted to supply well-formed fragments:
//!
//! ```rust
//! use jwt_claims::ClaimValue;
//!
//! let roles = ClaimValue::string_array(&["admin", "user"]);
//! assert_eq!(roles.to_string(), r#"["admin","user"]"#);
//! ```

use crate::error::{Error, Result};
use crate::ser::escape_str;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::fmt;

/// The claim type tag as exchanged with external producers.
///
/// The numbering is a public wire contract: `0` = string, `1` = integer,
/// `2` = number, `3` = boolean, `4` = null, `5` = array, `6` = object,
/// `7` = other. Producers (token decoders) identify claim payloads by these
/// values, so they must never be renumbered.
///
/// # Examples
///
/// ```rust
/// use jwt_claims::ClaimKind;
///
/// assert_eq!(ClaimKind::String.tag(), 0);
/// assert_eq!(ClaimKind::Other.tag(), 7);
/// assert_eq!(ClaimKind::from_tag(3).unwrap(), ClaimKind::Boolean);
/// assert!(ClaimKind::from_tag(8).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ClaimKind {
    String = 0,
    Integer = 1,
    Number = 2,
    Boolean = 3,
    Null = 4,
    Array = 5,
    Object = 6,
    Other = 7,
}

impl ClaimKind {
    /// Returns the wire tag for this kind.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Looks up a kind from its wire tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedClaim`] for any tag outside `0..=7`; unrecognized
    /// tags are never silently coerced.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(ClaimKind::String),
            1 => Ok(ClaimKind::Integer),
            2 => Ok(ClaimKind::Number),
            3 => Ok(ClaimKind::Boolean),
            4 => Ok(ClaimKind::Null),
            5 => Ok(ClaimKind::Array),
            6 => Ok(ClaimKind::Object),
            7 => Ok(ClaimKind::Other),
            other => Err(Error::unknown_tag(other)),
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ClaimKind::String => "string",
            ClaimKind::Integer => "integer",
            ClaimKind::Number => "number",
            ClaimKind::Boolean => "boolean",
            ClaimKind::Null => "null",
            ClaimKind::Array => "array",
            ClaimKind::Object => "object",
            ClaimKind::Other => "other",
        }
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed claim payload.
///
/// One variant per wire tag, replacing the raw integer-tag-plus-text pair used at
/// the producer boundary. String, array, object, and other payloads borrow or own
/// their text via [`Cow`]: claims built transiently for writing borrow caller
/// literals, while decoder-produced claims own heap text that is released when the
/// claim is dropped.
///
/// [`Date`](ClaimValue::Date) and [`BigInt`](ClaimValue::BigInt) are conveniences
/// on top of the base model: both report [`ClaimKind::Integer`] and render as
/// unquoted decimal text (a date as its RFC 7519 NumericDate, i.e. Unix seconds).
///
/// # Examples
///
/// ```rust
/// use jwt_claims::{ClaimKind, ClaimValue};
///
/// let num = ClaimValue::Integer(42);
/// let text = ClaimValue::from("hello");
///
/// assert_eq!(num.kind(), ClaimKind::Integer);
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ClaimValue<'a> {
    /// Quoted and escaped on output.
    String(Cow<'a, str>),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    #[default]
    Null,
    /// Pre-rendered JSON array fragment, emitted verbatim.
    Array(Cow<'a, str>),
    /// Pre-rendered JSON object fragment (including its own braces), emitted verbatim.
    Object(Cow<'a, str>),
    /// Opaque pre-formatted payload, emitted verbatim.
    Other(Cow<'a, str>),
    /// Rendered as the NumericDate (Unix seconds).
    Date(DateTime<Utc>),
    /// Rendered as unquoted arbitrary-precision decimal text.
    BigInt(BigInt),
}

impl<'a> ClaimValue<'a> {
    /// Returns the wire kind of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwt_claims::{ClaimKind, ClaimValue};
    ///
    /// assert_eq!(ClaimValue::from("x").kind(), ClaimKind::String);
    /// assert_eq!(ClaimValue::Null.kind(), ClaimKind::Null);
    /// ```
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ClaimKind {
        match self {
            ClaimValue::String(_) => ClaimKind::String,
            ClaimValue::Integer(_) | ClaimValue::Date(_) | ClaimValue::BigInt(_) => {
                ClaimKind::Integer
            }
            ClaimValue::Number(_) => ClaimKind::Number,
            ClaimValue::Boolean(_) => ClaimKind::Boolean,
            ClaimValue::Null => ClaimKind::Null,
            ClaimValue::Array(_) => ClaimKind::Array,
            ClaimValue::Object(_) => ClaimKind::Object,
            ClaimValue::Other(_) => ClaimKind::Other,
        }
    }

    /// Returns the wire tag of this value, shorthand for `self.kind().tag()`.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> u8 {
        self.kind().tag()
    }

    /// Constructs a value from a raw wire tag and its textual payload.
    ///
    /// This is the boundary for textual producers such as token decoders: scalar
    /// payloads (integer, number, boolean) are parsed into their typed variants,
    /// while string, array, object, and other payloads pass through unmodified.
    /// Integer text outside the `i64` range falls back to
    /// [`BigInt`](ClaimValue::BigInt). The payload accompanying a null tag is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedClaim`] for a tag outside `0..=7` or for scalar
    /// text that does not parse as the tagged type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwt_claims::ClaimValue;
    ///
    /// assert_eq!(
    ///     ClaimValue::from_tag(0, "auth0").unwrap(),
    ///     ClaimValue::from("auth0")
    /// );
    /// assert_eq!(
    ///     ClaimValue::from_tag(3, "true").unwrap(),
    ///     ClaimValue::Boolean(true)
    /// );
    /// assert!(ClaimValue::from_tag(1, "not a number").is_err());
    /// ```
    pub fn from_tag(tag: u8, text: impl Into<Cow<'a, str>>) -> Result<ClaimValue<'a>> {
        let text = text.into();
        match ClaimKind::from_tag(tag)? {
            ClaimKind::String => Ok(ClaimValue::String(text)),
            ClaimKind::Integer => match text.parse::<i64>() {
                Ok(i) => Ok(ClaimValue::Integer(i)),
                Err(_) => text
                    .parse::<BigInt>()
                    .map(ClaimValue::BigInt)
                    .map_err(|_| Error::unparsable("integer", text)),
            },
            ClaimKind::Number => text
                .parse::<f64>()
                .map(ClaimValue::Number)
                .map_err(|_| Error::unparsable("number", text)),
            ClaimKind::Boolean => {
                if text == "true" {
                    Ok(ClaimValue::Boolean(true))
                } else if text == "false" {
                    Ok(ClaimValue::Boolean(false))
                } else {
                    Err(Error::unparsable("boolean", text))
                }
            }
            ClaimKind::Null => Ok(ClaimValue::Null),
            ClaimKind::Array => Ok(ClaimValue::Array(text)),
            ClaimKind::Object => Ok(ClaimValue::Object(text)),
            ClaimKind::Other => Ok(ClaimValue::Other(text)),
        }
    }

    /// Builds a pre-rendered JSON array fragment from string items, escaping each
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwt_claims::ClaimValue;
    ///
    /// let aud = ClaimValue::string_array(&["api", "web"]);
    /// assert_eq!(aud.to_string(), r#"["api","web"]"#);
    /// ```
    #[must_use]
    pub fn string_array<S: AsRef<str>>(items: &[S]) -> ClaimValue<'static> {
        let mut out = String::with_capacity(2 + items.len() * 8);
        out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('"');
            out.push_str(&escape_str(item.as_ref()));
            out.push('"');
        }
        out.push(']');
        ClaimValue::Array(Cow::Owned(out))
    }

    /// Converts any borrowed text into owned text, yielding a `'static` value
    /// suitable for the decoder/release path.
    #[must_use]
    pub fn into_owned(self) -> ClaimValue<'static> {
        match self {
            ClaimValue::String(s) => ClaimValue::String(Cow::Owned(s.into_owned())),
            ClaimValue::Integer(i) => ClaimValue::Integer(i),
            ClaimValue::Number(n) => ClaimValue::Number(n),
            ClaimValue::Boolean(b) => ClaimValue::Boolean(b),
            ClaimValue::Null => ClaimValue::Null,
            ClaimValue::Array(s) => ClaimValue::Array(Cow::Owned(s.into_owned())),
            ClaimValue::Object(s) => ClaimValue::Object(Cow::Owned(s.into_owned())),
            ClaimValue::Other(s) => ClaimValue::Other(Cow::Owned(s.into_owned())),
            ClaimValue::Date(dt) => ClaimValue::Date(dt),
            ClaimValue::BigInt(bi) => ClaimValue::BigInt(bi),
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, ClaimValue::Null)
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, ClaimValue::String(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, ClaimValue::Boolean(_))
    }

    /// Returns `true` if the value renders as an integer (including dates and
    /// big integers).
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            ClaimValue::Integer(_) | ClaimValue::Date(_) | ClaimValue::BigInt(_)
        )
    }

    /// Returns `true` if the value is a floating-point number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, ClaimValue::Number(_))
    }

    /// Returns `true` if the value is a pre-rendered array fragment.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, ClaimValue::Array(_))
    }

    /// Returns `true` if the value is a pre-rendered object fragment.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, ClaimValue::Object(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwt_claims::ClaimValue;
    ///
    /// assert_eq!(ClaimValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(ClaimValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a date, returns it as `i64`. Otherwise
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwt_claims::ClaimValue;
    ///
    /// assert_eq!(ClaimValue::Integer(42).as_i64(), Some(42));
    /// assert_eq!(ClaimValue::from("42").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ClaimValue::Integer(i) => Some(*i),
            ClaimValue::Date(dt) => Some(dt.timestamp()),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ClaimValue::Integer(i) => Some(*i as f64),
            ClaimValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ClaimValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value carries a pre-rendered fragment (array, object, or other),
    /// returns the raw text. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_fragment(&self) -> Option<&str> {
        match self {
            ClaimValue::Array(s) | ClaimValue::Object(s) | ClaimValue::Other(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ClaimValue<'_> {
    /// Renders the value as standalone JSON text, exactly as the claim writer
    /// would emit it (strings quoted and escaped, fragments verbatim, non-finite
    /// numbers as `null`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimValue::String(s) => write!(f, "\"{}\"", escape_str(s)),
            ClaimValue::Integer(i) => write!(f, "{}", i),
            ClaimValue::Number(n) if n.is_finite() => write!(f, "{}", n),
            ClaimValue::Number(_) => f.write_str("null"),
            ClaimValue::Boolean(b) => write!(f, "{}", b),
            ClaimValue::Null => f.write_str("null"),
            ClaimValue::Array(s) | ClaimValue::Object(s) | ClaimValue::Other(s) => f.write_str(s),
            ClaimValue::Date(dt) => write!(f, "{}", dt.timestamp()),
            ClaimValue::BigInt(bi) => write!(f, "{}", bi),
        }
    }
}

impl From<bool> for ClaimValue<'_> {
    fn from(value: bool) -> Self {
        ClaimValue::Boolean(value)
    }
}

impl From<i8> for ClaimValue<'_> {
    fn from(value: i8) -> Self {
        ClaimValue::Integer(value as i64)
    }
}

impl From<i16> for ClaimValue<'_> {
    fn from(value: i16) -> Self {
        ClaimValue::Integer(value as i64)
    }
}

impl From<i32> for ClaimValue<'_> {
    fn from(value: i32) -> Self {
        ClaimValue::Integer(value as i64)
    }
}

impl From<i64> for ClaimValue<'_> {
    fn from(value: i64) -> Self {
        ClaimValue::Integer(value)
    }
}

impl From<u8> for ClaimValue<'_> {
    fn from(value: u8) -> Self {
        ClaimValue::Integer(value as i64)
    }
}

impl From<u16> for ClaimValue<'_> {
    fn from(value: u16) -> Self {
        ClaimValue::Integer(value as i64)
    }
}

impl From<u32> for ClaimValue<'_> {
    fn from(value: u32) -> Self {
        ClaimValue::Integer(value as i64)
    }
}

impl From<f32> for ClaimValue<'_> {
    fn from(value: f32) -> Self {
        ClaimValue::Number(value as f64)
    }
}

impl From<f64> for ClaimValue<'_> {
    fn from(value: f64) -> Self {
        ClaimValue::Number(value)
    }
}

impl From<String> for ClaimValue<'_> {
    fn from(value: String) -> Self {
        ClaimValue::String(Cow::Owned(value))
    }
}

impl<'a> From<&'a str> for ClaimValue<'a> {
    fn from(value: &'a str) -> Self {
        ClaimValue::String(Cow::Borrowed(value))
    }
}

impl From<DateTime<Utc>> for ClaimValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        ClaimValue::Date(value)
    }
}

impl From<BigInt> for ClaimValue<'_> {
    fn from(value: BigInt) -> Self {
        ClaimValue::BigInt(value)
    }
}

impl<'de> Deserialize<'de> for ClaimValue<'static> {
    /// Ingests a claim value from any serde data source.
    ///
    /// Sequences and maps are rendered into pre-formatted
    /// [`Array`](ClaimValue::Array) / [`Object`](ClaimValue::Object) fragments at
    /// ingest time, so a decoder's nested JSON arrives ready for verbatim emission.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ClaimValueVisitor;

        impl<'de> Visitor<'de> for ClaimValueVisitor {
            type Value = ClaimValue<'static>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid claim value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(ClaimValue::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(ClaimValue::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(ClaimValue::Integer(value as i64))
                } else {
                    Ok(ClaimValue::BigInt(BigInt::from(value)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(ClaimValue::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(ClaimValue::String(Cow::Owned(value.to_string())))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(ClaimValue::String(Cow::Owned(value)))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(ClaimValue::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(ClaimValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut out = String::from("[");
                let mut first = true;
                while let Some(elem) = seq.next_element::<ClaimValue<'static>>()? {
                    if !first {
                        out.push(',');
                    }
                    out.push_str(&elem.to_string());
                    first = false;
                }
                out.push(']');
                Ok(ClaimValue::Array(Cow::Owned(out)))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut out = String::from("{");
                let mut first = true;
                while let Some((key, value)) = map.next_entry::<String, ClaimValue<'static>>()? {
                    if !first {
                        out.push(',');
                    }
                    out.push('"');
                    out.push_str(&escape_str(&key));
                    out.push_str("\":");
                    out.push_str(&value.to_string());
                    first = false;
                }
                out.push('}');
                Ok(ClaimValue::Object(Cow::Owned(out)))
            }
        }

        deserializer.deserialize_any(ClaimValueVisitor)
    }
}
