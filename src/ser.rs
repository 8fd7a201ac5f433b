//! Claim writing.
//!
//! This module provides [`write_claims`], which renders an ordered slice of
//! [`Claim`]s into an abstract append-only text buffer as comma-separated
//! `"key":value` pairs with no enclosing braces, no trailing comma. The output is
//! valid for splicing directly between the `{` and `}` of a surrounding JSON
//! object; emitting the braces is the caller's (token encoder's) job.
//!
//! ## The buffer abstraction
//!
//! The writer appends through the [`ClaimBuffer`] trait and performs no direct
//! memory management on the buffer. The provided [`String`] and [`Vec<u8>`] impls
//! grow with `try_reserve`, so allocation exhaustion surfaces as
//! [`Error::OutOfMemory`] instead of aborting the process, and growth stays
//! amortized across appends.
//!
//! ## Failure semantics
//!
//! The first failed append aborts the pass and propagates the error; the buffer
//! then holds a partial fragment. Callers must discard the accumulated output on
//! any error; partial fragments are never usable.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use jwt_claims::{Claim, to_fragment};
//!
//! let claims = [Claim::new("iss", "auth0"), Claim::new("iat", 1516239022)];
//! let fragment = to_fragment(&claims).unwrap();
//! assert_eq!(fragment, r#""iss":"auth0","iat":1516239022"#);
//! ```
//!
//! Writing into a caller-owned buffer:
//!
//! ```rust
//! use jwt_claims::{Claim, write_claims};
//!
//! let mut payload = String::from("{");
//! write_claims(&mut payload, &[Claim::new("active", true)]).unwrap();
//! payload.push('}');
//! assert_eq!(payload, r#"{"active":true}"#);
//! ```

use crate::claim::Claim;
use crate::error::{Error, Result};
use crate::value::ClaimValue;
use std::borrow::Cow;

/// An append-only text buffer the claim writer targets.
///
/// The single operation appends UTF-8 text and may fail with
/// [`Error::OutOfMemory`] when the buffer cannot grow. The writer treats the
/// buffer as opaque: it never inspects, truncates, or rewinds it.
///
/// Implementations are provided for [`String`] and [`Vec<u8>`]. Token pipelines
/// with their own growable buffer types implement this trait at the boundary.
pub trait ClaimBuffer {
    /// Appends `text` to the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the buffer cannot be grown; the buffer's
    /// prior content is left in place but the overall write must be considered
    /// failed.
    fn append(&mut self, text: &str) -> Result<()>;
}

impl ClaimBuffer for String {
    fn append(&mut self, text: &str) -> Result<()> {
        self.try_reserve(text.len()).map_err(|_| Error::OutOfMemory)?;
        self.push_str(text);
        Ok(())
    }
}

impl ClaimBuffer for Vec<u8> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.try_reserve(text.len()).map_err(|_| Error::OutOfMemory)?;
        self.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

/// Appends the rendered form of all claims to `buf`, comma-separated.
///
/// Each claim renders as `"key":value`. Keys are emitted verbatim (claim names
/// are trusted to already be valid JSON string content); values render per their
/// kind: strings quoted and escaped, scalars as raw JSON text, pre-rendered
/// fragments verbatim. An empty slice appends nothing and succeeds.
///
/// # Errors
///
/// - [`Error::OutOfMemory`] if a buffer append fails; the pass aborts immediately.
/// - [`Error::InvalidArgument`] if an explicit key/value length points outside its
///   text or splits a UTF-8 character.
///
/// On any error the buffer holds a partial fragment and must be discarded.
///
/// # Examples
///
/// ```rust
/// use jwt_claims::{Claim, write_claims};
///
/// let mut out = String::new();
/// write_claims(&mut out, &[Claim::new("active", true)]).unwrap();
/// assert_eq!(out, r#""active":true"#);
/// ```
pub fn write_claims<B>(buf: &mut B, claims: &[Claim<'_>]) -> Result<()>
where
    B: ClaimBuffer + ?Sized,
{
    for (i, claim) in claims.iter().enumerate() {
        if i > 0 {
            buf.append(",")?;
        }
        write_claim(buf, claim)?;
    }
    Ok(())
}

fn write_claim<B>(buf: &mut B, claim: &Claim<'_>) -> Result<()>
where
    B: ClaimBuffer + ?Sized,
{
    buf.append("\"")?;
    buf.append(clip(claim.key(), claim.key_len())?)?;
    buf.append("\":")?;

    match claim.value() {
        ClaimValue::String(s) => {
            let text = clip(s, claim.value_len())?;
            buf.append("\"")?;
            buf.append(&escape_str(text))?;
            buf.append("\"")
        }
        ClaimValue::Integer(i) => buf.append(&i.to_string()),
        // JSON has no NaN/Infinity; non-finite numbers degrade to null.
        ClaimValue::Number(n) if n.is_finite() => buf.append(&n.to_string()),
        ClaimValue::Number(_) => buf.append("null"),
        ClaimValue::Boolean(true) => buf.append("true"),
        ClaimValue::Boolean(false) => buf.append("false"),
        ClaimValue::Null => buf.append("null"),
        ClaimValue::Array(s) | ClaimValue::Object(s) | ClaimValue::Other(s) => {
            buf.append(clip(s, claim.value_len())?)
        }
        ClaimValue::Date(dt) => buf.append(&dt.timestamp().to_string()),
        ClaimValue::BigInt(bi) => buf.append(&bi.to_string()),
    }
}

/// Resolves the effective text under the optional-length rule: `None` derives the
/// length (up to the first embedded NUL), `Some(n)` takes exactly `n` bytes.
fn clip(text: &str, len: Option<usize>) -> Result<&str> {
    match len {
        None => Ok(match text.find('\0') {
            Some(i) => &text[..i],
            None => text,
        }),
        Some(n) => text
            .get(..n)
            .ok_or_else(|| Error::invalid_length(n, text.len())),
    }
}

/// Escapes `s` per JSON string rules, borrowing the input when no escaping is
/// needed.
///
/// Escapes `"`, `\`, and all control characters; the common controls use their
/// short forms (`\n`, `\r`, `\t`, `\b`, `\f`), the rest the `\u00XX` form.
pub(crate) fn escape_str(s: &str) -> Cow<'_, str> {
    if !s.chars().any(needs_escape) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[inline]
fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\\') || (c as u32) < 0x20
}
