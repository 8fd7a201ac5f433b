//! # jwt_claims
//!
//! A typed key/value claim model for JSON Web Tokens and a deterministic writer
//! that renders claims as a JSON object-fragment: comma-separated `"key":value`
//! pairs with **no** enclosing braces. The braces belong to the surrounding token
//! encoder, which splices the fragment between its own `{` and `}` before signing.
//!
//! ## Key Features
//!
//! - **Typed claims**: one [`ClaimValue`] variant per claim kind (string,
//!   integer, number, boolean, null), plus pre-rendered array/object/other
//!   fragments emitted verbatim
//! - **Stable producer contract**: the `0..=7` type-tag numbering is public and
//!   fixed; textual producers construct values through [`ClaimValue::from_tag`]
//! - **Explicit ownership**: keys and textual payloads are `Cow`-backed, so
//!   borrowed literals (write-only path) and owned decoder output (release path)
//!   cannot be confused
//! - **Abstract output buffer**: the writer targets any [`ClaimBuffer`];
//!   allocation exhaustion surfaces as [`Error::OutOfMemory`] instead of aborting
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use jwt_claims::{claims, Claim};
//!
//! let payload = claims! {
//!     "iss": "auth0",
//!     "iat": 1516239022,
//!     "active": true,
//! };
//!
//! assert_eq!(
//!     payload.to_fragment().unwrap(),
//!     r#""iss":"auth0","iat":1516239022,"active":true"#
//! );
//! ```
//!
//! ### Embedding in a token payload
//!
//! The writer never emits braces; the caller owns the object delimiters:
//!
//! ```rust
//! use jwt_claims::{write_claims, Claim};
//!
//! let claims = [Claim::issuer("auth0"), Claim::subject("user-1")];
//!
//! let mut payload = String::from("{");
//! write_claims(&mut payload, &claims).unwrap();
//! payload.push('}');
//! assert_eq!(payload, r#"{"iss":"auth0","sub":"user-1"}"#);
//! ```
//!
//! ### Ingesting decoder output
//!
//! Producers that carry raw type tags and textual payloads cross the boundary via
//! [`ClaimValue::from_tag`]; any serde data source can be ingested through the
//! [`ClaimValue`] `Deserialize` impl:
//!
//! ```rust
//! use jwt_claims::{Claim, ClaimValue};
//!
//! let value = ClaimValue::from_tag(1, "1516239022").unwrap();
//! let claim = Claim::new(String::from("iat"), value).into_owned();
//! // Dropping the claim releases its owned text; borrowed text is never freed.
//! ```
//!
//! ## Failure semantics
//!
//! Any buffer-append failure aborts the write immediately with
//! [`Error::OutOfMemory`]; an explicit length that does not fit its text aborts
//! with [`Error::InvalidArgument`]. On error the buffer holds a partial fragment
//! and must be discarded; the writer never retries and never leaves usable
//! partial output.
//!
//! ## Out of scope
//!
//! Cryptographic signing and verification, base64url transport encoding, overall
//! token assembly, and JSON parsing live in the surrounding pipeline. Claim
//! *semantics* (e.g. that `"exp"` is numeric or `"iss"` a well-formed URI) are not
//! validated, keys are not deduplicated, and input order is preserved verbatim.

pub mod claim;
pub mod error;
pub mod macros;
pub mod ser;
pub mod set;
pub mod value;

pub use claim::{registered, Claim};
pub use error::{Error, Result};
pub use ser::{write_claims, ClaimBuffer};
pub use set::ClaimSet;
pub use value::{ClaimKind, ClaimValue};

/// Renders the claims into a fresh `String` fragment.
///
/// Convenience over [`write_claims`] for callers without their own buffer.
///
/// # Examples
///
/// ```rust
/// use jwt_claims::{to_fragment, Claim};
///
/// let fragment = to_fragment(&[Claim::new("active", true)]).unwrap();
/// assert_eq!(fragment, r#""active":true"#);
/// ```
///
/// # Errors
///
/// Propagates the first [`write_claims`] failure; no partial output is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_fragment(claims: &[Claim<'_>]) -> Result<String> {
    let mut out = String::new();
    write_claims(&mut out, claims)?;
    Ok(out)
}

/// Renders the claims as a complete JSON object, braces included.
///
/// This is the caller-side step the core writer deliberately omits, provided for
/// pipelines that want the whole payload object in one call.
///
/// # Examples
///
/// ```rust
/// use jwt_claims::{to_json_object, Claim};
///
/// let object = to_json_object(&[Claim::new("iss", "auth0")]).unwrap();
/// assert_eq!(object, r#"{"iss":"auth0"}"#);
/// ```
///
/// # Errors
///
/// Propagates the first [`write_claims`] failure; no partial output is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_object(claims: &[Claim<'_>]) -> Result<String> {
    let mut out = String::from("{");
    write_claims(&mut out, claims)?;
    out.push('}');
    Ok(out)
}
