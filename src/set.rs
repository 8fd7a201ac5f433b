//! Ordered claim collection.
//!
//! This module provides [`ClaimSet`], a thin wrapper around a `Vec` of claims.
//! Input order is preserved verbatim in the written output and duplicate keys are
//! permitted; the writer renders whatever it is given, in the order it was given.
//!
//! ## Release semantics
//!
//! Dropping a `ClaimSet` releases every owned key and value exactly once; borrowed
//! text (claims built from string literals) is left untouched. A set that has been
//! written from cannot be invalidated mid-pass: the writer borrows the set, so the
//! borrow checker rules out releasing it while a write is in flight.
//! [`clear`](ClaimSet::clear) is the explicit in-place release for callers that
//! reuse the collection.
//!
//! ## Examples
//!
//! ```rust
//! use jwt_claims::{Claim, ClaimSet};
//!
//! let mut set = ClaimSet::new();
//! set.push(Claim::new("iss", "auth0"));
//! set.push(Claim::new("iat", 1516239022));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.to_fragment().unwrap(), r#""iss":"auth0","iat":1516239022"#);
//! ```

use crate::claim::Claim;
use crate::error::Result;
use crate::ser::{write_claims, ClaimBuffer};

/// An ordered collection of claims.
///
/// Preserves insertion order and never deduplicates keys; claim-name uniqueness is
/// a producer concern, not enforced here.
///
/// # Examples
///
/// ```rust
/// use jwt_claims::{Claim, ClaimSet};
///
/// let set: ClaimSet = [Claim::new("a", 1), Claim::new("b", 2)].into_iter().collect();
/// let keys: Vec<_> = set.iter().map(Claim::key).collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ClaimSet<'a>(Vec<Claim<'a>>);

impl<'a> ClaimSet<'a> {
    /// Creates an empty `ClaimSet`.
    #[must_use]
    pub fn new() -> Self {
        ClaimSet(Vec::new())
    }

    /// Creates an empty `ClaimSet` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ClaimSet(Vec::with_capacity(capacity))
    }

    /// Appends a claim, keeping input order.
    pub fn push(&mut self, claim: Claim<'a>) {
        self.0.push(claim);
    }

    /// Returns the number of claims in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set contains no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the claims as a slice, in input order.
    #[must_use]
    pub fn claims(&self) -> &[Claim<'a>] {
        &self.0
    }

    /// Returns an iterator over the claims, in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Claim<'a>> {
        self.0.iter()
    }

    /// Returns the first claim with the given key, if any.
    ///
    /// Duplicate keys are permitted in a set; later duplicates are reachable
    /// through [`iter`](ClaimSet::iter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwt_claims::{Claim, ClaimSet};
    ///
    /// let mut set = ClaimSet::new();
    /// set.push(Claim::new("iss", "auth0"));
    /// assert_eq!(set.get("iss").and_then(|c| c.value().as_str()), Some("auth0"));
    /// assert!(set.get("exp").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Claim<'a>> {
        self.0.iter().find(|claim| claim.key() == key)
    }

    /// Releases all claims in place, keeping the allocation for reuse.
    ///
    /// Owned key/value text is freed; the set is empty afterwards.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Converts every borrowed key/value into owned text, yielding a
    /// `ClaimSet<'static>`.
    #[must_use]
    pub fn into_owned(self) -> ClaimSet<'static> {
        ClaimSet(self.0.into_iter().map(Claim::into_owned).collect())
    }

    /// Writes all claims into `buf` as a comma-separated `"key":value` fragment.
    ///
    /// # Errors
    ///
    /// Propagates the first [`write_claims`] failure; the buffer then holds a
    /// partial fragment and must be discarded.
    pub fn write_into<B>(&self, buf: &mut B) -> Result<()>
    where
        B: ClaimBuffer + ?Sized,
    {
        write_claims(buf, &self.0)
    }

    /// Renders all claims into a fresh `String` fragment.
    ///
    /// # Errors
    ///
    /// Propagates the first [`write_claims`] failure.
    pub fn to_fragment(&self) -> Result<String> {
        let mut out = String::new();
        self.write_into(&mut out)?;
        Ok(out)
    }
}

impl<'a> From<Vec<Claim<'a>>> for ClaimSet<'a> {
    fn from(claims: Vec<Claim<'a>>) -> Self {
        ClaimSet(claims)
    }
}

impl<'a> IntoIterator for ClaimSet<'a> {
    type Item = Claim<'a>;
    type IntoIter = std::vec::IntoIter<Claim<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s ClaimSet<'a> {
    type Item = &'s Claim<'a>;
    type IntoIter = std::slice::Iter<'s, Claim<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> FromIterator<Claim<'a>> for ClaimSet<'a> {
    fn from_iter<T: IntoIterator<Item = Claim<'a>>>(iter: T) -> Self {
        ClaimSet(Vec::from_iter(iter))
    }
}

impl<'a> Extend<Claim<'a>> for ClaimSet<'a> {
    fn extend<T: IntoIterator<Item = Claim<'a>>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
