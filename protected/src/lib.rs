//! # Protected
//!
//! Containers for secret material (the wallet account's signing key)
//! that zero their memory when dropped and never leak their contents
//! through `Debug` output.

#![deny(rust_2018_idioms)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

use std::ops::{Deref, DerefMut};

use memzero::Memzero;

#[cfg(feature = "serde")]
mod serde;

/// Protected set of bytes, zeroed on drop.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Protected(Memzero<Vec<u8>>);

impl Protected {
    /// Create a new protected set of bytes.
    pub fn new<T: Into<Vec<u8>>>(m: T) -> Self {
        Protected(m.into().into())
    }

    /// Number of protected bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no protected bytes at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Into<Vec<u8>>> From<T> for Protected {
    fn from(x: T) -> Self {
        Protected::new(x.into())
    }
}

impl AsRef<[u8]> for Protected {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for Protected {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl Deref for Protected {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl DerefMut for Protected {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.deref_mut()
    }
}

impl std::fmt::Debug for Protected {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "Protected(***)")
    }
}

/// Protected UTF-8 string, zeroed on drop.
///
/// Invariant: the underlying bytes are always valid UTF-8 since they can
/// only be constructed from a `String` or `&str`.
#[derive(Clone, PartialEq, Eq)]
pub struct ProtectedString(Protected);

impl ProtectedString {
    /// Create a new protected string.
    pub fn new<T: Into<String>>(s: T) -> Self {
        ProtectedString(Protected::new(s.into().into_bytes()))
    }

    /// View the protected contents as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.0.as_ref())
            .expect("ProtectedString is only constructed from valid UTF-8")
    }
}

impl From<&str> for ProtectedString {
    fn from(s: &str) -> Self {
        ProtectedString::new(s)
    }
}

impl From<String> for ProtectedString {
    fn from(s: String) -> Self {
        ProtectedString::new(s)
    }
}

impl AsRef<[u8]> for ProtectedString {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for ProtectedString {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "ProtectedString(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_masked() {
        let secret = Protected::new(vec![1, 2, 3]);
        assert_eq!(format!("{:?}", secret), "Protected(***)");

        let secret = ProtectedString::new("hunter2");
        assert_eq!(format!("{:?}", secret), "ProtectedString(***)");
    }

    #[test]
    fn protected_string_preserves_contents() {
        let secret = ProtectedString::from("correct horse battery staple");
        assert_eq!(secret.as_str(), "correct horse battery staple");
        assert_eq!(secret.as_ref().len(), 28);
    }
}
