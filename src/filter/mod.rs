//! LDAP search filter shape extraction
//!
//! A raw filter is walked left to right for flat `(attribute=value)` terms.
//! Each term's value is abstracted by [`crate::normalize::ValueNormalizer`]
//! and the filter is rebuilt around the normalized terms.
//!
//! # Examples
//!
//! ```text
//! (cn=John)                  -> (cn=<value>)
//! (&(cn=John)(sn=Doe))       -> (&(cn=<value>)(sn=<value>))
//! (cn=Jo*n)                  -> (cn=<value>*<value>)
//! (objectClass=*)            -> (objectClass=*)
//! ```
//!
//! This is not a filter grammar: boolean operators are carried through as
//! plain text and a value containing `)` is cut short at that parenthesis.

pub mod normalizer;
pub mod scanner;

pub use normalizer::{FilterNormalizer, NormalizedFilter};
pub use scanner::{COMPONENT_PATTERN, ComponentScanner, RawComponent, ScannedFilter};
