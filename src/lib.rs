//! Multiplication tables of the symmetric groups
//!
//! This crate enumerates the permutations of {0, ..., n-1} in lexicographic order, composes every
//! pair of them and renders the resulting Cayley table as text.
//!
//! The pipeline is [`enumerate::Enumeration`] → [`table::MultiplicationTable`] → [`render`].
//!
pub mod action;
pub mod degree;
pub mod enumerate;
pub mod error;
pub mod label;
pub mod perm;
pub mod render;
pub mod table;

pub use error::{Error, Result};

/// Set element.
///
/// Set elements are represented by non-negative integers (`u32`).
pub type El = u32;
