//! Permutations of finite sets.
use std::fmt;

use crate::action::{LeftAction, RightAction};
use crate::error::{Error, Result};
use crate::El;

/// A permutation of {0, ..., n-1} for a fixed degree n.
///
/// A permutation rearranges the elements of a finite set. It is a bijection from a set to the same
/// set. The set of permutations of {0, ..., n-1} is the symmetric group S<sub>n</sub>.
///
/// Unlike a permutation that is implicitly extended to all of [`El`], a `Perm` remembers its
/// degree: the identity of degree 2 and the identity of degree 3 are different values, and only
/// permutations of the same degree can be composed.
///
/// Internally a permutation is stored as the images of 0, ..., n - 1 in order.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Perm {
    images: Box<[El]>,
}

impl Perm {
    /// The identity permutation of the given degree.
    pub fn identity(degree: usize) -> Perm {
        Perm {
            images: (0..degree).map(|i| i as El).collect(),
        }
    }

    /// Create a permutation from a vector containing the images of 0..n.
    ///
    /// Returns None if the vector does not correspond to a permutation.
    pub fn from_vec(perm: Vec<El>) -> Option<Perm> {
        Self::from_vec_with_scratch(perm, &mut vec![])
    }

    /// Create a permutation from a vector containing the images of 0..n.
    ///
    /// Returns None if the vector does not correspond to a permutation.
    /// The last parameter is used as scratch space and will be overwritten.
    pub fn from_vec_with_scratch(perm: Vec<El>, scratch: &mut Vec<bool>) -> Option<Perm> {
        if perm.len() > El::MAX as usize {
            return None;
        }
        let seen = scratch;
        seen.clear();
        seen.resize(perm.len(), false);

        for &p_i in perm.iter() {
            let p_i = p_i as usize;
            if p_i >= perm.len() || seen[p_i] {
                return None;
            }
            seen[p_i] = true;
        }

        Some(Perm {
            images: perm.into_boxed_slice(),
        })
    }

    /// Number of points this permutation acts on.
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// The images of 0, ..., n-1.
    pub fn images(&self) -> &[El] {
        &self.images
    }

    /// Image of a single point. Points outside of the degree are fixed.
    pub fn image(&self, el: El) -> El {
        self.images.get(el as usize).copied().unwrap_or(el)
    }

    /// Whether this is the identity of its degree.
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, &p_i)| i == p_i as usize)
    }

    /// The composition `self ∘ inner`, mapping i to `self[inner[i]]`.
    ///
    /// `inner` is applied first. Fails when the degrees differ.
    pub fn compose(&self, inner: &Perm) -> Result<Perm> {
        if self.degree() != inner.degree() {
            return Err(Error::DimensionMismatch {
                left: self.degree(),
                right: inner.degree(),
            });
        }

        Ok(Perm {
            images: inner.images.iter().map(|&i| self.image(i)).collect(),
        })
    }

    /// Return the cycle starting at an element.
    ///
    /// Returns a 1-cycle when the element is a fixed point.
    pub fn cycle_at(&self, el: El) -> Cycle {
        Cycle {
            perm: self,
            pos: Some(el),
            start: el,
        }
    }

    /// Returns an iterator over all proper cycles of a permutation.
    ///
    /// The returned iterator does not produce any 1-cycles.
    pub fn cycles(&self) -> Cycles {
        Cycles {
            perm: self,
            seen: vec![false; self.degree()],
            pos: 0,
        }
    }
}

/// Application of a permutation to a point.
impl LeftAction<El> for Perm {
    type Output = El;

    fn left_apply(&self, el: &El) -> El {
        self.image(*el)
    }
}

/// Composition of a permutation on the left, `self ∘ perm`.
impl LeftAction<Perm> for Perm {
    type Output = Result<Perm>;

    fn left_apply(&self, perm: &Perm) -> Result<Perm> {
        self.compose(perm)
    }
}

/// Composition of a permutation on the right, `perm ∘ self`.
impl RightAction<Perm> for Perm {
    type Output = Result<Perm>;

    fn right_apply(&self, perm: &Perm) -> Result<Perm> {
        perm.compose(self)
    }
}

/// Disjoint cycle notation, `()` for the identity.
impl fmt::Display for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut empty = true;

        for cycle in self.cycles() {
            empty = false;
            fmt::Display::fmt(&cycle, f)?;
        }

        if empty {
            f.write_str("()")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Perm").field(&self.images()).finish()
    }
}

/// Iterator over the elements of a permutation's cycle.
#[derive(Clone)]
pub struct Cycle<'a> {
    perm: &'a Perm,
    pos: Option<El>,
    start: El,
}

impl<'a> Iterator for Cycle<'a> {
    type Item = El;

    fn next(&mut self) -> Option<El> {
        self.pos.map(|pos| {
            let next = self.perm.image(pos);
            self.pos = if next == self.start { None } else { Some(next) };

            pos
        })
    }
}

impl<'a> fmt::Display for Cycle<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for el in self.clone() {
            f.write_str(if first { "(" } else { " " })?;
            first = false;
            fmt::Display::fmt(&el, f)?;
        }
        f.write_str(if first { "()" } else { ")" })
    }
}

impl<'a> fmt::Debug for Cycle<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Iterator over the cycles of a permutation.
#[derive(Clone)]
pub struct Cycles<'a> {
    perm: &'a Perm,
    seen: Vec<bool>,
    pos: usize,
}

impl<'a> Iterator for Cycles<'a> {
    type Item = Cycle<'a>;

    fn next(&mut self) -> Option<Cycle<'a>> {
        loop {
            if self.pos >= self.perm.degree() {
                return None;
            }
            let pos = self.pos as El;
            if self.seen[self.pos] || self.perm.image(pos) == pos {
                self.pos += 1;
            } else {
                let cycle = self.perm.cycle_at(pos);
                for el in cycle.clone() {
                    self.seen[el as usize] = true;
                }
                return Some(cycle);
            }
        }
    }
}
