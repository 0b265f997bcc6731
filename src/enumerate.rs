//! Enumeration of the symmetric group.
use std::collections::HashMap;

use itertools::Itertools;

use crate::degree::Degree;
use crate::error::{Error, Result};
use crate::perm::Perm;
use crate::El;

/// All permutations of a given degree, in lexicographic order.
///
/// The position of a permutation in this order is its index. Enumerating the same degree twice
/// always assigns the same indices.
pub struct Enumeration {
    degree: Degree,
    perms: Vec<Perm>,
    index: HashMap<Perm, usize>,
}

impl Enumeration {
    /// Enumerate S<sub>n</sub>.
    pub fn new(degree: Degree) -> Result<Enumeration> {
        let n = degree.get();
        let order = degree.order();

        let mut perms = Vec::with_capacity(order);
        let mut index = HashMap::with_capacity(order);
        let mut scratch = vec![];

        for images in (0..n as El).permutations(n) {
            let perm = Perm::from_vec_with_scratch(images, &mut scratch).ok_or_else(|| {
                Error::InvariantViolation("enumerated sequence is not a permutation".to_string())
            })?;
            if index.insert(perm.clone(), perms.len()).is_some() {
                return Err(Error::InvariantViolation(format!(
                    "permutation {:?} enumerated twice",
                    perm
                )));
            }
            perms.push(perm);
        }

        if perms.len() != order {
            return Err(Error::InvariantViolation(format!(
                "enumerated {} permutations of degree {}, expected {}",
                perms.len(),
                n,
                order
            )));
        }

        log::debug!("enumerated {} permutations of degree {}", perms.len(), n);

        Ok(Enumeration {
            degree,
            perms,
            index,
        })
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// Number of permutations, n!.
    pub fn len(&self) -> usize {
        self.perms.len()
    }

    /// Never true, S<sub>0</sub> still contains the empty permutation.
    pub fn is_empty(&self) -> bool {
        self.perms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Perm> {
        self.perms.get(index)
    }

    /// Index of a permutation, None for permutations of another degree.
    pub fn index_of(&self, perm: &Perm) -> Option<usize> {
        self.index.get(perm).copied()
    }

    /// Index of the identity. Always 0 for lexicographic order.
    pub fn identity_index(&self) -> usize {
        0
    }

    pub fn perms(&self) -> &[Perm] {
        &self.perms
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Perm)> + '_ {
        self.perms.iter().enumerate()
    }
}
