//! Multiplication tables.
use crate::enumerate::Enumeration;
use crate::error::{Error, Result};

/// The Cayley table of an enumerated symmetric group.
///
/// Cell (i, j) holds the index of `perms[i] ∘ perms[j]`, i.e. permutation j is applied first. Rows
/// and columns are indexed like the [`Enumeration`] the table was built from.
///
/// Entries are stored row-major in a single vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplicationTable {
    size: usize,
    entries: Vec<usize>,
}

impl MultiplicationTable {
    /// Compose every ordered pair of permutations.
    ///
    /// Fails with [`Error::InvariantViolation`] if a product is missing from the enumeration.
    pub fn build(group: &Enumeration) -> Result<MultiplicationTable> {
        let size = group.len();
        let mut entries = Vec::with_capacity(size * size);

        for (i, outer) in group.iter() {
            for (_, inner) in group.iter() {
                let product = outer.compose(inner)?;
                let index = group.index_of(&product).ok_or_else(|| {
                    Error::InvariantViolation(format!(
                        "product {:?} is not an enumerated permutation",
                        product
                    ))
                })?;
                entries.push(index);
            }
            log::trace!("row {}: {:?}", i, &entries[i * size..]);
        }

        log::debug!("built {}x{} multiplication table", size, size);

        Ok(MultiplicationTable { size, entries })
    }

    /// Number of rows, equal to the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the product of permutation `row` after permutation `column`.
    pub fn get(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.size && column < self.size {
            Some(self.entries[row * self.size + column])
        } else {
            None
        }
    }

    /// Panics when `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[usize] {
        &self.entries[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        // chunks panics on 0, the empty table has no rows anyway
        self.entries.chunks(self.size.max(1))
    }

    /// Panics when `column` is out of bounds.
    pub fn column(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(column < self.size);
        self.entries.iter().skip(column).step_by(self.size).copied()
    }

    /// Whether every row and every column contains each index exactly once.
    pub fn is_latin_square(&self) -> bool {
        let mut seen = vec![false; self.size];
        let mut check = |line: &mut dyn Iterator<Item = usize>| {
            seen.iter_mut().for_each(|s| *s = false);
            for value in line {
                if value >= seen.len() || seen[value] {
                    return false;
                }
                seen[value] = true;
            }
            true
        };

        (0..self.size).all(|i| check(&mut self.row(i).iter().copied()))
            && (0..self.size).all(|j| check(&mut self.column(j)))
    }

    /// All ordered pairs (h, k) whose product is `element`.
    ///
    /// These are the terms of the coproduct Δ(g) = Σ<sub>hk=g</sub> h ⊗ k of the group coalgebra.
    /// In a group every `h` has exactly one partner, so there are as many terms as elements.
    pub fn coproduct(&self, element: usize) -> Vec<(usize, usize)> {
        self.rows()
            .enumerate()
            .flat_map(|(h, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(_, &product)| product == element)
                    .map(move |(k, _)| (h, k))
            })
            .collect()
    }
}
