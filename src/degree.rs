//! Validated group degrees.
use std::fmt;
use std::str::FromStr;

use num_traits::{CheckedMul, FromPrimitive, One};

use crate::error::{Error, Result};
use crate::El;

/// The degree n of a symmetric group S<sub>n</sub>.
///
/// A valid degree is non-negative, fits into [`El`] and has an order n! that fits into `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(usize);

impl Degree {
    pub fn new(n: usize) -> Result<Degree> {
        if n > El::MAX as usize {
            return Err(Error::InvalidInput(format!(
                "degree {} exceeds the largest point {}",
                n,
                El::MAX
            )));
        }
        if checked_factorial::<usize>(n).is_none() {
            return Err(Error::InvalidInput(format!(
                "the order {}! of the symmetric group does not fit into usize",
                n
            )));
        }
        Ok(Degree(n))
    }

    /// Number of points permuted.
    pub fn get(self) -> usize {
        self.0
    }

    /// Order n! of the symmetric group of this degree.
    pub fn order(self) -> usize {
        // Validated on construction.
        checked_factorial(self.0).unwrap_or(usize::MAX)
    }

    /// Reject degrees larger than `max`.
    pub fn at_most(self, max: usize) -> Result<Degree> {
        if self.0 > max {
            Err(Error::InvalidInput(format!(
                "degree {} is larger than the configured maximum {}",
                self.0, max
            )))
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses a decimal integer. Negative and non-integer input is rejected.
impl FromStr for Degree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Degree> {
        let s = s.trim();
        let n: i128 = s
            .parse()
            .map_err(|_| Error::InvalidInput(format!("degree {:?} is not an integer", s)))?;
        if n < 0 {
            return Err(Error::InvalidInput(format!("degree {} is negative", n)));
        }
        let n = usize::from_i128(n)
            .ok_or_else(|| Error::InvalidInput(format!("degree {} is too large", n)))?;
        Degree::new(n)
    }
}

/// n!, or None on overflow.
pub fn checked_factorial<T>(n: usize) -> Option<T>
where
    T: CheckedMul + FromPrimitive + One,
{
    (2..=n).try_fold(T::one(), |acc, k| acc.checked_mul(&T::from_usize(k)?))
}
