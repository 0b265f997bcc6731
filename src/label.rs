//! Letter labels for group elements.
use std::fmt;

/// Letter name of an element index.
///
/// Indices 0 to 25 are `a` to `z`, larger indices continue with `aa`, `ab`, ... like spreadsheet
/// columns. Formatting honors width and alignment flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label(pub usize);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut letters = vec![];
        let mut n = self.0 + 1;
        while n > 0 {
            n -= 1;
            letters.push((b'a' + (n % 26) as u8) as char);
            n /= 26;
        }
        let label: String = letters.into_iter().rev().collect();
        f.pad(&label)
    }
}
