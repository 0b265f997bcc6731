//! Text rendering of permutations and multiplication tables.
//!
//! All renderers only read their inputs. Grids fail with [`Error::Render`] when the table was not
//! built from the given enumeration.
use std::fmt::{self, Write};

use crate::enumerate::Enumeration;
use crate::error::{Error, Result};
use crate::label::Label;
use crate::perm::Perm;
use crate::table::MultiplicationTable;

/// Length of the longest label of a grid with `size` rows.
fn widest_label(size: usize) -> usize {
    Label(size.saturating_sub(1)).to_string().len()
}

/// How permutations are written in the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ListingStyle {
    /// `Compact` up to degree 10, `Delimited` above.
    #[default]
    Auto,
    /// Images as concatenated digits, `021`. Needs every point to be a single digit.
    Compact,
    /// Images separated by commas, `0,2,1`.
    Delimited,
    /// Disjoint cycle notation, `(1 2)`.
    Cycles,
}

/// Parts of a [`Report`] after the permutation listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// The symbolic multiplication grid.
    Table,
    /// The one-hot grid.
    Coalgebra,
    /// The coproduct of every element.
    Coproduct,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Number of leading columns left out of the grids. The one-hot indicators always cover every
    /// index.
    pub skip_columns: usize,
    pub listing: ListingStyle,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            skip_columns: 2,
            listing: ListingStyle::Auto,
        }
    }
}

fn check_dimensions(group: &Enumeration, table: &MultiplicationTable) -> Result<()> {
    if group.len() == table.size() {
        Ok(())
    } else {
        Err(Error::Render(format!(
            "table has {} rows and columns but there are {} permutations",
            table.size(),
            group.len()
        )))
    }
}

fn write_perm(out: &mut impl Write, perm: &Perm, style: ListingStyle) -> fmt::Result {
    match style {
        ListingStyle::Auto if perm.degree() <= 10 => write_perm(out, perm, ListingStyle::Compact),
        ListingStyle::Auto => write_perm(out, perm, ListingStyle::Delimited),
        ListingStyle::Compact => perm.images().iter().try_for_each(|p| write!(out, "{}", p)),
        ListingStyle::Delimited => {
            for (i, p) in perm.images().iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write!(out, "{}", p)?;
            }
            Ok(())
        }
        ListingStyle::Cycles => write!(out, "{}", perm),
    }
}

/// One `index: permutation` line per permutation.
pub fn write_listing(out: &mut impl Write, group: &Enumeration, style: ListingStyle) -> Result<()> {
    if style == ListingStyle::Compact && group.degree().get() > 10 {
        return Err(Error::Render(format!(
            "compact listing needs single digit points, degree is {}",
            group.degree()
        )));
    }

    for (i, perm) in group.iter() {
        write!(out, "{}: ", i)?;
        write_perm(out, perm, style)?;
        out.write_char('\n')?;
    }
    Ok(())
}

/// Grid with one row per left factor and one column per right factor.
///
/// Rows are labeled `a *`, `b *`, ... and columns start at the label of the first column that is
/// not skipped. Each cell is the index of the product. All cells share the width of the widest
/// label or index.
pub fn write_symbolic_grid(
    out: &mut impl Write,
    group: &Enumeration,
    table: &MultiplicationTable,
    options: &RenderOptions,
) -> Result<()> {
    check_dimensions(group, table)?;
    let size = table.size();
    let columns = options.skip_columns.min(size)..size;
    let label_w = widest_label(size).max(2);
    let cell_w = widest_label(size).max((size - 1).to_string().len());

    write!(out, "{:w$}", "", w = label_w + 5)?;
    for j in columns.clone() {
        write!(out, "   {:>w$}", Label(j), w = cell_w)?;
    }
    out.write_char('\n')?;

    for (i, row) in table.rows().enumerate() {
        write!(out, "{:w$} *   ", Label(i), w = label_w)?;
        for &product in &row[columns.clone()] {
            write!(out, "   {:>w$}", product, w = cell_w)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Indicator vector of a product: 1 at `table[row][column]`, 0 everywhere else.
pub fn one_hot(table: &MultiplicationTable, row: usize, column: usize) -> Option<Vec<u8>> {
    let product = table.get(row, column)?;
    Some(
        (0..table.size())
            .map(|k| if k == product { 1 } else { 0 })
            .collect(),
    )
}

/// One line per product `row * column` with the indicator vector of its index.
pub fn write_one_hot_grid(
    out: &mut impl Write,
    group: &Enumeration,
    table: &MultiplicationTable,
    options: &RenderOptions,
) -> Result<()> {
    check_dimensions(group, table)?;
    let size = table.size();
    let label_w = widest_label(size).max(2);
    let cell_w = widest_label(size);

    write!(out, "{:w$}", "", w = 2 * label_w + 3)?;
    for k in 0..size {
        write!(out, "   {:>w$}", Label(k), w = cell_w)?;
    }
    out.write_char('\n')?;

    for i in 0..size {
        for j in options.skip_columns..size {
            write!(out, "{:w$} * {:w$}", Label(i), Label(j), w = label_w)?;
            let bits = one_hot(table, i, j).ok_or_else(|| {
                Error::InvariantViolation(format!("no product for cell ({}, {})", i, j))
            })?;
            for bit in bits {
                write!(out, "   {:>w$}", bit, w = cell_w)?;
            }
            out.write_char('\n')?;
        }
    }
    Ok(())
}

/// One line `g -> h ⊗ k + ...` per element listing all factorizations.
pub fn write_coproducts(
    out: &mut impl Write,
    group: &Enumeration,
    table: &MultiplicationTable,
) -> Result<()> {
    check_dimensions(group, table)?;

    for g in 0..table.size() {
        write!(out, "{} ->", Label(g))?;
        for (n, (h, k)) in table.coproduct(g).into_iter().enumerate() {
            let sep = if n == 0 { " " } else { " + " };
            write!(out, "{}{} ⊗ {}", sep, Label(h), Label(k))?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// The complete text document: permutation listing followed by the selected sections.
pub struct Report<'a> {
    pub group: &'a Enumeration,
    pub table: &'a MultiplicationTable,
    pub options: &'a RenderOptions,
    pub sections: &'a [Section],
}

impl<'a> Report<'a> {
    /// Render everything into a string. Nothing is returned on error.
    pub fn render(&self) -> Result<String> {
        check_dimensions(self.group, self.table)?;

        let mut out = String::new();
        out.push_str("Permutations:\n");
        write_listing(&mut out, self.group, self.options.listing)?;

        for section in self.sections {
            out.push('\n');
            match section {
                Section::Table => {
                    out.push_str(
                        "Permutation Multiplication Table \
                         (entries are indices of the resulting permutations):\n\n",
                    );
                    write_symbolic_grid(&mut out, self.group, self.table, self.options)?;
                }
                Section::Coalgebra => {
                    out.push_str(
                        "Coalgebra (one-hot rows, one column per resulting permutation):\n\n",
                    );
                    write_one_hot_grid(&mut out, self.group, self.table, self.options)?;
                }
                Section::Coproduct => {
                    out.push_str("Coproducts:\n\n");
                    write_coproducts(&mut out, self.group, self.table)?;
                }
            }
        }

        log::debug!("rendered {} bytes", out.len());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::degree::Degree;

    fn setup(n: usize) -> (Enumeration, MultiplicationTable) {
        let group = Enumeration::new(Degree::new(n).unwrap()).unwrap();
        let table = MultiplicationTable::build(&group).unwrap();
        (group, table)
    }

    #[test]
    fn listing_styles() {
        let (group, _) = setup(3);
        let render = |style| {
            let mut out = String::new();
            write_listing(&mut out, &group, style).unwrap();
            out
        };
        assert_eq!(
            render(ListingStyle::Auto),
            "0: 012\n1: 021\n2: 102\n3: 120\n4: 201\n5: 210\n"
        );
        assert_eq!(render(ListingStyle::Compact), render(ListingStyle::Auto));
        assert!(render(ListingStyle::Delimited).starts_with("0: 0,1,2\n1: 0,2,1\n"));
        assert!(render(ListingStyle::Cycles).starts_with("0: ()\n1: (1 2)\n2: (0 1)\n3: (0 1 2)\n"));
    }

    #[test]
    fn listing_degree_zero() {
        let (group, _) = setup(0);
        let mut out = String::new();
        write_listing(&mut out, &group, ListingStyle::Auto).unwrap();
        assert_eq!(out, "0: \n");
    }

    #[test]
    fn symbolic_grid_degree_three() {
        let (group, table) = setup(3);
        let mut out = String::new();
        write_symbolic_grid(&mut out, &group, &table, &RenderOptions::default()).unwrap();
        assert_eq!(
            out,
            "          c   d   e   f\n\
             a  *      2   3   4   5\n\
             b  *      4   5   2   3\n\
             c  *      0   1   5   4\n\
             d  *      5   4   0   1\n\
             e  *      1   0   3   2\n\
             f  *      3   2   1   0\n"
        );
    }

    #[test]
    fn symbolic_grid_without_skip() {
        let (group, table) = setup(2);
        let options = RenderOptions {
            skip_columns: 0,
            ..RenderOptions::default()
        };
        let mut out = String::new();
        write_symbolic_grid(&mut out, &group, &table, &options).unwrap();
        assert_eq!(out, "          a   b\na  *      0   1\nb  *      1   0\n");
    }

    #[test]
    fn one_hot_grid_degree_two() {
        let (group, table) = setup(2);
        let options = RenderOptions {
            skip_columns: 1,
            ..RenderOptions::default()
        };
        let mut out = String::new();
        write_one_hot_grid(&mut out, &group, &table, &options).unwrap();
        assert_eq!(out, "          a   b\na  * b    0   1\nb  * b    1   0\n");
    }

    #[test]
    fn coproducts_degree_two() {
        let (group, table) = setup(2);
        let mut out = String::new();
        write_coproducts(&mut out, &group, &table).unwrap();
        assert_eq!(out, "a -> a ⊗ a + b ⊗ b\nb -> a ⊗ b + b ⊗ a\n");
    }

    #[test]
    fn mismatched_table() {
        let (group, _) = setup(3);
        let (_, table) = setup(2);
        let options = RenderOptions::default();
        let mut out = String::new();
        assert!(matches!(
            write_symbolic_grid(&mut out, &group, &table, &options),
            Err(Error::Render(_))
        ));
        assert!(matches!(
            write_one_hot_grid(&mut out, &group, &table, &options),
            Err(Error::Render(_))
        ));
        let report = Report {
            group: &group,
            table: &table,
            options: &options,
            sections: &[Section::Table],
        };
        assert!(matches!(report.render(), Err(Error::Render(_))));
    }

    #[test]
    fn report_layout() {
        let (group, table) = setup(2);
        let options = RenderOptions::default();
        let report = Report {
            group: &group,
            table: &table,
            options: &options,
            sections: &[Section::Table, Section::Coalgebra],
        };
        assert_eq!(
            report.render().unwrap(),
            "Permutations:\n\
             0: 01\n\
             1: 10\n\
             \n\
             Permutation Multiplication Table (entries are indices of the resulting permutations):\n\
             \n       \n\
             a  *   \n\
             b  *   \n\
             \n\
             Coalgebra (one-hot rows, one column per resulting permutation):\n\
             \n          a   b\n"
        );
    }

    #[test]
    fn one_hot_out_of_bounds() {
        let (_, table) = setup(2);
        assert_eq!(one_hot(&table, 0, 1), Some(vec![0, 1]));
        assert_eq!(one_hot(&table, 2, 0), None);
        assert_eq!(one_hot(&table, 0, 2), None);
    }

    fn line_widths(out: &str) -> Vec<usize> {
        let mut widths: Vec<usize> = out.lines().map(|line| line.chars().count()).collect();
        widths.dedup();
        widths
    }

    #[test]
    fn symbolic_grid_aligned_with_two_digit_indices() {
        let (group, table) = setup(4);
        let mut out = String::new();
        write_symbolic_grid(&mut out, &group, &table, &RenderOptions::default()).unwrap();
        assert_eq!(line_widths(&out), vec![7 + 22 * 5]);
        assert!(out.starts_with("           c    d"));
        assert!(out.contains("\na  *       2    3"));
        assert!(out.contains("   22   23\n"));
    }

    #[test]
    fn one_hot_grid_aligned_with_two_letter_labels() {
        let (group, table) = setup(5);
        let options = RenderOptions {
            skip_columns: 118,
            ..RenderOptions::default()
        };
        let mut out = String::new();
        write_one_hot_grid(&mut out, &group, &table, &options).unwrap();
        assert_eq!(line_widths(&out), vec![7 + 120 * 5]);
        assert!(out.starts_with("           a    b"));
        assert!(out.contains("   dp\n"));
        assert_eq!(out.lines().count(), 1 + 120 * 2);
    }

    proptest! {
        #[test]
        fn one_hot_has_single_one(n in 0..5usize, seed in any::<(usize, usize)>()) {
            let (_, table) = setup(n);
            let (r, c) = (seed.0 % table.size(), seed.1 % table.size());
            let bits = one_hot(&table, r, c).unwrap();
            prop_assert_eq!(bits.len(), table.size());
            prop_assert_eq!(bits.iter().filter(|&&b| b == 1).count(), 1);
            prop_assert_eq!(bits[table.get(r, c).unwrap()], 1);
        }

        #[test]
        fn one_hot_lines(n in 1..5usize, skip in 0..3usize) {
            let (group, table) = setup(n);
            let options = RenderOptions { skip_columns: skip, ..RenderOptions::default() };
            let mut out = String::new();
            write_one_hot_grid(&mut out, &group, &table, &options).unwrap();
            let lines: Vec<&str> = out.lines().skip(1).collect();
            prop_assert_eq!(lines.len(), table.size() * table.size().saturating_sub(skip));
            for line in lines {
                prop_assert_eq!(line.matches('1').count(), 1);
            }
        }
    }
}
