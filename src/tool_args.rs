use cayley::degree::Degree;
use cayley::render::{ListingStyle, Section};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct ToolArgs {
    /// Degree n of the symmetric group S_n
    #[arg(default_value = "3", allow_negative_numbers = true)]
    pub(crate) degree: Degree,

    /// Refuses degrees above this value, the table has (n!)^2 entries
    #[arg(long, default_value_t = 7)]
    pub(crate) max_degree: usize,

    /// Number of leading columns left out of the grids
    #[arg(short, long, default_value_t = 2)]
    pub(crate) skip_columns: usize,

    /// How permutations are written in the listing
    #[arg(short, long, value_enum, default_value_t = Listing::Auto)]
    pub(crate) listing: Listing,

    /// Sections printed after the permutation listing
    #[arg(long = "view", value_enum, default_values_t = [View::Table, View::Coalgebra])]
    pub(crate) views: Vec<View>,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Listing {
    Auto,
    Compact,
    Delimited,
    Cycles,
}

impl From<Listing> for ListingStyle {
    fn from(listing: Listing) -> ListingStyle {
        match listing {
            Listing::Auto => ListingStyle::Auto,
            Listing::Compact => ListingStyle::Compact,
            Listing::Delimited => ListingStyle::Delimited,
            Listing::Cycles => ListingStyle::Cycles,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum View {
    /// Symbolic multiplication grid
    Table,
    /// One-hot encoding of every product
    Coalgebra,
    /// Factorizations of every element
    Coproduct,
}

impl From<View> for Section {
    fn from(view: View) -> Section {
        match view {
            View::Table => Section::Table,
            View::Coalgebra => Section::Coalgebra,
            View::Coproduct => Section::Coproduct,
        }
    }
}
