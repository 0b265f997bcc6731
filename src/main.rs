#![forbid(unsafe_code)]
use std::io::{self, Write};
use std::process::ExitCode;

use cayley::enumerate::Enumeration;
use cayley::render::{RenderOptions, Report, Section};
use cayley::table::MultiplicationTable;
use cayley::Error;
use clap::Parser;
use tool_args::ToolArgs;

mod tool_args;

fn run(args: &ToolArgs) -> Result<(), Error> {
    let degree = args.degree.at_most(args.max_degree)?;
    log::info!("computing the multiplication table of S_{}", degree);

    let group = Enumeration::new(degree)?;
    let table = MultiplicationTable::build(&group)?;

    let options = RenderOptions {
        skip_columns: args.skip_columns,
        listing: args.listing.into(),
    };
    let sections: Vec<Section> = args.views.iter().map(|&view| view.into()).collect();
    let report = Report {
        group: &group,
        table: &table,
        options: &options,
        sections: &sections,
    };

    // Render fully before writing so a failure never leaves a partial table behind
    let text = report.render()?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let parser = ToolArgs::parse();

    env_logger::builder()
        .filter_level(parser.verbose.log_level_filter())
        .init();

    match run(&parser) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("cayley: {}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

/// 2 for rejected input, 1 for every other failure.
fn exit_status(err: &Error) -> u8 {
    match err {
        Error::InvalidInput(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_statuses() {
        assert_eq!(exit_status(&"-1".parse::<cayley::degree::Degree>().unwrap_err()), 2);
        assert_eq!(
            exit_status(&Error::InvariantViolation("missing product".to_string())),
            1
        );
        assert_eq!(exit_status(&Error::Render("size".to_string())), 1);
    }
}
