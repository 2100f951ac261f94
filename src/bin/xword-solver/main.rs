mod parsers;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::error;
use log::info;
use log::Level;
use log::LevelFilter;
use parsers::structure::parse_structure_file;
use parsers::words::parse_word_file;
use result::XwordResult;
use xword_solver::puzzle::Crossword;
use xword_solver::statistics::configure_statistic_logging;
use xword_solver::LetterGrid;
use xword_solver::SatisfactionResult;
use xword_solver::Solver;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file describing the grid structure: `_` marks a fillable cell, any other character
    /// marks a blocked cell. Lines shorter than the longest line are padded with blocked cells.
    structure_path: PathBuf,

    /// The file containing the vocabulary, with one word per line. Words are normalised to
    /// uppercase and blank lines are skipped.
    words_path: PathBuf,

    /// Also writes the rendered grid to the given file.
    #[arg(short = 'o', long = "output")]
    output_path: Option<PathBuf>,

    /// Enables log message output from the solver
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,

    /// Enables logging of statistics from the solver
    #[arg(short = 's', long = "log-statistics", default_value_t = false)]
    log_statistics: bool,

    /// If `--verbose` is enabled removes the timestamp information from the log messages
    #[arg(long = "omit-timestamp", default_value_t = false)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled removes the call site information from the log messages.
    /// Call site is the file and line in it that originated the message.
    #[arg(long = "omit-call-site", default_value_t = false)]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%%%stat:", None, None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> XwordResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    )?;

    let grid = parse_structure_file(&args.structure_path)?;
    let vocabulary = parse_word_file(&args.words_path)?;

    let puzzle = Crossword::new(grid);
    let mut solver = Solver::new(puzzle, vocabulary);
    let mut brancher = solver.default_brancher();

    match solver.satisfy(&mut brancher) {
        SatisfactionResult::Satisfiable(solution) => {
            let letter_grid = LetterGrid::new(solver.puzzle(), &solution);
            print!("{letter_grid}");
            if let Some(output_path) = &args.output_path {
                let mut file = File::create(output_path)?;
                write!(file, "{letter_grid}")?;
            }
        }
        SatisfactionResult::Unsatisfiable => println!("No solution."),
    }

    if args.log_statistics {
        solver.log_statistics();
    }
    Ok(())
}
