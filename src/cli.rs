use getopts::Options;

use crate::errors::AppError;
use crate::services::run_time::RunTime;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    /// Free arguments joined with spaces, if any were given.
    pub location: Option<String>,
    pub time: Option<RunTime>,
    pub shift: i32,
    pub json: bool,
    /// 1-based day number for the share report.
    pub share: Option<usize>,
    pub help: bool,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("t", "time", "run time (overrides the saved preference)", "HH:MM")
        .optopt("s", "shift", "move the run hour by N (wraps around midnight)", "N")
        .optflag("j", "json", "print the recommendation as JSON")
        .optopt("r", "share", "print the plain-text share report for day N", "N")
        .optflag("h", "help", "print help message");
    opts
}

pub fn usage(program: &str) -> String {
    let brief = format!("Usage: {} [options] [LOCATION...]", program);
    options().usage(&brief)
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, AppError> {
    let matches = options()
        .parse(args)
        .map_err(|f| AppError::BadRequest(f.to_string()))?;

    let location = if matches.free.is_empty() {
        None
    } else {
        Some(matches.free.join(" "))
    };

    let time = matches
        .opt_str("t")
        .map(|s| s.parse::<RunTime>())
        .transpose()?;

    let shift = match matches.opt_str("s") {
        Some(s) => s.trim().parse::<i32>().map_err(|_| {
            AppError::BadRequest(format!("Invalid hour shift '{}', expected a whole number", s))
        })?,
        None => 0,
    };

    let share = match matches.opt_str("r") {
        Some(s) => Some(s.trim().parse::<usize>().map_err(|_| {
            AppError::BadRequest(format!("Invalid day number '{}', expected 1 or more", s))
        })?),
        None => None,
    };

    Ok(CliArgs {
        location,
        time,
        shift,
        json: matches.opt_present("j"),
        share,
        help: matches.opt_present("h"),
    })
}
