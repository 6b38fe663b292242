// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};

use npuzzle_solver::board::Board;
use npuzzle_solver::config::{
    Admission, Config, Format, Heuristic, DEFAULT_MAX_ITERATIONS, DEFAULT_SIZE,
};
use npuzzle_solver::parser;
use npuzzle_solver::solver::SolverErr;
use npuzzle_solver::Solve;

const EXIT_BAD_INPUT: i32 = 1;
const EXIT_NO_SOLUTION: i32 = 2;

fn main() {
    env_logger::init();

    let max_iterations = DEFAULT_MAX_ITERATIONS.to_string();
    let matches = App::new("npuzzle-solver")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sliding tile puzzles using A*")
        .arg(
            Arg::with_name("start")
                .short("s")
                .long("start")
                .takes_value(true)
                .value_name("BOARD")
                .required(true)
                .help("initial board row by row, 0 is the blank (e.g. 123456708)"),
        )
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .takes_value(true)
                .value_name("BOARD")
                .required(true)
                .help("goal board in the same format"),
        )
        .arg(
            Arg::with_name("manhattan")
                .short("m")
                .long("manhattan")
                .help("estimate using the sum of manhattan distances (default)"),
        )
        .arg(
            Arg::with_name("misplaced")
                .short("p")
                .long("misplaced")
                .alias("position")
                .help("estimate using the number of misplaced tiles"),
        )
        .group(
            ArgGroup::with_name("heuristic")
                .arg("manhattan")
                .arg("misplaced"),
        )
        .arg(
            Arg::with_name("skip-blank")
                .long("skip-blank")
                .help("don't count the blank as a tile when estimating (never overestimates)"),
        )
        .arg(
            Arg::with_name("optimal")
                .short("o")
                .long("optimal")
                .help("requeue boards reached by a shorter path (always finds the shortest path)"),
        )
        .arg(
            Arg::with_name("width")
                .short("W")
                .long("width")
                .takes_value(true)
                .help("number of columns (default: same as height or 3)"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .takes_value(true)
                .help("number of rows (default: same as width or 3)"),
        )
        .arg(
            Arg::with_name("max-iterations")
                .short("i")
                .long("max-iterations")
                .takes_value(true)
                .default_value(&max_iterations)
                .help("give up after expanding this many boards"),
        )
        .arg(
            Arg::with_name("compact")
                .short("c")
                .long("compact")
                .help("print boards on one line"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print statistics by depth after the solution"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print status whenever a new depth is expanded"),
        )
        .get_matches();

    let heuristic = if matches.is_present("misplaced") {
        Heuristic::Misplaced
    } else {
        Heuristic::Manhattan
    };
    let admission = if matches.is_present("optimal") {
        Admission::BestCost
    } else {
        Admission::FirstSeen
    };
    let format = if matches.is_present("compact") {
        Format::Compact
    } else {
        Format::Grid
    };
    let config = Config {
        heuristic,
        count_blank: !matches.is_present("skip-blank"),
        admission,
        max_iterations: parse_number(&matches, "max-iterations").unwrap_or(DEFAULT_MAX_ITERATIONS),
        print_status: matches.is_present("verbose"),
    };

    let start = parse_board(&matches, "start");
    let goal = parse_board(&matches, "goal");

    let solution = start.solve(&goal, &config).unwrap_or_else(|err| {
        match err {
            SolverErr::DimensionMismatch => {
                eprintln!("{}", err);
                process::exit(EXIT_BAD_INPUT);
            }
            SolverErr::IterationCapExceeded => {
                // the cap is one of the ways to end up without a solution
                println!("{}", err);
                println!("{}", SolverErr::Unreachable);
            }
            SolverErr::Unreachable => println!("{}", err),
        }
        process::exit(EXIT_NO_SOLUTION);
    });

    print!("{}", solution.format(format));
    if matches.is_present("stats") {
        println!();
        println!("{}", solution.stats);
    }
}

fn parse_number(matches: &ArgMatches<'_>, name: &str) -> Option<usize> {
    let value = matches.value_of(name)?;
    match value.parse() {
        Ok(num) if num > 0 => Some(num),
        _ => {
            eprintln!("Invalid value for --{}: {}", name, value);
            process::exit(EXIT_BAD_INPUT);
        }
    }
}

fn parse_board(matches: &ArgMatches<'_>, name: &str) -> Board {
    let text = matches.value_of(name).unwrap_or_default();
    let width = parse_number(matches, "width");
    let height = parse_number(matches, "height");

    let (width, height) = match (width, height) {
        (None, None) => (DEFAULT_SIZE, DEFAULT_SIZE),
        (Some(width), None) => (width, width),
        (None, Some(height)) => (height, height),
        (Some(width), Some(height)) => (width, height),
    };
    parser::parse(text, width, height).unwrap_or_else(|err| {
        eprintln!("Failed to parse {} board: {}", name, err);
        process::exit(EXIT_BAD_INPUT);
    })
}
