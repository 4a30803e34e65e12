//! Command-line front end for the shape sorter
//!
//! Loads a shape file, ranks the solids by the chosen metric with the
//! chosen algorithm and prints sampled results with the elapsed time.

use std::process;
use clap::{Arg, ArgAction, Command};
use log::debug;

use shape_sort::{
    config::{RunConfig, RunConfigBuilder},
    error::{ShapeSortError, ShapeSortResult},
    sort, Metric, SortAlgorithm,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{}", error_message(&e));
            process::exit(e.exit_code());
        }
    }
}

/// Render an error for stderr, pointing option mistakes at `--help`
fn error_message(err: &ShapeSortError) -> String {
    if err.is_configuration_error() {
        format!("Error: {}\nTry 'shapesort --help' for more information.", err)
    } else {
        format!("Error: {}", err)
    }
}

fn run() -> ShapeSortResult<i32> {
    let args: Vec<String> = std::env::args().collect();
    let normalized = normalize_dashes(&args);

    let matches = build_cli().get_matches_from(normalized);
    init_logging(matches.get_flag("debug"));

    let config = parse_config_from_matches(&matches)?;
    debug!("resolved configuration: {:?}", config);

    sort(&config)
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn build_cli() -> Command {
    Command::new("shapesort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("shapesort -f<FILE> -t<H|A|V> -s<B|I|S|M|Q|H> [OPTION]...")
        .about("Sort geometric solids by height, base area or volume")
        .long_about("Sort geometric solids by height, base area or volume.\n\nThe shape file starts with the number of shapes, followed by one `<ShapeType> <height> <value>` line per shape. Flag values may be attached (-fshapes.txt -tV -sQ) or separate, and flag letters are case-insensitive.")

        .arg(Arg::new("file")
            .short('f')
            .short_alias('F')
            .long("file")
            .help("Shape file to load")
            .value_name("FILE"))
        .arg(Arg::new("compare")
            .short('t')
            .short_alias('T')
            .long("compare")
            .help("Compare by H (height), A (base area) or V (volume)")
            .value_name("TYPE"))
        .arg(Arg::new("sort")
            .short('s')
            .short_alias('S')
            .long("sort")
            .help("Sort with B (bubble), I (insertion), S (selection), M (merge), Q (quick) or H (heap)")
            .value_name("METHOD"))

        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Sort largest first")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("every")
            .long("every")
            .help("Print every Nth shape between the first and the last")
            .value_name("N")
            .value_parser(clap::value_parser!(usize)))
        .arg(Arg::new("all")
            .long("all")
            .help("Time every comparison type with every sorting method")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Log run details and verify each sorted result")
            .action(ArgAction::SetTrue))
}

/// Replace en and em dashes pasted from word processors with plain hyphens
fn normalize_dashes(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| arg.replace(['\u{2013}', '\u{2014}'], "-"))
        .collect()
}

/// Remove one pair of surrounding double quotes, e.g. from `-F"C:\temp\shapes.txt"`
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> ShapeSortResult<RunConfig> {
    let mut builder = RunConfigBuilder::new();

    if let Some(file) = matches.get_one::<String>("file") {
        builder = builder.file(strip_quotes(file));
    }
    if let Some(compare) = matches.get_one::<String>("compare") {
        builder = builder.metric(compare.parse::<Metric>()?);
    }
    if let Some(method) = matches.get_one::<String>("sort") {
        builder = builder.algorithm(method.parse::<SortAlgorithm>()?);
    }
    if let Some(&every) = matches.get_one::<usize>("every") {
        builder = builder.sample_interval(every);
    }

    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if matches.get_flag("all") {
        builder = builder.run_all();
    }
    if matches.get_flag("debug") {
        builder = builder.debug();
    }

    builder.build()
}
