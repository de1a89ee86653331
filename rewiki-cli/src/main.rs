// Command-line interface for rewiki
//
// Converts PukiWiki style wiki pages into Re:VIEW markup. The conversion itself lives in
// rewiki-babel; this binary only reads input, loads configuration and reports errors.
//
// Usage:
//  rewiki <input> [-o <file>]            - Convert a file, or stdin with "-" (default)
//  rewiki convert <input> [-o <file>]    - Same as above (explicit)
//  rewiki inspect <input> [<view>]       - Show the text after each pass
//  rewiki --list-passes                  - List passes in execution order
//
// Configuration:
//
// Defaults are embedded in the binary. A rewiki.toml in the working directory is layered
// on top, then the file given with --config, then --extra-<key> [value] overrides:
//  rewiki page.wiki --extra-target-heading-marker '#' --extra-triple-quote

use rewiki_cli::inspect;

use clap::{Arg, ArgAction, Command, ValueHint};
use log::{debug, LevelFilter};
use rewiki_babel::{DialectRules, Document, Pipeline};
use rewiki_config::{Loader, RewikiConfig};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key {
            let value = args
                .get(i + 1)
                .filter(|next| *next == "-" || !next.starts_with('-'));
            match value {
                Some(value) => {
                    extra_params.insert(key.to_string(), value.clone());
                    i += 2;
                }
                None => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Whether `args` name an input without a subcommand, as in `rewiki page.wiki`.
fn needs_default_subcommand(args: &[String]) -> bool {
    match args.get(1) {
        Some(first) => {
            (first == "-" || !first.starts_with('-')) && !SUBCOMMANDS.contains(&first.as_str())
        }
        None => false,
    }
}

fn build_cli() -> Command {
    Command::new("rewiki")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert wiki markup to Re:VIEW")
        .long_about(
            "rewiki converts PukiWiki style wiki pages into Re:VIEW markup.\n\n\
            Commands:\n  \
            - convert: Convert a page (default command)\n  \
            - inspect: Show the text after each conversion pass\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys.\n  \
            Boolean keys can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            rewiki page.wiki                          # Convert to stdout\n  \
            rewiki page.wiki -o page.re               # Convert to a file\n  \
            cat page.wiki | rewiki -                  # Read from stdin\n  \
            rewiki page.wiki --extra-triple-quote     # Collapse ''' before converting\n  \
            rewiki inspect page.wiki changes          # Which passes touched the text",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-passes")
                .long("list-passes")
                .help("List conversion passes in execution order")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a rewiki.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every pass to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a wiki file to Re:VIEW (default command)")
                .long_about(
                    "Convert a wiki page to Re:VIEW.\n\n\
                    The conversion is all or nothing: if any directive is malformed,\n\
                    nothing is written and the command exits with status 1.\n\n\
                    Examples:\n  \
                    rewiki convert page.wiki             # Convert to stdout\n  \
                    rewiki convert page.wiki -o page.re  # Convert to a file\n  \
                    rewiki page.wiki                     # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the text after each conversion pass")
                .long_about(
                    "Run the conversion and show the text as it stood after each pass.\n\n\
                    Views:\n  \
                    - trace:      every pass with its output (default)\n  \
                    - trace-json: the same, as JSON\n  \
                    - changes:    only the passes that altered the text\n\n\
                    Examples:\n  \
                    rewiki inspect page.wiki\n  \
                    rewiki inspect page.wiki changes",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to render. Defaults to 'trace'")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if needs_default_subcommand(&cleaned_args) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    reject_unknown_overrides(&extra_params);
    let rules = config.rules();
    debug!("dialect rules: {rules:?}");

    if matches.get_flag("list-passes") {
        handle_list_passes_command(&rules);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &rules);
        }
        Some(("inspect", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or("trace");
            handle_inspect_command(input, view, &rules);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing <{name}>");
            std::process::exit(1);
        }
    }
}

/// Read the whole input, `-` meaning stdin
fn read_source(input: &str) -> String {
    let result = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(input)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, rules: &DialectRules) {
    let source = read_source(input);
    let pipeline = Pipeline::with_rules(rules);

    let mut doc = Document::new(source);
    if let Err(e) = doc.convert(&pipeline) {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    }
    let text = doc.into_result().unwrap_or_default();

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            debug!("wrote {path}");
        }
        None => print!("{text}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, view: &str, rules: &DialectRules) {
    let source = read_source(input);
    let output = inspect::execute_view(&source, view, rules).unwrap_or_else(|e| {
        eprintln!("Inspect error: {e}");
        std::process::exit(1);
    });
    print!("{output}");
}

/// Handle the list-passes command
fn handle_list_passes_command(rules: &DialectRules) {
    println!("Passes in execution order:\n");
    let pipeline = Pipeline::with_rules(rules);
    for pass in pipeline.passes() {
        println!(
            "  {:<20} {:<6} {}",
            pass.name(),
            pass.stage(),
            pass.description()
        );
    }
    println!("\nViews (rewiki inspect <input> <view>):");
    for view in inspect::AVAILABLE_VIEWS {
        println!("  {view}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> RewikiConfig {
    let loader = Loader::new().with_optional_file("rewiki.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut RewikiConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["source-heading-marker", "source-marker"]) {
        config.dialect.source_heading_marker = parse_char_arg("source-heading-marker", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["target-heading-marker", "target-marker"]) {
        config.dialect.target_heading_marker = parse_char_arg("target-heading-marker", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["emphasis-quote", "quote"]) {
        config.dialect.emphasis_quote = raw;
    }

    if let Some(raw) = take_override(extra_params, &["triple-quote-reduction", "triple-quote"]) {
        config.pipeline.triple_quote_reduction = parse_bool_arg("triple-quote-reduction", &raw);
    }
}

fn reject_unknown_overrides(extra_params: &HashMap<String, String>) {
    let mut unknown: Vec<&String> = extra_params.keys().collect();
    if unknown.is_empty() {
        return;
    }
    unknown.sort();
    for key in unknown {
        eprintln!("Unknown option --extra-{key}");
    }
    std::process::exit(1);
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_char_arg(flag: &str, raw: &str) -> char {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            eprintln!("Expected a single character for --extra-{flag}, got '{raw}'");
            std::process::exit(1);
        }
    }
}
