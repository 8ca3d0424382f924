//! Command-line interface for mudog
//! Renders the @-directives of one or more source files into a single Markdown file.
//!
//! Usage:
//!   mudog `<files>...` [-o `<output>`] [-c `<config>`] [-v]   - Render files, in order, into one document
//!   mudog --list-directives [--json]                         - List the directive keywords

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mudog::mudog::config::{Loader, PROJECT_CONFIG_FILE};
use mudog::mudog::processor::DocumentBuilder;
use mudog::mudog::Directive;

fn main() {
    let matches = Command::new("mudog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract @-directive documentation from source files into Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("files")
                .help("Source files to process, in order")
                .num_args(1..)
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("list-directives"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Markdown file to write (default: README.md)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Extra TOML configuration layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-directives")
                .long("list-directives")
                .help("List the directive keywords and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("With --list-directives, print JSON")
                .requires("list-directives")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if matches.get_flag("verbose") {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if matches.get_flag("list-directives") {
        handle_list_directives_command(matches.get_flag("json"));
        return;
    }

    handle_render_command(&matches);
}

/// Handle the default command: render every input into one document
fn handle_render_command(matches: &ArgMatches) {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("output") {
        let Some(name) = path.to_str() else {
            fail(format!("Output path {} is not valid UTF-8", path.display()));
        };
        loader = loader
            .set_override("output.default_name", name)
            .unwrap_or_else(|e| fail(e));
    }
    let config = loader.build().unwrap_or_else(|e| fail(e));

    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    if files.is_empty() {
        fail("Too few arguments supplied");
    }
    let output = PathBuf::from(&config.output.default_name);

    let options = config.render_options();
    if let Err(e) = DocumentBuilder::new(&options).build(&files, &output) {
        fail(e);
    }
}

#[derive(Serialize)]
struct DirectiveEntry {
    directive: Directive,
    description: &'static str,
}

/// Handle --list-directives
fn handle_list_directives_command(json: bool) {
    if json {
        let entries: Vec<DirectiveEntry> = Directive::all()
            .iter()
            .map(|d| DirectiveEntry {
                directive: *d,
                description: d.description(),
            })
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(s) => println!("{}", s),
            Err(e) => fail(e),
        }
        return;
    }

    println!("Available directives:\n");
    for directive in Directive::all() {
        println!("  {:<12} {}", directive.to_string(), directive.description());
    }
}

fn fail(message: impl Display) -> ! {
    eprintln!("[muDOG] {}; exiting.", message);
    std::process::exit(1);
}
