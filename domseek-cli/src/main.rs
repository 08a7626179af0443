//! Command-line interface for domseek
//! Loads an HTML file and asks whether a container holds the given terms.
//!
//! Usage:
//!   domseek `<path>` `[<term>...]` [--in `<selector>`] [--node `<selector>`]...
//!           [--after `<text|/re/flags>`] [--before `<text|/re/flags>`]
//!           [--after-node `<selector>`] [--before-node `<selector>`]
//!           [--id `<id>`] [--details] [--terms-json `<json>`]
//!           [--format text|json] [--config `<file>`]
//!
//! Settings are read from `./domseek.toml` when present, then `--config`.
//!
//! Exit status: 0 when found, 1 when not found, 2 on error.

use std::fs;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use domseek_config::{DomseekConfig, Loader, OutputFormat};
use domseek_core::{
    contains, get, Anchor, ContainerRef, ContainsOptions, Document, Node, Outcome, Pattern,
    PatternError, SearchError, SelectorError, Value,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("configuration: {0}")]
    Config(#[from] domseek_config::ConfigError),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("invalid --terms-json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("no node matches '{0}'")]
    MissingNode(String),

    #[error("nothing to search: give a term, --node or --terms-json")]
    NoTerms,
}

fn command() -> Command {
    Command::new("domseek")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check whether an HTML container holds text, patterns or nodes")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the HTML file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("terms")
                .help("Terms to search: text, a selector, or /pattern/flags")
                .index(2)
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("in")
                .long("in")
                .value_name("SELECTOR")
                .help("Container to search in (default: <body>)"),
        )
        .arg(
            Arg::new("node")
                .long("node")
                .value_name("SELECTOR")
                .help("Search for the node this selector resolves to")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("after")
                .long("after")
                .help("Text or /pattern/ the match must come after")
                .conflicts_with("after-node"),
        )
        .arg(
            Arg::new("before")
                .long("before")
                .help("Text or /pattern/ the match must come before")
                .conflicts_with("before-node"),
        )
        .arg(
            Arg::new("after-node")
                .long("after-node")
                .value_name("SELECTOR")
                .help("Sibling node the match must come after"),
        )
        .arg(
            Arg::new("before-node")
                .long("before-node")
                .value_name("SELECTOR")
                .help("Sibling node the match must come before"),
        )
        .arg(
            Arg::new("id")
                .long("id")
                .help("Narrow a selector-shaped term to the node with this id"),
        )
        .arg(
            Arg::new("details")
                .long("details")
                .help("Report which terms were found and which were not")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("terms-json")
                .long("terms-json")
                .value_name("JSON")
                .help("Extra terms as JSON: strings, {\"pattern\", \"flags\"} objects, arrays"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML file layered over the defaults and ./domseek.toml"),
        )
}

fn main() -> ExitCode {
    let matches = command().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    match run(&matches, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::from(2)
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<DomseekConfig, CliError> {
    let mut loader = Loader::new().with_project_file(".");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("details") {
        loader = loader.set_override("search.details", true)?;
    }
    Ok(loader.build()?)
}

fn init_logging(config: &DomseekConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the search; `Ok(true)` when everything searched was found
fn run(matches: &ArgMatches, config: &DomseekConfig) -> Result<bool, CliError> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    let document = Document::parse(&source);

    let mut terms = Vec::new();
    for raw in matches.get_many::<String>("terms").into_iter().flatten() {
        terms.push(text_or_pattern(raw)?.map_or_else(|| Value::from(raw.as_str()), Value::from));
    }
    for selector in matches.get_many::<String>("node").into_iter().flatten() {
        terms.push(Value::from(resolve_node(&document, selector)?));
    }
    if let Some(json) = matches.get_one::<String>("terms-json") {
        match Value::from(serde_json::from_str::<serde_json::Value>(json)?) {
            Value::List(items) => terms.extend(items),
            other => terms.push(other),
        }
    }

    let searched = match terms.len() {
        0 => return Err(CliError::NoTerms),
        1 => terms.remove(0),
        _ => Value::List(terms),
    };

    let options = ContainsOptions {
        after: anchor(&document, matches, "after", "after-node")?,
        before: anchor(&document, matches, "before", "before-node")?,
        details: config.search.details,
        id: matches.get_one::<String>("id").cloned(),
    };
    let container = matches
        .get_one::<String>("in")
        .map_or(ContainerRef::Root, |selector| ContainerRef::from(selector.as_str()));

    debug!(target: "domseek::cli", %path, searched = %searched, "running search");
    let outcome = contains(&document, container, searched, &options)?;
    print_outcome(&outcome, config.output.format)?;
    Ok(outcome.is_found())
}

/// `/source/flags` is a pattern; `None` means plain text
fn text_or_pattern(raw: &str) -> Result<Option<Pattern>, PatternError> {
    Pattern::from_literal(raw).transpose()
}

fn resolve_node(document: &Document, selector: &str) -> Result<Node, CliError> {
    get(document, selector, None)?.ok_or_else(|| CliError::MissingNode(selector.to_string()))
}

fn anchor(
    document: &Document,
    matches: &ArgMatches,
    text_arg: &str,
    node_arg: &str,
) -> Result<Option<Anchor>, CliError> {
    if let Some(raw) = matches.get_one::<String>(text_arg) {
        let anchor = match text_or_pattern(raw)? {
            Some(pattern) => Anchor::from(pattern),
            None => Anchor::from(raw.as_str()),
        };
        return Ok(Some(anchor));
    }
    match matches.get_one::<String>(node_arg) {
        Some(selector) => Ok(Some(Anchor::from(resolve_node(document, selector)?))),
        None => Ok(None),
    }
}

fn print_outcome(outcome: &Outcome, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome.to_json())?),
        OutputFormat::Text => match outcome {
            Outcome::Found(found) => println!("{}", found),
            Outcome::Detailed(details) => {
                let join = |values: &[Value]| {
                    values
                        .iter()
                        .map(Value::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                println!("all: {}", details.all());
                println!("one: {}", details.one());
                println!("found: {}", join(&details.found));
                println!("unfound: {}", join(&details.unfound));
            }
        },
    }
    Ok(())
}
