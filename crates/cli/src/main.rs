//! Holocron CLI — live search against the databank's search endpoint.
//!
//! Drives the same controller the web widget uses, so `holo live` behaves like
//! typing into the search box: one request per line, stale replies dropped.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::error;

use holocron_core::{
    render_html, run_search, Applied, Dropdown, DropdownItem, InputOutcome, LiveSearch, SearchConfig,
    SearchError, SearchResultSet, SearchTicket,
};
use holocron_http::SearchClient;

/// Config file picked up from the working directory when `--config` is absent.
const LOCAL_CONFIG: &str = "holocron.toml";

/// Holocron CLI — search people, films, starships, vehicles, planets and species.
#[derive(Parser)]
#[command(name = "holo", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file with a [search] table (default: ./holocron.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the site serving /search (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search and print the dropdown
    Search {
        /// Search query
        query: String,

        /// Print the dropdown's HTML markup
        #[arg(long)]
        html: bool,
    },
    /// Treat every stdin line as a keystroke in the search box
    Live,
}

fn resolve_config(path: Option<&Path>, base_url: Option<&str>) -> SearchConfig {
    let local = Path::new(LOCAL_CONFIG);
    let path = path.or_else(|| local.exists().then_some(local));

    let config = match path {
        Some(p) => SearchConfig::load(p).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => SearchConfig::default(),
    };

    match base_url {
        Some(url) => config.with_base_url(url).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => config,
    }
}

fn print_dropdown(dropdown: &Dropdown, json: bool) {
    if json {
        let output = serde_json::json!({
            "visible": dropdown.is_visible(),
            "items": dropdown.items(),
        });
        println!("{output}");
        return;
    }

    if !dropdown.is_visible() {
        println!("(hidden)");
        return;
    }
    for item in dropdown.items() {
        println!("{:<50} {}", item.label, item.href);
    }
    println!();
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

/// Render `holo search` output for one set of dropdown rows.
fn format_results(items: &[DropdownItem], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(items),
        OutputFormat::Html => Ok(render_html(items)),
        OutputFormat::Text => Ok(items
            .iter()
            .map(|item| format!("{:<50} {}", item.label, item.href))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("holocron=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.base_url.as_deref());
    let client = SearchClient::new(config);

    match cli.command {
        Commands::Search { query, html } => {
            let mut search = LiveSearch::new();
            let applied = match run_search(&client, &mut search, &query).await {
                Some(applied) => applied,
                // Blank query: nothing to ask for
                None => return,
            };

            match applied {
                Applied::Rendered { count: 0 } => {
                    eprintln!("No results for '{}'", query.trim());
                    std::process::exit(1);
                }
                Applied::Rendered { .. } => {}
                Applied::Hidden | Applied::Stale => std::process::exit(1),
            }

            let items = search.dropdown().items();
            let format = if cli.json {
                OutputFormat::Json
            } else if html {
                OutputFormat::Html
            } else {
                OutputFormat::Text
            };
            match format_results(items, format) {
                Ok(output) => println!("{output}"),
                Err(e) => {
                    eprintln!("Could not encode results: {e}");
                    std::process::exit(1);
                }
            }
            if format == OutputFormat::Text {
                eprintln!("\n{} results", items.len());
            }
        }
        Commands::Live => live(client, cli.json).await,
    }
}

type Completion = (SearchTicket, Result<SearchResultSet, SearchError>);

/// Read input events from stdin until EOF, firing one request per non-empty
/// line without waiting for earlier ones. Replies are applied on this task, in
/// arrival order; the controller drops the ones a newer line has superseded.
async fn live(client: SearchClient, json: bool) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut search = LiveSearch::new();
    let mut stdin_open = true;
    let mut in_flight = 0usize;

    while stdin_open || in_flight > 0 {
        tokio::select! {
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(text)) => match search.on_input(&text) {
                    InputOutcome::Cleared => print_dropdown(search.dropdown(), json),
                    InputOutcome::Fetch(ticket) => {
                        in_flight += 1;
                        let client = client.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let result = client.fetch(ticket.query()).await;
                            let _ = tx.send((ticket, result));
                        });
                    }
                },
                Ok(None) => stdin_open = false,
                Err(e) => {
                    error!(error = %e, "Could not read stdin");
                    stdin_open = false;
                }
            },
            Some((ticket, result)) = rx.recv(), if in_flight > 0 => {
                in_flight -= 1;
                if search.apply(&ticket, result) != Applied::Stale {
                    print_dropdown(search.dropdown(), json);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_core::{dropdown_items, Category, SearchEntry};

    fn luke_and_hope() -> Vec<DropdownItem> {
        let mut set = SearchResultSet::default();
        set.push(Category::People, SearchEntry::new(1, "Luke Skywalker"));
        set.push(Category::Films, SearchEntry::new(1, "A New Hope"));
        dropdown_items(&set)
    }

    #[test]
    fn json_output_lists_every_row() {
        let output = format_results(&luke_and_hope(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["category"], "people");
        assert_eq!(parsed[0]["href"], "/characters/1");
        assert_eq!(parsed[1]["label"], "A New Hope (Film)");
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn text_output_has_one_line_per_row() {
        let output = format_results(&luke_and_hope(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Luke Skywalker (Person)"));
        assert!(lines[0].ends_with("/characters/1"));
    }

    #[test]
    fn html_output_is_dropdown_markup() {
        let output = format_results(&luke_and_hope(), OutputFormat::Html).unwrap();
        assert_eq!(output.matches(r#"<li class="dropdown-item">"#).count(), 2);
    }
}
