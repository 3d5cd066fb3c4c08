//! Infosheet CLI - browse, search and export the industry site sheet
//!
//! ```bash
//! infosheet list --lang en --tab Report --query stats   # Print matching sites
//! infosheet export --output contacts.csv                # Contact CSV (all rows)
//! infosheet browse                                      # Interactive view
//! infosheet tabs --lang en                              # Tabs of a language
//! infosheet universities --tab 대학                      # University directory
//! infosheet serve --port 3000                           # HTTP API
//! ```
//!
//! `SHEET_ID` and `SHEETS_API_KEY` are read from the environment or `.env`;
//! `--sheet-id` / `--api-key` override them.

use clap::{Parser, Subcommand};
use infosheet::config::DEFAULT_PORT;
use infosheet::{
    filter, labels, render_page, render_university, write_csv_file, write_csv_to, AppResult,
    DatasetLoader, Language, LoadTicket, SheetConfig, SiteRecord, UniversityRecord, ViewController,
};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "infosheet")]
#[command(about = "Browse, search and export industry information sites from a Google Sheet", long_about = None)]
struct Cli {
    /// Spreadsheet id (default: $SHEET_ID)
    #[arg(long, global = true)]
    sheet_id: Option<String>,

    /// Sheets API key (default: $SHEETS_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Values API host (default: $SHEETS_BASE_URL or the public API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sites of a tab
    List {
        /// Display language: 국문/ko or 영문/en
        #[arg(short, long, default_value = "ko")]
        lang: Language,

        /// Sheet tab (default: the language's own tab)
        #[arg(short, long)]
        tab: Option<String>,

        /// Search site name, main service and category
        #[arg(short, long)]
        query: Option<String>,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Write the contact CSV of a tab (always every row)
    Export {
        #[arg(short, long, default_value = "ko")]
        lang: Language,

        #[arg(short, long)]
        tab: Option<String>,

        /// Output file (default: ./industry_info_sites.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the tabs offered for a language
    Tabs {
        #[arg(short, long, default_value = "ko")]
        lang: Language,
    },

    /// Interactive view: type to search, `:help` for commands
    Browse {
        #[arg(short, long, default_value = "ko")]
        lang: Language,
    },

    /// Print the university directory sheet
    Universities {
        /// Sheet tab holding the directory
        #[arg(short, long)]
        tab: String,

        #[arg(short, long)]
        query: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    if let Commands::Tabs { lang } = &cli.command {
        return cmd_tabs(*lang);
    }

    let loader = DatasetLoader::new(build_config(&cli)?);

    match cli.command {
        Commands::List { lang, tab, query, json } => {
            cmd_list(&loader, lang, tab, query.as_deref(), json).await
        }
        Commands::Export { lang, tab, output } => {
            cmd_export(&loader, lang, tab, output.as_deref()).await
        }
        Commands::Browse { lang } => cmd_browse(loader, lang).await,
        Commands::Universities { tab, query, json } => {
            cmd_universities(&loader, &tab, query.as_deref(), json).await
        }
        Commands::Serve { port } => infosheet::server::start_server(loader, port).await,
        Commands::Tabs { .. } => Ok(()),
    }
}

fn build_config(cli: &Cli) -> AppResult<SheetConfig> {
    let mut config = SheetConfig::resolve(cli.sheet_id.clone(), cli.api_key.clone())?;
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url)?;
    }
    Ok(config)
}

fn tab_or_default(tab: Option<String>, lang: Language) -> String {
    tab.unwrap_or_else(|| lang.default_tab().to_string())
}

fn cmd_tabs(lang: Language) -> AppResult<()> {
    for tab in lang.tabs() {
        let marker = if *tab == lang.default_tab() { " (default)" } else { "" };
        println!("{}{}", tab, marker);
    }
    Ok(())
}

async fn cmd_list(
    loader: &DatasetLoader,
    lang: Language,
    tab: Option<String>,
    query: Option<&str>,
    json: bool,
) -> AppResult<()> {
    let tab = tab_or_default(tab, lang);
    let sites = loader.load(&tab, lang).await;
    let visible = filter(&sites, query.unwrap_or_default());

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        println!("{}", render_page(&visible, lang, false));
    }

    eprintln!("📊 {} of {} sites", visible.len(), sites.len());
    Ok(())
}

async fn cmd_export(
    loader: &DatasetLoader,
    lang: Language,
    tab: Option<String>,
    output: Option<&Path>,
) -> AppResult<()> {
    let tab = tab_or_default(tab, lang);
    let sites = loader.load(&tab, lang).await;

    let path = match output {
        Some(path) => write_csv_to(&sites, path)?,
        None => write_csv_file(&sites, Path::new("."))?,
    };
    eprintln!("✨ {}: {}", labels(lang).download, path.display());
    Ok(())
}

async fn cmd_universities(
    loader: &DatasetLoader,
    tab: &str,
    query: Option<&str>,
    json: bool,
) -> AppResult<()> {
    let labs: Vec<UniversityRecord> = loader.load_as(tab, Language::Korean).await;
    let visible = filter(&labs, query.unwrap_or_default());

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else if visible.is_empty() {
        println!("{}", labels(Language::Korean).no_results);
    } else {
        for lab in &visible {
            println!("{}", render_university(lab));
        }
    }
    Ok(())
}

// =============================================================================
// Interactive browser
// =============================================================================

const BROWSE_HELP: &str = "\
  <text>          search site name, main service, category
  (empty line)    clear the search
  :lang           toggle 국문 / 영문
  :tab NAME       switch sheet tab
  :tabs           list tabs
  :export [PATH]  write the contact CSV (all loaded rows)
  :reload         fetch the current tab again
  :help           this help
  :quit           exit";

/// Run a load in the background; the result comes back through `done`.
fn spawn_load(
    loader: &DatasetLoader,
    ticket: LoadTicket,
    done: &mpsc::UnboundedSender<(LoadTicket, Vec<SiteRecord>)>,
) {
    let loader = loader.clone();
    let done = done.clone();
    tokio::spawn(async move {
        let records = loader.load(&ticket.tab, ticket.language).await;
        let _ = done.send((ticket, records));
    });
}

fn print_header(view: &ViewController) {
    let l = view.labels();
    println!("\n{}", l.title);
    println!("{}", l.subtitle);
    let tabs: Vec<String> = view
        .tabs()
        .iter()
        .map(|t| if *t == view.tab() { format!("[{}]", t) } else { t.to_string() })
        .collect();
    println!("{}  |  :lang = {}", tabs.join("  "), l.toggle_language);
    println!("{}", search_line(view));
}

/// The search box: the current query, or the placeholder when there is none.
fn search_line(view: &ViewController) -> String {
    let l = view.labels();
    match view.query() {
        "" => format!("🔍 {}", l.search_placeholder),
        query => format!("🔍 {}: {}", l.search, query),
    }
}

fn print_view(view: &ViewController) {
    print_header(view);
    println!("\n{}", view.render());
}

async fn cmd_browse(loader: DatasetLoader, lang: Language) -> AppResult<()> {
    let mut view = ViewController::with_state(lang, view_initial_tab(lang));
    let (done_tx, mut done_rx) = mpsc::unbounded_channel();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    spawn_load(&loader, view.begin_load(), &done_tx);
    print_view(&view);

    loop {
        tokio::select! {
            Some((ticket, records)) = done_rx.recv() => {
                if view.complete_load(ticket, records) {
                    print_view(&view);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = line.trim();

                match browse_command(input) {
                    BrowseCommand::Quit => break,
                    BrowseCommand::Help => println!("{}", BROWSE_HELP),
                    BrowseCommand::ToggleLanguage => {
                        spawn_load(&loader, view.toggle_language(), &done_tx);
                        print_view(&view);
                    }
                    BrowseCommand::SelectTab(tab) => {
                        if let Some(ticket) = view.select_tab(tab) {
                            spawn_load(&loader, ticket, &done_tx);
                        }
                        print_view(&view);
                    }
                    BrowseCommand::Tabs => {
                        for tab in view.tabs() {
                            println!("  {}", tab);
                        }
                    }
                    BrowseCommand::Reload => {
                        spawn_load(&loader, view.begin_load(), &done_tx);
                        print_view(&view);
                    }
                    BrowseCommand::Export(path) => {
                        let written = match path {
                            Some(p) => write_csv_to(view.records(), Path::new(p)),
                            None => write_csv_file(view.records(), Path::new(".")),
                        };
                        match written {
                            Ok(p) => println!("💾 {}", p.display()),
                            Err(e) => eprintln!("❌ Export failed: {}", e),
                        }
                    }
                    BrowseCommand::Search(query) => {
                        view.set_query(query);
                        print_view(&view);
                    }
                    BrowseCommand::Unknown(cmd) => {
                        eprintln!("Unknown command '{}' (try :help)", cmd);
                    }
                }
            }
        }
    }

    Ok(())
}

/// The page opens on the report tab in Korean; an English start uses the English tab.
fn view_initial_tab(lang: Language) -> &'static str {
    match lang {
        Language::Korean => infosheet::view::INITIAL_TAB,
        Language::English => lang.default_tab(),
    }
}

#[derive(Debug, PartialEq)]
enum BrowseCommand<'a> {
    Quit,
    Help,
    ToggleLanguage,
    SelectTab(&'a str),
    Tabs,
    Reload,
    Export(Option<&'a str>),
    Search(&'a str),
    Unknown(&'a str),
}

fn browse_command(input: &str) -> BrowseCommand<'_> {
    let Some(cmd) = input.strip_prefix(':') else {
        return BrowseCommand::Search(input);
    };

    let (name, arg) = match cmd.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (cmd, None),
    };

    match (name, arg) {
        ("q" | "quit" | "exit", _) => BrowseCommand::Quit,
        ("help" | "h", _) => BrowseCommand::Help,
        ("lang", _) => BrowseCommand::ToggleLanguage,
        ("tab", Some(tab)) => BrowseCommand::SelectTab(tab),
        ("tabs", _) => BrowseCommand::Tabs,
        ("reload", _) => BrowseCommand::Reload,
        ("export", path) => BrowseCommand::Export(path),
        _ => BrowseCommand::Unknown(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_commands() {
        assert_eq!(browse_command("statistics"), BrowseCommand::Search("statistics"));
        assert_eq!(browse_command(""), BrowseCommand::Search(""));
        assert_eq!(browse_command(":q"), BrowseCommand::Quit);
        assert_eq!(browse_command(":lang"), BrowseCommand::ToggleLanguage);
        assert_eq!(browse_command(":tab 보고서2"), BrowseCommand::SelectTab("보고서2"));
        assert_eq!(browse_command(":tab"), BrowseCommand::Unknown(":tab"));
        assert_eq!(browse_command(":export"), BrowseCommand::Export(None));
        assert_eq!(browse_command(":export out/c.csv"), BrowseCommand::Export(Some("out/c.csv")));
        assert_eq!(browse_command(":nope"), BrowseCommand::Unknown(":nope"));
    }

    #[test]
    fn test_initial_tab() {
        assert_eq!(view_initial_tab(Language::Korean), "리포트");
        assert_eq!(view_initial_tab(Language::English), "영문");
    }

    #[test]
    fn test_search_line() {
        let mut view = ViewController::with_state(Language::English, "Report");
        assert_eq!(search_line(&view), "🔍 Search site name, services, categories...");

        view.set_query("stats");
        assert_eq!(search_line(&view), "🔍 Search: stats");

        view.toggle_language();
        assert_eq!(search_line(&view), "🔍 검색: stats");
    }

    #[test]
    fn test_cli_parses_language() {
        let cli = Cli::try_parse_from(["infosheet", "list", "--lang", "en", "--query", "x"]).unwrap();
        match cli.command {
            Commands::List { lang, query, .. } => {
                assert_eq!(lang, Language::English);
                assert_eq!(query.as_deref(), Some("x"));
            }
            _ => panic!("expected list"),
        }
    }
}
