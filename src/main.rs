use clap::Parser;
use newsbrief::core::config::{self, CliOverrides, ResolvedConfig};
use newsbrief::core::content::{ContentError, ContentStore};
use newsbrief::core::filter::filter;
use newsbrief::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "newsbrief", about = "Read short news stories and quiz yourself on them")]
struct Args {
    /// Category to start on (e.g. all, technology, environment, economics)
    #[arg(short, long)]
    category: Option<String>,

    /// JSON content file to read instead of the built-in stories
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Validate the content, print a per-category summary and exit
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("newsbrief: {e}; using defaults");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            category: args.category,
            content_file: args.content,
            log_level: args.log_level,
        },
    );

    init_logging(&resolved);
    log::info!("News Brief starting with config: {:?}", resolved);

    let content = match load_content(&resolved) {
        Ok(content) => Arc::new(content),
        Err(e) => {
            log::warn!("Content failed to load: {}", e);
            eprintln!("newsbrief: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.check {
        print_summary(&content);
        return ExitCode::SUCCESS;
    }

    let app = App::with_category(content, &resolved.category);
    match newsbrief::tui::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::warn!("Terminal error: {}", e);
            eprintln!("newsbrief: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to a file; stdout belongs to the TUI.
fn init_logging(resolved: &ResolvedConfig) {
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or_else(|_| {
        eprintln!(
            "newsbrief: unknown log level {:?}, using info",
            resolved.log_level
        );
        LevelFilter::Info
    });

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn load_content(resolved: &ResolvedConfig) -> Result<ContentStore, ContentError> {
    match &resolved.content_file {
        Some(path) => ContentStore::from_json_file(path),
        None => Ok(ContentStore::sample()),
    }
}

fn print_summary(content: &ContentStore) {
    println!("{} articles", content.articles().len());
    for category in content.categories() {
        let count = filter(content.articles(), &category.id).len();
        println!("  {:<12} {:<14} {}", category.id, category.label, count);
    }
}
