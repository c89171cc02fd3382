// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use crossterm::execute;
use std::io::stdout;
use std::process::ExitCode;
use texttv::config::validation::validate_url_template;
use texttv::data_fetcher::{PageCache, PageFetcher, PageSource};
use texttv::teletext_ui::{Page, PageNumber, RenderOptions, subpage_to_string};
use texttv::ui::{InteractiveOptions, run_interactive_ui};
use texttv::{AppError, Config};

/// Applies `--set-url`, `--set-log-file` and `--clear-log-file` to the stored config.
async fn update_config(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(template) = &args.new_page_url {
        validate_url_template(template)?;
        config.page_url_template = template.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Prints every sub-page of `number` and returns.
async fn print_page_once(args: &Args, config: &Config, number: PageNumber) -> Result<(), AppError> {
    let fetcher = PageFetcher::from_config(config)?;
    let page = Page::from_fetch_result(number, fetcher.fetch_page(number).await);
    let options = RenderOptions::new(!args.disable_links, fetcher.page_base_url(number), false);

    execute!(stdout(), crossterm::terminal::SetTitle(format!("SVT Text {number}")))?;

    if let Some(reason) = page.load_error() {
        println!("Sidan {number} kunde inte hämtas: {reason}");
        return Ok(());
    }

    for (index, subpage) in page.subpages().iter().enumerate() {
        println!("{number} {}/{}", index + 1, page.subpage_count());
        println!("{}", subpage_to_string(subpage, &options));
    }
    Ok(())
}

async fn run(args: Args, number: PageNumber) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if cli::is_config_operation(&args) {
        return update_config(&args).await;
    }

    // Fail early on a broken config before touching the terminal
    let config = Config::load().await?;

    if args.once {
        return print_page_once(&args, &config, number).await;
    }

    let fetcher = PageFetcher::from_config(&config)?;
    let cache = PageCache::new(config.cache_capacity)?;

    execute!(stdout(), crossterm::terminal::SetTitle("SVT Text"))?;

    run_interactive_ui(
        fetcher,
        cache,
        InteractiveOptions {
            start: number,
            hyperlinks: !args.disable_links,
            debug_mode: args.debug,
        },
    )
    .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, AppError> {
    let args = Args::parse();

    let number = match PageNumber::parse(&args.page) {
        Ok(number) => number,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let logging_config = Config::load().await.unwrap_or_default();
    let (log_file_path, _guard) = logging::setup_logging(&args, &logging_config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    match run(args, number).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ AppError::TerminalTooSmall { .. }) => {
            tracing::warn!("{e}");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            tracing::error!("{e}");
            Err(e)
        }
    }
}
