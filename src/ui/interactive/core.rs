//! Interactive UI loop
//!
//! Reads key presses, turns them into navigation events and repaints the
//! current sub-page after every move. Fetches happen inline on cache misses,
//! with a loading notice in the footer while they run.

use super::input_handler::{InputAction, map_key_event};
use super::navigation_manager::{NavEvent, NavOutcome, NavigationManager};
use super::page_prompt::read_page_number;
use super::terminal_manager::{TerminalConfig, TerminalManager, check_terminal_size};
use crate::data_fetcher::{PageCache, PageFetcher};
use crate::error::AppError;
use crate::teletext_ui::footer::render_loading_footer;
use crate::teletext_ui::{PageNumber, RenderOptions, render_page};
use crossterm::event::{self, Event};
use std::io::Stdout;
use tracing::{debug, info, warn};

/// Settings for an interactive session
#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    pub start: PageNumber,
    pub hyperlinks: bool,
    pub debug_mode: bool,
}

/// Runs the interactive browser until the user quits.
///
/// The terminal is restored even when the loop fails.
pub async fn run_interactive_ui(
    fetcher: PageFetcher,
    cache: PageCache,
    options: InteractiveOptions,
) -> Result<(), AppError> {
    let terminal = TerminalManager::with_config(TerminalConfig {
        debug_mode: options.debug_mode,
    });
    let mut stdout = terminal.setup_terminal()?;
    let mut navigation = NavigationManager::new(fetcher, cache, options.start);

    let result = event_loop(
        &mut stdout,
        &mut navigation,
        options.hyperlinks,
        terminal.is_raw(),
    )
    .await;

    terminal.cleanup_terminal(stdout)?;
    result
}

async fn draw(
    stdout: &mut Stdout,
    navigation: &mut NavigationManager<PageFetcher>,
    hyperlinks: bool,
    raw_mode: bool,
) -> Result<(), AppError> {
    let number = navigation.current_number();
    let options = RenderOptions::new(hyperlinks, navigation.source().page_base_url(number), raw_mode);
    let page = navigation.current_page().await;
    render_page(stdout, page, &options)
}

async fn event_loop(
    stdout: &mut Stdout,
    navigation: &mut NavigationManager<PageFetcher>,
    hyperlinks: bool,
    raw_mode: bool,
) -> Result<(), AppError> {
    if let Some(number) = navigation.fetch_target(NavEvent::Goto(navigation.current_number())) {
        render_loading_footer(stdout, number)?;
    }
    draw(stdout, navigation, hyperlinks, raw_mode).await?;

    loop {
        let action = match event::read()? {
            Event::Key(key_event) => map_key_event(&key_event),
            Event::Resize(width, height) => {
                debug!("Terminal resized to {width}x{height}");
                if let Err(e) = check_terminal_size(width, height) {
                    warn!("{e}");
                }
                draw(stdout, navigation, hyperlinks, raw_mode).await?;
                continue;
            }
            _ => continue,
        };

        let nav_event = match action {
            InputAction::Navigate(nav_event) => nav_event,
            InputAction::PromptPage => match read_page_number(stdout)? {
                Some(number) => NavEvent::Goto(number),
                None => {
                    draw(stdout, navigation, hyperlinks, raw_mode).await?;
                    continue;
                }
            },
            InputAction::Ignore => continue,
        };

        if let Some(number) = navigation.fetch_target(nav_event) {
            render_loading_footer(stdout, number)?;
        }

        match navigation.handle(nav_event).await {
            NavOutcome::Quit => {
                info!("Quit requested on page {}", navigation.current_number());
                return Ok(());
            }
            NavOutcome::Held => debug!("Navigation held at page {}", navigation.current_number()),
            NavOutcome::Moved => draw(stdout, navigation, hyperlinks, raw_mode).await?,
        }
    }
}
