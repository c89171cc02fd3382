use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether any configuration operation was requested
pub fn is_config_operation(args: &Args) -> bool {
    args.new_page_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Determines if the application should run without the interactive UI:
/// a one-shot dump (`--once`) or a configuration operation.
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || is_config_operation(args)
}

/// SVT Text-TV in the terminal
///
/// Fetches teletext pages from SVT Text and shows them with their original
/// colours and block graphics.
///
/// In interactive mode (default):
/// - Use n/→ and p/← to move between sub-pages and pages
/// - Press space or Enter to type a page number (100-999)
/// - Press 'r' to reload the current page
/// - Press 'q' or Esc to quit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Page to open, between 100 and 999.
    #[arg(value_name = "PAGE", default_value = texttv::constants::pages::DEFAULT_START)]
    pub page: String,

    /// Print every sub-page of the page and exit.
    /// The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Disable clickable page links in the output.
    /// Useful for terminals that don't support OSC 8 hyperlinks.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub disable_links: bool,

    /// Update the page URL template in config. `{page}` is replaced by the page number.
    #[arg(long = "set-url", help_heading = "Configuration", value_name = "URL_TEMPLATE")]
    pub new_page_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode, which keeps the normal screen instead of switching to
    /// the alternate screen. With --once, logs are also printed to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let args = Args::parse_from(["texttv"]);
        assert_eq!(args.page, "100");
        assert!(!is_noninteractive_mode(&args));
    }

    #[test]
    fn test_page_and_flags() {
        let args = Args::parse_from(["texttv", "377", "--once", "--plain"]);
        assert_eq!(args.page, "377");
        assert!(args.once);
        assert!(args.disable_links);
        assert!(is_noninteractive_mode(&args));
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_config_operations_are_noninteractive() {
        let args = Args::parse_from(["texttv", "--set-url", "http://localhost/{page}"]);
        assert_eq!(args.new_page_url.as_deref(), Some("http://localhost/{page}"));
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["texttv", "--clear-log-file"]);
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_page_is_not_validated_by_clap() {
        let args = Args::parse_from(["texttv", "abc"]);
        assert_eq!(args.page, "abc");
    }
}
