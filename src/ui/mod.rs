pub mod interactive;

pub use interactive::{InteractiveOptions, NavEvent, NavOutcome, NavigationManager, run_interactive_ui};
