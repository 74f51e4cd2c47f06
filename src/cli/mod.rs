//! CLI layer
//!
//! The interactive menu and its prompts, plus handlers for the
//! non-interactive subcommands parsed by clap in `main`.

pub mod commands;
pub mod console;
pub mod menu;
pub mod prompts;

pub use commands::{
    handle_config_command, handle_history_command, handle_init_command, handle_report_command,
    handle_thank_all_command,
};
pub use console::Console;
pub use menu::{run_menu, MenuAction, MenuContext, MENU};
