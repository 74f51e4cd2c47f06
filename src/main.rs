use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use mailroom::cli::{
    handle_config_command, handle_history_command, handle_init_command, handle_report_command,
    handle_thank_all_command, run_menu, Console, MenuContext,
};
use mailroom::config::{MailroomPaths, Settings};
use mailroom::logging::{init_logging, Verbosity};
use mailroom::Registry;

#[derive(Parser)]
#[command(
    name = "mailroom",
    version,
    about = "Track donors, send thank-you letters and report on donations",
    long_about = "Mailroom keeps a list of donors and their donations for the current \
                  session. Run it without a command for the interactive menu, or use \
                  one of the commands below for a one-shot report or letter run."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory thank-you letters are written to
    #[arg(long, global = true, env = "MAILROOM_LETTERS_DIR", value_name = "DIR")]
    letters_dir: Option<PathBuf>,

    /// Increase log output (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Print the donor summary report
    Report {
        /// Also export the report to a CSV file
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },

    /// Write a thank-you letter for every donor's latest donation
    #[command(alias = "send-all")]
    ThankAll,

    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let paths = MailroomPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut registry = Registry::with_seed_donors();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let ctx = MenuContext::from_settings(&settings, &paths, cli.letters_dir);
            let mut console = Console::stdio();
            run_menu(&mut console, &mut registry, &ctx)?;
        }
        Commands::Report { csv } => handle_report_command(&registry, csv)?,
        Commands::ThankAll => {
            handle_thank_all_command(&registry, &settings, &paths, cli.letters_dir)?
        }
        Commands::History { limit } => handle_history_command(&settings, &paths, limit)?,
        Commands::Init => handle_init_command(&settings, &paths)?,
        Commands::Config => handle_config_command(&settings, &paths, cli.letters_dir)?,
    }

    Ok(())
}
