//! Interactive main menu
//!
//! A static table maps each menu key to a `MenuAction`; the loop reads a
//! selection, dispatches it and repeats until Quit or end of input.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::{MailroomPaths, Settings};
use crate::error::MailroomResult;
use crate::letters::{export_all_letters, LetterTemplate};
use crate::registry::Registry;
use crate::reports::DonorSummaryReport;
use crate::services::DonorService;

use super::console::Console;
use super::prompts::{prompt_for_donation_amount, prompt_for_donor};

/// Actions available from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SendThankYou,
    CreateReport,
    SendToAll,
    Quit,
}

/// A menu entry
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// What the user types
    pub key: &'static str,
    /// Label shown in the menu
    pub label: &'static str,
    pub action: MenuAction,
}

/// All menu entries, in display order
pub static MENU: &[MenuItem] = &[
    MenuItem {
        key: "1",
        label: "Send a Thank You",
        action: MenuAction::SendThankYou,
    },
    MenuItem {
        key: "2",
        label: "Create a Report",
        action: MenuAction::CreateReport,
    },
    MenuItem {
        key: "3",
        label: "Send Thank You to All Donors",
        action: MenuAction::SendToAll,
    },
    MenuItem {
        key: "4",
        label: "Quit",
        action: MenuAction::Quit,
    },
];

const MENU_TITLE: &str = "Please enter a number to select the action:";

/// Find the action for a menu selection
pub fn find_action(selection: &str) -> Option<MenuAction> {
    MENU.iter()
        .find(|item| item.key == selection.trim())
        .map(|item| item.action)
}

/// The full menu prompt text
pub fn menu_prompt() -> String {
    let mut prompt = MENU_TITLE.to_string();
    for item in MENU {
        prompt.push_str(&format!("\n{} - {}", item.key, item.label));
    }
    prompt.push_str("\n> ");
    prompt
}

/// Everything the menu handlers need besides the registry
pub struct MenuContext {
    pub template: LetterTemplate,
    pub letters_dir: PathBuf,
    pub audit: Option<AuditLogger>,
}

impl MenuContext {
    /// Build the context from settings and an optional letters directory override
    pub fn from_settings(
        settings: &Settings,
        paths: &MailroomPaths,
        letters_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            template: LetterTemplate::from_settings(settings),
            letters_dir: settings.resolve_letters_dir(letters_dir),
            audit: settings
                .audit_enabled
                .then(|| AuditLogger::new(paths.audit_log())),
        }
    }
}

/// Run the menu until the user quits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
    ctx: &MenuContext,
) -> MailroomResult<()> {
    let prompt = menu_prompt();

    loop {
        match run_selection(console, registry, ctx, &prompt) {
            Ok(Some(MenuAction::Quit)) => break,
            Ok(_) => {}
            Err(e) if e.is_input_closed() => {
                tracing::debug!("input closed, leaving menu");
                console.println("")?;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    console.println("Quitting...")
}

/// Prompt once and carry out the selected action
fn run_selection<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
    ctx: &MenuContext,
    prompt: &str,
) -> MailroomResult<Option<MenuAction>> {
    let selection = console.prompt(prompt)?;

    let Some(action) = find_action(&selection) else {
        console.println("Please select a valid number...")?;
        return Ok(None);
    };

    tracing::debug!(?action, "menu selection");
    match action {
        MenuAction::SendThankYou => send_thank_you(console, registry, ctx)?,
        MenuAction::CreateReport => display_report(console, registry)?,
        MenuAction::SendToAll => send_thank_you_to_all(console, registry, ctx)?,
        MenuAction::Quit => {}
    }

    Ok(Some(action))
}

/// Record a donation for one donor and print their letter
pub fn send_thank_you<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
    ctx: &MenuContext,
) -> MailroomResult<()> {
    let mut service = DonorService::new(registry, ctx.audit.as_ref());
    let donor_id = prompt_for_donor(console, &mut service)?;
    let amount = prompt_for_donation_amount(console, &mut service, donor_id)?;

    if let Some(donor) = registry.get(donor_id) {
        console.println(ctx.template.render(&donor.name, amount))?;
    }
    Ok(())
}

/// Print the donor summary report
pub fn display_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> MailroomResult<()> {
    let report = DonorSummaryReport::generate(registry);
    console.print(&report.format_terminal())
}

/// Write letters for every donor and print the outcome of each
pub fn send_thank_you_to_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
    ctx: &MenuContext,
) -> MailroomResult<()> {
    let outcomes = export_all_letters(
        registry,
        &ctx.template,
        &ctx.letters_dir,
        ctx.audit.as_ref(),
    );

    for outcome in &outcomes {
        console.println(outcome)?;
    }
    Ok(())
}
