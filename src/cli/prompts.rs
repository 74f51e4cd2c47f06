//! Donor and donation prompts
//!
//! Each prompt re-asks until it gets usable input; only console failures
//! (including end of input) are returned as errors.

use std::io::{BufRead, Write};

use crate::error::MailroomResult;
use crate::models::{DonorId, Money, MoneyParseError};
use crate::services::DonorService;

use super::console::Console;

const DONOR_PROMPT: &str =
    "Please enter the full name of a donor (type 'list' for current donor names) > ";
const AMOUNT_PROMPT: &str = "Please enter the donation amount > ";

/// Ask for a donor's full name and resolve it, creating the donor if needed
///
/// Typing `list` (any case) prints every donor name and asks again.
pub fn prompt_for_donor<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &mut DonorService<'_>,
) -> MailroomResult<DonorId> {
    loop {
        let full_name = console.prompt(DONOR_PROMPT)?;

        if full_name.is_empty() {
            console.println("Unable to proceed with input, please enter a donor name...")?;
        } else if full_name.eq_ignore_ascii_case("list") {
            for name in service.names() {
                console.println(name)?;
            }
        } else {
            return service.resolve(&full_name);
        }
    }
}

/// Ask for a donation amount and record it for the donor
pub fn prompt_for_donation_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &mut DonorService<'_>,
    donor: DonorId,
) -> MailroomResult<Money> {
    loop {
        let input = console.prompt(AMOUNT_PROMPT)?;

        match Money::parse(&input) {
            Ok(amount) => return service.record_donation(donor, amount),
            Err(MoneyParseError::Zero) => {
                console.println("Donation amount can't be zero, please try again...")?
            }
            Err(MoneyParseError::InvalidFormat(_)) => {
                console.println("Invalid donation amount, please try again...")?
            }
        }
    }
}
