//! Output line formatting

use core_kernel::Amount;
use domain_ledger::{Balance, ExpenseError};
use domain_party::{PartyError, UserDirectory};
use crate::error::{CliError, CommandError};

/// Line printed when a query matches no debts
pub const NO_BALANCES: &str = "No balances";

/// Formats one debt as `<debtor> owes <creditor>: <amount>`
pub fn format_balance(debtor: &str, creditor: &str, amount: Amount) -> String {
    format!("{} owes {}: {}", debtor, creditor, amount)
}

/// Renders balances using display names from `directory`
///
/// # Errors
///
/// Returns `PartyError::UnknownUser` if a debtor or creditor is not registered
pub fn render_balances<D>(balances: &[Balance], directory: &D) -> Result<Vec<String>, PartyError>
where
    D: UserDirectory + ?Sized,
{
    if balances.is_empty() {
        return Ok(vec![NO_BALANCES.to_string()]);
    }

    balances
        .iter()
        .map(|balance| {
            Ok(format_balance(
                directory.display_name(&balance.debtor)?,
                directory.display_name(&balance.creditor)?,
                balance.amount,
            ))
        })
        .collect()
}

/// Renders the line reported for a failed command
pub fn error_line(error: &CliError) -> String {
    match error {
        CliError::Expense(ExpenseError::Validation(reason)) => {
            format!("Invalid expense: {}", reason)
        }
        CliError::Command(CommandError::UnknownCommand(keyword)) => {
            format!("Invalid command: {}", keyword)
        }
        other => format!("Error: {}", other),
    }
}
