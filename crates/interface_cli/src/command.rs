//! Command parsing
//!
//! Turns one whitespace-separated input line into a [`Command`]. Parsing only
//! checks shape (token counts, numbers, policy names); whether the numbers
//! make a valid split is left to the ledger domain.

use rust_decimal::Decimal;
use std::str::FromStr;

use core_kernel::{Amount, UserId};
use domain_ledger::{Expense, SplitPolicy};
use crate::error::CommandError;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a shared expense
    Expense(Expense),
    /// List balances, optionally only those involving one user
    Show(Option<UserId>),
}

impl Command {
    /// Parses a single command line
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the line is blank, names an unknown
    /// command, or has missing or malformed arguments.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Err(CommandError::Empty);
        };

        match keyword {
            "SHOW" => Self::parse_show(tokens),
            "EXPENSE" => Self::parse_expense(tokens),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    fn parse_show<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Self, CommandError> {
        let user = tokens.next().map(parse_user_id).transpose()?;
        if let Some(extra) = tokens.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }
        Ok(Command::Show(user))
    }

    fn parse_expense<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Self, CommandError> {
        let payer = parse_user_id(tokens.next().ok_or(CommandError::MissingArgument("payer"))?)?;

        let amount_token = tokens.next().ok_or(CommandError::MissingArgument("amount"))?;
        let amount = Amount::from_str(amount_token)
            .map_err(|_| CommandError::InvalidAmount(amount_token.to_string()))?;

        let count_token = tokens.next().ok_or(CommandError::MissingArgument("participant count"))?;
        let count: usize = count_token
            .parse()
            .map_err(|_| CommandError::InvalidCount(count_token.to_string()))?;

        let mut participants = Vec::with_capacity(count);
        for _ in 0..count {
            let token = tokens.next().ok_or(CommandError::MissingArgument("participant"))?;
            participants.push(parse_user_id(token)?);
        }

        let policy_token = tokens.next().ok_or(CommandError::MissingArgument("split policy"))?;
        let policy = SplitPolicy::from_str(policy_token)
            .map_err(|_| CommandError::UnknownPolicy(policy_token.to_string()))?;

        let values = tokens
            .map(|token| {
                Decimal::from_str(token).map_err(|_| CommandError::InvalidAmount(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Command::Expense(
            Expense::new(payer, amount, participants, policy).with_values(values),
        ))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_user_id(token: &str) -> Result<UserId, CommandError> {
    UserId::new(token).map_err(|_| CommandError::InvalidUserId(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_show() {
        assert_eq!(Command::parse("SHOW").unwrap(), Command::Show(None));
        assert_eq!(
            Command::parse("  SHOW   u4 ").unwrap(),
            Command::Show(Some("u4".parse().unwrap()))
        );
    }

    #[test]
    fn test_parse_equal_expense() {
        let Command::Expense(expense) = Command::parse("EXPENSE u1 1000 4 u1 u2 u3 u4 EQUAL").unwrap() else {
            panic!("expected an expense");
        };
        assert_eq!(expense.payer_id.as_str(), "u1");
        assert_eq!(expense.total_amount.value(), dec!(1000));
        assert_eq!(expense.participant_ids.len(), 4);
        assert_eq!(expense.policy, SplitPolicy::Equal);
        assert!(expense.policy_values.is_empty());
    }

    #[test]
    fn test_parse_percent_expense() {
        let Command::Expense(expense) =
            Command::parse("EXPENSE u4 1200 4 u1 u2 u3 u4 PERCENT 40 20 20 20").unwrap()
        else {
            panic!("expected an expense");
        };
        assert_eq!(expense.policy, SplitPolicy::Percent);
        assert_eq!(expense.policy_values, vec![dec!(40), dec!(20), dec!(20), dec!(20)]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(Command::parse("PAY u1"), Err(CommandError::UnknownCommand("PAY".to_string())));
        assert_eq!(Command::parse("SHOW u1 u2"), Err(CommandError::UnexpectedArgument("u2".to_string())));
        assert_eq!(Command::parse("EXPENSE"), Err(CommandError::MissingArgument("payer")));
        assert_eq!(
            Command::parse("EXPENSE u1 ten 1 u2 EQUAL"),
            Err(CommandError::InvalidAmount("ten".to_string()))
        );
        assert_eq!(
            Command::parse("EXPENSE u1 10 -1 u2 EQUAL"),
            Err(CommandError::InvalidCount("-1".to_string()))
        );
        assert_eq!(
            Command::parse("EXPENSE u1 10 2 u2 EQUAL"),
            Err(CommandError::MissingArgument("split policy"))
        );
        assert_eq!(
            Command::parse("EXPENSE u1 10 1 u2 HALF"),
            Err(CommandError::UnknownPolicy("HALF".to_string()))
        );
    }
}
