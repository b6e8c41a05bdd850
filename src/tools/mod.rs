use crate::error::ApplicationError;
use diacritics::remove_diacritics;
use log::error;
use regex::Regex;
use std::fmt::Debug;
use std::sync::LazyLock;

pub mod env_args;
pub mod password;

pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

pub fn log_message_and_return<E: Debug, T>(message: &str, value_to_return: T) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

/// Fail with `message` when the value is blank.
pub fn check_required(value: &str, message: &str) -> Result<(), ApplicationError> {
    if value.trim().is_empty() {
        return Err(ApplicationError::bad_request(message));
    }
    Ok(())
}

/// No amount may go beyond one hundred million euros.
pub const MAX_AMOUNT_CENTS: i64 = 10_000_000_000;

pub fn check_max_amount(amount_cents: i64) -> Result<(), ApplicationError> {
    if amount_cents > MAX_AMOUNT_CENTS {
        return Err(ApplicationError::bad_request(format!(
            "The amount can't exceed {MAX_AMOUNT_CENTS} cents."
        )));
    }
    Ok(())
}

pub fn add_amounts(total: i64, amount: i64) -> Result<i64, ApplicationError> {
    total
        .checked_add(amount)
        .ok_or_else(|| ApplicationError::bad_request("The amounts are too large to be added up."))
}

pub fn sum_amounts<I: IntoIterator<Item = i64>>(amounts: I) -> Result<i64, ApplicationError> {
    amounts.into_iter().try_fold(0, add_amounts)
}

static EMAIL_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(email.trim()))
}

/// Lower-cased, accent-free and whitespace-collapsed version of a name, to compare names.
pub fn normalize(value: &str) -> String {
    remove_diacritics(value)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
