//! The single error kind of the crate and the free functions that check
//! caller input before any value is built or mutated.

use rust_decimal::Decimal;

use crate::date::CalendarDate;

pub const MAX_NAME_LEN: usize = 45;
pub const FORBIDDEN_NAME_WORD: &str = "admin";
pub const CLIENT_ID_DIGITS: std::ops::RangeInclusive<usize> = 6..=7;
pub const ACCOUNT_NUMBER_LEN: std::ops::RangeInclusive<usize> = 6..=7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("year must be between {min} and {max}, year={year}")]
    YearOutOfRange { year: u16, min: u16, max: u16 },
    #[error("month must be between 1 and 12, month={month}")]
    MonthOutOfRange { month: u8 },
    #[error("invalid day for {year}-{month:02}, day={day} max={max}")]
    DayOutOfRange { year: u16, month: u8, day: u8, max: u8 },
    #[error("{field} name cannot be empty")]
    EmptyName { field: &'static str },
    #[error("{field} name cannot be longer than {max} characters, len={len}")]
    NameTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("{field} name cannot contain `admin`, value={value:?}")]
    ForbiddenName { field: &'static str, value: String },
    #[error("client id must have 6-7 digits, id={id:?}")]
    InvalidClientId { id: String },
    #[error("signup date {signup} cannot be before date of birth {born}")]
    SignupBeforeBirth { signup: CalendarDate, born: CalendarDate },
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("account number length must be 6 or 7, number={number:?}")]
    InvalidAccountNumber { number: String },
    #[error("amount must be positive, amount={amount}")]
    NonPositiveAmount { amount: Decimal },
    #[error("insufficient funds, need {amount} with balance {balance}")]
    InsufficientFunds { balance: Decimal, amount: Decimal },
    #[error("incorrect PIN")]
    IncorrectPin,
    #[error("overflow while applying {amount} to balance {balance}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

/// Checks one part of a person's name.
///
/// # Errors
///
/// Returns an error if `value`:
/// - Is empty ([`ValidationError::EmptyName`]).
/// - Is longer than [`MAX_NAME_LEN`] characters ([`ValidationError::NameTooLong`]).
/// - Contains [`FORBIDDEN_NAME_WORD`] in any letter case ([`ValidationError::ForbiddenName`]).
pub fn validate_name_part(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyName { field });
    }
    let len = value.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            field,
            len,
            max: MAX_NAME_LEN,
        });
    }
    if value.to_lowercase().contains(FORBIDDEN_NAME_WORD) {
        return Err(ValidationError::ForbiddenName {
            field,
            value: value.to_owned(),
        });
    }
    Ok(())
}

/// Trims `id` and checks it is made only of 6 or 7 ASCII digits.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidClientId`] otherwise.
pub fn validate_client_id(id: &str) -> Result<&str, ValidationError> {
    let trimmed = id.trim();
    if CLIENT_ID_DIGITS.contains(&trimmed.len()) && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(trimmed);
    }
    Err(ValidationError::InvalidClientId { id: id.to_owned() })
}

/// # Errors
///
/// Returns [`ValidationError::InvalidAccountNumber`] if `number` is not 6 or 7 characters long.
pub fn validate_account_number(number: &str) -> Result<(), ValidationError> {
    if ACCOUNT_NUMBER_LEN.contains(&number.chars().count()) {
        return Ok(());
    }
    Err(ValidationError::InvalidAccountNumber {
        number: number.to_owned(),
    })
}
