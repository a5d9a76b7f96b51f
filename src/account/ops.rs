//! Free functions that mutate a supplied [`Account`].
//!
//! They accept `&mut Account` so that mutability is explicit at the call site and a
//! shared account needs a lock around each whole read-modify-write.
//! A failed call leaves the account untouched.

use rust_decimal::Decimal;

use crate::account::Account;
use crate::account::Pin;
use crate::amount::PositiveAmount;
use crate::date::CalendarDate;
use crate::validation::ValidationError;

#[cfg(test)]
#[path = "tests/ops_tests.rs"]
mod ops_tests;

/// Adds `amount` to the account's balance.
///
/// # Errors
///
/// Returns an error if:
/// - `amount` is zero or negative ([`ValidationError::NonPositiveAmount`]).
/// - Adding `amount` to the balance overflows ([`ValidationError::BalanceOverflow`]).
pub fn deposit(account: &mut Account<'_>, amount: Decimal) -> Result<(), ValidationError> {
    let amount = PositiveAmount::try_from(amount)?;
    account.balance = checked_add_to_balance(account, amount)?;
    Ok(())
}

/// Subtracts `amount` from the account's balance without checking the PIN.
///
/// # Errors
///
/// Returns an error if:
/// - `amount` is zero or negative ([`ValidationError::NonPositiveAmount`]).
/// - The balance is less than `amount` ([`ValidationError::InsufficientFunds`]).
pub fn withdraw(account: &mut Account<'_>, amount: Decimal) -> Result<(), ValidationError> {
    let amount = PositiveAmount::try_from(amount)?;
    account.balance = checked_sub_from_balance(account, amount)?;
    Ok(())
}

/// Subtracts `amount` from the account's balance once `pin` matches the account's PIN.
///
/// # Errors
///
/// Returns an error if:
/// - `pin` does not match ([`ValidationError::IncorrectPin`]), checked first.
/// - Any of the [`withdraw`] errors applies.
pub fn withdraw_with_pin(account: &mut Account<'_>, amount: Decimal, pin: Pin) -> Result<(), ValidationError> {
    if account.pin != pin {
        return Err(ValidationError::IncorrectPin);
    }
    withdraw(account, amount)
}

/// Marks the account as closed on `date`.
///
/// Idempotent on the state: closing an already closed account overwrites the closing date.
pub const fn close(account: &mut Account<'_>, date: CalendarDate) {
    account.closed = Some(date);
}

fn checked_add_to_balance(account: &Account<'_>, amount: PositiveAmount) -> Result<Decimal, ValidationError> {
    account
        .balance
        .checked_add(amount.as_inner())
        .ok_or_else(|| overflow_error(account, amount))
}

fn checked_sub_from_balance(account: &Account<'_>, amount: PositiveAmount) -> Result<Decimal, ValidationError> {
    if account.balance < amount.as_inner() {
        return Err(ValidationError::InsufficientFunds {
            balance: account.balance,
            amount: amount.as_inner(),
        });
    }
    account
        .balance
        .checked_sub(amount.as_inner())
        .ok_or_else(|| overflow_error(account, amount))
}

const fn overflow_error(account: &Account<'_>, amount: PositiveAmount) -> ValidationError {
    ValidationError::BalanceOverflow {
        balance: account.balance,
        amount: amount.as_inner(),
    }
}
