use rust_decimal::Decimal;

use crate::client::Client;
use crate::date::CalendarDate;
use crate::report::AccountReport;
use crate::validation::ValidationError;
use crate::validation::validate_account_number;

#[derive(Debug, Clone, Hash, PartialEq, Eq, parse_display::Display)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AccountNumber {
    type Error = ValidationError;

    fn try_from(number: &str) -> Result<Self, Self::Error> {
        validate_account_number(number)?;
        Ok(Self(number.to_owned()))
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Pin(u32);

impl Pin {
    pub const fn new(pin: u32) -> Self {
        Self(pin)
    }
}

impl std::fmt::Debug for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pin(****)")
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccountState {
    Open,
    Closed(CalendarDate),
}

#[derive(Debug, Clone)]
pub struct Account<'c> {
    pub(in crate::account) client: &'c Client,
    pub(in crate::account) number: AccountNumber,
    pub(in crate::account) pin: Pin,
    pub(in crate::account) balance: Decimal,
    pub(in crate::account) opened: CalendarDate,
    pub(in crate::account) closed: Option<CalendarDate>,
}

impl<'c> Account<'c> {
    /// Opens an account with a zero balance.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAccountNumber`] if `number` is not 6 or 7 characters long.
    pub fn new(client: &'c Client, number: &str, pin: Pin, opened: CalendarDate) -> Result<Self, ValidationError> {
        Self::with_closed(client, number, pin, opened, None)
    }

    /// Like [`Account::new`] but starts [`AccountState::Closed`] when `closed` is present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAccountNumber`] if `number` is not 6 or 7 characters long.
    pub fn with_closed(
        client: &'c Client,
        number: &str,
        pin: Pin,
        opened: CalendarDate,
        closed: Option<CalendarDate>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            client,
            number: AccountNumber::try_from(number)?,
            pin,
            balance: Decimal::ZERO,
            opened,
            closed,
        })
    }

    pub const fn client(&self) -> &'c Client {
        self.client
    }

    pub const fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    pub const fn opened(&self) -> CalendarDate {
        self.opened
    }

    pub const fn closed(&self) -> Option<CalendarDate> {
        self.closed
    }

    pub const fn state(&self) -> AccountState {
        match self.closed {
            Some(date) => AccountState::Closed(date),
            None => AccountState::Open,
        }
    }

    pub const fn is_open(&self) -> bool {
        self.closed.is_none()
    }

    pub fn details_report(&self) -> String {
        AccountReport::from(self).to_string()
    }
}
