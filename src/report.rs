//! Human-readable one-line reports for clients and accounts.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::account::Account;
use crate::client::Client;
use crate::client::ClientId;
use crate::date::CalendarDate;

/// e.g. `Albert Einstein client #123456 (died Monday April 18, 1955) joined the bank on Monday January 1, 1900`
pub struct ClientReport<'a> {
    full_name: String,
    id: &'a ClientId,
    died: Option<CalendarDate>,
    joined: CalendarDate,
}

impl<'a> From<&'a Client> for ClientReport<'a> {
    fn from(client: &'a Client) -> Self {
        Self {
            full_name: client.name().full_name(),
            id: client.id(),
            died: client.date_died(),
            joined: client.signup_date(),
        }
    }
}

impl std::fmt::Display for ClientReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} client #{} ", self.full_name, self.id)?;
        match self.died {
            Some(date) => write!(f, "(died {})", date.long_form())?,
            None => f.write_str("(alive)")?,
        }
        write!(f, " joined the bank on {}", self.joined.long_form())
    }
}

/// e.g. `Albert Einstein had $900 USD in account #abc123 which was opened on Monday January 1, 1900 and closed Saturday October 14, 1950.`
pub struct AccountReport<'a> {
    owner: String,
    whole_dollars: Decimal,
    number: &'a str,
    opened: CalendarDate,
    closed: Option<CalendarDate>,
}

impl<'a> From<&'a Account<'_>> for AccountReport<'a> {
    fn from(account: &'a Account<'_>) -> Self {
        Self {
            owner: account.client().name().full_name(),
            whole_dollars: account
                .balance()
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            number: account.number().as_str(),
            opened: account.opened(),
            closed: account.closed(),
        }
    }
}

impl std::fmt::Display for AccountReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} had ${} USD in account #{} which was opened on {}",
            self.owner,
            self.whole_dollars,
            self.number,
            self.opened.long_form()
        )?;
        match self.closed {
            Some(date) => write!(f, " and closed {}.", date.long_form()),
            None => f.write_str(" and is still open."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::account::Pin;
    use crate::account::close;
    use crate::account::deposit;
    use crate::account::withdraw_with_pin;
    use crate::name::PersonName;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn client(died: Option<CalendarDate>) -> Client {
        Client::builder()
            .id("123456")
            .name(PersonName::new("ALBERT", "einstein").unwrap())
            .date_born(date(1879, 3, 14))
            .signup_date(date(1900, 1, 1))
            .date_died(died)
            .build()
            .unwrap()
    }

    #[test]
    fn client_report_for_a_dead_client() {
        assert_eq!(
            "Albert Einstein client #123456 (died Monday April 18, 1955) joined the bank on Monday January 1, 1900",
            client(Some(date(1955, 4, 18))).details_report()
        );
    }

    #[test]
    fn client_report_for_an_alive_client() {
        assert_eq!(
            "Albert Einstein client #123456 (alive) joined the bank on Monday January 1, 1900",
            client(None).details_report()
        );
    }

    #[test]
    fn account_report_for_a_closed_account() {
        let client = client(Some(date(1955, 4, 18)));
        let mut account = Account::new(&client, "abc123", Pin::new(3141), date(1900, 1, 1)).unwrap();
        deposit(&mut account, Decimal::ONE_THOUSAND).unwrap();
        withdraw_with_pin(&mut account, Decimal::ONE_HUNDRED, Pin::new(3141)).unwrap();
        close(&mut account, date(1950, 10, 14));
        assert_eq!(
            "Albert Einstein had $900 USD in account #abc123 which was opened on Monday January 1, 1900 and closed Saturday October 14, 1950.",
            account.details_report()
        );
    }

    #[test]
    fn account_report_for_an_open_account() {
        let client = client(None);
        let account = Account::new(&client, "abc123", Pin::new(3141), date(1900, 1, 1)).unwrap();
        assert_eq!(
            "Albert Einstein had $0 USD in account #abc123 which was opened on Monday January 1, 1900 and is still open.",
            account.details_report()
        );
    }

    #[rstest]
    #[case("899.49", "899")]
    #[case("899.5", "900")]
    #[case("0.4", "0")]
    #[case("1800.00", "1800")]
    fn account_report_rounds_to_whole_dollars(#[case] balance: &str, #[case] expected: &str) {
        let client = client(None);
        let mut account = Account::new(&client, "abc123", Pin::new(3141), date(1900, 1, 1)).unwrap();
        deposit(&mut account, Decimal::from_str(balance).unwrap()).unwrap();
        assert!(
            account
                .details_report()
                .contains(&format!(" had ${expected} USD ")),
            "report={} expected={expected}",
            account.details_report()
        );
    }
}
