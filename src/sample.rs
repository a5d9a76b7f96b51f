use std::fmt::Write as _;

use rust_decimal::Decimal;
use toybank::Account;
use toybank::CalendarDate;
use toybank::Client;
use toybank::PersonName;
use toybank::ValidationError;
use toybank::account::Pin;

type Ymd = (u16, u8, u8);

pub struct SamplePerson {
    pub client_id: &'static str,
    first: &'static str,
    last: &'static str,
    born: Ymd,
    died: Option<Ymd>,
    signup: Ymd,
    account_number: &'static str,
    pin: u32,
    opened: Ymd,
    closed: Option<Ymd>,
    deposit: u32,
    withdrawal: u32,
}

pub const SAMPLE_PEOPLE: [SamplePerson; 4] = [
    SamplePerson {
        client_id: "123456",
        first: "Albert",
        last: "Einstein",
        born: (1879, 3, 14),
        died: Some((1955, 4, 18)),
        signup: (1900, 1, 1),
        account_number: "abc123",
        pin: 3141,
        opened: (1900, 1, 1),
        closed: Some((1950, 10, 14)),
        deposit: 1000,
        withdrawal: 100,
    },
    SamplePerson {
        client_id: "111222",
        first: "Nelson",
        last: "Mandela",
        born: (1918, 7, 18),
        died: Some((2013, 12, 5)),
        signup: (1994, 5, 10),
        account_number: "654321",
        pin: 4664,
        opened: (1994, 5, 10),
        closed: None,
        deposit: 2000,
        withdrawal: 200,
    },
    SamplePerson {
        client_id: "222333",
        first: "Frida",
        last: "Kahlo",
        born: (1907, 7, 6),
        died: Some((1954, 7, 13)),
        signup: (1940, 1, 1),
        account_number: "frd123",
        pin: 1907,
        opened: (1940, 1, 1),
        closed: Some((1954, 7, 13)),
        deposit: 500,
        withdrawal: 50,
    },
    SamplePerson {
        client_id: "3334444",
        first: "Jackie",
        last: "Chan",
        born: (1954, 4, 7),
        died: None,
        signup: (1980, 10, 1),
        account_number: "chan789",
        pin: 1954,
        opened: (1980, 10, 1),
        closed: None,
        deposit: 3000,
        withdrawal: 500,
    },
];

impl SamplePerson {
    /// Builds the person's client and account, runs the deposit and the PIN-checked
    /// withdrawal, and renders the name forms followed by both reports.
    pub fn render(&self) -> Result<String, ValidationError> {
        let name = PersonName::new(self.first, self.last)?;
        let client = Client::builder()
            .id(self.client_id)
            .name(name.clone())
            .date_born(date(self.born)?)
            .signup_date(date(self.signup)?)
            .date_died(self.died.map(date).transpose()?)
            .build()?;

        let pin = Pin::new(self.pin);
        let mut account = Account::with_closed(
            &client,
            self.account_number,
            pin,
            date(self.opened)?,
            self.closed.map(date).transpose()?,
        )?;
        toybank::account::deposit(&mut account, Decimal::from(self.deposit))?;
        toybank::account::withdraw_with_pin(&mut account, Decimal::from(self.withdrawal), pin)?;

        let mut out = String::new();
        for line in [
            name.initials(),
            name.full_name(),
            name.reversed_name(),
            client.details_report(),
            account.details_report(),
        ] {
            let _ = writeln!(out, "{line}");
        }
        Ok(out)
    }
}

fn date((year, month, day): Ymd) -> Result<CalendarDate, ValidationError> {
    CalendarDate::new(year, month, day)
}
