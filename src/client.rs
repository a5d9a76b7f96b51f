use crate::date::CalendarDate;
use crate::name::PersonName;
use crate::report::ClientReport;
use crate::validation::ValidationError;
use crate::validation::validate_client_id;

/// 6 or 7 ASCII digits, surrounding whitespace stripped.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, parse_display::Display)]
pub struct ClientId(String);

impl ClientId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ClientId {
    type Error = ValidationError;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        validate_client_id(id).map(|trimmed| Self(trimmed.to_owned()))
    }
}

impl std::str::FromStr for ClientId {
    type Err = ValidationError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::try_from(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    name: PersonName,
    date_born: CalendarDate,
    signup_date: CalendarDate,
    date_died: Option<CalendarDate>,
}

impl Client {
    /// # Errors
    ///
    /// Returns an error if `signup_date` is before `date_born` ([`ValidationError::SignupBeforeBirth`]).
    /// Same-day signup is allowed.
    pub fn new(
        id: ClientId,
        name: PersonName,
        date_born: CalendarDate,
        signup_date: CalendarDate,
        date_died: Option<CalendarDate>,
    ) -> Result<Self, ValidationError> {
        if signup_date < date_born {
            return Err(ValidationError::SignupBeforeBirth {
                signup: signup_date,
                born: date_born,
            });
        }
        Ok(Self {
            id,
            name,
            date_born,
            signup_date,
            date_died,
        })
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub const fn id(&self) -> &ClientId {
        &self.id
    }

    pub const fn name(&self) -> &PersonName {
        &self.name
    }

    pub const fn date_born(&self) -> CalendarDate {
        self.date_born
    }

    pub const fn signup_date(&self) -> CalendarDate {
        self.signup_date
    }

    pub const fn date_died(&self) -> Option<CalendarDate> {
        self.date_died
    }

    pub const fn is_alive(&self) -> bool {
        self.date_died.is_none()
    }

    pub fn details_report(&self) -> String {
        ClientReport::from(self).to_string()
    }
}

/// Collects [`Client`] fields one at a time; absent required fields are reported by [`ClientBuilder::build`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    id: Option<String>,
    name: Option<PersonName>,
    date_born: Option<CalendarDate>,
    signup_date: Option<CalendarDate>,
    date_died: Option<CalendarDate>,
}

impl ClientBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: PersonName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn date_born(mut self, date: CalendarDate) -> Self {
        self.date_born = Some(date);
        self
    }

    pub fn signup_date(mut self, date: CalendarDate) -> Self {
        self.signup_date = Some(date);
        self
    }

    pub fn date_died(mut self, date: Option<CalendarDate>) -> Self {
        self.date_died = date;
        self
    }

    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is absent or not 6-7 digits ([`ValidationError::InvalidClientId`]).
    /// - The name, birth date or signup date is absent ([`ValidationError::MissingField`]).
    /// - The signup date precedes the birth date ([`ValidationError::SignupBeforeBirth`]).
    pub fn build(self) -> Result<Client, ValidationError> {
        let id = ClientId::try_from(self.id.as_deref().unwrap_or_default())?;
        let name = self.name.ok_or(ValidationError::MissingField { field: "name" })?;
        let date_born = self.date_born.ok_or(ValidationError::MissingField { field: "date_born" })?;
        let signup_date = self
            .signup_date
            .ok_or(ValidationError::MissingField { field: "signup_date" })?;
        Client::new(id, name, date_born, signup_date, self.date_died)
    }
}
