use crate::validation::ValidationError;
use crate::validation::validate_name_part;

/// A person's first and last name, stored exactly as supplied.
#[derive(Debug, Clone, Hash, PartialEq, Eq, parse_display::Display)]
#[display("{first} {last}")]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    /// # Errors
    ///
    /// Returns an error if either part is empty, longer than 45 characters or
    /// contains `admin` in any letter case (see [`validate_name_part`]).
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Result<Self, ValidationError> {
        let first = first.into();
        let last = last.into();
        validate_name_part("first", &first)?;
        validate_name_part("last", &last)?;
        Ok(Self { first, last })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// Upper-cased first letters, each followed by a period, e.g. `A.E.`.
    pub fn initials(&self) -> String {
        [&self.first, &self.last]
            .into_iter()
            .filter_map(|part| part.chars().next())
            .fold(String::new(), |mut acc, initial| {
                acc.extend(initial.to_uppercase());
                acc.push('.');
                acc
            })
    }

    /// Both parts in title case joined by a space, e.g. `Albert Einstein`.
    pub fn full_name(&self) -> String {
        format!("{} {}", title_case(&self.first), title_case(&self.last))
    }

    /// Reversed characters of the raw last name, a space, then of the raw first name.
    pub fn reversed_name(&self) -> String {
        format!(
            "{} {}",
            self.last.chars().rev().collect::<String>(),
            self.first.chars().rev().collect::<String>()
        )
    }
}

fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}
