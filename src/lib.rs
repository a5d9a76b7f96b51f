//! Toy bank data model: validated dates and names, clients, and accounts with
//! guarded balance operations and one-line textual reports.

pub mod account;
pub mod amount;
pub mod client;
pub mod date;
pub mod name;
pub mod report;
pub mod validation;

pub use account::Account;
pub use client::Client;
pub use client::ClientId;
pub use date::CalendarDate;
pub use date::Weekday;
pub use name::PersonName;
pub use validation::ValidationError;
