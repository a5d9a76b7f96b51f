//! Bank accounts.
//!
//! [`Account`] is a plain data container borrowing its owning [`crate::client::Client`];
//! every balance or lifecycle change goes through the free functions in [`ops`].

pub mod model;
pub mod ops;

pub use model::Account;
pub use model::AccountNumber;
pub use model::AccountState;
pub use model::Pin;
pub use ops::close;
pub use ops::deposit;
pub use ops::withdraw;
pub use ops::withdraw_with_pin;
