use rust_decimal::Decimal;

use crate::validation::ValidationError;

/// This permits to avoid checks on non-positive amounts while mutating balances.
#[derive(Debug, Copy, Clone, PartialEq, Eq, parse_display::Display)]
pub struct PositiveAmount(Decimal);

impl TryFrom<Decimal> for PositiveAmount {
    type Error = ValidationError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount { amount });
        }
        Ok(Self(amount))
    }
}

impl PositiveAmount {
    pub const fn as_inner(&self) -> Decimal {
        self.0
    }
}
