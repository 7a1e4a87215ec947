use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ValidationError};

/// loan issuance policy for an account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanPolicy {
    /// maximum loan as a multiple of the current balance
    pub cap_multiplier: Decimal,
}

impl LoanPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.cap_multiplier <= Decimal::ZERO {
            return Err(ValidationError::InvalidPolicy {
                message: format!("cap multiplier must be positive, got {}", self.cap_multiplier),
            });
        }
        Ok(())
    }

    /// loan cap for a given balance; never negative
    pub fn cap_for(&self, balance: Money) -> Money {
        (balance * self.cap_multiplier).max(Money::ZERO)
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            cap_multiplier: dec!(2),
        }
    }
}

/// terms governing an earner's work and pay transfers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkTerms {
    /// pay earned per unit of work
    pub pay_per_shift: Money,
    /// fraction of a transferred pay that goes toward an outstanding loan
    pub down_payment_rate: Rate,
}

impl WorkTerms {
    pub fn validate(&self) -> Result<()> {
        if !self.pay_per_shift.is_positive() {
            return Err(ValidationError::InvalidPolicy {
                message: format!("pay per shift must be positive, got {}", self.pay_per_shift),
            });
        }
        if self.down_payment_rate.as_decimal() <= Decimal::ZERO
            || self.down_payment_rate.as_decimal() > Decimal::ONE
        {
            return Err(ValidationError::InvalidPolicy {
                message: format!(
                    "down payment rate must be in (0, 1], got {}",
                    self.down_payment_rate
                ),
            });
        }
        Ok(())
    }
}

impl Default for WorkTerms {
    fn default() -> Self {
        Self {
            pay_per_shift: Money::from_major(100),
            down_payment_rate: Rate::from_percentage(10),
        }
    }
}
