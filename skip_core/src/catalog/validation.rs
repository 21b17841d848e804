//! Record validation at the catalog boundary
//!
//! The filter engine assumes well-formed records. Anything that breaks the
//! record invariants is reported back to whoever supplied the data.

use std::fmt;

use log::debug;
use rust_decimal::Decimal;

use crate::pricing::MAX_AMOUNT;
use crate::{SkipId, SkipRecord};

pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// The specific invariant a record broke.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationErrorType {
    /// Size must be at least one cubic yard
    ZeroSize,
    /// Hire period must be at least one day
    ZeroHirePeriod,
    /// Monetary amount below zero
    NegativeAmount { field: &'static str, amount: Decimal },
    /// Monetary amount above the catalog ceiling
    AmountOutOfRange { field: &'static str, amount: Decimal },
    /// VAT percentage outside 0 to 100
    VatOutOfRange { vat: Decimal },
    /// Another record already uses this id
    DuplicateId,
}

/// A broken invariant on one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub skip_id: SkipId,
    pub error_type: ValidationErrorType,
    pub message: String,
}

impl ValidationError {
    pub fn zero_size(skip_id: SkipId) -> Self {
        Self {
            skip_id,
            error_type: ValidationErrorType::ZeroSize,
            message: format!("Skip '{}' has a size of zero", skip_id),
        }
    }

    pub fn zero_hire_period(skip_id: SkipId) -> Self {
        Self {
            skip_id,
            error_type: ValidationErrorType::ZeroHirePeriod,
            message: format!("Skip '{}' has a hire period of zero days", skip_id),
        }
    }

    pub fn negative_amount(skip_id: SkipId, field: &'static str, amount: Decimal) -> Self {
        Self {
            skip_id,
            error_type: ValidationErrorType::NegativeAmount { field, amount },
            message: format!("Skip '{}' has a negative {}: {}", skip_id, field, amount),
        }
    }

    pub fn amount_out_of_range(skip_id: SkipId, field: &'static str, amount: Decimal) -> Self {
        Self {
            skip_id,
            error_type: ValidationErrorType::AmountOutOfRange { field, amount },
            message: format!(
                "Skip '{}' has a {} of {}, above the maximum of {}",
                skip_id, field, amount, MAX_AMOUNT
            ),
        }
    }

    pub fn vat_out_of_range(skip_id: SkipId, vat: Decimal) -> Self {
        Self {
            skip_id,
            error_type: ValidationErrorType::VatOutOfRange { vat },
            message: format!(
                "Skip '{}' has a VAT rate of {}%, expected 0 to 100",
                skip_id, vat
            ),
        }
    }

    pub fn duplicate_id(skip_id: SkipId) -> Self {
        Self {
            skip_id,
            error_type: ValidationErrorType::DuplicateId,
            message: format!("Skip id '{}' appears more than once", skip_id),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

impl SkipRecord {
    /// Validates the record invariants, collecting every violation.
    pub fn validate(&self) -> ValidationResult {
        debug!("Validating skip: '{}'", self.id);

        let mut errors = Vec::new();

        if self.size == 0 {
            errors.push(ValidationError::zero_size(self.id));
        }

        if self.hire_period_days == 0 {
            errors.push(ValidationError::zero_hire_period(self.id));
        }

        let amounts = [
            ("price before VAT", Some(self.price_before_vat)),
            ("transport cost", self.transport_cost),
            ("per tonne cost", self.per_tonne_cost),
        ];
        for (field, amount) in amounts {
            let Some(amount) = amount else {
                continue;
            };
            if amount < Decimal::ZERO {
                errors.push(ValidationError::negative_amount(self.id, field, amount));
            } else if amount > MAX_AMOUNT {
                errors.push(ValidationError::amount_out_of_range(self.id, field, amount));
            }
        }

        if self.vat < Decimal::ZERO || self.vat > Decimal::ONE_HUNDRED {
            errors.push(ValidationError::vat_out_of_range(self.id, self.vat));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(
                "Skip '{}' failed validation with {} errors",
                self.id,
                errors.len()
            );
            Err(errors)
        }
    }
}
