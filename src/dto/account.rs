use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::validation;

/// Shipping/billing address fields as captured by the checkout and account
/// forms. Validation messages are shown to the shopper verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressForm {
    pub name: String,
    pub mobile: String,
    pub street: String,
    pub barangay: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    #[serde(default)]
    pub is_default: bool,
}

impl AddressForm {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().chars().count() < 2 {
            return Err(invalid("Name must be at least 2 characters"));
        }
        if !validation::is_valid_mobile(&validation::normalize_mobile(&self.mobile)) {
            return Err(invalid(
                "Please enter a valid Philippine mobile number (e.g., 09XX-XXX-XXXX)",
            ));
        }
        if self.street.trim().chars().count() < 5 {
            return Err(invalid("Street address must be at least 5 characters"));
        }
        if self.barangay.trim().chars().count() < 2 {
            return Err(invalid("Barangay is required"));
        }
        if self.city.trim().chars().count() < 2 {
            return Err(invalid("City is required"));
        }
        if self.province.trim().chars().count() < 2 {
            return Err(invalid("Province is required"));
        }
        if !validation::is_valid_postal_code(self.postal_code.trim()) {
            return Err(invalid("Postal code must be 4 digits"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
}
