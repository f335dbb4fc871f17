use serde::Deserialize;

use crate::dto::account::AddressForm;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub address: AddressForm,
}
