pub mod account;
pub mod auth;
pub mod cart;
pub mod favorites;
pub mod orders;
