//! Commerce screens: cart, invoices, checkout, and the payment results.

pub mod cart;
pub mod checkout;
pub mod invoices;
pub mod result;
