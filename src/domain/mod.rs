pub mod customer;
pub mod errors;
pub mod ml;
