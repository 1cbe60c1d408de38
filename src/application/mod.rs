pub mod inference;
pub mod ml;
