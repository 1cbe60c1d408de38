pub mod components;
pub mod design_system;
pub mod form;
pub mod ui;
