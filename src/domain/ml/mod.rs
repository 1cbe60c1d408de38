pub mod field_registry;
