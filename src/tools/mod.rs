// Shared types
pub mod types;

// Pipeline stages, in order
pub mod select;
pub mod validate;
pub mod fetch;
pub mod extract;
