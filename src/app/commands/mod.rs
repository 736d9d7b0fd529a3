pub mod fetch;
pub mod package;
pub mod stage;
