pub mod api;
pub mod cli;
pub mod commands;
mod context;
mod observability;

pub use context::AppContext;
