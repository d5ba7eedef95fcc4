//! Service layer for the console/game catalog.
//! - Separates business rules (validation, uniqueness, parent existence) from data access.
//! - Reuses entity definitions and store helpers from the `models` crate.
//! - Every operation reports failures through [`errors::ServiceError`].

pub mod errors;
pub mod console;
pub mod game;

pub use console::ConsoleService;
pub use game::GameService;
