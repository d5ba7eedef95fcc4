pub mod errors;
pub mod db;
pub mod console;
pub mod game;
