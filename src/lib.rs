pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod rules;
pub mod session;
pub mod table;

pub use error::GameError;
