pub mod persona;
pub mod turn;
pub mod summary;
pub mod session;
pub mod protocol;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::DebateError;
pub type Result<T> = std::result::Result<T, DebateError>;
