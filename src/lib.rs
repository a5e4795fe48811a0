pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;

pub use error::CompassError;
pub use service::CompassService;
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Include integration tests
