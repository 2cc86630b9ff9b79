pub mod args;
pub mod client;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod handler;
pub mod model;
pub mod navigator;
pub mod session;
pub mod tracing;
pub mod validator;

pub use client::HttpRegisterClient;
pub use client::RegisterClient;
pub use navigator::Navigator;
pub use navigator::Route;
pub use session::RegisterSession;
pub use session::SubmitOutcome;
pub use validator::validate;

pub use error::Result;

// Test utilities - only compiled during testing
#[cfg(test)]
pub mod test_utils {
    pub mod fixtures;
    pub mod mocks;
}
