//! Courier Domain - Core request composer types
//!
//! This crate defines the domain model for the Courier request composer.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod id;
pub mod request;
pub mod response;
pub mod settings;
pub mod state;
pub mod tls;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use id::RowId;
pub use settings::TransportSettings;
pub use state::RequestState;
pub use validation::ValidationError;
