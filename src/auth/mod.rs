pub mod jwt;
pub mod service;
pub mod validation;

pub use service::{AuthError, AuthService};
