//! Authenticated user session and scholarship session models.

pub mod model;

pub use model::{
    AccessToken, AuthSession, LoginCredentials, ScholarshipSession, UserProfile, UserRole,
};
