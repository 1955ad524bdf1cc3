//! HTTP request handlers.
//!
//! Each handler resolves the acting user through `AuthGuard`, delegates to the service
//! layer and converts the resulting domain models into DTOs.

pub mod auth;
pub mod comment;
pub mod follow;
pub mod group;
pub mod post;

#[cfg(test)]
mod test;
