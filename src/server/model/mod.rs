//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the service boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs together with the acting user, which is
//! where ownership (`author`, `user`, `post`) gets stamped onto new records.

pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;
