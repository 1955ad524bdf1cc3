//! Wire DTOs shared by request handlers and API documentation.

pub mod api;
pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;
