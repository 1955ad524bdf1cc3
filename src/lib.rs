//! Social blogging REST API: groups, posts, comments and follow relationships.

pub mod model;
pub mod server;
