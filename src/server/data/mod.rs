//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally; records that
//! serialize a related username are returned together with the related user entity so the
//! service layer can convert them into domain models. All database queries, inserts, updates,
//! and deletes are performed through these repositories.

pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;
