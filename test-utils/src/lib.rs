//! Yatube Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the yatube
//! API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert helpers for users, groups, posts, comments and follows
//!
//! # Usage
//!
//! Pick the tables a test touches, then seed rows through the factories:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_posts() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_post_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (author, post) = factory::helpers::create_post_with_dependencies(db).await?;
//!     factory::comment::create_comment(db, post.id, author.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Handler tests that need an acting user call `TestContext::db_and_session()` and write
//! the user id into the returned session.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
