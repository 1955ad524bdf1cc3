//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly into the database and return
//! the stored entity model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let post = factory::post::create_post(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (author, post) = factory::helpers::create_post_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .build()
//!     .await?;
//!
//! let post = factory::post::PostFactory::new(&db, user.id)
//!     .content("Hello")
//!     .group(group.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `group` - Create group entities
//! - `post` - Create post entities
//! - `comment` - Create comment entities
//! - `follow` - Create follow edges
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod comment;
pub mod follow;
pub mod group;
pub mod helpers;
pub mod post;
pub mod user;

pub use comment::create_comment;
pub use follow::create_follow;
pub use group::create_group;
pub use post::create_post;
pub use user::{create_user, create_user_with_username};
