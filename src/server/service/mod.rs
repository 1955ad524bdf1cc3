//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Payload validation and reference checks (group, parent post, follow target)
//! - **Scoping**: Computing the record set visible for a request (comments of a post, edges of an actor)
//! - **Search**: Follow list and subscription filtering
//! - **Domain Models**: Converting repository results into domain models

pub mod comment;
pub mod follow;
pub mod group;
pub mod post;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Rejects blank text content.
///
/// # Returns
/// - `Ok(())` - Content has at least one non-whitespace character
/// - `Err(AppError::ValidationFailed)` - Content is empty or whitespace only
pub(crate) fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::ValidationFailed(
            "content: This field may not be blank.".to_string(),
        ));
    }

    Ok(())
}
