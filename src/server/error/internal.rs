use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A record referenced by a foreign key was missing when loading a related model.
    ///
    /// Occurs when a post, comment or follow edge points at a user row that cannot be
    /// found, which the schema's foreign keys should prevent. Results in a 500 Internal
    /// Server Error with a generic message returned to client.
    #[error("{entity} {id} references missing user {user_id}")]
    MissingRelatedUser {
        /// Name of the referencing entity
        entity: &'static str,
        /// Id of the referencing record
        id: i32,
        /// Id of the user that could not be found
        user_id: i32,
    },
}
