use thiserror::Error;

/// Internal issues with stored data or the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A JSON column could not be decoded into its nested model.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode {column} of {collection} '{id}': {source}")]
    CorruptColumn {
        collection: &'static str,
        column: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored role string is not one of the known roles.
    #[error("Unknown role '{value}' stored for user '{user_id}'")]
    UnknownRole { user_id: String, value: String },
}
