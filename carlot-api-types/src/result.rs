use serde::{Deserialize, Serialize};

/// Error envelope returned by the JSON API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub error_message: String,
}
