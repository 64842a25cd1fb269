use serde::{Deserialize, Serialize};

/// Request body for `POST /api/user`. Missing fields deserialize as empty
/// strings so they are reported by validation rather than by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
