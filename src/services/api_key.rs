//! API key issuance for new users.
//!
//! Keys are opaque identifiers handed out at registration. They are never
//! verified by the server.

use uuid::Uuid;

/// Length of an issued key.
pub const API_KEY_LENGTH: usize = 20;

/// Generate a new random API key.
///
/// The key is the first 20 characters of a UUIDv4. Collisions between
/// users are not checked.
pub fn generate_api_key() -> String {
    Uuid::new_v4()
        .to_string()
        .chars()
        .take(API_KEY_LENGTH)
        .collect()
}
