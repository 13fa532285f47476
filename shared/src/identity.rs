use uuid::Uuid;

/// A fresh opaque per-browser identifier.
///
/// On `wasm32` the randomness comes from `crypto.getRandomValues` through
/// getrandom's `js` backend.
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}
