use serde::{Deserialize, Serialize};

use super::ids::Id;

/// An identity that can hold a seat on an event roster.
///
/// Events share users through `Arc<User>`, so a user handed to an event is
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id<User>,
    pub name: String,
    pub email: String,
}

impl User {
    /// Stores the arguments verbatim. Empty names, negative ids and malformed
    /// emails are all accepted; see `ops::user_ops::create_user` for a checked variant.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Id::new(id),
            name: name.into(),
            email: email.into(),
        }
    }
}
