//! User domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated principal for a session
///
/// Created on successful registration and immutable thereafter. The id
/// is the key used by the wallet service; the name keeps the casing the
/// player signed up with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

impl User {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let id = Uuid::new_v4();
        let user = User::new(id, "Player1");
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Player1");
    }
}
