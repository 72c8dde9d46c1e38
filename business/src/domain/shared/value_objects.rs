use serde::{Deserialize, Serialize};

/// Identity of an authenticated caller (the Firebase UID).
/// Owns products; never checked against a user store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_firebase_uid_as_str() {
        let user_id = UserId::new("firebase-uid-123");
        assert_eq!(user_id.as_str(), "firebase-uid-123");
    }

    #[test]
    fn should_compare_user_ids_by_value() {
        assert_eq!(UserId::from("same-user"), UserId::new("same-user".to_string()));
        assert_ne!(UserId::from("same-user"), UserId::from("other-user"));
    }

    #[test]
    fn should_display_raw_uid() {
        assert_eq!(format!("{}", UserId::new("test-user")), "test-user");
    }
}
