//! Directory listing entry.

use serde::{Deserialize, Serialize};

use crate::Credential;

/// Read-only entry returned by the directory listing.
///
/// The listing and the credential store share the same underlying table
/// but are accessed independently; this type carries only the public
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DirectoryEntry {
    /// Unique user identifier
    pub id: i32,
    /// User display name
    pub name: String,
    /// User email address, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<Credential> for DirectoryEntry {
    fn from(credential: Credential) -> Self {
        Self {
            id: credential.id,
            name: credential.name,
            email: Some(credential.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn entry_projects_public_columns_only() {
        let credential = Credential {
            id: 3,
            email: "bob@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Bob".to_string(),
            professional_card: "".to_string(),
            created_at: Utc::now(),
        };

        let entry = DirectoryEntry::from(credential);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(entry.email.as_deref(), Some("bob@example.com"));
        assert!(json.get("password_hash").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn missing_email_is_omitted_from_json() {
        let entry = DirectoryEntry {
            id: 1,
            name: "Jane".to_string(),
            email: None,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("email").is_none());
    }
}
