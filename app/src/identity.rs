//! The signed-in user as supplied by the authentication layer.
//!
//! The header only reads this: it never creates, refreshes, or validates an
//! identity. On the wire roles travel as `{"name": "..."}` records; in Rust they
//! are the closed [`Role`] enum so that membership checks are not string scans.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RoleRecord", into = "RoleRecord")]
pub enum Role {
    Admin,
    User,
    /// Any role this application does not act on, kept by name.
    Other(String),
}

impl Role {
    pub const ADMIN_NAME: &'static str = "admin";
    pub const USER_NAME: &'static str = "user";

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Admin => Self::ADMIN_NAME,
            Self::User => Self::USER_NAME,
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        match name {
            Self::ADMIN_NAME => Self::Admin,
            Self::USER_NAME => Self::User,
            other => Self::Other(other.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RoleRecord {
    name: String,
}

impl From<RoleRecord> for Role {
    fn from(record: RoleRecord) -> Self {
        Self::from(record.name.as_str())
    }
}

impl From<Role> for RoleRecord {
    fn from(role: Role) -> Self {
        Self {
            name: role.name().to_owned(),
        }
    }
}

/// Minimal view of an authenticated user.
///
/// `roles` is `None` when the authentication layer sent no role list at all,
/// which is treated exactly like an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<Role>>,
}

impl Identity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = Some(roles.into_iter().collect());
        self
    }

    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles
            .as_deref()
            .is_some_and(|roles| roles.contains(role))
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::Admin)
    }

    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Avatar fallback text: first letter of the first and last words, uppercased.
///
/// A single word gives a single letter; a blank name gives an empty string.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut letters: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
    if let Some(last) = words.last() {
        letters.extend(last.chars().take(1).flat_map(char::to_uppercase));
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("Grace Brewster Hopper"), "GH");
        assert_eq!(initials("  padded   name "), "PN");
        assert_eq!(initials("  "), "");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_initials_uppercase_non_ascii() {
        assert_eq!(initials("élodie ørsted"), "ÉØ");
    }

    #[test]
    fn test_role_from_name() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("user"), Role::User);
        assert_eq!(Role::from("Admin"), Role::Other("Admin".to_owned()));
        assert_eq!(Role::from("member"), Role::Other("member".to_owned()));
    }

    #[test]
    fn test_role_wire_format() {
        let role: Role = serde_json::from_value(json!({ "name": "admin" })).unwrap();
        assert_eq!(role, Role::Admin);

        let value = serde_json::to_value(Role::Other("editor".to_owned())).unwrap();
        assert_eq!(value, json!({ "name": "editor" }));
    }

    #[test]
    fn test_identity_missing_roles_is_absent() {
        let identity: Identity = serde_json::from_value(json!({ "name": "Sam" })).unwrap();
        assert_eq!(identity.roles, None);
        assert_eq!(identity.avatar, None);

        let identity: Identity =
            serde_json::from_value(json!({ "name": "Sam", "roles": null })).unwrap();
        assert_eq!(identity.roles, None);
    }

    #[test]
    fn test_identity_is_admin() {
        assert!(Identity::new("Root").with_roles([Role::User, Role::Admin]).is_admin());
        assert!(!Identity::new("Sam").with_roles([Role::from("member")]).is_admin());
        assert!(!Identity::new("Sam").with_roles(Vec::<Role>::new()).is_admin());
        assert!(!Identity::new("Sam").is_admin());
    }

    #[test]
    fn test_has_role() {
        let identity = Identity::new("Sam").with_roles([Role::from("editor")]);
        assert!(identity.has_role(&Role::Other("editor".to_owned())));
        assert!(!identity.has_role(&Role::User));
        assert!(!Identity::new("Sam").has_role(&Role::User));
    }
}
