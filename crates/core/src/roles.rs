//! Dashboard roles and the access rules built on them.
//!
//! Role names must match the `CHECK` constraint on `user_profiles.role`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_BLOG_AUTHOR: &str = "blog_author";
pub const ROLE_USER: &str = "user";

/// A dashboard role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    BlogAuthor,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::BlogAuthor => ROLE_BLOG_AUTHOR,
            Role::User => ROLE_USER,
        }
    }

    /// Parse a stored role name.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_BLOG_AUTHOR => Ok(Role::BlogAuthor),
            ROLE_USER => Ok(Role::User),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {ROLE_ADMIN}, {ROLE_BLOG_AUTHOR}, {ROLE_USER}"
            ))),
        }
    }

    /// The role a user acts with.
    ///
    /// Superusers are always admins. Everyone else takes their profile role,
    /// and a user without a profile is a plain `user`.
    pub fn effective(is_superuser: bool, profile_role: Option<&str>) -> Self {
        if is_superuser {
            return Role::Admin;
        }
        profile_role
            .and_then(|r| Role::parse(r).ok())
            .unwrap_or(Role::User)
    }

    /// Services, heroes, projects, metadata, settings and users.
    pub fn can_manage_site(self) -> bool {
        self == Role::Admin
    }

    /// Insights and the gallery.
    pub fn can_author(self) -> bool {
        matches!(self, Role::Admin | Role::BlogAuthor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superuser_is_admin_regardless_of_profile() {
        assert_eq!(Role::effective(true, None), Role::Admin);
        assert_eq!(Role::effective(true, Some("user")), Role::Admin);
    }

    #[test]
    fn missing_profile_is_plain_user() {
        assert_eq!(Role::effective(false, None), Role::User);
    }

    #[test]
    fn profile_role_is_used() {
        assert_eq!(Role::effective(false, Some("blog_author")), Role::BlogAuthor);
        assert_eq!(Role::effective(false, Some("admin")), Role::Admin);
    }

    #[test]
    fn unknown_profile_role_falls_back_to_user() {
        assert_eq!(Role::effective(false, Some("editor")), Role::User);
    }

    #[test]
    fn access_rules() {
        assert!(Role::Admin.can_manage_site());
        assert!(Role::Admin.can_author());
        assert!(!Role::BlogAuthor.can_manage_site());
        assert!(Role::BlogAuthor.can_author());
        assert!(!Role::User.can_author());
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(Role::parse("root").is_err());
        assert_eq!(Role::parse("blog_author").unwrap(), Role::BlogAuthor);
    }
}
