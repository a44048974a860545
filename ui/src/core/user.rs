//! Signed-in user as the navbar sees it, with total fallbacks for missing fields.

use api::SessionUser;

/// Initial shown when the user has no usable name.
pub const FALLBACK_INITIAL: char = 'U';

/// Name shown when the user has no usable name.
pub const FALLBACK_NAME: &str = "User";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_photo: Option<String>,
}

impl CurrentUser {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl From<SessionUser> for CurrentUser {
    fn from(user: SessionUser) -> Self {
        Self {
            name: user.name,
            email: user.email,
            profile_photo: user.profile_photo,
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// First character of the name, uppercased. `'U'` when there is no name.
pub fn display_initial(user: Option<&CurrentUser>) -> char {
    user.and_then(|u| non_blank(u.name.as_ref()))
        .and_then(|name| name.chars().next())
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(FALLBACK_INITIAL)
}

/// Profile photo URL, if the user has one.
pub fn display_photo(user: Option<&CurrentUser>) -> Option<&str> {
    user.and_then(|u| non_blank(u.profile_photo.as_ref()))
}

pub fn display_name(user: Option<&CurrentUser>) -> &str {
    user.and_then(|u| non_blank(u.name.as_ref()))
        .unwrap_or(FALLBACK_NAME)
}

pub fn display_email(user: Option<&CurrentUser>) -> &str {
    user.and_then(|u| non_blank(u.email.as_ref())).unwrap_or("")
}
