use tracing::warn;

use crate::config::{TOKEN_KEY, USER_NAME_KEY};

/// Who is logged in. Read from local storage once at startup, written on
/// login and wiped on logout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    pub fn new(token: String, user_name: Option<String>) -> Self {
        Self::from_parts(Some(token), user_name)
    }

    /// Blank values are treated as absent.
    pub fn from_parts(token: Option<String>, user_name: Option<String>) -> Self {
        let clean = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            token: clean(token),
            user_name: clean(user_name),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// First word of the display name, for the dashboard greeting.
    pub fn first_name(&self) -> &str {
        self.user_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("Caminhoneiro")
    }

    pub fn load() -> Self {
        let Some(storage) = local_storage() else {
            return Self::default();
        };
        let read = |key: &str| storage.get_item(key).ok().flatten();
        Self::from_parts(read(TOKEN_KEY), read(USER_NAME_KEY))
    }

    pub fn persist(&self) {
        let Some(storage) = local_storage() else {
            warn!("local storage unavailable, session kept in memory only");
            return;
        };
        if let Some(token) = &self.token {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        match &self.user_name {
            Some(name) => {
                let _ = storage.set_item(USER_NAME_KEY, name);
            }
            None => {
                let _ = storage.remove_item(USER_NAME_KEY);
            }
        }
    }

    pub fn clear_storage() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_NAME_KEY);
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_not_a_session() {
        let session = Session::from_parts(Some("  ".into()), Some("Ana".into()));
        assert!(!session.is_authenticated());
        assert!(Session::new("abc".into(), None).is_authenticated());
    }

    #[test]
    fn greeting_uses_first_name_or_fallback() {
        let session = Session::new("t".into(), Some("Marco Antônio Silva".into()));
        assert_eq!(session.first_name(), "Marco");
        assert_eq!(Session::new("t".into(), None).first_name(), "Caminhoneiro");
        assert_eq!(Session::new("t".into(), Some("   ".into())).first_name(), "Caminhoneiro");
    }
}
