use serde::{Deserialize, Serialize};

/// Logged-in session as kept in the browser under [`SESSION_KEY`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    pub token: String,
}

pub const SESSION_KEY: &str = "userInfo";

impl UserInfo {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Parses a stored session. Corrupt entries are treated as logged out.
pub fn parse_session(raw: Option<&str>) -> Option<UserInfo> {
    raw.and_then(|s| serde_json::from_str(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_session() {
        let raw = r#"{"id": 1, "name": "Ann", "email": "ann@example.com", "isAdmin": false, "token": "t0k"}"#;
        let user = parse_session(Some(raw)).unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.bearer(), "Bearer t0k");
    }

    #[test]
    fn missing_or_corrupt_session_is_logged_out() {
        assert!(parse_session(None).is_none());
        assert!(parse_session(Some("{not json")).is_none());
    }
}
