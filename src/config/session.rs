use serde::Deserialize;

/// Session cookie token for the puzzle site.
#[derive(Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.token.trim().is_empty()
    }

    pub fn cookie(&self) -> String {
        format!("session={}", self.token.trim())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Session(<redacted>)")
    }
}
