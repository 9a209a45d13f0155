//! In-memory session context owned by the auth service.

use crate::core::auth::{AuthResponse, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// A session counts as authenticated once a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn establish(&mut self, response: AuthResponse) {
        self.user = Some(response.user);
        self.token = Some(response.token);
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
