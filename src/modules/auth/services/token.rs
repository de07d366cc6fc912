use crate::modules::users::models::User;

/// Access token handed back on login or registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in_seconds: u64,
}

/// Mints access tokens; verification is left to whoever consumes them
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> IssuedToken;
}

/// Random UUID-based bearer tokens with a fixed lifetime
#[derive(Debug, Clone)]
pub struct OpaqueTokenIssuer {
    ttl_seconds: u64,
}

impl OpaqueTokenIssuer {
    pub fn new(ttl_seconds: u64) -> Self {
        Self { ttl_seconds }
    }
}

impl TokenIssuer for OpaqueTokenIssuer {
    fn issue(&self, _user: &User) -> IssuedToken {
        IssuedToken {
            access_token: uuid::Uuid::new_v4().simple().to_string(),
            expires_in_seconds: self.ttl_seconds,
        }
    }
}
