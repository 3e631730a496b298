//! Access credentials issued by the platform

/// An application- or tenant-level access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Bearer value sent in the `Authorization` header
    pub token: String,
    /// Lifetime in seconds as reported by the platform
    pub expires_in: u64,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expires_in: u64) -> Self {
        AccessToken {
            token: token.into(),
            expires_in,
        }
    }
}

/// A user-level access token with its refresh token
///
/// Refresh tokens rotate: the platform invalidates the old one as soon as it
/// is exchanged, so a `UserToken` obtained from a refresh fully replaces the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserToken {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of `access_token` in seconds
    pub expires_in: u64,
    /// Lifetime of `refresh_token` in seconds
    pub refresh_expires_in: u64,
}

impl UserToken {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        UserToken {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_in: 0,
            refresh_expires_in: 0,
        }
    }

    /// Set the token lifetimes
    pub fn with_expiry(mut self, expires_in: u64, refresh_expires_in: u64) -> Self {
        self.expires_in = expires_in;
        self.refresh_expires_in = refresh_expires_in;
        self
    }
}
