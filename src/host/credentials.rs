//! Credential store interface.
//!
//! Credentials are persisted and managed by the embedding environment; the
//! core only looks them up. They are currently consulted but never injected
//! into the external tool's command line (see the command builder).

/// A user/password pair from the external store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    /// Contains sensitive data - never log
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"****")
            .finish()
    }
}

/// Lookup into the environment's credential store.
pub trait CredentialStore {
    /// Stored credentials for a data source, if any.
    fn credentials_for(&self, data_source_id: &str) -> Option<Credentials>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_password() {
        let creds = Credentials {
            user: "sa".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("****"));
    }
}
