//! In-memory credential store backing the Basic auth gate.
//!
//! Exactly two accounts exist, seeded once at startup with argon2-hashed
//! passwords. The store is immutable for the lifetime of the process.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};

use crate::error::AppError;

/// Account role. Seeded for fidelity with the upstream service; no route
/// currently differentiates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    password_hash: String,
    pub role: Role,
}

/// Fixed two-account store, read-only after seeding and safe to share
/// across workers without locking.
#[derive(Debug)]
pub struct CredentialStore {
    accounts: Vec<Credential>,
}

impl CredentialStore {
    /// Seeds the two well-known mock accounts, hashing their passwords.
    pub fn seeded() -> Result<Self, AppError> {
        Ok(Self {
            accounts: vec![
                Credential {
                    username: "admin".to_string(),
                    password_hash: hash_password("admin123")?,
                    role: Role::Admin,
                },
                Credential {
                    username: "user".to_string(),
                    password_hash: hash_password("user123")?,
                    role: Role::User,
                },
            ],
        })
    }

    /// Verifies a username/password pair. Usernames are case-sensitive.
    pub fn verify(&self, username: &str, password: &str) -> Option<&Credential> {
        let credential = self.accounts.iter().find(|c| c.username == username)?;
        let parsed = PasswordHash::new(&credential.password_hash).ok()?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .ok()?;
        Some(credential)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Hash a password using argon2.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("password hashing failed: {e}")))
}
