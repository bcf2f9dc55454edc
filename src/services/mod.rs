//! Services module for sinvoice-mock.

pub mod credentials;

pub use credentials::{Credential, CredentialStore, Role};
