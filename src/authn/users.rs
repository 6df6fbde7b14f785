//! User store
//!
//! Demo users held in memory; passwords stored as SHA-256 digests. A real
//! deployment would back this with a database and a salted KDF.

use std::collections::HashMap;

use crate::utils::sha256_hex;

/// In-memory user table keyed by username
pub struct UserStore {
    /// username -> sha256(password) hex digest
    users: HashMap<String, String>,
}

impl UserStore {
    /// Demo users: admin/admin123, technician/tech456, researcher/research789
    pub fn with_demo_users() -> Self {
        let mut users = HashMap::new();
        users.insert(
            "admin".to_string(),
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9".to_string(),
        );
        users.insert(
            "technician".to_string(),
            "b1c0c2283e8eb80a2f9a740c2210ceeb980fa0ad8541b16bee705a1c9b3c606b".to_string(),
        );
        users.insert(
            "researcher".to_string(),
            "007318e704a1327a770b24f560c563efe2066a828f577d15fbe53552109659d6".to_string(),
        );
        Self { users }
    }

    /// Check a username/password pair
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(digest) => *digest == sha256_hex(password.as_bytes()),
            None => false,
        }
    }
}
