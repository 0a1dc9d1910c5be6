use rand::RngExt;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn generate_salt() -> String {
    let mut rng = rand::rng();
    (0..SALT_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Stored form: `salt$hexdigest`.
pub fn hash_password(password: &str) -> String {
    let salt = generate_salt();
    let hex = digest(&salt, password);
    format!("{salt}${hex}")
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };
    constant_time_eq(digest(salt, password).as_bytes(), expected.as_bytes())
}

/// Runtime depends only on the length, never on where the inputs differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
