//! Random value drawing.
//!
//! Every function here is synchronous and creates its thread-local RNG internally, so no
//! RNG handle is ever held across an `.await`.

use rand::Rng;
use sha2::{Digest, Sha256};

const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const HEX_CHARSET: &[u8] = b"0123456789ABCDEF";

/// Length of academic year and session identifiers.
pub const SHORT_ID_LEN: usize = 8;
/// Length of user and business identifiers.
pub const LONG_ID_LEN: usize = 10;

/// Draws an identifier of `len` characters from `[A-Z0-9]`.
pub fn random_id(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| ID_CHARSET[rng.random_range(0..ID_CHARSET.len())] as char)
        .collect()
}

/// Draws a color in `#RRGGBB` form with uppercase hex digits.
pub fn random_color() -> String {
    let mut rng = rand::rng();

    let digits: String = (0..6)
        .map(|_| HEX_CHARSET[rng.random_range(0..HEX_CHARSET.len())] as char)
        .collect();

    format!("#{}", digits)
}

/// Draws a 5-digit numeric one-time password in `10000..=99999`.
pub fn random_otp() -> String {
    rand::rng().random_range(10000..100000u32).to_string()
}

/// Draws 32 random bytes and returns them hex encoded.
pub fn random_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);

    hex::encode(bytes)
}

/// SHA-256 digest of `value`, hex encoded. Used to store reset tokens.
pub fn sha256_hex(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}
