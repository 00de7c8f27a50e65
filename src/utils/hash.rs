use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Hex-encoded HMAC-SHA256 of `payload` keyed by `secret`.
#[must_use]
pub fn compute_hmac(secret: &[u8], payload: &[u8]) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(payload);
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time tag comparison. Tags of different length never match.
#[must_use]
pub fn tags_match(expected: &str, actual: &str) -> bool {
    expected.len() == actual.len() && bool::from(expected.as_bytes().ct_eq(actual.as_bytes()))
}
