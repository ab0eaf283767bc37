use sha2::{Digest, Sha256};

/// SHA-256 of the raw corpus bytes, hex encoded.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Leading part of a fingerprint for display.
pub fn short_fingerprint(fingerprint: &str) -> &str {
    let end = fingerprint.len().min(crate::consts::FINGERPRINT_DISPLAY_LEN);
    &fingerprint[..end]
}
