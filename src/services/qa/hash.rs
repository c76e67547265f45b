use sha2::{Digest, Sha256};

use super::normalize::normalize;

/// Hex SHA-256 of the normalized phrase. Phrases differing only in case,
/// spacing or quoting share a fingerprint.
pub fn fingerprint(text: &str) -> String {
    hex::encode(Sha256::digest(normalize(text).as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::fingerprint;

    #[test]
    fn equal_after_normalization() {
        assert_eq!(fingerprint("Good  Luck"), fingerprint("“good luck”"));
        assert_ne!(fingerprint("good luck"), fingerprint("bad luck"));
        assert_eq!(fingerprint("").len(), 64);
    }
}
