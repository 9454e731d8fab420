use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a token. Revocation entries are keyed by digest so
/// raw session tokens are never kept in memory longer than a request.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_consistency() {
        assert_eq!(hash_token("session_1"), hash_token("session_1"));
    }

    #[test]
    fn test_hash_token_different_inputs() {
        assert_ne!(hash_token("session_1"), hash_token("session_2"));
    }

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let hash = hash_token("any_token");

        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
