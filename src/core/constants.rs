/*!
Constants for the PQC adapter.

Candidate identifiers, derived-key sizes and the length-query sentinel.
*/

/// Length of the session key handed to callers
pub const SESSION_KEY_LEN: usize = 16;

/// Length of the SHA-256 digest the session key is cut from
pub const DIGEST_LEN: usize = 32;

/// Returned by length queries when no algorithm can be resolved
pub const LENGTH_SENTINEL: i32 = -1;

/// Candidate identifiers, preferred name first
pub mod candidates {
    /// KEM at the 512 security tier
    pub const KEM: &[&str] = &["ML-KEM-512", "Kyber512", "Kyber-512"];

    /// Signature scheme at the matching strength tier
    pub const SIGNATURE: &[&str] = &["ML-DSA-44", "Dilithium2", "Dilithium-2"];

    /// Round-3 KEM names only
    pub const LEGACY_KEM: &[&str] = &["Kyber512", "Kyber-512"];

    /// Round-3 signature names only
    pub const LEGACY_SIGNATURE: &[&str] = &["Dilithium2", "Dilithium-2"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_fits_digest() {
        assert!(SESSION_KEY_LEN <= DIGEST_LEN);
        assert_eq!(LENGTH_SENTINEL, -1);
    }

    #[test]
    fn test_legacy_lists_are_fallback_tails() {
        assert_eq!(&candidates::KEM[1..], candidates::LEGACY_KEM);
        assert_eq!(&candidates::SIGNATURE[1..], candidates::LEGACY_SIGNATURE);
    }
}
