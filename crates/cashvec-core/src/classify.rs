//! Private-key heuristic.

/// What a record's token looks like. Recomputed on every visit, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A WIF private key; left untouched by the engine.
    PrivateKey,
    /// Anything else, handed to the transcoder. The transcoder's own
    /// rejection handles tokens that turn out not to be addresses.
    AddressCandidate,
}

/// Classify a token by length alone. WIF private keys are exactly 51
/// (uncompressed) or 52 (compressed) characters; this is a discriminator,
/// not a validator.
pub fn classify(token: &str) -> Classification {
    match token.len() {
        51 | 52 => Classification::PrivateKey,
        _ => Classification::AddressCandidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wif_lengths_are_private_keys() {
        assert_eq!(classify(&"5".repeat(51)), Classification::PrivateKey);
        assert_eq!(classify(&"L".repeat(52)), Classification::PrivateKey);
    }

    #[test]
    fn boundary_lengths_are_candidates() {
        assert_eq!(classify(&"a".repeat(50)), Classification::AddressCandidate);
        assert_eq!(classify(&"a".repeat(53)), Classification::AddressCandidate);
    }

    #[test]
    fn typical_addresses_are_candidates() {
        assert_eq!(
            classify("1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu"),
            Classification::AddressCandidate
        );
        assert_eq!(
            classify("3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC"),
            Classification::AddressCandidate
        );
    }

    #[test]
    fn empty_token_is_a_candidate() {
        // Intentional: the empty string flows to the transcoder and fails
        // there, surfacing as a per-record warning instead of a skip.
        assert_eq!(classify(""), Classification::AddressCandidate);
    }
}
