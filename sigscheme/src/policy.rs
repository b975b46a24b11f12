use crate::crypto::SignatureScheme;
use crate::enums::ProtocolVersion;
use crate::sign::SigningKey;

/// Keys at or below this many bits are never suitable, for any scheme.
const MIN_KEY_LENGTH: usize = 250;

impl SignatureScheme {
    /// Whether this scheme may be used for handshake signatures in `version`.
    ///
    /// RFC8446 s4.4.3 forbids SHA-1 in CertificateVerify signatures; we apply
    /// that to every protocol version, not just TLS1.3.  It also requires
    /// RSA-PSS for RSA signatures, so RSA-PKCS1 is only allowed before TLS1.3.
    pub fn is_compatible_with(&self, version: ProtocolVersion) -> bool {
        if self.hash_function_name() == "SHA-1" {
            trace!("{self:?} is never compatible: SHA-1");
            return false;
        }

        if !version.is_pre_tls13() && self.is_rsa_pkcs1() {
            trace!("{self:?} is not compatible with {version:?}: RSA-PKCS1");
            return false;
        }

        true
    }

    /// Whether this scheme can be used to sign with `key`.
    ///
    /// The key must be of this scheme's algorithm family and longer than
    /// 250 bits.  For ECDSA the key length must also sit in the band for the
    /// scheme's hash: 250..=350 bits for SHA-256, 350..=450 for SHA-384 and
    /// 450..=550 for SHA-512.  This matches P-256, P-384 and P-521 keys
    /// without knowing which curve the key is actually on.
    pub fn is_suitable_for<K: SigningKey + ?Sized>(&self, key: &K) -> bool {
        if self.algorithm_name() != key.algorithm_name() {
            trace!(
                "{self:?} is not suitable for a {} key",
                key.algorithm_name()
            );
            return false;
        }

        let key_length = key.key_length();
        if key_length <= MIN_KEY_LENGTH {
            trace!("{self:?} is not suitable for a {key_length}-bit key: too short");
            return false;
        }

        if self.is_ecdsa() {
            let band = match self.hash_function_name() {
                "SHA-256" => 250..=350,
                "SHA-384" => 350..=450,
                "SHA-512" => 450..=550,
                // ECDSA_SHA1 has no band.
                _ => return true,
            };

            if !band.contains(&key_length) {
                trace!("{self:?} is not suitable for a {key_length}-bit ECDSA key");
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Key(&'static str, usize);

    impl SigningKey for Key {
        fn algorithm_name(&self) -> &str {
            self.0
        }

        fn key_length(&self) -> usize {
            self.1
        }
    }

    #[test]
    fn sha1_is_banned_everywhere() {
        for scheme in [
            SignatureScheme::RSA_PKCS1_SHA1,
            SignatureScheme::ECDSA_SHA1,
            SignatureScheme::DSA_SHA1,
        ] {
            for version in [
                ProtocolVersion::TLSv1_0,
                ProtocolVersion::TLSv1_2,
                ProtocolVersion::TLSv1_3,
                ProtocolVersion::DTLSv1_2,
                ProtocolVersion::DTLSv1_3,
            ] {
                assert!(!scheme.is_compatible_with(version), "{scheme:?} {version:?}");
            }
        }
    }

    #[test]
    fn pkcs1_only_before_tls13() {
        for scheme in [
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
        ] {
            assert!(scheme.is_compatible_with(ProtocolVersion::TLSv1_2));
            assert!(scheme.is_compatible_with(ProtocolVersion::DTLSv1_2));
            assert!(!scheme.is_compatible_with(ProtocolVersion::TLSv1_3));
            assert!(!scheme.is_compatible_with(ProtocolVersion::DTLSv1_3));
        }
    }

    #[test]
    fn pss_always_allowed() {
        for scheme in [
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
        ] {
            assert!(scheme.is_compatible_with(ProtocolVersion::TLSv1_2));
            assert!(scheme.is_compatible_with(ProtocolVersion::TLSv1_3));
        }
    }

    #[test]
    fn other_schemes_are_not_version_gated() {
        assert!(SignatureScheme::ECDSA_SHA256.is_compatible_with(ProtocolVersion::TLSv1_3));
        assert!(SignatureScheme::EDDSA_25519.is_compatible_with(ProtocolVersion::TLSv1_3));
        assert!(SignatureScheme::DSA_SHA256.is_compatible_with(ProtocolVersion::TLSv1_3));
        assert!(SignatureScheme::Unknown(0x0809).is_compatible_with(ProtocolVersion::TLSv1_3));
    }

    #[test]
    fn pkcs1_check_uses_the_code() {
        let scheme = SignatureScheme::Unknown(0x0401);
        assert!(!scheme.is_compatible_with(ProtocolVersion::TLSv1_3));
    }

    #[test]
    fn algorithm_must_match() {
        let rsa = Key("RSA", 2048);
        assert!(SignatureScheme::RSA_PSS_SHA256.is_suitable_for(&rsa));
        assert!(SignatureScheme::RSA_PKCS1_SHA512.is_suitable_for(&rsa));
        assert!(!SignatureScheme::ECDSA_SHA256.is_suitable_for(&rsa));
        assert!(!SignatureScheme::Unknown(0x0809).is_suitable_for(&rsa));
        assert!(!SignatureScheme::RSA_PSS_SHA256.is_suitable_for(&Key("rsa", 2048)));
    }

    #[test]
    fn minimum_length_applies_to_all_schemes() {
        assert!(!SignatureScheme::RSA_PSS_SHA256.is_suitable_for(&Key("RSA", 250)));
        assert!(SignatureScheme::RSA_PSS_SHA256.is_suitable_for(&Key("RSA", 251)));
        assert!(!SignatureScheme::EDDSA_25519.is_suitable_for(&Key("Ed25519", 250)));
        assert!(SignatureScheme::EDDSA_448.is_suitable_for(&Key("Ed448", 448)));
        assert!(SignatureScheme::DSA_SHA256.is_suitable_for(&Key("DSA", 2048)));
    }

    #[test]
    fn ecdsa_sha256_band() {
        let scheme = SignatureScheme::ECDSA_SHA256;
        assert!(!scheme.is_suitable_for(&Key("ECDSA", 250)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 251)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 256)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 350)));
        assert!(!scheme.is_suitable_for(&Key("ECDSA", 351)));
    }

    #[test]
    fn ecdsa_sha384_band() {
        let scheme = SignatureScheme::ECDSA_SHA384;
        assert!(!scheme.is_suitable_for(&Key("ECDSA", 349)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 350)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 384)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 450)));
        assert!(!scheme.is_suitable_for(&Key("ECDSA", 451)));
    }

    #[test]
    fn ecdsa_sha512_band() {
        let scheme = SignatureScheme::ECDSA_SHA512;
        assert!(!scheme.is_suitable_for(&Key("ECDSA", 449)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 450)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 521)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 550)));
        assert!(!scheme.is_suitable_for(&Key("ECDSA", 551)));
    }

    #[test]
    fn ecdsa_sha1_has_only_the_floor() {
        let scheme = SignatureScheme::ECDSA_SHA1;
        assert!(!scheme.is_suitable_for(&Key("ECDSA", 250)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 256)));
        assert!(scheme.is_suitable_for(&Key("ECDSA", 1024)));
    }

    #[test]
    fn works_through_trait_objects() {
        let key: &dyn SigningKey = &Key("ECDSA", 384);
        assert!(SignatureScheme::ECDSA_SHA384.is_suitable_for(key));
    }
}
