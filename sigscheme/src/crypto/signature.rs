use core::fmt;

use super::SignatureScheme;
use crate::x509::{self, AlgorithmIdentifier, AlgorithmParameters};

/// How a signature value is serialized on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureFormat {
    /// Fixed-length big-endian integers, concatenated (IEEE 1363).
    ///
    /// Used by RSA, whose signature is a single integer the size of the modulus.
    Ieee1363,
    /// A DER `SEQUENCE` of integers, as used by ECDSA and DSA.
    ///
    /// EdDSA signatures are also reported in this format.
    DerSequence,
}

impl SignatureScheme {
    /// The ordered list of schemes we offer and accept, most preferred first.
    ///
    /// See [`crate::ALL_AVAILABLE_SCHEMES`].
    pub fn all_available_schemes() -> &'static [Self] {
        crate::registry::ALL_AVAILABLE_SCHEMES
    }

    /// Whether this scheme is one we offer and accept.
    pub fn is_available(&self) -> bool {
        crate::registry::ALL_AVAILABLE_SCHEMES.contains(self)
    }

    /// The name of the digest applied before signing.
    ///
    /// EdDSA hashes internally, and reports `"Pure"`.
    pub fn hash_function_name(&self) -> &'static str {
        match self.canonical() {
            Self::RSA_PKCS1_SHA1 | Self::ECDSA_SHA1 | Self::DSA_SHA1 => "SHA-1",

            Self::RSA_PKCS1_SHA256
            | Self::ECDSA_SHA256
            | Self::RSA_PSS_SHA256
            | Self::DSA_SHA256 => "SHA-256",

            Self::RSA_PKCS1_SHA384
            | Self::ECDSA_SHA384
            | Self::RSA_PSS_SHA384
            | Self::DSA_SHA384 => "SHA-384",

            Self::RSA_PKCS1_SHA512
            | Self::ECDSA_SHA512
            | Self::RSA_PSS_SHA512
            | Self::DSA_SHA512 => "SHA-512",

            Self::EDDSA_25519 | Self::EDDSA_448 => "Pure",

            _ => "Unknown hash function",
        }
    }

    /// The padding or encoding applied to the digest before signing.
    ///
    /// RSA-PSS uses MGF1 with the salt length equal to the digest length.
    /// DSA schemes have no padding descriptor.
    pub fn padding_string(&self) -> &'static str {
        match self.canonical() {
            Self::RSA_PKCS1_SHA1 => "EMSA_PKCS1(SHA-1)",
            Self::RSA_PKCS1_SHA256 => "EMSA_PKCS1(SHA-256)",
            Self::RSA_PKCS1_SHA384 => "EMSA_PKCS1(SHA-384)",
            Self::RSA_PKCS1_SHA512 => "EMSA_PKCS1(SHA-512)",

            Self::ECDSA_SHA1 => "EMSA1(SHA-1)",
            Self::ECDSA_SHA256 => "EMSA1(SHA-256)",
            Self::ECDSA_SHA384 => "EMSA1(SHA-384)",
            Self::ECDSA_SHA512 => "EMSA1(SHA-512)",

            Self::RSA_PSS_SHA256 => "PSSR(SHA-256,MGF1,32)",
            Self::RSA_PSS_SHA384 => "PSSR(SHA-384,MGF1,48)",
            Self::RSA_PSS_SHA512 => "PSSR(SHA-512,MGF1,64)",

            Self::EDDSA_25519 | Self::EDDSA_448 => "Pure",

            _ => "Unknown padding",
        }
    }

    /// The key algorithm family, matching the name a private key reports.
    pub fn algorithm_name(&self) -> &'static str {
        match self.algorithm() {
            Some(alg) => alg.family_name(),
            None => "Unknown algorithm",
        }
    }

    /// The certificate public key algorithm for this scheme.
    ///
    /// This is coarser than the scheme itself: RSA-PSS and RSA-PKCS1 share
    /// the one `rsaEncryption` identifier.  Schemes with no defined mapping
    /// (including `ECDSA_SHA1`, Ed448 and DSA) give
    /// [`AlgorithmIdentifier::empty()`].
    pub fn algorithm_identifier(&self) -> AlgorithmIdentifier {
        match self.canonical() {
            Self::ECDSA_SHA256 | Self::ECDSA_SHA384 | Self::ECDSA_SHA512 => {
                match self
                    .named_curve()
                    .and_then(x509::named_curve_der)
                {
                    Some(der) => AlgorithmIdentifier::new("ECDSA", AlgorithmParameters::Der(der)),
                    None => AlgorithmIdentifier::empty(),
                }
            }

            Self::EDDSA_25519 => AlgorithmIdentifier::new("Ed25519", AlgorithmParameters::Empty),

            Self::RSA_PKCS1_SHA1
            | Self::RSA_PKCS1_SHA256
            | Self::RSA_PKCS1_SHA384
            | Self::RSA_PKCS1_SHA512
            | Self::RSA_PSS_SHA256
            | Self::RSA_PSS_SHA384
            | Self::RSA_PSS_SHA512 => AlgorithmIdentifier::new("RSA", AlgorithmParameters::Null),

            _ => AlgorithmIdentifier::empty(),
        }
    }

    /// How signatures made with this scheme are serialized.
    pub fn format(&self) -> Option<SignatureFormat> {
        match self.canonical() {
            Self::RSA_PKCS1_SHA1
            | Self::RSA_PKCS1_SHA256
            | Self::RSA_PKCS1_SHA384
            | Self::RSA_PKCS1_SHA512
            | Self::RSA_PSS_SHA256
            | Self::RSA_PSS_SHA384
            | Self::RSA_PSS_SHA512 => Some(SignatureFormat::Ieee1363),

            Self::ECDSA_SHA1
            | Self::ECDSA_SHA256
            | Self::ECDSA_SHA384
            | Self::ECDSA_SHA512
            | Self::EDDSA_25519
            | Self::EDDSA_448
            | Self::DSA_SHA1
            | Self::DSA_SHA256
            | Self::DSA_SHA384
            | Self::DSA_SHA512 => Some(SignatureFormat::DerSequence),

            _ => None,
        }
    }
}

/// The canonical scheme name, eg. `RSA_PSS_SHA256`.
///
/// Codes we don't recognise (and `NONE`) are written as
/// `Unknown signature scheme: <code>`, with the code in decimal.
impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) if self.is_set() => f.write_str(name),
            _ => write!(f, "Unknown signature scheme: {}", u16::from(*self)),
        }
    }
}
