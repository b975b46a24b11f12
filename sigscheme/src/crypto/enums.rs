#![allow(non_camel_case_types)]
use der::asn1::ObjectIdentifier;

use crate::msgs::{Codec, Reader};

enum_builder! {
    /// The `SignatureScheme` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    ///
    /// `NONE` is not a real scheme: it marks a scheme that has not been set.
    #[repr(u16)]
    pub enum SignatureScheme {
        /// No scheme selected.
        NONE => 0x0000,

        /// RSASSA-PKCS1-v1_5 with SHA-1.  Legacy; never offered.
        RSA_PKCS1_SHA1 => 0x0201,
        /// DSA with SHA-1.  Legacy; never offered.
        DSA_SHA1 => 0x0202,
        /// ECDSA with SHA-1.  Legacy; never offered.
        ECDSA_SHA1 => 0x0203,

        /// RSASSA-PKCS1-v1_5 with SHA-256.
        RSA_PKCS1_SHA256 => 0x0401,
        /// DSA with SHA-256.
        DSA_SHA256 => 0x0402,
        /// ECDSA on secp256r1 with SHA-256.
        ECDSA_SHA256 => 0x0403,

        /// RSASSA-PKCS1-v1_5 with SHA-384.
        RSA_PKCS1_SHA384 => 0x0501,
        /// DSA with SHA-384.
        DSA_SHA384 => 0x0502,
        /// ECDSA on secp384r1 with SHA-384.
        ECDSA_SHA384 => 0x0503,

        /// RSASSA-PKCS1-v1_5 with SHA-512.
        RSA_PKCS1_SHA512 => 0x0601,
        /// DSA with SHA-512.
        DSA_SHA512 => 0x0602,
        /// ECDSA on secp521r1 with SHA-512.
        ECDSA_SHA512 => 0x0603,

        /// RSASSA-PSS (rsaEncryption public key) with SHA-256.
        RSA_PSS_SHA256 => 0x0804,
        /// RSASSA-PSS (rsaEncryption public key) with SHA-384.
        RSA_PSS_SHA384 => 0x0805,
        /// RSASSA-PSS (rsaEncryption public key) with SHA-512.
        RSA_PSS_SHA512 => 0x0806,

        /// Ed25519.
        EDDSA_25519 => 0x0807,
        /// Ed448.
        EDDSA_448 => 0x0808,
    }
}

impl SignatureScheme {
    /// Whether this is anything other than [`SignatureScheme::NONE`].
    pub fn is_set(&self) -> bool {
        *self != Self::NONE
    }

    /// The key algorithm this scheme signs with, or `None` for unrecognised codes.
    pub fn algorithm(&self) -> Option<SignatureAlgorithm> {
        match self.canonical() {
            Self::RSA_PKCS1_SHA1
            | Self::RSA_PKCS1_SHA256
            | Self::RSA_PKCS1_SHA384
            | Self::RSA_PKCS1_SHA512
            | Self::RSA_PSS_SHA256
            | Self::RSA_PSS_SHA384
            | Self::RSA_PSS_SHA512 => Some(SignatureAlgorithm::RSA),
            Self::ECDSA_SHA1 | Self::ECDSA_SHA256 | Self::ECDSA_SHA384 | Self::ECDSA_SHA512 => {
                Some(SignatureAlgorithm::ECDSA)
            }
            Self::EDDSA_25519 => Some(SignatureAlgorithm::ED25519),
            Self::EDDSA_448 => Some(SignatureAlgorithm::ED448),
            Self::DSA_SHA1 | Self::DSA_SHA256 | Self::DSA_SHA384 | Self::DSA_SHA512 => {
                Some(SignatureAlgorithm::DSA)
            }
            _ => None,
        }
    }

    /// The elliptic curve an ECDSA scheme is bound to.
    ///
    /// `ECDSA_SHA1` predates the binding of curves to schemes, so has none.
    pub fn named_curve(&self) -> Option<NamedGroup> {
        match self.canonical() {
            Self::ECDSA_SHA256 => Some(NamedGroup::secp256r1),
            Self::ECDSA_SHA384 => Some(NamedGroup::secp384r1),
            Self::ECDSA_SHA512 => Some(NamedGroup::secp521r1),
            _ => None,
        }
    }

    pub(crate) fn is_rsa_pkcs1(&self) -> bool {
        matches!(
            self.canonical(),
            Self::RSA_PKCS1_SHA1
                | Self::RSA_PKCS1_SHA256
                | Self::RSA_PKCS1_SHA384
                | Self::RSA_PKCS1_SHA512
        )
    }

    pub(crate) fn is_ecdsa(&self) -> bool {
        self.algorithm() == Some(SignatureAlgorithm::ECDSA)
    }
}

impl Default for SignatureScheme {
    fn default() -> Self {
        Self::NONE
    }
}

enum_builder! {
    /// The `SignatureAlgorithm` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum SignatureAlgorithm {
        /// No signature.
        Anonymous => 0x00,
        /// RSA, with either padding.
        RSA => 0x01,
        /// DSA.
        DSA => 0x02,
        /// ECDSA.
        ECDSA => 0x03,
        /// Ed25519.
        ED25519 => 0x07,
        /// Ed448.
        ED448 => 0x08,
    }
}

impl SignatureAlgorithm {
    /// The name of the key algorithm family, as reported by a private key.
    pub fn family_name(&self) -> &'static str {
        match self.canonical() {
            Self::RSA => "RSA",
            Self::DSA => "DSA",
            Self::ECDSA => "ECDSA",
            Self::ED25519 => "Ed25519",
            Self::ED448 => "Ed448",
            _ => "Unknown algorithm",
        }
    }
}

enum_builder! {
    /// The `NamedGroup` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    ///
    /// Only the groups that signature schemes refer to are named here.
    #[repr(u16)]
    pub enum NamedGroup {
        /// NIST P-256.
        secp256r1 => 0x0017,
        /// NIST P-384.
        secp384r1 => 0x0018,
        /// NIST P-521.
        secp521r1 => 0x0019,
        /// Curve25519 (key exchange only).
        X25519 => 0x001d,
        /// Curve448 (key exchange only).
        X448 => 0x001e,
    }
}

impl NamedGroup {
    /// The ASN.1 object identifier naming this curve in certificates.
    ///
    /// See RFC5480 section 2.1.1.1.  `X25519` and `X448` are not
    /// named curves in that sense, so have none.
    pub fn curve_oid(&self) -> Option<ObjectIdentifier> {
        match self.canonical() {
            Self::secp256r1 => Some(SECP256R1),
            Self::secp384r1 => Some(SECP384R1),
            Self::secp521r1 => Some(SECP521R1),
            _ => None,
        }
    }
}

const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
const SECP521R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");
