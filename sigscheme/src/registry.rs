use crate::crypto::SignatureScheme;
use crate::enums::ProtocolVersion;

/// The signature schemes we offer and accept, most preferred first.
///
/// RSA-PSS comes before RSA-PKCS1, which comes before ECDSA.  The SHA-1
/// schemes and EdDSA are classified by this crate but deliberately absent
/// here: SHA-1 is unusable, and EdDSA is not yet supported for certificate
/// authentication.
///
/// This is a constant; it is never modified at runtime.
pub static ALL_AVAILABLE_SCHEMES: &[SignatureScheme] = &[
    SignatureScheme::RSA_PSS_SHA384,
    SignatureScheme::RSA_PSS_SHA256,
    SignatureScheme::RSA_PSS_SHA512,
    SignatureScheme::RSA_PKCS1_SHA384,
    SignatureScheme::RSA_PKCS1_SHA512,
    SignatureScheme::RSA_PKCS1_SHA256,
    SignatureScheme::ECDSA_SHA384,
    SignatureScheme::ECDSA_SHA512,
    SignatureScheme::ECDSA_SHA256,
];

/// The members of [`ALL_AVAILABLE_SCHEMES`] usable with `version`, in preference order.
pub fn schemes_for_version(
    version: ProtocolVersion,
) -> impl Iterator<Item = SignatureScheme> + Clone {
    ALL_AVAILABLE_SCHEMES
        .iter()
        .copied()
        .filter(move |scheme| scheme.is_compatible_with(version))
}
