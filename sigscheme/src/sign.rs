use core::fmt::Debug;

use crate::crypto::SignatureScheme;
use crate::enums::ProtocolVersion;
use crate::registry::ALL_AVAILABLE_SCHEMES;

/// What the scheme selection rules need to know about a private key.
///
/// This crate never signs anything, so this is only a description of the
/// key: an implementation would typically sit alongside whatever actually
/// holds the key material.
pub trait SigningKey: Debug + Send + Sync {
    /// The name of the key algorithm family.
    ///
    /// This is compared against [`SignatureScheme::algorithm_name()`], so
    /// should be one of `"RSA"`, `"ECDSA"`, `"Ed25519"`, `"Ed448"` or `"DSA"`.
    fn algorithm_name(&self) -> &str;

    /// The key length in bits: the modulus size for RSA and DSA, the curve
    /// order size for ECDSA and EdDSA.
    fn key_length(&self) -> usize;

    /// Choose a `SignatureScheme` from those offered by the peer.
    ///
    /// This returns the first of [`ALL_AVAILABLE_SCHEMES`] (so, in our
    /// order of preference, not the peer's) which appears in `offered`, is
    /// allowed in `version`, and can be used with this key.
    fn choose_scheme(
        &self,
        offered: &[SignatureScheme],
        version: ProtocolVersion,
    ) -> Option<SignatureScheme> {
        let chosen = ALL_AVAILABLE_SCHEMES
            .iter()
            .copied()
            .filter(|scheme| offered.contains(scheme))
            .find(|scheme| scheme.is_compatible_with(version) && scheme.is_suitable_for(self));

        match chosen {
            Some(scheme) => debug!("chose {scheme:?} for {version:?}"),
            None => trace!("no usable scheme among {offered:?} for {version:?}"),
        }

        chosen
    }
}
