// Certificate-side algorithm identifiers, and their DER encoding.

use alloc::vec::Vec;

use der::asn1::{AnyRef, Null, ObjectIdentifier};
use der::{Decode, Encode, Header, Length, Tag};

use crate::crypto::NamedGroup;

/// An X.509 `AlgorithmIdentifier`: an algorithm name and its parameters.
///
/// This names the *public key* algorithm a certificate must carry to be
/// usable with a signature scheme, not the signature algorithm itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmIdentifier {
    name: &'static str,
    parameters: AlgorithmParameters,
}

impl AlgorithmIdentifier {
    /// Make a new identifier for `name` with `parameters`.
    pub fn new(name: &'static str, parameters: AlgorithmParameters) -> Self {
        Self { name, parameters }
    }

    /// The identifier with no algorithm, used where no mapping is defined.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is [`AlgorithmIdentifier::empty()`].
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// The algorithm name, eg. `"ECDSA"`.  Empty for the empty identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The algorithm parameters.
    pub fn parameters(&self) -> &AlgorithmParameters {
        &self.parameters
    }

    /// The object identifier for [`Self::name()`], if it is one we know.
    pub fn oid(&self) -> Option<ObjectIdentifier> {
        match self.name {
            "RSA" => Some(RSA_ENCRYPTION),
            "ECDSA" => Some(EC_PUBLIC_KEY),
            "Ed25519" => Some(ED25519),
            _ => None,
        }
    }

    /// DER encoding of the whole `AlgorithmIdentifier` SEQUENCE.
    ///
    /// Returns `None` if [`Self::oid()`] does, or if caller-supplied
    /// parameters are not a single well-formed DER value.
    pub fn to_der(&self) -> Option<Vec<u8>> {
        let oid = self.oid()?;
        match self.encode(&oid) {
            Ok(der) => Some(der),
            Err(err) => {
                warn!("cannot DER-encode {} AlgorithmIdentifier: {err}", self.name);
                None
            }
        }
    }

    fn encode(&self, oid: &ObjectIdentifier) -> der::Result<Vec<u8>> {
        let mut params = Vec::new();
        match &self.parameters {
            AlgorithmParameters::Omitted | AlgorithmParameters::Empty => {}
            AlgorithmParameters::Null => {
                Null.encode_to_vec(&mut params)?;
            }
            AlgorithmParameters::Der(bytes) => {
                AnyRef::from_der(bytes)?.encode_to_vec(&mut params)?;
            }
        }

        let body_len = (oid.encoded_len()? + Length::try_from(params.len())?)?;
        let mut out = Vec::new();
        Header::new(Tag::Sequence, body_len)?.encode_to_vec(&mut out)?;
        oid.encode_to_vec(&mut out)?;
        out.extend_from_slice(&params);
        Ok(out)
    }
}

/// The `parameters` field of an [`AlgorithmIdentifier`].
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AlgorithmParameters {
    /// No parameters field at all.
    #[default]
    Omitted,
    /// A parameters field which is present but empty.
    Empty,
    /// An explicit ASN.1 `NULL`.
    Null,
    /// Caller-supplied DER, eg. the named-curve OID for ECDSA.
    Der(Vec<u8>),
}

/// DER encoding of the OID naming `group`, for use as ECDSA parameters.
pub(crate) fn named_curve_der(group: NamedGroup) -> Option<Vec<u8>> {
    encode_oid(&group.curve_oid()?)
}

fn encode_oid(oid: &ObjectIdentifier) -> Option<Vec<u8>> {
    match oid.to_der() {
        Ok(der) => Some(der),
        Err(err) => {
            warn!("cannot DER-encode {oid}: {err}");
            None
        }
    }
}

// RFC8017 appendix A.1
const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
// RFC5480 section 2.1.1
const EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
// RFC8410 section 3
const ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");
