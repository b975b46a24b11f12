//! # tls-sigscheme
//!
//! Classification of TLS `SignatureScheme` values, and the rules deciding
//! which of them may be used.
//!
//! A signature scheme is negotiated during the handshake as a 16-bit code.
//! This crate answers the questions a handshake implementation needs to ask
//! about such a code:
//!
//! * What does it mean? Its name, hash function, padding, key algorithm
//!   family, certificate [`AlgorithmIdentifier`], and how the signature value
//!   is serialized ([`SignatureFormat`]).
//! * Do we offer it? See [`ALL_AVAILABLE_SCHEMES`] and
//!   [`SignatureScheme::is_available()`].
//! * Is it allowed for the negotiated protocol version? See
//!   [`SignatureScheme::is_compatible_with()`].
//! * Can it be used with a given private key? See
//!   [`SignatureScheme::is_suitable_for()`].
//!
//! Unrecognised codes are ordinary input: every descriptor has a well-defined
//! "unknown" answer, so a peer offering a scheme we have never heard of is
//! simply skipped.
//!
//! This crate performs no cryptography. It does no IO.
//!
//! ```rust
//! use tls_sigscheme::{ProtocolVersion, SignatureFormat, SignatureScheme};
//!
//! let scheme = SignatureScheme::from(0x0804);
//! assert_eq!(scheme, SignatureScheme::RSA_PSS_SHA256);
//! assert_eq!(scheme.hash_function_name(), "SHA-256");
//! assert_eq!(scheme.padding_string(), "PSSR(SHA-256,MGF1,32)");
//! assert_eq!(scheme.format(), Some(SignatureFormat::Ieee1363));
//! assert!(scheme.is_compatible_with(ProtocolVersion::TLSv1_3));
//!
//! assert!(!SignatureScheme::RSA_PKCS1_SHA256.is_compatible_with(ProtocolVersion::TLSv1_3));
//! ```
//!
//! ## Crate features
//!
//! - `std` (enabled by default): implements `std::error::Error` for
//!   [`InvalidMessage`]. Without it the crate is `no_std` + `alloc`.
//! - `logging` (enabled by default): emit diagnostics through the `log` crate.
//!   Without it the logging macros expand to nothing, and every answer the
//!   crate gives is unchanged.
//!
//! Every combination of these features builds, including
//! `--no-default-features`.

#![no_std]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// Unit tests and `std` trait impls need std.
#[cfg(any(feature = "std", test))]
extern crate std;

// log for logging (optional).
#[cfg(feature = "logging")]
#[macro_use]
extern crate log;

// The arguments are still type-checked (and so count as used), but
// never formatted.
#[cfg(not(feature = "logging"))]
#[macro_use]
mod log {
    macro_rules! trace    ( ($($tt:tt)*) => {{ if false { let _ = format_args!($($tt)*); } }} );
    macro_rules! debug    ( ($($tt:tt)*) => {{ if false { let _ = format_args!($($tt)*); } }} );
    macro_rules! warn     ( ($($tt:tt)*) => {{ if false { let _ = format_args!($($tt)*); } }} );
}

#[macro_use]
mod msgs;
mod enums;
mod error;
mod policy;
mod registry;
mod x509;

/// Cryptographic enumerations: signature schemes, key algorithms and curves.
pub mod crypto;

/// Signing key capabilities consumed by the suitability rules.
pub mod sign;

/// Low-level encoding functions.
/// The contents of this section DO NOT form part of the stable interface.
pub mod internal {
    /// Low-level TLS message parsing and encoding functions.
    pub mod msgs {
        pub use crate::msgs::{Codec, Reader};
    }
}

// The public interface is:
pub use crate::crypto::{NamedGroup, SignatureAlgorithm, SignatureFormat, SignatureScheme};
pub use crate::enums::ProtocolVersion;
pub use crate::error::InvalidMessage;
pub use crate::registry::{schemes_for_version, ALL_AVAILABLE_SCHEMES};
pub use crate::x509::{AlgorithmIdentifier, AlgorithmParameters};
