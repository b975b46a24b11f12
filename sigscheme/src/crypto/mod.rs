mod enums;
pub use enums::{NamedGroup, SignatureAlgorithm, SignatureScheme};

mod signature;
pub use signature::SignatureFormat;
