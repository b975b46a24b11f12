//! Wire-level encoding of the enumerations in this crate.

#[macro_use]
mod macros;

mod codec;
pub use codec::{Codec, Reader};

#[cfg(test)]
pub(crate) use codec::tests::{test_enum16, test_enum8};
