#![allow(missing_docs, non_camel_case_types)]

use crate::msgs::{Codec, Reader};

enum_builder! {
    /// The `ProtocolVersion` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum ProtocolVersion {
        SSLv2 => 0x0002,
        SSLv3 => 0x0300,
        TLSv1_0 => 0x0301,
        TLSv1_1 => 0x0302,
        TLSv1_2 => 0x0303,
        TLSv1_3 => 0x0304,
        DTLSv1_0 => 0xFEFF,
        DTLSv1_2 => 0xFEFD,
        DTLSv1_3 => 0xFEFC,
    }
}

impl ProtocolVersion {
    /// The major version byte.
    pub fn major(self) -> u8 {
        self.to_array()[0]
    }

    /// The minor version byte.
    pub fn minor(self) -> u8 {
        self.to_array()[1]
    }

    /// Whether this is a DTLS version.
    pub fn is_datagram(self) -> bool {
        self.major() == 0xfe
    }

    /// Whether this version predates TLS1.3 (or DTLS1.3).
    ///
    /// DTLS minor versions count downwards, so DTLS1.2 (`0xfefd`) sorts
    /// numerically *above* DTLS1.3 (`0xfefc`).  Unknown stream versions
    /// newer than TLS1.3 are treated as TLS1.3 or later.
    pub fn is_pre_tls13(self) -> bool {
        let code = u16::from(self);
        if self.is_datagram() {
            code >= u16::from(Self::DTLSv1_2)
        } else {
            code <= u16::from(Self::TLSv1_2)
        }
    }
}
