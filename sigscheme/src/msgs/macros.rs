/// A macro which defines an enum type.
///
/// The generated type has one variant per listed wire value, plus
/// `Unknown(_)` carrying any other value.  Equality, hashing and ordering
/// are by wire value, so `Unknown(x)` is equal to the named variant for `x`.
macro_rules! enum_builder {
    (
        $(#[doc = $comment:literal])*
        #[repr($uint:ty)]
        $enum_vis:vis enum $enum_name:ident
        {
          $(
              $(#[doc = $var_comment:literal])*
              $enum_var:ident => $enum_val:literal
          ),* $(,)?
        }
    ) => {
        $(#[doc = $comment])*
        #[non_exhaustive]
        #[derive(Clone, Copy)]
        $enum_vis enum $enum_name {
            $(
                $(#[doc = $var_comment])*
                $enum_var,
            )*
            /// A value not listed above.
            Unknown($uint),
        }

        impl $enum_name {
            /// The big-endian wire encoding of this value.
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn to_array(self) -> [u8; core::mem::size_of::<$uint>()] {
                <$uint>::from(self).to_be_bytes()
            }

            /// The named variant for this value, if there is one.
            ///
            /// Matching on variants should go through this, so that an
            /// `Unknown(_)` holding a named value is treated identically.
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            pub(crate) fn canonical(self) -> Self {
                $enum_name::from(<$uint>::from(self))
            }

            /// The variant name, or `None` for values with no name.
            // NOTE(allow) generated irrespective if there are callers
            #[allow(dead_code)]
            $enum_vis fn as_str(&self) -> Option<&'static str> {
                match self.canonical() {
                    $( $enum_name::$enum_var => Some(stringify!($enum_var)), )*
                    $enum_name::Unknown(_) => None,
                }
            }
        }

        impl Codec<'_> for $enum_name {
            // NOTE(allow) fully qualified Vec is only needed in no-std mode
            #[allow(unused_qualifications)]
            fn encode(&self, bytes: &mut alloc::vec::Vec<u8>) {
                <$uint>::from(*self).encode(bytes);
            }

            fn read(r: &mut Reader<'_>) -> Result<Self, crate::error::InvalidMessage> {
                match <$uint>::read(r) {
                    Ok(x) => Ok($enum_name::from(x)),
                    Err(_) => Err(crate::error::InvalidMessage::MissingData(stringify!($enum_name))),
                }
            }
        }

        impl From<$uint> for $enum_name {
            fn from(x: $uint) -> Self {
                match x {
                    $( $enum_val => $enum_name::$enum_var, )*
                    x => $enum_name::Unknown(x),
                }
            }
        }

        impl From<$enum_name> for $uint {
            fn from(value: $enum_name) -> Self {
                match value {
                    $( $enum_name::$enum_var => $enum_val, )*
                    $enum_name::Unknown(x) => x,
                }
            }
        }

        impl PartialEq for $enum_name {
            fn eq(&self, other: &Self) -> bool {
                <$uint>::from(*self) == <$uint>::from(*other)
            }
        }

        impl Eq for $enum_name {}

        impl core::hash::Hash for $enum_name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                <$uint>::from(*self).hash(state);
            }
        }

        impl PartialOrd for $enum_name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $enum_name {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                <$uint>::from(*self).cmp(&<$uint>::from(*other))
            }
        }

        impl core::fmt::Debug for $enum_name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.as_str() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}(0x{:x?})", stringify!($enum_name), <$uint>::from(*self)),
                }
            }
        }
    };
}
