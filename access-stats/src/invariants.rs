use std::borrow::Borrow;

use derive_more::{Debug, Display};

macro_rules! field_newtype {
    ($name:ident) => {
        #[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.into())
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.0.as_str()
            }
        }
    };
}

// Client address, kept verbatim: the leading token is not validated as an IP.
field_newtype!(ClientAddr);
field_newtype!(RequestPath);
// Digits as they appear in the line, so "0200" and "200" stay distinct.
field_newtype!(StatusCode);
field_newtype!(UserAgent);
