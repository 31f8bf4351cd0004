//! Response body decoding and conversion into a caller-chosen target type.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Character encoding used to decode a response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Charset {
    #[default]
    Utf8,
    Latin1,
}

impl Charset {
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Charset::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Charset::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// Convert a decoded body into the target type via its `FromStr` impl.
///
/// A blank body converts to the type's default value rather than an error.
pub fn convert_body<T>(body: &str) -> Result<T>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    body.parse().map_err(|e: T::Err| Error::Convert(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_decode() {
        assert_eq!(Charset::Utf8.decode("déjà".as_bytes()), "déjà");
    }

    #[test]
    fn latin1_decode() {
        assert_eq!(Charset::Latin1.decode(&[0xE9]), "é");
    }

    #[test]
    fn body_converts_to_integer() {
        assert_eq!(convert_body::<i32>("42").unwrap(), 42);
    }

    #[test]
    fn blank_body_yields_default() {
        assert_eq!(convert_body::<i32>("").unwrap(), 0);
        assert_eq!(convert_body::<String>("  \n").unwrap(), "");
    }

    #[test]
    fn unconvertible_body_is_an_error() {
        assert!(matches!(
            convert_body::<i32>("forty-two"),
            Err(Error::Convert(_))
        ));
    }
}
