//! ABN checksum validation and the `Abn` value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in an Australian Business Number.
pub const ABN_LENGTH: usize = 11;

/// Positional weights applied to each digit.
const WEIGHTS: [i32; ABN_LENGTH] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

const CHECKSUM_MODULUS: i32 = 89;

/// Check an ABN's length, digits, and checksum, in that order.
///
/// The first digit is reduced by one before weighting, then the weighted sum
/// must be divisible by 89. Does not allocate.
///
/// # Example
///
/// ```
/// use abn_lookup::domain::{validate, ValidationError};
///
/// assert!(validate("51824753556").is_ok());
/// assert_eq!(validate("51824753557"), Err(ValidationError::InvalidChecksum));
/// assert_eq!(validate("51 824 753 556"), Err(ValidationError::WrongLength));
/// ```
pub fn validate(abn: &str) -> Result<(), ValidationError> {
    let bytes = abn.as_bytes();

    if bytes.len() != ABN_LENGTH {
        return Err(ValidationError::WrongLength);
    }

    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(ValidationError::InvalidFormat);
    }

    let sum: i32 = bytes
        .iter()
        .zip(WEIGHTS)
        .enumerate()
        .map(|(position, (byte, weight))| {
            let digit = i32::from(byte - b'0');
            let digit = if position == 0 { digit - 1 } else { digit };
            digit * weight
        })
        .sum();

    if sum % CHECKSUM_MODULUS != 0 {
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(())
}

/// A validated Australian Business Number.
///
/// Held as its eleven-digit string form; leading digits are positional, never numeric.
///
/// # Example
///
/// ```
/// use abn_lookup::domain::Abn;
///
/// let abn = Abn::new("51824753556").unwrap();
/// assert_eq!(abn.formatted(), "51 824 753 556");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Abn(String);

impl Abn {
    /// Create a new Abn, running the full checksum validation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the number fails.
    pub fn new(abn: impl Into<String>) -> Result<Self, ValidationError> {
        let abn = abn.into();
        validate(&abn)?;
        Ok(Self(abn))
    }

    /// Get the ABN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The ABN grouped the way the registry prints it, e.g. `51 824 753 556`.
    pub fn formatted(&self) -> String {
        // Validated as eleven ASCII digits, so byte slicing is on char boundaries.
        let s = &self.0;
        format!("{} {} {} {}", &s[..2], &s[2..5], &s[5..8], &s[8..])
    }
}

impl FromStr for Abn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Abn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Abn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Abn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Abn::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Abn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_known_numbers() {
        assert_eq!(validate("87007382031"), Err(ValidationError::InvalidChecksum));
        assert!(validate("87007382032").is_ok());
        assert_eq!(validate("87007382033"), Err(ValidationError::InvalidChecksum));
        assert!(validate("51824753556").is_ok());
        assert!(validate("51824999396").is_ok());
    }

    #[test]
    fn test_validate_wrong_length() {
        assert_eq!(validate(""), Err(ValidationError::WrongLength));
        assert_eq!(validate("8700738203"), Err(ValidationError::WrongLength));
        assert_eq!(validate("870073820321"), Err(ValidationError::WrongLength));
        assert_eq!(validate("87 007 382 031"), Err(ValidationError::WrongLength));
    }

    #[test]
    fn test_validate_length_checked_before_format() {
        assert_eq!(validate("abc"), Err(ValidationError::WrongLength));
        assert_eq!(validate("87007382xxxx"), Err(ValidationError::WrongLength));
    }

    #[test]
    fn test_validate_invalid_format() {
        assert_eq!(validate("87007382xxx"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("8700738203 "), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("-8700738203"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate("87O07382032"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_validate_multibyte_counts_bytes() {
        // Eleven characters, but 'é' is two bytes wide.
        assert_eq!(validate("8700738203é"), Err(ValidationError::WrongLength));
    }

    #[test]
    fn test_validate_leading_zero_uses_signed_sum() {
        // (0 - 1) * 10 + 8 * 19 = 142, not a multiple of 89
        assert_eq!(validate("00000000008"), Err(ValidationError::InvalidChecksum));
        // -10 + 1*1 + 1*5 + 1*17 + 4*19 = 89
        assert!(validate("01010000014").is_ok());
    }

    #[test]
    fn test_validate_is_idempotent() {
        for input in ["87007382032", "87007382031", "87007382xxx", "123"] {
            assert_eq!(validate(input), validate(input));
        }
    }

    #[test]
    fn test_abn_new() {
        let abn = Abn::new("87007382032").unwrap();
        assert_eq!(abn.as_str(), "87007382032");
        assert_eq!(Abn::new("87007382031"), Err(ValidationError::InvalidChecksum));
    }

    #[test]
    fn test_abn_formatted() {
        let abn = Abn::new("87007382032").unwrap();
        assert_eq!(abn.formatted(), "87 007 382 032");
    }

    #[test]
    fn test_abn_from_str() {
        let abn: Abn = "51824753556".parse().unwrap();
        assert_eq!(format!("{}", abn), "51824753556");
        assert!("51824753557".parse::<Abn>().is_err());
    }

    #[test]
    fn test_abn_serialization() {
        let abn = Abn::new("51824753556").unwrap();
        let json = serde_json::to_string(&abn).unwrap();
        assert_eq!(json, "\"51824753556\"");
    }

    #[test]
    fn test_abn_deserialization_invalid_fails() {
        let result: Result<Abn, _> = serde_json::from_str("\"87007382031\"");
        assert!(result.is_err());

        let abn: Abn = serde_json::from_str("\"87007382032\"").unwrap();
        assert_eq!(abn.into_inner(), "87007382032");
    }
}
