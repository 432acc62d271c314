//! Dual-format hex values and the byte <-> hex-text codec.
//!
//! Addresses, lengths, and write payloads are accepted either as native
//! integers or as hexadecimal strings (optional case-insensitive "0x"
//! prefix). [`HexLike`] is the tagged union for those two shapes, and all
//! normalization to integers or byte payloads goes through it.

use thiserror::Error;

/// Errors from normalizing a hex-like input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexError {
    /// String had no hex digits (after an optional "0x" prefix)
    #[error("empty hex string")]
    Empty,
    /// String contained a non-hexadecimal character
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
    /// Value does not fit in a buffer offset
    #[error("hex value too large for an offset: {0:?}")]
    TooLarge(String),
}

/// An address, length, or write payload: native integer or hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexLike {
    Int(u64),
    Str(String),
}

impl From<u64> for HexLike {
    fn from(v: u64) -> Self {
        HexLike::Int(v)
    }
}

impl From<usize> for HexLike {
    fn from(v: usize) -> Self {
        HexLike::Int(v as u64)
    }
}

impl From<u32> for HexLike {
    fn from(v: u32) -> Self {
        HexLike::Int(v as u64)
    }
}

impl From<u8> for HexLike {
    fn from(v: u8) -> Self {
        HexLike::Int(v as u64)
    }
}

impl From<&str> for HexLike {
    fn from(s: &str) -> Self {
        HexLike::Str(s.to_string())
    }
}

impl From<String> for HexLike {
    fn from(s: String) -> Self {
        HexLike::Str(s)
    }
}

impl HexLike {
    /// Normalize to a buffer offset (or length).
    ///
    /// Strings are parsed as base-16 whether or not they carry a "0x"
    /// prefix: `"0x20"` and `"20"` both denote 32.
    pub fn to_offset(&self) -> Result<usize, HexError> {
        match self {
            HexLike::Int(v) => {
                usize::try_from(*v).map_err(|_| HexError::TooLarge(format!("{v:#x}")))
            }
            HexLike::Str(s) => {
                let digits = validate_digits(s)?;
                usize::from_str_radix(digits, 16).map_err(|_| HexError::TooLarge(s.clone()))
            }
        }
    }

    /// Normalize a write payload to its minimal big-endian byte encoding.
    ///
    /// The byte width derives from the numeric value, not the literal
    /// digit count: leading zero digits in a string are stripped, so
    /// `"0x00BEEF"` encodes to the two bytes `BE EF`. A value of zero
    /// encodes to zero bytes. Callers that need an exact width use
    /// [`ByteStore::write_bytes`](crate::ByteStore::write_bytes) instead.
    pub fn to_payload(&self) -> Result<Vec<u8>, HexError> {
        match self {
            HexLike::Int(v) => {
                let be = v.to_be_bytes();
                let skip = be.iter().take_while(|&&b| b == 0).count();
                Ok(be[skip..].to_vec())
            }
            HexLike::Str(s) => {
                let digits = validate_digits(s)?;
                let digits = digits.trim_start_matches('0');
                if digits.is_empty() {
                    return Ok(Vec::new());
                }
                // Odd digit count: the value implies a leading nibble
                let padded;
                let digits = if digits.len() % 2 == 1 {
                    padded = format!("0{digits}");
                    padded.as_str()
                } else {
                    digits
                };
                decode_hex(digits).map_err(|_| HexError::InvalidDigit(s.clone()))
            }
        }
    }
}

/// Strip an optional "0x"/"0X" prefix and check every remaining
/// character is a hex digit.
fn validate_digits(s: &str) -> Result<&str, HexError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() {
        return Err(HexError::Empty);
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(s.to_string()));
    }
    Ok(digits)
}

/// Encode bytes as uppercase hex, two digits per byte, no separators.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02X}"));
    }
    out
}

/// Decode an even-length string of hex digits to bytes.
pub fn decode_hex(digits: &str) -> Result<Vec<u8>, HexError> {
    if digits.len() % 2 != 0 || !digits.is_ascii() {
        return Err(HexError::InvalidDigit(digits.to_string()));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| HexError::InvalidDigit(digits.to_string()))
        })
        .collect()
}
