//! `Guid` value type: 128 random bits rendered as UUID v4 text.

use std::fmt;

use crate::ports::entropy::{Entropy, UUID_BYTES};

const HEX: [u8; 16] = *b"0123456789abcdef";

/// Length of the canonical hyphenated text form.
pub const GUID_TEXT_LEN: usize = 36;

/// A version 4, RFC 4122 variant GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid([u8; UUID_BYTES]);

impl Guid {
    /// Creates a GUID from a general-purpose random draw.
    #[must_use]
    pub fn create(entropy: &dyn Entropy) -> Self {
        Self::from_bytes(entropy.random_bytes())
    }

    /// Creates a GUID from raw bytes, forcing the version and variant bits.
    #[must_use]
    pub fn from_bytes(mut bytes: [u8; UUID_BYTES]) -> Self {
        bytes[6] = (bytes[6] & 0x0F) | 0x40;
        bytes[8] = (bytes[8] & 0x3F) | 0x80;
        Self(bytes)
    }

    /// The underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; UUID_BYTES] {
        &self.0
    }

    /// Parses canonical hyphenated v4 text, in either case.
    ///
    /// Returns `None` unless `text` is the 36-character 8-4-4-4-12 form with
    /// version 4 and the RFC 4122 variant.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() != GUID_TEXT_LEN {
            return None;
        }
        let uuid = uuid::Uuid::try_parse(text).ok()?;
        (uuid.get_version_num() == 4 && uuid.get_variant() == uuid::Variant::RFC4122)
            .then(|| Self(*uuid.as_bytes()))
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(GUID_TEXT_LEN);
        for (i, &b) in self.0.iter().enumerate() {
            s.push(char::from(HEX[(b >> 4) as usize]));
            s.push(char::from(HEX[(b & 0x0F) as usize]));
            if matches!(i, 3 | 5 | 7 | 9) {
                s.push('-');
            }
        }
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::SeededEntropy;

    #[test]
    fn forces_version_and_variant() {
        let guid = Guid::from_bytes([0xFF; UUID_BYTES]);
        assert_eq!(guid.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");

        let guid = Guid::from_bytes([0x00; UUID_BYTES]);
        assert_eq!(guid.to_string(), "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn display_matches_uuid_crate() {
        let entropy = SeededEntropy::new(11);
        let guid = Guid::create(&entropy);
        let uuid = uuid::Uuid::from_bytes(*guid.as_bytes());
        assert_eq!(guid.to_string(), uuid.hyphenated().to_string());
        assert_eq!(uuid.get_version_num(), 4);
    }

    #[test]
    fn parse_accepts_own_output() {
        let entropy = SeededEntropy::new(5);
        let guid = Guid::create(&entropy);
        assert_eq!(Guid::parse(&guid.to_string()), Some(guid));
        assert_eq!(Guid::parse(&guid.to_string().to_uppercase()), Some(guid));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        // version 1
        assert!(Guid::parse("2c5ea4c0-4067-11ec-9e99-8f0b7c0f93d1").is_none());
        // variant nibble 'c'
        assert!(Guid::parse("2c5ea4c0-4067-41ec-ce99-8f0b7c0f93d1").is_none());
        // misplaced hyphen
        assert!(Guid::parse("2c5ea4c04-067-41ec-9e99-8f0b7c0f93d1").is_none());
        // non-hex digit
        assert!(Guid::parse("2c5ea4c0-4067-41ec-9e99-8f0b7c0f93dz").is_none());
        assert!(Guid::parse("").is_none());
        // simple and braced forms are valid UUIDs but not canonical text
        assert!(Guid::parse("2c5ea4c0406741ec9e998f0b7c0f93d1").is_none());
        assert!(Guid::parse("{2c5ea4c0-4067-41ec-9e99-8f0b7c0f93d1}").is_none());
        assert!(Guid::parse("2c5ea4c0-4067-41ec-9e99-8f0b7c0f93d1").is_some());
    }
}
