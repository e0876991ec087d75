//! Text forms shared by CSV files and JSON artifacts: base58 addresses and unprefixed hex
//! hashes. Use with `#[serde(with = "...")]`.

use serde::{Deserialize, Deserializer, Serializer};
use solana_pubkey::Pubkey;
use std::str::FromStr;

pub mod pubkey {
    use super::*;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(s.trim()).map_err(serde::de::Error::custom)
    }
}

pub mod hash {
    use super::*;

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let s = String::deserialize(deserializer)?;
        decode_hash(&s).map_err(serde::de::Error::custom)
    }
}

pub mod hash_vec {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S: Serializer>(
        hashes: &[[u8; 32]],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(hashes.len()))?;
        for hash in hashes {
            seq.serialize_element(&hex::encode(hash))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<[u8; 32]>, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| decode_hash(s))
            .collect::<Result<_, _>>()
            .map_err(serde::de::Error::custom)
    }
}

/// Parse a 32-byte hash from hex, with or without a `0x` prefix.
pub fn decode_hash(s: &str) -> Result<[u8; 32], String> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|e| e.to_string())?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| format!("Expected 32 bytes, got {}", bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hash_accepts_optional_prefix() {
        let digits = "ab".repeat(32);

        assert_eq!(decode_hash(&digits).unwrap(), [0xab; 32]);
        assert_eq!(decode_hash(&format!("0x{digits}")).unwrap(), [0xab; 32]);
        assert_eq!(decode_hash(&format!("  {digits} ")).unwrap(), [0xab; 32]);
    }

    #[test]
    fn test_decode_hash_rejects_bad_input() {
        assert!(decode_hash("abcd").unwrap_err().contains("Expected 32 bytes, got 2"));
        assert!(decode_hash(&"zz".repeat(32)).is_err());
    }
}
