//! Wallet Import Format private keys.
//!
//! A WIF string is Base58Check over `0x80 || key[32]`, with the checksum
//! being the first four bytes of a double SHA-256.

use crate::error::{SteemError, SteemResult};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

const WIF_VERSION: u8 = 0x80;
const KEY_LENGTH: usize = 32;

/// Raw secp256k1 secret key bytes, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_LENGTH]);

impl PrivateKey {
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    pub fn to_wif(&self) -> String {
        bs58::encode(self.0)
            .with_check_version(WIF_VERSION)
            .into_string()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Decodes a WIF string into a private key.
pub fn decode(wif: &str) -> SteemResult<PrivateKey> {
    let mut payload = bs58::decode(wif.trim())
        .with_check(Some(WIF_VERSION))
        .into_vec()
        .map_err(|e| SteemError::InvalidPrivateKey(e.to_string()))?;

    // payload keeps the version byte in front
    let result = match payload.get(1..) {
        Some(key) if key.len() == KEY_LENGTH => {
            let mut bytes = [0u8; KEY_LENGTH];
            bytes.copy_from_slice(key);
            Ok(PrivateKey(bytes))
        }
        _ => Err(SteemError::InvalidPrivateKey(format!(
            "expected {} key bytes, got {}",
            KEY_LENGTH,
            payload.len().saturating_sub(1)
        ))),
    };
    payload.zeroize();
    result
}
