// File: src/crypto.rs
// Purpose: Passphrase-based text encryption with AES-256-GCM
//
// Output layout (hex encoded): 12-byte nonce || ciphertext || 16-byte tag

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::Aes256Gcm;
use sha2::{Digest, Sha256};

const NONCE_LEN: usize = 12;

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("encryption failed")]
    Encrypt,

    #[error("ciphertext is not valid hex: {0}")]
    Encoding(#[from] hex::FromHexError),

    #[error("ciphertext is too short ({0} bytes)")]
    Truncated(usize),

    #[error("decryption failed: wrong passphrase or corrupted data")]
    Decrypt,

    #[error("decrypted data is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn cipher_for(passphrase: &str) -> Aes256Gcm {
    let key = Sha256::digest(passphrase.as_bytes());
    Aes256Gcm::new(&key)
}

/// Encrypt `text` with a key derived from `passphrase`.
///
/// A fresh random nonce is used on every call, so encrypting the same text
/// twice gives different output.
pub fn encrypt(text: &str, passphrase: &str) -> Result<String, CryptoError> {
    let cipher = cipher_for(passphrase);
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let sealed = cipher
        .encrypt(&nonce, text.as_bytes())
        .map_err(|_| CryptoError::Encrypt)?;

    let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&sealed);
    Ok(hex::encode(out))
}

/// Reverse [`encrypt`].
pub fn decrypt(cipher_hex: &str, passphrase: &str) -> Result<String, CryptoError> {
    let data = hex::decode(cipher_hex.trim())?;
    if data.len() < NONCE_LEN {
        return Err(CryptoError::Truncated(data.len()));
    }

    let (nonce, sealed) = data.split_at(NONCE_LEN);
    let plain = cipher_for(passphrase)
        .decrypt(GenericArray::from_slice(nonce), sealed)
        .map_err(|_| {
            tracing::debug!("AES-GCM authentication failed");
            CryptoError::Decrypt
        })?;

    Ok(String::from_utf8(plain)?)
}
