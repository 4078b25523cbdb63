//! Store key generation for encryption at rest
//!
//! A store key file is the AES key material prefixed by a 32-byte key ID.
//! Both parts come from a single draw of the secure random source.

use rand::{rngs::OsRng, CryptoRng, RngCore};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{GenError, Result};
use crate::KEY_ID_SIZE;

/// AES key strength accepted for store keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStrength {
    Aes128,
    Aes192,
    Aes256,
}

impl KeyStrength {
    /// Key size in bits
    pub fn bits(&self) -> u32 {
        match self {
            KeyStrength::Aes128 => 128,
            KeyStrength::Aes192 => 192,
            KeyStrength::Aes256 => 256,
        }
    }

    /// Total size of the key file: key material plus the key ID prefix
    pub fn file_size(&self) -> usize {
        self.bits() as usize / 8 + KEY_ID_SIZE
    }
}

impl TryFrom<i64> for KeyStrength {
    type Error = GenError;

    fn try_from(bits: i64) -> Result<Self> {
        match bits {
            128 => Ok(KeyStrength::Aes128),
            192 => Ok(KeyStrength::Aes192),
            256 => Ok(KeyStrength::Aes256),
            other => Err(GenError::invalid_parameter(format!(
                "store key size should be 128, 192, or 256 bits, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for KeyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Generate a store key file at `path` using the OS random source
pub fn generate_key_file(path: &Path, strength: KeyStrength) -> Result<()> {
    generate_key_file_with_rng(path, strength, &mut OsRng)
}

/// Generate a store key file drawing from `rng`
///
/// The random source is queried exactly once. Nothing is written if the
/// draw fails. An existing file at `path` is truncated and its permissions
/// are reset to owner read/write.
pub fn generate_key_file_with_rng<R>(path: &Path, strength: KeyStrength, rng: &mut R) -> Result<()>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let key_size = strength.file_size();
    let mut key = Zeroizing::new(vec![0u8; key_size]);

    rng.try_fill_bytes(&mut key).map_err(|_| {
        GenError::RandomSource(format!("failed to create key with size {} bytes", key_size))
    })?;

    write_owner_only(path, &key)?;

    debug!(path = %path.display(), strength = %strength, "wrote store key");
    Ok(())
}

fn write_owner_only(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;

    // mode() only applies to newly created files
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}
