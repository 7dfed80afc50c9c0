//! Character fixture loading.
//!
//! A fixture is a JSON file in the `CharacterData` wire format holding one
//! character.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use hpkeeper_domain::{Character, DomainError};
use hpkeeper_shared::CharacterData;

/// Errors raised while reading a fixture that exists.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Fixture {} is not valid character JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Fixture {} describes an invalid character: {source}", path.display())]
    Invalid { path: PathBuf, source: DomainError },
}

/// Read and validate the character fixture at `path`.
///
/// Returns `Ok(None)` if the file does not exist.
pub async fn load_character_fixture(path: &Path) -> Result<Option<Character>, FixtureError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(FixtureError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let data: CharacterData =
        serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    data.into_domain()
        .map(Some)
        .map_err(|source| FixtureError::Invalid {
            path: path.to_path_buf(),
            source,
        })
}
