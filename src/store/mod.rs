//! JSON store for user-managed identities.

use directories::ProjectDirs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use crate::identity::Identity;
use crate::{GhidError, Result};

/// User-created identity records, persisted as a JSON array. Loaded fresh
/// on every command and saved after every mutation.
#[derive(Debug, Clone, Default)]
pub struct IdentityStore {
    pub identities: Vec<Identity>,
}

impl IdentityStore {
    /// Load from the store file. A missing file is an empty store; malformed
    /// JSON degrades to an empty store with a warning instead of failing the
    /// whole view.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::file_path()?))
    }

    fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        match parse_store(&content) {
            Ok(identities) => Self { identities },
            Err(e) => {
                eprintln!("Warning: ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save to the store file with restricted permissions (0600)
    pub fn save(&self) -> Result<()> {
        let path = Self::file_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.identities)?;

        #[cfg(unix)]
        {
            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(content.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&path, content)?;
        }

        Ok(())
    }

    /// Add a new identity; display names must be unique within the store.
    pub fn add(&mut self, identity: Identity) -> Result<()> {
        if self.find(&identity.name).is_some() {
            return Err(GhidError::IdentityExists(identity.name));
        }
        self.identities.push(identity);
        Ok(())
    }

    /// Replace the identity called `name`. Renaming onto another record's
    /// name is rejected.
    pub fn update(&mut self, name: &str, identity: Identity) -> Result<()> {
        if identity.name != name && self.find(&identity.name).is_some() {
            return Err(GhidError::IdentityExists(identity.name));
        }

        let slot = self
            .identities
            .iter_mut()
            .find(|id| id.name == name)
            .ok_or_else(|| GhidError::IdentityNotFound(name.to_string()))?;
        *slot = identity;
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<Identity> {
        let idx = self.identities.iter().position(|id| id.name == name)?;
        Some(self.identities.remove(idx))
    }

    pub fn find(&self, name: &str) -> Option<&Identity> {
        self.identities.iter().find(|id| id.name == name)
    }

    /// Path to the store file: XDG config directory with a home fallback.
    pub fn file_path() -> Result<PathBuf> {
        let base_dir = ProjectDirs::from("", "", "ghid")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                std::env::var("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(".config")
                    .join("ghid")
            });

        Ok(base_dir.join("identities.json"))
    }
}

fn parse_store(content: &str) -> Result<Vec<Identity>> {
    serde_json::from_str(content)
        .map_err(|e| GhidError::StoreCorrupted(format!("Failed to parse identity store: {}", e)))
}
