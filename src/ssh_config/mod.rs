//! Reads and rewrites the `Host github.com` block of `~/.ssh/config`.
//!
//! Only the `Host` and `IdentityFile` keywords are interpreted; every other
//! line is opaque payload and re-emitted unchanged. Reading splits on
//! `\r?\n` and writing joins with `\n`, so a CRLF file loses that
//! convention after the first mutation.

use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use crate::{GhidError, Result};

/// The single remote host this tool manages identities for.
pub const TARGET_HOST: &str = "github.com";

/// Remote login user on the target host.
pub const SSH_USER: &str = "git";

/// SSH port assumed when a record carries none.
pub const DEFAULT_PORT: u16 = 22;

/// Identity found by scanning the config file. Named after the key file's
/// basename and never carries commit-author metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredIdentity {
    pub name: String,
    pub key_file: String,
}

impl DiscoveredIdentity {
    fn from_key_file(key_file: String) -> Self {
        let name = Path::new(&key_file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&key_file)
            .to_string();
        Self { name, key_file }
    }
}

/// Line-oriented engine over one SSH config file. Every operation reads the
/// file fresh; mutations write the whole document back in one step.
pub struct SshConfigEngine {
    path: PathBuf,
}

impl SshConfigEngine {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Engine over the user's `~/.ssh/config`.
    pub fn default_location() -> Result<Self> {
        let home = std::env::var("HOME")
            .map_err(|_| GhidError::Config("Cannot determine home directory".to_string()))?;
        Ok(Self::new(Path::new(&home).join(".ssh").join("config")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All github.com identities present in the config file, in file order.
    /// A missing file means "no identities found", not an error.
    pub fn scan(&self) -> Vec<DiscoveredIdentity> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => scan_content(&content),
            Err(_) => Vec::new(),
        }
    }

    /// Whether `key_file` is the value of the first github-scoped
    /// `IdentityFile` directive. Compared by exact string equality; a
    /// missing file, block, or directive is false.
    pub fn is_active(&self, key_file: &str) -> bool {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => find_active_key(&content).as_deref() == Some(key_file),
            Err(_) => false,
        }
    }

    /// Install `key_file` as the active github.com key, rewriting the config
    /// file in place. Lazily creates the file and its parent directory.
    pub fn set_active(&self, key_file: &str) -> Result<()> {
        let content = std::fs::read_to_string(&self.path).unwrap_or_default();
        let updated = apply_active(&content, key_file);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write with restricted permissions (owner read/write only)
        #[cfg(unix)]
        {
            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(updated.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&self.path, updated)?;
        }

        Ok(())
    }
}

/// Splits a config line into a lowercased keyword and its first
/// whitespace-delimited argument. Blank lines and comments yield None.
fn split_directive(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let keyword = parts.next()?.to_lowercase();
    let argument = parts.next()?.split_whitespace().next()?;
    Some((keyword, argument))
}

/// Scan state machine: track the current host pattern and the last
/// `IdentityFile` value seen since it, emitting one record per
/// github-scoped block. The last directive wins within a block, and the
/// final block is flushed at end of input (no `Host` line follows it).
pub fn scan_content(content: &str) -> Vec<DiscoveredIdentity> {
    let mut found = Vec::new();
    let mut current_host: Option<String> = None;
    let mut identity_file: Option<String> = None;

    for line in content.lines() {
        let Some((keyword, argument)) = split_directive(line) else {
            continue;
        };

        match keyword.as_str() {
            "host" => {
                flush_block(&mut found, current_host.as_deref(), &mut identity_file);
                current_host = Some(argument.to_string());
            }
            "identityfile" => {
                identity_file = Some(argument.to_string());
            }
            _ => {}
        }
    }

    flush_block(&mut found, current_host.as_deref(), &mut identity_file);
    found
}

fn flush_block(
    found: &mut Vec<DiscoveredIdentity>,
    current_host: Option<&str>,
    identity_file: &mut Option<String>,
) {
    if current_host == Some(TARGET_HOST) {
        if let Some(key_file) = identity_file.take() {
            found.push(DiscoveredIdentity::from_key_file(key_file));
        }
    }
    *identity_file = None;
}

/// Line index and value of the first `IdentityFile` directive that sits
/// inside a github-scoped block. Unlike `scan_content` this stops at the
/// first hit in the whole file; the two traversals are intentionally
/// different and must stay that way.
fn find_directive<'a>(lines: impl Iterator<Item = &'a str>) -> Option<(usize, String)> {
    let mut in_target_block = false;

    for (idx, line) in lines.enumerate() {
        let Some((keyword, argument)) = split_directive(line) else {
            continue;
        };

        match keyword.as_str() {
            "host" => in_target_block = argument == TARGET_HOST,
            "identityfile" if in_target_block => return Some((idx, argument.to_string())),
            _ => {}
        }
    }

    None
}

/// Key file named by the first github-scoped `IdentityFile` directive.
pub fn find_active_key(content: &str) -> Option<String> {
    find_directive(content.lines()).map(|(_, value)| value)
}

/// Rewrite the first github-scoped `IdentityFile` directive to `key_file`
/// (with fixed 4-space indentation), or append a fresh block at the end of
/// the document when no such directive exists. Every other line is
/// preserved verbatim. Idempotent: re-applying the same key is a no-op.
pub fn apply_active(content: &str, key_file: &str) -> String {
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let directive = format!("    IdentityFile {}", key_file);

    match find_directive(lines.iter().map(String::as_str)) {
        Some((idx, _)) => lines[idx] = directive,
        None => {
            lines.push(format!("Host {}", TARGET_HOST));
            lines.push(directive);
        }
    }

    lines.join("\n")
}
