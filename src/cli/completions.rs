//! Shell completion generation and custom completers for dynamic values.

use clap::ValueEnum;
use clap_complete::engine::{CompletionCandidate, ValueCompleter};

use crate::identity;
use crate::ssh_config::SshConfigEngine;
use crate::store::IdentityStore;

/// Shell types for completion script generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

/// Completer for identity names from the merged managed + discovered view.
#[derive(Clone, Default)]
pub struct IdentityCompleter;

impl ValueCompleter for IdentityCompleter {
    fn complete(&self, _current: &std::ffi::OsStr) -> Vec<CompletionCandidate> {
        let Ok(store) = IdentityStore::load() else {
            return Vec::new();
        };
        let Ok(engine) = SshConfigEngine::default_location() else {
            return Vec::new();
        };

        identity::merge(&store.identities, engine.scan())
            .into_iter()
            .map(|id| CompletionCandidate::new(id.name))
            .collect()
    }
}
