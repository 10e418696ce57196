use crate::git::patch_author_config;
use crate::identity::{self, Reconciler};
use crate::ssh_config::SshConfigEngine;
use crate::store::IdentityStore;
use crate::{GhidError, Result};

/// Make an identity's key the active one for github.com, then patch the
/// current repository's commit author when the record carries metadata.
pub fn execute(name: String) -> Result<()> {
    let store = IdentityStore::load()?;
    let engine = SshConfigEngine::default_location()?;
    let reconciler = Reconciler::new(&engine);
    let identities = reconciler.refresh(&store.identities);

    let target = identities
        .iter()
        .find(|id| id.name == name)
        .ok_or_else(|| GhidError::IdentityNotFound(name.clone()))?;

    engine.set_active(&target.key_file)?;
    println!("Active github.com key is now {}", target.key_file);

    if let Some((git_name, git_email)) =
        identity::resolve_author_metadata(&target.key_file, &identities)
    {
        let cwd = std::env::current_dir()?;
        if patch_author_config(&cwd, &git_name, &git_email)? {
            println!("Repository author set to {} <{}>", git_name, git_email);
        }
    }

    Ok(())
}
