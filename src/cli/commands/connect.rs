use std::process::{Command, Stdio};

use crate::identity::{Identity, Reconciler};
use crate::ssh_config::{SshConfigEngine, DEFAULT_PORT};
use crate::store::IdentityStore;
use crate::{GhidError, Result};

pub fn execute(name: Option<String>) -> Result<()> {
    let store = IdentityStore::load()?;
    let engine = SshConfigEngine::default_location()?;
    let reconciler = Reconciler::new(&engine);
    let identities = reconciler.refresh(&store.identities);

    let target = match name {
        Some(name) => identities
            .iter()
            .find(|id| id.name == name)
            .ok_or(GhidError::IdentityNotFound(name))?,
        None => identities
            .iter()
            .find(|id| engine.is_active(&id.key_file))
            .ok_or(GhidError::NoActiveIdentity)?,
    };

    start_session(target)
}

fn start_session(identity: &Identity) -> Result<()> {
    let mut command = Command::new("ssh");
    command.arg("-i").arg(&identity.key_file);

    if identity.port_or_default() != DEFAULT_PORT {
        command.arg("-p").arg(identity.port_or_default().to_string());
    }

    let status = command
        .arg(format!("{}@{}", identity.user, identity.host))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| GhidError::SshCommand(e.to_string()))?;

    if !status.success() {
        return Err(GhidError::SshCommand(format!(
            "SSH session exited with code: {:?}",
            status.code()
        )));
    }

    Ok(())
}
