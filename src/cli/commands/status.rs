use crate::identity::Reconciler;
use crate::ssh_config::SshConfigEngine;
use crate::store::IdentityStore;
use crate::Result;

pub fn execute() -> Result<()> {
    let engine = SshConfigEngine::default_location()?;

    println!("Configuration:");
    println!();
    println!("SSH config:     {}", engine.path().display());
    println!("Identity store: {}", IdentityStore::file_path()?.display());

    let store = IdentityStore::load()?;
    let reconciler = Reconciler::new(&engine);
    let identities = reconciler.refresh(&store.identities);

    println!();
    match identities.iter().find(|id| engine.is_active(&id.key_file)) {
        Some(identity) => {
            let view = reconciler.describe(identity);
            println!("Active identity: {}", identity.name);
            println!("  {}", view.tooltip);
        }
        None => {
            println!("Active identity: none");
            println!();
            println!("Use 'ghid use <name>' to activate one.");
        }
    }

    Ok(())
}
