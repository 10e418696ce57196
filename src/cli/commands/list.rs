use crate::identity::Reconciler;
use crate::ssh_config::SshConfigEngine;
use crate::store::IdentityStore;
use crate::Result;

pub fn execute() -> Result<()> {
    let store = IdentityStore::load()?;
    let engine = SshConfigEngine::default_location()?;
    let reconciler = Reconciler::new(&engine);
    let identities = reconciler.refresh(&store.identities);

    if identities.is_empty() {
        println!("No identities found.");
        println!();
        println!("Use 'ghid add' to create one.");
        return Ok(());
    }

    println!(
        "{:<8} {:<20} {:<30} KEY FILE",
        "ACTIVE", "NAME", "AUTHOR"
    );
    println!("{}", "-".repeat(80));

    for identity in &identities {
        let view = reconciler.describe(identity);
        let marker = if view.active { "*" } else { "" };
        let author = match (&identity.git_name, &identity.git_email) {
            (Some(name), Some(email)) => format!("{} <{}>", name, email),
            (Some(name), None) => name.clone(),
            (None, Some(email)) => format!("<{}>", email),
            (None, None) => "-".to_string(),
        };

        println!(
            "{:<8} {:<20} {:<30} {}",
            marker, identity.name, author, identity.key_file
        );
    }

    println!();
    println!("Total: {} identity(ies)", identities.len());

    Ok(())
}
