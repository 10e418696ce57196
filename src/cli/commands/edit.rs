use crate::identity::Identity;
use crate::store::IdentityStore;
use crate::ui;
use crate::{GhidError, Result};

pub fn execute(name: String) -> Result<()> {
    let mut store = IdentityStore::load()?;

    let current = store
        .find(&name)
        .cloned()
        .ok_or_else(|| GhidError::IdentityNotFound(name.clone()))?;

    let updated = match collect(&current) {
        Ok(identity) => identity,
        Err(GhidError::Cancelled) => {
            println!("Cancelled.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    store.update(&name, updated)?;
    store.save()?;

    println!("Identity '{}' updated.", name);
    Ok(())
}

fn collect(current: &Identity) -> Result<Identity> {
    let name = ui::input_with_initial("Identity name", &current.name)?;
    let key_file = ui::input_with_initial("Private key file", &current.key_file)?;
    let git_name = ui::input_optional(
        "Commit author name (optional)",
        current.git_name.as_deref(),
    )?;
    let git_email = ui::input_optional(
        "Commit author email (optional)",
        current.git_email.as_deref(),
    )?;

    Ok(Identity {
        name,
        key_file,
        git_name,
        git_email,
        ..current.clone()
    })
}
