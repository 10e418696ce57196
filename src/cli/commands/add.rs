use crate::identity::Identity;
use crate::store::IdentityStore;
use crate::ui;
use crate::{GhidError, Result};

pub fn execute() -> Result<()> {
    let mut store = IdentityStore::load()?;

    let identity = match collect() {
        Ok(identity) => identity,
        Err(GhidError::Cancelled) => {
            println!("Cancelled.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let name = identity.name.clone();
    store.add(identity)?;
    store.save()?;

    println!("Identity '{}' added.", name);
    println!("Use 'ghid use {}' to make it the active one.", name);
    Ok(())
}

fn collect() -> Result<Identity> {
    let name = ui::input("Identity name")?;
    let key_file = ui::input("Private key file")?;
    let git_name = ui::input_optional("Commit author name (optional)", None)?;
    let git_email = ui::input_optional("Commit author email (optional)", None)?;

    Ok(Identity::managed(name, key_file, git_name, git_email))
}
