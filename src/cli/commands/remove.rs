use crate::store::IdentityStore;
use crate::ui;
use crate::{GhidError, Result};

pub fn execute(name: String, force: bool) -> Result<()> {
    let mut store = IdentityStore::load()?;

    if store.find(&name).is_none() {
        return Err(GhidError::IdentityNotFound(name));
    }

    if !force {
        let confirmed = ui::confirm(&format!(
            "Are you sure you want to delete identity '{}'?",
            name
        ))?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.remove(&name);
    store.save()?;

    println!("Identity '{}' deleted.", name);
    Ok(())
}
