//! Interactive prompt helpers. An interact failure (EOF, interrupt) maps to
//! `Cancelled`, which callers treat as a silent abort of the flow.

use dialoguer::{Confirm, Input};

use crate::{GhidError, Result};

pub fn input(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|_| GhidError::Cancelled)
}

pub fn input_with_initial(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .interact_text()
        .map_err(|_| GhidError::Cancelled)
}

/// Optional text input; an empty answer means "none".
pub fn input_optional(prompt: &str, initial: Option<&str>) -> Result<Option<String>> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }

    let value = input.interact_text().map_err(|_| GhidError::Cancelled)?;
    let value = value.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|_| GhidError::Cancelled)
}
