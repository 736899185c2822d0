use crate::types::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Standardized yes/no prompt used by the interactive flows.
pub fn ask_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let choice = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default_yes)
        .show_default(true)
        .interact()?;
    Ok(choice)
}
