//! `privman config`: get and set tool options.

use crate::{PrivmanContext, output};
use anyhow::Result;
use colored::Colorize;

/// Gets, sets, unsets, or lists configuration values.
///
/// # Errors
///
/// Returns an error if setting or unsetting fails, or the config cannot be
/// saved.
pub fn execute(
    ctx: &mut PrivmanContext,
    key: Option<&str>,
    value: Option<String>,
    unset: bool,
    list: bool,
) -> Result<()> {
    if list || key.is_none() {
        show_all_config(ctx);
        return Ok(());
    }

    let key =
        key.ok_or_else(|| anyhow::anyhow!("Key must be provided when not using --list flag"))?;

    if unset {
        ctx.config.unset(key)?;
        ctx.config.save(&ctx.config_path)?;
        output::success(&format!("Unset {key}"));
    } else if let Some(val) = value {
        ctx.config.set(key, &val)?;
        ctx.config.save(&ctx.config_path)?;
        output::success(&format!("Set {key} = {val}"));
    } else if let Some(val) = ctx.config.get(key) {
        println!("{val}");
    } else {
        output::warning(&format!("Configuration key '{key}' is not set"));
    }

    Ok(())
}

/// Show all configuration values.
fn show_all_config(ctx: &PrivmanContext) {
    println!("{}", "[check]".bold());
    println!("  strict = {}", ctx.config.check.strict);

    println!("\n{}", "[catalog]".bold());
    println!("  allow_unknown = {}", ctx.config.catalog.allow_unknown);
}
