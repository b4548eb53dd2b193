//! `privman data`: manage collected data types.

use crate::manifest::CollectedDataType;
use crate::{PrivmanContext, catalog, output};
use anyhow::Result;
use colored::Colorize;

/// Adds or replaces a collected data type.
///
/// # Errors
///
/// Returns an error on load/save failure, or for unknown keys when
/// `catalog.allow_unknown` is off.
pub fn add(
    ctx: &PrivmanContext,
    data_type: &str,
    linked: bool,
    tracking: bool,
    purposes: &[String],
) -> Result<()> {
    let key = super::resolve_data_type_key(ctx, data_type)?;

    let mut entry = CollectedDataType::new(key.clone());
    entry.is_linked = linked;
    entry.is_tracking = tracking;
    for purpose in purposes {
        entry.purposes.insert(super::resolve_purpose_key(ctx, purpose)?);
    }

    let mut store = ctx.load_store()?;
    let created = store.upsert_data_type(entry);
    super::save_and_report(ctx, &store)?;

    if created {
        output::success(&format!("Added collected data type {key}"));
    } else {
        output::success(&format!("Replaced collected data type {key}"));
    }
    Ok(())
}

/// Edits an existing collected data type in place.
///
/// # Errors
///
/// Returns an error if the entry does not exist, or on load/save failure.
#[allow(clippy::fn_params_excessive_bools)]
pub fn set(
    ctx: &PrivmanContext,
    data_type: &str,
    linked: Option<bool>,
    tracking: Option<bool>,
    add_purposes: &[String],
    remove_purposes: &[String],
    clear_purposes: bool,
) -> Result<()> {
    let key = super::resolve_data_type_key(ctx, data_type)?;

    let mut resolved_add = Vec::new();
    for purpose in add_purposes {
        resolved_add.push(super::resolve_purpose_key(ctx, purpose)?);
    }
    let mut resolved_remove = Vec::new();
    for purpose in remove_purposes {
        resolved_remove.push(super::resolve_purpose_key(ctx, purpose)?);
    }

    let mut store = ctx.load_store()?;
    let found = store.update_data_type(&key, |entry| {
        if let Some(linked) = linked {
            entry.is_linked = linked;
        }
        if let Some(tracking) = tracking {
            entry.is_tracking = tracking;
        }
        if clear_purposes {
            entry.purposes.clear();
        }
        for purpose in resolved_add {
            entry.purposes.insert(purpose);
        }
        for purpose in &resolved_remove {
            entry.purposes.remove(purpose);
        }
    });
    if !found {
        return Err(anyhow::anyhow!(
            "No collected data type {key} declared (use 'privman data add')"
        ));
    }

    super::save_and_report(ctx, &store)?;
    output::success(&format!("Updated collected data type {key}"));
    Ok(())
}

/// Removes a collected data type.
///
/// # Errors
///
/// Returns an error if the entry does not exist, or on load/save failure.
pub fn remove(ctx: &PrivmanContext, data_type: &str) -> Result<()> {
    let key = super::resolve_data_type_key(ctx, data_type)?;

    let mut store = ctx.load_store()?;
    if store.remove_data_type(&key).is_none() {
        return Err(anyhow::anyhow!("No collected data type {key} declared"));
    }
    super::save_and_report(ctx, &store)?;
    output::success(&format!("Removed collected data type {key}"));
    Ok(())
}

/// Lists declared collected data types with their flags and purposes.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
pub fn list(ctx: &PrivmanContext) -> Result<()> {
    let store = ctx.load_store()?;
    if store.data_types().is_empty() {
        output::info("No collected data types declared");
        return Ok(());
    }

    println!("{}", "Collected data types:".bold());
    for (key, entry) in store.data_types() {
        let mut flags = Vec::new();
        if entry.is_linked {
            flags.push("linked");
        }
        if entry.is_tracking {
            flags.push("tracking");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!("  {}{}", catalog::short_key(key).bold(), flags);

        if entry.purposes.is_empty() {
            println!("    {}", "no purposes".yellow());
        } else {
            let purposes: Vec<_> = entry
                .purposes
                .iter()
                .map(|p| catalog::short_key(p))
                .collect();
            println!("    purposes: {}", purposes.join(", "));
        }
    }
    Ok(())
}
