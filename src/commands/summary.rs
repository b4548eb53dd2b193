//! `privman summary`: privacy-label style roll-up of the manifest.

use crate::summary::{summarize_api_types, summarize_categories};
use crate::{PrivmanContext, output};
use anyhow::Result;
use colored::Colorize;

/// Prints the warnings, tracking status, and the three data-collection
/// category groups, in the style of an App Store privacy label.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
pub fn execute(ctx: &PrivmanContext) -> Result<()> {
    let store = ctx.load_store()?;
    let manifest = store.manifest();

    super::report_warnings(&store);

    println!("{}", "Summary".bold());
    println!();
    if manifest.privacy_tracking {
        println!("The app or 3rd-party SDK indicates that it does use data for tracking.");
    } else {
        println!("The app or 3rd-party SDK indicates that it does not use data for tracking.");
    }

    match manifest.tracking_domains.len() {
        0 => {}
        1 => println!("There is an Internet domain engaged in tracking."),
        n => println!("There are {n} Internet domains engaged in tracking."),
    }

    let categories = summarize_categories(manifest);
    if !categories.tracking.is_empty() {
        println!();
        println!("{}", "Data Used to Track You".bold());
        for category in &categories.tracking {
            println!("  {}", category.display_name());
        }
    }
    if !categories.linked.is_empty() {
        println!();
        println!("{}", "Data Linked to You".bold());
        for category in &categories.linked {
            println!("  {}", category.display_name());
        }
    }
    if !categories.not_linked.is_empty() {
        println!();
        println!("{}", "Data Not Linked to You".bold());
        for category in &categories.not_linked {
            println!("  {}", category.display_name());
        }
    }
    if categories.is_empty() {
        println!();
        output::info("No data collection declared");
    }

    let apis = summarize_api_types(manifest);
    if !apis.is_empty() {
        println!();
        println!("{}", "Required-reason APIs".bold());
        for api in apis {
            println!("  {}", api.name);
        }
    }

    Ok(())
}
