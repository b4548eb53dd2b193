//! Binary entry point: argument parsing, logging setup, command dispatch.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Generator, generate};
use colored::Colorize;
use privman::cli::{ApiAction, CatalogAction, Cli, Commands, DataAction, DomainAction, TrackingToggle};
use privman::{PrivmanContext, commands, output};
use std::io;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

/// Parses arguments, builds the context, and dispatches to a command.
fn run() -> Result<()> {
    let cli = <Cli as clap::Parser>::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if cli.quiet {
        output::set_verbosity(output::Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(output::Verbosity::Verbose);
    }

    // Completion needs no context (and must not create a config file).
    if let Commands::Completion { shell } = &cli.command {
        print_completions(*shell, &mut Cli::command());
        return Ok(());
    }

    let mut ctx = PrivmanContext::new(cli.file)?;

    match cli.command {
        Commands::Init { force } => commands::init::execute(&ctx, force)?,
        Commands::Tracking { state } => {
            commands::tracking::execute(&ctx, state == TrackingToggle::On)?;
        }
        Commands::Domain { action } => match action {
            DomainAction::Add { domains } => commands::domain::add(&ctx, &domains)?,
            DomainAction::Remove { domains } => commands::domain::remove(&ctx, &domains)?,
            DomainAction::List => commands::domain::list(&ctx)?,
        },
        Commands::Data { action } => match action {
            DataAction::Add {
                data_type,
                linked,
                tracking,
                purposes,
            } => commands::data::add(&ctx, &data_type, linked, tracking, &purposes)?,
            DataAction::Set {
                data_type,
                linked,
                tracking,
                add_purposes,
                remove_purposes,
                clear_purposes,
            } => commands::data::set(
                &ctx,
                &data_type,
                linked,
                tracking,
                &add_purposes,
                &remove_purposes,
                clear_purposes,
            )?,
            DataAction::Remove { data_type } => commands::data::remove(&ctx, &data_type)?,
            DataAction::List => commands::data::list(&ctx)?,
        },
        Commands::Api { action } => match action {
            ApiAction::Add { api_type, reasons } => {
                commands::api::add(&ctx, &api_type, &reasons)?;
            }
            ApiAction::Remove { api_type } => commands::api::remove(&ctx, &api_type)?,
            ApiAction::List => commands::api::list(&ctx)?,
        },
        Commands::Check { strict } => commands::check::execute(&ctx, strict)?,
        Commands::Summary => commands::summary::execute(&ctx)?,
        Commands::Show => commands::show::execute(&ctx)?,
        Commands::Import { path } => commands::import::execute(&ctx, &path)?,
        Commands::Export { path } => commands::export::execute(&ctx, path.as_deref())?,
        Commands::Catalog { action } => match action {
            CatalogAction::DataTypes => commands::catalog::data_types()?,
            CatalogAction::Purposes => commands::catalog::purposes()?,
            CatalogAction::ApiTypes => commands::catalog::api_types()?,
        },
        Commands::Config {
            key,
            value,
            unset,
            list,
        } => commands::config::execute(&mut ctx, key.as_deref(), value, unset, list)?,
        Commands::Completion { .. } => unreachable!("handled before context creation"),
    }

    Ok(())
}

/// Writes shell completions for the given generator to stdout.
fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
