mod auth;
mod book;
mod catalog;
mod cli;
mod commands;
mod config;
mod editor;
mod gateway;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let server = cli.server.as_deref();

    match cli.command {
        Commands::List {
            query,
            genre,
            sort,
            direction,
            json,
        } => {
            commands::list::run(
                query.as_deref(),
                genre.as_deref(),
                sort,
                direction,
                json,
                server,
                cli.quiet,
            )?;
        }
        Commands::Show { id, json, field } => {
            commands::show::run(&id, json, field.as_deref(), server, cli.quiet)?;
        }
        Commands::Add {
            title,
            author,
            genre,
            year,
            isbn,
            cover,
            description,
        } => {
            commands::add::run(
                &title,
                &author,
                &genre,
                year,
                &isbn,
                cover.as_deref(),
                description.as_deref(),
                server,
                cli.quiet,
            )?;
        }
        Commands::Edit { id, yes } => {
            commands::edit::run(&id, yes, server, cli.quiet)?;
        }
        Commands::Rm { id, yes } => {
            commands::rm::run(&id, yes, server, cli.quiet)?;
        }
        Commands::Genres => {
            commands::genres::run()?;
        }
        Commands::Login { email, password } => {
            commands::login::run(email.as_deref(), password.as_deref(), server)?;
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            commands::register::run(name.as_deref(), email.as_deref(), password.as_deref(), server)?;
        }
        Commands::Logout => {
            commands::logout::run(server)?;
        }
        Commands::Whoami { json } => {
            commands::whoami::run(json, server)?;
        }
        Commands::Init { force } => {
            commands::init::run(force)?;
        }
    }

    Ok(())
}
