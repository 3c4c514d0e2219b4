use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use roster::api::RosterApi;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::StudentDraft;
use roster::outcome::{CmdMessage, CmdResult, MessageLevel, StudentRow};
use roster::store::fs::FileStore;
use roster::validate::ValidationErrors;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    api: RosterApi<FileStore>,
    config: RosterConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            id,
            email,
            contact,
        }) => handle_add(&mut ctx, name, id, email, contact),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::Edit {
            id,
            name,
            new_id,
            email,
            contact,
        }) => handle_edit(&mut ctx, id, name, new_id, email, contact),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "roster=debug" } else { "roster=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    // An unreadable config must not lock the user out of the commands
    // that could repair it.
    let config = RosterConfig::load(&data_dir).unwrap_or_else(|err| {
        warn!(error = %err, "could not read config, using defaults");
        RosterConfig::default()
    });
    let store = FileStore::new(data_dir.clone(), &config.data_file);
    let api = RosterApi::open(store);
    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

/// `ROSTER_HOME` overrides the platform data directory (tests point it
/// at a temp dir).
fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("ROSTER_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "roster", "roster")
        .ok_or_else(|| RosterError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    id: String,
    email: String,
    contact: String,
) -> Result<()> {
    let draft = StudentDraft::new(&name, &id, &email, &contact);
    let result = ctx.api.submit(draft);
    finish(result)
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list(search.as_deref().unwrap_or(""));
    print_students(&result.rows);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: String,
    name: Option<String>,
    new_id: Option<String>,
    email: Option<String>,
    contact: Option<String>,
) -> Result<()> {
    let current = ctx.api.begin_edit(&id)?;
    let draft = StudentDraft::new(
        name.as_deref().unwrap_or(&current.name),
        new_id.as_deref().unwrap_or(&current.id),
        email.as_deref().unwrap_or(&current.email),
        contact.as_deref().unwrap_or(&current.contact),
    );
    let result = ctx.api.submit(draft);
    if result.errors.is_some() {
        ctx.api.cancel();
    }
    finish(result)
}

fn handle_delete(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    let student = ctx
        .api
        .find(&id)
        .cloned()
        .ok_or_else(|| RosterError::StudentNotFound(id.clone()))?;

    if !yes && !confirm(&format!("Delete {} (ID {})?", student.name, student.id))? {
        print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let result = ctx.api.delete(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let prompt = format!(
        "Are you sure you want to clear all {} student record(s)?",
        ctx.api.len()
    );
    if !yes && !confirm(&prompt)? {
        print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let result = ctx.api.clear_all();
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file));
    let result = ctx.api.export(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in RosterConfig::keys() {
                if let Some(val) = ctx.config.get(key) {
                    println!("{} = {}", key, val);
                }
            }
            Ok(())
        }
        (Some(key), None) => {
            let val = ctx
                .config
                .get(&key)
                .ok_or_else(|| RosterError::Api(format!("Unknown config key: {}", key)))?;
            println!("{}", val);
            Ok(())
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            let display_val = ctx.config.get(&key).unwrap_or(value);
            println!("{}", format!("{} set to {}", key, display_val).green());
            Ok(())
        }
    }
}

/// Shared submit epilogue. Field errors go to stderr and turn into a
/// nonzero exit; everything else prints normally.
fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if let Some(errors) = &result.errors {
        print_field_errors(errors);
        return Err(RosterError::Api("Validation failed".to_string()));
    }
    Ok(())
}

/// Prompts on stdout and reads one line; only an explicit yes proceeds.
/// A closed stdin counts as no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().map_err(RosterError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(RosterError::Io)?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_field_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        eprintln!("{}", format!("{}: {}", field, message).red());
    }
}

const HEADERS: [&str; 5] = ["#", "Student Name", "Student ID", "Email", "Contact Number"];
const COLUMN_GAP: &str = "  ";

fn print_students(rows: &[StudentRow]) {
    if rows.is_empty() {
        println!("No students found.");
        return;
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.position.to_string(),
                row.student.name.clone(),
                row.student.id.clone(),
                row.student.email.clone(),
                row.student.contact.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    println!("{}", format_row(&HEADERS.map(String::from), &widths).bold());
    for row in &cells {
        println!("{}", format_row(row, &widths));
    }
}

fn format_row(cells: &[String; 5], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            let padding = widths[i].saturating_sub(cell.width());
            line.push_str(&" ".repeat(padding));
            line.push_str(COLUMN_GAP);
        }
    }
    line
}
