use autoreplace::api::{AutoreplaceApi, CmdMessage, ListedPattern, MessageLevel};
use autoreplace::document::FileDocument;
use autoreplace::engine::CursorAdvance;
use autoreplace::error::{AutoreplaceError, Result};
use autoreplace::model::Pattern;
use autoreplace::store::fs::FileStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::Read;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(config_dir(&cli)?);
    let mut api = AutoreplaceApi::open(store)?;

    match cli.command {
        Some(Commands::Add {
            source,
            replacement,
        }) => handle_add(&mut api, source, replacement),
        Some(Commands::Update {
            index,
            source,
            replacement,
        }) => handle_update(&mut api, index, source, replacement),
        Some(Commands::Remove { index }) => handle_remove(&mut api, index),
        Some(Commands::Apply {
            files,
            intuitive_cursor,
        }) => handle_apply(&api, files, intuitive_cursor),
        Some(Commands::List) | None => handle_list(&api),
    }
}

fn config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config {
        return Ok(dir.clone());
    }
    let proj_dirs = ProjectDirs::from("com", "autoreplace", "autoreplace")
        .ok_or_else(|| AutoreplaceError::Store("Could not determine config dir".to_string()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

fn handle_add(
    api: &mut AutoreplaceApi<FileStore>,
    source: String,
    replacement: String,
) -> Result<()> {
    let result = api.add_pattern(Pattern::new(source, replacement))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    api: &mut AutoreplaceApi<FileStore>,
    index: usize,
    source: String,
    replacement: String,
) -> Result<()> {
    let result = api.update_pattern(index, Pattern::new(source, replacement))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(api: &mut AutoreplaceApi<FileStore>, index: usize) -> Result<()> {
    let result = api.remove_pattern(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &AutoreplaceApi<FileStore>) -> Result<()> {
    let result = api.list_patterns()?;
    print_patterns(&result.listed_patterns);
    print_messages(&result.messages);
    Ok(())
}

fn handle_apply(
    api: &AutoreplaceApi<FileStore>,
    files: Vec<PathBuf>,
    intuitive_cursor: bool,
) -> Result<()> {
    let cursor = if intuitive_cursor {
        CursorAdvance::Intuitive
    } else {
        CursorAdvance::Legacy
    };

    if files.is_empty() {
        // Pipe mode: the rewritten document goes to stdout, so the count
        // notice goes to stderr.
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(AutoreplaceError::Io)?;
        let outcome = api.apply_text(&text, cursor);
        print!("{}", outcome.text);
        eprintln!("Autoreplace: {} items replaced.", outcome.count);
        return Ok(());
    }

    for file in files {
        let mut doc = FileDocument::new(file);
        let result = api.apply_to(&mut doc, cursor)?;
        let prefixed: Vec<CmdMessage> = result
            .messages
            .iter()
            .map(|m| CmdMessage {
                level: m.level.clone(),
                content: format!("{}: {}", doc.path().display(), m.content),
            })
            .collect();
        print_messages(&prefixed);
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_patterns(patterns: &[ListedPattern]) {
    if patterns.is_empty() {
        println!("No patterns configured.");
        return;
    }

    for lp in patterns {
        let row = format!(
            "{} {:?} -> {:?}",
            lp.index.to_string().yellow(),
            lp.pattern.source,
            lp.pattern.replacement
        );
        if lp.pattern.is_active() {
            println!("{}", row);
        } else {
            println!("{} {}", row, "(placeholder)".dimmed());
        }
    }
}
