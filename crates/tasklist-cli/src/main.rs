use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::stdout;
use std::path::PathBuf;
use tasklist_config::Config;
use tasklist_engine::{Cmd, Document, Priority, load_document, render_to, save_document};

mod editor;

use editor::ItemEditor;

#[derive(Parser)]
#[command(name = "tasklist", version)]
#[command(about = "Keep task lists grouped under headings in a plain text file")]
struct Cli {
    /// Task list file (defaults to `tasks_path` from the config file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the task list in canonical form
    Show,
    /// Edit the items of a block interactively
    Edit {
        /// Heading of the block to edit (created if missing)
        name: String,
        /// Move the focused item to block TARGET when KEY is pressed
        #[arg(long, num_args = 2, value_names = ["KEY", "TARGET"])]
        bind_move: Option<Vec<String>>,
    },
    /// Append the items of SOURCE to DEST
    Copy { source: String, dest: String },
    /// Move the items of SOURCE to DEST
    Move { source: String, dest: String },
    /// Update every item of a block
    Set {
        name: String,
        /// Mark every item as done
        #[arg(long, overrides_with = "no_checked")]
        checked: bool,
        /// Mark every item as not done
        #[arg(long, overrides_with = "checked")]
        no_checked: bool,
        /// New priority: a, b, c or none
        #[arg(long, value_parser = parse_priority)]
        priority: Option<Priority>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if cli.file.is_some() => {
            log::warn!("Ignoring config file: {e}");
            None
        }
        Err(e) => return Err(e).context("Failed to load config file"),
    };

    let path = resolve_tasks_path(cli.file, config.as_ref())?;
    log::info!("Using task list {}", path.display());

    let mut doc =
        load_document(&path).with_context(|| format!("Failed to load {}", path.display()))?;

    match cli.command {
        Command::Show => {
            render_to(&doc, stdout().lock())?;
            return Ok(());
        }
        Command::Edit { name, bind_move } => {
            let binding = match bind_move {
                Some(values) => Some(parse_move_binding(&values)?),
                None => config
                    .as_ref()
                    .and_then(|c| c.editor.move_binding())
                    .map(|(key, target)| (key, target.to_string())),
            };
            edit_block(&mut doc, &name, binding)?;
        }
        Command::Copy { source, dest } => apply(&mut doc, Cmd::Copy { source, dest }),
        Command::Move { source, dest } => apply(&mut doc, Cmd::Move { source, dest }),
        Command::Set {
            name,
            checked,
            no_checked,
            priority,
        } => apply(
            &mut doc,
            Cmd::Set {
                name,
                checked: checked_flag(checked, no_checked),
                priority,
            },
        ),
    }

    save_document(&path, &doc).with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}

fn apply(doc: &mut Document, cmd: Cmd) {
    let outcome = doc.apply(cmd);
    log::info!("{} items affected", outcome.affected);
}

fn edit_block(doc: &mut Document, name: &str, binding: Option<(char, String)>) -> Result<()> {
    let items = doc.get_or_insert_block(name).items.clone();
    let mut item_editor = ItemEditor::new(name, items, binding.as_ref().map(|(key, _)| *key));

    editor::run(&mut item_editor).context("Editor failed")?;

    let (items, moved) = item_editor.into_items();
    doc.apply(Cmd::ReplaceItems {
        name: name.to_string(),
        items,
    });
    if let Some((_, target)) = binding {
        doc.apply(Cmd::AppendItems {
            name: target,
            items: moved,
        });
    }
    Ok(())
}

fn resolve_tasks_path(file: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file);
    }
    match config {
        Some(config) => Ok(config.tasks_path.clone()),
        None => bail!(
            "No task list given. Pass --file or set tasks_path in {}",
            Config::config_path().display()
        ),
    }
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(Priority::None);
    }
    Priority::from_token(s)
        .ok_or_else(|| format!("invalid priority `{s}`; expected a, b, c or none"))
}

fn parse_move_binding(values: &[String]) -> Result<(char, String)> {
    let [key, target] = values else {
        bail!("--bind-move takes a KEY and a TARGET");
    };
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Ok((key, target.clone())),
        _ => bail!("move key must be a single character, got `{key}`"),
    }
}

fn checked_flag(checked: bool, no_checked: bool) -> Option<bool> {
    match (checked, no_checked) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
