use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::config::Config;
use crate::entity::{short_id, NoteData, ResolvedNote, Tag};
use crate::error::{NotekeepError, Result};
use crate::notebook::Notebook;
use crate::search::{find_by_label, parse_query};
use crate::storage::{FileStore, NOTEKEEP_DIR};

/// Find the project root by looking for .notekeep/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(NOTEKEEP_DIR).is_dir() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_notebook() -> Result<(Notebook<FileStore>, Config)> {
    let root = find_project_root();
    let store = FileStore::open(&root)?;
    let config = Config::load(store.dir());
    let notebook = Notebook::load_with(store, &config)?;
    Ok((notebook, config))
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Trimmed label, or an error if nothing is left
fn clean_label(label: &str) -> Result<&str> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(NotekeepError::InvalidLabel(label.to_string()));
    }
    Ok(trimmed)
}

/// Find-or-create each label, dropping repeats
fn tags_for_labels(notebook: &mut Notebook<FileStore>, labels: &[String]) -> Result<Vec<Tag>> {
    let mut tags: Vec<Tag> = Vec::new();
    for label in labels {
        let label = clean_label(label)?;
        let tag = notebook.tag_for_label(label)?;
        if !tags.iter().any(|t| t.id == tag.id) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

fn print_note_line(note: &ResolvedNote) {
    if note.tags.is_empty() {
        println!("  {}  {}", short_id(&note.id), note.title);
    } else {
        println!(
            "  {}  {}  [{}]",
            short_id(&note.id),
            note.title,
            note.labels().join(", ")
        );
    }
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let store = FileStore::init(&root)?;
    let config = Config::default();
    config.save(store.dir())?;

    let mut notebook = Notebook::load_with(store, &config)?;
    notebook.save()?;

    println!("Initialized notekeep project in {}", root.display());
    Ok(())
}

pub fn handle_add(
    title: String,
    body: Option<String>,
    stdin: bool,
    tags: Vec<String>,
    json: bool,
) -> Result<()> {
    let (mut notebook, _) = open_notebook()?;

    let body = if stdin {
        read_stdin()?
    } else {
        body.unwrap_or_default()
    };
    let tags = tags_for_labels(&mut notebook, &tags)?;

    let id = notebook.create_note(NoteData::new(title, body, tags))?;
    let note = notebook
        .resolved_note(&id)
        .ok_or_else(|| NotekeepError::Storage("Failed to retrieve created note".to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", short_id(&note.id), note.title);
    }

    Ok(())
}

pub fn handle_list(
    query: Vec<String>,
    title: Option<String>,
    tags: Vec<String>,
    json: bool,
) -> Result<()> {
    let (notebook, _) = open_notebook()?;

    let (mut filter, unknown) = parse_query(&query.join(" "), notebook.tags());
    if let Some(label) = unknown.into_iter().next() {
        return Err(NotekeepError::TagNotFound(label));
    }
    if let Some(title) = title {
        filter.title = title;
    }
    for label in &tags {
        let label = clean_label(label)?;
        let tag = find_by_label(notebook.tags(), label)
            .ok_or_else(|| NotekeepError::TagNotFound(label.to_string()))?;
        if !filter.tag_ids.contains(&tag.id) {
            filter.tag_ids.push(tag.id.clone());
        }
    }

    let notes = notebook.filter(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    if notebook.notes().is_empty() {
        println!("No notes yet. Create one with 'notekeep add <title>'.");
    } else if notes.is_empty() {
        if filter.is_active() {
            println!("No notes match your filters.");
        } else {
            println!("No notes found.");
        }
    } else {
        println!("Notes:");
        for note in &notes {
            print_note_line(note);
        }
    }

    Ok(())
}

pub fn handle_get(id: String, json: bool) -> Result<()> {
    let (notebook, _) = open_notebook()?;

    let stored_id = notebook.find_note(&id)?.id.clone();
    let note = notebook
        .resolved_note(&stored_id)
        .ok_or(NotekeepError::NoteNotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("{} ({})", note.title, short_id(&note.id));
        if !note.tags.is_empty() {
            println!("Tags: {}", note.labels().join(", "));
        }
        if !note.body.is_empty() {
            println!();
            println!("{}", note.body);
        }
    }

    Ok(())
}

pub fn handle_update(
    id: String,
    title: Option<String>,
    body: Option<String>,
    stdin: bool,
    tags: Vec<String>,
    clear_tags: bool,
    json: bool,
) -> Result<()> {
    let (mut notebook, _) = open_notebook()?;

    let stored_id = notebook.find_note(&id)?.id.clone();
    let current = notebook
        .resolved_note(&stored_id)
        .ok_or_else(|| NotekeepError::NoteNotFound(id.clone()))?;

    let body = if stdin {
        read_stdin()?
    } else {
        body.unwrap_or(current.body)
    };
    // Untouched tags are carried over resolved, which drops dangling ids
    let tags = if clear_tags {
        Vec::new()
    } else if !tags.is_empty() {
        tags_for_labels(&mut notebook, &tags)?
    } else {
        current.tags
    };
    let data = NoteData::new(title.unwrap_or(current.title), body, tags);

    if !notebook.update_note(&stored_id, data)? {
        return Err(NotekeepError::NoteNotFound(id));
    }

    let updated = notebook
        .resolved_note(&stored_id)
        .ok_or_else(|| NotekeepError::Storage("Failed to retrieve updated note".to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("Updated note ({}) - {}", short_id(&updated.id), updated.title);
    }

    Ok(())
}

pub fn handle_delete(id: String, force: bool) -> Result<()> {
    let (mut notebook, config) = open_notebook()?;

    let note = notebook.find_note(&id)?.clone();

    // Confirm deletion unless --force is used
    if config.confirm_delete && !force {
        eprintln!(
            "Delete note ({}) - {}? [y/N] ",
            short_id(&note.id),
            note.title
        );

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(NotekeepError::Storage(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    notebook.delete_note(&note.id)?;

    println!("Deleted note ({}) - {}", short_id(&note.id), note.title);
    Ok(())
}

pub fn handle_tag_add(label: String, json: bool) -> Result<()> {
    let (mut notebook, _) = open_notebook()?;

    let label = clean_label(&label)?;
    let tag = notebook.add_tag(label)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tag)?);
    } else {
        println!("Added tag ({}) - {}", short_id(&tag.id), tag.label);
    }
    Ok(())
}

pub fn handle_tag_list(json: bool) -> Result<()> {
    let (notebook, _) = open_notebook()?;

    if json {
        println!("{}", serde_json::to_string_pretty(notebook.tags())?);
        return Ok(());
    }

    if notebook.tags().is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    let resolved = notebook.resolved_notes();
    println!("Tags:");
    for tag in notebook.tags() {
        let count = resolved.iter().filter(|n| n.has_tag(&tag.id)).count();
        println!("  {}  {} ({})", short_id(&tag.id), tag.label, count);
    }
    Ok(())
}

pub fn handle_tag_rename(tag: String, label: String) -> Result<()> {
    let (mut notebook, _) = open_notebook()?;

    let label = clean_label(&label)?;
    let existing = notebook.find_tag(&tag)?.clone();
    notebook.rename_tag(&existing.id, label)?;

    println!(
        "Renamed tag ({}) - {} -> {}",
        short_id(&existing.id),
        existing.label,
        label
    );
    Ok(())
}

pub fn handle_tag_delete(tag: String) -> Result<()> {
    let (mut notebook, _) = open_notebook()?;

    let existing = notebook.find_tag(&tag)?.clone();
    notebook.delete_tag(&existing.id)?;

    println!(
        "Deleted tag ({}) - {}",
        short_id(&existing.id),
        existing.label
    );
    Ok(())
}
