use clap::Parser;
use notekeep::cli::{
    handle_add, handle_delete, handle_get, handle_init, handle_list, handle_tag_add,
    handle_tag_delete, handle_tag_list, handle_tag_rename, handle_update, Cli, Commands,
    TagAction,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("NOTEKEEP_LOG").unwrap_or_else(|_| "notekeep=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Add {
            title,
            body,
            stdin,
            tags,
            json,
        } => handle_add(title, body, stdin, tags, json),
        Commands::List {
            query,
            title,
            tags,
            json,
        } => handle_list(query, title, tags, json),
        Commands::Get { id, json } => handle_get(id, json),
        Commands::Update {
            id,
            title,
            body,
            stdin,
            tags,
            clear_tags,
            json,
        } => handle_update(id, title, body, stdin, tags, clear_tags, json),
        Commands::Delete { id, force } => handle_delete(id, force),
        Commands::Tag(tag_cmd) => match tag_cmd.action {
            TagAction::Add { label, json } => handle_tag_add(label, json),
            TagAction::List { json } => handle_tag_list(json),
            TagAction::Rename { tag, label } => handle_tag_rename(tag, label),
            TagAction::Delete { tag } => handle_tag_delete(tag),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
