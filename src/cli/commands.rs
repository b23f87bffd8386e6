use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notekeep")]
#[command(version, about = "Keep tagged markdown notes in the current project")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notekeep project in the current directory
    Init,

    /// Create a note
    Add {
        /// Note title
        title: String,

        /// Markdown body
        #[arg(long, short = 'b', conflicts_with = "stdin")]
        body: Option<String>,

        /// Read the body from stdin
        #[arg(long)]
        stdin: bool,

        /// Tag labels; unknown labels are created (can be specified multiple times)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes, optionally filtered
    List {
        /// Query words; "tag:<label>" requires a tag, other words match the title
        #[arg(value_name = "QUERY")]
        query: Vec<String>,

        /// Title substring (case-insensitive); use instead of plain query words
        #[arg(long, conflicts_with = "query")]
        title: Option<String>,

        /// Required tag labels (can be specified multiple times)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Get {
        /// Note id or unique id prefix
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a note
    Update {
        /// Note id or unique id prefix
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New markdown body
        #[arg(long, short = 'b', conflicts_with = "stdin")]
        body: Option<String>,

        /// Read the new body from stdin
        #[arg(long)]
        stdin: bool,

        /// Replace the note's tags with these labels (can be specified multiple times)
        #[arg(long = "tag", short = 't', conflicts_with = "clear_tags")]
        tags: Vec<String>,

        /// Remove every tag from the note
        #[arg(long)]
        clear_tags: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note id or unique id prefix
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage tags
    Tag(TagCommand),
}

#[derive(Args, Debug)]
pub struct TagCommand {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Subcommand, Debug)]
pub enum TagAction {
    /// Add a tag
    Add {
        label: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tags
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename a tag
    Rename {
        /// Tag id, id prefix or current label
        tag: String,

        /// New label
        label: String,
    },

    /// Delete a tag; it stops showing on every note
    Delete {
        /// Tag id, id prefix or label
        tag: String,
    },
}
