use clap::{Parser, Subcommand};

/// wikinote - Embed toggling and research notes for wiki-linked vaults
///
/// # Quick Reference
///
/// ## Embed Toggle
///
/// ```bash
/// wikinote toggle "Projects/todo.md"             # - [ ] [[Idea]]  ->  - [ ] ![[Idea]]
/// wikinote toggle "Projects/todo.md" --unembed   # - [ ] ![[Idea]] ->  - [ ] [[Idea]]
/// ```
///
/// Only task lines of the form `- [ ] [[target]]` / `- [x] ![[target]]` are
/// rewritten; every other line is left byte-for-byte as it was.
///
/// ## Research Notes
///
/// ```bash
/// wikinote create --selection "My Note
/// Body text"                                   # -> Research/My Note.md
/// wikinote create --title "Better Title" <<EOF
/// Original first line
/// Details...
/// EOF
/// wikinote check "Bad/Name"                    # Validate a title
/// ```
///
/// The first line of the selection becomes the title. Titles may not contain
/// any of `/ \ ? % * : | " < >`, and an existing note is never overwritten.
///
/// ## Settings
///
/// ```bash
/// wikinote settings                # Print mySetting
/// wikinote settings "new value"    # Set and save mySetting
/// ```
///
/// ## Environment Variables
///
/// - `WIKINOTE_VAULT`: Vault root (default: ~/.wikinote)
/// - `RUST_LOG`: Log filter (default: wikinote=info)
///
#[derive(Parser, Debug)]
#[command(name = "wikinote")]
#[command(version)]
#[command(about = "Embed toggling and research notes for wiki-linked vaults")]
pub struct Cli {
    /// Vault root directory (default: ~/.wikinote or $WIKINOTE_VAULT)
    #[arg(long, value_name = "PATH", global = true)]
    pub vault: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add or remove the embed marker on checklist links of a markdown file
    #[command(alias = "t")]
    Toggle {
        /// Markdown file (absolute, or relative to the current directory)
        file: String,

        /// Start the session with embedding disabled (removes markers)
        #[arg(long)]
        unembed: bool,
    },

    /// Create a research note from selected text
    #[command(alias = "c")]
    Create {
        /// Selected text (read from stdin if omitted or "-")
        #[arg(short, long)]
        selection: Option<String>,

        /// Replace the title taken from the first line
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Check whether a title is a valid note file name
    Check {
        /// Candidate title
        name: String,
    },

    /// Show or set the persisted setting
    Settings {
        /// New value for mySetting (prints the current value if omitted)
        value: Option<String>,
    },

    /// List the editor commands
    Commands,
}
