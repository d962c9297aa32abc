use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use treepick::config::Config;
use treepick::provider::{DirectoryProvider, FileProvider, FolderProvider, MailboxFixture};

/// treepick - check and uncheck nodes of a tree, subtree by subtree
#[derive(Parser, Debug)]
#[command(name = "treepick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: .treepick.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the tree comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Tree document (.json, .yaml, .yml or .toml)
    #[arg(long, value_name = "FILE")]
    pub tree: Option<PathBuf>,

    /// Directory to walk (ids are paths relative to it)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Built-in mailbox folder tree
    #[arg(long)]
    pub demo: bool,
}

impl SourceArgs {
    pub fn provider(&self, config: &Config) -> Box<dyn FolderProvider> {
        match (&self.tree, &self.dir) {
            (Some(path), _) => Box::new(FileProvider::new(path)),
            (None, Some(root)) => {
                Box::new(DirectoryProvider::new(root).with_options(config.directory_options()))
            }
            (None, None) => Box::new(MailboxFixture),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree with checkboxes
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Selection document to display
        #[arg(long, value_name = "FILE")]
        selection: Option<PathBuf>,

        /// Show only the top level
        #[arg(long)]
        collapsed: bool,
    },

    /// Report whether a node is checked
    Check {
        /// Node id
        node: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Selection document
        #[arg(long, value_name = "FILE")]
        selection: PathBuf,
    },

    /// Check or uncheck a node and its whole subtree
    Toggle {
        /// Node id
        node: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Check the subtree
        #[arg(long, conflicts_with = "off", required_unless_present = "off")]
        on: bool,

        /// Uncheck the subtree
        #[arg(long)]
        off: bool,

        /// Selection document (created if missing)
        #[arg(long, value_name = "FILE")]
        selection: PathBuf,

        /// Show the change without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// List the ids a toggle of this node would affect
    Ids {
        /// Node id
        node: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Choose interactively and save the selection
    Pick {
        #[command(flatten)]
        source: SourceArgs,

        /// Selection document (created if missing)
        #[arg(long, value_name = "FILE")]
        selection: PathBuf,

        /// Save without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Show { .. } => "show",
            Commands::Check { .. } => "check",
            Commands::Toggle { .. } => "toggle",
            Commands::Ids { .. } => "ids",
            Commands::Pick { .. } => "pick",
        }
    }
}
