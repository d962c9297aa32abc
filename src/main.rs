//! treepick CLI - hierarchical checkbox selection
//!
//! Usage: treepick <COMMAND> (--tree FILE | --dir DIR | --demo)
//!
//! Commands:
//!   show    Render the tree with checkboxes
//!   check   Report whether a node is checked
//!   toggle  Check or uncheck a node and its whole subtree
//!   ids     List the ids a toggle of a node would affect
//!   pick    Choose interactively and save the selection

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use treepick::config::{load_or_default, Verbosity};
use treepick::ui::json::{emit_event, events::ErrorEvent};
use treepick::ui::terminal::TerminalCapabilities;
use treepick::ui::theme::Glyphs;
use treepick::TreepickError;

use cli::{Cli, Commands};
use commands::CommandContext;

/// Exit status when the user abandons a selection
const EXIT_ABORTED: i32 = 130;

fn main() {
    let cli = Cli::parse();
    let command = cli.command.name();
    let json = cli.json;

    if let Err(err) = run(cli) {
        print_error(&err, json, command);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = load_or_default(cli.config.as_deref(), Some(&cwd))?;
    init_logging(config.output.verbosity.with_flags(cli.verbose));

    let ctx = CommandContext::new(cli.command.name(), cli.json, config);
    ctx.defer_warnings(warnings.iter().map(ToString::to_string));

    let result = match cli.command {
        Commands::Show {
            source,
            selection,
            collapsed,
        } => commands::show::cmd_show(&ctx, &source, selection.as_deref(), collapsed),
        Commands::Check {
            node,
            source,
            selection,
        } => commands::check::cmd_check(&ctx, &source, &node, &selection),
        Commands::Toggle {
            node,
            source,
            on,
            off: _,
            selection,
            dry_run,
        } => commands::toggle::cmd_toggle(&ctx, &source, &node, on, &selection, dry_run),
        Commands::Ids { node, source } => commands::ids::cmd_ids(&ctx, &source, &node),
        Commands::Pick {
            source,
            selection,
            yes,
        } => commands::pick::cmd_pick(&ctx, &source, &selection, yes),
    };

    if result.is_err() {
        let _ = ctx.flush_warnings();
    }
    result
}

/// `RUST_LOG` wins over the verbosity level.
fn init_logging(verbosity: Verbosity) {
    let default = verbosity.level_filter().to_string().to_lowercase();
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

fn treepick_error(err: &anyhow::Error) -> Option<&TreepickError> {
    err.chain().find_map(|cause| cause.downcast_ref::<TreepickError>())
}

fn error_code(err: &anyhow::Error) -> &'static str {
    match treepick_error(err) {
        Some(TreepickError::Io(_)) => "IO",
        Some(TreepickError::Json(_)) => "INVALID_JSON",
        Some(TreepickError::Yaml(_)) => "INVALID_YAML",
        Some(TreepickError::Toml(_)) => "INVALID_TOML",
        Some(TreepickError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(TreepickError::UnsupportedFormat { .. }) => "UNSUPPORTED_FORMAT",
        Some(TreepickError::NotADirectory { .. }) => "NOT_A_DIRECTORY",
        Some(TreepickError::Walk { .. }) => "WALK_FAILED",
        Some(TreepickError::UnsupportedVersion { .. }) => "UNSUPPORTED_VERSION",
        Some(TreepickError::Aborted) => "ABORTED",
        None => "ERROR",
    }
}

fn error_help(err: &anyhow::Error) -> Option<&'static str> {
    match treepick_error(err)? {
        TreepickError::UnsupportedFormat { .. } => {
            Some("Tree documents must end in .json, .yaml, .yml or .toml")
        }
        TreepickError::NotADirectory { .. } => Some("Pass an existing directory to --dir"),
        TreepickError::UnsupportedVersion { .. } => {
            Some("The selection was written by a newer treepick; upgrade to read it")
        }
        _ => None,
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match treepick_error(err) {
        Some(TreepickError::Aborted) => EXIT_ABORTED,
        _ => 1,
    }
}

fn print_error(err: &anyhow::Error, json: bool, command: &str) {
    if json {
        let mut event = ErrorEvent::new(command, error_code(err), format!("{:#}", err));
        if let Some(help) = error_help(err) {
            event = event.with_help(help);
        }
        let _ = emit_event(&event);
        return;
    }

    if matches!(treepick_error(err), Some(TreepickError::Aborted)) {
        eprintln!("Aborted.");
        return;
    }

    let glyphs = Glyphs::new(TerminalCapabilities::detect().unicode);
    eprintln!("{} Error: {:#}", glyphs.error, err);
    if let Some(help) = error_help(err) {
        eprintln!("  {}", help);
    }
}
