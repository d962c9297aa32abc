//! Shared JSON event types for consistent CLI output.
//!
//! Every event carries `event` and `command` so a stream from several
//! invocations can be told apart.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            source: None,
        }
    }

    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }
}

/// The full selection after a command ran.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub selected: Vec<&'a str>,
    pub selected_count: usize,
    pub total: usize,
}

impl<'a> SelectionEvent<'a> {
    pub fn new(command: &'a str, selected: Vec<&'a str>, selected_count: usize, total: usize) -> Self {
        Self {
            event: "selection",
            command,
            selected,
            selected_count,
            total,
        }
    }
}

/// Result of checking or unchecking one node.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub node: &'a str,
    pub checked: bool,
    /// False when the node is not in the tree (the toggle was a no-op)
    pub known: bool,
    pub added: Vec<&'a str>,
    pub removed: Vec<&'a str>,
    pub dry_run: bool,
}

impl<'a> ToggleEvent<'a> {
    pub fn new(command: &'a str, node: &'a str, checked: bool, known: bool) -> Self {
        Self {
            event: "toggle",
            command,
            node,
            checked,
            known,
            added: Vec::new(),
            removed: Vec::new(),
            dry_run: false,
        }
    }

    pub fn with_changes(mut self, added: Vec<&'a str>, removed: Vec<&'a str>) -> Self {
        self.added = added;
        self.removed = removed;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Membership of one node in a selection.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub node: &'a str,
    pub known: bool,
    pub checked: bool,
}

impl<'a> CheckEvent<'a> {
    pub fn new(command: &'a str, node: &'a str, known: bool, checked: bool) -> Self {
        Self {
            event: "check",
            command,
            node,
            known,
            checked,
        }
    }
}

/// Descendant-inclusive id set of one node.
#[derive(Debug, Clone, Serialize)]
pub struct IdsEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub node: &'a str,
    pub known: bool,
    pub ids: Vec<&'a str>,
}

impl<'a> IdsEvent<'a> {
    pub fn new(command: &'a str, node: &'a str, ids: Option<Vec<&'a str>>) -> Self {
        Self {
            event: "ids",
            command,
            node,
            known: ids.is_some(),
            ids: ids.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
