//! What the attached terminal can show.

use is_terminal::IsTerminal;

/// Size used when the terminal does not report one
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Output features the renderer and picker adapt to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// ANSI colors on stdout
    pub color: bool,
    /// Box-drawing and checkbox glyphs
    pub unicode: bool,
    pub width: u16,
    pub height: u16,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
            crossterm::terminal::size().ok(),
        )
    }

    fn from_env(
        get_env: impl Fn(&str) -> Option<String>,
        stdout_is_tty: bool,
        size: Option<(u16, u16)>,
    ) -> Self {
        let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let no_color = get_env("NO_COLOR").is_some_and(|value| !value.is_empty());

        let (width, height) = size
            .filter(|&(w, h)| w > 0 && h > 0)
            .unwrap_or(FALLBACK_SIZE);

        Self {
            color: stdout_is_tty && !dumb && !no_color,
            unicode: !dumb && locale_is_utf8(&get_env),
            width,
            height,
        }
    }
}

/// The first locale variable that is set decides; none set means UTF-8.
fn locale_is_utf8(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| get_env(key).filter(|value| !value.is_empty()));

    match locale {
        Some(value) => {
            let value = value.to_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        }
        None => true,
    }
}

/// Whether an interactive picker can run (stdin and stdout are terminals)
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}
