//! Keyboard input handling and the interactive loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::menu::{PickerAction, TreePicker};
use crate::tree::SelectionSet;
use crate::ui::render::truncate_to_width;
use crate::ui::theme::{colors, Glyphs};

/// Convert a keyboard event to a PickerAction
pub fn key_to_action(key: KeyEvent) -> Option<PickerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(PickerAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::Down),
        KeyCode::Char(' ') => Some(PickerAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(PickerAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(PickerAction::Collapse),
        KeyCode::Char('e') => Some(PickerAction::ExpandAll),
        KeyCode::Char('c') => Some(PickerAction::CollapseAll),
        KeyCode::Char('a') => Some(PickerAction::SelectAll),
        KeyCode::Char('n') => Some(PickerAction::SelectNone),
        KeyCode::Char('i') => Some(PickerAction::Invert),
        KeyCode::Enter => Some(PickerAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(PickerAction::Quit),
        _ => None,
    }
}

/// How the interactive picker is drawn
#[derive(Debug, Clone)]
pub struct PickerView {
    pub title: String,
    pub glyphs: Glyphs,
    pub show_counts: bool,
    pub color: bool,
    pub width: u16,
    pub height: u16,
}

// Header (2) + separator (1) + status (3) + blank (1) + help (2)
const CHROME_LINES: usize = 9;

/// First and one-past-last row to draw so the cursor stays on screen.
pub fn viewport(cursor: usize, len: usize, capacity: usize) -> (usize, usize) {
    let capacity = capacity.max(1);
    if len <= capacity {
        return (0, len);
    }
    let start = cursor.saturating_sub(capacity - 1).min(len - capacity);
    (start, start + capacity)
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> std::io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        use crossterm::{cursor, execute, terminal};
        let _ = execute!(
            std::io::stdout(),
            cursor::Show,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the picker interactively.
///
/// Returns the committed selection if confirmed, None if quit. The terminal is
/// restored on every exit path, including errors.
pub fn run_interactive(
    picker: &mut TreePicker<'_>,
    view: &PickerView,
) -> std::io::Result<Option<SelectionSet>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
    };

    let _guard = RawModeGuard::enter()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, cursor::Hide)?;

    draw(&mut stdout, picker, view)?;

    let result = loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = key_to_action(key) {
                match action {
                    PickerAction::Confirm => break Some(picker.selection().clone()),
                    PickerAction::Quit => break None,
                    _ => {
                        picker.handle_action(action);
                        draw(&mut stdout, picker, view)?;
                    }
                }
            }
        } else {
            // Resize and focus events only need a redraw
            draw(&mut stdout, picker, view)?;
        }
    };

    Ok(result)
}

fn draw(
    stdout: &mut std::io::Stdout,
    picker: &TreePicker<'_>,
    view: &PickerView,
) -> std::io::Result<()> {
    use crossterm::{
        cursor, queue,
        style::{Print, ResetColor, SetForegroundColor},
        terminal::{self, ClearType},
    };
    use std::io::Write;

    let width = usize::from(view.width);
    let line = |text: &str| format!("{}\r\n", truncate_to_width(text, width));

    queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(stdout, Print(line(&view.title)), Print("\r\n"))?;

    let rendered = picker.render(&view.glyphs, view.show_counts);
    let lines: Vec<&str> = rendered.lines().collect();
    let capacity = usize::from(view.height).saturating_sub(CHROME_LINES);
    let (start, end) = viewport(picker.cursor_position(), lines.len(), capacity);

    for (i, text) in lines.iter().copied().enumerate().take(end).skip(start) {
        if view.color && i == picker.cursor_position() {
            queue!(
                stdout,
                SetForegroundColor(colors::INFO),
                Print(line(text)),
                ResetColor
            )?;
        } else {
            queue!(stdout, Print(line(text)))?;
        }
    }

    let separator = view.glyphs.separator.repeat(width.min(64));
    queue!(stdout, Print(format!("{}\r\n", separator)))?;

    for text in picker.render_status_bar(&view.glyphs).lines() {
        queue!(stdout, Print(line(text)))?;
    }
    queue!(stdout, Print("\r\n"))?;

    if view.color {
        queue!(stdout, SetForegroundColor(colors::DIM))?;
    }
    for text in picker.render_help_bar().lines() {
        queue!(stdout, Print(line(text)))?;
    }
    if view.color {
        queue!(stdout, ResetColor)?;
    }

    stdout.flush()
}
