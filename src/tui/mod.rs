// src/tui/mod.rs  -  ratatui terminal + crossterm key mapping
mod views;

pub use views::render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;

use crate::app::{App, Input};
use crate::i18n::{TranslationTable, Translator};

pub struct Tui {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("Enabling raw mode")?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen).context("Entering alternate screen")?;
        let backend  = CrosstermBackend::new(out);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn cleanup(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }

    /// The active language is read from `app` on every frame, so a switch
    /// shows up on the very next draw.
    pub fn draw(&mut self, app: &App, table: &TranslationTable) -> Result<()> {
        let t = Translator::new(table, app.language);
        self.terminal.draw(|f| render(f, app, &t))?;
        Ok(())
    }

    /// Block until the next key press we care about
    pub fn next_input(&mut self) -> Result<Input> {
        loop {
            if let Event::Key(k) = event::read()? {
                if let Some(input) = map_key(k) {
                    return Ok(input);
                }
            }
        }
    }
}

fn map_key(k: KeyEvent) -> Option<Input> {
    if k.kind == KeyEventKind::Release {
        return None;
    }
    if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Input::Quit);
    }
    let input = match k.code {
        KeyCode::Char(c)   => Input::Char(c),
        KeyCode::Backspace => Input::Backspace,
        KeyCode::Enter     => Input::Enter,
        KeyCode::Tab       => Input::Tab,
        KeyCode::BackTab   => Input::BackTab,
        KeyCode::Up        => Input::Up,
        KeyCode::Down      => Input::Down,
        KeyCode::Left      => Input::Left,
        KeyCode::Right     => Input::Right,
        KeyCode::Esc       => Input::Esc,
        KeyCode::F(2)      => Input::SwitchLanguage,
        KeyCode::F(10)     => Input::Logout,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn function_keys_map_to_commands() {
        assert_eq!(map_key(press(KeyCode::F(2), KeyModifiers::NONE)), Some(Input::SwitchLanguage));
        assert_eq!(map_key(press(KeyCode::F(10), KeyModifiers::NONE)), Some(Input::Logout));
        assert_eq!(map_key(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_types() {
        assert_eq!(map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Input::Quit));
        assert_eq!(map_key(press(KeyCode::Char('c'), KeyModifiers::NONE)), Some(Input::Char('c')));
    }

    #[test]
    fn releases_are_ignored() {
        let mut k = press(KeyCode::Enter, KeyModifiers::NONE);
        k.kind = KeyEventKind::Release;
        assert_eq!(map_key(k), None);
    }
}
