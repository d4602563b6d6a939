// src/trigger.rs
//! "Collect again" key for the poll loop.
//!
//! The wait reads key events from the terminal in raw mode. The trigger key or
//! Enter starts the next collection; Ctrl+C, `q` or Esc ends the run. Without a
//! usable terminal (piped stdin, some CI shells) it falls back to reading a
//! line from stdin, where end of input ends the run.

use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Default for Trigger {
    fn default() -> Self {
        Self { code: KeyCode::Home, modifiers: KeyModifiers::NONE }
    }
}

impl FromStr for Trigger {
    type Err = String;

    /// `home`, `ctrl+f`, `alt+shift+f5`, `x`, …
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim().to_ascii_lowercase();
        let mut parts: Vec<&str> = spec.split('+').map(str::trim).collect();
        let key = parts.pop().filter(|k| !k.is_empty()).ok_or("empty hotkey")?;

        let mut modifiers = KeyModifiers::NONE;
        for m in parts {
            modifiers |= match m {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                other => return Err(format!("unknown modifier \"{other}\"")),
            };
        }

        let code = match key {
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" | "return" => KeyCode::Enter,
            "space" => KeyCode::Char(' '),
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            "pageup" | "page up" => KeyCode::PageUp,
            "pagedown" | "page down" => KeyCode::PageDown,
            "insert" => KeyCode::Insert,
            "delete" => KeyCode::Delete,
            k if k.len() > 1 && k.starts_with('f') => match k[1..].parse::<u8>() {
                Ok(n @ 1..=12) => KeyCode::F(n),
                _ => return Err(format!("unknown key \"{k}\"")),
            },
            k => {
                let mut chars = k.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(format!("unknown key \"{k}\"")),
                }
            }
        };

        Ok(Self { code, modifiers })
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in [
            (KeyModifiers::CONTROL, "ctrl+"),
            (KeyModifiers::ALT, "alt+"),
            (KeyModifiers::SHIFT, "shift+"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(name)?;
            }
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "f{n}"),
            other => write!(f, "{}", format!("{other:?}").to_ascii_lowercase()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Again,
    Stop,
}

impl Trigger {
    /// What a key press means while waiting.
    pub fn classify(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        // Terminals report shifted letters with or without SHIFT; compare
        // characters case-insensitively and ignore SHIFT for them.
        let mods = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        let wanted = match self.code {
            KeyCode::Char(_) => self.modifiers - KeyModifiers::SHIFT,
            _ => self.modifiers,
        };
        let same_code = match (key.code, self.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };

        if same_code && mods == wanted {
            return Some(Action::Again);
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Stop),
            KeyCode::Enter => Some(Action::Again),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Stop),
            _ => None,
        }
    }

    /// Block until the user asks for another collection (`Again`) or to quit.
    /// `warned` is set once the raw-mode fallback warning has been shown.
    pub fn wait(&self, warned: &mut bool) -> io::Result<Action> {
        match terminal::enable_raw_mode() {
            Ok(()) => {
                let result = self.wait_raw();
                terminal::disable_raw_mode()?;
                result
            }
            Err(e) => {
                if !*warned {
                    log::warn!("Hotkeys unavailable ({e}); press Enter to refresh stats");
                    eprintln!("Hotkeys unavailable here. Press Enter to refresh stats.");
                    *warned = true;
                }
                wait_line(&mut io::stdin().lock())
            }
        }
    }

    fn wait_raw(&self) -> io::Result<Action> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = self.classify(&key) {
                    return Ok(action);
                }
            }
        }
    }
}

/// Line-mode fallback: any line means again, end of input means stop.
pub fn wait_line<R: BufRead>(input: &mut R) -> io::Result<Action> {
    let mut line = String::new();
    Ok(if input.read_line(&mut line)? == 0 { Action::Stop } else { Action::Again })
}
