use crossterm::event::{KeyCode, KeyModifiers};
use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(20);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Advance,
    Retreat,
}

/// A momentary button fed by key presses. Presses landing within the
/// debounce interval of the last accepted one are dropped.
#[derive(Clone, Debug)]
pub struct KeyButton {
    interval: Duration,
    pending: bool,
    last_accept: Option<Instant>,
    fell: bool,
}

impl KeyButton {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: false,
            last_accept: None,
            fell: false,
        }
    }

    pub fn press(&mut self) {
        self.pending = true;
    }

    /// Latches `fell()` for this cycle.
    pub fn update(&mut self, now: Instant) {
        self.fell = false;
        if !self.pending {
            return;
        }
        self.pending = false;
        let settled = match self.last_accept {
            Some(t) => now.saturating_duration_since(t) >= self.interval,
            None => true,
        };
        if settled {
            self.fell = true;
            self.last_accept = Some(now);
        }
    }

    pub fn fell(&self) -> bool {
        self.fell
    }
}

/// The "next" and "previous" buttons, reduced to one event per cycle.
#[derive(Clone, Debug)]
pub struct InputMonitor {
    pub next: KeyButton,
    pub previous: KeyButton,
}

impl InputMonitor {
    pub fn new(debounce: Duration) -> Self {
        Self {
            next: KeyButton::new(debounce),
            previous: KeyButton::new(debounce),
        }
    }

    /// Advance wins when both buttons fell in the same cycle.
    pub fn update(&mut self, now: Instant) -> Option<InputEvent> {
        self.next.update(now);
        self.previous.update(now);
        if self.next.fell() {
            Some(InputEvent::Advance)
        } else if self.previous.fell() {
            Some(InputEvent::Retreat)
        } else {
            None
        }
    }
}

impl Default for InputMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Previous,
    ToggleHud,
    ToggleHelp,
    Quit,
}

pub fn map_key(code: KeyCode, mods: KeyModifiers) -> Option<KeyAction> {
    if mods.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c')) {
        return Some(KeyAction::Quit);
    }
    match code {
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(' ') => {
            Some(KeyAction::Next)
        }
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Backspace => {
            Some(KeyAction::Previous)
        }
        KeyCode::Char('h') | KeyCode::Char('H') => Some(KeyAction::ToggleHud),
        KeyCode::Char('?') => Some(KeyAction::ToggleHelp),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyAction::Quit),
        _ => None,
    }
}
