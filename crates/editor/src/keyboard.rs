//! Keyboard shortcut handling

use std::str::FromStr;

use crate::state::{CycleDirection, SceneState};

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    ArrowLeft,
    ArrowRight,
    Z,
    Y,
    D,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl, or Cmd on macOS
    pub command: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn command(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                command: true,
                shift: false,
            },
        }
    }
}

/// Parse chords such as `ctrl+z`, `Ctrl+Shift+Z` or `ArrowLeft`
impl FromStr for KeyPress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::default();
        let mut key = None;
        for part in s.split('+').map(|p| p.trim().to_ascii_lowercase()) {
            match part.as_str() {
                "ctrl" | "cmd" | "meta" | "control" => modifiers.command = true,
                "shift" => modifiers.shift = true,
                "delete" | "del" => key = Some(Key::Delete),
                "backspace" => key = Some(Key::Backspace),
                "escape" | "esc" => key = Some(Key::Escape),
                "arrowleft" | "left" => key = Some(Key::ArrowLeft),
                "arrowright" | "right" => key = Some(Key::ArrowRight),
                "z" => key = Some(Key::Z),
                "y" => key = Some(Key::Y),
                "d" => key = Some(Key::D),
                other => return Err(format!("unknown key '{other}'")),
            }
        }
        key.map(|key| KeyPress { key, modifiers })
            .ok_or_else(|| format!("no key in '{s}'"))
    }
}

/// What a key press does to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    RemoveSelected,
    Undo,
    Redo,
    DuplicateSelected,
    ClearSelection,
    Cycle(CycleDirection),
}

/// Map a key press to an action, if it is bound
pub fn action_for(press: KeyPress) -> Option<KeyAction> {
    let KeyPress { key, modifiers } = press;
    match key {
        Key::Z if modifiers.command && modifiers.shift => Some(KeyAction::Redo),
        Key::Z if modifiers.command => Some(KeyAction::Undo),
        Key::Y if modifiers.command => Some(KeyAction::Redo),
        Key::D if modifiers.command => Some(KeyAction::DuplicateSelected),
        Key::Delete | Key::Backspace => Some(KeyAction::RemoveSelected),
        Key::Escape => Some(KeyAction::ClearSelection),
        Key::ArrowLeft => Some(KeyAction::Cycle(CycleDirection::Previous)),
        Key::ArrowRight => Some(KeyAction::Cycle(CycleDirection::Next)),
        _ => None,
    }
}

/// Apply a key press to the scene. Returns the action that was bound, if any.
pub fn handle_key(scene: &mut SceneState, press: KeyPress) -> Option<KeyAction> {
    let action = action_for(press)?;
    match action {
        KeyAction::Undo => scene.undo(),
        KeyAction::Redo => scene.redo(),
        KeyAction::RemoveSelected => {
            if let Some(id) = scene.selection().primary().cloned() {
                scene.remove_element(&id);
            }
        }
        KeyAction::DuplicateSelected => {
            if let Some(id) = scene.selection().primary().cloned() {
                scene.duplicate_element(&id);
            }
        }
        KeyAction::ClearSelection => scene.select_element(None),
        KeyAction::Cycle(direction) => scene.cycle_selection(direction),
    }
    Some(action)
}
