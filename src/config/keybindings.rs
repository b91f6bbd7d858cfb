//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to demo actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Punctuation typed with Shift (`+` on most layouts) also matches the
    /// unshifted binding.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied().or_else(|| match key.code {
            KeyCode::Char(c) if !c.is_alphabetic() && key.modifiers.contains(KeyModifiers::SHIFT) => {
                let unshifted = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
                self.bindings.get(&unshifted).copied()
            }
            _ => None,
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Vim-style and arrow scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('h'), none, KeyAction::LabelScrollBack);
        keys.bind(KeyCode::Left, none, KeyAction::LabelScrollBack);
        keys.bind(KeyCode::Char('l'), none, KeyAction::LabelScrollForward);
        keys.bind(KeyCode::Right, none, KeyAction::LabelScrollForward);
        keys.bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);

        // Zoom
        keys.bind(KeyCode::Char('+'), none, KeyAction::ZoomIn);
        keys.bind(KeyCode::Char('='), none, KeyAction::ZoomIn);
        keys.bind(KeyCode::Char('-'), none, KeyAction::ZoomOut);

        // Strip
        keys.bind(KeyCode::Char(' '), none, KeyAction::CyclePortMode);
        keys.bind(KeyCode::Char('t'), none, KeyAction::ToggleJustification);
        keys.bind(KeyCode::Char('0'), none, KeyAction::ResetLabelScroll);
        keys.bind(KeyCode::Char(']'), none, KeyAction::WidenStrip);
        keys.bind(KeyCode::Char('['), none, KeyAction::NarrowStrip);
        keys.bind(KeyCode::Char('f'), none, KeyAction::CycleFields);
        keys.bind(KeyCode::Char('c'), none, KeyAction::ClearSelection);

        // Quit
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Esc, none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_map_vim_and_arrow_keys() {
        let bindings = KeyBindings::default();
        for (code, action) in [
            (KeyCode::Char('j'), KeyAction::ScrollDown),
            (KeyCode::Down, KeyAction::ScrollDown),
            (KeyCode::Left, KeyAction::LabelScrollBack),
            (KeyCode::Char('l'), KeyAction::LabelScrollForward),
        ] {
            assert_eq!(
                bindings.get(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(action),
                "{code:?}"
            );
        }
    }

    #[test]
    fn uppercase_g_scrolls_to_bottom() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(bindings.get(key_event), Some(KeyAction::ScrollToBottom));
    }

    #[test]
    fn shifted_plus_still_zooms_in() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(bindings.get(key_event), Some(KeyAction::ZoomIn));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_clears() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(KeyAction::ClearSelection)
        );
    }

    #[test]
    fn unbound_key_is_none() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(bindings.get(key_event), None);
    }
}
