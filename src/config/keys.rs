//! Keybinding types and vim-style key notation
//!
//! Keys are written as "C-x" (Ctrl), "M-x" (Alt), "S-x" (Shift), or as
//! bracketed names such as "<CR>", "<Tab>", "<M-Up>".

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::action::Action;

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a KeyCombo from a crossterm KeyEvent
    ///
    /// Uppercase characters become lowercase + SHIFT so that "G" in config
    /// matches Shift+g. Shift+Tab arrives as BackTab and drops the SHIFT bit.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::BackTab => Self {
                code: KeyCode::BackTab,
                modifiers: event.modifiers - KeyModifiers::SHIFT,
            },
            _ => Self {
                code: event.code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S".to_string());
        }

        let key_str = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::BackTab => "<S-Tab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::PageUp => "<PageUp>".to_string(),
            KeyCode::PageDown => "<PageDown>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{}>", n),
            _ => format!("{:?}", self.code),
        };

        parts.push(key_str);
        write!(f, "{}", parts.join("-"))
    }
}

/// Logical input context; bindings in a context override global ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Keys that work everywhere unless overridden
    Global,
    /// Editing the current step's inputs
    Form,
    /// Moving a picked-up list entry
    Dragging,
    /// Help, error and notice dialogs
    Dialog,
}

impl KeyContext {
    /// Context names as they appear in the config file's [keys] table
    pub fn config_name(&self) -> &'static str {
        match self {
            KeyContext::Global => "global",
            KeyContext::Form => "form",
            KeyContext::Dragging => "dragging",
            KeyContext::Dialog => "dialog",
        }
    }
}

/// Configuration for all keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Global keybindings (apply to all contexts unless overridden)
    pub global: HashMap<KeyCombo, Action>,
    /// Context-specific keybindings
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an action for a key combo in a given context.
    /// Context bindings win; modal contexts do not fall back to global keys.
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<Action> {
        if let Some(action) = self.context.get(&context).and_then(|b| b.get(key)) {
            return Some(*action);
        }
        match context {
            KeyContext::Dragging | KeyContext::Dialog => None,
            KeyContext::Global | KeyContext::Form => self.global.get(key).copied(),
        }
    }

    /// First key bound to `action` in `context`, for hints
    pub fn key_for(&self, action: Action, context: KeyContext) -> Option<KeyCombo> {
        let mut candidates: Vec<KeyCombo> = self
            .context
            .get(&context)
            .into_iter()
            .flat_map(|b| b.iter())
            .chain(
                self.global
                    .iter()
                    .filter(|_| !matches!(context, KeyContext::Dragging | KeyContext::Dialog)),
            )
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        // Stable choice across HashMap iteration orders
        candidates.sort_by_key(|k| (k.to_string().len(), k.to_string()));
        candidates.into_iter().next()
    }

    /// Merge user configuration on top of defaults
    pub fn merge(&mut self, other: KeybindingConfig) {
        self.global.extend(other.global);
        for (ctx, bindings) in other.context {
            self.context.entry(ctx).or_default().extend(bindings);
        }
    }
}

/// Error type for key parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("invalid special key: {0}")]
    InvalidSpecialKey(String),
}

/// Parse a vim-style key notation string into a KeyCombo
///
/// Supported notation:
/// - `C-x`, `M-x`, `S-x` and combinations such as `C-S-x`
/// - `<CR>`, `<Esc>`, `<Tab>`, `<S-Tab>`, `<BS>`, `<Del>`, `<Space>`
/// - `<Up>`, `<Down>`, `<Left>`, `<Right>`, `<PageUp>`, `<PageDown>`,
///   `<Home>`, `<End>`, `<F1>`..`<F12>`
/// - modifiers inside brackets: `<M-Up>`, `<C-CR>`
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if s.starts_with('<') && s.ends_with('>') && s.len() > 2 {
        return parse_special_key(s);
    }

    // Modifier prefixes before a bracketed key: "M-<Up>"
    if let Some(pos) = s.find('<').filter(|p| *p > 0 && s.ends_with('>')) {
        let (prefix, special) = s.split_at(pos);
        let mut combo = parse_special_key(special)?;
        combo.modifiers |= parse_modifiers(prefix.trim_end_matches('-'))?;
        return Ok(normalize(combo));
    }

    let parts: Vec<&str> = s.split('-').collect();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        match *part {
            "C" if !is_last => modifiers |= KeyModifiers::CONTROL,
            "M" if !is_last => modifiers |= KeyModifiers::ALT,
            "S" if !is_last => modifiers |= KeyModifiers::SHIFT,
            "" => {}
            _ => key_part = Some(*part),
        }
    }

    let key_str = key_part.ok_or(KeyParseError::NoKey)?;
    let (code, needs_shift) = parse_key_code(key_str)?;
    if needs_shift {
        modifiers |= KeyModifiers::SHIFT;
    }

    Ok(normalize(KeyCombo::new(code, modifiers)))
}

fn parse_modifiers(prefix: &str) -> Result<KeyModifiers, KeyParseError> {
    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.split('-').filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "C" => KeyModifiers::CONTROL,
            "M" => KeyModifiers::ALT,
            "S" => KeyModifiers::SHIFT,
            _ => return Err(KeyParseError::InvalidModifier(part.to_string())),
        };
    }
    Ok(modifiers)
}

/// Shift+Tab is its own key code in crossterm
fn normalize(combo: KeyCombo) -> KeyCombo {
    if combo.code == KeyCode::Tab && combo.modifiers.contains(KeyModifiers::SHIFT) {
        return KeyCombo::new(KeyCode::BackTab, combo.modifiers - KeyModifiers::SHIFT);
    }
    combo
}

/// Parse a special key notation like <CR>, <M-Up>
fn parse_special_key(s: &str) -> Result<KeyCombo, KeyParseError> {
    let inner = &s[1..s.len() - 1];
    let (prefix, key_name) = match inner.rfind('-') {
        Some(pos) if pos + 1 < inner.len() => (&inner[..pos], &inner[pos + 1..]),
        _ => ("", inner),
    };
    let modifiers = parse_modifiers(prefix)?;

    let code = match key_name.to_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "PAGEUP" | "PGUP" => KeyCode::PageUp,
        "PAGEDOWN" | "PGDN" => KeyCode::PageDown,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        name if name.starts_with('F') && name.len() > 1 => {
            let num: u8 = name[1..]
                .parse()
                .map_err(|_| KeyParseError::InvalidKey(name.to_string()))?;
            if num == 0 || num > 12 {
                return Err(KeyParseError::InvalidKey(name.to_string()));
            }
            KeyCode::F(num)
        }
        _ => return Err(KeyParseError::InvalidSpecialKey(key_name.to_string())),
    };

    Ok(normalize(KeyCombo::new(code, modifiers)))
}

/// Parse a single key code (not a special key).
/// Returns the KeyCode and whether SHIFT should be added (for uppercase chars)
fn parse_key_code(s: &str) -> Result<(KeyCode, bool), KeyParseError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok((KeyCode::Char(c.to_ascii_lowercase()), c.is_ascii_uppercase()));
    }
    match s.to_uppercase().as_str() {
        "SPACE" => Ok((KeyCode::Char(' '), false)),
        "TAB" => Ok((KeyCode::Tab, false)),
        "ENTER" | "CR" | "RETURN" => Ok((KeyCode::Enter, false)),
        "ESC" | "ESCAPE" => Ok((KeyCode::Esc, false)),
        "BS" | "BACKSPACE" => Ok((KeyCode::Backspace, false)),
        _ => Err(KeyParseError::InvalidKey(s.to_string())),
    }
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_parse_simple_key() {
        let key = parse_key_notation("a").unwrap();
        assert_eq!(key.code, KeyCode::Char('a'));
        assert_eq!(key.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_modifiers() {
        assert_eq!(
            parse_key_notation("C-x").unwrap(),
            KeyCombo::new(KeyCode::Char('x'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            parse_key_notation("M-S-w").unwrap(),
            KeyCombo::new(KeyCode::Char('w'), KeyModifiers::ALT | KeyModifiers::SHIFT)
        );
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_notation("<CR>").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_notation("<Esc>").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_notation("<BS>").unwrap().code, KeyCode::Backspace);
        assert_eq!(
            parse_key_notation("<Space>").unwrap().code,
            KeyCode::Char(' ')
        );
        assert_eq!(parse_key_notation("<F12>").unwrap().code, KeyCode::F(12));
        assert!(parse_key_notation("<F13>").is_err());
    }

    #[test]
    fn test_parse_modified_special_keys() {
        let expected = KeyCombo::new(KeyCode::Up, KeyModifiers::ALT);
        assert_eq!(parse_key_notation("<M-Up>").unwrap(), expected);
        assert_eq!(parse_key_notation("M-<Up>").unwrap(), expected);
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        let expected = KeyCombo::new(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(parse_key_notation("<S-Tab>").unwrap(), expected);
        assert_eq!(parse_key_notation("<BackTab>").unwrap(), expected);
        assert_eq!(
            KeyCombo::from_key_event(&event(KeyCode::BackTab, KeyModifiers::SHIFT)),
            expected
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_key_notation(""), Err(KeyParseError::Empty));
        assert_eq!(parse_key_notation("C-"), Err(KeyParseError::NoKey));
        assert!(matches!(
            parse_key_notation("<Nope>"),
            Err(KeyParseError::InvalidSpecialKey(_))
        ));
        assert!(matches!(
            parse_key_notation("<X-Up>"),
            Err(KeyParseError::InvalidModifier(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for notation in ["C-x", "C-S-w", "<CR>", "M-<Up>", "<S-Tab>", "<F1>"] {
            let combo = parse_key_notation(notation).unwrap();
            assert_eq!(parse_key_notation(&combo.to_string()).unwrap(), combo);
        }
    }

    #[test]
    fn test_from_key_event_normalizes_uppercase() {
        let combo = KeyCombo::from_key_event(&event(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(combo, parse_key_notation("G").unwrap());
        assert_eq!(combo, parse_key_notation("S-g").unwrap());
    }

    #[test]
    fn test_modal_contexts_do_not_fall_back_to_global() {
        let mut config = KeybindingConfig::new();
        let key = parse_key_notation("C-q").unwrap();
        config.global.insert(key, Action::Quit);

        assert_eq!(config.get_action(&key, KeyContext::Form), Some(Action::Quit));
        assert_eq!(config.get_action(&key, KeyContext::Dragging), None);
        assert_eq!(config.get_action(&key, KeyContext::Dialog), None);
    }

    #[test]
    fn test_merge_overrides_defaults() {
        let key = parse_key_notation("C-n").unwrap();
        let mut base = KeybindingConfig::new();
        base.global.insert(key, Action::NextStep);

        let mut user = KeybindingConfig::new();
        user.context
            .entry(KeyContext::Form)
            .or_default()
            .insert(key, Action::AddEntry);
        base.merge(user);

        assert_eq!(base.get_action(&key, KeyContext::Form), Some(Action::AddEntry));
        assert_eq!(base.get_action(&key, KeyContext::Global), Some(Action::NextStep));
    }

    #[test]
    fn test_key_for_prefers_short_notation() {
        let mut config = KeybindingConfig::new();
        config
            .global
            .insert(parse_key_notation("<F1>").unwrap(), Action::ShowHelp);
        config
            .global
            .insert(parse_key_notation("?").unwrap(), Action::ShowHelp);
        let key = config.key_for(Action::ShowHelp, KeyContext::Form).unwrap();
        assert_eq!(key.to_string(), "?");
    }
}
