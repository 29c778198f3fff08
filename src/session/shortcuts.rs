//! Keyboard shortcut handling for screenshot sessions

use crate::domain::Phase;
use crate::session::messages::Msg;

/// Keys the session reacts to, reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Character(char),
}

/// Modifier state at the time of the key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

/// Context a key press is interpreted in
#[derive(Debug, Clone, Copy)]
pub struct KeyContext {
    /// Current session phase
    pub phase: Phase,
    /// Whether a text annotation is awaiting input; printable keys then
    /// belong to the host's input field, and Escape cancels the text only
    pub text_pending: bool,
    /// Whether a crop selection is awaiting confirmation
    pub confirming: bool,
}

/// Translate a key press into a session message.
///
/// Returns None for keys the session does not react to in this context.
pub fn handle_key(ctx: KeyContext, key: Key, modifiers: Modifiers) -> Option<Msg> {
    // While typing a text annotation only Escape is intercepted
    if ctx.text_pending {
        return match key {
            Key::Escape => Some(Msg::cancel_text()),
            _ => None,
        };
    }

    match key {
        Key::Escape => Some(Msg::cancel()),
        // Enter confirms the crop or finishes the session
        Key::Enter if ctx.phase == Phase::Crop && ctx.confirming => {
            Some(Msg::confirm_selection())
        }
        Key::Enter if ctx.phase == Phase::Annotate => Some(Msg::finish()),
        // Undo/redo shortcuts
        Key::Character(c)
            if c.eq_ignore_ascii_case(&'z')
                && modifiers.ctrl
                && !modifiers.shift
                && ctx.phase == Phase::Annotate =>
        {
            Some(Msg::undo())
        }
        Key::Character(c)
            if ctx.phase == Phase::Annotate
                && ((c.eq_ignore_ascii_case(&'y') && modifiers.ctrl)
                    || (c.eq_ignore_ascii_case(&'z') && modifiers.ctrl && modifiers.shift)) =>
        {
            Some(Msg::redo())
        }
        // R redoes the crop drag while confirming
        Key::Character(c)
            if c.eq_ignore_ascii_case(&'r') && ctx.phase == Phase::Crop && ctx.confirming =>
        {
            Some(Msg::retry_selection())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop_ctx(confirming: bool) -> KeyContext {
        KeyContext {
            phase: Phase::Crop,
            text_pending: false,
            confirming,
        }
    }

    fn annotate_ctx() -> KeyContext {
        KeyContext {
            phase: Phase::Annotate,
            text_pending: false,
            confirming: false,
        }
    }

    #[test]
    fn test_escape_cancels_in_both_phases() {
        assert_eq!(
            handle_key(crop_ctx(false), Key::Escape, Modifiers::default()),
            Some(Msg::cancel())
        );
        assert_eq!(
            handle_key(annotate_ctx(), Key::Escape, Modifiers::default()),
            Some(Msg::cancel())
        );
    }

    #[test]
    fn test_escape_during_text_input_cancels_text_only() {
        let ctx = KeyContext {
            phase: Phase::Annotate,
            text_pending: true,
            confirming: false,
        };
        assert_eq!(
            handle_key(ctx, Key::Escape, Modifiers::default()),
            Some(Msg::cancel_text())
        );
        // Printable keys pass through to the input field
        assert_eq!(handle_key(ctx, Key::Character('z'), Modifiers::default()), None);
    }

    #[test]
    fn test_enter_confirms_only_with_pending_selection() {
        assert_eq!(
            handle_key(crop_ctx(true), Key::Enter, Modifiers::default()),
            Some(Msg::confirm_selection())
        );
        assert_eq!(handle_key(crop_ctx(false), Key::Enter, Modifiers::default()), None);
    }

    #[test]
    fn test_ctrl_z_variants() {
        let ctrl = Modifiers {
            ctrl: true,
            shift: false,
        };
        let ctrl_shift = Modifiers {
            ctrl: true,
            shift: true,
        };
        assert_eq!(
            handle_key(annotate_ctx(), Key::Character('z'), ctrl),
            Some(Msg::undo())
        );
        assert_eq!(
            handle_key(annotate_ctx(), Key::Character('Z'), ctrl_shift),
            Some(Msg::redo())
        );
        assert_eq!(
            handle_key(annotate_ctx(), Key::Character('y'), ctrl),
            Some(Msg::redo())
        );
        // Undo means nothing during crop
        assert_eq!(handle_key(crop_ctx(false), Key::Character('z'), ctrl), None);
    }
}
