//! Structured input events delivered to widgets.

use bitflags::bitflags;

/// Named non-character keys widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Enter,
    Escape,
}

bitflags! {
    /// Modifier state attached to a key event.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const ALT = 1 << 1;
        const CTRL = 1 << 2;
    }
}

/// Input event delivered to widgets.
///
/// Hosts may construct these directly or decode raw terminal bytes with
/// [`parse_input_events`]. Character input arrives one scalar at a time;
/// bracketed paste arrives as a single `Paste` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: Key, modifiers: Modifiers },
    Char(char),
    Paste(String),
}

impl InputEvent {
    /// Key event with no modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::empty(),
        }
    }
}

/// Outcome of offering an event to a widget.
///
/// `Consumed` halts propagation up the host tree; `Ignored` lets the event
/// continue to the next candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Decode raw terminal bytes into events.
///
/// Recognizes the common CSI navigation sequences (plain and
/// modifier-suffixed), DEL/BS, TAB/back-tab, CR/LF, lone ESC, and bracketed
/// paste. Printable text becomes one `Char` per scalar. Byte runs that decode
/// to nothing recognizable are dropped.
pub fn parse_input_events(data: &str) -> Vec<InputEvent> {
    if data.is_empty() {
        return Vec::new();
    }

    const PASTE_START: &str = "\x1b[200~";
    const PASTE_END: &str = "\x1b[201~";

    let mut events = Vec::new();
    let mut remaining = data;
    loop {
        let Some(start) = remaining.find(PASTE_START) else {
            parse_non_paste(remaining, &mut events);
            break;
        };

        parse_non_paste(&remaining[..start], &mut events);

        let after_start = &remaining[start + PASTE_START.len()..];
        let Some(end_rel) = after_start.find(PASTE_END) else {
            // Unterminated paste: drop the partial sequence.
            break;
        };

        events.push(InputEvent::Paste(after_start[..end_rel].to_string()));
        remaining = &after_start[end_rel + PASTE_END.len()..];
        if remaining.is_empty() {
            break;
        }
    }

    events
}

fn parse_non_paste(data: &str, events: &mut Vec<InputEvent>) {
    let mut rest = data;
    while !rest.is_empty() {
        if let Some((event, consumed)) = parse_escape(rest) {
            if let Some(event) = event {
                events.push(event);
            }
            rest = &rest[consumed..];
            continue;
        }

        let ch = rest.chars().next().expect("non-empty input");
        match ch {
            '\x7f' | '\x08' => events.push(InputEvent::key(Key::Backspace)),
            '\t' => events.push(InputEvent::key(Key::Tab)),
            '\r' | '\n' => events.push(InputEvent::key(Key::Enter)),
            ch if !ch.is_control() => events.push(InputEvent::Char(ch)),
            // Remaining C0 controls have no widget-level meaning.
            _ => {}
        }
        rest = &rest[ch.len_utf8()..];
    }
}

/// Parse one escape sequence at the start of `data`.
///
/// Returns `(event, bytes_consumed)`; `event` is `None` when the sequence is
/// recognized but meaningless to widgets. Returns `None` when `data` does not
/// start with ESC.
fn parse_escape(data: &str) -> Option<(Option<InputEvent>, usize)> {
    if !data.starts_with('\x1b') {
        return None;
    }

    if !data[1..].starts_with('[') {
        return Some((Some(InputEvent::key(Key::Escape)), 1));
    }

    let body = &data[2..];
    let (params, final_byte, body_len) = match split_csi(body) {
        Some(parts) => parts,
        // `ESC [` with no valid CSI body: treat as a lone escape.
        None => return Some((Some(InputEvent::key(Key::Escape)), 1)),
    };

    let key = match final_byte {
        'A' => Some(Key::Up),
        'B' => Some(Key::Down),
        'C' => Some(Key::Right),
        'D' => Some(Key::Left),
        'H' => Some(Key::Home),
        'F' => Some(Key::End),
        'Z' => Some(Key::BackTab),
        '~' => match params.split(';').next() {
            Some("1") | Some("7") => Some(Key::Home),
            Some("3") => Some(Key::Delete),
            Some("4") | Some("8") => Some(Key::End),
            _ => None,
        },
        _ => None,
    };

    let consumed = 2 + body_len;
    let Some(key) = key else {
        return Some((None, consumed));
    };

    let mut modifiers = parse_modifier_param(params);
    if key == Key::BackTab {
        modifiers |= Modifiers::SHIFT;
    }
    Some((Some(InputEvent::Key { key, modifiers }), consumed))
}

/// Split a CSI body into its parameter bytes, final byte, and byte length.
fn split_csi(body: &str) -> Option<(&str, char, usize)> {
    for (idx, ch) in body.char_indices() {
        if ('\x40'..='\x7e').contains(&ch) {
            return Some((&body[..idx], ch, idx + ch.len_utf8()));
        }
        if !ch.is_ascii_digit() && ch != ';' {
            return None;
        }
    }
    None
}

/// Decode the `1;<n>` xterm modifier parameter.
fn parse_modifier_param(params: &str) -> Modifiers {
    let Some(raw) = params.split(';').nth(1) else {
        return Modifiers::empty();
    };
    let Ok(code) = raw.parse::<u8>() else {
        return Modifiers::empty();
    };
    let bits = code.saturating_sub(1);
    let mut modifiers = Modifiers::empty();
    if bits & 1 != 0 {
        modifiers |= Modifiers::SHIFT;
    }
    if bits & 2 != 0 {
        modifiers |= Modifiers::ALT;
    }
    if bits & 4 != 0 {
        modifiers |= Modifiers::CTRL;
    }
    modifiers
}
