/// Trim whitespace + strip outer quotes if present.
///
/// Doubled quotes inside the value are left alone, so `""Name""` comes back
/// as `"Name"`.
pub fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PadState {
    FieldStart,
    Unquoted,
    Quoted,
    /// A `"` inside a quoted field: either half of `""` or the closing quote.
    QuoteInQuoted,
    AfterQuoted,
}

/// Drop spaces and tabs around fields, outside quotes only.
///
/// `30, "New York" ,x` becomes `30,"New York",x` so the opening quote sits at
/// the start of its field. Bytes inside quotes, including whitespace and line
/// breaks, are copied untouched. Line breaks are never removed, so line
/// numbers computed on the output match the input.
pub fn strip_field_padding(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut pending: Vec<u8> = Vec::new();
    let mut state = PadState::FieldStart;

    for &b in input {
        if state == PadState::QuoteInQuoted {
            if b == b'"' {
                out.push(b);
                state = PadState::Quoted;
                continue;
            }
            state = PadState::AfterQuoted;
        }

        match state {
            PadState::FieldStart => match b {
                b' ' | b'\t' => {}
                b'"' => {
                    out.push(b);
                    state = PadState::Quoted;
                }
                b',' | b'\n' | b'\r' => out.push(b),
                _ => {
                    out.push(b);
                    state = PadState::Unquoted;
                }
            },
            PadState::Unquoted => match b {
                b' ' | b'\t' => pending.push(b),
                b',' | b'\n' | b'\r' => {
                    pending.clear();
                    out.push(b);
                    state = PadState::FieldStart;
                }
                _ => {
                    out.append(&mut pending);
                    out.push(b);
                }
            },
            PadState::Quoted => {
                out.push(b);
                if b == b'"' {
                    state = PadState::QuoteInQuoted;
                }
            }
            PadState::QuoteInQuoted | PadState::AfterQuoted => match b {
                b' ' | b'\t' => {}
                b',' | b'\n' | b'\r' => {
                    out.push(b);
                    state = PadState::FieldStart;
                }
                _ => out.push(b),
            },
        }
    }
    out
}

/// Maps byte offsets of a buffer to 1-based line numbers.
///
/// Offsets must be queried in non-decreasing order; the cursor only walks forward.
pub struct LineCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        LineCursor {
            bytes,
            offset: 0,
            line: 1,
        }
    }

    /// Line of the first byte at or after `offset` that is not a line break.
    pub fn line_at(&mut self, offset: usize) -> usize {
        let bytes = self.bytes;
        let mut target = offset.min(bytes.len());
        while target < bytes.len() && matches!(bytes[target], b'\r' | b'\n') {
            target += 1;
        }
        if target > self.offset {
            self.line += bytes[self.offset..target]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.offset = target;
        }
        self.line
    }
}
