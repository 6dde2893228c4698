//! Incremental server-sent-events frame parser.
//!
//! Network chunks do not align with event boundaries, so the parser buffers
//! partial lines across [`SseParser::push`] calls and emits an event for
//! every blank-line-terminated block. Handled per the SSE framing rules:
//! `event:` and `data:` fields, multi-line data joined with `\n`, one
//! optional space after the colon, `:` comment lines, CRLF line endings.
//! Other fields (`id:`, `retry:`) are ignored.

/// One decoded server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Event type; empty when the block carried no `event:` field.
    pub event: String,

    /// Event payload: all `data:` lines joined with `\n`.
    pub data: String,
}

/// Stateful SSE decoder fed with raw byte chunks.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
    event_type: String,
    data_lines: Vec<String>,
}

impl SseParser {
    /// Create an empty parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes, returning every event completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|&b| b == b'\n') {
            let raw_line: Vec<u8> = self.buffer.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&raw_line);
            let line = line.trim_end_matches(['\n', '\r']);

            if line.is_empty() {
                if let Some(event) = self.take_pending() {
                    events.push(event);
                }
            } else {
                self.handle_field(line);
            }
        }
        events
    }

    fn handle_field(&mut self, line: &str) {
        if line.starts_with(':') {
            // Comment / keep-alive line.
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.event_type = value.to_string(),
            "data" => self.data_lines.push(value.to_string()),
            _ => {}
        }
    }

    fn take_pending(&mut self) -> Option<SseEvent> {
        let event_type = std::mem::take(&mut self.event_type);
        let data_lines = std::mem::take(&mut self.data_lines);

        if data_lines.is_empty() {
            // A block without data dispatches nothing.
            return None;
        }

        Some(SseEvent { event: event_type, data: data_lines.join("\n") })
    }
}
