//! Output buffer for emitted Dart text.

/// Append-only token sink.
///
/// Every emitted token is preceded by exactly one space; the translator never inserts any other whitespace apart
/// from the newlines that are part of a few tokens (`;\n`, `{\n`, `}\n`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `token` preceded by a single space.
    pub fn emit(&mut self, token: &str) {
        self.text.push(' ');
        self.text.push_str(token);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the buffer, returning the accumulated text.
    pub fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_gets_one_leading_space() {
        let mut out = OutputBuffer::new();
        assert!(out.is_empty());
        out.emit("var");
        out.emit("a");
        out.emit(";\n");
        assert_eq!(out.as_str(), " var a ;\n");
        assert_eq!(out.into_string(), " var a ;\n");
    }
}
