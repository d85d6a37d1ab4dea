//! Splitting a chunked byte stream into logical protocol lines.

use bstr::ByteSlice;

/// Turns arbitrarily chunked input into discrete logical lines.
///
/// The logical line sequence is defined as the whole input text split on
/// `\n`: a chunk may carry zero, one, or many lines, a line is never split
/// across two emitted items, and the fragment after the last newline is
/// delivered by [`finish`](Self::finish) once the stream terminates. Input
/// that ends with a newline therefore yields a final empty line — which is
/// exactly the blank that lets a trailing multi-line block complete at EOF.
///
/// Emitted lines have trailing whitespace (including `\r`) stripped. Bytes
/// are decoded lossily; input encoding is the producer's concern.
#[derive(Debug, Default)]
pub struct LineSplitter {
    buf: Vec<u8>,
}

impl LineSplitter {
    /// A splitter with an empty carry-over buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one chunk and return every line it completes, in order.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.find_byte(b'\n') {
            let rest = self.buf.split_off(pos + 1);
            let raw = std::mem::replace(&mut self.buf, rest);
            lines.push(decode(&raw));
        }
        lines
    }

    /// The fragment after the last newline, empty when the input ended with
    /// one. Call once, at end of stream.
    pub fn finish(self) -> String {
        decode(&self.buf)
    }
}

fn decode(raw: &[u8]) -> String {
    raw.to_str_lossy().trim_end().to_owned()
}
