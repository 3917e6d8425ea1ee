//! Response generation and chunking.
//!
//! The local producer answers every message with a fixed markdown template
//! that echoes the input, then splits it into small, mostly word-sized
//! chunks for progressive delivery. Everything here is pure.

/// Chunk size bound used when no configuration is supplied.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = chat_types::config::MAX_CHUNK_CHARS;

/// Format the input and split it with the default chunk bound.
pub fn generate(input: &str) -> Vec<String> {
    chunkify(&format_echo(input), DEFAULT_MAX_CHUNK_CHARS)
}

/// Render the echo response for `input`.
pub fn format_echo(input: &str) -> String {
    let char_count = input.chars().count();
    let word_count = input.split_whitespace().count();
    let escaped = input.replace('"', "\\\"");

    format!(
        r#"## Echo Response

I received your message:

> {input}

Here's a **formatted** version of what you said, with some extras:

- **Original message**: {input}
- **Character count**: {char_count}
- **Word count**: {word_count}

### Code Example

```javascript
const message = "{escaped}";
console.log(message);
```

---

*This is a mock response. Connect a real SSE endpoint to get actual AI responses.*"#
    )
}

/// Split `text` into chunks.
///
/// A chunk ends after a space, after a newline, or once it holds
/// `max_chars` characters. Joining the chunks yields `text` again.
pub fn chunkify(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut len = 0;

    for ch in text.chars() {
        current.push(ch);
        len += 1;

        if ch == ' ' || ch == '\n' || len >= max_chars {
            chunks.push(std::mem::take(&mut current));
            len = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
