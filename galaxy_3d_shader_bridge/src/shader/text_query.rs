/// Host-API text retrieval contract
///
/// Lengths include the NUL terminator (0 for empty text). Copies truncate to the
/// caller's capacity, always terminate, and report the number of text bytes written.

/// Reported length of a text, terminator included
pub fn query_length(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.len() + 1
    }
}

/// Copy `text` into `buffer` as a NUL-terminated byte string
///
/// # Returns
///
/// Bytes of text written, excluding the terminator. An empty buffer receives nothing.
pub fn copy_text(text: &str, buffer: &mut [u8]) -> usize {
    if buffer.is_empty() {
        return 0;
    }

    let count = text.len().min(buffer.len() - 1);
    buffer[..count].copy_from_slice(&text.as_bytes()[..count]);
    buffer[count] = 0;
    count
}

#[cfg(test)]
#[path = "text_query_tests.rs"]
mod tests;
