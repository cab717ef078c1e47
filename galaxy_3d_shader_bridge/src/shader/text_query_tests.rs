use super::*;

#[test]
fn test_query_length_counts_terminator() {
    assert_eq!(query_length(""), 0);
    assert_eq!(query_length("abc"), 4);
}

#[test]
fn test_copy_fits() {
    let mut buffer = [0xFFu8; 8];
    let written = copy_text("log", &mut buffer);

    assert_eq!(written, 3);
    assert_eq!(&buffer[..4], b"log\0");
    assert_eq!(buffer[4], 0xFF);
}

#[test]
fn test_copy_truncates_and_terminates() {
    let mut buffer = [0xFFu8; 4];
    let written = copy_text("truncated", &mut buffer);

    assert_eq!(written, 3);
    assert_eq!(&buffer, b"tru\0");
}

#[test]
fn test_copy_into_empty_buffer() {
    let mut buffer: [u8; 0] = [];
    assert_eq!(copy_text("anything", &mut buffer), 0);
}

#[test]
fn test_copy_single_byte_buffer_gets_terminator_only() {
    let mut buffer = [0xFFu8; 1];
    assert_eq!(copy_text("x", &mut buffer), 0);
    assert_eq!(buffer[0], 0);
}

#[test]
fn test_copy_empty_text() {
    let mut buffer = [0xFFu8; 2];
    assert_eq!(copy_text("", &mut buffer), 0);
    assert_eq!(buffer, [0, 0xFF]);
}
