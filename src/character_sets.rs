/// Scheme character classification
/// Returns: 0=not allowed, 1=alpha (valid anywhere), 2=digit or `+-.` (valid after the first byte)
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 2;
        i += 1;
    }
    table[b'+' as usize] = 2;
    table[b'-' as usize] = 2;
    table[b'.' as usize] = 2;

    table
};

/// Classify a byte for scheme parsing
pub fn classify_scheme_byte(b: u8) -> u8 {
    SCHEME_CHAR_TABLE[b as usize]
}

/// Find the `:` that terminates a leading scheme, if the input starts with one.
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"` per RFC 3986.
pub fn scheme_end(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if classify_scheme_byte(*bytes.first()?) != 1 {
        return None;
    }

    for (i, &b) in bytes.iter().enumerate().skip(1) {
        match classify_scheme_byte(b) {
            1 | 2 => {}
            _ if b == b':' => return Some(i),
            _ => return None,
        }
    }
    None
}
