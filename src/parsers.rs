// src/parsers.rs
use line_counter_shared_kernel::{BufferSize, Separator};

/// Parse a positive byte count with an optional binary suffix (e.g. 32K, 1MiB).
pub fn parse_buffer_size(s: &str) -> Result<BufferSize, String> {
    let s = s.trim().replace('_', "");
    let lower = s.to_ascii_lowercase();
    let (num_str, multiplier) = parse_with_suffix(&lower);
    let num: usize = num_str
        .parse()
        .map_err(|_| format!("Invalid size number: {num_str}"))?;
    let bytes = num
        .checked_mul(multiplier)
        .ok_or_else(|| format!("Size too large: {s}"))?;
    BufferSize::new(bytes).ok_or_else(|| "Buffer size must be positive".to_string())
}

fn parse_with_suffix(s: &str) -> (&str, usize) {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[(&["mib", "mb", "m"], MB), (&["kib", "kb", "k"], KB)];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}

/// Parse a separator, expanding `\n`, `\r`, `\t`, `\0` and `\\`.
pub fn parse_separator(s: &str) -> Result<Separator, String> {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut utf8 = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            continue;
        }
        let escaped = match chars.next() {
            Some('n') => b'\n',
            Some('r') => b'\r',
            Some('t') => b'\t',
            Some('0') => b'\0',
            Some('\\') => b'\\',
            Some(other) => return Err(format!("Unknown escape: \\{other}")),
            None => return Err("Trailing backslash in separator".to_string()),
        };
        bytes.push(escaped);
    }
    Separator::new(bytes).ok_or_else(|| "Separator must not be empty".to_string())
}
