use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read up to `limit` bytes from the start of a file, lossily decoded
pub(crate) fn read_head(path: &Path, limit: u64) -> std::io::Result<String> {
    let mut buf = Vec::new();
    File::open(path)?.take(limit).read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a Python-style boolean (`strtobool`): true/false, yes/no, on/off, 1/0, t/f, y/n
pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
