/// Returns true iff `input` parses as a well-formed absolute URL.
///
/// This is a purely syntactic check; no network is touched.
pub fn is_valid_url(input: &str) -> bool {
    url::Url::parse(input).is_ok()
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count as a human-readable string in binary (1024) units,
/// with up to two decimal places and trailing zeros trimmed.
///
/// `0` renders as `"0 Bytes"`; anything at or beyond the last unit stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = (((bytes as f64).ln() / 1024f64.ln()).floor() as usize).min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{text} {}", SIZE_UNITS[exponent])
}
