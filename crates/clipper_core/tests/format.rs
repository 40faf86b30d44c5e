use clipper_core::{format_file_size, is_valid_url};

#[test]
fn zero_bytes_renders_as_zero_bytes() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn sub_kilobyte_sizes_stay_in_bytes() {
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(123), "123 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
}

#[test]
fn binary_units_with_trimmed_decimals() {
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(2048), "2 KB");
    assert_eq!(format_file_size(1024 * 1024), "1 MB");
    assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
}

#[test]
fn two_decimal_precision() {
    // 1234 / 1024 = 1.2051...
    assert_eq!(format_file_size(1234), "1.21 KB");
}

#[test]
fn sizes_beyond_the_last_unit_stay_in_gigabytes() {
    let two_tb = 2 * 1024u64.pow(4);
    assert_eq!(format_file_size(two_tb), "2048 GB");
}

#[test]
fn absolute_urls_are_valid() {
    assert!(is_valid_url("https://example.com"));
    assert!(is_valid_url("https://example.com/path?q=1"));
    assert!(is_valid_url("http://localhost:5000"));
    assert!(is_valid_url("ftp://host/file.txt"));
}

#[test]
fn non_urls_are_rejected() {
    assert!(!is_valid_url(""));
    assert!(!is_valid_url("not a url"));
    assert!(!is_valid_url("example.com"));
    assert!(!is_valid_url("/relative/path"));
    assert!(!is_valid_url("http://"));
}
