//! Shared constants: user-facing messages, limits and naming

/// Base window title
pub const TITLE: &str = "Viewer";

/// Prefix for style variables on the root surface (`--viewer-…`)
pub const CSS_PREFIX: &str = "viewer";

/// MIME type of exported control snapshots
pub const DATA_TYPE: &str = "application/json";

/// Text files above this many bytes need confirmation before loading
pub const FILE_SIZE_MAX_SAFE: u64 = 1_048_576;

/// User-facing messages
pub mod messages {
    pub const FILE_NUL: &str = "No file.";
}

/// Window title for the given resident file name
pub fn window_title(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{} - {}", name, TITLE),
        _ => TITLE.to_string(),
    }
}

/// Confirmation prompt for a text file above `threshold` bytes
pub fn large_file_prompt(threshold: u64) -> String {
    format!(
        "Its size is greater than {}, proceed with loading?",
        format_size(threshold)
    )
}

/// Style variable name for an entry id
pub fn style_variable(entry_id: &str) -> String {
    format!("--{}-{}", CSS_PREFIX, entry_id)
}

/// Human-readable binary size (`1 MiB`, `512 KiB`, `12 bytes`)
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    let (unit, div) = match bytes {
        b if b >= GIB => ("GiB", GIB),
        b if b >= MIB => ("MiB", MIB),
        b if b >= KIB => ("KiB", KIB),
        _ => return format!("{} bytes", bytes),
    };
    if bytes % div == 0 {
        format!("{} {}", bytes / div, unit)
    } else {
        format!("{:.1} {}", bytes as f64 / div as f64, unit)
    }
}
