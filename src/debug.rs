use crate::{color, config::Config};

// Print a debug statement if in verbose mode
pub fn maybe_print(config: &Config, text: String) {
    if config.is_verbose() {
        print(text)
    }
}

// Print a debug statement to stderr, keeping stdout for command output
pub fn print(text: String) {
    let text = format!("=== DEBUG ===\n{text}\n===");
    let text = color::debug_string(&text);

    eprintln!("{text}");
}

/// Version and build metadata from build.rs
pub fn build_info() -> String {
    format!(
        "roster {} ({}, {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TARGET"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TIMESTAMP")
    )
}
