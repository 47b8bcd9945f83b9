//! Path utilities: expand ~ and resolve input/output locations.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `-` means stdin/stdout rather than a file.
pub fn is_stdio(path: &str) -> bool {
    path == "-"
}
