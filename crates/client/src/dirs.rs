//! Platform directories for the spell designer.

use std::path::PathBuf;

/// Get the platform-specific data directory for the spell designer
///
/// Follows platform conventions:
/// - Linux: `~/.local/share/spell-designer`
/// - macOS: `~/Library/Application Support/spell-designer`
/// - Windows: `%APPDATA%\spell-designer`
pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "spell-designer").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Data directory to load content from: an explicit path wins, then the
/// configured one, then the platform directory if it exists.
pub fn resolve_data_dir(explicit: Option<PathBuf>, configured: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or(configured)
        .or_else(|| data_dir().filter(|dir| dir.is_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let resolved = resolve_data_dir(Some("/a".into()), Some("/b".into()));
        assert_eq!(resolved, Some(PathBuf::from("/a")));
        let resolved = resolve_data_dir(None, Some("/b".into()));
        assert_eq!(resolved, Some(PathBuf::from("/b")));
    }
}
