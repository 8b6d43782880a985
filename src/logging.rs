use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Send log output to `path`.
///
/// The terminal belongs to the game UI, so nothing is ever logged to
/// stderr. If the file cannot be opened logging stays disabled.
pub fn init(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .unwrap_or(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_log_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("hangman.log");
        init(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unusable_log_path_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        assert!(init(&blocker.join("hangman.log")).is_err());
    }
}
