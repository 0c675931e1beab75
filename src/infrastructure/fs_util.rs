use std::fs;
use std::io;
use std::path::Path;

/// Entry name that never counts toward a directory being "non-empty" and
/// survives [`empty_dir`].
const VCS_DIR: &str = ".git";

/// True when the directory has no entries, or only version-control
/// metadata.
pub fn is_empty(dir: &Path) -> io::Result<bool> {
    let mut entries = fs::read_dir(dir)?;
    match (entries.next(), entries.next()) {
        (None, _) => Ok(true),
        (Some(first), None) => Ok(first?.file_name() == VCS_DIR),
        _ => Ok(false),
    }
}

/// Removes every entry except version-control metadata. Missing directory
/// is a no-op; entries that vanish mid-removal are ignored.
pub fn empty_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name() == VCS_DIR {
            continue;
        }
        let path = entry.path();
        let removed = if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        match removed {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Recursively copies `src` into `dst`, creating directories as needed and
/// overwriting conflicting files.
pub fn copy_dir(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}
