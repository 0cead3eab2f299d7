//! Working-directory resolution.

use std::io;
use std::path::PathBuf;

/// Resolve a working-directory string.
///
/// * `.` (or an empty string) - `None`: the child inherits the caller's
///   current directory
/// * `~` or `~/rest` - the home directory, joined with `rest`
/// * anything else - used verbatim
pub(super) fn resolve_working_directory(directory: &str) -> io::Result<Option<PathBuf>> {
    resolve_with_home(directory, dirs::home_dir)
}

fn resolve_with_home<F>(directory: &str, home: F) -> io::Result<Option<PathBuf>>
where
    F: FnOnce() -> Option<PathBuf>,
{
    match directory {
        "" | "." => Ok(None),
        "~" => home().map(Some).ok_or_else(no_home),
        _ => match directory.strip_prefix("~/") {
            Some(rest) => {
                let home = home().ok_or_else(no_home)?;
                Ok(Some(home.join(rest)))
            }
            None => Ok(Some(PathBuf::from(directory))),
        },
    }
}

fn no_home() -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        "home directory could not be determined",
    )
}
