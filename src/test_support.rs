use crate::runner::{RunOptions, Runner};
use crate::{Command, SafeString};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A writer whose contents stay readable after it has been handed to a sink.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|poison| poison.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.0.lock().unwrap_or_else(|poison| poison.into_inner());
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that records when it is dropped.
pub(crate) struct DropFlag(Arc<AtomicBool>);

/// Observes a [`DropFlag`].
#[derive(Clone)]
pub(crate) struct DropObserver(Arc<AtomicBool>);

impl DropFlag {
    pub(crate) fn new() -> (Self, DropObserver) {
        let flag = Arc::new(AtomicBool::new(false));
        (Self(Arc::clone(&flag)), DropObserver(flag))
    }
}

impl DropObserver {
    pub(crate) fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Write for DropFlag {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Whether a `git` binary is available to run.
pub(crate) fn git_available() -> bool {
    Runner::default()
        .run(
            &Command::new(SafeString::trusted("git")).verbatim("--version"),
            RunOptions::default(),
        )
        .is_ok()
}

/// A fresh repository with a committer identity configured.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().into_owned();

    git(&dir, &["init", "--quiet"]);
    git(&dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(&dir, &["config", "user.email", "test@example.com"]);
    git(&dir, &["config", "user.name", "Test User"]);

    temp_dir
}

fn git(dir: &str, args: &[&str]) {
    let command = Command::new(SafeString::trusted("git"))
        .args(args.iter().map(|a| crate::Argument::quoted(*a)));
    if let Err(e) = Runner::default().run(&command, RunOptions::at(dir)) {
        panic!("{} failed: {}", command, e);
    }
}
