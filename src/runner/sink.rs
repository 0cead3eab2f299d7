//! Destinations that receive a live copy of a child's output.

use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Where to forward output while it is being captured.
///
/// Sinks are written from the runner's reader threads. When draining ends,
/// a [`Writer`](OutputSink::Writer) is flushed and dropped, which closes
/// it. The host's own [`Stdout`](OutputSink::Stdout) and
/// [`Stderr`](OutputSink::Stderr) are only flushed, never closed.
pub enum OutputSink {
    /// The host process's standard output.
    Stdout,
    /// The host process's standard error.
    Stderr,
    /// Any writer owned by the sink.
    Writer(Box<dyn Write + Send>),
}

impl OutputSink {
    /// Wrap a writer.
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        OutputSink::Writer(Box::new(writer))
    }

    /// Create (or truncate) a file and write into it.
    pub fn create_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::Io {
            context: format!("failed to create output file '{}'", path.display()),
            source: e,
        })?;
        Ok(OutputSink::from(file))
    }

    /// Whether this sink is one of the host's standard streams.
    pub fn is_standard_stream(&self) -> bool {
        matches!(self, OutputSink::Stdout | OutputSink::Stderr)
    }

    pub(super) fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self {
            OutputSink::Stdout => io::stdout().lock().write_all(bytes),
            OutputSink::Stderr => io::stderr().lock().write_all(bytes),
            OutputSink::Writer(writer) => writer.write_all(bytes),
        }
    }

    /// Flush, then release the sink. Standard streams stay open.
    pub(super) fn finish(self) -> io::Result<()> {
        match self {
            OutputSink::Stdout => io::stdout().flush(),
            OutputSink::Stderr => io::stderr().flush(),
            OutputSink::Writer(mut writer) => writer.flush(),
        }
    }
}

impl From<File> for OutputSink {
    fn from(file: File) -> Self {
        OutputSink::Writer(Box::new(file))
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::Stdout => f.write_str("Stdout"),
            OutputSink::Stderr => f.write_str("Stderr"),
            OutputSink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DropFlag, SharedBuffer};
    use tempfile::TempDir;

    #[test]
    fn writer_receives_bytes() {
        let buffer = SharedBuffer::default();
        let mut sink = OutputSink::writer(buffer.clone());
        sink.write_all(b"hello ").unwrap();
        sink.write_all(b"world").unwrap();
        sink.finish().unwrap();
        assert_eq!(buffer.contents(), "hello world");
    }

    #[test]
    fn finish_drops_owned_writer() {
        let (writer, dropped) = DropFlag::new();
        let sink = OutputSink::writer(writer);
        assert!(!dropped.get());
        sink.finish().unwrap();
        assert!(dropped.get());
    }

    #[test]
    fn standard_streams_are_recognized() {
        assert!(OutputSink::Stdout.is_standard_stream());
        assert!(OutputSink::Stderr.is_standard_stream());
        assert!(!OutputSink::writer(io::sink()).is_standard_stream());
    }

    #[test]
    fn create_file_writes_to_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.log");
        let mut sink = OutputSink::create_file(&path).unwrap();
        sink.write_all(b"logged").unwrap();
        sink.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "logged");
    }

    #[test]
    fn create_file_in_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = OutputSink::create_file(temp_dir.path().join("nope").join("out.log")).unwrap_err();
        assert!(err.to_string().contains("failed to create output file"));
    }

    #[test]
    fn debug_hides_writer() {
        assert_eq!(format!("{:?}", OutputSink::writer(io::sink())), "Writer(..)");
    }
}
