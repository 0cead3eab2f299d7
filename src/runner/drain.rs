//! Concurrent draining of a child's output pipes.
//!
//! Each pipe gets its own thread that reads until end-of-stream. A child
//! blocks once a pipe buffer fills, so both pipes have to be emptied while
//! it runs; reading one to completion before touching the other deadlocks
//! on large output.

use super::sink::OutputSink;
use crate::error::{Error, Result};
use std::fmt;
use std::io::{self, Read};
use std::thread::{self, JoinHandle};
use tracing::warn;

/// Which output stream a reader drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stream {
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => write!(f, "stdout"),
            Stream::Stderr => write!(f, "stderr"),
        }
    }
}

/// A running pipe reader. The captured bytes come back through [`join`](Self::join).
#[derive(Debug)]
pub(super) struct PipeReader {
    stream: Stream,
    handle: Option<JoinHandle<io::Result<Vec<u8>>>>,
}

impl PipeReader {
    /// Start draining `pipe` on a new thread, forwarding every chunk to `sink`.
    ///
    /// A missing pipe yields an empty capture.
    pub(super) fn spawn<R>(
        pipe: Option<R>,
        stream: Stream,
        sink: Option<OutputSink>,
        chunk_size: usize,
    ) -> Result<Self>
    where
        R: Read + Send + 'static,
    {
        let handle = match pipe {
            Some(pipe) => Some(
                thread::Builder::new()
                    .name(format!("shellout-{}", stream))
                    .spawn(move || drain(pipe, stream, sink, chunk_size))
                    .map_err(|e| Error::Io {
                        context: format!("failed to start {} reader", stream),
                        source: e,
                    })?,
            ),
            None => {
                if let Some(sink) = sink {
                    let _ = sink.finish();
                }
                None
            }
        };
        Ok(Self { stream, handle })
    }

    /// Wait for end-of-stream and take the captured bytes.
    pub(super) fn join(self) -> Result<Vec<u8>> {
        let Some(handle) = self.handle else {
            return Ok(Vec::new());
        };
        let stream = self.stream;
        handle
            .join()
            .map_err(|_| Error::Io {
                context: format!("{} reader panicked", stream),
                source: io::Error::other("pipe reader panicked"),
            })?
            .map_err(|e| Error::Io {
                context: format!("failed to read {}", stream),
                source: e,
            })
    }
}

/// Read `pipe` to end-of-stream, appending to a private buffer and teeing
/// into `sink`.
///
/// A failing sink is logged and dropped; capture continues so the child is
/// never left blocked on a full pipe.
fn drain<R: Read>(
    mut pipe: R,
    stream: Stream,
    mut sink: Option<OutputSink>,
    chunk_size: usize,
) -> io::Result<Vec<u8>> {
    let mut captured = Vec::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];

    let result = loop {
        let n = match pipe.read(&mut chunk) {
            Ok(0) => break Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => break Err(e),
        };

        captured.extend_from_slice(&chunk[..n]);

        let failed = match sink.as_mut() {
            Some(target) => target.write_all(&chunk[..n]).err(),
            None => None,
        };
        if let Some(e) = failed {
            warn!(%stream, error = %e, "output sink failed; continuing capture without it");
            sink = None;
        }
    };

    if let Some(sink) = sink
        && let Err(e) = sink.finish()
    {
        warn!(%stream, error = %e, "failed to flush output sink");
    }

    result.map(|()| captured)
}
