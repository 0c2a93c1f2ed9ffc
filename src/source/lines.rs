// src/source/lines.rs
// =============================================================================
// Reads URLs one line at a time.
//
// Lines are trimmed and blank lines are skipped. Nothing else is done to
// them: no validation, no normalization, no "http://" added in front. A bad
// URL simply fails later, when the prober tries it.
//
// A read error in the middle of the stream (I/O failure, invalid UTF-8)
// ends the sequence. The error is kept so the caller can report it after the
// URLs that were already read have been probed.
// =============================================================================

use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

type BoxedReader = Box<dyn AsyncRead + Send + Unpin>;

/// A lazy, finite, non-restartable sequence of URLs
pub struct UrlSource {
    lines: Lines<BufReader<BoxedReader>>,
    error: Option<io::Error>,
    finished: bool,
    yielded: usize,
}

impl UrlSource {
    /// Opens `path`, or standard input when there is no path
    ///
    /// Failing to open the file is the one fatal input error: the caller
    /// gets it before any worker exists.
    pub async fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .with_context(|| format!("Error opening file {}", path.display()))?;
                Ok(Self::from_reader(file))
            }
            None => Ok(Self::from_reader(tokio::io::stdin())),
        }
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let reader: BoxedReader = Box::new(reader);
        UrlSource {
            lines: BufReader::new(reader).lines(),
            error: None,
            finished: false,
            yielded: 0,
        }
    }

    /// Returns the next non-empty, trimmed line, or None once the stream is
    /// exhausted or broken
    pub async fn next_url(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    let url = line.trim();
                    if url.is_empty() {
                        continue;
                    }
                    self.yielded += 1;
                    return Some(url.to_string());
                }
                Ok(None) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    log::debug!("Input stream broke after {} line(s): {}", self.yielded, e);
                    self.error = Some(e);
                    self.finished = true;
                    return None;
                }
            }
        }
    }

    /// The read error that ended the sequence, if there was one
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}
