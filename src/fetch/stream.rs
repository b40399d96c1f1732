//! Streaming NDJSON record decoding
//!
//! Frames a streaming response body into lines and decodes each non-empty
//! line as one JSON record. The body is pulled chunk by chunk as the
//! consumer drains records, so memory stays bounded by one record plus one
//! partial line regardless of response size.

use crate::error::{Error, Result};
use crate::types::Record;
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};

/// The explicit lazy-sequence interface consumed by sinks.
///
/// `next_record` returns `None` at end of stream. After an `Err` the
/// sequence is terminated; further calls return `None`. The sequence is
/// single-pass and forward-only.
#[async_trait]
pub trait RecordSource: Send {
    /// Pull the next record, suspending until one is available
    async fn next_record(&mut self) -> Option<Result<Record>>;
}

/// Lazy record sequence over a streaming HTTP response body.
///
/// Dropping the stream drops the underlying connection, so consumer-side
/// early termination releases the connection on all exit paths.
pub struct RecordStream {
    body: BoxStream<'static, reqwest::Result<Bytes>>,
    buf: BytesMut,
    line: usize,
    eof: bool,
    terminated: bool,
}

impl RecordStream {
    /// Wrap a chunked byte stream
    pub fn new(body: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static) -> Self {
        Self {
            body: body.boxed(),
            buf: BytesMut::new(),
            line: 0,
            eof: false,
            terminated: false,
        }
    }

    /// Pull the next record.
    ///
    /// Yields records one at a time in body order. A malformed line
    /// terminates the sequence with [`Error::Decode`] carrying the
    /// 1-based physical line number; records on earlier lines have
    /// already been yielded.
    pub async fn next_record(&mut self) -> Option<Result<Record>> {
        if self.terminated {
            return None;
        }

        loop {
            // Drain complete lines already buffered.
            while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
                let mut line = self.buf.split_to(pos + 1);
                line.truncate(pos);
                if let Some(result) = self.decode_line(&line) {
                    return Some(result);
                }
            }

            if self.eof {
                // Final line without a trailing newline.
                if self.buf.is_empty() {
                    self.terminated = true;
                    return None;
                }
                let line = self.buf.split();
                let result = self.decode_line(&line);
                if result.is_none() {
                    self.terminated = true;
                }
                return result;
            }

            match self.body.next().await {
                Some(Ok(chunk)) => self.buf.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    self.terminated = true;
                    return Some(Err(Error::Http(e)));
                }
                None => self.eof = true,
            }
        }
    }

    /// Physical lines consumed so far, blank lines included
    pub fn lines_consumed(&self) -> usize {
        self.line
    }

    fn decode_line(&mut self, line: &[u8]) -> Option<Result<Record>> {
        self.line += 1;
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            return None;
        }

        match serde_json::from_slice::<Record>(trimmed) {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                self.terminated = true;
                Some(Err(Error::Decode {
                    line: self.line,
                    source: e,
                }))
            }
        }
    }
}

#[async_trait]
impl RecordSource for RecordStream {
    async fn next_record(&mut self) -> Option<Result<Record>> {
        RecordStream::next_record(self).await
    }
}

impl std::fmt::Debug for RecordStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStream")
            .field("line", &self.line)
            .field("eof", &self.eof)
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}
