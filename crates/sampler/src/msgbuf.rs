// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Packet-boundary-preserving send buffer for the generational
//! sampler: accumulates newline-terminated records up to a byte limit
//! and flushes as one datagram, so records are never split across a
//! send.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MsgBufError {
    #[error("record too long to ever fit in a datagram: {0:?}")]
    NameTooLong(String),
}

pub trait DatagramSink {
    fn send(&mut self, data: &[u8]);
}

pub struct MsgBuf<S: DatagramSink> {
    capacity: usize,
    buf: Vec<u8>,
    sink: S,
}

impl<S: DatagramSink> MsgBuf<S> {
    pub fn new(capacity: usize, sink: S) -> Self {
        Self {
            capacity,
            buf: Vec::with_capacity(capacity),
            sink,
        }
    }

    /// Appends `name wr rd reqs\n`, flushing first if it would
    /// overflow the buffer. A single record that alone exceeds
    /// capacity can never be sent and is reported as an error instead
    /// of silently dropped.
    pub fn push_record(
        &mut self,
        name: &str,
        wr: u64,
        rd: u64,
        reqs: u64,
    ) -> Result<(), MsgBufError> {
        let line = format!("{name} {wr} {rd} {reqs}\n");
        if line.len() > self.capacity {
            return Err(MsgBufError::NameTooLong(name.to_string()));
        }
        if self.buf.len() + line.len() > self.capacity {
            self.flush();
        }
        self.buf.extend_from_slice(line.as_bytes());
        Ok(())
    }

    pub fn flush(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        self.sink.send(&self.buf);
        self.buf.clear();
    }
}

#[cfg(test)]
#[path = "msgbuf_tests.rs"]
mod tests;
