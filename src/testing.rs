//! Test doubles for the HTTP collaborator

use crate::error::{PreviewError, Result};
use crate::tools::fetch::{HttpClient, HttpResponse};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// Body reader that flags when it has been dropped, optionally failing
/// after the first chunk.
pub(crate) struct TrackedBody {
    inner: Cursor<Vec<u8>>,
    fail_after_first_read: bool,
    reads: usize,
    released: Arc<AtomicBool>,
}

impl Read for TrackedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail_after_first_read && self.reads > 0 {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"));
        }
        self.reads += 1;
        let limit = if self.fail_after_first_read { buf.len().min(16) } else { buf.len() };
        self.inner.read(&mut buf[..limit])
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Canned-response client that records the URLs it was asked for.
pub(crate) struct StubClient {
    status: StatusCode,
    body: Vec<u8>,
    fail_mid_body: bool,
    network_error: Option<String>,
    released: Arc<AtomicBool>,
    pub(crate) requested: RefCell<Vec<String>>,
}

impl StubClient {
    pub(crate) fn ok(body: &str) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    pub(crate) fn with_status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            fail_mid_body: false,
            network_error: None,
            released: Arc::new(AtomicBool::new(false)),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn unreachable(msg: &str) -> Self {
        let mut stub = Self::ok("");
        stub.network_error = Some(msg.to_string());
        stub
    }

    pub(crate) fn failing_mid_body(body: &str) -> Self {
        let mut stub = Self::ok(body);
        stub.fail_mid_body = true;
        stub
    }

    pub(crate) fn body_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

impl HttpClient for StubClient {
    fn get_stream(&self, url: &Url) -> Result<HttpResponse> {
        self.requested.borrow_mut().push(url.to_string());
        if let Some(msg) = &self.network_error {
            return Err(PreviewError::Request(msg.clone()));
        }
        let body = TrackedBody {
            inner: Cursor::new(self.body.clone()),
            fail_after_first_read: self.fail_mid_body,
            reads: 0,
            released: Arc::clone(&self.released),
        };
        Ok(HttpResponse::new(self.status, body))
    }
}
