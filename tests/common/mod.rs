//! Shared test helpers
#![allow(dead_code)]

use shorturl_client::infrastructure::config::{default_headers, REQUEST_TIMEOUT};
use shorturl_client::{ApiClient, ClientSettings};
use std::io;
use std::sync::{Arc, Mutex};

pub fn settings(base_url: &str) -> ClientSettings {
    ClientSettings {
        base_url: base_url.to_string(),
        timeout: REQUEST_TIMEOUT,
        default_headers: default_headers(),
    }
}

pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(settings(base_url)).expect("Failed to build client")
}

/// Log lines written by the scoped test subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route WARN and above to a buffer for as long as the guard lives.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
