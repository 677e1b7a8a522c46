//! Outgoing server lines.

use psclient_core::Connection;

/// Connection that writes every outgoing line to the log.
///
/// Stands in for the socket until one is attached; popups only ever send.
#[derive(Debug, Default)]
pub struct LoggingConnection;

impl Connection for LoggingConnection {
    fn send_raw(&self, line: &str) {
        log::info!(">> {line}");
    }
}
