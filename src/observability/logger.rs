//! Structured JSON logger
//!
//! - One log line = one event
//! - Synchronous, no buffering
//! - Deterministic key ordering: event first, then fields sorted by key
//! - Errors go to stderr, everything else to stdout

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Debug,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    ///
    /// Fields are emitted in sorted key order so identical events produce
    /// identical lines.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if severity >= Severity::Error {
            Self::log_to_writer(severity, event, fields, &mut io::stderr());
        } else {
            Self::log_to_writer(severity, event, fields, &mut io::stdout());
        }
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut sorted: Vec<(&str, &str)> = fields.to_vec();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut line = String::with_capacity(128);
        line.push('{');
        push_pair(&mut line, "severity", severity.as_str());
        line.push(',');
        push_pair(&mut line, "event", event);
        for (key, value) in sorted {
            line.push(',');
            push_pair(&mut line, key, value);
        }
        line.push('}');
        line.push('\n');

        // A failed log write must not take the process down
        let _ = writer.write_all(line.as_bytes());
    }
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    push_json_string(out, key);
    out.push(':');
    push_json_string(out, value);
}

fn push_json_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Logger::log_to_writer(severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_one_line_valid_json() {
        let line = render(Severity::Info, "server_started", &[("port", "5000")]);
        assert!(line.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["severity"], "INFO");
        assert_eq!(value["event"], "server_started");
        assert_eq!(value["port"], "5000");
    }

    #[test]
    fn test_fields_sorted_deterministically() {
        let a = render(Severity::Info, "e", &[("zebra", "1"), ("alpha", "2")]);
        let b = render(Severity::Info, "e", &[("alpha", "2"), ("zebra", "1")]);
        assert_eq!(a, b);
        assert!(a.find("alpha").unwrap() < a.find("zebra").unwrap());
    }

    #[test]
    fn test_escaping() {
        let line = render(Severity::Warn, "odd\"event", &[("msg", "line1\nline2")]);
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["event"], "odd\"event");
        assert_eq!(value["msg"], "line1\nline2");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Warn < Severity::Error);
    }
}
