use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, SecondsFormat, Utc};
use submit_core::Moment;

pub trait Clock: Send + Sync {
    fn now(&self) -> Moment;
}

/// Wall clock: UTC ISO-8601 for payloads, local time for status entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Moment {
        Moment {
            iso8601: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            display: Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        }
    }
}

/// Generates submission ids unique within one process.
///
/// An id is the base-36 wall-clock milliseconds followed by a fixed-width
/// base-36 sequence value mixed with a per-process seed.
#[derive(Debug)]
pub struct SubmissionIds {
    seed: u64,
    next: AtomicU64,
}

impl SubmissionIds {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u64 ^ d.as_secs().rotate_left(32))
            .unwrap_or(0);
        Self {
            seed,
            next: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> String {
        let seq = self.next.fetch_add(1, Ordering::Relaxed);
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let mut id = to_base36(millis);
        let tail = to_base36(seq ^ self.seed);
        // Fixed width keeps the two halves from running into each other.
        id.extend(std::iter::repeat('0').take(13 - tail.len()));
        id.push_str(&tail);
        id
    }
}

impl Default for SubmissionIds {
    fn default() -> Self {
        Self::new()
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::with_capacity(13);
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
