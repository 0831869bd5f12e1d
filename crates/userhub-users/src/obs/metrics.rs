//! Per-verb request metrics for the users service.
//!
//! Every CRUD verb owns a request counter, an error counter and a latency
//! histogram. Histogram buckets are fixed in microseconds to keep the hot
//! path integer-only; rendering converts them to seconds.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// CRUD verb a handler serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    Get,
    Put,
    Delete,
}

impl Verb {
    pub const ALL: [Verb; 4] = [Verb::Add, Verb::Get, Verb::Put, Verb::Delete];

    /// Suffix used in metric names (`RequestCountAdd`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Add => "Add",
            Verb::Get => "Get",
            Verb::Put => "Put",
            Verb::Delete => "Delete",
        }
    }
}

#[derive(Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} counter");
        let _ = writeln!(out, "{name} {}", self.get());
    }
}

// 100us, 500us, 1ms, 5ms, 10ms, 50ms, 100ms, 500ms, 1s
const BUCKETS_MICROS: [u64; 9] = [100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000];

#[derive(Default)]
pub struct Histogram {
    count: AtomicU64,
    sum_micros: AtomicU64,
    buckets: [AtomicU64; 9],
}

impl Histogram {
    /// Observe a duration; every bucket at or above it is incremented.
    pub fn observe(&self, duration: Duration) {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);

        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_micros.fetch_add(micros, Ordering::Relaxed);

        for (i, &b) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= b {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} histogram");
        for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
            let n = self.buckets[i].load(Ordering::Relaxed);
            let _ = writeln!(out, "{name}_bucket{{le=\"{}\"}} {n}", micros_to_secs(le));
        }
        let count = self.count();
        let _ = writeln!(out, "{name}_bucket{{le=\"+Inf\"}} {count}");
        let sum = micros_to_secs(self.sum_micros.load(Ordering::Relaxed));
        let _ = writeln!(out, "{name}_sum {sum}");
        let _ = writeln!(out, "{name}_count {count}");
    }
}

fn micros_to_secs(micros: u64) -> f64 {
    micros as f64 / 1_000_000.0
}

#[derive(Default)]
pub struct VerbMetrics {
    pub requests: Counter,
    pub errors: Counter,
    pub latency: Histogram,
}

#[derive(Default)]
pub struct UserMetrics {
    add: VerbMetrics,
    get: VerbMetrics,
    put: VerbMetrics,
    delete: VerbMetrics,
}

impl UserMetrics {
    pub fn verb(&self, verb: Verb) -> &VerbMetrics {
        match verb {
            Verb::Add => &self.add,
            Verb::Get => &self.get,
            Verb::Put => &self.put,
            Verb::Delete => &self.delete,
        }
    }

    /// Count a successful request and record its latency.
    pub fn record_success(&self, verb: Verb, elapsed: Duration) {
        let m = self.verb(verb);
        m.requests.inc();
        m.latency.observe(elapsed);
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        tracing::debug!(verb = verb.as_str(), micros, "request served");
    }

    pub fn record_error(&self, verb: Verb) {
        self.verb(verb).errors.inc();
    }

    /// Render every series in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for verb in Verb::ALL {
            let m = self.verb(verb);
            let v = verb.as_str();
            m.requests.render(
                &format!("RequestCount{v}"),
                &format!("Successful {v} requests."),
                &mut out,
            );
            m.errors.render(
                &format!("Error{v}"),
                &format!("Failed {v} requests."),
                &mut out,
            );
            m.latency.render(
                &format!("Latency{v}"),
                &format!("Latency of successful {v} requests in seconds."),
                &mut out,
            );
        }
        out
    }
}
