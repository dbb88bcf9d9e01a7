//! Event routing through an initialized core: forwarding vs null outputs,
//! write ordering, and session sampling.

use std::sync::Arc;

use beacon::{
    EventSink, LogEvent, LogLevel, RumEvent, RumEventKind, SpanEvent, TelemetryConfig,
    TelemetryCore,
};
use parking_lot::Mutex;
use serde_json::{json, Value};

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<Value>>,
}

impl RecordingSink {
    fn recorded(&self) -> Vec<Value> {
        self.events.lock().clone()
    }
}

impl EventSink for RecordingSink {
    fn write(&self, event: Value) {
        self.events.lock().push(event);
    }
}

fn span(operation: &str, n: u64) -> SpanEvent {
    SpanEvent {
        ts: beacon::events::now_rfc3339(),
        trace_id: n,
        span_id: n,
        operation: operation.to_string(),
        service: None,
        duration_ms: 5,
        is_first_party: true,
    }
}

#[test]
fn all_features_enabled_routes_each_kind_to_the_sink() {
    let config = TelemetryConfig::builder_with_rum("app-id", "token", "prod")
        .build()
        .unwrap();
    let sink = Arc::new(RecordingSink::default());
    let core = TelemetryCore::initialize(config, sink.clone());

    core.logs().accept(LogEvent::with_now(LogLevel::Info, "started"));
    core.traces().accept(span("GET /users", 1));
    core.rum()
        .accept(RumEvent::with_now("s1", RumEventKind::View, json!({ "name": "Home" })));

    let events = sink.recorded();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["message"], "started");
    assert_eq!(events[1]["operation"], "GET /users");
    assert_eq!(events[2]["session_id"], "s1");
}

#[test]
fn write_order_matches_accept_order_per_output() {
    let config = TelemetryConfig::builder("token", "prod").build().unwrap();
    let sink = Arc::new(RecordingSink::default());
    let core = TelemetryCore::initialize(config, sink.clone());

    for n in 0..10 {
        core.traces().accept(span("op", n));
    }
    let events = sink.recorded();
    assert_eq!(events.len(), 10);
    for (n, event) in events.iter().enumerate() {
        assert_eq!(event["trace_id"], n as u64);
    }
}

#[test]
fn disabled_rum_discards_events_without_branching_at_call_sites() {
    let config = TelemetryConfig::builder("token", "prod").build().unwrap();
    let sink = Arc::new(RecordingSink::default());
    let core = TelemetryCore::initialize(config, sink.clone());

    for _ in 0..50 {
        core.rum()
            .accept(RumEvent::with_now("s1", RumEventKind::Error, json!({})));
    }
    assert!(sink.recorded().is_empty());
}

#[test]
fn sampled_out_session_events_are_not_produced() {
    let config = TelemetryConfig::builder_with_rum("app-id", "token", "prod")
        .session_sample_rate(0.0)
        .build()
        .unwrap();
    let sink = Arc::new(RecordingSink::default());
    let core = TelemetryCore::initialize(config, sink.clone());

    // The producer consults the sampler before pushing session events.
    if core.sample_session(12.5) {
        core.rum()
            .accept(RumEvent::with_now("s1", RumEventKind::View, json!({})));
    }
    assert!(sink.recorded().is_empty());
}

#[test]
fn kept_session_events_flow_through() {
    let config = TelemetryConfig::builder_with_rum("app-id", "token", "prod")
        .session_sample_rate(100.0)
        .build()
        .unwrap();
    let sink = Arc::new(RecordingSink::default());
    let core = TelemetryCore::initialize(config, sink.clone());

    if core.sample_session(99.9) {
        core.rum()
            .accept(RumEvent::with_now("s1", RumEventKind::View, json!({})));
    }
    assert_eq!(sink.recorded().len(), 1);
}

#[test]
fn file_backed_sink_receives_one_json_line_per_event() {
    use std::io::Write;

    struct FileSink {
        file: Mutex<std::fs::File>,
    }

    impl EventSink for FileSink {
        fn write(&self, event: Value) {
            // Fire and forget: sink failures never reach the producer.
            let _ = writeln!(self.file.lock(), "{}", event);
        }
    }

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("events.ndjson");
    let sink = Arc::new(FileSink {
        file: Mutex::new(std::fs::File::create(&path).unwrap()),
    });

    let config = TelemetryConfig::builder("token", "prod").build().unwrap();
    let core = TelemetryCore::initialize(config, sink);
    core.logs().accept(LogEvent::with_now(LogLevel::Info, "first"));
    core.logs().accept(LogEvent::with_now(LogLevel::Warn, "second"));

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["message"], "first");
    assert_eq!(lines[1]["level"], "warn");
}

#[test]
fn config_is_shared_read_only_across_threads() {
    let config = TelemetryConfig::builder("token", "prod")
        .track_first_party_hosts(["example.com"])
        .build()
        .unwrap();
    let core = TelemetryCore::initialize(config, Arc::new(RecordingSink::default()));
    let shared = core.config().clone();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = shared.clone();
            std::thread::spawn(move || {
                assert!(config.is_first_party("api.example.com"));
                assert_eq!(config.environment, "prod");
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
