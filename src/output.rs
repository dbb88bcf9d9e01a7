//! Event outputs: the capability boundary between event producers and the
//! storage collaborator that batches events to disk for upload.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Destination for serialized telemetry events, implemented by the external
/// storage collaborator. Delivery guarantees belong entirely to the sink;
/// implementations must be safe to call from multiple producers.
pub trait EventSink: Send + Sync {
    fn write(&self, event: Value);
}

/// Accepts one fully-formed telemetry event and hands it toward a sink.
/// Fire and forget: the call returns immediately and never reports failure
/// back to the producer.
pub trait EventOutput<T>: Send + Sync {
    fn accept(&self, event: T);
}

/// Production path: serializes each event and performs exactly one sink write
/// per accepted event, in accept order.
pub struct ForwardingOutput<T> {
    sink: Arc<dyn EventSink>,
    _event: PhantomData<fn(T)>,
}

impl<T> ForwardingOutput<T> {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            _event: PhantomData,
        }
    }
}

impl<T: Serialize> EventOutput<T> for ForwardingOutput<T> {
    fn accept(&self, event: T) {
        match serde_json::to_value(&event) {
            Ok(value) => self.sink.write(value),
            Err(err) => warn!(error = %err, "dropping telemetry event that failed to serialize"),
        }
    }
}

/// Discards every event. Installed in place of a forwarding output when the
/// owning feature flag is disabled, so call sites need no branching.
pub struct NullOutput<T> {
    _event: PhantomData<fn(T)>,
}

impl<T> NullOutput<T> {
    pub fn new() -> Self {
        Self {
            _event: PhantomData,
        }
    }
}

impl<T> Default for NullOutput<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> EventOutput<T> for NullOutput<T> {
    fn accept(&self, _event: T) {}
}

/// Wires the output for one feature: forwarding when enabled, null otherwise.
pub fn feature_output<T>(enabled: bool, sink: Arc<dyn EventSink>) -> Box<dyn EventOutput<T>>
where
    T: Serialize + Send + Sync + 'static,
{
    if enabled {
        Box::new(ForwardingOutput::new(sink))
    } else {
        Box::new(NullOutput::new())
    }
}
