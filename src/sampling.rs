//! RUM session sampling: a configured percentage and a caller-supplied random
//! draw decide whether a session is kept.

/// True iff a session should be kept. `draw` is expected to be uniform in
/// `[0.0, 100.0)` and is injected by the caller, which owns the entropy
/// source. A rate of 100.0 keeps every session, 0.0 keeps none.
pub fn should_keep(sample_rate: f32, draw: f32) -> bool {
    draw < sample_rate
}

/// Sampler carrying the configured session sample rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    sample_rate: f32,
}

impl Sampler {
    pub fn new(sample_rate: f32) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn decide(&self, draw: f32) -> bool {
        should_keep(self.sample_rate, draw)
    }
}
