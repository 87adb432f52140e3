use serde::{Deserialize, Serialize};

/// The two reporting phases of a run, announced in strict sequence:
/// `Calculation` (one notification per asset packed) followed by `Placement`
/// (one notification per placement drawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Calculation,
    Placement,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Calculation => "calculation",
            Phase::Placement => "placement",
        }
    }
}

/// Callback contract invoked synchronously from the engine's own thread.
///
/// `phase` is `Some` exactly once per phase, on the opening `percent = 0`
/// notification. Implementations must not panic.
pub trait Progress {
    fn report(&mut self, percent: u8, phase: Option<Phase>);
}

/// Sink for callers that do not observe progress.
pub struct NullProgress;

impl Progress for NullProgress {
    fn report(&mut self, _percent: u8, _phase: Option<Phase>) {}
}

impl<F: FnMut(u8, Option<Phase>)> Progress for F {
    fn report(&mut self, percent: u8, phase: Option<Phase>) {
        self(percent, phase)
    }
}

/// `floor(100 * done / total)`, saturating at 100 for an empty total.
pub(crate) fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((done as f64 / total as f64) * 100.0).floor() as u8
}
