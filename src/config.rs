//! Tunable knobs that do not change saturation semantics (§4.6, §5 Memory).

/// Configuration for a single [`crate::classify::classify`] call.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Multiplier applied to the concept count when pre-sizing the concept
    /// worklist. The design notes recommend at least 2.
    pub worklist_capacity_factor: usize,

    /// Multiplier applied to the concept count when pre-sizing the link worklist.
    /// The design notes recommend at least 1.
    pub link_worklist_capacity_factor: usize,

    /// Per-role link-vector length above which a future implementation might
    /// switch `linkMap`/`predMap` from linear-scan vectors to a hash set, per the
    /// "Sets as flat vectors with linear scan" design note. Recorded for profiling;
    /// this single-threaded implementation never acts on it.
    pub link_set_threshold: usize,

    /// Whether to emit `log::info!` milestones at stage boundaries (normalize,
    /// saturate, reduce) in addition to the always-on `log::debug!` detail.
    pub log_progress: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            worklist_capacity_factor: 2,
            link_worklist_capacity_factor: 1,
            link_set_threshold: 64,
            log_progress: true,
        }
    }
}
