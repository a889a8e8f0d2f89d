//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; most stay `false` so debug builds
//! remain quiet unless a specific subsystem is being chased.

pub struct DebugFlags {
    /// Emit UI interaction logs (e.g., asset switching, slider changes).
    pub print_ui_interactions: bool,
    /// Emit detailed CSV load/save logs with timings.
    pub print_serde: bool,
    /// Emit per-asset progress while fetching from the API.
    pub print_fetch_progress: bool,
    /// Emit a line whenever the metric summaries are recomputed.
    pub print_metrics_events: bool,
    /// Emit details of UI state serialization/deserialization logs.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_serde: false,
    print_fetch_progress: false,
    print_metrics_events: false,
    print_state_serde: false,
    print_shutdown: false,
};
