use aboutcrates_domain::DebugLog;
use std::fmt;

/// Forwards collector diagnostics to `tracing` at debug level, under this module's target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl DebugLog for TracingLog {
    fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!("{}", args);
    }
}
