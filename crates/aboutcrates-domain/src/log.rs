//! Diagnostic logging seam.
//!
//! The collector receives its logger at construction instead of reaching for a global one, so
//! tests can assert on the emitted lines.

use std::fmt;

pub trait DebugLog {
    fn debug(&self, args: fmt::Arguments<'_>);
}

impl<L: DebugLog + ?Sized> DebugLog for &L {
    fn debug(&self, args: fmt::Arguments<'_>) {
        (**self).debug(args)
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLog;

impl DebugLog for NoopLog {
    fn debug(&self, _args: fmt::Arguments<'_>) {}
}
