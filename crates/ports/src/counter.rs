// crates/ports/src/counter.rs
use line_counter_shared_kernel::{CountResult, LineCount};

use crate::source::ByteSource;

/// Counts delimiter occurrences in a stream, then rewinds it to offset 0.
///
/// Implementations must seek `source` back to the start on every exit path,
/// including errors. A failed rewind is unrecoverable and panics.
///
/// `count` may populate unset configuration with the strategy's defaults;
/// those values persist on the instance. Taking `&mut self` keeps one call
/// in flight per instance.
pub trait Counter: Send {
    /// Stable identifier used by the registry and in reports.
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns `CounterError::Read` for any read failure other than
    /// end-of-stream. End-of-stream is never an error.
    fn count(&mut self, source: &mut dyn ByteSource) -> CountResult<LineCount>;
}

impl<C: Counter + ?Sized> Counter for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn count(&mut self, source: &mut dyn ByteSource) -> CountResult<LineCount> {
        (**self).count(source)
    }
}
