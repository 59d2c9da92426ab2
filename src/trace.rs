//! Feature-gated tracing macros.
//!
//! With the `tracing` feature these forward to `tracing::info_span!` and
//! `tracing::info!`. Without it, spans become `NoopSpan` and events only
//! evaluate their field expressions.
//!
//! Instrumented operations:
//! - `box_blur` opens a `box_blur` span with image size and window radii.
//! - `locate` opens a `locate` span with haystack and needle sizes, and emits
//!   a `locate_done` event with the number of candidates visited, the
//!   survivors of the moment and projection filters, and whether a match
//!   was found.

/// Opens an info-level span around a top-level operation.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an info-level event with `key = value` fields.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in span guard so `trace_span!(..).entered()` compiles either way.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
