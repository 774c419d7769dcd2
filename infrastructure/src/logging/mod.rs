//! Logging infrastructure: the side-channel gateway log sink.
//!
//! Provides [`TracingLogSink`], which implements the
//! [`LogSink`](smartlead_application::LogSink) port by emitting `tracing` events.

mod tracing_sink;

pub use tracing_sink::TracingLogSink;
