//! Analytics adapters.
//!
//! Provides [`JsonlAnalyticsSink`], a JSONL file writer that implements
//! the [`AnalyticsSink`](haul_application::AnalyticsSink) port.

mod jsonl_sink;

pub use jsonl_sink::JsonlAnalyticsSink;
