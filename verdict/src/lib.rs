//! Measurement Verdict Library
//!
//! Turns decoded network-measurement results into human-interpretable
//! verdicts: blocking classification, messaging-service reachability,
//! throughput scaling, and video-quality banding. Measurement execution and
//! presentation both live elsewhere; this crate only decodes the result
//! document and answers queries over it.

pub mod classify;
pub mod constants;
pub mod error;
pub mod record;
pub mod scale;

mod interpret;

pub use classify::{BlockingReason, ServiceStatus, VideoQuality};
pub use constants::*;
pub use error::DecodeError;
pub use record::{Advanced, MeasurementResult, Simple, Tampering, WireBlocking, WireStatus};
pub use scale::{BitrateUnit, FixedDecimal, ScaledBitrate, scale_bitrate};
