//! Classification outcomes derived from a measurement record
//!
//! These are language-neutral codes: the presentation layer maps each variant
//! to its localized label.

use std::fmt;

/// Why a web resource was judged inaccessible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingReason {
    /// DNS resolution was interfered with
    Dns,
    /// The TCP connection was refused or dropped
    TcpIp,
    /// The HTTP response diverged from the control measurement
    HttpDiff,
    /// The HTTP request failed outright
    HttpFailure,
}

impl fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockingReason::Dns => write!(f, "dns"),
            BlockingReason::TcpIp => write!(f, "tcp_ip"),
            BlockingReason::HttpDiff => write!(f, "http-diff"),
            BlockingReason::HttpFailure => write!(f, "http-failure"),
        }
    }
}

/// Outcome of a single service reachability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Failed,
    Ok,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Failed => write!(f, "failed"),
            ServiceStatus::Ok => write!(f, "ok"),
        }
    }
}

/// Best streaming resolution a connection can sustain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoQuality {
    P240,
    P360,
    P480,
    P720,
    P720Ext,
    P1080,
    P1080Ext,
    P1440,
    P1440Ext,
    P2160,
    P2160Ext,
}

impl VideoQuality {
    /// Band a median bitrate (kbit/s) into the best sustainable resolution.
    ///
    /// `extended` selects the alternate labels for the three highest tiers;
    /// it has no effect below 720p.
    pub fn from_bitrate(kbps: f64, extended: bool) -> Self {
        if kbps < 600.0 {
            VideoQuality::P240
        } else if kbps < 1000.0 {
            VideoQuality::P360
        } else if kbps < 2500.0 {
            VideoQuality::P480
        } else if kbps < 5000.0 {
            if extended {
                VideoQuality::P720Ext
            } else {
                VideoQuality::P720
            }
        } else if kbps < 8000.0 {
            if extended {
                VideoQuality::P1080Ext
            } else {
                VideoQuality::P1080
            }
        } else if kbps < 16000.0 {
            if extended {
                VideoQuality::P1440Ext
            } else {
                VideoQuality::P1440
            }
        } else if extended {
            VideoQuality::P2160Ext
        } else {
            VideoQuality::P2160
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoQuality::P240 => write!(f, "240p"),
            VideoQuality::P360 => write!(f, "360p"),
            VideoQuality::P480 => write!(f, "480p"),
            VideoQuality::P720 => write!(f, "720p"),
            VideoQuality::P720Ext => write!(f, "720p-ext"),
            VideoQuality::P1080 => write!(f, "1080p"),
            VideoQuality::P1080Ext => write!(f, "1080p-ext"),
            VideoQuality::P1440 => write!(f, "1440p"),
            VideoQuality::P1440Ext => write!(f, "1440p-ext"),
            VideoQuality::P2160 => write!(f, "2160p"),
            VideoQuality::P2160Ext => write!(f, "2160p-ext"),
        }
    }
}
