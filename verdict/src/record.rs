//! Measurement record structures
//!
//! The decoded form of the result document produced by the measurement
//! engine. Every field is optional: a missing field means the test did not
//! run or the metric does not apply, which is distinct from a measured
//! false/zero value. The record is read-only input for the verdict accessors.

use crate::constants::{
    BLOCKING_DNS, BLOCKING_HTTP_DIFF, BLOCKING_HTTP_FAILURE, BLOCKING_TCP_IP, STATUS_BLOCKED,
    STATUS_OK,
};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Decoded form of the `blocking` field.
///
/// Unrecognized wire values are kept verbatim so they stay distinguishable
/// from an absent field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WireBlocking {
    Dns,
    TcpIp,
    HttpDiff,
    HttpFailure,
    Unrecognized(String),
}

impl From<String> for WireBlocking {
    fn from(value: String) -> Self {
        match value.as_str() {
            BLOCKING_DNS => WireBlocking::Dns,
            BLOCKING_TCP_IP => WireBlocking::TcpIp,
            BLOCKING_HTTP_DIFF => WireBlocking::HttpDiff,
            BLOCKING_HTTP_FAILURE => WireBlocking::HttpFailure,
            _ => {
                debug!(value = %value, "unrecognized blocking value");
                WireBlocking::Unrecognized(value)
            }
        }
    }
}

impl From<WireBlocking> for String {
    fn from(value: WireBlocking) -> Self {
        match value {
            WireBlocking::Dns => BLOCKING_DNS.to_string(),
            WireBlocking::TcpIp => BLOCKING_TCP_IP.to_string(),
            WireBlocking::HttpDiff => BLOCKING_HTTP_DIFF.to_string(),
            WireBlocking::HttpFailure => BLOCKING_HTTP_FAILURE.to_string(),
            WireBlocking::Unrecognized(raw) => raw,
        }
    }
}

/// Decoded form of a service status field.
///
/// Only `"blocked"` is meaningful on its own; every other string is kept and
/// later classified as reachable. Values that are neither `"blocked"` nor
/// `"ok"` are flagged at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WireStatus {
    Blocked,
    Other(String),
}

impl From<String> for WireStatus {
    fn from(value: String) -> Self {
        if value == STATUS_BLOCKED {
            WireStatus::Blocked
        } else {
            if value != STATUS_OK {
                debug!(value = %value, "unrecognized service status");
            }
            WireStatus::Other(value)
        }
    }
}

impl From<WireStatus> for String {
    fn from(value: WireStatus) -> Self {
        match value {
            WireStatus::Blocked => STATUS_BLOCKED.to_string(),
            WireStatus::Other(raw) => raw,
        }
    }
}

/// A decoded measurement result.
///
/// Field names match the wire schema 1:1. Unknown fields in the document are
/// ignored so results from newer probes still decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementResult {
    /// Blocking verdict reported by the website test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking: Option<WireBlocking>,
    /// Whether the tested resource was reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessible: Option<bool>,
    /// Request lines sent during the HTTP manipulation check
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sent: Vec<String>,
    /// Response lines received during the HTTP manipulation check
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub received: Vec<String>,
    /// Probe-reported error string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    /// Address of the throughput test server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    /// Name of the throughput test server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// Country of the throughput test server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_country: Option<String>,
    /// WhatsApp endpoint reachability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_endpoints_status: Option<WireStatus>,
    /// WhatsApp web interface reachability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_web_status: Option<WireStatus>,
    /// WhatsApp registration server reachability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_server_status: Option<WireStatus>,
    /// Facebook Messenger TCP-level blocking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_tcp_blocking: Option<bool>,
    /// Facebook Messenger DNS-level blocking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_dns_blocking: Option<bool>,
    /// Telegram endpoint HTTP-level blocking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_http_blocking: Option<bool>,
    /// Telegram endpoint TCP-level blocking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_tcp_blocking: Option<bool>,
    /// Telegram web interface reachability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_web_status: Option<WireStatus>,
    /// Basic throughput summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple: Option<Simple>,
    /// Detailed throughput metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<Advanced>,
    /// HTTP tampering flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tampering: Option<Tampering>,
}

impl MeasurementResult {
    /// Decode a result document produced by the measurement engine.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to the wire format with indentation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Basic throughput summary (`simple` sub-record).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Simple {
    /// Upload throughput in kbit/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<f64>,
    /// Download throughput in kbit/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<f64>,
    /// Round-trip latency in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<f64>,
    /// Median streaming bitrate in kbit/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_bitrate: Option<f64>,
    /// Minimum playout delay in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_playout_delay: Option<f64>,
}

/// Detailed throughput metrics (`advanced` sub-record).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Advanced {
    /// Packet loss as a fraction in [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_loss: Option<f64>,
    /// Out-of-order delivery as a fraction in [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_order: Option<f64>,
    /// Average round-trip time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rtt: Option<f64>,
    /// Maximum round-trip time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rtt: Option<f64>,
    /// Maximum segment size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mss: Option<f64>,
    /// Number of timeouts observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<f64>,
}

/// HTTP tampering flags (`tampering` sub-record).
///
/// Each flag marks one protocol element altered in transit. Flags missing
/// from the document decode as false; a missing sub-record stays `None` on
/// the parent record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tampering {
    #[serde(default)]
    pub header_field_name: bool,
    #[serde(default)]
    pub header_field_number: bool,
    #[serde(default)]
    pub header_field_value: bool,
    #[serde(default)]
    pub header_name_capitalization: bool,
    #[serde(default)]
    pub request_line_capitalization: bool,
    /// Aggregate flag set by the probe itself
    #[serde(default)]
    pub total: bool,
}

impl Tampering {
    /// True when any middlebox interference was observed.
    pub fn is_anomaly(&self) -> bool {
        self.header_field_name
            || self.header_field_number
            || self.header_field_value
            || self.header_name_capitalization
            || self.request_line_capitalization
            || self.total
    }
}
