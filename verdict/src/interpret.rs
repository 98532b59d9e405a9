//! Verdict accessors over a decoded measurement record
//!
//! Every accessor is total: data the probe did not produce surfaces as
//! `None`, never as a panic. Each sub-record is resolved through its own
//! guard, so a missing `simple` or `advanced` block and a missing field
//! inside one both map to the same "not available" outcome.

use crate::classify::{BlockingReason, ServiceStatus, VideoQuality};
use crate::record::{MeasurementResult, WireBlocking, WireStatus};
use crate::scale::{FixedDecimal, ScaledBitrate, scale_bitrate};

fn classify_status(status: Option<&WireStatus>) -> Option<ServiceStatus> {
    match status? {
        WireStatus::Blocked => Some(ServiceStatus::Failed),
        WireStatus::Other(_) => Some(ServiceStatus::Ok),
    }
}

fn classify_flag(blocked: Option<bool>) -> Option<ServiceStatus> {
    blocked.map(|blocked| {
        if blocked {
            ServiceStatus::Failed
        } else {
            ServiceStatus::Ok
        }
    })
}

impl MeasurementResult {
    /// Why the tested resource was judged blocked.
    ///
    /// Absent and unrecognized `blocking` values both yield `None`; the
    /// unrecognized case was already flagged at decode time.
    pub fn blocking_reason(&self) -> Option<BlockingReason> {
        match self.blocking.as_ref()? {
            WireBlocking::Dns => Some(BlockingReason::Dns),
            WireBlocking::TcpIp => Some(BlockingReason::TcpIp),
            WireBlocking::HttpDiff => Some(BlockingReason::HttpDiff),
            WireBlocking::HttpFailure => Some(BlockingReason::HttpFailure),
            WireBlocking::Unrecognized(_) => None,
        }
    }

    /// Reachability of the WhatsApp endpoints.
    pub fn whatsapp_endpoints(&self) -> Option<ServiceStatus> {
        classify_status(self.whatsapp_endpoints_status.as_ref())
    }

    /// Reachability of the WhatsApp web interface.
    pub fn whatsapp_web(&self) -> Option<ServiceStatus> {
        classify_status(self.whatsapp_web_status.as_ref())
    }

    /// Reachability of the WhatsApp registration server.
    pub fn whatsapp_registration(&self) -> Option<ServiceStatus> {
        classify_status(self.registration_server_status.as_ref())
    }

    /// Reachability of the Telegram web interface.
    pub fn telegram_web(&self) -> Option<ServiceStatus> {
        classify_status(self.telegram_web_status.as_ref())
    }

    /// Joint HTTP/TCP reachability of the Telegram endpoints.
    ///
    /// Needs both flags; either one missing means the test did not finish.
    pub fn telegram_endpoints(&self) -> Option<ServiceStatus> {
        let http = self.telegram_http_blocking?;
        let tcp = self.telegram_tcp_blocking?;
        Some(if http || tcp {
            ServiceStatus::Failed
        } else {
            ServiceStatus::Ok
        })
    }

    /// DNS-level reachability of Facebook Messenger.
    pub fn facebook_dns(&self) -> Option<ServiceStatus> {
        classify_flag(self.facebook_dns_blocking)
    }

    /// TCP-level reachability of Facebook Messenger.
    pub fn facebook_tcp(&self) -> Option<ServiceStatus> {
        classify_flag(self.facebook_tcp_blocking)
    }

    /// Upload throughput scaled into its display unit.
    pub fn upload(&self) -> Option<ScaledBitrate> {
        self.simple.as_ref()?.upload.map(scale_bitrate)
    }

    /// Download throughput scaled into its display unit.
    pub fn download(&self) -> Option<ScaledBitrate> {
        self.simple.as_ref()?.download.map(scale_bitrate)
    }

    /// Median streaming bitrate scaled into its display unit.
    pub fn median_bitrate(&self) -> Option<ScaledBitrate> {
        self.simple.as_ref()?.median_bitrate.map(scale_bitrate)
    }

    /// Round-trip latency in milliseconds, one fraction digit.
    pub fn ping(&self) -> Option<FixedDecimal> {
        self.simple.as_ref()?.ping.map(|v| FixedDecimal::new(v, 1))
    }

    /// Minimum playout delay in milliseconds, two fraction digits.
    pub fn playout_delay(&self) -> Option<FixedDecimal> {
        self.simple
            .as_ref()?
            .min_playout_delay
            .map(|v| FixedDecimal::new(v, 2))
    }

    /// Best sustainable streaming resolution for the measured median bitrate.
    pub fn video_quality(&self, extended: bool) -> Option<VideoQuality> {
        let bitrate = self.simple.as_ref()?.median_bitrate?;
        Some(VideoQuality::from_bitrate(bitrate, extended))
    }

    /// Throughput server description line.
    pub fn server(&self) -> Option<String> {
        let name = self.server_name.as_ref()?;
        let country = self.server_country.as_ref()?;
        Some(format!("{name} - {country}"))
    }

    /// Packet loss as a percentage, three fraction digits.
    pub fn packet_loss_pct(&self) -> Option<FixedDecimal> {
        self.advanced
            .as_ref()?
            .packet_loss
            .map(|v| FixedDecimal::new(v * 100.0, 3))
    }

    /// Out-of-order delivery as a percentage, one fraction digit.
    pub fn out_of_order_pct(&self) -> Option<FixedDecimal> {
        self.advanced
            .as_ref()?
            .out_of_order
            .map(|v| FixedDecimal::new(v * 100.0, 1))
    }

    /// Average round-trip time in milliseconds, one fraction digit.
    pub fn avg_rtt(&self) -> Option<FixedDecimal> {
        self.advanced
            .as_ref()?
            .avg_rtt
            .map(|v| FixedDecimal::new(v, 1))
    }

    /// Maximum round-trip time in milliseconds, one fraction digit.
    pub fn max_rtt(&self) -> Option<FixedDecimal> {
        self.advanced
            .as_ref()?
            .max_rtt
            .map(|v| FixedDecimal::new(v, 1))
    }

    /// Maximum segment size in bytes, no fraction digits.
    pub fn mss(&self) -> Option<FixedDecimal> {
        self.advanced.as_ref()?.mss.map(|v| FixedDecimal::new(v, 0))
    }

    /// Timeouts observed during the test, no fraction digits.
    pub fn timeouts(&self) -> Option<FixedDecimal> {
        self.advanced
            .as_ref()?
            .timeouts
            .map(|v| FixedDecimal::new(v, 0))
    }

    /// Whether the HTTP manipulation check observed any interference.
    pub fn tampering_anomaly(&self) -> Option<bool> {
        self.tampering.map(|t| t.is_anomaly())
    }
}
