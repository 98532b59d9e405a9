//! Wire-format string constants

/// `blocking` value for DNS-level interference
pub const BLOCKING_DNS: &str = "dns";

/// `blocking` value for TCP/IP-level blocking
pub const BLOCKING_TCP_IP: &str = "tcp_ip";

/// `blocking` value for an HTTP response diverging from the control
pub const BLOCKING_HTTP_DIFF: &str = "http-diff";

/// `blocking` value for a failed HTTP request
pub const BLOCKING_HTTP_FAILURE: &str = "http-failure";

/// Service status reported when an endpoint is blocked
pub const STATUS_BLOCKED: &str = "blocked";

/// Service status reported when an endpoint is reachable
pub const STATUS_OK: &str = "ok";
