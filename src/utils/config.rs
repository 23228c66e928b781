//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of ranked rows shown per table unless told otherwise
pub const DEFAULT_TOP_N: usize = 20;

/// Upper bound accepted for `--top`
pub const MAX_TOP_N: usize = 1000;

// BACnet/IP well-known UDP port (0xBAC0)
pub const BACNET_DEFAULT_PORT: u16 = 47808;

// Network 65535 is reserved for the global broadcast
pub const GLOBAL_BROADCAST_NETWORK: u16 = 0xFFFF;

// Record type names (different decoders use different spellings)
pub const WHO_IS_TYPE_NAMES: &[&str] = &["who-is", "whois", "WhoIsRequest"];
pub const I_AM_TYPE_NAMES: &[&str] = &["i-am", "iam", "IAmRequest"];
