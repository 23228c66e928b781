use crate::utils::config::{BACNET_DEFAULT_PORT, SCHEMA_VERSION};

/// Display the accepted record and address formats
pub fn display_schema(show_details: bool) {
    println!("Who-Is / I-Am Summary Trace Format");
    println!("Report Schema Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Trace records (JSON Lines, one object per line):");
        println!("  type: string             - 'who-is', 'i-am', or any other service name");
        println!("  source: string?          - Source address (absent = null)");
        println!("  destination: string?     - Destination address (absent = null)");
        println!("  low: number?             - Who-Is device instance range low limit");
        println!("  high: number?            - Who-Is device instance range high limit");
        println!("  device_id: number|array  - I-Am device instance, or [type, instance]");
        println!("  timestamp: number?       - Capture time in seconds (ignored)");
        println!();
        println!("Addresses:");
        println!("  *                        - Local broadcast");
        println!("  *:*                      - Global broadcast");
        println!("  N:*                      - Remote broadcast on network N");
        println!("  N:S                      - Station S on network N");
        println!("  S                        - Local station S");
        println!(
            "  S = 12 | 0x0a0b | 192.168.1.10[:port]   (default port {})",
            BACNET_DEFAULT_PORT
        );
    } else {
        println!("Use --show for detailed format information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Who-Is / I-Am Summary v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Summarizes BACnet device discovery traffic in decoded traces.");
}
