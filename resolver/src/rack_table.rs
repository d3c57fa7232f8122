use std::collections::HashMap;

use once_cell::sync::Lazy;
use utilities::logger::debug;

/// Rack assigned to any address not present in the table. Unknown nodes
/// fail open to this rather than blocking cluster operations.
pub const DEFAULT_RACK: &str = "rack-default";

static RACK_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("compute-13-10.local", "rack-1"),
        ("compute-13-12.local", "rack-1"),
        ("compute-13-14.local", "rack-2"),
        ("compute-13-16.local", "rack-2"),
        ("192.168.32.92", "rack-1"),
        ("192.168.32.94", "rack-1"),
        ("192.168.32.96", "rack-2"),
        ("192.168.32.98", "rack-2"),
    ])
});

/// Resolves a node address (hostname or IP) to its rack path.
pub fn resolve(address: &str) -> String {
    let rack = RACK_TABLE.get(address).copied().unwrap_or(DEFAULT_RACK);
    debug!(%address,%rack,"Resolved address");
    format!("/{}", rack)
}
