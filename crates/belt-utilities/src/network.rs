//! Hostname to IP resolution

use async_trait::async_trait;
use belt_core::console::prompt_line;
use belt_core::utility::{Utility, UtilityError};
use std::net::IpAddr;

/// Resolves a hostname to its IP addresses
pub struct HostToIpUtility;

impl HostToIpUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HostToIpUtility {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve via the system resolver; duplicates from per-port entries removed
async fn resolve_host(hostname: &str) -> std::io::Result<Vec<IpAddr>> {
    let mut addresses: Vec<IpAddr> = tokio::net::lookup_host((hostname, 0))
        .await?
        .map(|socket_addr| socket_addr.ip())
        .collect();
    addresses.dedup();
    Ok(addresses)
}

#[async_trait]
impl Utility for HostToIpUtility {
    fn name(&self) -> &str {
        "Host To IP"
    }

    fn aliases(&self) -> &[&str] {
        &["dns"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let hostname = prompt_line("Please enter a hostname: ")?;
        if hostname.is_empty() {
            println!("No hostname provided");
            return Ok(());
        }

        println!("Hostname: {hostname}");
        match resolve_host(&hostname).await {
            Ok(addresses) => {
                for (i, address) in addresses.iter().enumerate() {
                    println!("IP[{}]: {address}", i + 1);
                }
            }
            Err(e) => println!("Invalid hostname - {e}"),
        }
        Ok(())
    }
}
