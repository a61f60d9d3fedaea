//! Ethernet configuration types

use std::net::Ipv4Addr;

/// Static IPv4 configuration for the wired interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIpConfig {
    pub ip: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub dns1: Ipv4Addr,
    /// `0.0.0.0` when no secondary resolver is wanted
    pub dns2: Ipv4Addr,
}

impl StaticIpConfig {
    pub fn new(ip: Ipv4Addr, gateway: Ipv4Addr, netmask: Ipv4Addr, dns1: Ipv4Addr) -> Self {
        Self {
            ip,
            gateway,
            netmask,
            dns1,
            dns2: Ipv4Addr::UNSPECIFIED,
        }
    }

    pub fn with_dns2(mut self, dns2: Ipv4Addr) -> Self {
        self.dns2 = dns2;
        self
    }

    /// Dotted-quad strings in vendor argument order: ip, gateway, netmask, dns1, dns2
    pub(crate) fn vendor_args(&self) -> [String; 5] {
        [
            self.ip.to_string(),
            self.gateway.to_string(),
            self.netmask.to_string(),
            self.dns1.to_string(),
            self.dns2.to_string(),
        ]
    }
}
