use std::net::{Ipv4Addr, Ipv6Addr};

use ipnetwork::IpNetwork;

/// An address token that parsed as an IP literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifiedAddress {
    /// IPv4 host address with its dotted netmask.
    V4 { address: Ipv4Addr, netmask: Ipv4Addr },
    /// IPv6 host address with its prefix length.
    V6 { address: Ipv6Addr, prefix: u8 },
}

/// Decides whether a token is an IP address, and if so which family.
pub trait AddressClassifier {
    /// Returns `None` when the token is not an address.
    fn classify(&self, token: &str) -> Option<ClassifiedAddress>;
}

/// Classifier backed by `ipnetwork` CIDR parsing.
///
/// Accepts bare addresses (treated as `/32` or `/128`) and `addr/len`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IpNetworkClassifier;

impl AddressClassifier for IpNetworkClassifier {
    fn classify(&self, token: &str) -> Option<ClassifiedAddress> {
        match token.parse::<IpNetwork>().ok()? {
            IpNetwork::V4(net) => Some(ClassifiedAddress::V4 {
                address: net.ip(),
                netmask: net.mask(),
            }),
            IpNetwork::V6(net) => Some(ClassifiedAddress::V6 {
                address: net.ip(),
                prefix: net.prefix(),
            }),
        }
    }
}
