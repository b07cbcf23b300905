//! `inet`/`inet6` line formatting for the address list of an interface.

use crate::address::{AddressClassifier, ClassifiedAddress};
use crate::error::FormatError;
use crate::keyword::DynamicKeyword;
use crate::version::VersionResolver;

/// Tracks which address families already have a primary address within
/// one formatting run. Every later address of a set family is an alias.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FamilyState {
    pub ipv4_primary_assigned: bool,
    pub ipv6_primary_assigned: bool,
}

impl FamilyState {
    /// Render one classified address and mark its family as assigned.
    pub fn format(&mut self, address: &ClassifiedAddress) -> String {
        match address {
            ClassifiedAddress::V6 { address, prefix } => {
                let mut parts = vec!["inet6".to_string()];
                if self.ipv6_primary_assigned {
                    parts.push("alias".to_string());
                }
                parts.push(address.to_string());
                parts.push(prefix.to_string());
                self.ipv6_primary_assigned = true;
                parts.join(" ")
            }
            ClassifiedAddress::V4 { address, netmask } => {
                let mut parts = vec!["inet".to_string()];
                if self.ipv4_primary_assigned {
                    parts.push("alias".to_string());
                }
                parts.push(address.to_string());
                parts.push(netmask.to_string());
                parts.push("NONE".to_string());
                self.ipv4_primary_assigned = true;
                parts.join(" ")
            }
        }
    }
}

/// Strict formatter for the validated `addresses` list.
///
/// Resolves the autoconf spelling against the platform version and fails
/// on any token that is neither a keyword nor an IP address.
pub struct InetFormatter<'a> {
    classifier: &'a dyn AddressClassifier,
    version: &'a dyn VersionResolver,
}

impl<'a> InetFormatter<'a> {
    pub fn new(classifier: &'a dyn AddressClassifier, version: &'a dyn VersionResolver) -> Self {
        Self {
            classifier,
            version,
        }
    }

    /// One output line per input token, in input order.
    pub fn format(&self, addresses: &[String]) -> Result<Vec<String>, FormatError> {
        let mut state = FamilyState::default();
        let mut lines = Vec::with_capacity(addresses.len());

        for token in addresses {
            if let Some(keyword) = DynamicKeyword::parse(token) {
                lines.push(keyword.resolve(self.version).to_string());
                continue;
            }

            let address = self
                .classifier
                .classify(token)
                .ok_or_else(|| FormatError::NotAnAddress {
                    token: token.clone(),
                })?;
            tracing::trace!(token = %token, ?address, "classified address");
            lines.push(state.format(&address));
        }

        Ok(lines)
    }
}
