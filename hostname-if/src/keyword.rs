use std::cmp::Ordering;

use crate::version::VersionResolver;

/// Last platform release that spells IPv6 autoconfiguration `rtsol`.
pub const AUTOCONF_THRESHOLD: &str = "5.6";

/// Dynamic addressing directives accepted in place of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicKeyword {
    Dhcp,
    Rtsol,
    Autoconf,
}

impl DynamicKeyword {
    /// Exact-match a token against the keyword spellings.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "dhcp" => Some(Self::Dhcp),
            "rtsol" => Some(Self::Rtsol),
            "inet6 autoconf" => Some(Self::Autoconf),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dhcp => "dhcp",
            Self::Rtsol => "rtsol",
            Self::Autoconf => "inet6 autoconf",
        }
    }

    /// The line to emit on the platform `version` describes.
    ///
    /// `rtsol` and `inet6 autoconf` are the same request; which spelling
    /// the platform understands depends on its release.
    pub fn resolve(self, version: &dyn VersionResolver) -> &'static str {
        match self {
            Self::Dhcp => self.as_str(),
            Self::Rtsol | Self::Autoconf => {
                let resolved = match version.compare_to(AUTOCONF_THRESHOLD) {
                    Ordering::Less | Ordering::Equal => Self::Rtsol,
                    Ordering::Greater => Self::Autoconf,
                };
                tracing::debug!(
                    requested = self.as_str(),
                    resolved = resolved.as_str(),
                    "resolved ipv6 autoconfiguration keyword"
                );
                resolved.as_str()
            }
        }
    }
}
