/// Drivers for wireless interfaces.
pub const WIRELESS_DRIVERS: &[&str] = &["ath", "athn", "iwn", "ral", "rum", "wi", "wpi"];

/// Drivers for pseudo-devices whose configuration is written by hand.
pub const VIRTUAL_DRIVERS: &[&str] = &[
    "bridge", "carp", "enc", "gif", "gre", "pflog", "pflow", "pfsync", "trunk", "tun", "vlan",
];

/// How an interface's raw values are treated when assembling its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Virtual,
    Wireless,
    Generic,
}

impl DeviceClass {
    /// Classify a driver name by exact membership.
    pub fn of(device_type: &str) -> Self {
        if VIRTUAL_DRIVERS.contains(&device_type) {
            Self::Virtual
        } else if WIRELESS_DRIVERS.contains(&device_type) {
            Self::Wireless
        } else {
            Self::Generic
        }
    }

    /// Virtual and wireless devices take their raw values verbatim.
    pub fn is_verbatim(self) -> bool {
        matches!(self, Self::Virtual | Self::Wireless)
    }
}

/// Driver name of an interface: the name without its unit number.
///
/// `em0` is `em`, `vlan100` is `vlan`.
pub fn driver_name(ifname: &str) -> &str {
    ifname.trim_end_matches(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{driver_name, DeviceClass};

    #[test]
    fn classifies_by_exact_driver_name() {
        assert_eq!(DeviceClass::of("vlan"), DeviceClass::Virtual);
        assert_eq!(DeviceClass::of("carp"), DeviceClass::Virtual);
        assert_eq!(DeviceClass::of("iwn"), DeviceClass::Wireless);
        assert_eq!(DeviceClass::of("em"), DeviceClass::Generic);
        assert_eq!(DeviceClass::of("vlan0"), DeviceClass::Generic);
        assert_eq!(DeviceClass::of("vether"), DeviceClass::Generic);
        assert_eq!(DeviceClass::of(""), DeviceClass::Generic);
    }

    #[test]
    fn verbatim_branch_covers_virtual_and_wireless() {
        assert!(DeviceClass::Virtual.is_verbatim());
        assert!(DeviceClass::Wireless.is_verbatim());
        assert!(!DeviceClass::Generic.is_verbatim());
    }

    #[test]
    fn driver_name_strips_unit_number() {
        assert_eq!(driver_name("em0"), "em");
        assert_eq!(driver_name("vlan100"), "vlan");
        assert_eq!(driver_name("athn0"), "athn");
        assert_eq!(driver_name("lo"), "lo");
    }
}
