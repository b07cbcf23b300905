//! Generation of OpenBSD hostname.if(5) interface configuration.
//!
//! An interface is described declaratively (addresses, dynamic addressing
//! keywords, options, description, MTU and raw lines) and rendered into the
//! exact line layout the legacy file format expects.
//!
//! - [`address`] — IP literal classification
//! - [`version`] — platform release comparison
//! - [`keyword`] — `dhcp`/`rtsol`/`inet6 autoconf` handling
//! - [`inet`] — strict address formatting with alias numbering
//! - [`passthrough`] — lenient formatting for raw values
//! - [`device`] — driver classification
//! - [`hostname_if`] — input validation and document assembly
//! - [`carp`] — carp(4) rc.conf settings

pub mod address;
pub mod carp;
pub mod device;
pub mod error;
pub mod hostname_if;
pub mod inet;
pub mod keyword;
pub mod passthrough;
pub mod values;
pub mod version;

pub use address::{AddressClassifier, ClassifiedAddress, IpNetworkClassifier};
pub use carp::CarpConfig;
pub use device::{driver_name, DeviceClass};
pub use error::{ConfigError, FormatError};
pub use hostname_if::{HostnameIf, InterfaceConfig};
pub use inet::{FamilyState, InetFormatter};
pub use keyword::{DynamicKeyword, AUTOCONF_THRESHOLD};
pub use passthrough::PassthroughFormatter;
pub use values::{ConfigValue, ConfigValues};
pub use version::{versioncmp, PlatformVersion, VersionResolver};
