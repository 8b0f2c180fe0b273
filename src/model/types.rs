//! Topology type definitions.
//!
//! This file contains the typed structures a validated lab is made of:
//! devices with their role, interfaces bound to collision domains,
//! IPv4 addresses with prefix lengths, and static routes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::net::Ipv4Addr;

/// Role of a device in the lab.
///
/// The role determines the default container image, which optional
/// configuration applies (routing protocol, static routes) and which
/// service start command the boot script ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceRole {
    /// Router running the FRR routing suite
    Router,
    /// End host, optionally carrying static routes
    Host,
    /// Web server started with Apache
    Server,
}

impl DeviceRole {
    /// Default container image for this role
    pub fn default_image(&self) -> &'static str {
        match self {
            DeviceRole::Router => "kathara/frr",
            DeviceRole::Host | DeviceRole::Server => "kathara/base",
        }
    }

    /// Get the string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceRole::Router => "router",
            DeviceRole::Host => "host",
            DeviceRole::Server => "server",
        }
    }
}

impl fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing protocol a router runs.
///
/// The tag is opaque to this tool: it only selects which template
/// subdirectory supplies the FRR configuration fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingProtocol {
    Ospf,
    Rip,
    Bgp,
}

impl RoutingProtocol {
    /// Get the string representation of the protocol tag
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingProtocol::Ospf => "ospf",
            RoutingProtocol::Rip => "rip",
            RoutingProtocol::Bgp => "bgp",
        }
    }
}

impl fmt::Display for RoutingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An IPv4 address paired with a prefix length (0-32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Dotted-quad IPv4 address
    pub ip: Ipv4Addr,
    /// Prefix length in bits
    pub prefix: u8,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix)
    }
}

/// A static route for a host device.
///
/// Routes are kept in declaration order and never deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The distinguished default route
    Default { gateway: Ipv4Addr },
    /// A destination network reached through a gateway
    Network { network: Address, gateway: Ipv4Addr },
}

/// A network interface binding a device to a collision domain.
///
/// An interface may exist without an address; the boot script then carries
/// a commented placeholder instead of an active command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// 0-based index, dense in creation order (rendered as `eth<index>`)
    pub index: usize,
    /// Collision domain name, uppercased on acceptance
    pub domain: String,
    /// Optional address assignment
    pub address: Option<Address>,
}

/// A device in the lab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Unique identifier within the lab
    pub name: String,
    pub role: DeviceRole,
    /// Container image, defaulted per role when not given explicitly
    pub image: String,
    /// Interfaces in index order
    pub interfaces: Vec<Interface>,
    /// Routing protocol; present exactly for routers with interfaces
    pub protocol: Option<RoutingProtocol>,
    /// Static routes; only hosts carry these
    pub routes: Vec<Route>,
}

/// A complete validated lab: named topology plus its devices in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lab {
    pub name: String,
    pub devices: Vec<Device>,
}

impl Lab {
    /// The set of every collision domain referenced by any interface,
    /// deduplicated (names are already case-normalized on acceptance).
    pub fn collision_domains(&self) -> BTreeSet<String> {
        self.devices
            .iter()
            .flat_map(|device| device.interfaces.iter())
            .map(|iface| iface.domain.clone())
            .collect()
    }
}
