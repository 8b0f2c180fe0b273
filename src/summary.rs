//! Lab summary reporting.
//!
//! After the artifacts are written, a machine-readable `lab_summary.json`
//! is placed next to them so other tooling can inspect the lab without
//! re-parsing `lab.conf`. The same information is logged for the user.

use crate::model::{DeviceRole, Lab, RoutingProtocol};
use color_eyre::Result;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One interface entry in the summary.
#[derive(Serialize, Debug)]
pub struct InterfaceSummary {
    pub index: usize,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// One device entry in the summary.
#[derive(Serialize, Debug)]
pub struct DeviceSummary {
    pub name: String,
    pub role: DeviceRole,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<RoutingProtocol>,
    pub interfaces: Vec<InterfaceSummary>,
    pub route_count: usize,
}

/// Machine-readable description of a generated lab.
#[derive(Serialize, Debug)]
pub struct LabSummary {
    pub name: String,
    pub device_count: usize,
    /// Deduplicated, case-normalized collision domains, sorted
    pub collision_domains: Vec<String>,
    pub devices: Vec<DeviceSummary>,
}

impl LabSummary {
    pub fn from_lab(lab: &Lab) -> Self {
        LabSummary {
            name: lab.name.clone(),
            device_count: lab.devices.len(),
            collision_domains: lab.collision_domains().into_iter().collect(),
            devices: lab
                .devices
                .iter()
                .map(|device| DeviceSummary {
                    name: device.name.clone(),
                    role: device.role,
                    image: device.image.clone(),
                    protocol: device.protocol,
                    interfaces: device
                        .interfaces
                        .iter()
                        .map(|iface| InterfaceSummary {
                            index: iface.index,
                            domain: iface.domain.clone(),
                            address: iface.address.map(|a| a.to_string()),
                        })
                        .collect(),
                    route_count: device.routes.len(),
                })
                .collect(),
        }
    }
}

/// Write `lab_summary.json` into the lab directory.
pub fn write_summary(lab: &Lab, lab_dir: &Path) -> Result<PathBuf> {
    let summary = LabSummary::from_lab(lab);
    let summary_path = lab_dir.join("lab_summary.json");
    let summary_json = serde_json::to_string_pretty(&summary)?;
    fs::write(&summary_path, summary_json)?;
    Ok(summary_path)
}

/// Log a human-readable recap of the lab about to be written.
pub fn log_summary(lab: &Lab) {
    let domains = lab.collision_domains();

    info!("Lab '{}': {} device(s), {} collision domain(s)", lab.name, lab.devices.len(), domains.len());
    for device in &lab.devices {
        match device.protocol {
            Some(protocol) => info!(
                "  - {} ({}, {}, {})",
                device.name, device.role, device.image, protocol
            ),
            None => info!("  - {} ({}, {})", device.name, device.role, device.image),
        }
        for iface in &device.interfaces {
            match iface.address {
                Some(address) => info!("      eth{} -> {} ({})", iface.index, iface.domain, address),
                None => info!("      eth{} -> {} (no address)", iface.index, iface.domain),
            }
        }
        if !device.routes.is_empty() {
            info!("      {} static route(s)", device.routes.len());
        }
    }
    if domains.is_empty() {
        info!("No collision domains configured (all devices are isolated)");
    } else {
        let names: Vec<&str> = domains.iter().map(String::as_str).collect();
        info!("Collision domains: {}", names.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, Device, Interface, Route};
    use std::net::Ipv4Addr;
    use tempfile::TempDir;

    fn sample_lab() -> Lab {
        Lab {
            name: "campus".to_string(),
            devices: vec![
                Device {
                    name: "r1".to_string(),
                    role: DeviceRole::Router,
                    image: "kathara/frr".to_string(),
                    interfaces: vec![
                        Interface {
                            index: 0,
                            domain: "A".to_string(),
                            address: Some(Address {
                                ip: Ipv4Addr::new(10, 0, 0, 1),
                                prefix: 24,
                            }),
                        },
                        Interface {
                            index: 1,
                            domain: "B".to_string(),
                            address: None,
                        },
                    ],
                    protocol: Some(RoutingProtocol::Ospf),
                    routes: Vec::new(),
                },
                Device {
                    name: "pc1".to_string(),
                    role: DeviceRole::Host,
                    image: "kathara/base".to_string(),
                    interfaces: vec![Interface {
                        index: 0,
                        domain: "A".to_string(),
                        address: None,
                    }],
                    protocol: None,
                    routes: vec![Route::Default {
                        gateway: Ipv4Addr::new(10, 0, 0, 1),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_summary_from_lab() {
        let summary = LabSummary::from_lab(&sample_lab());
        assert_eq!(summary.name, "campus");
        assert_eq!(summary.device_count, 2);
        assert_eq!(summary.collision_domains, vec!["A", "B"]);
        assert_eq!(summary.devices[0].interfaces[0].address.as_deref(), Some("10.0.0.1/24"));
        assert_eq!(summary.devices[0].interfaces[1].address, None);
        assert_eq!(summary.devices[1].route_count, 1);
    }

    #[test]
    fn test_summary_json_shape() {
        let lab_dir = TempDir::new().unwrap();
        let path = write_summary(&sample_lab(), lab_dir.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["name"], "campus");
        assert_eq!(value["devices"][0]["role"], "router");
        assert_eq!(value["devices"][0]["protocol"], "ospf");
        // Hosts have no protocol and the field is omitted entirely
        assert!(value["devices"][1].get("protocol").is_none());
    }
}
