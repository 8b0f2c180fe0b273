//! Lab description parsing.
//!
//! The YAML lab description is the tool's input source. Field values that
//! have their own grammar (addresses, routes, names, protocol tags) are
//! carried here as raw strings and validated by the model builder, so the
//! config layer only cares about YAML shape.

use crate::model::DeviceRole;
use color_eyre::Result;
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Top-level lab description.
///
/// ```yaml
/// lab:
///   name: "my-lab"
/// devices:
///   - name: r1
///     role: router
///     protocol: ospf
///     interfaces:
///       - domain: A
///         address: "10.0.0.1/24"
///       - domain: B
///   - name: pc1
///     role: host
///     interfaces:
///       - domain: A
///         address: "10.0.0.2/24"
///     routes:
///       - "default via 10.0.0.1"
/// ```
#[derive(Debug, Deserialize)]
pub struct LabConfig {
    pub lab: LabSection,
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

/// Lab-wide settings.
#[derive(Debug, Deserialize)]
pub struct LabSection {
    /// Name of the lab; also the name of the generated directory
    pub name: String,
}

/// One device in the description.
#[derive(Debug, Deserialize)]
pub struct DeviceConfig {
    pub name: String,
    pub role: DeviceRole,
    /// Container image; defaults per role when omitted
    #[serde(default)]
    pub image: Option<String>,
    /// Routing protocol tag; routers only
    #[serde(default)]
    pub protocol: Option<String>,
    /// Interfaces in eth index order
    #[serde(default)]
    pub interfaces: Vec<InterfaceConfig>,
    /// Static routes in `NETWORK/PREFIX via GATEWAY` form; hosts only
    #[serde(default)]
    pub routes: Vec<String>,
}

/// One interface binding in the description.
#[derive(Debug, Deserialize)]
pub struct InterfaceConfig {
    /// Collision domain the interface attaches to
    pub domain: String,
    /// Optional `IP/PREFIX` assignment
    #[serde(default)]
    pub address: Option<String>,
}

/// Load and parse a lab description from a YAML file
pub fn load_config(config_path: &Path) -> Result<LabConfig> {
    info!("Loading lab description from: {:?}", config_path);

    let file = File::open(config_path)?;
    let config: LabConfig = serde_yaml::from_reader(file)?;

    info!(
        "Parsed lab '{}' with {} device(s)",
        config.lab.name,
        config.devices.len()
    );

    Ok(config)
}
