//! Lab builder.
//!
//! Assembles a validated [`Lab`] from the raw lab description, running every
//! field through the validators and enforcing the cross-field invariants:
//! device identifiers are unique, a router with interfaces has a routing
//! protocol, protocols belong only to routers and static routes only to
//! hosts. Interface indices are dense from 0 by construction (declaration
//! order in the description).

use crate::config::{DeviceConfig, LabConfig};
use crate::model::types::{Device, DeviceRole, Interface, Lab};
use crate::model::validate::{
    validate_cidr, validate_domain_name, validate_identifier, validate_protocol, validate_route,
    FieldError,
};
use log::debug;
use std::collections::HashSet;

/// Errors raised while assembling the topology model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("lab: {0}")]
    Lab(FieldError),
    #[error("device '{device}', {field}: {source}")]
    Field {
        device: String,
        field: String,
        source: FieldError,
    },
    #[error("duplicate device name '{0}'")]
    DuplicateDevice(String),
    #[error("router '{0}' has interfaces but no routing protocol")]
    MissingProtocol(String),
    #[error("device '{0}' is a {1}, only routers select a routing protocol")]
    ProtocolNotAllowed(String, DeviceRole),
    #[error("device '{0}' is a {1}, only hosts carry static routes")]
    RoutesNotAllowed(String, DeviceRole),
}

/// Build a validated lab from a parsed description.
///
/// Devices keep their declaration order; nothing is sorted or deduplicated
/// downstream of this point.
pub fn build_lab(config: &LabConfig) -> Result<Lab, ModelError> {
    if config.lab.name.trim().is_empty() {
        return Err(ModelError::Lab(FieldError::Empty { what: "lab name" }));
    }
    let name = config.lab.name.trim().to_string();

    let mut seen: HashSet<String> = HashSet::new();
    let mut devices = Vec::with_capacity(config.devices.len());
    for device_config in &config.devices {
        let device = build_device(device_config)?;
        if !seen.insert(device.name.clone()) {
            return Err(ModelError::DuplicateDevice(device.name));
        }
        devices.push(device);
    }

    Ok(Lab { name, devices })
}

fn build_device(config: &DeviceConfig) -> Result<Device, ModelError> {
    let name = validate_identifier(&config.name).map_err(|source| ModelError::Field {
        device: config.name.clone(),
        field: "name".to_string(),
        source,
    })?;

    let image = config
        .image
        .clone()
        .unwrap_or_else(|| config.role.default_image().to_string());

    let mut interfaces = Vec::with_capacity(config.interfaces.len());
    for (index, iface) in config.interfaces.iter().enumerate() {
        let domain =
            validate_domain_name(&iface.domain).map_err(|source| ModelError::Field {
                device: name.clone(),
                field: format!("eth{} collision domain", index),
                source,
            })?;
        if domain.len() > 1 || !domain.chars().all(|c| c.is_ascii_alphabetic()) {
            // Single uppercase letters are the convention; anything else is
            // legal but worth a note in the logs.
            debug!("device '{}': unconventional collision domain name '{}'", name, domain);
        }
        let address = iface
            .address
            .as_deref()
            .map(validate_cidr)
            .transpose()
            .map_err(|source| ModelError::Field {
                device: name.clone(),
                field: format!("eth{} address", index),
                source,
            })?;
        interfaces.push(Interface {
            index,
            domain,
            address,
        });
    }

    let protocol = match (&config.protocol, config.role) {
        (Some(raw), DeviceRole::Router) => {
            Some(validate_protocol(raw).map_err(|source| ModelError::Field {
                device: name.clone(),
                field: "routing protocol".to_string(),
                source,
            })?)
        }
        (Some(_), role) => return Err(ModelError::ProtocolNotAllowed(name, role)),
        (None, DeviceRole::Router) if !interfaces.is_empty() => {
            return Err(ModelError::MissingProtocol(name))
        }
        (None, _) => None,
    };

    if !config.routes.is_empty() && config.role != DeviceRole::Host {
        return Err(ModelError::RoutesNotAllowed(name, config.role));
    }
    let mut routes = Vec::with_capacity(config.routes.len());
    for (position, raw) in config.routes.iter().enumerate() {
        let route = validate_route(raw).map_err(|source| ModelError::Field {
            device: name.clone(),
            field: format!("route {}", position + 1),
            source,
        })?;
        routes.push(route);
    }

    Ok(Device {
        name,
        role: config.role,
        image,
        interfaces,
        protocol,
        routes,
    })
}
