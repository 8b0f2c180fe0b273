//! Static configuration templates.
//!
//! Routers and servers need configuration trees the boot script does not
//! generate: the FRR daemon files for the chosen routing protocol and the
//! web content served by Apache. This module copies them verbatim from a
//! templates directory into the generated lab tree. A missing template is
//! a warning and a partial copy, never a fatal error.

use crate::model::{DeviceRole, Lab, RoutingProtocol};
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// FRR fragments expected under `<templates>/<protocol>/`
pub const ROUTER_CONFIG_FILES: [&str; 3] = ["daemons", "frr.conf", "vtysh.conf"];

/// Web content expected under `<templates>/server/var/www/html/`
pub const SERVER_CONTENT_FILE: &str = "index.html";

/// Copy the FRR configuration fragments for one router into
/// `<lab_dir>/<device>/etc/frr/`.
///
/// Returns the names of the fragments actually copied; absent fragments
/// are logged and skipped.
pub fn copy_router_templates(
    device: &str,
    protocol: RoutingProtocol,
    templates_dir: &Path,
    lab_dir: &Path,
) -> io::Result<Vec<String>> {
    let source_dir = templates_dir.join(protocol.as_str());
    if !source_dir.is_dir() {
        warn!(
            "Template directory {:?} not found, router '{}' gets no {} configuration",
            source_dir, device, protocol
        );
        return Ok(Vec::new());
    }

    let dest_dir = lab_dir.join(device).join("etc").join("frr");
    fs::create_dir_all(&dest_dir)?;

    let mut copied = Vec::new();
    for file in ROUTER_CONFIG_FILES {
        let source = source_dir.join(file);
        if source.is_file() {
            fs::copy(&source, dest_dir.join(file))?;
            copied.push(file.to_string());
        } else {
            warn!("Template file {:?} not found", source);
        }
    }
    Ok(copied)
}

/// Copy the static web content for one server into
/// `<lab_dir>/<device>/var/www/html/`.
///
/// Returns whether the content was found and copied.
pub fn copy_server_templates(
    device: &str,
    templates_dir: &Path,
    lab_dir: &Path,
) -> io::Result<bool> {
    let source = templates_dir
        .join("server")
        .join("var")
        .join("www")
        .join("html")
        .join(SERVER_CONTENT_FILE);
    if !source.is_file() {
        warn!(
            "Template file {:?} not found, server '{}' gets no web content",
            source, device
        );
        return Ok(false);
    }

    let dest_dir = lab_dir.join(device).join("var").join("www").join("html");
    fs::create_dir_all(&dest_dir)?;
    fs::copy(&source, dest_dir.join(SERVER_CONTENT_FILE))?;
    Ok(true)
}

/// Copy every template a lab's devices need.
pub fn copy_lab_templates(lab: &Lab, templates_dir: &Path, lab_dir: &Path) -> io::Result<()> {
    for device in &lab.devices {
        match device.role {
            DeviceRole::Router => {
                if let Some(protocol) = device.protocol {
                    let copied =
                        copy_router_templates(&device.name, protocol, templates_dir, lab_dir)?;
                    if !copied.is_empty() {
                        info!(
                            "Created {}/etc/frr/ with: {}",
                            device.name,
                            copied.join(", ")
                        );
                    }
                }
            }
            DeviceRole::Server => {
                if copy_server_templates(&device.name, templates_dir, lab_dir)? {
                    info!("Created {}/var/www/html/ with: {}", device.name, SERVER_CONTENT_FILE);
                }
            }
            DeviceRole::Host => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_protocol_templates(templates_dir: &Path, protocol: &str) {
        let dir = templates_dir.join(protocol);
        fs::create_dir_all(&dir).unwrap();
        for file in ROUTER_CONFIG_FILES {
            fs::write(dir.join(file), format!("# {} {}\n", protocol, file)).unwrap();
        }
    }

    #[test]
    fn test_router_templates_copied() {
        let templates = TempDir::new().unwrap();
        let lab = TempDir::new().unwrap();
        make_protocol_templates(templates.path(), "ospf");

        let copied =
            copy_router_templates("r1", RoutingProtocol::Ospf, templates.path(), lab.path())
                .unwrap();
        assert_eq!(copied, vec!["daemons", "frr.conf", "vtysh.conf"]);

        let frr_dir = lab.path().join("r1").join("etc").join("frr");
        assert_eq!(
            fs::read_to_string(frr_dir.join("frr.conf")).unwrap(),
            "# ospf frr.conf\n"
        );
    }

    #[test]
    fn test_missing_protocol_directory_is_soft() {
        let templates = TempDir::new().unwrap();
        let lab = TempDir::new().unwrap();

        let copied =
            copy_router_templates("r1", RoutingProtocol::Bgp, templates.path(), lab.path())
                .unwrap();
        assert!(copied.is_empty());
        assert!(!lab.path().join("r1").exists());
    }

    #[test]
    fn test_partially_missing_fragments() {
        let templates = TempDir::new().unwrap();
        let lab = TempDir::new().unwrap();
        let dir = templates.path().join("rip");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("daemons"), "zebra=yes\n").unwrap();

        let copied =
            copy_router_templates("r1", RoutingProtocol::Rip, templates.path(), lab.path())
                .unwrap();
        assert_eq!(copied, vec!["daemons"]);
    }

    #[test]
    fn test_server_templates_copied() {
        let templates = TempDir::new().unwrap();
        let lab = TempDir::new().unwrap();
        let html_dir = templates
            .path()
            .join("server")
            .join("var")
            .join("www")
            .join("html");
        fs::create_dir_all(&html_dir).unwrap();
        fs::write(html_dir.join("index.html"), "<h1>lab</h1>\n").unwrap();

        assert!(copy_server_templates("web", templates.path(), lab.path()).unwrap());
        assert_eq!(
            fs::read_to_string(
                lab.path()
                    .join("web")
                    .join("var")
                    .join("www")
                    .join("html")
                    .join("index.html")
            )
            .unwrap(),
            "<h1>lab</h1>\n"
        );
    }

    #[test]
    fn test_missing_server_content_is_soft() {
        let templates = TempDir::new().unwrap();
        let lab = TempDir::new().unwrap();

        assert!(!copy_server_templates("web", templates.path(), lab.path()).unwrap());
    }
}
