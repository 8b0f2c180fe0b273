//! `lab.conf` rendering.
//!
//! Emits the declarative topology file the Kathara runtime consumes. The
//! line grammar is fixed: an image-selector line per device, one line per
//! interface binding it to its collision domain, a trailing comment noting
//! whether any interfaces were configured, and a blank separator line.
//! Devices appear in declaration order, never sorted.

use crate::model::Lab;
use std::fmt::Write;

/// Render the topology text for a lab.
///
/// The `[image]` line is always emitted, including when the image equals
/// the role default, so the generated file is self-describing.
pub fn render_lab_conf(lab: &Lab) -> String {
    let mut out = String::new();

    for device in &lab.devices {
        let _ = writeln!(out, "{}[image]=\"{}\"", device.name, device.image);

        for iface in &device.interfaces {
            let _ = writeln!(out, "{}[{}]=\"{}\"", device.name, iface.index, iface.domain);
        }

        if device.interfaces.is_empty() {
            let _ = writeln!(out, "# {} - Nessuna interfaccia configurata", device.name);
        } else {
            let _ = writeln!(out, "# {} - Interfacce configurate", device.name);
        }
        out.push('\n');
    }

    out
}
