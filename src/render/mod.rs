//! Artifact rendering.
//!
//! Pure, deterministic transformation of a validated [`Lab`](crate::model::Lab)
//! into artifact text. Rendering assumes the model already satisfies its
//! invariants and performs no validation, no filesystem access and no
//! network access: re-rendering the same model yields byte-identical text.

pub mod lab_conf;
pub mod startup;

pub use lab_conf::render_lab_conf;
pub use startup::render_startup;

use crate::model::Lab;

/// A fully rendered lab, kept in memory until the whole artifact set is
/// ready to be written in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLab {
    /// The `lab.conf` topology text
    pub lab_conf: String,
    /// Per-device `(name, script text)` pairs, in declaration order
    pub startups: Vec<(String, String)>,
}

/// Render every artifact for a lab.
pub fn render_lab(lab: &Lab) -> RenderedLab {
    RenderedLab {
        lab_conf: render_lab_conf(lab),
        startups: lab
            .devices
            .iter()
            .map(|device| (device.name.clone(), render_startup(device)))
            .collect(),
    }
}
