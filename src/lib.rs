//! # Katharagen - Configuration utility for Kathara network emulation labs
//!
//! This library provides core functionality for generating Kathara lab
//! configurations (topology file plus per-device boot scripts) from a
//! declarative YAML lab description.
//!
//! ## Overview
//!
//! Katharagen turns a small description of a virtual network (devices, their
//! network interfaces, collision domains, IP assignments, static routes and
//! routing-protocol choice) into the artifacts consumed by the Kathara
//! emulation runtime:
//!
//! - `lab.conf`: declarative topology listing every device's image and
//!   interface-to-collision-domain bindings
//! - `<device>.startup`: a boot script per device configuring addresses,
//!   static routes and role-required services, marked executable
//! - static per-protocol/per-role configuration trees copied from a
//!   templates directory (FRR configs for routers, web content for servers)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `config`: serde structures for the YAML lab description
//! - `model`: validated topology model (devices, interfaces, addresses,
//!   routes) and the field validators that build it from raw strings
//! - `render`: deterministic, side-effect-free rendering of `lab.conf` and
//!   the per-device startup scripts
//! - `templates`: copying of static routing/server configuration fragments
//!   into the generated lab tree
//! - `writer`: lab directory lifecycle and artifact persistence
//! - `summary`: machine-readable lab summary and logged run report
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use katharagen::{config, model, render, writer};
//! use std::path::Path;
//!
//! let lab_config = config::load_config(Path::new("lab.yaml"))?;
//! let lab = model::build_lab(&lab_config)?;
//! let rendered = render::render_lab(&lab);
//! writer::write_lab(&rendered, &lab.name, Path::new("created_labs"), false)?;
//! # Ok::<(), color_eyre::Report>(())
//! ```
//!
//! ## Error Handling
//!
//! Field validators and the model builder return typed `thiserror` errors
//! that name the exact rule a raw value violated. The binary wraps
//! everything in `color_eyre` reports for top-level context.

pub mod config;
pub mod model;
pub mod render;
pub mod summary;
pub mod templates;
pub mod writer;
