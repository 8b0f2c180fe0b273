//! Topology model: validated in-memory representation of a lab.
//!
//! Raw field values from the lab description enter through the validators in
//! [`validate`], are assembled into [`types`] structures by [`builder`], and
//! are immutable from then on. Rendering consumes the finished model and
//! never re-validates.

pub mod builder;
pub mod types;
pub mod validate;

pub use builder::{build_lab, ModelError};
pub use types::{Address, Device, DeviceRole, Interface, Lab, Route, RoutingProtocol};
pub use validate::{
    validate_cidr, validate_domain_name, validate_gateway, validate_identifier,
    validate_protocol, validate_route, FieldError,
};
