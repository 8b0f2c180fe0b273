//! Field validators.
//!
//! Every raw string from the lab description passes through one of these
//! pure functions before it enters the topology model. Each validator is
//! total over its input domain: any string yields either a typed value or a
//! [`FieldError`] naming the exact rule that failed. Malformed numeric text
//! is a structured rejection, never a panic.

use crate::model::types::{Address, Route, RoutingProtocol};
use std::net::Ipv4Addr;

/// Rejection reasons for individual field values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{what} cannot be empty")]
    Empty { what: &'static str },
    #[error("{what} '{value}' may contain only letters, digits, '-' and '_'")]
    InvalidCharacters { what: &'static str, value: String },
    #[error("device name '{0}' must start with a letter or a digit")]
    LeadingCharacter(String),
    #[error("address '{0}' must use the IP/PREFIX form (e.g. 10.0.0.1/24)")]
    MalformedCidr(String),
    #[error("address '{0}' must have exactly 4 octets (e.g. 192.168.1.1)")]
    OctetCount(String),
    #[error("octet '{0}' must be a number between 0 and 255")]
    OctetValue(String),
    #[error("prefix length '{0}' must be a number between 0 and 32")]
    PrefixLength(String),
    #[error("route '{0}' must use the form NETWORK/PREFIX via GATEWAY or default via GATEWAY")]
    RouteSyntax(String),
    #[error("route network '{0}' must include a prefix length, or be the literal 'default'")]
    RoutePrefixRequired(String),
    #[error("gateway '{0}' must be a bare address without a prefix length")]
    GatewayWithPrefix(String),
    #[error("unknown routing protocol '{0}' (expected ospf, rip or bgp)")]
    UnknownProtocol(String),
}

/// Validate a device identifier.
///
/// Accepts non-empty strings of letters, digits, `-` and `_` whose first
/// character is a letter or a digit. Uniqueness against other devices is
/// the builder's concern, not this function's.
///
/// # Examples
/// ```
/// use katharagen::model::validate_identifier;
///
/// assert!(validate_identifier("web-server").is_ok());
/// assert!(validate_identifier("_r1").is_err());
/// assert!(validate_identifier("r 1").is_err());
/// ```
pub fn validate_identifier(raw: &str) -> Result<String, FieldError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FieldError::Empty {
            what: "device name",
        });
    }
    if !name.chars().all(is_name_char) {
        return Err(FieldError::InvalidCharacters {
            what: "device name",
            value: name.to_string(),
        });
    }
    // First char checked after the character-class pass, so `-x` reports
    // the leading-character rule rather than a generic character error.
    let first = name.chars().next().unwrap_or_default();
    if !first.is_ascii_alphanumeric() {
        return Err(FieldError::LeadingCharacter(name.to_string()));
    }
    Ok(name.to_string())
}

/// Validate a collision-domain name and normalize it to uppercase.
///
/// Single uppercase letters are the Kathara convention, but any name made
/// of letters, digits, `-` and `_` (with at least one letter or digit) is
/// accepted.
pub fn validate_domain_name(raw: &str) -> Result<String, FieldError> {
    let domain = raw.trim().to_uppercase();
    if domain.is_empty() {
        return Err(FieldError::Empty {
            what: "collision domain",
        });
    }
    if !domain.chars().all(is_name_char)
        || !domain.chars().any(|c| c.is_ascii_alphanumeric())
    {
        return Err(FieldError::InvalidCharacters {
            what: "collision domain",
            value: domain,
        });
    }
    Ok(domain)
}

/// Validate an `IP/PREFIX` address.
///
/// Requires exactly one `/`, four octets each 0-255 on the left and an
/// integer prefix length 0-32 on the right.
///
/// # Examples
/// ```
/// use katharagen::model::validate_cidr;
///
/// assert!(validate_cidr("10.0.0.1/24").is_ok());
/// assert!(validate_cidr("10.0.0.1/33").is_err());
/// assert!(validate_cidr("10.0.0.1").is_err());
/// ```
pub fn validate_cidr(raw: &str) -> Result<Address, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Empty { what: "address" });
    }
    let mut parts = value.split('/');
    let (ip_part, prefix_part) = match (parts.next(), parts.next(), parts.next()) {
        (Some(ip), Some(prefix), None) => (ip, prefix),
        _ => return Err(FieldError::MalformedCidr(value.to_string())),
    };

    let ip = parse_dotted_quad(ip_part)?;
    let prefix: u8 = prefix_part
        .parse()
        .ok()
        .filter(|p| *p <= 32)
        .ok_or_else(|| FieldError::PrefixLength(prefix_part.to_string()))?;

    Ok(Address { ip, prefix })
}

/// Validate a bare gateway address: four octets each 0-255, no prefix.
pub fn validate_gateway(raw: &str) -> Result<Ipv4Addr, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Empty { what: "gateway" });
    }
    if value.contains('/') {
        return Err(FieldError::GatewayWithPrefix(value.to_string()));
    }
    parse_dotted_quad(value)
}

/// Validate a static route in `NETWORK/PREFIX via GATEWAY` or
/// `default via GATEWAY` form.
///
/// The `via` infix is case-insensitive and must split the string into
/// exactly two non-empty parts. A non-default network must carry its
/// prefix length.
///
/// # Examples
/// ```
/// use katharagen::model::validate_route;
///
/// assert!(validate_route("default via 192.168.1.1").is_ok());
/// assert!(validate_route("192.168.2.0/24 via 192.168.1.1").is_ok());
/// assert!(validate_route("192.168.2.0 via 192.168.1.1").is_err());
/// ```
pub fn validate_route(raw: &str) -> Result<Route, FieldError> {
    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        return Err(FieldError::Empty { what: "route" });
    }

    let parts: Vec<&str> = value.split(" via ").collect();
    if parts.len() != 2 {
        return Err(FieldError::RouteSyntax(raw.trim().to_string()));
    }
    let (network, gateway) = (parts[0].trim(), parts[1].trim());
    if network.is_empty() || gateway.is_empty() {
        return Err(FieldError::RouteSyntax(raw.trim().to_string()));
    }

    let gateway = validate_gateway(gateway)?;

    if network == "default" {
        return Ok(Route::Default { gateway });
    }
    if !network.contains('/') {
        return Err(FieldError::RoutePrefixRequired(network.to_string()));
    }
    let network = validate_cidr(network)?;
    Ok(Route::Network { network, gateway })
}

/// Validate a routing-protocol tag against the closed set ospf/rip/bgp
/// (case-insensitive).
pub fn validate_protocol(raw: &str) -> Result<RoutingProtocol, FieldError> {
    match raw.trim().to_lowercase().as_str() {
        "ospf" => Ok(RoutingProtocol::Ospf),
        "rip" => Ok(RoutingProtocol::Rip),
        "bgp" => Ok(RoutingProtocol::Bgp),
        _ => Err(FieldError::UnknownProtocol(raw.trim().to_string())),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_dotted_quad(value: &str) -> Result<Ipv4Addr, FieldError> {
    let octets: Vec<&str> = value.split('.').collect();
    if octets.len() != 4 {
        return Err(FieldError::OctetCount(value.to_string()));
    }
    let mut parsed = [0u8; 4];
    for (slot, octet) in parsed.iter_mut().zip(&octets) {
        *slot = octet
            .parse()
            .map_err(|_| FieldError::OctetValue(octet.to_string()))?;
    }
    Ok(Ipv4Addr::from(parsed))
}
