//! Boot-script rendering.
//!
//! One `.startup` script per device: a fixed shebang header, the network
//! interface section (active `ip addr add` command per addressed interface,
//! commented placeholder pair per unset one), static routes for hosts in
//! declared order, and the role-required service start command.

use crate::model::{Device, DeviceRole, Route};
use std::fmt::Write;

/// Render the boot script for a single device.
///
/// A device with no interfaces and no role-required command still yields
/// the header plus the interface-section comment line.
pub fn render_startup(device: &Device) -> String {
    let mut out = String::from("#!/bin/bash\n\n");

    out.push_str("# Configurazione interfacce di rete\n");
    for iface in &device.interfaces {
        match iface.address {
            Some(address) => {
                let _ = writeln!(out, "ip addr add {} dev eth{}", address, iface.index);
            }
            None => {
                let _ = writeln!(out, "# eth{} collegata al dominio {}", iface.index, iface.domain);
                let _ = writeln!(out, "# ip addr add <INDIRIZZO_IP>/<NETMASK> dev eth{}", iface.index);
            }
        }
    }
    if !device.interfaces.is_empty() {
        out.push('\n');
    }

    if device.role == DeviceRole::Host && !device.routes.is_empty() {
        out.push_str("# Configurazione rotte statiche\n");
        for route in &device.routes {
            match route {
                Route::Default { gateway } => {
                    let _ = writeln!(out, "ip route add default via {}", gateway);
                }
                Route::Network { network, gateway } => {
                    let _ = writeln!(out, "ip route add {} via {}", network, gateway);
                }
            }
        }
        out.push('\n');
    }

    match device.role {
        DeviceRole::Router => {
            out.push_str("# Avvio servizio FRR\n");
            out.push_str("systemctl start frr\n");
        }
        DeviceRole::Server => {
            out.push_str("# Avvio servizio Apache2\n");
            out.push_str("systemctl start apache2\n");
        }
        DeviceRole::Host => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, Interface, RoutingProtocol};
    use std::net::Ipv4Addr;

    fn addr(a: u8, b: u8, c: u8, d: u8, prefix: u8) -> Address {
        Address {
            ip: Ipv4Addr::new(a, b, c, d),
            prefix,
        }
    }

    fn base_device(name: &str, role: DeviceRole) -> Device {
        Device {
            name: name.to_string(),
            role,
            image: role.default_image().to_string(),
            interfaces: Vec::new(),
            protocol: None,
            routes: Vec::new(),
        }
    }

    #[test]
    fn test_mixed_set_and_unset_interfaces() {
        let device = Device {
            interfaces: vec![
                Interface {
                    index: 0,
                    domain: "A".to_string(),
                    address: Some(addr(10, 0, 0, 1, 24)),
                },
                Interface {
                    index: 1,
                    domain: "B".to_string(),
                    address: None,
                },
            ],
            protocol: Some(RoutingProtocol::Ospf),
            ..base_device("r1", DeviceRole::Router)
        };

        let expected = "\
#!/bin/bash

# Configurazione interfacce di rete
ip addr add 10.0.0.1/24 dev eth0
# eth1 collegata al dominio B
# ip addr add <INDIRIZZO_IP>/<NETMASK> dev eth1

# Avvio servizio FRR
systemctl start frr
";
        let script = render_startup(&device);
        assert_eq!(script, expected);
        assert_eq!(script.matches("ip addr add 10").count(), 1);
    }

    #[test]
    fn test_host_routes_in_declared_order() {
        let device = Device {
            interfaces: vec![Interface {
                index: 0,
                domain: "A".to_string(),
                address: Some(addr(192, 168, 1, 10, 24)),
            }],
            routes: vec![
                Route::Default {
                    gateway: Ipv4Addr::new(192, 168, 1, 1),
                },
                Route::Network {
                    network: addr(192, 168, 2, 0, 24),
                    gateway: Ipv4Addr::new(192, 168, 1, 1),
                },
            ],
            ..base_device("pc1", DeviceRole::Host)
        };

        let expected = "\
#!/bin/bash

# Configurazione interfacce di rete
ip addr add 192.168.1.10/24 dev eth0

# Configurazione rotte statiche
ip route add default via 192.168.1.1
ip route add 192.168.2.0/24 via 192.168.1.1

";
        assert_eq!(render_startup(&device), expected);
    }

    #[test]
    fn test_server_starts_apache() {
        let device = Device {
            interfaces: vec![Interface {
                index: 0,
                domain: "B".to_string(),
                address: Some(addr(10, 0, 1, 2, 24)),
            }],
            ..base_device("web", DeviceRole::Server)
        };

        let script = render_startup(&device);
        assert!(script.ends_with("# Avvio servizio Apache2\nsystemctl start apache2\n"));
        assert!(!script.contains("frr"));
    }

    #[test]
    fn test_bare_device_script_shape() {
        // Zero interfaces, no role command: header + section comment only
        let device = base_device("pc9", DeviceRole::Host);
        assert_eq!(
            render_startup(&device),
            "#!/bin/bash\n\n# Configurazione interfacce di rete\n"
        );
    }

    #[test]
    fn test_router_without_interfaces_still_starts_frr() {
        let device = base_device("r9", DeviceRole::Router);
        let expected = "\
#!/bin/bash

# Configurazione interfacce di rete
# Avvio servizio FRR
systemctl start frr
";
        assert_eq!(render_startup(&device), expected);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let device = Device {
            interfaces: vec![Interface {
                index: 0,
                domain: "A".to_string(),
                address: None,
            }],
            ..base_device("pc1", DeviceRole::Host)
        };
        assert_eq!(render_startup(&device), render_startup(&device));
    }
}
