//! Device address parsing tests

use device_gateway::dispatch::address::{DeviceAddress, DEFAULT_DEVICE_PORT};
use device_gateway::dispatch::DispatchError;

#[test]
fn test_parse_applies_default_port() {
    let address = DeviceAddress::parse("telnet://192.168.1.100").unwrap();
    assert_eq!(address.host, "192.168.1.100");
    assert_eq!(address.port, DEFAULT_DEVICE_PORT);
    assert_eq!(address.port, 23);
}

#[test]
fn test_parse_keeps_explicit_port() {
    let address = DeviceAddress::parse("telnet://192.168.1.100:8080").unwrap();
    assert_eq!(address.host, "192.168.1.100");
    assert_eq!(address.port, 8080);
}

#[test]
fn test_parse_accepts_hostname() {
    let address = DeviceAddress::parse("telnet://device.example.local:2323").unwrap();
    assert_eq!(address.host, "device.example.local");
    assert_eq!(address.port, 2323);
}

#[test]
fn test_parse_rejects_unparseable_url() {
    let err = DeviceAddress::parse("telnet://bad host").unwrap_err();
    assert!(matches!(err, DispatchError::InvalidAddress { .. }));
}

#[test]
fn test_parse_rejects_missing_scheme() {
    assert!(DeviceAddress::parse("192.168.1.100:23").is_err());
}

#[test]
fn test_display_formats_host_and_port() {
    let address = DeviceAddress::parse("telnet://192.168.1.100").unwrap();
    assert_eq!(address.to_string(), "192.168.1.100:23");
}
