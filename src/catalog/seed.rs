//! Demo catalog data
//!
//! Sample devices loaded at startup so the gateway is usable out of the box
//! without a provisioning step. Disable with `SEED_DEMO_DEVICES=false`.

use serde_json::json;
use tracing::info;

use crate::catalog::store::DeviceStore;
use crate::models::device::{CommandSpec, Device, LiteralCommand, ParameterSpec};

/// Load the demo devices into the store
pub fn seed_demo_devices(store: &DeviceStore) {
    store.create(Device {
        identifier: "sensor-soil-001".to_string(),
        description: "Soil humidity and temperature sensor for continuous field monitoring"
            .to_string(),
        manufacturer: "SoilTech Industries".to_string(),
        url: "telnet://192.168.1.100:23".to_string(),
        commands: vec![
            CommandSpec {
                operation: "READ_HUMIDITY".to_string(),
                description: "Read the soil humidity value as a percentage".to_string(),
                command: LiteralCommand {
                    command: "READ".to_string(),
                    parameters: vec![ParameterSpec {
                        name: "sensor_type".to_string(),
                        description: "Sensor type: humidity, temperature".to_string(),
                    }],
                },
                result: "Percentage value (0-100)".to_string(),
                format: Some(json!({"type": "number", "minimum": 0, "maximum": 100})),
            },
            CommandSpec {
                operation: "SET_THRESHOLD".to_string(),
                description: "Set the humidity alert threshold".to_string(),
                command: LiteralCommand {
                    command: "CONFIGURE".to_string(),
                    parameters: vec![
                        ParameterSpec {
                            name: "threshold".to_string(),
                            description: "Threshold value (0-100)".to_string(),
                        },
                        ParameterSpec {
                            name: "unit".to_string(),
                            description: "Unit: percent or absolute".to_string(),
                        },
                    ],
                },
                result: "OK or error".to_string(),
                format: Some(json!({"type": "string", "pattern": "(OK|ERROR)"})),
            },
        ],
    });

    store.create(Device {
        identifier: "sensor-weather-001".to_string(),
        description: "Weather station with multiple environmental sensors".to_string(),
        manufacturer: "WeatherPro Systems".to_string(),
        url: "telnet://192.168.1.101:23".to_string(),
        commands: vec![
            CommandSpec {
                operation: "READ_TEMPERATURE".to_string(),
                description: "Read the ambient temperature in degrees Celsius".to_string(),
                command: LiteralCommand {
                    command: "READ_TEMP".to_string(),
                    parameters: vec![],
                },
                result: "Temperature in Celsius".to_string(),
                format: Some(json!({"type": "number", "minimum": -50, "maximum": 50})),
            },
            CommandSpec {
                operation: "READ_HUMIDITY".to_string(),
                description: "Read the relative air humidity".to_string(),
                command: LiteralCommand {
                    command: "READ_HUM".to_string(),
                    parameters: vec![],
                },
                result: "Relative humidity (0-100%)".to_string(),
                format: Some(json!({"type": "number", "minimum": 0, "maximum": 100})),
            },
            CommandSpec {
                operation: "READ_RAINFALL".to_string(),
                description: "Read the accumulated rainfall in millimetres".to_string(),
                command: LiteralCommand {
                    command: "READ_RAIN".to_string(),
                    parameters: vec![ParameterSpec {
                        name: "period".to_string(),
                        description: "Period: hour, day, week".to_string(),
                    }],
                },
                result: "Accumulated rainfall in mm".to_string(),
                format: Some(json!({"type": "number", "minimum": 0})),
            },
        ],
    });

    store.create(Device {
        identifier: "irrigation-system-001".to_string(),
        description: "Automated irrigation controller with independent zones".to_string(),
        manufacturer: "IrriControl Ltd".to_string(),
        url: "telnet://192.168.1.102:23".to_string(),
        commands: vec![
            CommandSpec {
                operation: "START_IRRIGATION".to_string(),
                description: "Start irrigation on a specific zone".to_string(),
                command: LiteralCommand {
                    command: "START".to_string(),
                    parameters: vec![
                        ParameterSpec {
                            name: "zone".to_string(),
                            description: "Zone number (1-8)".to_string(),
                        },
                        ParameterSpec {
                            name: "duration".to_string(),
                            description: "Duration in minutes (1-120)".to_string(),
                        },
                    ],
                },
                result: "Operation status".to_string(),
                format: Some(json!({"type": "string", "pattern": "(STARTED|ERROR)"})),
            },
            CommandSpec {
                operation: "STOP_IRRIGATION".to_string(),
                description: "Stop irrigation on a zone".to_string(),
                command: LiteralCommand {
                    command: "STOP".to_string(),
                    parameters: vec![ParameterSpec {
                        name: "zone".to_string(),
                        description: "Zone number (1-8)".to_string(),
                    }],
                },
                result: "Operation status".to_string(),
                format: Some(json!({"type": "string", "pattern": "(STOPPED|ERROR)"})),
            },
            CommandSpec {
                operation: "GET_ZONE_STATUS".to_string(),
                description: "Get the current status of a zone".to_string(),
                command: LiteralCommand {
                    command: "STATUS".to_string(),
                    parameters: vec![ParameterSpec {
                        name: "zone".to_string(),
                        description: "Zone number (1-8)".to_string(),
                    }],
                },
                result: "Status: active, inactive, error".to_string(),
                format: Some(json!({
                    "type": "object",
                    "properties": {
                        "status": {"type": "string"},
                        "flow_rate": {"type": "number"}
                    }
                })),
            },
        ],
    });

    info!("Seeded {} demo devices", store.len());
}
