use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::ParameterError;
use crate::modules::trait_module::{Module, ParameterDefinition, ParameterKind};

fn default_protocol() -> String {
    "icmp".to_string()
}

fn default_count() -> u32 {
    3
}

/// Chequeo de alcanzabilidad de un destino desde el host remoto.
///
/// Demuestra restricciones cruzadas entre campos: `tcp`/`udp` exigen
/// `destination_port` y `icmp` lo prohíbe. Nada de eso es estructural;
/// el decode acepta cualquier combinación y `to_parameters` la juzga.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ping {
    pub destination: String,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub destination_port: Option<u16>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for Ping {
    fn default() -> Self {
        Self {
            destination: String::new(),
            protocol: default_protocol(),
            count: default_count(),
            destination_port: None,
            timeout_secs: None,
        }
    }
}

impl Module for Ping {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn description(&self) -> &'static str {
        "Probe a destination for reachability over icmp, tcp or udp"
    }

    fn parameter_definitions(&self) -> HashMap<String, ParameterDefinition> {
        let mut m = HashMap::new();
        m.insert(
            "destination".into(),
            ParameterDefinition {
                description: "Host name or address to probe".into(),
                kind: ParameterKind::String,
                required: true,
                default_value: None,
            },
        );
        m.insert(
            "protocol".into(),
            ParameterDefinition {
                description: "One of icmp, tcp or udp".into(),
                kind: ParameterKind::String,
                required: false,
                default_value: Some(Value::String("icmp".into())),
            },
        );
        m.insert(
            "count".into(),
            ParameterDefinition {
                description: "Number of probes to send".into(),
                kind: ParameterKind::Number,
                required: false,
                default_value: Some(json!(3)),
            },
        );
        m.insert(
            "destination_port".into(),
            ParameterDefinition {
                description: "Target port; required for tcp/udp, forbidden for icmp".into(),
                kind: ParameterKind::Number,
                required: false,
                default_value: None,
            },
        );
        m.insert(
            "timeout_secs".into(),
            ParameterDefinition {
                description: "Per-probe timeout in seconds".into(),
                kind: ParameterKind::Number,
                required: false,
                default_value: None,
            },
        );
        m
    }

    fn to_parameters(&self) -> Result<Value, ParameterError> {
        if self.destination.trim().is_empty() {
            return Err(ParameterError::new("destination", "destination must not be empty"));
        }
        match self.protocol.as_str() {
            "icmp" => {
                if self.destination_port.is_some() {
                    return Err(ParameterError::new(
                        "destination_port",
                        "icmp probes do not take a port",
                    ));
                }
            }
            "tcp" | "udp" => {
                if self.destination_port.is_none() {
                    return Err(ParameterError::new(
                        "destination_port",
                        format!("{} probes require a destination port", self.protocol),
                    ));
                }
            }
            other => {
                return Err(ParameterError::new(
                    "protocol",
                    format!("unsupported protocol `{other}`; expected icmp, tcp or udp"),
                ));
            }
        }
        if self.count == 0 {
            return Err(ParameterError::new("count", "must be at least 1"));
        }
        if self.timeout_secs == Some(0) {
            return Err(ParameterError::new("timeout_secs", "must be greater than zero"));
        }
        Ok(json!({
            "destination": self.destination,
            "protocol": self.protocol,
            "count": self.count,
            "destination_port": self.destination_port,
            "timeout_secs": self.timeout_secs,
        }))
    }
}
