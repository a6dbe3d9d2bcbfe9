use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "thresholds": {
                "type": "object",
                "properties": {
                    "escalation": { "type": "number", "minimum": 0.0, "maximum": 1.0 },
                    "phishing": { "type": "number", "minimum": 0.0, "maximum": 1.0 },
                    "suspicious": { "type": "number", "minimum": 0.0, "maximum": 1.0 },
                    "url_decision": { "type": "number", "minimum": 0.0, "maximum": 1.0 }
                }
            },
            "heuristic_weights": {
                "type": "object",
                "additionalProperties": { "type": "number", "minimum": 0.0 }
            },
            "llm": {
                "type": "object",
                "properties": {
                    "base_url": { "type": "string" },
                    "model": { "type": "string" },
                    "timeout_ms": { "type": "integer", "minimum": 1 }
                }
            },
            "fetch": {
                "type": "object",
                "properties": {
                    "timeout_ms": { "type": "integer", "minimum": 1 },
                    "user_agent": { "type": "string" }
                }
            }
        },
        "additionalProperties": false
    })
});
