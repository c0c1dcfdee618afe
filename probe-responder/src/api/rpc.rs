//! JSON-RPC Handler
//!
//! Answers a handful of node RPC methods with fixed results, enough for a
//! client that polls them to see realistic payloads.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

/// Incoming JSON-RPC call
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub id: JsonValue,
    pub method: String,
}

/// Outgoing JSON-RPC reply
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse {
    pub result: JsonValue,
    pub error: Option<JsonValue>,
    pub id: JsonValue,
}

/// POST /
pub async fn call(Json(req): Json<RpcRequest>) -> Json<RpcResponse> {
    tracing::debug!("RPC call: {}", req.method);

    Json(RpcResponse {
        result: canned_result(&req.method),
        error: None,
        id: req.id,
    })
}

fn canned_result(method: &str) -> JsonValue {
    match method {
        "getinfo" => json!({
            "blocks": 317247,
            "connections": 0,
        }),
        "getmininginfo" => json!({
            "difficulty": 23844670038.803299,
            "pooledtx": 2512,
        }),
        "getnettotals" => json!({
            "totalbytesrecv": 2473056304u64,
            "totalbytessent": 13355852932u64,
        }),
        "getrawmempool" => json!({
            "003156476fcc8d8a620ef2efa227865088b38697d55e1a6c1b5d1b2e3637fa3b": {
                "size": 191,
                "fee": 0.0,
                "time": 1407220106,
                "height": 314036,
                "startingpriority": 5498181.81818182,
                "currentpriority": 5666454.06949072,
                "depends": [],
            }
        }),
        _ => {
            tracing::warn!("Unknown method: {}", method);
            json!({})
        }
    }
}
