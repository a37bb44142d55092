//! Client Telemetry Sink
//!
//! Browser clients POST error reports here. The endpoint is deliberately
//! tolerant: any body is accepted, anything JSON-shaped gets its known
//! fields pulled into the log record, and the response is always `{ok:true}`
//! so a broken client cannot loop on its own error reporter.

use std::net::SocketAddr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::ConnectInfo;
use axum::http::HeaderMap;
use platform::client::extract_client_ip;
use serde_json::{Value, json};

pub async fn ingest_client_log(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let client_ip = extract_client_ip(&headers, Some(addr.ip()))
        .map(|ip| ip.to_string())
        .unwrap_or_default();

    match serde_json::from_slice::<Value>(&body) {
        Ok(entry) => {
            tracing::info!(
                client = %client_ip,
                kind = %field(&entry, "type"),
                time = %field(&entry, "time"),
                url = %field(&entry, "url"),
                data = %entry.get("data").map(|v| v.to_string()).unwrap_or_default(),
                "Client log"
            );
        }
        Err(_) => {
            tracing::info!(client = %client_ip, bytes = body.len(), "Client log (non-JSON body)");
        }
    }

    Json(json!({ "ok": true }))
}

fn field<'a>(entry: &'a Value, key: &str) -> &'a str {
    entry.get(key).and_then(Value::as_str).unwrap_or("")
}
