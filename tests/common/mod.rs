//! Shared utilities for integration testing: a programmable mock
//! JSON-RPC node.
//!
//! The node is a bare TCP listener speaking just enough HTTP/1.1 for one
//! request per connection. Each test supplies a handler that dispatches on
//! the JSON-RPC method; `eth_defaults` covers the ambient queries the
//! provider stack issues on its own (chain id, nonce, gas and fee
//! estimation), so tests only spell out the calls they actually assert on.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Per-request dispatcher: method + params in, JSON-RPC result or
/// (code, message) error out.
pub type Handler = Arc<dyn Fn(&str, &Value) -> Result<Value, (i64, String)> + Send + Sync>;

/// Start a mock node and return its base URL.
pub async fn start_mock_node(handler: Handler) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let Some(body) = read_http_request(&mut socket).await else {
                            return;
                        };
                        let response_body = dispatch(&handler, &body);
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            response_body.len(),
                            response_body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    format!("http://{addr}")
}

async fn read_http_request(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        if buf.len() > 65536 {
            return None;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string())
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn dispatch(handler: &Handler, body: &str) -> String {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            return json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": {"code": -32700, "message": "parse error"}
            })
            .to_string()
        }
    };

    match parsed {
        Value::Array(requests) => {
            let responses: Vec<Value> = requests.iter().map(|r| respond(handler, r)).collect();
            serde_json::to_string(&responses).unwrap()
        }
        request => serde_json::to_string(&respond(handler, &request)).unwrap(),
    }
}

fn respond(handler: &Handler, request: &Value) -> Value {
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request
        .get("method")
        .and_then(|m| m.as_str())
        .unwrap_or_default();
    let params = request.get("params").cloned().unwrap_or(Value::Null);

    match (**handler)(method, &params) {
        Ok(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
        Err((code, message)) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": code, "message": message}
        }),
    }
}

/// Canned responses for the ambient queries the provider stack issues on
/// its own. Tests layer their specific methods on top and fall back here.
pub fn eth_defaults(method: &str) -> Option<Value> {
    match method {
        "eth_chainId" => Some(json!("0x7a69")),
        "eth_blockNumber" => Some(json!("0x10")),
        "eth_getTransactionCount" => Some(json!("0x0")),
        "eth_estimateGas" => Some(json!("0x186a0")),
        "eth_gasPrice" => Some(json!("0x3b9aca00")),
        "eth_maxPriorityFeePerGas" => Some(json!("0x3b9aca00")),
        "eth_feeHistory" => Some(json!({
            "oldestBlock": "0x0",
            "baseFeePerGas": ["0x3b9aca00", "0x3b9aca00"],
            "gasUsedRatio": [0.5],
            "reward": [["0x3b9aca00"]]
        })),
        "eth_getBlockByNumber" => Some(block_json()),
        _ => None,
    }
}

/// Fall back to `eth_defaults`, erroring on anything unhandled so tests
/// fail loudly when the client issues an unexpected call.
pub fn defaults_or_unknown(method: &str) -> Result<Value, (i64, String)> {
    eth_defaults(method).ok_or((-32601, format!("unknown method {method}")))
}

fn bloom() -> String {
    format!("0x{}", "0".repeat(512))
}

fn word(fill: &str) -> String {
    format!("0x{}", fill.repeat(64))
}

/// A settled transaction receipt for whichever hash was queried.
#[allow(dead_code)]
pub fn receipt_json(tx_hash: &Value, block_number: u64, succeeded: bool) -> Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": word("1"),
        "blockNumber": format!("0x{block_number:x}"),
        "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "to": null,
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "contractAddress": null,
        "logs": [],
        "logsBloom": bloom(),
        "type": "0x2",
        "status": if succeeded { "0x1" } else { "0x0" }
    })
}

/// A minimal but complete latest block, for fee-estimation fallbacks.
pub fn block_json() -> Value {
    json!({
        "hash": word("1"),
        "parentHash": word("0"),
        "sha3Uncles": word("0"),
        "miner": "0x0000000000000000000000000000000000000000",
        "stateRoot": word("0"),
        "transactionsRoot": word("0"),
        "receiptsRoot": word("0"),
        "logsBloom": bloom(),
        "difficulty": "0x0",
        "number": "0x10",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0x0",
        "timestamp": "0x0",
        "extraData": "0x",
        "mixHash": word("0"),
        "nonce": "0x0000000000000000",
        "baseFeePerGas": "0x3b9aca00",
        "uncles": [],
        "transactions": []
    })
}
