//! Integration tests for Unusual Whales MCP Server
//!
//! These tests drive the dispatcher, the JSON-RPC router and the HTTP
//! transport against an in-process stub of the Unusual Whales API. No real
//! API calls are made.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION};
use axum::http::{HeaderMap, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Map, Value};
use tower::ServiceExt;

use unusualwhales_mcp::api::{ApiClient, Catalog};
use unusualwhales_mcp::config::Config;
use unusualwhales_mcp::error::McpError;
use unusualwhales_mcp::mcp::{http, McpServer, ToolHandler};

const API_KEY: &str = "test-key";

/// One request as seen by the stub
#[derive(Debug, Clone)]
struct Seen {
    path: String,
    query: Option<String>,
    authorization: Option<String>,
    accept: Option<String>,
}

#[derive(Clone, Default)]
struct Stub {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl Stub {
    fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

fn header(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Canned responses keyed on the ticker segment of `/api/stock/{ticker}/info`
async fn stub_handler(State(stub): State<Stub>, uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path().to_string();
    stub.seen.lock().unwrap().push(Seen {
        path: path.clone(),
        query: uri.query().map(String::from),
        authorization: header(&headers, AUTHORIZATION),
        accept: header(&headers, ACCEPT),
    });

    match path.as_str() {
        "/api/stock/AAPL/info" => axum::Json(json!({
            "data": { "ticker": "AAPL", "name": "Apple Inc." }
        }))
        .into_response(),
        "/api/stock/LIMIT/info" => (
            StatusCode::TOO_MANY_REQUESTS,
            axum::Json(json!({ "message": "rate limited" })),
        )
            .into_response(),
        "/api/stock/DOWN/info" => (StatusCode::BAD_GATEWAY, "").into_response(),
        "/api/stock/HTML/info" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "/api/stock/EMPTY/info" => StatusCode::OK.into_response(),
        "/api/darkpool/ECHO" => {
            let pairs = axum::extract::Query::<Vec<(String, String)>>::try_from_uri(&uri)
                .map(|q| q.0)
                .unwrap_or_default();
            let echoed: Map<String, Value> = pairs
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            axum::Json(Value::Object(echoed)).into_response()
        }
        "/api/stock/SLOW/info" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            axum::Json(json!({ "late": true })).into_response()
        }
        _ => axum::Json(json!({ "data": [] })).into_response(),
    }
}

async fn start_stub() -> (String, Stub) {
    let stub = Stub::default();
    let app = Router::new()
        .fallback(stub_handler)
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), stub)
}

fn tool_handler(base_url: &str, timeout: Duration) -> ToolHandler {
    let config = Config::with_api_key(API_KEY)
        .base_url(base_url)
        .timeout(timeout);
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let client = Arc::new(ApiClient::new(&config).unwrap());
    ToolHandler::new(catalog, client)
}

/// Helper to create a JSON-RPC request
fn make_request(id: i64, method: &str, params: Option<Value>) -> String {
    let mut request = json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
    });
    if let Some(p) = params {
        request["params"] = p;
    }
    request.to_string()
}

mod dispatcher_tests {
    use super::*;

    #[tokio::test]
    async fn test_stock_info_success() {
        let (url, stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        let result = handler
            .call_tool("get_stock_info", json!({ "ticker": "AAPL" }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(
            result.text_content(),
            "{\n  \"data\": {\n    \"ticker\": \"AAPL\",\n    \"name\": \"Apple Inc.\"\n  }\n}"
        );

        let seen = stub.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "/api/stock/AAPL/info");
        assert_eq!(seen[0].query, None);
        assert_eq!(seen[0].authorization.as_deref(), Some("Bearer test-key"));
        assert_eq!(seen[0].accept.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_path_param_is_not_forwarded_as_query() {
        let (url, stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        handler
            .call_tool(
                "get_darkpool_ticker",
                json!({ "ticker": "AAPL", "min_size": 1000 }),
            )
            .await
            .unwrap();

        let seen = stub.requests();
        assert_eq!(seen[0].path, "/api/darkpool/AAPL");
        assert_eq!(seen[0].query.as_deref(), Some("min_size=1000"));
    }

    #[tokio::test]
    async fn test_path_values_are_escaped() {
        let (url, stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        handler
            .call_tool("get_stock_info", json!({ "ticker": "BRK/B" }))
            .await
            .unwrap();

        assert_eq!(stub.requests()[0].path, "/api/stock/BRK%2FB/info");
    }

    #[tokio::test]
    async fn test_query_encoding_rules() {
        let (url, stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        handler
            .call_tool(
                "get_alerts",
                json!({
                    "config_ids": ["b", "a"],
                    "limit": 0,
                    "intraday_only": false,
                    "ticker_symbols": null
                }),
            )
            .await
            .unwrap();

        assert_eq!(
            stub.requests()[0].query.as_deref(),
            Some("limit=0&intraday_only=false&config_ids=b&config_ids=a")
        );
    }

    #[tokio::test]
    async fn test_echoed_query_matches_cleaned_arguments() {
        let (url, _stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        let result = handler
            .call_tool(
                "get_darkpool_ticker",
                json!({
                    "ticker": "ECHO",
                    "limit": 0,
                    "min_size": 1000,
                    "older_than": null,
                    "date": "2024-01-02"
                }),
            )
            .await
            .unwrap();

        let echoed: Value = serde_json::from_str(result.text_content()).unwrap();
        assert_eq!(
            echoed,
            json!({ "date": "2024-01-02", "min_size": "1000", "limit": "0" })
        );
    }

    #[tokio::test]
    async fn test_remote_error_is_reported_in_band() {
        let (url, stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        let result = handler
            .call_tool("get_stock_info", json!({ "ticker": "LIMIT" }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert_eq!(result.text_content(), "API Error (429): rate limited");
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_status_reason() {
        let (url, _stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        let result = handler
            .call_tool("get_stock_info", json!({ "ticker": "DOWN" }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert_eq!(result.text_content(), "API Error (502): Bad Gateway");
    }

    #[tokio::test]
    async fn test_non_json_body_is_an_error() {
        let (url, _stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        let result = handler
            .call_tool("get_stock_info", json!({ "ticker": "HTML" }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.text_content().contains("invalid JSON response"));
        assert!(result.text_content().contains("<html>maintenance</html>"));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let (url, _stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        let result = handler
            .call_tool("get_stock_info", json!({ "ticker": "EMPTY" }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.text_content(), "null");
    }

    #[tokio::test]
    async fn test_timeout_is_reported_without_status() {
        let (url, _stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_millis(200));

        let started = std::time::Instant::now();
        let result = handler
            .call_tool("get_stock_info", json!({ "ticker": "SLOW" }))
            .await
            .unwrap();

        assert!(started.elapsed() < Duration::from_secs(3));
        assert!(result.is_error);
        assert_eq!(
            result.text_content(),
            "API Error: request timed out after 0.2 seconds"
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_makes_no_request() {
        let (url, stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        let err = handler
            .call_tool("get_nonexistent", json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, McpError::UnknownTool { .. }));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_arguments_make_no_request() {
        let (url, stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));

        for args in [
            json!({}),
            json!({ "ticker": null }),
            json!({ "ticker": "AAPL", "extra": true }),
            json!("AAPL"),
            json!({ "ticker": "   " }),
            json!({ "ticker": "." }),
            json!({ "ticker": ".." }),
        ] {
            let err = handler.call_tool("get_stock_info", args).await.unwrap_err();
            assert!(matches!(err, McpError::InvalidArguments { .. }));
        }

        let err = handler
            .call_tool(
                "get_group_flow_greek_flow_expiry",
                json!({ "flow_group": "..", "expiry": ".." }),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, McpError::InvalidArguments { .. }));

        let err = handler
            .call_tool("get_news_headlines", json!({ "limit": 101 }))
            .await
            .unwrap_err();
        assert!(matches!(err, McpError::InvalidArguments { .. }));

        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_every_endpoint_issues_one_get() {
        let (url, stub) = start_stub().await;
        let handler = tool_handler(&url, Duration::from_secs(5));
        let catalog = Catalog::builtin().unwrap();

        for endpoint in catalog.iter() {
            let args: Map<String, Value> = endpoint
                .path_params
                .iter()
                .map(|p| (p.name.to_string(), json!("X")))
                .collect();

            let result = handler
                .call_tool(endpoint.name, Value::Object(args))
                .await
                .unwrap_or_else(|e| panic!("{}: {}", endpoint.name, e));
            assert!(!result.is_error, "{}: {}", endpoint.name, result.text_content());
        }

        let seen = stub.requests();
        assert_eq!(seen.len(), catalog.len());
        for request in seen {
            assert!(request.path.starts_with("/api/"), "{}", request.path);
            assert!(!request.path.contains("%7B"), "{}", request.path);
            assert!(request.query.is_none(), "{:?}", request.query);
        }
    }
}

mod mcp_protocol_tests {
    use super::*;

    async fn server() -> (McpServer, Stub) {
        let (url, stub) = start_stub().await;
        (McpServer::new(tool_handler(&url, Duration::from_secs(5))), stub)
    }

    #[tokio::test]
    async fn test_tools_list_advertises_schemas() {
        let (server, _stub) = server().await;
        let response = server
            .handle_message(&make_request(1, "tools/list", None))
            .await
            .unwrap();

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 98);

        let flow = tools
            .iter()
            .find(|t| t["name"] == "get_option_trades_flow_alerts")
            .unwrap();
        let limit = &flow["inputSchema"]["properties"]["limit"];
        assert_eq!(limit["minimum"], 1);
        assert_eq!(limit["maximum"], 200);
        assert_eq!(flow["inputSchema"]["additionalProperties"], false);
    }

    #[tokio::test]
    async fn test_tools_call_round_trip() {
        let (server, stub) = server().await;
        let response = server
            .handle_message(&make_request(
                2,
                "tools/call",
                Some(json!({ "name": "get_stock_info", "arguments": { "ticker": "AAPL" } })),
            ))
            .await
            .unwrap();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["result"]["content"][0]["type"], "text");
        assert!(value["result"].get("isError").is_none());
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_tools_call_api_error_is_not_a_protocol_error() {
        let (server, _stub) = server().await;
        let response = server
            .handle_message(&make_request(
                3,
                "tools/call",
                Some(json!({ "name": "get_stock_info", "arguments": { "ticker": "LIMIT" } })),
            ))
            .await
            .unwrap();

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "API Error (429): rate limited"
        );
    }

    #[tokio::test]
    async fn test_tools_call_missing_argument_is_invalid_params() {
        let (server, stub) = server().await;
        let response = server
            .handle_message(&make_request(
                4,
                "tools/call",
                Some(json!({ "name": "get_stock_info" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32602);
        assert!(stub.requests().is_empty());
    }
}

mod http_transport_tests {
    use super::*;

    async fn app() -> (Router, Stub) {
        let (url, stub) = start_stub().await;
        let server = Arc::new(McpServer::new(tool_handler(&url, Duration::from_secs(5))));
        (http::router(server), stub)
    }

    fn post(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(http::MCP_PATH)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping_over_http() {
        let (app, _stub) = app().await;
        let response = app.oneshot(post(make_request(1, "ping", None))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["result"], json!({}));
    }

    #[tokio::test]
    async fn test_notification_is_accepted() {
        let (app, _stub) = app().await;
        let body = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
        let response = app.oneshot(post(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_tool_call_over_http() {
        let (app, stub) = app().await;
        let request = make_request(
            7,
            "tools/call",
            Some(json!({ "name": "get_darkpool_ticker", "arguments": { "ticker": "AAPL", "min_size": 1000 } })),
        );
        let response = app.oneshot(post(request)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 7);
        assert!(body["result"]["content"][0]["text"].is_string());
        assert_eq!(stub.requests()[0].query.as_deref(), Some("min_size=1000"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (app, _stub) = app().await;
        let response = app.oneshot(post("{oops".to_string())).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], -32700);
        assert_eq!(body["id"], Value::Null);
    }

    #[tokio::test]
    async fn test_non_utf8_body_is_parse_error() {
        let (app, _stub) = app().await;
        let request = Request::builder()
            .method("POST")
            .uri(http::MCP_PATH)
            .header("content-type", "application/json")
            .body(Body::from(vec![0xff, 0xfe, b'{', b'}']))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], -32700);
        assert_eq!(body["id"], Value::Null);
    }

    #[tokio::test]
    async fn test_null_id_over_http_is_invalid_request() {
        let (app, _stub) = app().await;
        let body = json!({ "jsonrpc": "2.0", "id": null, "method": "ping" });
        let response = app.oneshot(post(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn test_foreign_origin_is_forbidden() {
        let (app, stub) = app().await;
        let mut request = post(make_request(
            8,
            "tools/call",
            Some(json!({ "name": "get_stock_info", "arguments": { "ticker": "AAPL" } })),
        ));
        request
            .headers_mut()
            .insert("origin", "https://evil.example.com".parse().unwrap());
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_loopback_and_allowed_origins_are_served() {
        let (url, _stub) = start_stub().await;
        let server = Arc::new(McpServer::new(tool_handler(&url, Duration::from_secs(5))));
        let app = http::router_with_origins(server, vec!["https://app.example.com".to_string()]);

        for origin in ["http://localhost:5173", "https://app.example.com"] {
            let mut request = post(make_request(9, "ping", None));
            request
                .headers_mut()
                .insert("origin", origin.parse().unwrap());
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", origin);
        }
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let (app, _stub) = app().await;
        let request = Request::builder()
            .method("GET")
            .uri(http::MCP_PATH)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
