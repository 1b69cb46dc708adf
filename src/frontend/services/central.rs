//! JSON-RPC client for the central management service.

use crate::frontend::services::session::Session;
use crate::simple_error;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const RPC_PATH: &str = "/vc/jsonrpc";

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    method: &'a str,
    params: P,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
struct AuthorizedRequest<'a, P> {
    jsonrpc: &'static str,
    method: String,
    params: P,
    authorization: &'a str,
    id: u64,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ScanParams<'a> {
    proxy_identity: &'a str,
}

#[derive(Clone)]
pub struct CentralClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CentralClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            http,
            endpoint: rpc_endpoint(base_url),
        })
    }

    async fn post<B: Serialize>(&self, body: &B) -> Result<RpcResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }

    /// Exchanges credentials for an authorization token.
    pub async fn get_authorization(&self, username: &str, password: &str) -> Result<Session> {
        if username.trim().is_empty() {
            return Err(simple_error!("Username is required"));
        }
        if password.is_empty() {
            return Err(simple_error!("Password is required"));
        }

        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "get_authorization",
            params: Credentials { username, password },
            id: 1,
        };

        log::debug!("Requesting authorization from {}", self.endpoint);
        let response = self.post(&request).await?;

        let token = authorization_token(response)?;
        Ok(Session::new(username, token))
    }

    /// Asks a managed platform to run a BACnet who-is scan through
    /// `proxy_identity`.
    pub async fn start_bacnet_scan(
        &self,
        session: &Session,
        platform_uuid: &str,
        proxy_identity: &str,
    ) -> Result<()> {
        let request = AuthorizedRequest {
            jsonrpc: "2.0",
            method: platform_method(platform_uuid, "start_bacnet_scan"),
            params: ScanParams { proxy_identity },
            authorization: &session.authorization,
            id: 2,
        };

        log::debug!("Calling {} on {}", request.method, self.endpoint);
        let response = self.post(&request).await?;

        check_error(response).map(|_| ())
    }
}

/// Methods on a managed platform are routed as `platforms.uuid.<uuid>.<method>`.
fn platform_method(platform_uuid: &str, method: &str) -> String {
    format!("platforms.uuid.{platform_uuid}.{method}")
}

fn check_error(response: RpcResponse) -> Result<Option<Value>> {
    match response.error {
        Some(error) => Err(simple_error!("RPC error ({}): {}", error.code, error.message)),
        None => Ok(response.result),
    }
}

fn rpc_endpoint(base_url: &str) -> String {
    format!("{}{RPC_PATH}", base_url.trim_end_matches('/'))
}

fn authorization_token(response: RpcResponse) -> Result<String> {
    if let Some(error) = response.error {
        return Err(simple_error!(
            "Authorization refused ({}): {}",
            error.code,
            error.message
        ));
    }

    match response.result {
        Some(Value::String(token)) if !token.is_empty() => Ok(token),
        _ => Err(simple_error!("Authorization response carried no token")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> RpcResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            rpc_endpoint("http://vc.local:8080/"),
            "http://vc.local:8080/vc/jsonrpc"
        );
        assert_eq!(rpc_endpoint("http://vc.local"), "http://vc.local/vc/jsonrpc");
    }

    #[test]
    fn request_body_shape() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "get_authorization",
            params: Credentials {
                username: "admin",
                password: "secret",
            },
            id: 1,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "get_authorization",
                "params": { "username": "admin", "password": "secret" },
                "id": 1
            })
        );
    }

    #[test]
    fn token_is_taken_from_result() {
        let response = parse(json!({ "jsonrpc": "2.0", "id": 1, "result": "abc123" }));
        assert_eq!(authorization_token(response).unwrap(), "abc123");
    }

    #[test]
    fn rpc_error_is_reported() {
        let response = parse(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": 401, "message": "Invalid username/password specified." }
        }));
        let err = authorization_token(response).unwrap_err();
        assert!(err.to_string().contains("Invalid username/password"));
    }

    #[test]
    fn platform_methods_are_routed_by_uuid() {
        assert_eq!(
            platform_method("5f3c", "start_bacnet_scan"),
            "platforms.uuid.5f3c.start_bacnet_scan"
        );
    }

    #[test]
    fn authorized_request_carries_token() {
        let request = AuthorizedRequest {
            jsonrpc: "2.0",
            method: platform_method("5f3c", "start_bacnet_scan"),
            params: ScanParams {
                proxy_identity: "platform.bacnet_proxy",
            },
            authorization: "abc123",
            id: 2,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["authorization"], "abc123");
        assert_eq!(body["params"]["proxy_identity"], "platform.bacnet_proxy");
    }

    #[test]
    fn rpc_errors_surface_from_calls() {
        let err = check_error(parse(json!({
            "id": 2,
            "error": { "code": -32000, "message": "Can't reach agent identity" }
        })))
        .unwrap_err();
        assert!(err.to_string().contains("-32000"));
        assert!(check_error(parse(json!({ "id": 2, "result": null }))).is_ok());
    }

    #[test]
    fn empty_result_is_rejected() {
        assert!(authorization_token(parse(json!({ "id": 1, "result": "" }))).is_err());
        assert!(authorization_token(parse(json!({ "id": 1 }))).is_err());
    }

    #[tokio::test]
    async fn empty_credentials_fail_before_any_request() {
        let client = CentralClient::new("http://127.0.0.1:9").unwrap();
        let err = client.get_authorization("  ", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), "Username is required");
        let err = client.get_authorization("admin", "").await.unwrap_err();
        assert_eq!(err.to_string(), "Password is required");
    }

    #[tokio::test]
    async fn unusual_usernames_are_left_to_the_server() {
        // Nothing listens on the discard port, so reaching the transport
        // proves the name passed local checks.
        let client = CentralClient::new("http://127.0.0.1:9").unwrap();
        let long_name = "x".repeat(100);
        for username in ["site operator", long_name.as_str()] {
            let err = client.get_authorization(username, "pw").await.unwrap_err();
            assert!(err.to_string().starts_with("HTTP error"), "{username}: {err}");
        }
    }
}
