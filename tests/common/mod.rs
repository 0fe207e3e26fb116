#![allow(dead_code)]

use httpmock::MockServer;
use migadu_client::Client;

/// `Basic base64("user@example.com:secret")`
pub const AUTHORIZATION: &str = "Basic dXNlckBleGFtcGxlLmNvbTpzZWNyZXQ=";

pub fn client(server: &MockServer) -> Client {
    Client::builder()
        .endpoint(server.base_url())
        .username("user@example.com")
        .token("secret")
        .build()
        .unwrap()
}
