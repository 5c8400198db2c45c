// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Tasmota devices.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::command::DeviceCommand;
use crate::error::TransportError;
use crate::protocol::{Protocol, RawResponse};

/// HTTP method used for the command request.
///
/// Tasmota accepts the command on either verb; `GET` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// `GET /cm?cmnd=...`
    #[default]
    Get,
    /// `POST /cm?cmnd=...` with an empty body.
    Post,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("get"),
            Self::Post => f.write_str("post"),
        }
    }
}

/// Configuration for talking to one device over HTTP.
///
/// # Examples
///
/// ```
/// use tascli::protocol::{HttpConfig, Method};
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.100")
///     .with_timeout(Duration::from_secs(15))
///     .with_method(Method::Post);
/// assert_eq!(config.base_url(), "http://192.168.1.100");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    timeout: Duration,
    method: Method,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the Tasmota device, with an
    ///   optional port. A leading `http://` or `https://` is kept as given.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            timeout: Self::DEFAULT_TIMEOUT,
            method: Method::default(),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{host}")
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, TransportError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Client)?;

        Ok(HttpClient {
            base_url,
            client,
            method: self.method,
        })
    }
}

/// HTTP client for communicating with one Tasmota device.
///
/// # Examples
///
/// ```no_run
/// use tascli::command::Mnemonic;
/// use tascli::protocol::{HttpConfig, Protocol};
///
/// # async fn example() -> tascli::Result<()> {
/// let client = HttpConfig::new("192.168.1.100").into_client()?;
/// let response = client.send(&Mnemonic::On.device_command()).await;
/// let body = response.into_body()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    method: Method,
}

impl HttpClient {
    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a command. The command is already encoded.
    fn build_url(&self, command: &DeviceCommand) -> String {
        format!("{}/cm?cmnd={}", self.base_url, command.as_str())
    }
}

impl Protocol for HttpClient {
    async fn send(&self, command: &DeviceCommand) -> RawResponse {
        let url = self.build_url(command);

        tracing::debug!(url = %url, method = %self.method, "Sending HTTP command");

        let response = match self
            .client
            .request(self.method.as_reqwest(), &url)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = %err, "HTTP request failed");
                return RawResponse::failed(err);
            }
        };

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();

        if status != reqwest::StatusCode::OK {
            let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Device answered with a non-200 status");
            tracing::debug!(body = %String::from_utf8_lossy(&body), "Received HTTP response");
            return RawResponse::with_status(status.as_u16(), reason, body);
        }

        tracing::debug!("HTTP status OK");

        match response.bytes().await {
            Ok(body) => {
                tracing::debug!(body = %String::from_utf8_lossy(&body), "Received HTTP response");
                RawResponse::with_status(status.as_u16(), reason, body.to_vec())
            }
            Err(err) => RawResponse::failed(err),
        }
    }
}
