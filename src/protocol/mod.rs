// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for sending commands to Tasmota devices.
//!
//! Tasmota exposes a single HTTP endpoint, `/cm?cmnd=<command>`, which
//! answers with a JSON body. [`HttpClient`] performs exactly one request per
//! command; there is no retry.

mod http;

pub use http::{HttpClient, HttpConfig, Method};

use std::fmt;

use crate::command::DeviceCommand;
use crate::error::TransportError;

/// Unparsed answer from the device.
///
/// Only `200 OK` counts as success. Any other status, or a failure before a
/// status was received, is a failed response whose body (if any) is kept
/// for diagnostics but must not be decoded.
pub struct RawResponse {
    outcome: Outcome,
    body: Vec<u8>,
}

enum Outcome {
    Status { code: u16, reason: String },
    Failed(reqwest::Error),
}

impl RawResponse {
    /// Creates a response that received an HTTP status.
    #[must_use]
    pub fn with_status(code: u16, reason: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            outcome: Outcome::Status {
                code,
                reason: reason.into(),
            },
            body,
        }
    }

    /// Creates a response for a request that failed at the transport level.
    #[must_use]
    pub fn failed(error: reqwest::Error) -> Self {
        Self {
            outcome: Outcome::Failed(error),
            body: Vec::new(),
        }
    }

    /// Returns true only for `200 OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Status { code: 200, .. })
    }

    /// Returns the HTTP status code, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.outcome {
            Outcome::Status { code, .. } => Some(code),
            Outcome::Failed(_) => None,
        }
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for anything but `200 OK`.
    pub fn into_body(self) -> Result<Vec<u8>, TransportError> {
        match self.outcome {
            Outcome::Status { code: 200, .. } => Ok(self.body),
            Outcome::Status { code, reason } => Err(TransportError::Status {
                status: code,
                reason,
            }),
            Outcome::Failed(err) => Err(TransportError::Http(err)),
        }
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RawResponse");
        match &self.outcome {
            Outcome::Status { code, .. } => s.field("status", code),
            Outcome::Failed(err) => s.field("error", err),
        };
        s.field("body", &String::from_utf8_lossy(&self.body))
            .finish()
    }
}

/// Trait for transports that can deliver a command to a device.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends one command and returns whatever came back.
    ///
    /// Transport failures are reported through [`RawResponse`], never
    /// retried.
    async fn send(&self, command: &DeviceCommand) -> RawResponse;
}
