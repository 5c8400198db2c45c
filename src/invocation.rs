// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One command round-trip: resolve, send, decode, render.

use crate::command::CommandRequest;
use crate::config::Config;
use crate::error::{Result, UsageError};
use crate::output::{self, OutputFormat};
use crate::protocol::Protocol;
use crate::response::Response;
use crate::target::Target;

/// A fully validated request for a single invocation.
///
/// Building an `Invocation` performs every usage check, so a value of this
/// type is always safe to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    target: Target,
    request: CommandRequest,
    format: OutputFormat,
}

impl Invocation {
    /// Creates an invocation from already validated parts.
    #[must_use]
    pub fn new(target: Target, request: CommandRequest, format: OutputFormat) -> Self {
        Self {
            target,
            request,
            format,
        }
    }

    /// Validates raw inputs and builds an invocation.
    ///
    /// The command inputs are checked before the target inputs.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError`] for conflicting, missing or unknown inputs.
    pub fn from_parts(
        cmd: Option<&str>,
        custom: Option<&str>,
        host: Option<&str>,
        device: Option<&str>,
        format: OutputFormat,
        config: &Config,
    ) -> std::result::Result<Self, UsageError> {
        let request = CommandRequest::from_parts(cmd, custom)?;
        let target = Target::from_parts(host, device, config)?;
        Ok(Self::new(target, request, format))
    }

    /// Returns the target device.
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Returns the command request.
    #[must_use]
    pub fn request(&self) -> &CommandRequest {
        &self.request
    }

    /// Returns the requested output format.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Sends the command over `transport` and renders the answer.
    ///
    /// A failed response is never decoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the device
    /// did not answer `200 OK` and [`Error::Decode`](crate::Error::Decode)
    /// if the body could not be decoded.
    pub async fn execute<P: Protocol>(&self, transport: &P) -> Result<String> {
        let command = self.request.device_command();
        if let CommandRequest::Custom(raw) = &self.request {
            tracing::debug!(custom = %raw, escaped = %command, "Custom command");
        }

        let body = transport.send(&command).await.into_body()?;
        let response = Response::decode(&self.request, &body)?;
        Ok(output::render(&response, self.format, self.target.label())?)
    }

    /// Sends the command over HTTP using the transport settings in `config`.
    ///
    /// # Errors
    ///
    /// See [`Invocation::execute`].
    pub async fn run(&self, config: &Config) -> Result<String> {
        let client = config.http_config(self.target.address()).into_client()?;
        self.execute(&client).await
    }
}
