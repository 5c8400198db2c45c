// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command resolution.
//!
//! A user either names one of the built-in commands by a short mnemonic or
//! supplies a raw custom command. Both end up as a [`DeviceCommand`]: the
//! already percent-encoded token placed after `cmnd=` in the request URL.
//!
//! # Available Commands
//!
//! | Mnemonic | Device command | Decoded as |
//! |-------------|---------------|-----------|
//! | `on` | `Power%20On` | [`PowerResponse`](crate::response::PowerResponse) |
//! | `off` | `Power%20Off` | [`PowerResponse`](crate::response::PowerResponse) |
//! | `status` | `Status0` | [`StatusResponse`](crate::response::StatusResponse) |
//! | `statusall` | `Status0` | [`StatusResponse`](crate::response::StatusResponse) |
//! | `timers` | `Timers` | [`TimerTable`](crate::response::TimerTable) |
//!
//! # Examples
//!
//! ```
//! use tascli::command::{CommandRequest, Mnemonic};
//!
//! let on: Mnemonic = "on".parse().unwrap();
//! assert_eq!(on.device_command().as_str(), "Power%20On");
//!
//! let custom = CommandRequest::from_parts(None, Some("Dimmer 50")).unwrap();
//! assert_eq!(custom.device_command().as_str(), "Dimmer%2050");
//! ```

mod mnemonic;
mod request;

pub use mnemonic::Mnemonic;
pub use request::CommandRequest;

use std::fmt;

/// A command token ready to be placed in the query string.
///
/// The token is already percent-encoded; the transport never encodes it
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceCommand(String);

impl DeviceCommand {
    /// Wraps a token that is already percent-encoded.
    #[must_use]
    pub fn from_encoded(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Percent-encodes a raw command string.
    ///
    /// No validation takes place: any string the device might understand
    /// is accepted.
    #[must_use]
    pub fn encode(raw: &str) -> Self {
        Self(urlencoding::encode(raw).into_owned())
    }

    /// Returns the encoded token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
