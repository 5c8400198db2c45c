// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power response parsing.

use serde::{Deserialize, Serialize};

use crate::response::lenient;
use crate::types::RelayState;

/// Response from a `Power On` / `Power Off` command.
///
/// Tasmota answers with the new state as an uppercase string, for example
/// `{"POWER": "ON"}`. Multi-relay devices answer with `POWER1`, which is
/// accepted as well. A missing field decodes to the empty string.
///
/// # Examples
///
/// ```
/// use tascli::response::PowerResponse;
///
/// let json = r#"{"POWER": "ON"}"#;
/// let response: PowerResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.power(), "ON");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerResponse {
    #[serde(
        rename = "POWER",
        alias = "POWER1",
        default,
        deserialize_with = "lenient::string"
    )]
    power: String,
}

impl PowerResponse {
    /// Creates a response carrying `power`.
    #[must_use]
    pub fn new(power: impl Into<String>) -> Self {
        Self {
            power: power.into(),
        }
    }

    /// Returns the reported state exactly as the device sent it.
    #[must_use]
    pub fn power(&self) -> &str {
        &self.power
    }
}

impl From<RelayState> for PowerResponse {
    fn from(value: RelayState) -> Self {
        Self::new(value.as_str())
    }
}
