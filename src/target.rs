// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device address resolution.

use crate::config::Config;
use crate::error::UsageError;

/// The device a single invocation talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    address: String,
    label: String,
}

impl Target {
    /// Targets a host directly. The host doubles as the display label.
    #[must_use]
    pub fn host(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            label: address.clone(),
            address,
        }
    }

    /// Targets a device by name and address.
    #[must_use]
    pub fn named(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: name.into(),
        }
    }

    /// Resolves the target from an explicit host or a named device.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::TargetConflict`] if both are supplied,
    /// [`UsageError::MissingTarget`] if neither is, and
    /// [`UsageError::UnknownDevice`] if the name is not in `config`.
    pub fn from_parts(
        host: Option<&str>,
        device: Option<&str>,
        config: &Config,
    ) -> Result<Self, UsageError> {
        match (host, device) {
            (Some(_), Some(_)) => Err(UsageError::TargetConflict),
            (None, None) => Err(UsageError::MissingTarget),
            (Some(host), None) => Ok(Self::host(host)),
            (None, Some(name)) => {
                let address = config
                    .device(name)
                    .ok_or_else(|| UsageError::UnknownDevice(name.to_string()))?;
                tracing::debug!(device = name, address, "Device found");
                Ok(Self::named(name, address))
            }
        }
    }

    /// Returns the network address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the name shown in text output.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}
