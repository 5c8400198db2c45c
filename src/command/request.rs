// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::command::{DeviceCommand, Mnemonic};
use crate::error::UsageError;

/// What the caller asked the device to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    /// A built-in command with a typed response.
    Mnemonic(Mnemonic),
    /// A raw command string whose response shape is unknown.
    Custom(String),
}

impl CommandRequest {
    /// Builds a request from the two mutually exclusive inputs.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::CommandConflict`] if both are supplied,
    /// [`UsageError::MissingCommand`] if neither is, and
    /// [`UsageError::UnknownCommand`] if the mnemonic is not recognized.
    pub fn from_parts(cmd: Option<&str>, custom: Option<&str>) -> Result<Self, UsageError> {
        match (cmd, custom) {
            (Some(_), Some(_)) => Err(UsageError::CommandConflict),
            (None, None) => Err(UsageError::MissingCommand),
            (Some(cmd), None) => cmd.parse().map(Self::Mnemonic),
            (None, Some(custom)) => Ok(Self::Custom(custom.to_string())),
        }
    }

    /// Returns the encoded command to send.
    #[must_use]
    pub fn device_command(&self) -> DeviceCommand {
        match self {
            Self::Mnemonic(mnemonic) => mnemonic.device_command(),
            Self::Custom(raw) => DeviceCommand::encode(raw),
        }
    }

    /// Returns the mnemonic, if this is a built-in command.
    #[must_use]
    pub fn mnemonic(&self) -> Option<Mnemonic> {
        match self {
            Self::Mnemonic(mnemonic) => Some(*mnemonic),
            Self::Custom(_) => None,
        }
    }
}

impl From<Mnemonic> for CommandRequest {
    fn from(value: Mnemonic) -> Self {
        Self::Mnemonic(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_inputs_conflict() {
        let err = CommandRequest::from_parts(Some("on"), Some("Power On")).unwrap_err();
        assert_eq!(err, UsageError::CommandConflict);
    }

    #[test]
    fn neither_input_is_missing() {
        let err = CommandRequest::from_parts(None, None).unwrap_err();
        assert_eq!(err, UsageError::MissingCommand);
    }

    #[test]
    fn conflict_is_reported_before_mnemonic_validation() {
        let err = CommandRequest::from_parts(Some("reboot"), Some("Restart 1")).unwrap_err();
        assert_eq!(err, UsageError::CommandConflict);
    }

    #[test]
    fn mnemonic_request() {
        let req = CommandRequest::from_parts(Some("timers"), None).unwrap();
        assert_eq!(req, CommandRequest::Mnemonic(Mnemonic::Timers));
        assert_eq!(req.mnemonic(), Some(Mnemonic::Timers));
        assert_eq!(req.device_command().as_str(), "Timers");
    }

    #[test]
    fn unknown_mnemonic_request() {
        let err = CommandRequest::from_parts(Some("reboot"), None).unwrap_err();
        assert_eq!(err, UsageError::UnknownCommand("reboot".to_string()));
    }

    #[test]
    fn custom_request_is_encoded_not_validated() {
        let req = CommandRequest::from_parts(None, Some("Status 8")).unwrap();
        assert_eq!(req.mnemonic(), None);
        assert_eq!(req.device_command().as_str(), "Status%208");

        let req = CommandRequest::from_parts(None, Some("reboot")).unwrap();
        assert_eq!(req.device_command().as_str(), "reboot");
    }
}
