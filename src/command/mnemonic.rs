// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in command mnemonics.

use std::fmt;
use std::str::FromStr;

use crate::command::DeviceCommand;
use crate::error::UsageError;

/// One of the built-in short command names.
///
/// Parsing lowercases the input once; the parsed value is then used both to
/// pick the device command and to pick the decoder, so `"ON"` and `"on"`
/// behave identically everywhere.
///
/// # Examples
///
/// ```
/// use tascli::command::Mnemonic;
///
/// assert_eq!("statusall".parse::<Mnemonic>().unwrap(), Mnemonic::StatusAll);
/// assert_eq!("Timers".parse::<Mnemonic>().unwrap(), Mnemonic::Timers);
/// assert!("reboot".parse::<Mnemonic>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Switch the relay on.
    On,
    /// Switch the relay off.
    Off,
    /// Query the relay state only.
    Status,
    /// Query the complete status tree.
    StatusAll,
    /// Query the timer table.
    Timers,
}

impl Mnemonic {
    /// Returns all mnemonics in help order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::On, Self::Off, Self::Status, Self::StatusAll, Self::Timers]
    }

    /// Returns the user-facing name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Status => "status",
            Self::StatusAll => "statusall",
            Self::Timers => "timers",
        }
    }

    /// Returns the literal, already-escaped token sent to the device.
    #[must_use]
    pub const fn command_token(&self) -> &'static str {
        match self {
            Self::On => "Power%20On",
            Self::Off => "Power%20Off",
            Self::Status | Self::StatusAll => "Status0",
            Self::Timers => "Timers",
        }
    }

    /// Returns the device command for this mnemonic.
    #[must_use]
    pub fn device_command(&self) -> DeviceCommand {
        DeviceCommand::from_encoded(self.command_token())
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mnemonic {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "status" => Ok(Self::Status),
            "statusall" => Ok(Self::StatusAll),
            "timers" => Ok(Self::Timers),
            _ => Err(UsageError::UnknownCommand(s.to_string())),
        }
    }
}
