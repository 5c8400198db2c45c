// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relay state classification.

use std::fmt;

/// Classified state of a relay.
///
/// Tasmota reports the relay state numerically in the status tree; only `0`
/// and `1` have a meaning for a single relay.
///
/// # Examples
///
/// ```
/// use tascli::types::RelayState;
///
/// assert_eq!(RelayState::from_code(1), RelayState::On);
/// assert_eq!(RelayState::from_code(0).as_str(), "OFF");
/// assert_eq!(RelayState::from_code(2), RelayState::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayState {
    /// Relay is off.
    Off,
    /// Relay is on.
    On,
    /// Any other code.
    Unknown,
}

impl RelayState {
    /// Classifies a numeric power code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Off,
            1 => Self::On,
            _ => Self::Unknown,
        }
    }

    /// Returns the display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
