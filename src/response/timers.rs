// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timer table parsing.
//!
//! A device stores 16 timer slots. The `Timers` command reports them either
//! flat (`{"Timers": "ON", "Timer1": {...}, ..., "Timer16": {...}}`) or
//! grouped four at a time (`{"Timers1": {"Timer1": {...}, ...}, ...}`),
//! depending on the firmware version. Both shapes decode to the same table.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::response::lenient;

/// Number of timer slots on a device.
pub const TIMER_SLOTS: usize = 16;

/// One timer slot.
///
/// See <https://tasmota.github.io/docs/Timers/#json-payload-anatomy> for
/// the meaning of each field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Timer {
    /// 1 if the timer is armed.
    #[serde(default, deserialize_with = "lenient::int")]
    pub enable: u8,
    /// 0 = clock time, 1 = sunrise, 2 = sunset.
    #[serde(default, deserialize_with = "lenient::int")]
    pub mode: u8,
    /// Time of day as `HH:MM`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub time: String,
    /// Random window in minutes.
    #[serde(default, deserialize_with = "lenient::int")]
    pub window: u16,
    /// One flag per weekday starting on Sunday, e.g. `"0111110"`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub days: String,
    /// 1 to repeat every week.
    #[serde(default, deserialize_with = "lenient::int")]
    pub repeat: u8,
    /// Relay the timer drives.
    #[serde(default, deserialize_with = "lenient::int")]
    pub output: u8,
    /// 0 = off, 1 = on, 2 = toggle, 3 = rule.
    #[serde(default, deserialize_with = "lenient::int")]
    pub action: u8,
}

/// All 16 timer slots of a device.
///
/// Slots that are absent from the response are zero-valued; the table
/// always holds exactly [`TIMER_SLOTS`] entries.
///
/// # Examples
///
/// ```
/// use tascli::response::TimerTable;
///
/// let json = r#"{"Timers": "ON", "Timer3": {"Enable": 1, "Time": "07:30"}}"#;
/// let table: TimerTable = serde_json::from_str(json).unwrap();
/// assert_eq!(table.len(), 16);
/// assert_eq!(table.slot(3).unwrap().time, "07:30");
/// assert_eq!(table.slot(4).unwrap().time, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerTable {
    armed: String,
    slots: [Timer; TIMER_SLOTS],
}

impl TimerTable {
    /// Returns the global timer switch (`"ON"` / `"OFF"`), if reported.
    #[must_use]
    pub fn armed(&self) -> &str {
        &self.armed
    }

    /// Returns the slot with the 1-based number `number`.
    #[must_use]
    pub fn slot(&self, number: usize) -> Option<&Timer> {
        number.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    /// Returns the number of slots, always [`TIMER_SLOTS`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the table holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over `(name, slot)` pairs in order `Timer1`..`Timer16`.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Timer)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, timer)| (slot_name(i + 1), timer))
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let mut table = Self {
            armed: map.get("Timers").map(lenient::string_from_value).unwrap_or_default(),
            ..Self::default()
        };

        for (i, slot) in table.slots.iter_mut().enumerate() {
            let name = slot_name(i + 1);
            if let Some(value) = find_slot(map, &name) {
                *slot = Timer::deserialize(value).unwrap_or_default();
            }
        }

        table
    }
}

fn slot_name(number: usize) -> String {
    format!("Timer{number}")
}

/// Looks a slot up at top level first, then inside `TimersN` groups.
fn find_slot<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    map.get(name).or_else(|| {
        map.iter()
            .filter(|(key, _)| key.starts_with("Timers"))
            .find_map(|(_, group)| group.get(name))
    })
}

impl<'de> Deserialize<'de> for TimerTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match &value {
            Value::Object(map) => Self::from_object(map),
            _ => Self::default(),
        })
    }
}

impl Serialize for TimerTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(TIMER_SLOTS + 1))?;
        map.serialize_entry("Timers", &self.armed)?;
        for (name, timer) in self.iter() {
            map.serialize_entry(&name, timer)?;
        }
        map.end()
    }
}
