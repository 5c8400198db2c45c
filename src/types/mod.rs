// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the decoder and the presenter.
//!
//! - [`RelayState`] - On/Off/Unknown classification of a power code

mod power;

pub use power::RelayState;
