// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery screen.

pub mod button;
pub mod container;
