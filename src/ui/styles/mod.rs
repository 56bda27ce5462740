// SPDX-License-Identifier: MPL-2.0
//! Centralized styling helpers shared by the views.

pub mod button;
pub mod container;
