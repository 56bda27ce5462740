// SPDX-License-Identifier: MPL-2.0
//! UI components and shared visual vocabulary.

pub mod about;
pub mod design_tokens;
pub mod navbar;
pub mod showcase;
pub mod styles;
