// SPDX-License-Identifier: MPL-2.0
/// Top-level screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Showcase,
    About,
}
