use serde::{Deserialize, Serialize};

/// Short links are copied to the clipboard automatically unless the user
/// turned it off; an unset key reads as this default.
pub const AUTO_COPY_DEFAULT: bool = true;

/// Popup color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}
