//! Backend configuration.

use crate::error::{Error, Result};
use crate::gui::GuiKey;

/// Default wheel sensitivity (host deltas passed through unchanged).
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 1.0;

/// Which GUI modifier the host's platform command key drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CommandKey {
    /// Cmd maps to the Super modifier (macOS, iOS).
    Super,
    /// The command key is Ctrl (Windows, Linux).
    Ctrl,
}

impl CommandKey {
    /// Mapping for the platform this crate was compiled for.
    pub const fn platform_default() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            CommandKey::Super
        } else {
            CommandKey::Ctrl
        }
    }

    /// GUI modifier key driven by the command key.
    pub const fn gui_key(self) -> GuiKey {
        match self {
            CommandKey::Super => GuiKey::ModSuper,
            CommandKey::Ctrl => GuiKey::ModCtrl,
        }
    }
}

impl Default for CommandKey {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Construction-time settings for a backend.
///
/// ```rust
/// use imhost_core::{BackendConfig, CommandKey};
///
/// let config = BackendConfig::default()
///     .with_mouse_wheel_sensitivity(0.5)
///     .with_consume_key_presses(false)
///     .with_command_key(CommandKey::Super);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BackendConfig {
    /// Multiplier applied to both wheel axes. `0.0..1.0` slows scrolling
    /// down, `> 1.0` speeds it up. Negative values would invert scrolling
    /// against the user's platform setting and are not accepted.
    pub mouse_wheel_sensitivity: f32,
    /// Whether key presses are reported as consumed to the host, stopping
    /// them from reaching other listeners.
    pub consume_key_presses: bool,
    /// GUI modifier driven by the platform command key.
    pub command_key: CommandKey,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            mouse_wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            consume_key_presses: true,
            command_key: CommandKey::platform_default(),
        }
    }
}

impl BackendConfig {
    /// Set the wheel sensitivity.
    pub fn with_mouse_wheel_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_wheel_sensitivity = sensitivity;
        self
    }

    /// Set whether key presses are consumed.
    pub fn with_consume_key_presses(mut self, consume: bool) -> Self {
        self.consume_key_presses = consume;
        self
    }

    /// Override the command-key mapping.
    pub fn with_command_key(mut self, command_key: CommandKey) -> Self {
        self.command_key = command_key;
        self
    }

    /// Check the configuration. Only the wheel sensitivity can be wrong, and
    /// it is judged the way [`normalize_wheel_sensitivity`] judges it: a
    /// negative value passes because construction corrects it.
    pub fn validate(&self) -> Result<()> {
        normalize_wheel_sensitivity(self.mouse_wheel_sensitivity).map(|_| ())
    }
}

/// Normalise a requested wheel sensitivity.
///
/// Returns the absolute value of `requested`. Zero and non-finite values are
/// rejected; a negative value is corrected rather than rejected, since the
/// magnitude is still meaningful.
///
/// ```rust
/// use imhost_core::config::normalize_wheel_sensitivity;
///
/// assert_eq!(normalize_wheel_sensitivity(2.5), Ok(2.5));
/// assert_eq!(normalize_wheel_sensitivity(-2.0), Ok(2.0));
/// assert!(normalize_wheel_sensitivity(0.0).is_err());
/// ```
pub fn normalize_wheel_sensitivity(requested: f32) -> Result<f32> {
    let magnitude = requested.abs();
    if magnitude.is_finite() && magnitude > 0.0 {
        Ok(magnitude)
    } else {
        Err(Error::InvalidWheelSensitivity(requested))
    }
}
