use std::time::Duration;

use thiserror::Error;

use crate::automaton::Mode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("automaton width must be at least 1")]
    ZeroWidth,

    #[error("history height must be at least 1")]
    ZeroHeight,

    #[error("pixel scale must be at least 1")]
    ZeroScale,
}

/// Startup parameters. These are compile-time constants as far as the
/// running program is concerned; there are no flags and no config file.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Cells per row.
    pub width: usize,

    /// Generations kept on screen.
    pub height: usize,

    /// Screen pixels per cell, applied uniformly on both axes.
    pub scale: usize,

    /// Fixed pause between generations.
    pub frame_delay: Duration,

    /// Initial Wolfram rule number.
    pub rule: u8,

    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 200,
            height: 180,
            scale: 5,
            frame_delay: Duration::from_millis(25),
            rule: 129,
            mode: Mode::Colorized,
        }
    }
}

impl Config {
    /// Reject degenerate dimensions up front, so the step and render paths
    /// never have to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }

        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }

        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }

        Ok(())
    }
}
