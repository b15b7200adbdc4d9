//! Window configuration.
//!
//! A `WindowSpec` is the immutable `{ window_size, step_size, wrap }` triple
//! shared by both window engines. All bounds that can be checked without
//! knowing the source length are checked here, once, at construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Shape of the windows produced by a spec, derived from its step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// Step of one: consecutive windows share all but one element.
    Sliding,
    /// Step equal to the window size: contiguous, non-overlapping windows.
    Tumbling,
    /// Step strictly between one and the window size.
    Hopping,
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKind::Sliding => write!(f, "sliding"),
            WindowKind::Tumbling => write!(f, "tumbling"),
            WindowKind::Hopping => write!(f, "hopping"),
        }
    }
}

/// Validated window configuration.
///
/// Invariant: `1 <= step_size <= window_size`. The source-length bound
/// (`window_size <= len`) only applies to slice-backed engines and is checked
/// by [`crate::eager::EagerWindows::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindowSpec")]
pub struct WindowSpec {
    window_size: usize,
    step_size: usize,
    wrap: bool,
}

impl WindowSpec {
    /// Creates a window spec, checking `1 <= step_size <= window_size`.
    ///
    /// # Errors
    /// Returns the first violated bound as a [`ConfigError`].
    pub fn new(window_size: usize, step_size: usize, wrap: bool) -> Result<Self, ConfigError> {
        if window_size < 1 {
            return Err(ConfigError::WindowSizeTooSmall);
        }
        if step_size < 1 {
            return Err(ConfigError::StepSizeTooSmall);
        }
        if step_size > window_size {
            return Err(ConfigError::StepExceedsWindow {
                step_size,
                window_size,
            });
        }

        Ok(WindowSpec {
            window_size,
            step_size,
            wrap,
        })
    }

    /// Sliding window: step of one.
    pub fn sliding(window_size: usize) -> Result<Self, ConfigError> {
        Self::new(window_size, 1, false)
    }

    /// Tumbling window: step equal to the window size.
    pub fn tumbling(window_size: usize) -> Result<Self, ConfigError> {
        Self::new(window_size, window_size, false)
    }

    /// Hopping window with an explicit step.
    pub fn hopping(window_size: usize, step_size: usize) -> Result<Self, ConfigError> {
        Self::new(window_size, step_size, false)
    }

    /// Returns the same spec with wrap-around enabled.
    pub fn wrapping(self) -> Self {
        self.with_wrap(true)
    }

    /// Returns the same spec with wrap-around set to `wrap`.
    pub fn with_wrap(self, wrap: bool) -> Self {
        WindowSpec { wrap, ..self }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn step_size(&self) -> usize {
        self.step_size
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// Classifies the spec by its step size.
    ///
    /// A window of size one has a step of one too; it is reported as
    /// tumbling since its windows never overlap.
    pub fn kind(&self) -> WindowKind {
        if self.step_size == self.window_size {
            WindowKind::Tumbling
        } else if self.step_size == 1 {
            WindowKind::Sliding
        } else {
            WindowKind::Hopping
        }
    }

    /// Checks the source-length bound used by slice-backed engines.
    pub(crate) fn check_source_len(&self, source_len: usize) -> Result<(), ConfigError> {
        if self.window_size > source_len {
            return Err(ConfigError::WindowExceedsSource {
                window_size: self.window_size,
                source_len,
            });
        }
        Ok(())
    }

    /// Builds a spec from a string parameter map.
    ///
    /// Recognized keys:
    /// - `window_size` (required)
    /// - `step_size` (defaults to `window_size`, i.e. tumbling)
    /// - `wrap` (`true` / `false`, defaults to `false`)
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingParameter`] when `window_size` is absent,
    /// [`ConfigError::InvalidParameter`] for unparsable values, and the usual
    /// bound errors otherwise.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let window_size = match params.get("window_size") {
            Some(value) => parse_param::<usize>("window_size", value)?,
            None => return Err(ConfigError::MissingParameter("window_size")),
        };
        let step_size = match params.get("step_size") {
            Some(value) => parse_param::<usize>("step_size", value)?,
            None => window_size,
        };
        let wrap = match params.get("wrap") {
            Some(value) => parse_param::<bool>("wrap", value)?,
            None => false,
        };

        Self::new(window_size, step_size, wrap)
    }

    /// Inverse of [`WindowSpec::from_params`].
    pub fn params_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("window_size".to_string(), self.window_size.to_string());
        map.insert("step_size".to_string(), self.step_size.to_string());
        map.insert("wrap".to_string(), self.wrap.to_string());
        map
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} window of {} (step {}{})",
            self.kind(),
            self.window_size,
            self.step_size,
            if self.wrap { ", wrapping" } else { "" }
        )
    }
}

fn parse_param<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidParameter {
            name,
            value: value.to_string(),
        })
}

/// Unvalidated wire form of a [`WindowSpec`].
#[derive(Debug, Deserialize)]
struct RawWindowSpec {
    window_size: usize,
    step_size: usize,
    #[serde(default)]
    wrap: bool,
}

impl TryFrom<RawWindowSpec> for WindowSpec {
    type Error = ConfigError;

    fn try_from(raw: RawWindowSpec) -> Result<Self, Self::Error> {
        WindowSpec::new(raw.window_size, raw.step_size, raw.wrap)
    }
}

/// Errors raised while building a window engine.
///
/// These are always reported at construction time; no engine is created
/// when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `window_size` was zero
    WindowSizeTooSmall,
    /// `step_size` was zero
    StepSizeTooSmall,
    /// `step_size` was larger than `window_size`
    StepExceedsWindow {
        step_size: usize,
        window_size: usize,
    },
    /// `window_size` was larger than the slice being windowed
    WindowExceedsSource {
        window_size: usize,
        source_len: usize,
    },
    /// A required parameter was absent from a parameter map
    MissingParameter(&'static str),
    /// A parameter value could not be parsed
    InvalidParameter { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WindowSizeTooSmall => {
                write!(f, "window_size must be greater than or equal to 1")
            }
            ConfigError::StepSizeTooSmall => {
                write!(f, "step_size must be greater than or equal to 1")
            }
            ConfigError::StepExceedsWindow {
                step_size,
                window_size,
            } => write!(
                f,
                "step_size must be less than or equal to window_size ({} > {})",
                step_size, window_size
            ),
            ConfigError::WindowExceedsSource {
                window_size,
                source_len,
            } => write!(
                f,
                "window_size must be less than or equal to the source length ({} > {})",
                window_size, source_len
            ),
            ConfigError::MissingParameter(name) => write!(f, "missing parameter: {}", name),
            ConfigError::InvalidParameter { name, value } => {
                write!(f, "invalid value for {}: {:?}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
