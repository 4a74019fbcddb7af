//! Session configuration errors
//!
//! The simulation itself never fails mid-frame; everything that could make
//! the geometry degenerate is rejected here, before the first tick.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// A width/height (or the radius) is zero, negative or not finite
    NonPositiveDimension { field: &'static str, value: f32 },
    /// A spacing or speed parameter is negative or not finite
    NegativeParameter { field: &'static str, value: f32 },
    /// Paddle does not fit inside the playfield
    PaddleTooWide { paddle_width: f32, playfield_width: f32 },
    /// Ball direction cannot be normalized
    InvalidDirection { x: f32, y: f32 },
    /// A start position (ball, paddle, brick grid) is not finite or not
    /// inside the playfield
    OutsidePlayfield { field: &'static str, x: f32, y: f32 },
    /// Brick grid is larger than `consts::MAX_BRICKS`
    TooManyBricks { columns: u32, rows: u32, max: u32 },
    /// Config file could not be read
    Io(std::io::Error),
    /// Config JSON is malformed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::NegativeParameter { field, value } => {
                write!(f, "{field} must be zero or positive, got {value}")
            }
            Self::PaddleTooWide {
                paddle_width,
                playfield_width,
            } => write!(
                f,
                "paddle width {paddle_width} exceeds playfield width {playfield_width}"
            ),
            Self::InvalidDirection { x, y } => {
                write!(f, "ball direction ({x}, {y}) cannot be normalized")
            }
            Self::OutsidePlayfield { field, x, y } => {
                write!(f, "{field} ({x}, {y}) is outside the playfield")
            }
            Self::TooManyBricks { columns, rows, max } => write!(
                f,
                "brick grid {columns}x{rows} exceeds the limit of {max} bricks"
            ),
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
