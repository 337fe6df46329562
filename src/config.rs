//! Engine options.

use std::time::Duration;

use crate::board::SearchLimits;
use crate::game::GameError;

/// Shallowest search a caller may request.
pub const MIN_DEPTH: u32 = 1;
/// Deepest search a caller may request.
pub const MAX_DEPTH: u32 = 8;
/// Depth used when the caller does not ask for one.
pub const DEFAULT_DEPTH: u32 = 4;

/// Tunable search settings, owned per session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    pub default_depth: u32,
    /// Upper bound for requested depths, itself capped at `MAX_DEPTH`
    pub max_depth: u32,
    /// Optional per-search wall-clock budget
    pub move_time_ms: Option<u64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            default_depth: DEFAULT_DEPTH,
            max_depth: MAX_DEPTH,
            move_time_ms: None,
        }
    }
}

impl EngineOptions {
    /// Apply the default and range-check a requested depth.
    pub fn resolve_depth(&self, requested: Option<u32>) -> Result<u32, GameError> {
        let depth = requested.unwrap_or(self.default_depth);
        if (MIN_DEPTH..=self.max_depth).contains(&depth) {
            Ok(depth)
        } else {
            Err(GameError::InvalidDepth {
                depth,
                max: self.max_depth,
            })
        }
    }

    #[must_use]
    pub fn search_limits(&self, depth: u32) -> SearchLimits {
        let limits = SearchLimits::depth(depth);
        match self.move_time_ms {
            Some(ms) => limits.with_time_limit(Duration::from_millis(ms)),
            None => limits,
        }
    }

    /// Set an option by name. Returns false for unknown names.
    ///
    /// Names are case-insensitive: `depth`, `max depth`, `move time`
    /// (milliseconds, 0 disables). Out-of-range values are clamped,
    /// unparsable values are ignored.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "depth" => {
                if let Some(v) = value.and_then(|v| v.trim().parse::<u32>().ok()) {
                    self.default_depth = v.clamp(MIN_DEPTH, self.max_depth);
                }
            }
            "max depth" => {
                if let Some(v) = value.and_then(|v| v.trim().parse::<u32>().ok()) {
                    self.max_depth = v.clamp(MIN_DEPTH, MAX_DEPTH);
                    self.default_depth = self.default_depth.min(self.max_depth);
                }
            }
            "move time" => {
                if let Some(v) = value.and_then(|v| v.trim().parse::<u64>().ok()) {
                    self.move_time_ms = (v > 0).then_some(v);
                }
            }
            _ => return false,
        }
        true
    }
}
