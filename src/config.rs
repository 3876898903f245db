use crate::error::ConfigError;
use crate::generators::Generator;

/// Input of one generation run.
///
/// Fields are public so callers can build a configuration directly; `validate`
/// runs before any allocation in [`crate::generators::generate_maze`].
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    pub min_room_width: u16,
    pub min_room_height: u16,
    pub max_room_width: u16,
    pub max_room_height: u16,
    /// Target fraction of the area to fill with rooms. Clamped to `[0, 1]` on use.
    pub coverage: f64,
    pub hallway_width: u16,
    pub algorithm: Generator,
    /// `None` draws a fresh seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            min_room_width: 2,
            min_room_height: 2,
            max_room_width: 200,
            max_room_height: 200,
            coverage: 0.5,
            hallway_width: 1,
            algorithm: Generator::RoomsAndCorridors,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Coverage clamped to `[0, 1]`.
    pub fn coverage(&self) -> f64 {
        self.coverage.clamp(0.0, 1.0)
    }

    /// Number of cells placement tries to fill: `floor(area * coverage)`.
    pub fn target_filled(&self) -> usize {
        (self.area() as f64 * self.coverage()).floor() as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        for (axis, min, max) in [
            ("width", self.min_room_width, self.max_room_width),
            ("height", self.min_room_height, self.max_room_height),
        ] {
            if min == 0 {
                return Err(ConfigError::ZeroRoomSize { axis });
            }
            if min > max {
                return Err(ConfigError::InvertedRoomBounds { axis, min, max });
            }
        }
        if self.hallway_width == 0 {
            return Err(ConfigError::ZeroHallwayWidth);
        }
        if self.coverage.is_nan() {
            return Err(ConfigError::InvalidCoverage(self.coverage));
        }
        Ok(())
    }
}

/// Interprets a coverage given either as a fraction (`0.5`) or a percentage (`50`).
pub fn parse_coverage(raw: f64) -> f64 {
    let fraction = if raw > 1.0 { raw / 100.0 } else { raw };
    fraction.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MazeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = MazeConfig {
            height: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDimension {
                width: 1000,
                height: 0
            })
        );
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = MazeConfig {
            min_room_height: 10,
            max_room_height: 4,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRoomBounds {
                axis: "height",
                min: 10,
                max: 4
            })
        );
    }

    #[test]
    fn test_rejects_zero_room_and_hallway() {
        let config = MazeConfig {
            min_room_width: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroRoomSize { axis: "width" })
        );
        let config = MazeConfig {
            hallway_width: 0,
            ..MazeConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHallwayWidth));
    }

    #[test]
    fn test_coverage_is_clamped() {
        let config = MazeConfig {
            width: 10,
            height: 10,
            coverage: 1.7,
            ..MazeConfig::default()
        };
        assert_eq!(config.coverage(), 1.0);
        assert_eq!(config.target_filled(), 100);
        let config = MazeConfig {
            coverage: -0.2,
            ..config
        };
        assert_eq!(config.target_filled(), 0);
        let config = MazeConfig {
            coverage: 0.255,
            ..config
        };
        assert_eq!(config.target_filled(), 25);
    }

    #[test]
    fn test_rejects_nan_coverage() {
        let config = MazeConfig {
            coverage: f64::NAN,
            ..MazeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCoverage(_))
        ));
    }

    #[test]
    fn test_parse_coverage() {
        assert_eq!(parse_coverage(0.25), 0.25);
        assert_eq!(parse_coverage(50.0), 0.5);
        assert_eq!(parse_coverage(250.0), 1.0);
        assert_eq!(parse_coverage(-3.0), 0.0);
        assert_eq!(parse_coverage(1.0), 1.0);
    }
}
