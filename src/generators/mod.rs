use rand::{SeedableRng, rngs::StdRng};

mod closest_wall;
mod placement;
mod prune;
mod rooms_and_corridors;
pub mod spanning;

pub use closest_wall::{ClosestWallConnector, carve_straight_overlap};
pub use placement::{MAX_PLACEMENT_ATTEMPTS, Placement, place_rooms};
pub use prune::prune_dead_ends;
pub use rooms_and_corridors::{GreedySpanningConnector, carve_l_corridor};

use crate::config::MazeConfig;
use crate::error::ConfigError;
use crate::maze::{Grid, Maze, Room};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Selects the room connectivity strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Generator {
    #[default]
    RoomsAndCorridors,
    ClosestWall,
}

impl Generator {
    /// Every available algorithm, in the order they are listed to users.
    pub const ALL: [Generator; 2] = [Generator::RoomsAndCorridors, Generator::ClosestWall];

    /// The name used to select the algorithm on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Generator::RoomsAndCorridors => "rooms_and_corridors",
            Generator::ClosestWall => "closest_wall",
        }
    }

    /// The strategy that carves corridors for this algorithm.
    pub fn strategy(&self) -> &'static dyn ConnectivityStrategy {
        match self {
            Generator::RoomsAndCorridors => &GreedySpanningConnector,
            Generator::ClosestWall => &ClosestWallConnector,
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RoomsAndCorridors => write!(f, "Rooms and Corridors (L-shaped exits)"),
            Generator::ClosestWall => write!(f, "Closest Wall Connector"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name() == s)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

/// Decides which rooms to join and carves the corridors between them.
pub trait ConnectivityStrategy {
    /// Carves corridors into `grid` so that every room in `rooms` is reachable.
    /// `filled` is the number of non-empty cells before carving; the updated count
    /// is returned. Does nothing when fewer than two rooms exist.
    fn connect(
        &self,
        grid: &mut Grid,
        rooms: &[Room],
        config: &MazeConfig,
        rng: &mut StdRng,
        filled: usize,
    ) -> usize;
}

/// Validates `config` and runs the full pipeline with the algorithm it selects.
pub fn generate_maze(config: &MazeConfig) -> Result<Maze, ConfigError> {
    config.validate()?;
    let mut rng = get_rng(config.seed);
    Ok(generate_with(config, config.algorithm.strategy(), &mut rng))
}

/// Runs placement, `strategy` and dead-end pruning on a fresh grid.
///
/// `config` is assumed to be valid.
pub fn generate_with(
    config: &MazeConfig,
    strategy: &dyn ConnectivityStrategy,
    rng: &mut StdRng,
) -> Maze {
    let mut grid = Grid::new(config.width, config.height);

    let Placement {
        rooms,
        filled,
        attempts,
    } = place_rooms(&mut grid, config, rng);
    tracing::debug!(
        "[generate] placed {} rooms covering {} of {} target cells in {} attempts",
        rooms.len(),
        filled,
        config.target_filled(),
        attempts
    );

    let filled = strategy.connect(&mut grid, &rooms, config, rng, filled);
    tracing::debug!("[generate] {} cells filled after connecting rooms", filled);

    let filled = prune_dead_ends(&mut grid, &rooms);
    tracing::info!(
        "[generate] {} rooms, {} of {} cells filled",
        rooms.len(),
        filled,
        config.area()
    );

    Maze::new(grid, rooms)
}
