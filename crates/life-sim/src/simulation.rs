use life_core::{AgingParams, EngineResult, Grid};
use rand::Rng;
use tracing::debug;

/// Number of cells seeded by [`Engine::start`].
pub const DEFAULT_SEED_COUNT: usize = 1000;

const DEFAULT_WIDTH: usize = 640;
const DEFAULT_HEIGHT: usize = 480;

/// Live/breeding neighbor tallies for one cell.
///
/// `breeding` is only tallied in aging mode; the engine substitutes `live`
/// for it when aging is disabled. Birth decisions use `breeding`, survival
/// and death decisions always use `live`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    pub live: u8,
    pub breeding: u8,
}

/// The simulation engine: grid state, aging parameters, and the
/// generation counter.
///
/// Single-threaded and synchronous; every operation runs to completion.
/// The surrounding collaborator owns cadence and reads grid state back
/// through [`Engine::grid`] between mutating calls.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    params: AgingParams,
    generation: u64,
}

impl Default for Engine {
    /// A 640x480 all-dead grid with aging disabled.
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("default dimensions are nonzero")
    }
}

impl Engine {
    /// Constructs an engine with an all-dead grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> EngineResult<Self> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            params: AgingParams::default(),
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn aging(&self) -> &AgingParams {
        &self.params
    }

    /// Reallocates an all-dead grid of the new dimensions and resets the
    /// generation counter. Rejected before any mutation on zero width or
    /// height.
    pub fn configure(&mut self, width: usize, height: usize) -> EngineResult<()> {
        self.grid = Grid::new(width, height)?;
        self.generation = 0;
        debug!("grid reconfigured to {width}x{height}");
        Ok(())
    }

    /// Kills every cell and resets the generation counter.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Reconfigures the aging parameters; takes effect on subsequent
    /// operations. Existing cells are neither cleared nor rescaled.
    pub fn set_aging(
        &mut self,
        enabled: bool,
        max_age: u8,
        end_breeding_age: u8,
    ) -> EngineResult<()> {
        self.params = AgingParams::new(enabled, max_age, end_breeding_age)?;
        debug!("aging {enabled}, max_age {max_age}, end_breeding_age {end_breeding_age}");
        Ok(())
    }

    /// Clears the grid and seeds [`DEFAULT_SEED_COUNT`] random cells.
    pub fn start(&mut self) {
        self.reset();
        self.random_generate(DEFAULT_SEED_COUNT);
    }

    /// Seeds `count` random cells using the thread RNG.
    pub fn random_generate(&mut self, count: usize) {
        self.random_generate_with(&mut rand::thread_rng(), count);
    }

    /// Seeds `count` uniformly random cells at the birth value and zeroes
    /// the generation counter. Existing live cells are kept; collisions
    /// overwrite with the same value, so fewer than `count` distinct cells
    /// may result.
    pub fn random_generate_with<R: Rng>(&mut self, rng: &mut R, count: usize) {
        self.generation = 0;
        let birth = self.params.birth_value();

        for _ in 0..count {
            let x = rng.gen_range(0..self.grid.width());
            let y = rng.gen_range(0..self.grid.height());
            self.grid.set(x, y, birth);
        }

        debug!("seeded {} cells ({} alive)", count, self.grid.count_alive());
    }

    /// Toggles the cell at `(x, y)` after toroidal wrapping: a dead cell
    /// is set to the birth value, a living one takes a decay step (down by
    /// one in aging mode, straight to dead otherwise). Does not advance
    /// the generation counter.
    pub fn spawn_or_destroy(&mut self, x: i32, y: i32) {
        let (x, y) = self.grid.wrap(x, y);
        let value = self.grid.get(x, y);

        if value == 0 {
            self.grid.set(x, y, self.params.birth_value());
        } else {
            self.grid.set(x, y, self.params.decay(value));
        }
    }

    /// Tallies the 8 toroidal neighbors of `(x, y)`.
    pub fn count_neighbors(&self, x: usize, y: usize) -> NeighborCounts {
        let mut counts = NeighborCounts::default();

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let value = self.grid.get_wrapped(x as i32 + dx, y as i32 + dy);
                if value != 0 {
                    counts.live += 1;
                    if self.params.enabled() && self.params.can_breed(value) {
                        counts.breeding += 1;
                    }
                }
            }
        }

        counts
    }

    /// Advances the simulation by one step and returns the new grid.
    ///
    /// All neighbor counts are taken from the current generation; the next
    /// state is built in a scratch buffer and swapped in, so the update is
    /// simultaneous across cells. Increments the generation counter by
    /// exactly one.
    pub fn next_generation(&mut self) -> &Grid {
        let mut next = self.grid.clone();
        let aging = self.params.enabled();

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let value = self.grid.get(x, y);
                let counts = self.count_neighbors(x, y);
                let breeding = if aging { counts.breeding } else { counts.live };

                if value == 0 && breeding == 3 {
                    next.set(x, y, self.params.birth_value());
                } else if value != 0 && counts.live != 2 && counts.live != 3 {
                    next.set(x, y, 0);
                } else if aging && value != 0 {
                    // survived, but a step closer to the lifespan cap
                    next.set(x, y, self.params.decay(value));
                }
            }
        }

        self.grid = next;
        self.generation += 1;
        &self.grid
    }
}
