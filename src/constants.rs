// Timing
pub const MOVE_INTERVAL_MS: u64 = 200;
pub const FRAME_POLL_MS: u64 = 16;

// Grid
pub const GRID_WIDTH: i16 = 20;
pub const GRID_HEIGHT: i16 = 20;
pub const MIN_GRID_SIZE: i16 = 5;

// Snake
pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const DIRECTION_QUEUE_CAPACITY: usize = 3;
pub const LEVEL_START: (i16, i16) = (3, 3);

// Food
pub const FOOD_SAMPLE_ATTEMPTS: u32 = 256;

// Level progression
pub const BASE_TARGET_FOOD: u32 = 3;
pub const TARGET_FOOD_PER_LEVEL: u32 = 2;
