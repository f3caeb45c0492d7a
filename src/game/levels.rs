//! The fixed, ordered campaign of hand-authored level maps.
//!
//! Maps are 20x20 ASCII art: `#` is wall, `.` is open. Every map keeps the
//! level start lane (row 3, columns 1-4) open so the snake is never spawned
//! facing a wall.

use super::grid::Grid;
use super::types::{Cell, Direction};
use crate::constants::{BASE_TARGET_FOOD, LEVEL_START, TARGET_FOOD_PER_LEVEL};
use crate::error::GameError;

/// Display names, indexed by level - 1.
pub const LEVEL_NAMES: [&str; 8] = [
    "Open Field",
    "Twin Bars",
    "Crossroads",
    "Pillars",
    "Courtyard",
    "Switchback",
    "Comb",
    "Labyrinth",
];

/// Number of shipped levels.
pub const LEVEL_COUNT: usize = LEVEL_MAPS.len();

const LEVEL_MAPS: [&[&str]; 8] = [
    // Level 1: Open Field
    &[
        "####################",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "####################",
    ],
    // Level 2: Twin Bars
    &[
        "####################",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#....##########....#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#....##########....#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "####################",
    ],
    // Level 3: Crossroads
    &[
        "####################",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#.........#........#",
        "#.........#........#",
        "#.........#........#",
        "#.........#........#",
        "#....###########...#",
        "#.........#........#",
        "#.........#........#",
        "#.........#........#",
        "#.........#........#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "####################",
    ],
    // Level 4: Pillars
    &[
        "####################",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#....##......##....#",
        "#....##......##....#",
        "#..................#",
        "#........##........#",
        "#........##........#",
        "#..................#",
        "#....##......##....#",
        "#....##......##....#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "####################",
    ],
    // Level 5: Courtyard
    &[
        "####################",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#.....###..###.....#",
        "#.....#......#.....#",
        "#.....#......#.....#",
        "#..................#",
        "#..................#",
        "#.....#......#.....#",
        "#.....#......#.....#",
        "#.....###..###.....#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "####################",
    ],
    // Level 6: Switchback
    &[
        "####################",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "###############....#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#....###############",
        "#..................#",
        "#..................#",
        "#..................#",
        "###############....#",
        "#..................#",
        "#..................#",
        "#..................#",
        "#..................#",
        "####################",
    ],
    // Level 7: Comb
    &[
        "####################",
        "#.........#........#",
        "#.........#........#",
        "#.........#........#",
        "#.........#........#",
        "#.........#........#",
        "#.....#...#...#....#",
        "#.....#...#...#....#",
        "#.....#...#...#....#",
        "#.....#...#...#....#",
        "#.....#...#...#....#",
        "#.....#...#...#....#",
        "#.....#...#...#....#",
        "#.....#...#...#....#",
        "#.....#...#...#....#",
        "#.....#.......#....#",
        "#.....#.......#....#",
        "#.....#.......#....#",
        "#.....#.......#....#",
        "####################",
    ],
    // Level 8: Labyrinth
    &[
        "####################",
        "#..................#",
        "#........##........#",
        "#..................#",
        "#..................#",
        "#.....###..###.....#",
        "#....#........#....#",
        "#....#........#....#",
        "#.##.#........#.##.#",
        "#........##........#",
        "#........##........#",
        "#.##.#........#.##.#",
        "#....#........#....#",
        "#....#........#....#",
        "#.....###..###.....#",
        "#..................#",
        "#..................#",
        "#........##........#",
        "#..................#",
        "####################",
    ],
];

/// Where the snake spawns on every level, and which way it faces.
pub fn level_start() -> (Cell, Direction) {
    (Cell::from(LEVEL_START), Direction::Right)
}

/// Foods required to clear `level` (1-based): 3, 5, 7, ...
pub fn target_food_count(level: usize) -> u32 {
    BASE_TARGET_FOOD + TARGET_FOOD_PER_LEVEL * (level.max(1) as u32 - 1)
}

/// Display name for `level` (1-based).
pub fn level_name(level: usize) -> &'static str {
    level
        .checked_sub(1)
        .and_then(|i| LEVEL_NAMES.get(i))
        .copied()
        .unwrap_or("Unknown")
}

/// Character width of the longest level name.
pub fn longest_name_len() -> usize {
    LEVEL_NAMES
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
}

/// Parse one shipped level (1-based) and check its start position.
pub fn load_level(level: usize) -> Result<Grid, GameError> {
    let rows = level
        .checked_sub(1)
        .and_then(|i| LEVEL_MAPS.get(i))
        .ok_or_else(|| GameError::InvalidMap {
            level,
            reason: format!("no such level (1..={})", LEVEL_COUNT),
        })?;
    let grid = Grid::from_rows(level, rows)?;
    let (start, direction) = level_start();
    grid.check_start(level, start, direction)?;
    Ok(grid)
}

/// Parse the whole campaign, in play order.
pub fn campaign() -> Result<Vec<Grid>, GameError> {
    (1..=LEVEL_COUNT).map(load_level).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    #[test]
    fn test_campaign_loads() {
        let levels = campaign().unwrap();
        assert_eq!(levels.len(), 8);
        for grid in &levels {
            assert_eq!(grid.width(), 20);
            assert_eq!(grid.height(), 20);
        }
    }

    #[test]
    fn test_level_one_border_is_walled() {
        let grid = load_level(1).unwrap();
        for i in 0..20 {
            assert!(grid.is_wall(Cell::new(i, 0)));
            assert!(grid.is_wall(Cell::new(i, 19)));
            assert!(grid.is_wall(Cell::new(0, i)));
            assert!(grid.is_wall(Cell::new(19, i)));
        }
        assert_eq!(grid.open_count(), 18 * 18);
        assert_eq!(grid, Grid::bordered(20, 20));
    }

    #[test]
    fn test_every_level_open_area_is_connected() {
        for (i, grid) in campaign().unwrap().iter().enumerate() {
            let open: HashSet<Cell> = grid.open_cells().collect();
            let (start, _) = level_start();
            let mut seen = HashSet::from([start]);
            let mut queue = VecDeque::from([start]);
            while let Some(cell) = queue.pop_front() {
                for dir in Direction::ALL {
                    let next = cell.step(dir);
                    if open.contains(&next) && seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
            assert_eq!(seen.len(), open.len(), "level {} has unreachable cells", i + 1);
        }
    }

    #[test]
    fn test_target_food_count() {
        assert_eq!(target_food_count(1), 3);
        assert_eq!(target_food_count(2), 5);
        assert_eq!(target_food_count(3), 7);
        assert_eq!(target_food_count(8), 17);
    }

    #[test]
    fn test_load_level_out_of_range() {
        assert!(matches!(
            load_level(0),
            Err(GameError::InvalidMap { level: 0, .. })
        ));
        assert!(load_level(LEVEL_COUNT + 1).is_err());
    }

    #[test]
    fn test_level_names() {
        assert_eq!(level_name(1), "Open Field");
        assert_eq!(level_name(8), "Labyrinth");
        assert_eq!(level_name(0), "Unknown");
        assert_eq!(level_name(9), "Unknown");
        assert!(longest_name_len() >= "Labyrinth".len());
        assert!(LEVEL_NAMES.iter().all(|n| n.len() <= longest_name_len()));
    }
}
