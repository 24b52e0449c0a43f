use hashbrown::HashSet;
use rand::prelude::*;

use crate::*;

/// Draws `config.mines()` distinct cell keys uniformly at random, never
/// including `avoided`.
///
/// Rejection sampling: duplicate draws and the avoided cell are simply
/// re-drawn. Terminates for every validated config because `mines` is
/// strictly below the total cell count, so at least one free cell always
/// remains.
pub fn generate_mine_positions(
    config: &GameConfig,
    avoided: Coord2,
    rng: &mut SmallRng,
) -> HashSet<HashKey> {
    let mines = usize::from(config.mines());
    let avoided_key = encode_hash_key(avoided, config.cols());
    let mut positions: HashSet<HashKey> = HashSet::with_capacity(mines);

    while positions.len() < mines {
        let row = rng.random_range(0..config.rows());
        let col = rng.random_range(0..config.cols());
        let key = encode_hash_key((row, col), config.cols());
        if key == avoided_key {
            continue;
        }
        positions.insert(key);
    }

    log::debug!("placed {} mines avoiding {:?}", positions.len(), avoided);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord2, mines: CellCount) -> GameConfig {
        GameConfig::new(size, mines).unwrap()
    }

    #[test]
    fn draws_exact_count_and_avoids_start() {
        let config = config((9, 9), 9);
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let keys = generate_mine_positions(&config, (1, 3), &mut rng);

            assert_eq!(keys.len(), 9);
            assert!(!keys.contains(&encode_hash_key((1, 3), 9)));
            assert!(keys.iter().all(|&key| key < config.total_cells()));
        }
    }

    #[test]
    fn saturated_board_is_fully_forced() {
        // every cell except the avoided one must carry a mine
        let config = config((4, 4), 15);
        let mut rng = SmallRng::seed_from_u64(7);
        let keys = generate_mine_positions(&config, (2, 2), &mut rng);

        assert_eq!(keys.len(), 15);
        assert!(!keys.contains(&encode_hash_key((2, 2), 4)));
    }

    #[test]
    fn same_seed_gives_same_positions() {
        let config = config((16, 16), 40);
        let mut first = SmallRng::seed_from_u64(42);
        let mut second = SmallRng::seed_from_u64(42);

        assert_eq!(
            generate_mine_positions(&config, (0, 0), &mut first),
            generate_mine_positions(&config, (0, 0), &mut second),
        );
    }
}
