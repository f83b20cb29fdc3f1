//! Property tests: invariants that must hold for every seed and player
//! count, not just hand-picked fixtures.

use proptest::prelude::*;

use domino_engine::{
    DominoGame, GameConfig, GameResult, MemorySink, ResultStatus, SessionId, Tile,
    STANDARD_SET_SIZE,
};

fn run_game(seed: u64, player_count: usize) -> (GameResult, DominoGame<MemorySink>) {
    let config = GameConfig::new(player_count, SessionId::new(format!("prop-{seed}")));
    let mut game = DominoGame::setup(config, seed, MemorySink::new()).unwrap();
    let result = game.run().unwrap();
    (result, game)
}

proptest! {
    #[test]
    fn runs_terminate_with_consistent_results(seed in any::<u64>(), player_count in 2usize..=4) {
        let (result, game) = run_game(seed, player_count);

        // Conservation: every tile accounted for exactly once.
        let mut ids: Vec<_> = game
            .boneyard()
            .iter()
            .chain(game.players().iter().flat_map(|p| p.hand().iter()))
            .chain(game.chain().tiles())
            .map(|t| t.id().index())
            .collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..STANDARD_SET_SIZE).collect::<Vec<_>>());

        // Winner ids are valid and consistent with the outcome tag.
        prop_assert!(!result.winners().is_empty());
        for winner in result.winners() {
            prop_assert!(winner.index() < player_count);
        }
        match &result {
            GameResult::EmptyHand(winner) => {
                prop_assert_eq!(result.winners().len(), 1);
                prop_assert!(game.players()[winner.index()].has_empty_hand());
            }
            GameResult::Blocked(winners) => {
                prop_assert!(game.boneyard().is_empty());
                let min = game
                    .players()
                    .iter()
                    .filter_map(|p| p.hand_pip_sum())
                    .min()
                    .unwrap();
                for winner in winners {
                    prop_assert_eq!(game.players()[winner.index()].hand_pip_sum(), Some(min));
                }
            }
        }
    }

    #[test]
    fn snapshot_streams_are_bounded_and_ordered(seed in any::<u64>(), player_count in 2usize..=4) {
        let (result, game) = run_game(seed, player_count);
        let sink = game.into_sink();

        // Steps are the strict sequence 1..=n.
        for (i, snapshot) in sink.snapshots().iter().enumerate() {
            prop_assert_eq!(snapshot.step, i as u64 + 1);
        }

        // Bound: one snapshot per dealt player and per opening move, draw,
        // play, and pass. Draws and plays are each capped by the set size;
        // passes only happen with an empty boneyard and at most
        // player_count in a row before the game blocks, interleaved with
        // plays.
        let deal_snapshots = player_count + 1;
        let bound = deal_snapshots + 2 * STANDARD_SET_SIZE + player_count * STANDARD_SET_SIZE;
        prop_assert!(sink.snapshots().len() <= bound);

        let record = sink.result().unwrap();
        prop_assert_eq!(record.status, result.status());
        prop_assert_eq!(&record.winners, &result.winners().to_vec());
        prop_assert_ne!(record.status, ResultStatus::Failed);
    }

    #[test]
    fn final_chain_is_a_valid_domino_sequence(seed in any::<u64>(), player_count in 2usize..=4) {
        let (_, game) = run_game(seed, player_count);

        let tiles: Vec<&Tile> = game.chain().tiles().collect();
        prop_assert!(!tiles.is_empty());
        prop_assert_eq!(game.chain().left_open(), tiles[0].left());
        prop_assert_eq!(game.chain().right_open(), tiles[tiles.len() - 1].right());
        for pair in tiles.windows(2) {
            prop_assert_eq!(pair[0].right(), pair[1].left());
        }
    }
}
