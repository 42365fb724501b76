//! Game setup: players, the remaining deck, and the board.

use crate::cards::{deck_without, full_deck, Card};
use crate::core::{GameConfig, GameRng, Player, Result};
use crate::grid::{CardSource, SetGrid};
use crate::solver::{all_sets, MaxExclusiveSearch, Triad};

/// A game of Set.
///
/// Before `start_new_game` (or when built with [`SetGame::new`]) there is no
/// deck and no board. A game built with [`SetGame::with_board`] has a deck
/// holding every card not on the board.
#[derive(Clone, Debug)]
pub struct SetGame {
    players: Vec<Player>,
    board: Option<SetGrid>,
    deck: Option<Vec<Card>>,
    config: GameConfig,
    rng: GameRng,
}

impl SetGame {
    /// Create a game with no board yet, using the default configuration.
    pub fn new(players: Vec<Player>) -> Self {
        Self::with_config(players, GameConfig::default())
    }

    /// Create a game with no board yet.
    pub fn with_config(players: Vec<Player>, config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            players,
            board: None,
            deck: None,
            config,
            rng,
        }
    }

    /// Create a game around an existing board.
    ///
    /// The deck is the full deck minus the board's cards.
    pub fn with_board(players: Vec<Player>, board: SetGrid) -> Self {
        let mut game = Self::new(players);
        game.deck = Some(deck_without(board.as_slice()));
        game.board = Some(board);
        game
    }

    /// Reset the deck and deal a fresh board of `config.rows` rows.
    ///
    /// Each call deals from a new fork of the game RNG. On error the game is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// `GridSizeExceeded` if the configured row count exceeds 27.
    pub fn start_new_game(&mut self) -> Result<()> {
        let mut deck = full_deck();
        let mut deal = self.rng.fork();
        let board = SetGrid::random(self.config.rows, &mut deck, &mut deal)?;

        self.deck = Some(deck);
        self.board = Some(board);
        Ok(())
    }

    /// Add a player. Chainable.
    pub fn add_player(&mut self, player: Player) -> &mut Self {
        self.players.push(player);
        self
    }

    /// Remove the player with the given id.
    ///
    /// Returns false if no such player exists.
    pub fn remove_player(&mut self, id: &str) -> bool {
        match self.players.iter().position(|p| p.id == id) {
            Some(index) => {
                self.players.remove(index);
                true
            }
            None => false,
        }
    }

    /// Take a valid set off the board and score it for a player.
    ///
    /// Returns false, changing nothing, if the player is unknown, there is
    /// no board, or the cards are not a valid set on the board.
    pub fn claim_set(&mut self, player_id: &str, a: Card, b: Card, c: Card) -> bool {
        let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) else {
            return false;
        };
        let Some(board) = self.board.as_mut() else {
            return false;
        };

        if !board.remove_set(a, b, c) {
            return false;
        }
        player.increment_score();
        true
    }

    /// All valid sets on the board, in board order.
    #[must_use]
    pub fn board_sets(&self) -> Vec<Triad> {
        self.board
            .as_ref()
            .map(|board| all_sets(&board.all_cards()))
            .unwrap_or_default()
    }

    /// Maximum packing of disjoint sets on the board, using `search`.
    ///
    /// # Errors
    ///
    /// `SearchBudgetExceeded` if the search's node budget runs out.
    pub fn board_max_exclusive_sets(&self, search: &mut MaxExclusiveSearch) -> Result<Vec<Triad>> {
        match &self.board {
            Some(board) => search.run(&board.all_cards()),
            None => Ok(Vec::new()),
        }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn board(&self) -> Option<&SetGrid> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn deck(&self) -> Option<&[Card]> {
        self.deck.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SetError;

    fn card(id: &str) -> Card {
        Card::parse(id).unwrap()
    }

    #[test]
    fn test_new_game_has_no_board() {
        let game = SetGame::new(vec![Player::new("p1", "Ada")]);
        assert!(game.board().is_none());
        assert!(game.deck().is_none());
        assert!(game.board_sets().is_empty());
        assert_eq!(game.players().len(), 1);
    }

    #[test]
    fn test_start_new_game_deals_rows() {
        let mut game = SetGame::with_config(vec![], GameConfig::default().with_rows(4));
        game.start_new_game().unwrap();

        assert_eq!(game.board().unwrap().len(), 12);
        assert_eq!(game.deck().unwrap().len(), 69);
    }

    #[test]
    fn test_restart_redeals_whole_deck() {
        let mut game = SetGame::new(vec![]);
        game.start_new_game().unwrap();
        let first = game.board().unwrap().clone();

        game.start_new_game().unwrap();
        assert_eq!(game.deck().unwrap().len(), 72);
        assert_ne!(game.board().unwrap(), &first);
    }

    #[test]
    fn test_start_new_game_rejects_oversized_board() {
        let mut game = SetGame::with_config(vec![], GameConfig::default().with_rows(30));
        assert_eq!(
            game.start_new_game(),
            Err(SetError::GridSizeExceeded { rows: 30 })
        );
        assert!(game.board().is_none());
    }

    #[test]
    fn test_with_board_excludes_board_cards_from_deck() {
        let board = SetGrid::from_cards([card("0000"), card("1111"), card("2222")]);
        let game = SetGame::with_board(vec![], board);

        let deck = game.deck().unwrap();
        assert_eq!(deck.len(), 78);
        assert!(!deck.contains(&card("1111")));
        assert_eq!(game.board_sets().len(), 1);
    }

    #[test]
    fn test_add_and_remove_players() {
        let mut game = SetGame::new(vec![]);
        game.add_player(Player::new("a", "Ada"))
            .add_player(Player::new("b", "Bo"));
        assert_eq!(game.players().len(), 2);

        assert!(game.remove_player("a"));
        assert!(!game.remove_player("a"));
        assert_eq!(game.players()[0].id, "b");
    }

    #[test]
    fn test_claim_set_scores_player() {
        let board = SetGrid::from_cards([card("0000"), card("1111"), card("2222"), card("0001")]);
        let mut game = SetGame::with_board(vec![Player::new("a", "Ada")], board);

        assert!(!game.claim_set("a", card("0000"), card("1111"), card("0001")));
        assert!(!game.claim_set("nobody", card("0000"), card("1111"), card("2222")));
        assert!(game.claim_set("a", card("0000"), card("1111"), card("2222")));

        assert_eq!(game.player("a").unwrap().score, 1);
        assert_eq!(game.board().unwrap().all_cards(), vec![card("0001")]);
    }

    #[test]
    fn test_board_max_exclusive_sets() {
        let board = SetGrid::from_cards(
            ["0000", "0111", "0222", "1012", "1120", "1201", "2021", "2102", "2210"]
                .iter()
                .map(|id| card(id)),
        );
        let game = SetGame::with_board(vec![], board);
        let mut search = MaxExclusiveSearch::default();

        let packing = game.board_max_exclusive_sets(&mut search).unwrap();
        assert_eq!(packing.len(), 3);

        let empty = SetGame::new(vec![]);
        assert!(empty.board_max_exclusive_sets(&mut search).unwrap().is_empty());
    }
}
