use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::error::{ApiError, Entity};
use crate::models::*;

/// Store shared by every handler. One lock guards all three collections,
/// so each operation runs as a single unit.
pub type SharedStore = Arc<RwLock<Store>>;

/// In-memory tournament state. Lives for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Store {
    teams: BTreeMap<i64, Team>,
    players: BTreeMap<i64, Player>,
    matches: BTreeMap<i64, Match>,
    // Last id handed out to a player; never moves backwards, even after deletes.
    last_player_id: i64,
}

/// Upper bound on goals registered by a single request
pub const MAX_GOALS_PER_REQUEST: u32 = 100;

fn next_id<T>(map: &BTreeMap<i64, T>) -> i64 {
    map.last_key_value().map(|(id, _)| *id).unwrap_or(0) + 1
}

impl Store {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the winter championship fixtures.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        for (id, name) in [
            (1, "Barcelona HJ"),
            (2, "São José"),
            (3, "ADS"),
            (4, "Flamengo"),
            (5, "União"),
        ] {
            store.teams.insert(id, Team { id, name: name.to_string() });
        }

        let goal = |player: &str, team: &str| Goal {
            player_name: player.to_string(),
            team_name: team.to_string(),
        };

        store.matches.insert(1, Match {
            id: 1,
            team_1: "Barcelona".to_string(),
            team_2: "São José".to_string(),
            date: "2024-11-26".to_string(),
            result: Some("Barcelona 3 x 2 São José".to_string()),
            goals: vec![
                goal("Guilherme", "Barcelona"),
                goal("Guilherme", "Barcelona"),
                goal("Gustavo ", "Barcelona"),
                goal("Rodrigo", "São José"),
                goal("Rodrigo", "São José"),
            ],
        });
        store.matches.insert(2, Match {
            id: 2,
            team_1: "ADS".to_string(),
            team_2: "Flamengo".to_string(),
            date: "2024-11-18".to_string(),
            result: Some("ADS 2 x 0 Flamengo".to_string()),
            goals: vec![
                goal("Vini ", "ADS"),
                goal("Michel Jr.", "ADS"),
            ],
        });

        for (id, name, position, team, goals) in [
            (1, "Guilherme", "Atacante", "Barcelona", 10),
            (2, "João ", "Atacante", "Barcelona", 12),
            (3, "Vini", "Atacante", "ADS", 7),
            (4, " Paiva", "Meio-campo", "ADS", 5),
            (5, "Michel ", "Defensor", "ADS", 2),
            (6, "Pedro ", "Atacante", "Flamengo", 8),
            (7, "Pablo", "Atacante", "Flamengo", 6),
            (8, "Gil", "Meio-campo", "Flamengo", 4),
            (9, "Rodrigo", "Meio-campo", "São José", 7),
            (10, "Gustavo", "Defensor", "São José", 3),
            (11, "Rogilson", "Meio-campo", "União", 4),
            (12, "Gabriel", "Atacante", "União", 5),
        ] {
            store.players.insert(id, Player {
                id,
                name: name.to_string(),
                position: position.to_string(),
                team: team.to_string(),
                goals,
            });
        }
        store.last_player_id = store.players.keys().max().copied().unwrap_or(0);

        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    // Team operations
    pub fn list_teams(&self) -> Vec<Team> {
        self.teams.values().cloned().collect()
    }

    pub fn get_team(&self, id: i64) -> Result<Team, ApiError> {
        self.teams.get(&id).cloned().ok_or(ApiError::NotFound(Entity::Team))
    }

    pub fn add_team(&mut self, input: NewTeam) -> Team {
        let id = next_id(&self.teams);
        let team = Team { id, name: input.name };
        self.teams.insert(id, team.clone());
        tracing::info!(team_id = id, "team added");
        team
    }

    /// Removes the team only; players and matches naming it are left as they are.
    pub fn delete_team(&mut self, id: i64) -> Result<Team, ApiError> {
        let team = self.teams.remove(&id).ok_or(ApiError::NotFound(Entity::Team))?;
        tracing::info!(team_id = id, "team deleted");
        Ok(team)
    }

    // Player operations
    pub fn list_players(&self) -> Vec<Player> {
        self.players.values().cloned().collect()
    }

    pub fn get_player(&self, id: i64) -> Result<Player, ApiError> {
        self.players.get(&id).cloned().ok_or(ApiError::NotFound(Entity::Player))
    }

    pub fn add_player(&mut self, input: NewPlayer) -> Player {
        self.last_player_id += 1;
        let id = self.last_player_id;
        let player = Player {
            id,
            name: input.name,
            position: input.position,
            team: input.team,
            goals: input.goals,
        };
        self.players.insert(id, player.clone());
        tracing::info!(player_id = id, "player added");
        player
    }

    pub fn delete_player(&mut self, id: i64) -> Result<Player, ApiError> {
        let player = self.players.remove(&id).ok_or(ApiError::NotFound(Entity::Player))?;
        tracing::info!(player_id = id, "player deleted");
        Ok(player)
    }

    // Match operations
    pub fn list_matches(&self) -> Vec<Match> {
        self.matches.values().cloned().collect()
    }

    pub fn add_match(&mut self, input: NewMatch) -> Match {
        let id = next_id(&self.matches);
        let game = Match {
            id,
            team_1: input.team_1,
            team_2: input.team_2,
            date: input.date,
            result: input.result,
            goals: Vec::new(),
        };
        self.matches.insert(id, game.clone());
        tracing::info!(match_id = id, "match added");
        game
    }

    /// Overwrites teams, date and result. The goal log is kept.
    pub fn update_match(&mut self, id: i64, update: MatchUpdate) -> Result<Match, ApiError> {
        let game = self.matches.get_mut(&id).ok_or(ApiError::NotFound(Entity::Match))?;
        game.team_1 = update.team_1;
        game.team_2 = update.team_2;
        game.date = update.date;
        game.result = Some(update.result);
        tracing::info!(match_id = id, "match updated");
        Ok(game.clone())
    }

    pub fn delete_match(&mut self, id: i64) -> Result<Match, ApiError> {
        let game = self.matches.remove(&id).ok_or(ApiError::NotFound(Entity::Match))?;
        tracing::info!(match_id = id, "match deleted");
        Ok(game)
    }

    /// Appends `quantity` goals by the player to the match log and adds the
    /// same amount to the player's tally.
    ///
    /// Every check (both ids, the per-request cap, the tally bound) runs before
    /// anything is written, so a failed call leaves the store untouched.
    pub fn register_goals(
        &mut self,
        match_id: i64,
        player_id: i64,
        quantity: u32,
    ) -> Result<(Match, Player), ApiError> {
        if !self.matches.contains_key(&match_id) {
            return Err(ApiError::NotFound(Entity::Match));
        }
        let player = self.players.get_mut(&player_id).ok_or(ApiError::NotFound(Entity::Player))?;
        let game = self.matches.get_mut(&match_id).ok_or(ApiError::NotFound(Entity::Match))?;

        if quantity > MAX_GOALS_PER_REQUEST {
            return Err(ApiError::TooManyGoals { max: MAX_GOALS_PER_REQUEST });
        }
        let tally = player.goals.checked_add(quantity).ok_or(ApiError::GoalTallyOverflow)?;

        let scored = Goal {
            player_name: player.name.clone(),
            team_name: player.team.clone(),
        };
        game.goals.extend(std::iter::repeat_n(scored, quantity as usize));
        player.goals = tally;

        tracing::info!(match_id, player_id, quantity, "goals registered");
        Ok((game.clone(), player.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_team(name: &str) -> NewTeam {
        NewTeam { name: name.to_string() }
    }

    fn new_player(name: &str, goals: u32) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            position: "Atacante".to_string(),
            team: "ADS".to_string(),
            goals,
        }
    }

    fn new_match() -> NewMatch {
        NewMatch {
            team_1: "ADS".to_string(),
            team_2: "União".to_string(),
            date: "2024-12-01".to_string(),
            result: None,
        }
    }

    #[test]
    fn seeded_store_has_reference_fixtures() {
        let store = Store::seeded();
        assert_eq!(store.list_teams().len(), 5);
        assert_eq!(store.list_matches().len(), 2);
        assert_eq!(store.list_players().len(), 12);
        assert_eq!(store.list_matches()[0].goals.len(), 5);
    }

    #[test]
    fn team_ids_are_max_plus_one() {
        let mut store = Store::new();
        assert_eq!(store.add_team(new_team("A")).id, 1);
        assert_eq!(store.add_team(new_team("B")).id, 2);

        store.delete_team(1).unwrap();
        assert_eq!(store.add_team(new_team("C")).id, 3);

        // Deleting the highest id lets it be handed out again.
        store.delete_team(3).unwrap();
        assert_eq!(store.add_team(new_team("D")).id, 3);
    }

    #[test]
    fn added_team_round_trips() {
        let mut store = Store::seeded();
        let created = store.add_team(new_team("X"));
        assert_eq!(created.id, 6);
        assert_eq!(store.get_team(created.id).unwrap(), created);
    }

    #[test]
    fn player_counter_starts_at_seed_max_and_never_reuses() {
        let mut store = Store::seeded();
        let first = store.add_player(new_player("Novo", 0));
        assert_eq!(first.id, 13);

        store.delete_player(13).unwrap();
        let second = store.add_player(new_player("Outro", 0));
        assert_eq!(second.id, 14);
    }

    #[test]
    fn delete_returns_record_and_missing_id_is_not_found() {
        let mut store = Store::seeded();
        let expected = store.get_player(3).unwrap();

        assert_eq!(store.delete_player(3).unwrap(), expected);
        assert!(store.list_players().iter().all(|p| p.id != 3));
        assert_eq!(store.delete_player(3), Err(ApiError::NotFound(Entity::Player)));
        assert_eq!(store.list_players().len(), 11);

        assert_eq!(store.delete_team(99), Err(ApiError::NotFound(Entity::Team)));
        assert_eq!(store.list_teams().len(), 5);
        assert_eq!(store.delete_match(99), Err(ApiError::NotFound(Entity::Match)));
        assert_eq!(store.list_matches().len(), 2);
    }

    #[test]
    fn deleting_team_does_not_cascade() {
        let mut store = Store::seeded();
        store.delete_team(3).unwrap();
        assert!(store.list_players().iter().any(|p| p.team == "ADS"));
        assert!(store.list_matches().iter().any(|m| m.team_1 == "ADS"));
    }

    #[test]
    fn register_goals_updates_match_and_player() {
        let mut store = Store::seeded();
        let game = store.add_match(new_match());
        assert!(game.goals.is_empty());

        let (game, player) = store.register_goals(game.id, 1, 2).unwrap();
        assert_eq!(game.goals.len(), 2);
        assert!(game.goals.iter().all(|g| g.player_name == "Guilherme" && g.team_name == "Barcelona"));
        assert_eq!(player.goals, 12);
        assert_eq!(store.get_player(1).unwrap().goals, 12);
    }

    #[test]
    fn register_goals_missing_match_leaves_player_alone() {
        let mut store = Store::seeded();
        let err = store.register_goals(42, 1, 3).unwrap_err();
        assert_eq!(err, ApiError::NotFound(Entity::Match));
        assert_eq!(store.get_player(1).unwrap().goals, 10);
    }

    #[test]
    fn register_goals_missing_player_leaves_match_alone() {
        let mut store = Store::seeded();
        let err = store.register_goals(1, 42, 3).unwrap_err();
        assert_eq!(err, ApiError::NotFound(Entity::Player));
        assert_eq!(store.list_matches()[0].goals.len(), 5);
    }

    #[test]
    fn register_zero_goals_is_a_no_op() {
        let mut store = Store::seeded();
        let (game, player) = store.register_goals(2, 3, 0).unwrap();
        assert_eq!(game.goals.len(), 2);
        assert_eq!(player.goals, 7);
    }

    #[test]
    fn update_match_replaces_fields_and_keeps_goals() {
        let mut store = Store::seeded();
        let updated = store
            .update_match(1, MatchUpdate {
                team_1: "Barcelona HJ".to_string(),
                team_2: "União".to_string(),
                date: "2024-12-10".to_string(),
                result: "1 x 1".to_string(),
            })
            .unwrap();

        assert_eq!(updated.team_1, "Barcelona HJ");
        assert_eq!(updated.team_2, "União");
        assert_eq!(updated.date, "2024-12-10");
        assert_eq!(updated.result.as_deref(), Some("1 x 1"));
        assert_eq!(updated.goals.len(), 5);
    }

    #[test]
    fn update_missing_match_is_not_found() {
        let mut store = Store::new();
        let result = store.update_match(1, MatchUpdate {
            team_1: String::new(),
            team_2: String::new(),
            date: String::new(),
            result: String::new(),
        });
        assert_eq!(result, Err(ApiError::NotFound(Entity::Match)));
    }

    #[test]
    fn register_goals_past_tally_limit_changes_nothing() {
        let mut store = Store::seeded();
        let player = store.add_player(new_player("Artilheiro", u32::MAX));

        let err = store.register_goals(1, player.id, 1).unwrap_err();
        assert_eq!(err, ApiError::GoalTallyOverflow);
        assert_eq!(store.list_matches()[0].goals.len(), 5);
        assert_eq!(store.get_player(player.id).unwrap().goals, u32::MAX);
    }

    #[test]
    fn register_goals_up_to_tally_limit_is_accepted() {
        let mut store = Store::seeded();
        let player = store.add_player(new_player("Artilheiro", u32::MAX - 2));

        let (game, player) = store.register_goals(2, player.id, 2).unwrap();
        assert_eq!(game.goals.len(), 4);
        assert_eq!(player.goals, u32::MAX);
    }

    #[test]
    fn register_goals_over_request_cap_changes_nothing() {
        let mut store = Store::seeded();

        let err = store.register_goals(1, 1, MAX_GOALS_PER_REQUEST + 1).unwrap_err();
        assert_eq!(err, ApiError::TooManyGoals { max: MAX_GOALS_PER_REQUEST });
        let err = store.register_goals(1, 1, u32::MAX).unwrap_err();
        assert_eq!(err, ApiError::TooManyGoals { max: MAX_GOALS_PER_REQUEST });
        assert_eq!(store.list_matches()[0].goals.len(), 5);
        assert_eq!(store.get_player(1).unwrap().goals, 10);

        let (game, player) = store.register_goals(1, 1, MAX_GOALS_PER_REQUEST).unwrap();
        assert_eq!(game.goals.len(), 5 + MAX_GOALS_PER_REQUEST as usize);
        assert_eq!(player.goals, 10 + MAX_GOALS_PER_REQUEST);
    }

    #[test]
    fn seeded_names_keep_original_spelling() {
        let store = Store::seeded();
        assert_eq!(store.get_player(4).unwrap().name, " Paiva");
        assert_eq!(store.list_matches()[1].goals[0].player_name, "Vini ");
    }
}
