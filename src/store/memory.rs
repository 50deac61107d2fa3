use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::{League, Player};
use crate::store::PlayerStore;

/// Map-backed store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    scores: Mutex<HashMap<String, u64>>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<Player> for InMemoryPlayerStore {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        let scores = iter.into_iter().map(|p| (p.name, p.wins)).collect();
        Self {
            scores: Mutex::new(scores),
        }
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn get_player_score(&self, name: &str) -> Option<u64> {
        self.scores.lock().await.get(name).copied()
    }

    async fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut scores = self.scores.lock().await;
        let wins = scores
            .get(name)
            .copied()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| StoreError::WinsOverflow(name.to_string()))?;
        scores.insert(name.to_string(), wins);
        tracing::debug!(player = name, wins, "recorded win");
        Ok(())
    }

    // Ranked by wins, ties by name
    async fn get_league(&self) -> League {
        let scores = self.scores.lock().await;
        let mut players: Vec<Player> = scores
            .iter()
            .map(|(name, wins)| Player::new(name.clone(), *wins))
            .collect();
        players.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
        League::from(players)
    }
}
