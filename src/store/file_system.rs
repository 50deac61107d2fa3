use std::io::SeekFrom;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt, AsyncWrite};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::codec::{decode_league, encode_league};
use crate::models::{League, Player};
use crate::store::{PlayerStore, Tape, Truncate};

const EMPTY_LEAGUE: &[u8] = b"[]";

/// Store backed by a JSON league document.
///
/// The document is read once at construction and cached as a snapshot. Reads
/// are served from the snapshot; every win rewrites the whole document. The
/// snapshot and the stream share one lock, so a win is applied to both or to
/// neither.
pub struct FileSystemPlayerStore<S> {
    inner: Mutex<Snapshot<S>>,
}

struct Snapshot<S> {
    league: League,
    tape: Tape<S>,
}

impl<S> FileSystemPlayerStore<S>
where
    S: AsyncRead + AsyncWrite + AsyncSeek + Truncate + Unpin + Send,
{
    /// Loads the league from `stream`, writing `[]` first if it is empty.
    pub async fn new(mut stream: S) -> Result<Self, StoreError> {
        stream.seek(SeekFrom::Start(0)).await?;
        let mut contents = Vec::new();
        stream.read_to_end(&mut contents).await?;

        let mut tape = Tape::new(stream);
        if contents.is_empty() {
            tracing::info!("League document is empty, initialising it");
            tape.rewrite(EMPTY_LEAGUE).await?;
            contents = EMPTY_LEAGUE.to_vec();
        }

        let league = decode_league(&contents)?;
        tracing::debug!(players = league.len(), "loaded league");

        Ok(Self {
            inner: Mutex::new(Snapshot { league, tape }),
        })
    }

    /// Gives back the underlying stream, dropping the snapshot.
    pub fn into_stream(self) -> S {
        self.inner.into_inner().tape.into_inner()
    }
}

impl FileSystemPlayerStore<tokio::fs::File> {
    /// Opens `path` read/write, creating it and its parent directories if needed.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .await?;

        Self::new(file).await
    }
}

async fn persist<S>(league: &League, tape: &mut Tape<S>) -> Result<(), StoreError>
where
    S: AsyncWrite + AsyncSeek + Truncate + Unpin + Send,
{
    let bytes = encode_league(league)?;
    tape.rewrite(&bytes).await?;
    Ok(())
}

#[async_trait]
impl<S> PlayerStore for FileSystemPlayerStore<S>
where
    S: AsyncRead + AsyncWrite + AsyncSeek + Truncate + Unpin + Send,
{
    async fn get_player_score(&self, name: &str) -> Option<u64> {
        let snapshot = self.inner.lock().await;
        snapshot.league.find(name).map(|p| p.wins)
    }

    async fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut snapshot = self.inner.lock().await;
        let Snapshot { league, tape } = &mut *snapshot;

        let created = match league.find_mut(name) {
            Some(player) => {
                player.wins = player
                    .wins
                    .checked_add(1)
                    .ok_or_else(|| StoreError::WinsOverflow(name.to_string()))?;
                false
            }
            None => {
                league.push(Player::new(name, 1));
                true
            }
        };

        if let Err(err) = persist(league, tape).await {
            // Keep the snapshot in step with what is on disk
            if created {
                league.pop();
            } else if let Some(player) = league.find_mut(name) {
                player.wins -= 1;
            }
            return Err(err);
        }

        tracing::debug!(player = name, created, "recorded win");
        Ok(())
    }

    async fn get_league(&self) -> League {
        self.inner.lock().await.league.clone()
    }
}
