use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::client::{LeaderboardSource, Notifier};
use crate::error::Result;
use crate::leaderboard::{changed_members, parse_leaderboard, Leaderboard};
use crate::output::{format_climbers, format_message};

/// Fetch the raw document, parse it and rank it.
///
/// The returned leaderboard is sorted by score + stars, highest first.
pub async fn fetch_leaderboard<S>(source: &S) -> Result<Leaderboard>
where
    S: LeaderboardSource + ?Sized,
{
    let raw = source.fetch_raw_leaderboard().await?;
    let mut leaderboard = parse_leaderboard(&raw)?;
    leaderboard.sort_by_highest_score_and_stars();

    tracing::debug!(members = leaderboard.len(), "leaderboard ranked");
    Ok(leaderboard)
}

/// One full run: fetch, rank, format and deliver.
/// Returns the leaderboard that was posted.
pub async fn fetch_and_post<S, N>(source: &S, notifier: &N, header: &str) -> Result<Leaderboard>
where
    S: LeaderboardSource + ?Sized,
    N: Notifier + ?Sized,
{
    let leaderboard = fetch_leaderboard(source).await?;
    notifier.deliver(&format_message(header, &leaderboard)).await?;

    tracing::info!(members = leaderboard.len(), "posted leaderboard");
    Ok(leaderboard)
}

/// What a single `Watcher::poll` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// First snapshot, kept as the comparison baseline without posting
    Baseline,
    /// Snapshot matched the previous one
    Unchanged,
    /// Snapshot differed and this message was delivered
    Posted(String),
}

/// Polls repeatedly within one process, posting only when the ranking changes.
///
/// The previous snapshot lives in memory only. A snapshot replaces it once it
/// has been compared (and, if changed, delivered); failed fetches or failed
/// deliveries leave it untouched, so the next poll sees the change again.
#[derive(Debug)]
pub struct Watcher {
    header: String,
    previous: Option<Leaderboard>,
}

impl Watcher {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            previous: None,
        }
    }

    pub fn previous(&self) -> Option<&Leaderboard> {
        self.previous.as_ref()
    }

    pub async fn poll<S, N>(&mut self, source: &S, notifier: &N) -> Result<PollOutcome>
    where
        S: LeaderboardSource + ?Sized,
        N: Notifier + ?Sized,
    {
        let current = fetch_leaderboard(source).await?;

        let outcome = match &self.previous {
            None => PollOutcome::Baseline,
            Some(previous) if current.is_equal_to(previous) => PollOutcome::Unchanged,
            Some(previous) => {
                let mut message = format_message(&self.header, &current);
                if let Some(climbers) = format_climbers(&changed_members(previous, &current)) {
                    message.push('\n');
                    message.push_str(&climbers);
                }
                notifier.deliver(&message).await?;
                tracing::info!(members = current.len(), "leaderboard changed, posted update");
                PollOutcome::Posted(message)
            }
        };

        self.previous = Some(current);
        Ok(outcome)
    }
}

/// Poll every `interval` until `shutdown` resolves, returning the number of
/// polls that ran to completion.
///
/// `shutdown` is created once and raced against both the wait and the poll,
/// so a signal that lands mid-request stops the loop instead of being lost.
/// Poll errors are logged and the loop carries on.
pub async fn watch<S, N, F>(
    watcher: &mut Watcher,
    source: &S,
    notifier: &N,
    interval: Duration,
    shutdown: F,
) -> usize
where
    S: LeaderboardSource + ?Sized,
    N: Notifier + ?Sized,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut polls = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => break,
        }

        let result = tokio::select! {
            result = watcher.poll(source, notifier) => result,
            _ = &mut shutdown => break,
        };
        polls += 1;

        match result {
            Ok(PollOutcome::Baseline) => tracing::info!("recorded baseline snapshot"),
            Ok(PollOutcome::Unchanged) => tracing::debug!("no change"),
            Ok(PollOutcome::Posted(_)) => {}
            // The next tick sees the same change again
            Err(e) => tracing::warn!("poll failed: {}", e),
        }
    }

    tracing::info!(polls, "stopped watching");
    polls
}
