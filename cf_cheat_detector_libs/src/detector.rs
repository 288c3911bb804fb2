use crate::codeforces::{
    client::{CodeforcesApi, CodeforcesApiError},
    model::{Contest, ContestEntry},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::collections::BTreeSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, DetectorError>;

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("network error: {0}")]
    NetworkError(#[from] CodeforcesApiError),
}

#[skip_serializing_none]
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct FlaggedContest {
    pub id: i64,
    pub name: String,
    pub start_at: Option<DateTime<Utc>>,
}

impl From<Contest> for FlaggedContest {
    fn from(contest: Contest) -> Self {
        Self {
            start_at: contest.start_at(),
            id: contest.id,
            name: contest.name,
        }
    }
}

/// Result of one check.
///
/// `flagged` always holds every suspicious contest id, while `contests` only holds
/// the ones found in the non-gym contest list.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
pub struct DetectionReport {
    pub flagged: BTreeSet<i64>,
    pub contests: Vec<FlaggedContest>,
}

impl DetectionReport {
    pub fn names(&self) -> Vec<String> {
        self.contests
            .iter()
            .map(|contest| contest.name.clone())
            .collect()
    }

    /// Flagged ids that didn't resolve to a contest.
    pub fn unresolved(&self) -> Vec<i64> {
        self.flagged
            .iter()
            .filter(|id| !self.contests.iter().any(|contest| contest.id == **id))
            .cloned()
            .collect()
    }
}

/// Whether every entry of a handle in a contest is skipped or was sent as practice.
pub fn all_skipped_or_practice(entries: &[ContestEntry]) -> bool {
    entries
        .iter()
        .all(|entry| entry.is_skipped() || entry.is_practice())
}

pub struct Detector<C> {
    api: C,
}

impl<C> Detector<C>
where
    C: CodeforcesApi + Send + Sync,
{
    pub fn new(api: C) -> Self {
        Self { api }
    }

    /// Collect ids of the contests in which every entry of the handle is skipped or practice.
    ///
    /// Requests are issued one by one, once per skipped submission, even when several
    /// skipped submissions share a contest.
    pub async fn flag_contests(&self, handle: &str) -> Result<BTreeSet<i64>> {
        tracing::info!("Start to check submissions of {}", handle);
        let submissions = self.api.user_status(handle).await?;
        tracing::debug!("{} submissions retrieved for {}", submissions.len(), handle);

        let mut flagged = BTreeSet::new();
        for submission in submissions.iter().filter(|submission| submission.is_skipped()) {
            let contest_id = match submission.contest_id {
                Some(contest_id) => contest_id,
                None => {
                    tracing::warn!(
                        "skipped submission {} has no contest id, ignored",
                        submission.id
                    );
                    continue;
                }
            };

            let entries = self.api.contest_status(contest_id, handle).await?;
            if all_skipped_or_practice(&entries) {
                tracing::debug!("contest {} flagged for {}", contest_id, handle);
                flagged.insert(contest_id);
            }
        }

        Ok(flagged)
    }

    /// Look up the flagged ids in the non-gym contest list, keeping the list's order.
    pub async fn resolve_contests(&self, flagged: &BTreeSet<i64>) -> Result<Vec<Contest>> {
        let contests = self
            .api
            .contest_list(false)
            .await?
            .into_iter()
            .filter(|contest| flagged.contains(&contest.id))
            .collect::<Vec<Contest>>();

        if contests.len() < flagged.len() {
            tracing::warn!(
                "{} of {} flagged contests are missing from the contest list",
                flagged.len() - contests.len(),
                flagged.len()
            );
        }

        Ok(contests)
    }

    pub async fn inspect(&self, handle: &str) -> Result<DetectionReport> {
        let flagged = self.flag_contests(handle).await?;
        if flagged.is_empty() {
            tracing::info!("No suspicious contest found for {}", handle);
            return Ok(DetectionReport::default());
        }

        let contests = self
            .resolve_contests(&flagged)
            .await?
            .into_iter()
            .map(FlaggedContest::from)
            .collect();
        tracing::info!("{} suspicious contests found for {}", flagged.len(), handle);

        Ok(DetectionReport { flagged, contests })
    }

    /// Names of the contests flagged for the handle.
    pub async fn detect(&self, handle: &str) -> Result<Vec<String>> {
        let report = self.inspect(handle).await?;
        Ok(report.names())
    }
}
