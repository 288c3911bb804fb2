use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Envelope shared by every Codeforces API method.
#[derive(Serialize, Deserialize, Debug)]
pub struct CodeforcesResponse<T> {
    pub status: ResponseStatus,
    pub comment: Option<String>,
    pub result: Option<T>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Ok,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Failed,
    Ok,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantType {
    Contestant,
    Practice,
    Virtual,
    Manager,
    OutOfCompetition,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Member {
    pub handle: String,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Party {
    #[serde(alias = "contestId")]
    pub contest_id: Option<i64>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(alias = "participantType")]
    pub participant_type: ParticipantType,
    #[serde(alias = "teamName")]
    pub team_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Problem {
    #[serde(alias = "contestId")]
    pub contest_id: Option<i64>,
    pub index: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Submission {
    pub id: i64,
    #[serde(alias = "contestId")]
    pub contest_id: Option<i64>,
    #[serde(alias = "creationTimeSeconds")]
    pub creation_time_seconds: i64,
    pub problem: Problem,
    pub author: Party,
    #[serde(alias = "programmingLanguage")]
    pub programming_language: Option<String>,
    /// Absent while the submission is still in the judging queue.
    pub verdict: Option<Verdict>,
}

impl Submission {
    pub fn is_skipped(&self) -> bool {
        self.verdict == Some(Verdict::Skipped)
    }

    pub fn is_practice(&self) -> bool {
        self.author.participant_type == ParticipantType::Practice
    }
}

/// A row of `contest.status` filtered by handle.
///
/// The API returns full submission objects there, so this is the same type.
pub type ContestEntry = Submission;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Contest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub phase: Option<String>,
    #[serde(alias = "durationSeconds")]
    pub duration_seconds: Option<i64>,
    #[serde(alias = "startTimeSeconds")]
    pub start_time_seconds: Option<i64>,
}

impl Contest {
    pub fn start_at(&self) -> Option<DateTime<Utc>> {
        self.start_time_seconds
            .and_then(|seconds| Utc.timestamp_opt(seconds, 0).single())
    }
}
