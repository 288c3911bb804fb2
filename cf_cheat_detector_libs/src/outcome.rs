use crate::detector::{DetectionReport, DetectorError, FlaggedContest};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// What a user gets to see after a check.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Clean {
        handle: String,
    },
    Detected {
        handle: String,
        contests: Vec<FlaggedContest>,
        /// Flagged ids missing from the non-gym contest list.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        unresolved: Vec<i64>,
    },
    Error {
        message: String,
    },
}

impl CheckOutcome {
    /// The cause of a failure is logged here and never exposed.
    pub fn from_result(handle: &str, result: Result<DetectionReport, DetectorError>) -> Self {
        match result {
            Ok(report) if report.flagged.is_empty() => CheckOutcome::Clean {
                handle: handle.to_string(),
            },
            Ok(report) => CheckOutcome::Detected {
                handle: handle.to_string(),
                unresolved: report.unresolved(),
                contests: report.contests,
            },
            Err(e) => {
                tracing::error!("check of {} failed cause: {:?}", handle, e);
                CheckOutcome::Error {
                    message: String::from(GENERIC_ERROR_MESSAGE),
                }
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CheckOutcome::Error { .. })
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckOutcome::Clean { handle } => write!(f, "No cheating detected for {}", handle),
            CheckOutcome::Detected {
                contests,
                unresolved,
                ..
            } => write!(
                f,
                "Cheating Detected In Contests : {}",
                contests
                    .iter()
                    .map(|contest| contest.name.clone())
                    .chain(unresolved.iter().map(|id| format!("Contest {}", id)))
                    .join(", ")
            ),
            CheckOutcome::Error { message } => write!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codeforces::client::CodeforcesApiError;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn report() -> DetectionReport {
        DetectionReport {
            flagged: BTreeSet::from([1790, 1791]),
            contests: vec![
                FlaggedContest {
                    id: 1790,
                    name: String::from("Codeforces Round #847 (Div. 3)"),
                    start_at: None,
                },
                FlaggedContest {
                    id: 1791,
                    name: String::from("Codeforces Round #848 (Div. 2)"),
                    start_at: None,
                },
            ],
        }
    }

    #[test]
    fn clean_outcome() {
        let outcome = CheckOutcome::from_result("alice", Ok(DetectionReport::default()));

        assert_eq!(
            outcome,
            CheckOutcome::Clean {
                handle: String::from("alice")
            }
        );
        assert_eq!(outcome.to_string(), "No cheating detected for alice");
    }

    #[test]
    fn detected_outcome() {
        let outcome = CheckOutcome::from_result("alice", Ok(report()));

        assert_eq!(
            outcome.to_string(),
            "Cheating Detected In Contests : Codeforces Round #847 (Div. 3), Codeforces Round #848 (Div. 2)"
        );
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "status": "detected",
                "handle": "alice",
                "contests": [
                    {"id": 1790, "name": "Codeforces Round #847 (Div. 3)"},
                    {"id": 1791, "name": "Codeforces Round #848 (Div. 2)"}
                ]
            })
        );
    }

    #[test]
    fn flagged_but_unresolved_is_still_detected() {
        let report = DetectionReport {
            flagged: BTreeSet::from([100500]),
            contests: vec![],
        };

        let outcome = CheckOutcome::from_result("alice", Ok(report));

        assert_eq!(
            outcome,
            CheckOutcome::Detected {
                handle: String::from("alice"),
                contests: vec![],
                unresolved: vec![100500],
            }
        );
        assert_eq!(
            outcome.to_string(),
            "Cheating Detected In Contests : Contest 100500"
        );
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "status": "detected",
                "handle": "alice",
                "contests": [],
                "unresolved": [100500]
            })
        );
    }

    #[test]
    fn error_outcome_hides_cause() {
        let error = DetectorError::NetworkError(CodeforcesApiError::FailedStatusError(
            String::from("handle: User with handle alice not found"),
        ));

        let outcome = CheckOutcome::from_result("alice", Err(error));

        assert!(outcome.is_error());
        assert_eq!(outcome.to_string(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "error", "message": GENERIC_ERROR_MESSAGE})
        );
    }
}
