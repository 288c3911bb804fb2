pub mod api;
pub mod codeforces;
pub mod detector;
pub mod outcome;

pub use codeforces::client::{CodeforcesApi, CodeforcesApiError, StandardCodeforcesClient};
pub use detector::{DetectionReport, Detector, DetectorError};
pub use outcome::CheckOutcome;
