use crate::modules::{
    models::{
        request::{CheckParameter, ValidatedQuery},
        response::{status_of, ParameterRejection},
    },
    page::render_page,
};
use axum::{extract::Extension, http::StatusCode, response::Html, Json};
use cf_cheat_detector_libs::{CheckOutcome, CodeforcesApi, Detector};
use std::sync::Arc;
use tokio::time::Instant;

async fn run_check<C>(detector: &Detector<C>, handle: &str) -> CheckOutcome
where
    C: CodeforcesApi + Send + Sync,
{
    let start_process = Instant::now();
    let outcome = CheckOutcome::from_result(handle, detector.inspect(handle).await);
    let time = Instant::now().duration_since(start_process).as_millis();

    tracing::info!(
        target: "checklog",
        "elapsed_time={} handle={} outcome={}",
        time, handle, serde_json::to_string(&outcome).unwrap_or(String::from(""))
    );

    outcome
}

pub async fn index<C>(
    params: Result<ValidatedQuery<CheckParameter>, ParameterRejection>,
    Extension(detector): Extension<Arc<Detector<C>>>,
) -> (StatusCode, Html<String>)
where
    C: CodeforcesApi + Send + Sync + 'static,
{
    let handle = match params {
        Ok(ValidatedQuery(CheckParameter {
            handle: Some(handle),
        })) => handle,
        Ok(_) => return (StatusCode::OK, Html(render_page("", None))),
        Err(rejection) => {
            let outcome = CheckOutcome::Error {
                message: String::from("Invalid handle."),
            };
            tracing::debug!("rejected: {}", rejection.message);
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page("", Some(&outcome))),
            );
        }
    };

    let outcome = run_check(&detector, &handle).await;
    (StatusCode::OK, Html(render_page(&handle, Some(&outcome))))
}

pub async fn check<C>(
    ValidatedQuery(params): ValidatedQuery<CheckParameter>,
    Extension(detector): Extension<Arc<Detector<C>>>,
) -> Result<(StatusCode, Json<CheckOutcome>), ParameterRejection>
where
    C: CodeforcesApi + Send + Sync + 'static,
{
    let handle = params
        .handle
        .ok_or(ParameterRejection::new("handle must be specified"))?;

    let outcome = run_check(&detector, &handle).await;
    Ok((status_of(&outcome), Json(outcome)))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
