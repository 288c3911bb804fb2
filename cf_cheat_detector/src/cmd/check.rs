use crate::{cmd::create_detector, modules::models::request::CheckParameter};
use anyhow::{Context, Result};
use cf_cheat_detector_libs::CheckOutcome;
use clap::Args;
use validator::Validate;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Codeforces handle to check
    handle: String,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: CheckArgs) -> Result<()> {
    let params = CheckParameter {
        handle: Some(args.handle.trim().to_string()),
    };
    params.validate().with_context(|| {
        let message = format!("invalid handle `{}`", args.handle);
        tracing::error!(message);
        message
    })?;
    let handle = args.handle.trim();

    let detector = create_detector()?;
    let result = detector.inspect(handle).await;
    let outcome = CheckOutcome::from_result(handle, result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if let CheckOutcome::Detected {
        contests,
        unresolved,
        ..
    } = &outcome
    {
        println!("Cheating Detected In Contests :");
        for contest in contests.iter() {
            match contest.start_at {
                Some(start_at) => println!(
                    "  {} {} ({})",
                    contest.id,
                    contest.name,
                    start_at.format("%Y-%m-%d %H:%M UTC")
                ),
                None => println!("  {} {}", contest.id, contest.name),
            }
        }
        for id in unresolved.iter() {
            println!("  {} (not in the contest list)", id);
        }
    } else {
        println!("{}", outcome);
    }

    if outcome.is_error() {
        anyhow::bail!("check of {} failed", handle);
    }

    Ok(())
}
