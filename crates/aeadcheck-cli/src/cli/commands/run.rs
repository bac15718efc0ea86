use tokio::time::Duration;

use aeadcheck_core::engine::{RunPolicy, Runner};
use aeadcheck_core::errors::RunError;
use aeadcheck_core::report::summary::{write_summary, Summary};
use aeadcheck_core::report::{console, json};

use super::super::args::RunArgs;
use super::helpers::{load_run_config, resolve_provider, resolve_store};
use crate::exit_codes::{CONFIG_ERROR, SUCCESS, VECTOR_FAILURE};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let loaded = (|| -> anyhow::Result<_> {
        let cfg = load_run_config(args.config.as_deref())?;
        let store = resolve_store(&cfg, args.vectors.as_ref())?;
        let provider = resolve_provider(&args.provider)?;
        Ok((cfg, store, provider))
    })();

    let (cfg, store, provider) = match loaded {
        Ok(parts) => parts,
        Err(e) => {
            let run_error = RunError::from_anyhow(&e);
            eprintln!("config error: {}", run_error);
            if let Some(out) = &args.summary {
                let summary = Summary::failure(
                    CONFIG_ERROR,
                    run_error.reason_code(),
                    &run_error.to_string(),
                    "Run: aeadcheck validate",
                    VERSION,
                    &args.provider,
                );
                write_summary(&summary, out)?;
            }
            return Ok(CONFIG_ERROR);
        }
    };

    let timeout_seconds = args
        .timeout_seconds
        .or(cfg.settings.timeout_seconds)
        .unwrap_or(30);
    let runner = Runner::with_policy(
        provider.clone(),
        RunPolicy {
            call_timeout: Duration::from_secs(timeout_seconds),
        },
    );

    let artifacts = runner.run_suite(&cfg, &store).await?;
    console::print_summary(&artifacts.results);

    if let Some(out) = &args.json {
        json::write_json(&artifacts, out)?;
    }

    let counts = artifacts.counts;
    let passed = if args.strict {
        counts.all_passed() && counts.skipped == 0
    } else {
        counts.all_passed()
    };

    if let Some(out) = &args.summary {
        let summary = if passed {
            Summary::success(VERSION, provider.provider_name()).with_results(&counts)
        } else {
            Summary::failure(
                VECTOR_FAILURE,
                "E_VECTOR_FAILURE",
                &format!(
                    "{} failed, {} errored, {} skipped of {} vectors",
                    counts.failed, counts.errored, counts.skipped, counts.total
                ),
                "Inspect the failing rows in the JSON report",
                VERSION,
                provider.provider_name(),
            )
            .with_results(&counts)
        };
        write_summary(&summary, out)?;
    }

    Ok(if passed { SUCCESS } else { VECTOR_FAILURE })
}
