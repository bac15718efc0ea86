use aeadcheck_core::errors::RunError;

use super::super::args::ValidateArgs;
use super::helpers::{load_run_config, resolve_store};
use crate::exit_codes::{CONFIG_ERROR, SUCCESS};

pub(crate) fn run(args: ValidateArgs) -> anyhow::Result<i32> {
    let outcome = (|| -> anyhow::Result<usize> {
        let cfg = load_run_config(args.config.as_deref())?;
        let store = resolve_store(&cfg, args.vectors.as_ref())?;
        Ok(store.len())
    })();

    match outcome {
        Ok(n) => {
            println!("OK: {} vectors", n);
            Ok(SUCCESS)
        }
        Err(e) => {
            let run_error = RunError::from_anyhow(&e);
            eprintln!("invalid: {} [{}]", run_error, run_error.reason_code());
            Ok(CONFIG_ERROR)
        }
    }
}
