use super::super::args::ListArgs;
use super::helpers::{load_run_config, resolve_store};
use crate::exit_codes::SUCCESS;

pub(crate) fn run(args: ListArgs) -> anyhow::Result<i32> {
    let cfg = load_run_config(args.config.as_deref())?;
    let store = resolve_store(&cfg, args.vectors.as_ref())?;

    println!("{:<28} {:<28} {:>8}  description", "id", "algorithm", "selected");
    for v in store.iter() {
        let selected = if cfg.features.supports(v) { "yes" } else { "no" };
        println!(
            "{:<28} {:<28} {:>8}  {}",
            v.id,
            v.algorithm.to_string(),
            selected,
            v.description
        );
    }
    Ok(SUCCESS)
}
