use super::args::{Cli, Command};
use crate::exit_codes::SUCCESS;

pub(crate) mod helpers;
pub(crate) mod list;
pub(crate) mod run;
pub(crate) mod validate;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args).await,
        Command::List(args) => list::run(args),
        Command::Validate(args) => validate::run(args),
        Command::Version => {
            println!("aeadcheck {}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
