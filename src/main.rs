mod arguments;
mod builder;
mod context;
mod description;
mod emit;
mod error;
mod escape;
mod generate;
mod graph;
mod infrastructure;
mod ir;
mod log;
mod parse;
mod resolve;
mod runtime_deps;
mod substitution_writer;
#[cfg(test)]
mod testing;
mod validation;

use arguments::Arguments;
use clap::Parser;
use context::Context;
use error::ApplicationError;
use generate::{Options, generate};
use infrastructure::{OsConsole, OsFileSystem};
use std::{env::set_current_dir, path::Path, process::exit, sync::Arc, time::Duration};
use tokio::time::sleep;

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();
    let context = Arc::new(Context::new(OsConsole::new(), OsFileSystem::new()));

    if let Err(error) = execute(&context, &arguments).await {
        let _ = context
            .console()
            .lock()
            .await
            .write_stderr(
                format!(
                    "{}{}\n",
                    arguments.log_prefix.as_deref().unwrap_or_default(),
                    error
                )
                .as_bytes(),
            )
            .await;

        // Delay for the error message to be written completely hopefully.
        sleep(Duration::from_millis(1)).await;

        exit(1)
    }
}

async fn execute(context: &Arc<Context>, arguments: &Arguments) -> Result<(), ApplicationError> {
    if let Some(directory) = &arguments.directory {
        set_current_dir(directory)?;
    }

    generate(
        context,
        Path::new(&arguments.description),
        Options {
            check: arguments.check,
            debug: arguments.debug,
            job_limit: arguments.job_limit,
            profile: arguments.profile,
            runtime_deps_list_file: arguments.runtime_deps_list_file.as_ref().map(Into::into),
        },
    )
    .await
}
