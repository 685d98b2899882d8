//! Handler for the `interactive` command.

use dialoguer::Input;
use tracing::info;

use crate::error::Result;
use crate::port::inbound::lookup::PatentLookup;

use super::{lookup, output};

/// Execute `interactive`: prompt until an empty line.
pub async fn execute(service: &dyn PatentLookup) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::hint("press Enter on an empty line to quit");

    let submitted = session(service, || {
        Ok(Input::<String>::new()
            .with_prompt("Enter a US patent number")
            .allow_empty(true)
            .interact_text()?)
    })
    .await?;

    info!(submitted, "interactive session ended");
    Ok(())
}

/// Run submissions read from `next_input` until it yields an empty line.
///
/// Storage failures are reported per submission and the session goes on.
/// Returns the number of submissions made.
pub async fn session<F>(service: &dyn PatentLookup, mut next_input: F) -> Result<usize>
where
    F: FnMut() -> Result<String>,
{
    let mut submitted = 0;
    loop {
        let input = next_input()?;
        if input.trim().is_empty() {
            return Ok(submitted);
        }
        submitted += 1;

        if let Err(e) = lookup::execute(service, &input).await {
            output::error(&e.to_string());
        }
    }
}
