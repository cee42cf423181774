//! REPL Module
//!
//! The interactive prompt: reads a line, normalizes it, and dispatches the
//! first word as a command against the session state. Runs until `exit`,
//! end of input, or Ctrl-C.

mod commands;

pub use commands::{dispatch, CommandInfo, Signal, COMMANDS};

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use crate::catalog::{AreaPage, CatalogClient};
use crate::collection::Collection;
use crate::error::Result;

const PROMPT: &str = "bestiary > ";

// == Pager ==

/// Pagination cursors for the area listing, updated after every page fetch.
#[derive(Debug, Default)]
pub struct Pager {
    /// URL of the page after the one most recently shown
    pub next: Option<String>,
    /// URL of the page before the one most recently shown
    pub previous: Option<String>,
}

impl Pager {
    /// Replaces both cursors with those of a freshly fetched page.
    ///
    /// Boundary pages clear the matching cursor, so walking past either end
    /// is reported instead of refetching the same page forever.
    pub fn update(&mut self, page: &AreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}

// == Session State ==

/// Everything a command can see or change during one session.
pub struct ReplState {
    pub client: CatalogClient,
    pub pager: Pager,
    pub collection: Collection,
}

impl ReplState {
    /// Creates fresh session state around a catalog client.
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            pager: Pager::default(),
            collection: Collection::new(),
        }
    }
}

// == Input ==

/// Lowercases a raw input line and splits it into whitespace-separated
/// words.
pub fn clean_input(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// == Run ==

/// Runs the prompt loop until `exit`, end of input, or Ctrl-C.
///
/// Command errors are printed and the loop continues; only terminal i/o
/// failures propagate out.
pub async fn run(state: &mut ReplState) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut ctrl_c => {
                println!();
                break;
            }
        };

        // End of input closes the session like `exit` does.
        let Some(line) = line else { break };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        match dispatch(state, name, args).await {
            Ok(Signal::Continue) => {}
            Ok(Signal::Quit) => break,
            Err(err) => {
                println!("{err}");
                println!();
            }
        }
    }

    Ok(())
}
