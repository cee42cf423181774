//! REPL Commands
//!
//! The command table and one handler per command. Handlers print their
//! results directly; recoverable problems come back as errors for the loop
//! to display without ending the session. Network failures are softer
//! still: the handler prints a short notice and the session carries on.

use rand::Rng;
use tracing::warn;

use super::ReplState;
use crate::catalog::AreaPage;
use crate::error::{Error, Result};

/// Exclusive upper bound for catch rolls. A roll must strictly beat the
/// creature's rarity, so anything at or above this score is uncatchable.
const CATCH_ROLL_CEILING: u32 = 350;

// == Command Table ==

/// One entry in the command table, shown by `help`.
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands, in `help` display order.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        description: "List all available commands",
    },
    CommandInfo {
        name: "areas",
        description: "List the next page of areas",
    },
    CommandInfo {
        name: "back",
        description: "List the previous page of areas",
    },
    CommandInfo {
        name: "explore <area>",
        description: "List the creatures sighted in an area",
    },
    CommandInfo {
        name: "catch <creature>",
        description: "Try to catch a creature",
    },
    CommandInfo {
        name: "inspect <creature>",
        description: "Show a caught creature's record",
    },
    CommandInfo {
        name: "caught",
        description: "List every creature you have caught",
    },
    CommandInfo {
        name: "exit",
        description: "Leave the bestiary",
    },
];

// == Dispatch ==

/// Whether the loop keeps running after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

/// Runs one parsed command against the session state.
///
/// # Arguments
/// * `state` - The session state commands read and mutate
/// * `name` - First word of the normalized input line
/// * `args` - Remaining words
pub async fn dispatch(state: &mut ReplState, name: &str, args: &[String]) -> Result<Signal> {
    match name {
        "help" => cmd_help(),
        "exit" => cmd_exit(),
        "areas" => cmd_areas(state).await,
        "back" => cmd_back(state).await,
        "explore" => cmd_explore(state, args).await,
        "catch" => cmd_catch(state, args).await,
        "inspect" => cmd_inspect(state, args),
        "caught" => cmd_caught(state),
        _ => {
            println!("Unknown command: {name} (try \"help\")");
            println!();
            Ok(Signal::Continue)
        }
    }
}

// == Handlers ==

fn cmd_help() -> Result<Signal> {
    println!("Welcome to the bestiary!");
    println!();
    println!("commands:");
    for command in COMMANDS {
        println!("  {:<20} {}", command.name, command.description);
    }
    println!();
    Ok(Signal::Continue)
}

fn cmd_exit() -> Result<Signal> {
    println!("Closing the bestiary. Safe travels!");
    Ok(Signal::Quit)
}

async fn cmd_areas(state: &mut ReplState) -> Result<Signal> {
    let page = match state.client.fetch_area_page(state.pager.next.as_deref()).await {
        Ok(page) => page,
        Err(err) => {
            warn!("area listing failed: {}", err);
            println!("Couldn't list areas right now");
            println!();
            return Ok(Signal::Continue);
        }
    };

    state.pager.update(&page);
    print_area_page(&page);
    Ok(Signal::Continue)
}

async fn cmd_back(state: &mut ReplState) -> Result<Signal> {
    let Some(previous) = state.pager.previous.clone() else {
        return Err(Error::NoPreviousPage);
    };

    let page = match state.client.fetch_area_page(Some(&previous)).await {
        Ok(page) => page,
        Err(err) => {
            warn!("area listing failed: {}", err);
            println!("Couldn't list areas right now");
            println!();
            return Ok(Signal::Continue);
        }
    };

    state.pager.update(&page);
    print_area_page(&page);
    Ok(Signal::Continue)
}

fn print_area_page(page: &AreaPage) {
    for area in &page.results {
        println!("{}", area.name);
    }
    println!();
}

async fn cmd_explore(state: &mut ReplState, args: &[String]) -> Result<Signal> {
    let Some(area) = args.first() else {
        return Err(Error::MissingArgument("explore <area>"));
    };

    let detail = match state.client.fetch_area(area).await {
        Ok(detail) => detail,
        Err(err) => {
            warn!("survey of {} failed: {}", area, err);
            println!("Couldn't explore {area}");
            println!();
            return Ok(Signal::Continue);
        }
    };

    println!("Exploring {}...", detail.name);
    if detail.sightings.is_empty() {
        println!("No creatures have been sighted here");
    } else {
        println!("Creatures sighted:");
        for sighting in &detail.sightings {
            println!(" - {}", sighting.name);
        }
    }
    println!();
    Ok(Signal::Continue)
}

async fn cmd_catch(state: &mut ReplState, args: &[String]) -> Result<Signal> {
    let Some(name) = args.first() else {
        return Err(Error::MissingArgument("catch <creature>"));
    };
    if state.collection.contains(name) {
        return Err(Error::AlreadyCaught(name.clone()));
    }

    let creature = match state.client.fetch_creature(name).await {
        Ok(creature) => creature,
        Err(err) => {
            warn!("lookup of {} failed: {}", name, err);
            println!("Couldn't find a creature called {name}");
            println!();
            return Ok(Signal::Continue);
        }
    };

    println!("Stalking {}...", creature.name);
    let roll = rand::thread_rng().gen_range(0..CATCH_ROLL_CEILING);
    if catch_lands(creature.rarity, roll) {
        state.collection.record(&creature);
        println!("{} was caught!", creature.name);
        println!("Use \"inspect {}\" to study it", creature.name);
    } else {
        println!("{} escaped!", creature.name);
    }
    println!();
    Ok(Signal::Continue)
}

/// Decides a catch attempt: the roll must strictly beat the creature's
/// rarity, and a rarity of zero never lands.
fn catch_lands(rarity: u32, roll: u32) -> bool {
    rarity > 0 && roll > rarity
}

fn cmd_inspect(state: &ReplState, args: &[String]) -> Result<Signal> {
    let Some(name) = args.first() else {
        return Err(Error::MissingArgument("inspect <creature>"));
    };
    let Some(creature) = state.collection.get(name) else {
        return Err(Error::NotCaught(name.clone()));
    };

    println!("Name: {}", creature.name);
    println!("Rarity: {}", creature.rarity);
    println!("Height: {}", creature.height);
    println!("Weight: {}", creature.weight);
    println!("Stats:");
    for (stat, value) in &creature.stats {
        println!("  - {stat}: {value}");
    }
    println!("Kinds:");
    for kind in &creature.kinds {
        println!("  - {kind}");
    }
    println!("Caught at: {}", creature.caught_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    Ok(Signal::Continue)
}

fn cmd_caught(state: &ReplState) -> Result<Signal> {
    if state.collection.is_empty() {
        println!("You haven't caught any creatures yet");
    } else {
        println!("Your collection:");
        for name in state.collection.names() {
            println!("  - {name}");
        }
    }
    println!();
    Ok(Signal::Continue)
}
