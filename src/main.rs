use std::fmt::Display;
use std::io;

use clap::Parser;
use fastrand::Rng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use RadixQueueMini::core::demo::{random_int_list, random_string_list};
use RadixQueueMini::core::log::{SortLog, write_ndjson};
use RadixQueueMini::core::radix::{
    alphabetical_radix_sort, alphabetical_radix_sort_traced, int_radix_sort, int_radix_sort_traced,
};
use RadixQueueMini::core::{ArrayQueue, LinkedListQueue, ManualLinkedQueue, Queue};

mod cli;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    // logs go to stderr so stdout only carries the demo output
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };
    info!(seed = ?cli.seed, command = ?cli.command, "starting demo");

    match cli.command.unwrap_or(Command::Queues) {
        Command::Queues => {
            let letters: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
            show_queue("ArrayQueue", ArrayQueue::from(letters.clone()))?;
            show_queue("LinkedListQueue", LinkedListQueue::from(letters.clone()))?;
            show_queue("ManualLinkedQueue", ManualLinkedQueue::from(letters))?;
        }
        Command::Ints { count, max } => {
            let mut nums = random_int_list(&mut rng, count, max);
            print_column("Before Sorted", &nums);
            let log = if cli.passes {
                Some(int_radix_sort_traced(&mut nums))
            } else {
                int_radix_sort(&mut nums);
                None
            };
            print_column("Sorted", &nums);
            print_passes(log)?;
        }
        Command::Words { count, max_len } => {
            let mut words = random_string_list(&mut rng, count, max_len);
            print_column("Before Sorted", &words);
            let log = if cli.passes {
                Some(alphabetical_radix_sort_traced(&mut words))
            } else {
                alphabetical_radix_sort(&mut words);
                None
            };
            print_column("Sorted", &words);
            print_passes(log)?;
        }
    }
    Ok(())
}

/// Print a queue, peek at it, then show that a clone mutates independently
fn show_queue<Q>(name: &str, mut queue: Q) -> anyhow::Result<()>
where
    Q: Queue<String> + Clone + Display + Serialize,
{
    println!("{name}: {queue} (size {})", queue.size());
    println!("  examine -> {}", queue.examine()?);

    let mut copy = queue.clone();
    copy.enqueue("E".to_string());
    let removed = queue.dequeue()?;
    println!("  dequeue -> {removed}; original now {queue}");
    println!("  clone after enqueue(E) -> {copy}");

    println!("  front-to-back JSON -> {}", serde_json::to_string(&queue)?);
    Ok(())
}

fn print_column<T: Display>(title: &str, items: &[T]) {
    println!("{title}");
    for item in items {
        println!("{item}");
    }
}

fn print_passes(log: Option<SortLog>) -> io::Result<()> {
    match log {
        Some(log) => write_ndjson(&log, io::stdout().lock()),
        None => Ok(()),
    }
}
