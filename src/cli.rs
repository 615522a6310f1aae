use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "radix-queue-demo", about = "Play with the queue containers and radix sorts", version)]
pub struct Cli {
    /// Seed for the random data; omit for a fresh run each time
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Also print every radix pass as NDJSON
    #[arg(long, global = true)]
    pub passes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build each queue variant from A, B, C, D and poke at it
    Queues,
    /// Sort a list of random integers
    Ints {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 200)]
        max: u64,
    },
    /// Sort a list of random words
    Words {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long = "max-len", default_value_t = 10)]
        max_len: usize,
    },
}
