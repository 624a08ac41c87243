//! CLI commands.

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use corelib::digest::{Blake3, HashFunction, Sha256, Shake128, Xxh3};
use corelib::{rank, ReplicaId};
use placement::{choose, choose_with, LogRedundancy, RedundancyPolicy, Selection};
use tracing::debug;

/// Digest function selection.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HashAlgo {
    Sha256,
    Shake128,
    Blake3,
    Xxh3,
}

/// Digest options shared by the hashing commands.
#[derive(Args, Clone, Debug)]
pub struct HashOpts {
    /// Digest function to weight replicas with
    #[arg(long, value_enum, default_value = "sha256")]
    pub hash: HashAlgo,

    /// Output length in bytes for shake128
    #[arg(long, default_value_t = 20)]
    pub digest_len: usize,
}

impl HashOpts {
    fn build(&self) -> Box<dyn HashFunction> {
        match self.hash {
            HashAlgo::Sha256 => Box::new(Sha256),
            HashAlgo::Shake128 => Box::new(Shake128::new(self.digest_len)),
            HashAlgo::Blake3 => Box::new(Blake3),
            HashAlgo::Xxh3 => Box::new(Xxh3),
        }
    }
}

/// Subcommands for inspecting placement.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the full ranking of a replica set for a content identifier
    Rank {
        /// Content identifier
        content: String,
        /// Replica identifiers (at least one)
        #[arg(required = true)]
        replicas: Vec<String>,
        /// Parse content and replica identifiers as hex byte strings
        #[arg(long)]
        hex: bool,
        #[command(flatten)]
        opts: HashOpts,
    },
    /// Split a replica set into chosen and fallback replicas
    Choose {
        /// Content identifier
        content: String,
        /// Replica identifiers (at least one)
        #[arg(required = true)]
        replicas: Vec<String>,
        /// Redundancy count; defaults to the log policy
        #[arg(short)]
        k: Option<usize>,
        /// Parse content and replica identifiers as hex byte strings
        #[arg(long)]
        hex: bool,
        #[command(flatten)]
        opts: HashOpts,
    },
    /// Print the default redundancy count for a replica-set size
    Redundancy {
        /// Replica-set size
        n: usize,
    },
}

impl Command {
    /// Execute the command, writing results to stdout.
    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            Command::Rank {
                content,
                replicas,
                hex,
                opts,
            } => {
                let content = parse_bytes(&content, hex)?;
                let replicas = parse_replicas(&replicas, hex)?;
                let hash = opts.build();
                debug!(replicas = replicas.len(), hash = hash.name(), "ranking");

                let ranking = rank(&content, &replicas, &*hash)?;
                for (position, replica) in ranking.iter().enumerate() {
                    println!("{:4}  {}", position, render(replica, hex));
                }
                Ok(())
            }
            Command::Choose {
                content,
                replicas,
                k,
                hex,
                opts,
            } => {
                let content = parse_bytes(&content, hex)?;
                let replicas = parse_replicas(&replicas, hex)?;
                let hash = opts.build();
                debug!(
                    replicas = replicas.len(),
                    k = ?k,
                    hash = hash.name(),
                    "choosing"
                );

                let selection = match k {
                    Some(k) => choose(&content, &replicas, k, &*hash)?,
                    None => choose_with(&content, &replicas, &LogRedundancy, &*hash)?,
                };
                print_selection(&selection, hex);
                Ok(())
            }
            Command::Redundancy { n } => {
                // The policy is a function of the set size alone, so the CLI
                // takes a count rather than a full identifier list.
                anyhow::ensure!(n >= 1, "replica-set size must be at least 1");
                println!("{}", LogRedundancy.redundancy(n));
                Ok(())
            }
        }
    }
}

fn parse_bytes(input: &str, hex_mode: bool) -> anyhow::Result<Vec<u8>> {
    if hex_mode {
        hex::decode(input).with_context(|| format!("invalid hex: {input}"))
    } else {
        Ok(input.as_bytes().to_vec())
    }
}

fn parse_replicas(inputs: &[String], hex_mode: bool) -> anyhow::Result<Vec<ReplicaId>> {
    inputs
        .iter()
        .map(|s| parse_bytes(s, hex_mode).map(ReplicaId::from))
        .collect()
}

fn render(replica: &ReplicaId, hex_mode: bool) -> String {
    if hex_mode {
        replica.to_string()
    } else {
        String::from_utf8_lossy(replica.as_bytes()).into_owned()
    }
}

fn print_selection(selection: &Selection, hex_mode: bool) {
    println!("chosen:");
    for replica in &selection.chosen {
        println!("  {}", render(replica, hex_mode));
    }
    println!("remaining:");
    for replica in &selection.remaining {
        println!("  {}", render(replica, hex_mode));
    }
}
