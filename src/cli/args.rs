//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Orbit map ancestry tool: orbit counts, common ancestors, and transfer distances
#[derive(Parser, Debug)]
#[command(name = "rsorbit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Total orbit count checksum of a map
    Count {
        /// Map file, one A)B record per line
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Orbit count of a single node
    Depth {
        /// Map file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Node tag
        tag: String,
    },

    /// Edge distance between two nodes via their common ancestor
    Distance {
        /// Map file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// First node tag
        a: String,
        /// Second node tag
        b: String,
    },

    /// Orbital transfers between the orbits of two nodes
    Transfers {
        /// Map file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Starting node tag
        from: String,
        /// Destination node tag
        to: String,
    },

    /// Render the map as a tree
    Tree {
        /// Map file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List nodes nothing orbits around, sorted
    Leaves {
        /// Map file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
