//! Command dispatch: thin glue between the CLI surface and the domain.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use generational_arena::Index;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::render::to_tree_string;
use crate::domain::{distance, lowest_common_ancestor, transfers, DomainError, DomainResult};
use crate::domain::{MapBuilder, OrbitMap};

pub fn execute_command(cli: &Cli) -> DomainResult<()> {
    match &cli.command {
        Some(Commands::Count { file }) => _count(file),
        Some(Commands::Depth { file, tag }) => _depth(file, tag),
        Some(Commands::Distance { file, a, b }) => _distance(file, a, b),
        Some(Commands::Transfers { file, from, to }) => _transfers(file, from, to),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Leaves { file }) => _leaves(file),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn load_map(file: &Path) -> DomainResult<OrbitMap> {
    let map = MapBuilder::build_from_path(file)?;
    debug!("loaded {} nodes from {}", map.len(), file.display());
    Ok(map)
}

fn resolve_tag(map: &OrbitMap, tag: &str) -> DomainResult<Index> {
    map.find_tag(tag)
        .ok_or_else(|| DomainError::UnknownTag(tag.to_string()))
}

#[instrument]
fn _count(file: &Path) -> DomainResult<()> {
    let map = load_map(file)?;
    println!("{}", map.total_orbits());
    Ok(())
}

#[instrument]
fn _depth(file: &Path, tag: &str) -> DomainResult<()> {
    let map = load_map(file)?;
    let idx = resolve_tag(&map, tag)?;
    println!("{}", map.orbits(idx));
    Ok(())
}

#[instrument]
fn _distance(file: &Path, a: &str, b: &str) -> DomainResult<()> {
    let map = load_map(file)?;
    let a_idx = resolve_tag(&map, a)?;
    let b_idx = resolve_tag(&map, b)?;
    if let Some(ancestor) = lowest_common_ancestor(&map, a_idx, b_idx) {
        debug!(
            "common ancestor of {} and {}: {}",
            a,
            b,
            map.tag(ancestor).unwrap_or_default()
        );
    }
    println!("{}", distance(&map, a_idx, b_idx)?);
    Ok(())
}

#[instrument]
fn _transfers(file: &Path, from: &str, to: &str) -> DomainResult<()> {
    let map = load_map(file)?;
    let from_idx = resolve_tag(&map, from)?;
    let to_idx = resolve_tag(&map, to)?;
    println!("{}", transfers(&map, from_idx, to_idx)?);
    Ok(())
}

#[instrument]
fn _tree(file: &Path) -> DomainResult<()> {
    let map = load_map(file)?;
    let roots = map.roots();
    if roots.len() > 1 {
        output::warning(&format!("map is a forest with {} roots", roots.len()));
    }
    for root in roots {
        println!("{}", to_tree_string(&map, root));
    }
    Ok(())
}

#[instrument]
fn _leaves(file: &Path) -> DomainResult<()> {
    let map = load_map(file)?;
    for tag in map.leaf_tags().into_iter().sorted() {
        println!("{}", tag);
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> DomainResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
