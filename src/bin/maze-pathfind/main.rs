mod refimpl;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{info, warn};
use movingai::{Coords2D, Map2D as _, MovingAiMap};

use stig::{a_star, to_dot, AdjacencyList, Node, NodeMap, Weight};

#[derive(Debug, Parser)]
#[command(author, version, about = "Solve Moving AI maze scenarios with A*")]
struct Cli {
    /// The path to a .scen file from Moving AI, or a directory of .scen files
    scenario: PathBuf,
    /// Maps directory
    #[arg(long)]
    maps: PathBuf,
    /// Write the graph built from the map in graphviz dot format
    #[arg(long)]
    output_graph: Option<PathBuf>,
    /// Write the map with the first solved path overlaid
    #[arg(long)]
    output_map: Option<PathBuf>,
}

/// The maze as the library sees it: one node per tile, unit-weight
/// bidirectional edges between mutually traversable 4-neighbors.
struct MazeGraph {
    graph: AdjacencyList,
    coord2node: HashMap<Coords2D, Node>,
    node2coord: NodeMap<Coords2D>,
}

fn build_graph(map: &MovingAiMap) -> MazeGraph {
    let size = map.width() * map.height();
    let mut graph = AdjacencyList::with_capacity(size);
    let mut coord2node = HashMap::<Coords2D, Node>::with_capacity(size);
    let mut node2coord = NodeMap::<Coords2D>::with_capacity(size);

    for y in 0..map.height() {
        for x in 0..map.width() {
            let n = graph.add_node();
            coord2node.insert((x, y), n);
            node2coord.insert(n, (x, y));
        }
    }

    for coord in map.coords() {
        let n = coord2node[&coord];
        // Right and down only, the bidirectional edge covers the other half.
        for other in [(coord.0 + 1, coord.1), (coord.0, coord.1 + 1)] {
            if other.0 >= map.width() || other.1 >= map.height() {
                continue;
            }
            if map.is_traversable_from(coord, other) && map.is_traversable_from(other, coord) {
                graph.add_bidirectional_edge(n, coord2node[&other], 1.0);
            }
        }
    }

    MazeGraph {
        graph,
        coord2node,
        node2coord,
    }
}

struct ManhattanEstimate<'a> {
    node2coord: &'a NodeMap<Coords2D>,
    goal_pos: Coords2D,
}

impl stig::Heuristic for ManhattanEstimate<'_> {
    fn cost(&self, node: &Node) -> Weight {
        let (x, y) = self.node2coord[*node];
        (x.abs_diff(self.goal_pos.0) + y.abs_diff(self.goal_pos.1)) as Weight
    }
}

fn render_map_with_path(mg: &MazeGraph, width: usize, height: usize, path: &[Coords2D]) -> String {
    let mut data = vec!['T'; width * height];
    // Open tiles are the ones the graph can reach.
    for n in mg.graph.nodes() {
        for e in mg.graph.edges(n) {
            let (x, y) = mg.node2coord[e.node];
            data[x + width * y] = '.';
        }
    }
    for &(x, y) in path {
        data[x + width * y] = '/';
    }

    let mut out = String::with_capacity(data.len() + height);
    for y in 0..height {
        for x in 0..width {
            out.push(data[x + width * y]);
        }
        out.push('\n');
    }
    out
}

fn run_for_scenario_file(
    scenario_file: &Path,
    maps: &Path,
    output_graph: &Option<PathBuf>,
    output_map: &Option<PathBuf>,
) -> Result<usize> {
    let scenarios = movingai::parser::parse_scen_file(scenario_file)
        .with_context(|| format!("Failed to parse {}", scenario_file.display()))?;
    ensure!(!scenarios.is_empty(), "No scenarios in file");

    let first_map = scenarios[0].map_file.clone();
    ensure!(
        scenarios.iter().all(|s| s.map_file == first_map),
        "All scenarios must use the same map, expected {first_map}"
    );

    let map_path = maps.join(&first_map);
    let map = movingai::parser::parse_map_file(&map_path)
        .with_context(|| format!("Failed to parse {}", map_path.display()))?;

    let mg = build_graph(&map);
    info!(
        "{}: {} tiles, {} scenarios",
        first_map,
        mg.graph.len(),
        scenarios.len()
    );

    if let Some(o) = output_graph {
        std::fs::write(o, to_dot(&mg.graph))
            .with_context(|| format!("Failed to write {}", o.display()))?;
    }

    let mut mismatches = 0;
    let mut first_path_written = false;
    let pg = indicatif::ProgressBar::new(scenarios.len() as u64);
    for scenario in &scenarios {
        pg.inc(1);
        let start = mg.coord2node[&scenario.start_pos];
        let goal = mg.coord2node[&scenario.goal_pos];
        let heuristic = ManhattanEstimate {
            node2coord: &mg.node2coord,
            goal_pos: scenario.goal_pos,
        };

        let result = a_star(&mg.graph, start, goal, heuristic);
        let reference = refimpl::shortest_path(&map, scenario.start_pos, scenario.goal_pos);

        match (&result, &reference) {
            (None, None) => {}
            (Some((cost, path)), Some(ref_path)) => {
                let expected = (ref_path.len() - 1) as Weight;
                if (cost - expected).abs() > 1e-3 {
                    mismatches += 1;
                    pg.println(format!(
                        "Shortest path mismatch. Start: {:?}, Goal: {:?}. Reference length {}, got {}",
                        scenario.start_pos, scenario.goal_pos, expected, cost
                    ));
                }

                if let (Some(o), false) = (output_map, first_path_written) {
                    let coords: Vec<Coords2D> =
                        path.iter().map(|n| mg.node2coord[*n]).collect();
                    let rendered = render_map_with_path(&mg, map.width(), map.height(), &coords);
                    std::fs::write(o, rendered)
                        .with_context(|| format!("Failed to write {}", o.display()))?;
                    first_path_written = true;
                }
            }
            _ => {
                mismatches += 1;
                pg.println(format!(
                    "Reachability disagreement. Start: {:?}, Goal: {:?}. Search: {}, reference: {}",
                    scenario.start_pos,
                    scenario.goal_pos,
                    if result.is_some() { "path" } else { "no path" },
                    if reference.is_some() { "path" } else { "no path" },
                ));
            }
        }
    }
    pg.finish_and_clear();

    Ok(mismatches)
}

fn run(cli: Cli) -> Result<()> {
    let started = std::time::Instant::now();
    let mut mismatches = 0;

    if cli.scenario.is_dir() {
        let itr = std::fs::read_dir(&cli.scenario)
            .with_context(|| format!("Failed to read {}", cli.scenario.display()))?;
        for entry in itr {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "scen") {
                println!("Running scenarios in {}", path.display());
                mismatches +=
                    run_for_scenario_file(&path, &cli.maps, &cli.output_graph, &cli.output_map)?;
            }
        }
    } else {
        mismatches += run_for_scenario_file(
            &cli.scenario,
            &cli.maps,
            &cli.output_graph,
            &cli.output_map,
        )?;
    }

    if mismatches > 0 {
        warn!("{mismatches} scenarios disagreed with the reference");
    }
    println!("Took {} s to run", started.elapsed().as_secs_f32());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(cli)
}
