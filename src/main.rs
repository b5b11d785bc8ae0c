use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use spanning_mazes::{
    frontier::PopPolicy,
    generators,
    maze::{self, Maze},
    units,
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Spanning tree mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--policy=<p>] [--seed=<s>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 20].
    --grid-height=<h>      The grid height in a w*h grid [default: 20].
    --policy=<p>           How the maze passages grow: stack (twisty), queue (radiating) or random [default: stack].
    --seed=<s>             Seed for the random number generator. A random seed is picked and logged if not given.
    --save-edges=<path>    Serialize the maze to a text file instead of stdout: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_policy: String,
    flag_seed: Option<u64>,
    flag_save_edges: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::spanning_mazes::errors::Error, ::spanning_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            PolicyParse(::spanning_mazes::frontier::ParsePopPolicyError);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };
    let policy: PopPolicy = args.flag_policy.parse()?;
    let seed = args.flag_seed.unwrap_or_else(rand::random);
    info!("generating {}x{} maze, policy: {}, seed: {}", width, height, policy, seed);

    let mut rng = generators::seeded_rng(seed);
    let maze = maze::random_maze(units::Width(width), units::Height(height), policy, &mut rng)
        .chain_err(|| format!("Failed to generate a {}x{} maze", width, height))?;

    let graph_data = maze_graph_text(&maze);
    if args.flag_save_edges.is_empty() {
        print!("{}", graph_data);
    } else {
        write_text_to_file(&graph_data, &args.flag_save_edges)
            .chain_err(|| format!("Failed to write maze graph to text file {}", args.flag_save_edges))?;
    }

    Ok(())
}

/// Line 1 is `vertices edges`, then one line per tree link with 1-based row major cell indices.
fn maze_graph_text(maze: &Maze) -> String {

    let mut graph_data = String::new();
    let vertices_count = maze.dimensions().size().0;
    let edges_count = maze.links_count();
    graph_data.push_str(vertices_count.to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(edges_count.to_string().as_ref());
    graph_data.push('\n');

    for edge in maze.edges() {
        let (src, dst) = edge.cells();
        let indices = (maze.dimensions().row_major_index(src),
                       maze.dimensions().row_major_index(dst));
        if let (Some(index_a), Some(index_b)) = indices {
            graph_data.push_str((index_a + 1).to_string().as_ref());
            graph_data.push(' ');
            graph_data.push_str((index_b + 1).to_string().as_ref());
            graph_data.push('\n');
        }
    }

    graph_data
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
