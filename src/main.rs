use itertools::Itertools;
use std::thread;
use std::time::Duration;

use crate::puzzle::{Cube, Face, Turn, DEFAULT_SCRAMBLE_TURNS};
use crate::replay::{Replay, SolveLog};
use crate::util::enum_iter;

pub mod puzzle;
pub mod replay;
pub mod util;

/// Pause between replay steps, matching the animation cadence the
/// on-screen renderer uses.
const STEP_INTERVAL: Duration = Duration::from_millis(800);

fn display(cube: &Cube) {
    for face in enum_iter::<Face>() {
        let grid = cube.grid(face);
        println!("{}:", face);
        for row in grid.chunks(3) {
            println!("  {}", row.iter().join(" "));
        }
    }
    println!("flat: {}", cube.stringify());
}

fn main() -> eyre::Result<()> {
    let mut cube = Cube::make_solved();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        cube.scramble();
        println!("scrambled with {} random turns", DEFAULT_SCRAMBLE_TURNS);
    } else {
        // validate every token before touching the cube
        let turns: Vec<Turn> = args
            .iter()
            .map(|arg| arg.parse())
            .collect::<Result<_, _>>()?;
        for turn in turns {
            cube.rotate(turn);
        }
        println!("applied {}", cube.history().iter().join(" "));
    }
    display(&cube);

    let mut replay = Replay::new();
    replay.start(&cube)?;
    let mut log = SolveLog::new();
    while let Some(record) = replay.tick(&mut cube) {
        println!("{record}");
        log.steps.push(record);
        if replay.is_playing() {
            thread::sleep(STEP_INTERVAL);
        }
    }
    display(&cube);
    println!("{}", log.to_json()?);

    Ok(())
}
