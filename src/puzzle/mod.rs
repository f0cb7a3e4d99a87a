use enum_map::{Enum, EnumMap};
use itertools::Itertools;
use rand::Rng;

use crate::util::enum_iter;

pub mod face;

pub use face::{adjacent_strips, Color, Face, ParseTurnError, Turn, CCW_CYCLE, CW_CYCLE};

/// Turn count used when no explicit scramble length is given.
pub const DEFAULT_SCRAMBLE_TURNS: usize = 20;

/// The facelet state of a 3×3×3 cube, plus the history of every recorded
/// turn since the last solve. Each face holds 9 colors in row-major order
/// (0,1,2 the top row left to right, as viewed facing that face).
///
/// Turns are pure permutations of the 54 facelets; nothing is ever
/// recolored, so the color multiset is conserved. No attempt is made to
/// check that a state is reachable on a physically assembled cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    faces: EnumMap<Face, [Color; 9]>,
    history: Vec<Turn>,
}

impl Cube {
    pub fn make_solved() -> Self {
        Cube {
            faces: EnumMap::from_fn(|face: Face| [face.home_color(); 9]),
            history: Vec::new(),
        }
    }

    /// The 9 colors currently on `face`. Treat as a snapshot: the slice
    /// is stale after the next turn.
    pub fn grid(&self, face: Face) -> &[Color; 9] {
        &self.faces[face]
    }

    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|(face, grid)| grid.iter().all(|&c| c == face.home_color()))
    }

    /// Every recorded turn since the last solve, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Canonical serialization: faces in U R F D L B order, 9 letters
    /// each in index order. Pure; two calls without a mutation in
    /// between yield identical strings.
    pub fn stringify(&self) -> String {
        enum_iter::<Face>()
            .map(|face| self.faces[face].iter().join(""))
            .join("")
    }

    /// Permutes the 9 facelets of `face` in place. Purely local; no
    /// other face is touched.
    fn rotate_face(&mut self, face: Face, clockwise: bool) {
        let cycle = if clockwise { CW_CYCLE } else { CCW_CYCLE };
        let old = self.faces[face];
        for (i, &src) in cycle.iter().enumerate() {
            self.faces[face][i] = old[src];
        }
    }

    /// Cycles the four 3-facelet strips bordering `face` one position
    /// around it. All strips are captured before any write, so the four
    /// assignments are an atomic snapshot-then-apply.
    fn cycle_edges(&mut self, face: Face, clockwise: bool) {
        let strips = adjacent_strips(face);
        let held: Vec<[Color; 3]> = strips
            .iter()
            .map(|&(adj, indices)| indices.map(|i| self.faces[adj][i]))
            .collect();
        for (k, &(adj, indices)) in strips.iter().enumerate() {
            let src = if clockwise { (k + 3) % 4 } else { (k + 1) % 4 };
            for (j, &i) in indices.iter().enumerate() {
                self.faces[adj][i] = held[src][j];
            }
        }
    }

    /// Applies `turn` to the facelets without recording it. Used by the
    /// replay controller so that undo steps never re-enter the history.
    pub(crate) fn apply(&mut self, turn: Turn) {
        self.rotate_face(turn.face, turn.clockwise);
        self.cycle_edges(turn.face, turn.clockwise);
    }

    /// The single recorded mutation entry point: appends `turn` to the
    /// history, then applies it.
    pub fn rotate(&mut self, turn: Turn) {
        self.history.push(turn);
        self.apply(turn);
    }

    /// Pops the most recent recorded turn and applies its inverse,
    /// returning the inverted turn that was performed. The history
    /// always describes the live state, so stopping an undo sequence
    /// partway leaves a consistent (shorter) history.
    pub fn undo_last(&mut self) -> Option<Turn> {
        let undone = self.history.pop()?.inverse();
        self.apply(undone);
        Some(undone)
    }

    /// `count` random recorded turns: uniform face, 50/50 direction.
    pub fn scramble_with<R: Rng>(&mut self, rng: &mut R, count: usize) {
        for _ in 0..count {
            let face = Face::from_usize(rng.gen_range(0..Face::LENGTH));
            self.rotate(Turn::new(face, rng.gen_bool(0.5)));
        }
    }

    pub fn scramble(&mut self) {
        self.scramble_with(&mut rand::thread_rng(), DEFAULT_SCRAMBLE_TURNS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SOLVED: &str = "wwwwwwwwwrrrrrrrrrgggggggggyyyyyyyyyooooooooobbbbbbbbb";

    fn scrambled(seed: u64) -> Cube {
        let mut cube = Cube::make_solved();
        cube.scramble_with(&mut StdRng::seed_from_u64(seed), DEFAULT_SCRAMBLE_TURNS);
        cube
    }

    #[test]
    fn solved_serialization() {
        let cube = Cube::make_solved();
        assert!(cube.is_solved());
        assert_eq!(cube.stringify(), SOLVED);
    }

    #[test]
    fn serialization_is_stable() {
        let cube = scrambled(11);
        assert_eq!(cube.stringify(), cube.stringify());
    }

    /// The worked example: one clockwise F turn from solved.
    #[test]
    fn front_turn_from_solved() {
        let mut cube = Cube::make_solved();
        cube.rotate(Turn::new(Face::F, true));
        let expected = concat!(
            "wwwwwwooo", // U: bottom row takes L's [8,5,2]
            "wrrwrrwrr", // R: left column takes U's [6,7,8]
            "ggggggggg", // F: uniform, so its own rotation is invisible
            "rrryyyyyy", // D: [2,1,0] takes R's [0,3,6]
            "ooyooyooy", // L: [8,5,2] takes D's [2,1,0]
            "bbbbbbbbb", // B: untouched
        );
        assert_eq!(cube.stringify(), expected);
    }

    #[test]
    fn opposite_turns_cancel() {
        for face in enum_iter::<Face>() {
            for first in [true, false] {
                let mut cube = scrambled(3);
                let before = cube.stringify();
                cube.rotate(Turn::new(face, first));
                cube.rotate(Turn::new(face, !first));
                assert_eq!(cube.stringify(), before, "face {:?}", face);
            }
        }
    }

    #[test]
    fn four_turns_are_identity() {
        for face in enum_iter::<Face>() {
            for clockwise in [true, false] {
                let mut cube = scrambled(5);
                let before = cube.stringify();
                for _ in 0..4 {
                    cube.rotate(Turn::new(face, clockwise));
                }
                assert_eq!(cube.stringify(), before, "face {:?}", face);
            }
        }
    }

    #[test]
    fn colors_are_conserved() {
        let cube = scrambled(17);
        let state = cube.stringify();
        assert_eq!(state.len(), 54);
        for letter in ['w', 'r', 'g', 'y', 'o', 'b'] {
            assert_eq!(
                state.chars().filter(|&c| c == letter).count(),
                9,
                "letter {:?}",
                letter
            );
        }
    }

    /// A turn of one face may only move its own 9 facelets and the four
    /// bordering strips; every other position is untouched.
    #[test]
    fn turns_are_local() {
        for face in enum_iter::<Face>() {
            for clockwise in [true, false] {
                let before = scrambled(23);
                let mut cube = before.clone();
                cube.rotate(Turn::new(face, clockwise));
                let strips = adjacent_strips(face);
                for other in enum_iter::<Face>() {
                    if other == face {
                        continue;
                    }
                    let moved = strips
                        .iter()
                        .find(|&&(adj, _)| adj == other)
                        .map(|&(_, indices)| indices);
                    for i in 0..9 {
                        if moved.is_some_and(|indices| indices.contains(&i)) {
                            continue;
                        }
                        assert_eq!(
                            cube.grid(other)[i],
                            before.grid(other)[i],
                            "turn of {:?} moved {:?}[{}]",
                            face,
                            other,
                            i
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn rotate_records_history() {
        let mut cube = Cube::make_solved();
        cube.rotate(Turn::new(Face::R, true));
        cube.rotate(Turn::new(Face::U, false));
        assert_eq!(
            cube.history(),
            &[Turn::new(Face::R, true), Turn::new(Face::U, false)]
        );
    }

    #[test]
    fn undo_last_pops_and_inverts() {
        let mut cube = Cube::make_solved();
        cube.rotate(Turn::new(Face::R, true));
        let after_first = cube.stringify();
        cube.rotate(Turn::new(Face::U, false));

        assert_eq!(cube.undo_last(), Some(Turn::new(Face::U, true)));
        assert_eq!(cube.stringify(), after_first);
        assert_eq!(cube.history(), &[Turn::new(Face::R, true)]);

        assert_eq!(cube.undo_last(), Some(Turn::new(Face::R, false)));
        assert!(cube.is_solved());
        assert!(cube.undo_last().is_none());
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let a = scrambled(42);
        let b = scrambled(42);
        assert_eq!(a.stringify(), b.stringify());
        assert_eq!(a.history(), b.history());
        assert_eq!(a.history().len(), DEFAULT_SCRAMBLE_TURNS);
    }
}
