use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engines::genetics::{CoreSymbol, Symbol};

use super::lattice::{LatticePos, Segment};

/// Parameters of the spatial interpretation of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthSettings {
    /// Lattice scale factor; one growth step spans this many lattice units.
    pub collision_precision: u32,
    /// Radians added or subtracted per rotation symbol.
    pub rotation_angle: f64,
    /// Terminate a branch right after any seed mark is processed.
    pub seed_skips: bool,
    /// Reject moves that lower the vertical coordinate.
    pub reject_downward: bool,
}

impl Default for GrowthSettings {
    fn default() -> Self {
        Self {
            collision_precision: 1000,
            rotation_angle: std::f64::consts::FRAC_PI_6,
            seed_skips: false,
            reject_downward: false,
        }
    }
}

/// Full turtle state; branch symbols push and pop this wholesale.
#[derive(Debug, Clone, Copy, Default)]
struct TurtleState {
    pos: LatticePos,
    ax: f64,
    ay: f64,
}

/// Why the current branch stopped being interpreted. All reasons share the
/// same cursor jump to the matching branch close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    Collision,
    Downward,
    SeedTerminated,
}

/// Geometry produced by interpreting one body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowthResult {
    pub segments: Vec<Segment>,
    pub seeds: Vec<LatticePos>,
}

/// Interprets a body as turtle instructions over the integer lattice.
///
/// The occupancy map tracks every lattice point ever visited, each flagged
/// as an unconsumed seed or not. A growth move whose target is already
/// occupied terminates the innermost branch; the seed mark flags the
/// current position without moving. Fitness is the number of flags that
/// survive the whole pass.
pub fn grow(body: &[Symbol], settings: &GrowthSettings) -> GrowthResult {
    let mut state = TurtleState::default();
    let mut stack: Vec<TurtleState> = Vec::new();
    let mut seed_at: HashMap<LatticePos, bool> = HashMap::new();
    // The origin counts as occupied from the start.
    seed_at.insert(state.pos, false);
    let mut segments = Vec::new();

    let mut cursor = 0;
    while cursor < body.len() {
        let mut skip = None;
        match body[cursor] {
            Symbol::Core(CoreSymbol::BranchOpen) => stack.push(state),
            Symbol::Core(CoreSymbol::BranchClose) => {
                if let Some(prev) = stack.pop() {
                    state = prev;
                }
            }
            Symbol::Core(CoreSymbol::RotXPos) => state.ax += settings.rotation_angle,
            Symbol::Core(CoreSymbol::RotXNeg) => state.ax -= settings.rotation_angle,
            Symbol::Core(CoreSymbol::RotYPos) => state.ay += settings.rotation_angle,
            Symbol::Core(CoreSymbol::RotYNeg) => state.ay -= settings.rotation_angle,
            Symbol::Core(CoreSymbol::Seed) => {
                seed_at.insert(state.pos, true);
                if settings.seed_skips {
                    skip = Some(Skip::SeedTerminated);
                }
            }
            // Growth mark, or a gene symbol left unexpanded by development.
            _ => {
                let target = advance(state.pos, state.ax, state.ay, settings.collision_precision);
                if seed_at.contains_key(&target) {
                    skip = Some(Skip::Collision);
                } else if settings.reject_downward && target.z < state.pos.z {
                    skip = Some(Skip::Downward);
                } else {
                    // Growth passes through the old position, so it can no
                    // longer be a terminal seed.
                    if let Some(flag) = seed_at.get_mut(&state.pos) {
                        *flag = false;
                    }
                    segments.push(Segment {
                        from: state.pos,
                        to: target,
                    });
                    state.pos = target;
                    seed_at.insert(target, false);
                }
            }
        }
        cursor += match skip {
            // Jump onto the matching branch close so the pop restores the
            // pre-branch state on the next iteration.
            Some(_) => end_of_branch(&body[cursor..]).max(1),
            None => 1,
        };
    }

    let mut seeds: Vec<LatticePos> = seed_at
        .into_iter()
        .filter(|(_, is_seed)| *is_seed)
        .map(|(pos, _)| pos)
        .collect();
    seeds.sort();

    GrowthResult { segments, seeds }
}

fn advance(pos: LatticePos, ax: f64, ay: f64, precision: u32) -> LatticePos {
    let p = f64::from(precision);
    LatticePos {
        x: pos.x + (p * ax.sin() * ay.cos()) as i64,
        y: pos.y + (p * ax.cos() * ay.cos()) as i64,
        z: pos.z + (p * ay.sin()) as i64,
    }
}

/// Offset from the current symbol to the close bracket that ends the
/// innermost enclosing branch, or to the end of the body when the cursor is
/// not inside a branch.
fn end_of_branch(rest: &[Symbol]) -> usize {
    let mut nest = 0usize;
    for (offset, symbol) in rest.iter().enumerate() {
        match symbol {
            Symbol::Core(CoreSymbol::BranchClose) => {
                if nest == 0 {
                    return offset;
                }
                nest -= 1;
            }
            Symbol::Core(CoreSymbol::BranchOpen) => nest += 1,
            _ => {}
        }
    }
    rest.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(symbol: CoreSymbol) -> Symbol {
        Symbol::Core(symbol)
    }

    #[test]
    fn test_end_of_branch_flat() {
        let body = vec![
            core(CoreSymbol::Growth),
            core(CoreSymbol::Growth),
            core(CoreSymbol::BranchClose),
        ];
        assert_eq!(end_of_branch(&body), 2);
        assert_eq!(end_of_branch(&body[1..]), 1);
    }

    #[test]
    fn test_end_of_branch_skips_nested() {
        let body = vec![
            core(CoreSymbol::Growth),
            core(CoreSymbol::BranchOpen),
            core(CoreSymbol::Growth),
            core(CoreSymbol::BranchClose),
            core(CoreSymbol::Growth),
            core(CoreSymbol::BranchClose),
        ];
        assert_eq!(end_of_branch(&body), 5);
    }

    #[test]
    fn test_end_of_branch_without_close_runs_to_end() {
        let body = vec![core(CoreSymbol::Growth), core(CoreSymbol::Growth)];
        assert_eq!(end_of_branch(&body), 2);
    }
}
