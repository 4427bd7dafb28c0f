//! Path module - turn-budgeted connectivity search between two tiles
//!
//! Two tiles of the same kind connect if an unobstructed path of axis-aligned
//! segments joins them using at most two right-angle turns. The search runs
//! layered by turn count: turn-0 rays from the source first, then every
//! perpendicular ray off those, then one more layer. The first hit is
//! therefore a path with the fewest turns, and the fixed direction order
//! (horizontal before vertical) makes the result canonical - repeated calls
//! on the same board return the identical path.
//!
//! The padded border corridor is ordinary empty space to this search, which
//! is what allows the classic routes around the outside of the play area.

use arrayvec::ArrayVec;

use tui_linkup_types::{Direction, Pos, Segment, PATH_TURN_BUDGET};

use crate::board::Board;

/// A resolved connection: the full cell sequence from one tile to the other.
/// Endpoints are the (occupied) tiles; every interior cell was empty when the
/// path was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Pos>,
}

/// Waypoint buffer: source plus at most `PATH_TURN_BUDGET` corners
type Waypoints = ArrayVec<Pos, { PATH_TURN_BUDGET + 1 }>;

struct RayState {
    pos: Pos,
    dir: Direction,
    waypoints: Waypoints,
}

impl Path {
    fn from_waypoints(waypoints: &[Pos], destination: Pos) -> Self {
        let mut cells = Vec::new();
        cells.push(waypoints[0]);
        for leg in waypoints
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(std::iter::once((
                waypoints[waypoints.len() - 1],
                destination,
            )))
        {
            let (from, to) = leg;
            let mut cur = from;
            while cur != to {
                if cur.row < to.row {
                    cur.row += 1;
                } else if cur.row > to.row {
                    cur.row -= 1;
                } else if cur.col < to.col {
                    cur.col += 1;
                } else {
                    cur.col -= 1;
                }
                cells.push(cur);
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn source(&self) -> Pos {
        self.cells[0]
    }

    pub fn destination(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }

    /// Number of direction changes along the path
    pub fn turns(&self) -> usize {
        self.cells
            .windows(3)
            .filter(|w| {
                let first = step_of(w[0], w[1]);
                let second = step_of(w[1], w[2]);
                first != second
            })
            .count()
    }

    /// Per-cell rendering tags. Each tag depends only on the previous and
    /// next cell coordinates; endpoints get half-length caps, turns get the
    /// matching corner shape.
    pub fn segments(&self) -> Vec<Segment> {
        let n = self.cells.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| {
                let cur = self.cells[i];
                if i == 0 {
                    half_toward(cur, self.cells[1])
                } else if i == n - 1 {
                    half_toward(cur, self.cells[n - 2])
                } else {
                    through_cell(self.cells[i - 1], cur, self.cells[i + 1])
                }
            })
            .collect()
    }
}

fn step_of(from: Pos, to: Pos) -> (isize, isize) {
    (
        to.row as isize - from.row as isize,
        to.col as isize - from.col as isize,
    )
}

/// End-cap tag: the half of the tile pointing at the neighbor
fn half_toward(cur: Pos, neighbor: Pos) -> Segment {
    if cur.col == neighbor.col {
        if neighbor.row < cur.row {
            Segment::HalfUp
        } else {
            Segment::HalfDown
        }
    } else if neighbor.col < cur.col {
        Segment::HalfLeft
    } else {
        Segment::HalfRight
    }
}

/// Tag for an interior cell given its neighbors: a straight run when they
/// share a row or column, otherwise the corner shape of the elbow.
fn through_cell(prev: Pos, cur: Pos, next: Pos) -> Segment {
    if prev.row == next.row {
        if prev.col < next.col {
            Segment::Right
        } else {
            Segment::Left
        }
    } else if prev.col == next.col {
        if prev.row < next.row {
            Segment::Down
        } else {
            Segment::Up
        }
    } else if prev.row > next.row {
        if prev.col < next.col {
            if prev.row - 1 == cur.row {
                Segment::CornerRightDown
            } else {
                Segment::CornerLeftUp
            }
        } else if prev.row - 1 == cur.row {
            Segment::CornerLeftDown
        } else {
            Segment::CornerRightUp
        }
    } else if prev.col < next.col {
        if prev.row + 1 == cur.row {
            Segment::CornerRightUp
        } else {
            Segment::CornerLeftDown
        }
    } else if prev.row + 1 == cur.row {
        Segment::CornerLeftUp
    } else {
        Segment::CornerRightDown
    }
}

/// Find a connecting path between two same-kind tiles, or `None`.
///
/// `None` covers every miss: different or missing kinds, identical
/// positions, out-of-range coordinates, and "no route within the turn
/// budget". A miss is the expected frequent outcome, not a fault.
pub fn find_path(board: &Board, a: Pos, b: Pos) -> Option<Path> {
    if a == b {
        return None;
    }
    let kind_a = board.kind_at(a).ok().flatten()?;
    let kind_b = board.kind_at(b).ok().flatten()?;
    if kind_a != kind_b {
        return None;
    }
    search(board, a, b)
}

fn search(board: &Board, source: Pos, target: Pos) -> Option<Path> {
    let mut visited = vec![[false; 4]; board.padded_rows() * board.padded_cols()];
    let mut frontier: Vec<RayState> = Vec::new();

    let mut origin = Waypoints::new();
    origin.push(source);
    for dir in Direction::SCAN_ORDER {
        if let Some(path) = cast_ray(board, source, dir, target, &origin, &mut visited, &mut frontier) {
            return Some(path);
        }
    }

    for _ in 0..PATH_TURN_BUDGET {
        let mut next_frontier: Vec<RayState> = Vec::new();
        for state in &frontier {
            for dir in state.dir.perpendicular() {
                let mut waypoints = state.waypoints.clone();
                waypoints.push(state.pos);
                if let Some(path) = cast_ray(
                    board,
                    state.pos,
                    dir,
                    target,
                    &waypoints,
                    &mut visited,
                    &mut next_frontier,
                ) {
                    return Some(path);
                }
            }
        }
        frontier = next_frontier;
    }

    None
}

/// Walk one ray from `from` (exclusive), collecting reachable empty cells as
/// turn candidates and terminating on the target. Occupied cells and the
/// grid edge stop the ray.
fn cast_ray(
    board: &Board,
    from: Pos,
    dir: Direction,
    target: Pos,
    waypoints: &Waypoints,
    visited: &mut [[bool; 4]],
    frontier: &mut Vec<RayState>,
) -> Option<Path> {
    let mut pos = from;
    loop {
        pos = match dir.offset(pos) {
            Some(next) if board.contains(next) => next,
            _ => return None,
        };
        if pos == target {
            return Some(Path::from_waypoints(waypoints, target));
        }
        if board.is_occupied(pos) {
            return None;
        }
        let seen = &mut visited[board.flat(pos)][dir.index()];
        if !*seen {
            *seen = true;
            frontier.push(RayState {
                pos,
                dir,
                waypoints: waypoints.clone(),
            });
        }
    }
}
