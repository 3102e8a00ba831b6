//! Drives `TerrainState` with a small best-first engine that owns the
//! frontier, accumulates step costs and deduplicates with `same_state`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rambler_search::{Coord, Estimator, RamblersSearch, SearchContext, TerrainMap, TerrainState};

struct Node {
    state: TerrainState,
    g: i32,
    parent: usize,
}

/// Returns the path cost and the visited cells from start to goal.
fn best_first(ctx: &RamblersSearch, start: Coord, use_estimate: bool) -> Option<(i32, Vec<Coord>)> {
    let mut nodes = vec![Node {
        state: ctx.start_state(start).ok()?,
        g: 0,
        parent: usize::MAX,
    }];
    let mut closed: Vec<TerrainState> = Vec::new();
    let mut open = BinaryHeap::new();
    let h = |st: &TerrainState| if use_estimate { st.estimate() } else { 0 };
    open.push(Reverse((h(&nodes[0].state), 0usize)));

    while let Some(Reverse((_, ni))) = open.pop() {
        let state = nodes[ni].state;
        if closed.iter().any(|c| c.same_state(&state)) {
            continue;
        }
        if state.goal_predicate(ctx) {
            let g = nodes[ni].g;
            let mut path = Vec::new();
            let mut ci = ni;
            while ci != usize::MAX {
                path.push(nodes[ci].state.position());
                ci = nodes[ci].parent;
            }
            path.reverse();
            return Some((g, path));
        }
        closed.push(state);

        let g = nodes[ni].g;
        for succ in state.successors(ctx) {
            if closed.iter().any(|c| c.same_state(&succ)) {
                continue;
            }
            let sg = g + succ.local_cost();
            nodes.push(Node {
                state: succ,
                g: sg,
                parent: ni,
            });
            open.push(Reverse((sg + h(&succ), nodes.len() - 1)));
        }
    }
    None
}

fn ridge() -> TerrainMap {
    TerrainMap::from_rows(&[
        [0, 0, 9, 0, 0],
        [0, 1, 9, 1, 0],
        [0, 2, 9, 2, 0],
        [0, 1, 3, 1, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap()
}

#[test]
fn bump_is_walked_around() {
    let map = TerrainMap::from_rows(&[[0, 0, 0], [0, 5, 0], [0, 0, 0]]).unwrap();
    let s = RamblersSearch::new(map, Coord::new(2, 2), "manhattan").unwrap();
    let (cost, path) = best_first(&s, Coord::new(0, 0), true).unwrap();
    assert_eq!(cost, 4);
    assert_eq!(path.len(), 5);
    assert!(!path.contains(&Coord::new(1, 1)));
}

#[test]
fn ridge_is_crossed_at_the_saddle() {
    let s = RamblersSearch::new(ridge(), Coord::new(4, 0), "superAdvanced").unwrap();
    let (cost, path) = best_first(&s, Coord::new(0, 0), true).unwrap();
    // over the top: 4 steps + climb of 9 = 13; around the bottom: 12 flat steps
    assert_eq!(cost, 12);
    assert!(path.iter().all(|&p| s.map().elevation(p) == Some(0)));
}

#[test]
fn every_estimator_finds_the_uninformed_optimum() {
    let starts = [Coord::new(0, 0), Coord::new(1, 2), Coord::new(4, 4)];
    for start in starts {
        let base = RamblersSearch::new(ridge(), Coord::new(3, 1), Estimator::Manhattan).unwrap();
        let (expected, _) = best_first(&base, start, false).unwrap();
        for e in Estimator::ALL {
            let s = RamblersSearch::new(ridge(), Coord::new(3, 1), e).unwrap();
            let (cost, path) = best_first(&s, start, true).unwrap();
            assert_eq!(cost, expected, "{e} from {start}");
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&Coord::new(3, 1)));
        }
    }
}

#[test]
fn start_on_goal() {
    let s = RamblersSearch::new(ridge(), Coord::new(2, 2), "euclidean").unwrap();
    let (cost, path) = best_first(&s, Coord::new(2, 2), true).unwrap();
    assert_eq!(cost, 0);
    assert_eq!(path, vec![Coord::new(2, 2)]);
}

#[test]
fn off_map_start_yields_nothing() {
    let s = RamblersSearch::new(ridge(), Coord::new(2, 2), "euclidean").unwrap();
    assert!(best_first(&s, Coord::new(5, 0), true).is_none());
}
