//! A* over any [`AstarPather`], with per-cell bookkeeping kept between runs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use mazepath_core::{Bounds, Point};

use crate::error::PathError;
use crate::path::{Path, PathNode};
use crate::traits::AstarPather;

// Expansions between two looks at the clock.
const CLOCK_STRIDE: usize = 256;

/// Bounds on a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Wall-clock budget. `None` means unbounded.
    pub timeout: Option<Duration>,
}

impl SearchLimits {
    pub const NONE: Self = Self { timeout: None };

    pub const fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// What the current run knows about one cell. Slots whose `visit` differs
/// from the run's stamp have not been touched by that run.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    g: u64,
    came_from: Option<usize>,
    visit: u32,
    closed: bool,
}

/// A frontier entry. The heap pops the lowest `f`, then the lowest `h`,
/// then the latest push.
#[derive(Debug, PartialEq, Eq)]
struct Frontier {
    f: u64,
    h: u64,
    seq: u64,
    cell: usize,
}

impl Frontier {
    fn rank(&self) -> (Reverse<u64>, Reverse<u64>, u64) {
        (Reverse(self.f), Reverse(self.h), self.seq)
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable A* workspace for mazes of a given extent.
///
/// Repeated searches share one slot per cell. Starting a run only bumps a
/// stamp; the slots themselves are wiped when the stamp wraps around.
#[derive(Debug)]
pub struct Search {
    bounds: Bounds,
    slots: Vec<Slot>,
    stamp: u32,
    scratch: Vec<Point>,
}

impl Search {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            slots: vec![Slot::default(); bounds.len()],
            stamp: 0,
            scratch: Vec::with_capacity(4),
        }
    }

    /// Extent this workspace searches.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Point the workspace at a maze of another extent, keeping the slot
    /// allocation when it is large enough.
    pub fn reset(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if bounds.len() > self.slots.len() {
            self.slots = vec![Slot::default(); bounds.len()];
            self.stamp = 0;
        }
    }

    fn next_stamp(&mut self) -> u32 {
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.slots.fill(Slot::default());
            self.stamp = 1;
        }
        self.stamp
    }

    /// Least-cost path from `from` to `to`, both endpoints included.
    ///
    /// Each returned node carries the cost accumulated on arrival. Fails
    /// with [`PathError::NoPath`] once the frontier empties without reaching
    /// `to`, and with [`PathError::DeadlineExceeded`] when `limits` runs out.
    pub fn astar<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        limits: SearchLimits,
    ) -> Result<Path, PathError> {
        let origin = self.bounds.index(from).ok_or(PathError::OutOfBounds(from))?;
        let goal = self.bounds.index(to).ok_or(PathError::OutOfBounds(to))?;
        if origin == goal {
            return Ok(Path::from_nodes([PathNode { pos: from, cost: 0 }]));
        }

        let started = Instant::now();
        let stamp = self.next_stamp();
        self.slots[origin] = Slot {
            g: 0,
            came_from: None,
            visit: stamp,
            closed: false,
        };

        let mut frontier = BinaryHeap::new();
        let h = pather.estimate(from, to);
        frontier.push(Frontier {
            f: h,
            h,
            seq: 0,
            cell: origin,
        });

        let mut scratch = std::mem::take(&mut self.scratch);
        let mut pushes = 0u64;
        let mut expanded = 0usize;
        let outcome = loop {
            let Some(Frontier { cell, .. }) = frontier.pop() else {
                break Err(PathError::NoPath { from, to });
            };
            let slot = self.slots[cell];
            if slot.visit != stamp || slot.closed {
                continue;
            }
            if cell == goal {
                break Ok(());
            }

            expanded += 1;
            if let Some(timeout) = limits.timeout {
                if expanded % CLOCK_STRIDE == 0 && started.elapsed() >= timeout {
                    break Err(PathError::DeadlineExceeded { timeout, expanded });
                }
            }

            self.slots[cell].closed = true;
            let here = self.bounds.point(cell);
            scratch.clear();
            pather.neighbors(here, &mut scratch);
            for &next in &scratch {
                let Some(ni) = self.bounds.index(next) else {
                    continue;
                };
                let g = slot.g.saturating_add(pather.cost(here, next));
                let seen = &mut self.slots[ni];
                if seen.visit == stamp && g >= seen.g {
                    continue;
                }
                *seen = Slot {
                    g,
                    came_from: Some(cell),
                    visit: stamp,
                    closed: false,
                };
                let h = pather.estimate(next, to);
                pushes += 1;
                frontier.push(Frontier {
                    f: g.saturating_add(h),
                    h,
                    seq: pushes,
                    cell: ni,
                });
            }
        };
        self.scratch = scratch;

        log::debug!(
            "A* {from} -> {to}: {expanded} expansions, {pushes} pushes in {:?}",
            started.elapsed()
        );
        outcome?;
        Ok(self.trace(goal))
    }

    fn trace(&self, goal: usize) -> Path {
        let mut nodes: Vec<PathNode> = std::iter::successors(Some(goal), |&i| {
            self.slots[i].came_from
        })
        .map(|i| PathNode {
            pos: self.bounds.point(i),
            cost: self.slots[i].g,
        })
        .collect();
        nodes.reverse();
        Path::from_nodes(nodes)
    }
}
