// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam in an energy map
//!
//! The pixels form a directed acyclic graph whose rows are already in
//! topological order: every pixel points at the (up to) three pixels
//! touching it in the row below.  One pass from the top row to the
//! bottom, relaxing those edges as we go, leaves every pixel holding
//! the cheapest way to reach it and the column it was reached from.

use crate::twodmap::TwoDimensionalMap;
use tracing::trace;

/// The cheapest known way to reach a pixel: the summed energy of the
/// path so far, and the column of that path in the row above.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct DistanceAndBackPointer {
    pub distance: f64,
    pub parent: u32,
}

// `None` marks a pixel no path has reached yet.  A zero distance is a
// perfectly good distance.
type PathMap = TwoDimensionalMap<Option<DistanceAndBackPointer>>;

/// Relax the edge from `(x, y)` to `(to_x, y + 1)`.  The first path to
/// arrive is kept unless a later one is strictly cheaper, so ties go to
/// the leftmost parent.
fn relax(paths: &mut PathMap, energy: &TwoDimensionalMap<f64>, (x, y): (u32, u32), to_x: u32) {
    let from = match paths[(x, y)] {
        Some(cell) => cell,
        None => return,
    };
    let candidate = from.distance + energy[(to_x, y + 1)];
    let target = &mut paths[(to_x, y + 1)];
    let improves = match target {
        Some(current) => candidate < current.distance,
        None => true,
    };
    if improves {
        *target = Some(DistanceAndBackPointer {
            distance: candidate,
            parent: x,
        });
    }
}

/// Run the shortest path pass over the whole map.
pub(crate) fn shortest_paths(energy: &TwoDimensionalMap<f64>) -> PathMap {
    let (width, height) = (energy.width(), energy.height());
    let mut paths = PathMap::new(width, height);
    if width == 0 || height == 0 {
        return paths;
    }

    // Every pixel in the top row starts a path costing its own energy.
    for x in 0..width {
        paths[(x, 0)] = Some(DistanceAndBackPointer {
            distance: energy[(x, 0)],
            parent: x,
        });
    }

    let maxwidth = width - 1;
    for y in 0..height - 1 {
        for x in 0..width {
            if x > 0 {
                relax(&mut paths, energy, (x, y), x - 1);
            }
            relax(&mut paths, energy, (x, y), x);
            if x < maxwidth {
                relax(&mut paths, energy, (x, y), x + 1);
            }
        }
    }
    paths
}

// Every pixel below the top row is reachable from the pixel directly
// above it, so after the pass no cell is still `None`.
fn distance_at(paths: &PathMap, x: u32, y: u32) -> f64 {
    paths[(x, y)].map_or(f64::INFINITY, |cell| cell.distance)
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.  An empty map has an empty seam.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
    let (width, height) = (energy.width(), energy.height());
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let paths = shortest_paths(energy);
    let bottom = height - 1;

    // The cheapest column in the bottom row.  `min_by` keeps the first
    // of several equal minima, so the leftmost column wins.
    let mut seam_col = (0..width)
        .min_by(|a, b| {
            distance_at(&paths, *a, bottom).total_cmp(&distance_at(&paths, *b, bottom))
        })
        .unwrap_or(0);
    trace!(
        distance = distance_at(&paths, seam_col, bottom),
        column = seam_col,
        "found vertical seam"
    );

    // Working backwards, generate a vec of x coordinates that that map to
    // the seam, reverse and return.
    let mut seam: Vec<u32> = (0..height)
        .rev()
        .map(|y| {
            let col = seam_col;
            seam_col = paths[(col, y)].map_or(col, |cell| cell.parent);
            col
        })
        .collect();
    seam.reverse();
    seam
}
