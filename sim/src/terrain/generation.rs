//! Procedural island shape.
//!
//! The island starts as a jittered oval, is consolidated into a single
//! landmass without enclosed lagoons, then trimmed or grown until it holds
//! exactly the requested number of cells. A spiral fill from the center is
//! the last resort that guarantees the count.
//!
//! Invariants kept between stages:
//! - land is one 8-connected component
//! - every empty cell reaches the grid border through 4-connected water

use std::collections::VecDeque;
use std::f32::consts::PI;

use bevy::math::IVec2;
use bevy_log::{debug, info, warn};
use bevy_platform::time::Instant;
use rand::{seq::SliceRandom, Rng};

use super::grid::{Grid, EIGHT_OFFSETS, FOUR_OFFSETS};
use crate::error::IslandError;

/// Width of the coastline band, in normalized ellipse falloff.
pub const EDGE_BAND: f32 = 0.2;
pub const RADIUS_X_FACTOR: f32 = 1.2;
pub const RADIUS_Z_FACTOR: f32 = 0.8;
pub const GRID_SIDE_FACTOR: f32 = 5.0;
/// Cells kept empty between the widest possible island and the border.
pub const GRID_MARGIN: usize = 2;
/// Maximum normalized ellipse distance a grown cell may have.
pub const GROWTH_LIMIT: f32 = 1.2;
pub const MAX_SHAPING_PASSES: usize = 32;

/// Oval profile the island is carved from.
#[derive(Debug, Clone, Copy)]
pub struct Oval {
    pub center: f32,
    pub radius_x: f32,
    pub radius_z: f32,
}

impl Oval {
    pub fn for_target(target: usize, center: f32) -> Self {
        let base = (target as f32 / PI).sqrt();
        Self {
            center,
            radius_x: base * RADIUS_X_FACTOR,
            radius_z: base * RADIUS_Z_FACTOR,
        }
    }

    fn normalized_sq(&self, cell: IVec2) -> f32 {
        let nx = (cell.x as f32 - self.center) / self.radius_x;
        let nz = (cell.y as f32 - self.center) / self.radius_z;
        nx * nx + nz * nz
    }

    /// `1 - (nx² + nz²)`: positive inside the oval, 1 at its center.
    pub fn falloff(&self, cell: IVec2) -> f32 {
        1.0 - self.normalized_sq(cell)
    }

    /// Normalized ellipse distance from the center, 1 on the outline.
    pub fn distance(&self, cell: IVec2) -> f32 {
        self.normalized_sq(cell).sqrt()
    }
}

/// Side length of a grid that comfortably holds an island of `target` cells.
pub fn grid_side(target: usize) -> usize {
    let base = (GRID_SIDE_FACTOR * (target as f32).sqrt()).ceil() as usize;
    let radius_x = (target as f32 / PI).sqrt() * RADIUS_X_FACTOR;
    let widest = (2.0 * radius_x * GROWTH_LIMIT).ceil() as usize + 1;
    base.max(widest + 2 * GRID_MARGIN)
}

/// Builds a grid holding exactly `target` first layer cells, with up to
/// `upper_target` of its most central interior cells raised.
pub fn generate_grid(
    target: usize,
    upper_target: usize,
    rng: &mut impl Rng,
) -> Result<Grid, IslandError> {
    let started = Instant::now();

    let size = grid_side(target);
    let mut grid = Grid::new(size);
    let oval = Oval::for_target(target, grid.center_offset());

    scatter_oval(&mut grid, &oval, rng);
    debug!("Oval scatter placed {} cells", grid.filled_count());

    let dropped = keep_largest_component(&mut grid);
    let filled = fill_enclosed_water(&mut grid);
    debug!("Dropped {dropped} detached cells, filled {filled} lagoon cells");

    shape_to_target(&mut grid, &oval, target, rng)?;
    raise_upper_layer(&mut grid, upper_target);

    info!(
        "Generated island: {} cells ({} raised) on a {}x{} grid in {:?}",
        grid.filled_count(),
        grid.upper_count(),
        size,
        size,
        started.elapsed()
    );
    Ok(grid)
}

/// Solid oval core with a randomly thinned coastline band.
pub(crate) fn scatter_oval(grid: &mut Grid, oval: &Oval, rng: &mut impl Rng) {
    for cell in grid.cells().collect::<Vec<_>>() {
        let falloff = oval.falloff(cell);
        let occupied = if falloff > EDGE_BAND {
            true
        } else if falloff > 0.0 {
            rng.gen::<f32>() < falloff / EDGE_BAND
        } else {
            false
        };
        if occupied {
            grid.set_filled(cell, true);
        }
    }
}

/// Clears every land cell outside the largest 8-connected component.
/// Returns how many cells were dropped.
pub(crate) fn keep_largest_component(grid: &mut Grid) -> usize {
    let components = land_components(grid);
    let Some(largest) = components.iter().max_by_key(|c| c.len()) else {
        return 0;
    };
    let mut keep = vec![false; grid.size() * grid.size()];
    for cell in largest {
        keep[grid.index(*cell)] = true;
    }

    let mut dropped = 0;
    for cell in grid.filled_cells().collect::<Vec<_>>() {
        if !keep[grid.index(cell)] {
            grid.set_filled(cell, false);
            dropped += 1;
        }
    }
    dropped
}

/// 8-connected components of the first layer.
pub fn land_components(grid: &Grid) -> Vec<Vec<IVec2>> {
    let mut seen = vec![false; grid.size() * grid.size()];
    let mut components = Vec::new();

    for start in grid.filled_cells() {
        if seen[grid.index(start)] {
            continue;
        }
        seen[grid.index(start)] = true;
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            for offset in EIGHT_OFFSETS {
                let next = cell + offset;
                if grid.is_filled(next) && !seen[grid.index(next)] {
                    seen[grid.index(next)] = true;
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }
    components
}

/// Empty cells that cannot reach the border through 4-connected water.
pub fn enclosed_water(grid: &Grid) -> Vec<IVec2> {
    let size = grid.size() as i32;
    let mut open = vec![false; grid.size() * grid.size()];
    let mut queue = VecDeque::new();

    for cell in grid.cells() {
        let on_border = cell.x == 0 || cell.y == 0 || cell.x == size - 1 || cell.y == size - 1;
        if on_border && !grid.is_filled(cell) {
            open[grid.index(cell)] = true;
            queue.push_back(cell);
        }
    }
    while let Some(cell) = queue.pop_front() {
        for offset in FOUR_OFFSETS {
            let next = cell + offset;
            if grid.in_bounds(next) && !grid.is_filled(next) && !open[grid.index(next)] {
                open[grid.index(next)] = true;
                queue.push_back(next);
            }
        }
    }

    grid.cells()
        .filter(|c| !grid.is_filled(*c) && !open[grid.index(*c)])
        .collect()
}

/// Turns enclosed lagoons into land. Returns how many cells were filled.
pub(crate) fn fill_enclosed_water(grid: &mut Grid) -> usize {
    let pockets = enclosed_water(grid);
    for cell in &pockets {
        grid.set_filled(*cell, true);
    }
    pockets.len()
}

/// Alternates trimming, growing and lagoon filling until the count matches.
fn shape_to_target(
    grid: &mut Grid,
    oval: &Oval,
    target: usize,
    rng: &mut impl Rng,
) -> Result<(), IslandError> {
    for pass in 0..MAX_SHAPING_PASSES {
        fill_enclosed_water(grid);
        let count = grid.filled_count();
        debug!("Shaping pass {pass}: {count}/{target} cells");

        if count > target {
            let removed = trim_to_target(grid, target, rng);
            if removed == 0 {
                warn!("No removable coastline cell left with {count} cells");
            }
        } else if count < target {
            grow_to_target(grid, oval, target, rng);
            if grid.filled_count() < target {
                spiral_fill(grid, target);
            }
        } else {
            return Ok(());
        }
    }

    Err(IslandError::GenerationNonconvergence {
        stage: "shaping",
        iterations: MAX_SHAPING_PASSES,
    })
}

/// Whether removing `cell` keeps its occupied 8-neighbours connected to
/// each other through the surrounding ring.
pub(crate) fn is_removable(grid: &Grid, cell: IVec2) -> bool {
    let ring: Vec<IVec2> = EIGHT_OFFSETS
        .iter()
        .filter(|o| grid.is_filled(cell + **o))
        .copied()
        .collect();
    let Some(first) = ring.first() else {
        return true;
    };

    let mut reached = vec![*first];
    let mut stack = vec![*first];
    while let Some(current) = stack.pop() {
        for other in &ring {
            let adjacent = (current - *other).abs().max_element() == 1;
            if adjacent && !reached.contains(other) {
                reached.push(*other);
                stack.push(*other);
            }
        }
    }
    reached.len() == ring.len()
}

/// Removes random coastline cells until `target` is reached or nothing is
/// removable. Only cells with an open 4-side are candidates so no lagoon
/// forms behind them.
pub(crate) fn trim_to_target(grid: &mut Grid, target: usize, rng: &mut impl Rng) -> usize {
    let mut removed = 0;
    while grid.filled_count() > target {
        let mut candidates: Vec<IVec2> = grid
            .filled_cells()
            .filter(|c| grid.has_open_side(*c))
            .collect();
        candidates.shuffle(rng);

        let mut progressed = false;
        for cell in candidates {
            if grid.filled_count() <= target {
                break;
            }
            if grid.is_filled(cell) && grid.has_open_side(cell) && is_removable(grid, cell) {
                grid.set_filled(cell, false);
                removed += 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }
    removed
}

/// Grows the island through random frontier cells that stay plausibly
/// close to the oval.
pub(crate) fn grow_to_target(grid: &mut Grid, oval: &Oval, target: usize, rng: &mut impl Rng) {
    let mut queued = vec![false; grid.size() * grid.size()];
    let mut frontier = Vec::new();

    for cell in grid.filled_cells().collect::<Vec<_>>() {
        for offset in FOUR_OFFSETS {
            let next = cell + offset;
            if grid.in_bounds(next) && !grid.is_filled(next) && !queued[grid.index(next)] {
                queued[grid.index(next)] = true;
                frontier.push(next);
            }
        }
    }

    while grid.filled_count() < target && !frontier.is_empty() {
        let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        // Rejected cells stay marked as queued and never come back.
        if grid.is_filled(cell) || oval.distance(cell) > GROWTH_LIMIT {
            continue;
        }
        grid.set_filled(cell, true);

        for offset in FOUR_OFFSETS {
            let next = cell + offset;
            if grid.in_bounds(next) && !grid.is_filled(next) && !queued[grid.index(next)] {
                queued[grid.index(next)] = true;
                frontier.push(next);
            }
        }
    }
}

/// Fills empty cells ring by ring around the island center until the count
/// is met. Every ring is completed before the next one starts, so each filled
/// cell touches the already solid ring inside it.
pub(crate) fn spiral_fill(grid: &mut Grid, target: usize) {
    let center = spiral_origin(grid);
    let max_ring = grid.size() as i32;

    for ring in 0..=max_ring {
        for cell in square_ring(center, ring) {
            if grid.filled_count() >= target {
                return;
            }
            if grid.in_bounds(cell) && !grid.is_filled(cell) {
                grid.set_filled(cell, true);
            }
        }
    }
}

/// Land cell closest to the grid center, or the center itself on an empty
/// grid. Starting there keeps the spiral attached to the existing island.
fn spiral_origin(grid: &Grid) -> IVec2 {
    let center = grid.center_offset();
    grid.filled_cells()
        .min_by(|a, b| {
            let da = (a.x as f32 - center).powi(2) + (a.y as f32 - center).powi(2);
            let db = (b.x as f32 - center).powi(2) + (b.y as f32 - center).powi(2);
            da.total_cmp(&db)
        })
        .unwrap_or_else(|| IVec2::splat((grid.size() / 2) as i32))
}

/// Cells at Chebyshev distance `ring` from `center`, walked clockwise.
fn square_ring(center: IVec2, ring: i32) -> Vec<IVec2> {
    if ring == 0 {
        return vec![center];
    }
    let mut cells = Vec::with_capacity(8 * ring as usize);
    for dx in -ring..ring {
        cells.push(center + IVec2::new(dx, -ring));
    }
    for dz in -ring..ring {
        cells.push(center + IVec2::new(ring, dz));
    }
    for dx in (-ring + 1..=ring).rev() {
        cells.push(center + IVec2::new(dx, ring));
    }
    for dz in (-ring + 1..=ring).rev() {
        cells.push(center + IVec2::new(-ring, dz));
    }
    cells
}

/// Raises the `count` interior cells closest to the grid center.
pub(crate) fn raise_upper_layer(grid: &mut Grid, count: usize) {
    let center = grid.center_offset();
    let mut candidates: Vec<IVec2> = grid.filled_cells().filter(|c| grid.is_interior(*c)).collect();
    candidates.sort_by(|a, b| {
        let da = (a.x as f32 - center).powi(2) + (a.y as f32 - center).powi(2);
        let db = (b.x as f32 - center).powi(2) + (b.y as f32 - center).powi(2);
        da.total_cmp(&db)
    });

    for cell in candidates.into_iter().take(count) {
        grid.set_upper(cell, true);
    }
}
