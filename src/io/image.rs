//! PNG rendering of solved grids
//!
//! Each domino is drawn as an outlined block spanning its two cells, with the
//! first pip count on the primary cell and the second on the adjacent one.

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::algorithm::solution::Solution;
use crate::io::configuration::{CELL_PIXELS, PIP_RADIUS_PIXELS, TILE_BORDER_PIXELS};
use crate::io::error::{Result, SolverError, file_system_error};
use crate::spatial::grid::Cell;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TILE_FACE: Rgba<u8> = Rgba([250, 244, 226, 255]);
const TILE_EDGE: Rgba<u8> = Rgba([40, 40, 48, 255]);
const PIP: Rgba<u8> = Rgba([20, 20, 24, 255]);

// Pip centres in quarters of a cell, laid out like a die face
const PIP_LAYOUTS: [&[(u32, u32)]; 7] = [
    &[],
    &[(2, 2)],
    &[(1, 1), (3, 3)],
    &[(1, 1), (2, 2), (3, 3)],
    &[(1, 1), (1, 3), (3, 1), (3, 3)],
    &[(1, 1), (1, 3), (2, 2), (3, 1), (3, 3)],
    &[(1, 1), (1, 3), (2, 1), (2, 3), (3, 1), (3, 3)],
];

/// Pixel rectangle in image coordinates
#[derive(Debug, Clone, Copy)]
struct Rect {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

impl Rect {
    // Rows map to image y, columns to image x
    const fn of_cell(cell: Cell) -> Self {
        Self {
            left: cell.y as u32 * CELL_PIXELS,
            top: cell.x as u32 * CELL_PIXELS,
            width: CELL_PIXELS,
            height: CELL_PIXELS,
        }
    }

    fn union(self, other: Self) -> Self {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = (self.left + self.width).max(other.left + other.width);
        let bottom = (self.top + self.height).max(other.top + other.height);
        Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }
}

/// Render a solved grid to an in-memory image
pub fn render_solution(solution: &Solution) -> RgbaImage {
    let side = solution.grid().size() as u32 * CELL_PIXELS;
    let mut img = RgbaImage::from_pixel(side, side, BACKGROUND);

    for placement in solution.placements() {
        let Some(tile) = solution.pool().get(placement.tile) else {
            continue;
        };
        let primary = Rect::of_cell(placement.primary);
        let secondary = Rect::of_cell(placement.secondary);
        let block = primary.union(secondary);

        fill_rect(&mut img, block, TILE_EDGE);
        let inset = Rect {
            left: block.left + TILE_BORDER_PIXELS,
            top: block.top + TILE_BORDER_PIXELS,
            width: block.width.saturating_sub(2 * TILE_BORDER_PIXELS),
            height: block.height.saturating_sub(2 * TILE_BORDER_PIXELS),
        };
        fill_rect(&mut img, inset, TILE_FACE);

        // Divider between the two halves
        let divider = if secondary.top > primary.top {
            Rect {
                left: inset.left,
                top: secondary.top,
                width: inset.width,
                height: 1,
            }
        } else {
            Rect {
                left: secondary.left,
                top: inset.top,
                width: 1,
                height: inset.height,
            }
        };
        fill_rect(&mut img, divider, TILE_EDGE);

        draw_pips(&mut img, primary, tile.left());
        draw_pips(&mut img, secondary, tile.right());
    }

    img
}

/// Render a solved grid and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_png(solution: &Solution, output_path: &Path) -> Result<()> {
    let img = render_solution(solution);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| SolverError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    for py in rect.top..rect.top + rect.height {
        for px in rect.left..rect.left + rect.width {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}

fn draw_pips(img: &mut RgbaImage, cell: Rect, pips: u8) {
    let Some(layout) = PIP_LAYOUTS.get(usize::from(pips)) else {
        return;
    };
    let quarter = CELL_PIXELS / 4;
    for &(row, col) in *layout {
        let cx = cell.left + col * quarter;
        let cy = cell.top + row * quarter;
        fill_circle(img, cx, cy, PIP_RADIUS_PIXELS);
    }
}

fn fill_circle(img: &mut RgbaImage, cx: u32, cy: u32, radius: u32) {
    let r2 = i64::from(radius * radius);
    for py in cy.saturating_sub(radius)..=cy + radius {
        for px in cx.saturating_sub(radius)..=cx + radius {
            let dx = i64::from(px) - i64::from(cx);
            let dy = i64::from(py) - i64::from(cy);
            if dx * dx + dy * dy <= r2
                && let Some(pixel) = img.get_pixel_mut_checked(px, py)
            {
                *pixel = PIP;
            }
        }
    }
}
