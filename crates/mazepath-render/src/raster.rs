//! Raster image of an annotated grid: one outlined square per cell.

use std::path::PathBuf;

use image::{Rgb, RgbImage};
use mazepath_core::{Cell, Grid, Marker, Point};

use crate::drawer::LabelDrawer;
use crate::error::RenderError;
use crate::options::{RenderOptions, canvas};
use crate::output::OutputDir;
use crate::palette::{self, Color};

/// Label drawn on a cell in the raster image, if any.
///
/// Weights of 1 and blank cells stay unlabelled; on-path cells show their
/// own label without any path marker.
pub fn raster_label(cell: &Cell) -> Option<String> {
    match &cell.marker {
        Marker::Start | Marker::End | Marker::Unknown(_) => Some(cell.marker.label().into_owned()),
        Marker::Weight(w) if *w > 1 => Some(w.to_string()),
        _ => None,
    }
}

/// Paint a `scale`-sized square at grid position `p`.
fn fill_cell(img: &mut RgbImage, p: Point, color: Color, scale: u32) {
    let x0 = p.x as u32 * scale;
    let y0 = p.y as u32 * scale;
    let body = Rgb(color.rgb());
    let edge = Rgb(color.outline().rgb());
    for j in 0..scale {
        for k in 0..scale {
            let on_edge = j == 0 || k == 0 || j == scale - 1 || k == scale - 1;
            img.put_pixel(x0 + j, y0 + k, if on_edge { edge } else { body });
        }
    }
}

/// Render `grid` to an image. Labels are drawn only when `drawer` is given.
pub fn render_image(
    grid: &Grid,
    opts: &RenderOptions,
    drawer: Option<&LabelDrawer>,
) -> Result<RgbImage, RenderError> {
    opts.check()?;
    let bounds = grid.weight_bounds();
    let scale = opts.scale_for(bounds.1);
    let (width, height) = canvas(
        grid.width() as u64 * u64::from(scale),
        grid.height() as u64 * u64::from(scale),
        "scale",
    )?;
    log::debug!("raster {width}x{height}px, {scale}px per cell");

    let mut img = RgbImage::from_pixel(width, height, Rgb(palette::EMPTY.rgb()));
    for (p, cell) in grid.iter() {
        fill_cell(&mut img, p, palette::cell_color(cell, bounds), scale);
    }

    if let Some(drawer) = drawer {
        let s = scale as f32;
        for (p, cell) in grid.iter() {
            let Some(text) = raster_label(cell) else {
                continue;
            };
            let fg = palette::cell_color(cell, bounds).contrast_text();
            drawer.draw(
                &mut img,
                p.x as f32 * s + s * 0.25,
                p.y as f32 * s + s * 0.1,
                s * opts.label_size,
                &text,
                fg,
            );
        }
    }
    Ok(img)
}

/// Render and save the image as `name` inside `out`.
pub fn write_image(
    grid: &Grid,
    opts: &RenderOptions,
    drawer: Option<&LabelDrawer>,
    out: &OutputDir,
    name: &str,
) -> Result<PathBuf, RenderError> {
    let path = out.join(name);
    render_image(grid, opts, drawer)?.save(&path)?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
