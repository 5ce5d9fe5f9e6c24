//! Node-link diagram of the maze graph, with the path highlighted.

use std::collections::HashSet;
use std::path::PathBuf;

use image::{Rgb, RgbImage};
use mazepath_core::{Grid, Point};
use mazepath_paths::{Graph, Path};

use crate::drawer::LabelDrawer;
use crate::error::RenderError;
use crate::options::{RenderOptions, canvas};
use crate::output::OutputDir;
use crate::palette::{self, Color};

const PATH_EDGE_WIDTH: i32 = 3;

/// Pixel geometry of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    spacing: i32,
    radius: i32,
    margin: i32,
}

impl Layout {
    fn new(opts: &RenderOptions) -> Result<Self, RenderError> {
        opts.check()?;
        // check() keeps both values far below i32::MAX.
        let spacing = opts.diagram_spacing as i32;
        Ok(Self {
            spacing,
            radius: opts.node_radius as i32,
            margin: spacing,
        })
    }

    /// Centre of the node for grid position `p`. Row 0 is at the top.
    fn center(&self, p: Point) -> (i32, i32) {
        (
            self.margin + p.x * self.spacing,
            self.margin + p.y * self.spacing,
        )
    }

    fn image_size(&self, graph: &Graph) -> Result<(u32, u32), RenderError> {
        let b = graph.bounds();
        let (margin, spacing) = (self.margin as u64, self.spacing as u64);
        let span = |n: i32| 2 * margin + (n.max(1) - 1) as u64 * spacing;
        canvas(span(b.width()), span(b.height()), "diagram_spacing")
    }
}

fn put(img: &mut RgbImage, x: i32, y: i32, c: Color) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(c.rgb()));
    }
}

/// Axis-aligned segment between two node centres.
fn draw_segment(img: &mut RgbImage, a: (i32, i32), b: (i32, i32), width: i32, c: Color) {
    let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
    let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));
    let half = width / 2;
    // Thicken across the segment's direction only.
    let (hx, hy) = if a.1 == b.1 { (0, half) } else { (half, 0) };
    for x in x0 - hx..=x1 + hx {
        for y in y0 - hy..=y1 + hy {
            put(img, x, y, c);
        }
    }
}

fn draw_disc(img: &mut RgbImage, (cx, cy): (i32, i32), r: i32, c: Color) {
    let outline = c.outline();
    let inner = (r - 1) * (r - 1);
    for dy in -r..=r {
        for dx in -r..=r {
            let d = dx * dx + dy * dy;
            if d > r * r {
                continue;
            }
            put(img, cx + dx, cy + dy, if d > inner { outline } else { c });
        }
    }
}

/// Render the graph of `grid` as a node-link diagram.
///
/// `grid` should be the annotated grid so that path nodes are coloured.
pub fn render_diagram(
    grid: &Grid,
    graph: &Graph,
    path: &Path,
    opts: &RenderOptions,
    drawer: Option<&LabelDrawer>,
) -> Result<RgbImage, RenderError> {
    let layout = Layout::new(opts)?;
    let (w, h) = layout.image_size(graph)?;
    log::debug!("diagram {w}x{h}px for {} nodes", graph.node_count());
    let mut img = RgbImage::from_pixel(w, h, Rgb(Color::WHITE.rgb()));

    let steps: HashSet<(Point, Point)> = path
        .points()
        .windows(2)
        .map(|s| (s[0].min(s[1]), s[0].max(s[1])))
        .collect();

    // Plain edges first so path edges are never painted over.
    let undirected: Vec<_> = graph.edges().filter(|e| e.from < e.to).collect();
    for e in undirected.iter().filter(|e| !steps.contains(&(e.from, e.to))) {
        draw_segment(&mut img, layout.center(e.from), layout.center(e.to), 1, palette::EDGE);
    }
    for e in undirected.iter().filter(|e| steps.contains(&(e.from, e.to))) {
        draw_segment(
            &mut img,
            layout.center(e.from),
            layout.center(e.to),
            PATH_EDGE_WIDTH,
            palette::PATH,
        );
    }

    for (p, cell) in grid.iter() {
        draw_disc(&mut img, layout.center(p), layout.radius, palette::node_color(cell));
    }

    if let Some(drawer) = drawer {
        let px = 2.0 * layout.radius as f32 * opts.label_size;
        for (p, cell) in grid.iter() {
            let label = cell.marker.label();
            if label.is_empty() {
                continue;
            }
            let (cx, cy) = layout.center(p);
            let tw = drawer.text_width(&label, px);
            drawer.draw(
                &mut img,
                cx as f32 - tw / 2.0,
                cy as f32 - px / 2.0,
                px,
                &label,
                palette::node_color(cell).contrast_text(),
            );
        }
    }
    Ok(img)
}

/// Render and save the diagram as `name` inside `out`.
pub fn write_diagram(
    grid: &Grid,
    graph: &Graph,
    path: &Path,
    opts: &RenderOptions,
    drawer: Option<&LabelDrawer>,
    out: &OutputDir,
    name: &str,
) -> Result<PathBuf, RenderError> {
    let file = out.join(name);
    render_diagram(grid, graph, path, opts, drawer)?.save(&file)?;
    log::info!("wrote {}", file.display());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_paths::{SearchLimits, solve};

    fn opts() -> RenderOptions {
        RenderOptions {
            diagram_spacing: 20,
            node_radius: 5,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn layout_and_colours() {
        let sol = solve(&[["S", "", "E"], ["W", "W", "3"]], SearchLimits::NONE).unwrap();
        let img = render_diagram(&sol.grid, &sol.graph, &sol.path, &opts(), None).unwrap();
        // margin 20, spacing 20: 3 columns span 80px, 2 rows span 60px.
        assert_eq!(img.dimensions(), (80, 60));

        let px = |x: u32, y: u32| img.get_pixel(x, y).0;
        assert_eq!(px(20, 20), palette::START.rgb());
        assert_eq!(px(40, 20), palette::PATH.rgb());
        assert_eq!(px(60, 20), palette::END.rgb());
        assert_eq!(px(20, 40), palette::WALL.rgb());
        assert_eq!(px(60, 40), palette::BROWN.rgb());
        // Between S and the path node lies a path edge.
        assert_eq!(px(30, 20), palette::PATH.rgb());
        assert_eq!(px(30, 21), palette::PATH.rgb());
        // Between the two walls lies a plain edge.
        assert_eq!(px(30, 40), palette::EDGE.rgb());
        assert_eq!(px(30, 41), Color::WHITE.rgb());
        // Corners stay blank.
        assert_eq!(px(0, 0), Color::WHITE.rgb());
    }

    #[test]
    fn single_row_diagram() {
        let sol = solve(&[["S", "E"]], SearchLimits::NONE).unwrap();
        let img = render_diagram(&sol.grid, &sol.graph, &sol.path, &opts(), None).unwrap();
        assert_eq!(img.dimensions(), (60, 40));
    }

    #[test]
    fn oversized_layout_is_an_error() {
        let sol = solve(&[["S", "E"]], SearchLimits::NONE).unwrap();
        let render = |o: &RenderOptions| render_diagram(&sol.grid, &sol.graph, &sol.path, o, None);

        let huge_spacing = RenderOptions {
            diagram_spacing: u32::MAX,
            ..RenderOptions::default()
        };
        assert!(matches!(
            render(&huge_spacing),
            Err(RenderError::InvalidOption {
                name: "diagram_spacing",
                ..
            })
        ));
        let huge_radius = RenderOptions {
            node_radius: u32::MAX,
            ..RenderOptions::default()
        };
        assert!(render(&huge_radius).is_err());
    }

    #[test]
    fn wide_graph_exceeds_the_pixel_cap() {
        // 1024px spacing over 70 columns and rows is past the pixel cap.
        let mut rows = vec![vec![""; 70]; 70];
        rows[0][0] = "S";
        rows[69][69] = "E";
        let sol = solve(&rows, SearchLimits::NONE).unwrap();
        let wide = RenderOptions {
            diagram_spacing: 1024,
            ..RenderOptions::default()
        };
        let err = render_diagram(&sol.grid, &sol.graph, &sol.path, &wide, None).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidOption {
                name: "diagram_spacing",
                ..
            }
        ));
    }
}
