//! Output formats for solved mazes.
//!
//! Every renderer is a pure function of an annotated
//! [`Grid`](mazepath_core::Grid) (and, for the graph-shaped outputs, the
//! [`Graph`](mazepath_paths::Graph) and [`Path`](mazepath_paths::Path)).
//! Writers take an explicit [`OutputDir`]; nothing here consults global state.
//!
//! | Output | Function | Default file |
//! |---|---|---|
//! | plain text | [`write_text`] | [`TEXT_FILE`] |
//! | CSV with `P` suffixes | [`write_csv`] | [`CSV_FILE`] |
//! | weighted edge list | [`write_edgelist`] | [`EDGELIST_FILE`] |
//! | coloured raster | [`write_image`] | [`IMAGE_FILE`] |
//! | node-link diagram | [`write_diagram`] | [`DIAGRAM_FILE`] |
//! | coloured terminal | [`print_terminal`] | stdout |

mod diagram;
mod drawer;
mod edgelist;
mod error;
mod options;
mod output;
pub mod palette;
mod raster;
mod table;
mod terminal;
mod text;

pub use diagram::{render_diagram, write_diagram};
pub use drawer::LabelDrawer;
pub use edgelist::{write_edgelist, write_edgelist_to};
pub use error::RenderError;
pub use options::{MAX_DIAGRAM_SPACING, MAX_PIXELS, MAX_SCALE, MIN_SCALE, RenderOptions};
pub use output::{CSV_FILE, DIAGRAM_FILE, EDGELIST_FILE, IMAGE_FILE, OutputDir, TEXT_FILE};
pub use raster::{raster_label, render_image, write_image};
pub use table::{grid_rows, read_rows, read_rows_path, write_csv, write_csv_to};
pub use terminal::print_terminal;
pub use text::{PATH_SUFFIX, cell_text, render_text, write_text};
