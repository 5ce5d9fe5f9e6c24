use std::fs;
use std::path::Path;

use clap::Parser;
use mazepath_cli::{Cli, DEFAULT_INPUT_FILE, run_to};
use mazepath_core::Point;

const MAZE: &str = "S,,W\n1,5,\n,,E\n";

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("mazepath").chain(args.iter().copied()))
}

fn write_input(dir: &Path, text: &str) {
    fs::write(dir.join(DEFAULT_INPUT_FILE), text).unwrap();
}

#[test]
fn directory_input_and_every_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input(input.path(), MAZE);
    let out_dir = output.path().join("results");

    let mut term = Vec::new();
    let report = run_to(
        &cli(&[
            input.path().to_str().unwrap(),
            out_dir.to_str().unwrap(),
            "--all",
            "--scale",
            "10",
        ]),
        &mut term,
    )
    .unwrap();

    assert_eq!(report.written.len(), 5);
    for p in &report.written {
        assert!(p.is_file(), "{} missing", p.display());
    }
    assert_eq!(report.solution.path.cost(), 4);
    assert_eq!(
        report.solution.path.end(),
        Some(Point::from_row_col(2, 2))
    );

    assert_eq!(
        fs::read_to_string(out_dir.join("mazePath.csv")).unwrap(),
        "S,,W\n1P,5,\nP,P,E\n"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("maze.txt")).unwrap(),
        "S   W\n1P 5  \nP P E\n"
    );
    let edges = fs::read_to_string(out_dir.join("weighted.edgelist")).unwrap();
    assert_eq!(edges.lines().count(), 24);
    let img = image::open(out_dir.join("mazeImage.png")).unwrap();
    assert_eq!((img.width(), img.height()), (30, 30));

    let shown = String::from_utf8(term).unwrap();
    assert!(shown.contains("path: 4 steps, cost 4"));
}

#[test]
fn default_output_is_the_image() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let file = input.path().join("maze.csv");
    fs::write(&file, "S,E\n").unwrap();

    let report = run_to(
        &cli(&[file.to_str().unwrap(), output.path().to_str().unwrap()]),
        Vec::new(),
    )
    .unwrap();
    assert_eq!(report.written, vec![output.path().join("mazeImage.png")]);
    assert!(report.solution.grid.on_path_points().is_empty());
}

#[test]
fn invalid_maze_reports_everything_and_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input(input.path(), ",E\nE,\n");
    let out_dir = output.path().join("never");

    let err = run_to(
        &cli(&[
            input.path().to_str().unwrap(),
            out_dir.to_str().unwrap(),
            "--all",
        ]),
        Vec::new(),
    )
    .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("there must be a start point"), "{msg}");
    assert!(msg.contains("there can be no more than one end point"), "{msg}");
    assert!(!out_dir.exists());
}

#[test]
fn ragged_input_is_rejected() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input(input.path(), "S,,\n,E\n");
    let err = run_to(
        &cli(&[
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
        ]),
        Vec::new(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("row 1 has 2 cells, expected 3"));
}

#[test]
fn bad_font_fails_before_writing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input(input.path(), MAZE);
    let font = input.path().join("broken.ttf");
    fs::write(&font, b"not a font").unwrap();
    let out_dir = output.path().join("never");

    let err = run_to(
        &cli(&[
            input.path().to_str().unwrap(),
            out_dir.to_str().unwrap(),
            "--image",
            "--font",
            font.to_str().unwrap(),
        ]),
        Vec::new(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("not a usable TrueType font"));
    assert!(!out_dir.exists());
}

#[test]
fn config_file_sets_the_scale() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_input(input.path(), "S,E\n");
    let config = input.path().join("render.toml");
    fs::write(&config, "scale = 7\n").unwrap();

    run_to(
        &cli(&[
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ]),
        Vec::new(),
    )
    .unwrap();
    let img = image::open(output.path().join("mazeImage.png")).unwrap();
    assert_eq!((img.width(), img.height()), (14, 7));
}
