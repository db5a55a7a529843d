//! Formatting utilities for terminal output

use crate::core::Grid;

/// Render the grid with only the cells of `path` shown
///
/// Cells off the path are blank, so the shape of the trail stands out.
#[must_use]
pub fn trail_lines(grid: &Grid, path: &[usize]) -> Vec<String> {
    let row_length = grid.layout().row_length();
    let mut on_path = vec![false; grid.len()];
    for &cell in path {
        on_path[cell] = true;
    }

    grid.letters()
        .chunks(row_length)
        .enumerate()
        .map(|(row, letters)| {
            letters
                .iter()
                .enumerate()
                .map(|(col, &letter)| {
                    if on_path[row * row_length + col] {
                        letter
                    } else {
                        ' '
                    }
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Format cell indices as `(row,col)` pairs joined by arrows
#[must_use]
pub fn path_coordinates(grid: &Grid, path: &[usize]) -> String {
    let layout = grid.layout();
    path.iter()
        .map(|&cell| {
            let (row, col) = layout.position(cell);
            format!("({row},{col})")
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
