//! Checkerboard background renderer for the alpha strip.

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::peniko::Color;
use floem_renderer::Renderer;

use crate::constants;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(204, 204, 204);

/// Indices `(col, row)` of the dark cells covering a `width` × `height` area.
fn dark_cells(width: f64, height: f64, cell: f64) -> impl Iterator<Item = (usize, usize)> {
    let cols = (width / cell).ceil() as usize;
    let rows = (height / cell).ceil() as usize;
    (0..rows).flat_map(move |row| {
        (0..cols)
            .filter(move |col| (row + col) % 2 == 1)
            .map(move |col| (col, row))
    })
}

/// Paint a checkerboard pattern into `rect`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect) {
    let cell = constants::CHECKER_CELL;
    cx.fill(&rect, LIGHT, 0.0);
    for (col, row) in dark_cells(rect.width(), rect.height(), cell) {
        let x = rect.x0 + col as f64 * cell;
        let y = rect.y0 + row as f64 * cell;
        let cell_rect = Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1));
        cx.fill(&cell_rect, DARK, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_cells() {
        let cells: Vec<_> = dark_cells(10.0, 10.0, 5.0).collect();
        assert_eq!(cells, vec![(1, 0), (0, 1)]);
        // Partial cells at the edge still count.
        assert_eq!(dark_cells(18.0, 300.0, 5.0).count(), 4 * 60 / 2);
    }
}
