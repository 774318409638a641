/// ASCII point rasterizer for terminal rendering
use torus3d_core::Point2D;

/// Character drawn for every visible surface point
pub const POINT_GLYPH: char = '0';
const BLANK: char = ' ';

/// Fixed-size character grid that projected points are plotted into
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(BLANK);
    }

    /// Plot points; anything outside the grid is dropped
    pub fn plot(&mut self, points: &[Point2D]) {
        for point in points {
            if let Some((x, y)) = point.cell(self.width, self.height) {
                self.char_buffer[y * self.width + x] = POINT_GLYPH;
            }
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.char_buffer[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of non-blank cells
    pub fn lit_cells(&self) -> usize {
        self.char_buffer.iter().filter(|&&c| c != BLANK).count()
    }

    /// Write the grid into `out` as text: one line per row, no trailing newline
    pub fn write_text(&self, out: &mut String) {
        out.clear();
        out.reserve(self.width * self.height + self.height);
        for (y, row) in self.char_buffer.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();
        self.write_text(&mut text);
        text
    }
}
