use rayon::prelude::*;

use crate::cell::Rgb;
use crate::scroll::ScrollBuffer;

/// An RGB24 framebuffer that composes the history into screen pixels.
///
/// History row `y` covers pixel rows `y * scale .. (y + 1) * scale`,
/// oldest generation at the top. Rows the history doesn't hold yet paint
/// black, so a young scroll grows downward into empty space.
///
/// The buffer is allocated once and reused across frames.
pub struct Raster {
    buf: Vec<u8>,

    /// Cells per history row.
    width: usize,

    /// History rows covered.
    height: usize,

    /// Screen pixels per cell, both axes.
    scale: usize,
}

impl Raster {
    pub fn new(width: usize, height: usize, scale: usize) -> Self {
        Self {
            buf: vec![0; width * scale * height * scale * 3],
            width,
            height,
            scale,
        }
    }

    pub fn pixel_width(&self) -> usize {
        self.width * self.scale
    }

    pub fn pixel_height(&self) -> usize {
        self.height * self.scale
    }

    /// Bytes per pixel row.
    pub fn pitch(&self) -> usize {
        self.pixel_width() * 3
    }

    /// Repaint the whole buffer from `history` and return it.
    ///
    /// Pixel rows are filled in parallel; each worker owns a disjoint band
    /// of the buffer and only reads the history, so the pass needs no
    /// locking and joins before returning.
    pub fn render(&mut self, history: &ScrollBuffer) -> &[u8] {
        let pitch = self.pitch();
        let scale = self.scale;

        self.buf
            .par_chunks_mut(pitch)
            .enumerate()
            .for_each(|(py, line)| match history.get(py / scale) {
                Some(row) => {
                    for (px, out) in line.chunks_exact_mut(3).enumerate() {
                        let cell = row.get(px / scale).copied().unwrap_or_default();

                        out[0] = cell.r;
                        out[1] = cell.g;
                        out[2] = cell.b;
                    }
                }
                None => line.fill(0),
            });

        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(history: &mut ScrollBuffer, cells: &[Rgb]) {
        history.push(cells.to_vec());
    }

    #[test]
    fn buffer_covers_the_upscaled_grid() {
        let raster = Raster::new(3, 2, 4);

        assert_eq!(raster.pixel_width(), 12);
        assert_eq!(raster.pixel_height(), 8);
        assert_eq!(raster.pitch(), 36);
    }

    #[test]
    fn each_cell_fills_a_scale_sized_square() {
        let mut history = ScrollBuffer::new(2);
        push(&mut history, &[Rgb::BLACK, Rgb::WHITE]);

        let mut raster = Raster::new(2, 2, 2);
        let buf = raster.render(&history).to_vec();
        let pitch = raster.pitch();

        // top two pixel rows: black cell then white cell, two pixels each
        for py in 0..2 {
            let line = &buf[py * pitch..(py + 1) * pitch];
            assert_eq!(&line[..6], &[0, 0, 0, 0, 0, 0]);
            assert_eq!(&line[6..], &[255, 255, 255, 255, 255, 255]);
        }
    }

    #[test]
    fn missing_history_rows_paint_black() {
        let mut history = ScrollBuffer::new(2);
        push(&mut history, &[Rgb::WHITE, Rgb::WHITE]);

        let mut raster = Raster::new(2, 2, 2);
        let buf = raster.render(&history).to_vec();
        let pitch = raster.pitch();

        // only one generation held: the bottom half is empty space
        assert!(buf[..2 * pitch].iter().all(|&b| b == 255));
        assert!(buf[2 * pitch..].iter().all(|&b| b == 0));
    }

    #[test]
    fn stale_pixels_are_overwritten_on_repaint() {
        let mut history = ScrollBuffer::new(1);
        push(&mut history, &[Rgb::WHITE]);

        let mut raster = Raster::new(1, 1, 1);
        raster.render(&history);

        history.clear();
        push(&mut history, &[Rgb::new(10, 20, 30)]);

        assert_eq!(raster.render(&history), &[10, 20, 30]);
    }
}
