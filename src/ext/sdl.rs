use sdl2::render::Texture;
use sdl2::render::WindowCanvas;

use elementary::render::Raster;
use elementary::scroll::ScrollBuffer;

pub trait PresentHistoryExt {
    /// Compose `history` into `raster`, upload it through `texture`, and
    /// flip it onto the screen. Full-buffer redraw every call.
    fn present_history(
        &mut self,
        texture: &mut Texture<'_>,
        raster: &mut Raster,
        history: &ScrollBuffer,
    ) -> Result<(), String>;
}

impl PresentHistoryExt for WindowCanvas {
    fn present_history(
        &mut self,
        texture: &mut Texture<'_>,
        raster: &mut Raster,
        history: &ScrollBuffer,
    ) -> Result<(), String> {
        let pitch = raster.pitch();
        let pixels = raster.render(history);

        texture.update(None, pixels, pitch).map_err(|e| e.to_string())?;

        self.copy(texture, None, None)?;
        self.present();

        Ok(())
    }
}
