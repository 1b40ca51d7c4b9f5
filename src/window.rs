use sdl2::{
    EventPump,
    event::{ Event, WindowEvent },
    video::{ Window, WindowContext },
    render::{ Canvas, TextureCreator, Texture },
    pixels::PixelFormatEnum,
    rect::Rect,
};

use image::{ RgbImage, RgbaImage, buffer::ConvertBuffer };

pub trait Present{
    fn present(&mut self, image: &RgbImage) -> Result<(), String>;
}

// transient viewer: the window only exists while the result is on screen
pub struct BlendWindow;

impl Present for BlendWindow{
    fn present(&mut self, image: &RgbImage) -> Result<(), String>{
        let mut viewer = Viewer::create()?;
        viewer.show(image)
    }
}

struct Viewer{
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    event_pump: EventPump,
}

impl Viewer{
    fn create() -> Result<Self, String>{
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window("Blended Image", 512, 512)
            .resizable()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok(Self{
            canvas,
            texture_creator,
            event_pump,
        })
    }

    fn show(&mut self, image: &RgbImage) -> Result<(), String>{
        let rgba: RgbaImage = image.convert();
        let (imgw, imgh) = rgba.dimensions();

        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA32, imgw, imgh)
            .map_err(|e| e.to_string())?;
        texture.update(None, &rgba, 4 * imgw as usize).map_err(|e| e.to_string())?;

        let (winw, winh) = self.canvas.output_size()?;
        self.draw(&texture, imgw, imgh, winw, winh)?;

        println!("Press any key to close the window.");
        loop {
            match self.event_pump.wait_event() {
                Event::Quit{ .. } | Event::KeyDown{ .. } => break,
                Event::Window{ win_event: WindowEvent::Resized(winw, winh), .. } => {
                    let winw = winw.max(0).unsigned_abs();
                    let winh = winh.max(0).unsigned_abs();
                    self.draw(&texture, imgw, imgh, winw, winh)?;
                },
                Event::Window{ win_event: WindowEvent::Exposed, .. } => {
                    let (winw, winh) = self.canvas.output_size()?;
                    self.draw(&texture, imgw, imgh, winw, winh)?;
                },
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&mut self, texture: &Texture, imgw: u32, imgh: u32, winw: u32, winh: u32)
        -> Result<(), String>{
        self.canvas.clear();
        let (x, y, w, h) = fit_rect(imgw, imgh, winw, winh);
        self.canvas.copy(texture, None, Some(Rect::new(x, y, w, h)))?;
        self.canvas.present();
        Ok(())
    }
}

fn fit_rect(imgw: u32, imgh: u32, winw: u32, winh: u32) -> (i32, i32, u32, u32){
    let scale = (winw as f32 / imgw as f32).min(winh as f32 / imgh as f32);
    let w = (imgw as f32 * scale) as u32;
    let h = (imgh as f32 * scale) as u32;
    let x = (winw.saturating_sub(w) / 2) as i32;
    let y = (winh.saturating_sub(h) / 2) as i32;
    (x, y, w, h)
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn test_fit_rect(){
        let (x, y, w, h) = fit_rect(100, 100, 100, 100);
        assert_eq!((x, y, w, h), (0, 0, 100, 100));

        let (x, y, w, h) = fit_rect(50, 50, 100, 100);
        assert_eq!((x, y, w, h), (0, 0, 100, 100));

        let (x, y, w, h) = fit_rect(200, 200, 100, 100);
        assert_eq!((x, y, w, h), (0, 0, 100, 100));

        let (x, y, w, h) = fit_rect(200, 100, 100, 100);
        assert_eq!((x, y, w, h), (0, 25, 100, 50));

        let (x, y, w, h) = fit_rect(100, 200, 100, 100);
        assert_eq!((x, y, w, h), (25, 0, 50, 100));
    }
}
