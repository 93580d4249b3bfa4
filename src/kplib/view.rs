use egui::{ColorImage, Context, TextureHandle, TextureOptions, ViewportBuilder, ViewportCommand};
use image::RgbImage;
use tracing::info;

use crate::{kperr, result::KpResult};

/// Terminal step that presents the annotated image.
pub trait DisplaySink {
    /// Blocks until the image is no longer shown.
    fn show(&mut self, title: &str, im: &RgbImage) -> KpResult<()>;
}

pub fn image_2_colorimage(im: &RgbImage) -> ColorImage {
    ColorImage::from_rgb([im.width() as usize, im.height() as usize], im.as_raw())
}

pub fn is_any_key_pressed(events: &[egui::Event]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
}

struct ImageApp {
    color_image: Option<ColorImage>,
    texture: Option<TextureHandle>,
}

impl ImageApp {
    fn texture(&mut self, ctx: &Context) -> Option<&TextureHandle> {
        if let Some(color_image) = self.color_image.take() {
            self.texture = Some(ctx.load_texture("image", color_image, TextureOptions::NEAREST));
        }
        self.texture.as_ref()
    }
}

impl eframe::App for ImageApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        if ctx.input(|i| is_any_key_pressed(&i.events)) {
            info!("key pressed, closing window");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
        let texture = self.texture(ctx).cloned();
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let Some(texture) = texture {
                    let sized_image =
                        egui::load::SizedTexture::new(texture.id(), texture.size_vec2());
                    ui.add(egui::Image::from_texture(sized_image).shrink_to_fit());
                }
            });
    }
}

/// Native window rendered with egui.
#[derive(Default)]
pub struct EguiDisplay;

impl DisplaySink for EguiDisplay {
    fn show(&mut self, title: &str, im: &RgbImage) -> KpResult<()> {
        let native_options = eframe::NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(title)
                .with_inner_size([im.width() as f32, im.height() as f32]),
            ..Default::default()
        };
        let app = ImageApp {
            color_image: Some(image_2_colorimage(im)),
            texture: None,
        };
        info!("showing {}x{} image in window '{title}'", im.width(), im.height());
        eframe::run_native(title, native_options, Box::new(move |_| Box::new(app)))
            .map_err(|e| kperr!("could not show window '{title}', {e:?}"))?;
        info!("window '{title}' closed");
        Ok(())
    }
}
