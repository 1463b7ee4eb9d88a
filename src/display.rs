//! Native viewer window for a rasterized chart.

use eframe::egui;

use crate::error::{RenderError, Result};

/// Show a packed RGB image (`width * height * 3` bytes) in a window.
///
/// Blocks until the window is closed. Fails with [`RenderError::Display`] when no
/// window can be created, e.g. on a machine without a graphical session.
pub fn show(rgb: Vec<u8>, width: u32, height: u32, title: &str) -> Result<()> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(RenderError::Display(format!(
            "image buffer has {} bytes, expected {expected}",
            rgb.len()
        )));
    }

    let image = egui::ColorImage::from_rgb([width as usize, height as usize], &rgb);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([320.0, 200.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartViewer::new(image)))),
    )
    .map_err(|e| RenderError::Display(e.to_string()))
}

/// Holds the image until the first frame uploads it as a texture.
struct ChartViewer {
    pending: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
}

impl ChartViewer {
    fn new(image: egui::ColorImage) -> Self {
        Self {
            pending: Some(image),
            texture: None,
        }
    }
}

impl eframe::App for ChartViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(image) = self.pending.take() {
            self.texture = Some(ctx.load_texture("chart", image, egui::TextureOptions::LINEAR));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    ui.centered_and_justified(|ui| {
                        ui.add(
                            egui::Image::from_texture(egui::load::SizedTexture::from_handle(
                                texture,
                            ))
                            .shrink_to_fit(),
                        );
                    });
                }
            });
    }
}
