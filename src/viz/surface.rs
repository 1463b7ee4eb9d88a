//! Where a laid-out chart ends up: a file, an in-memory SVG, or a viewer window.

use log::info;
use std::path::{Path, PathBuf};

use super::scene::Scene;
use super::types::RenderOptions;
use super::{scene_to_rgb, scene_to_svg, write_scene};
use crate::display;
use crate::error::Result;

/// Presents a scene. Implementations decide whether this blocks.
pub trait Surface {
    fn present(&mut self, scene: &Scene, opts: &RenderOptions) -> Result<()>;
}

/// Headless output: writes an SVG (by extension) or bitmap file and returns.
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for FileSurface {
    fn present(&mut self, scene: &Scene, opts: &RenderOptions) -> Result<()> {
        write_scene(scene, &self.path, opts)?;
        info!(
            "wrote {}x{} chart with {} series to {}",
            opts.width,
            opts.height,
            scene.lines.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Keeps the SVG document of the last presented scene in memory.
#[derive(Debug, Default, Clone)]
pub struct SvgSurface {
    svg: Option<String>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The SVG of the last presented scene, if any.
    pub fn svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }

    pub fn into_svg(self) -> Option<String> {
        self.svg
    }
}

impl Surface for SvgSurface {
    fn present(&mut self, scene: &Scene, opts: &RenderOptions) -> Result<()> {
        self.svg = Some(scene_to_svg(scene, opts)?);
        Ok(())
    }
}

/// Interactive output: opens a native window and blocks until it is closed.
#[derive(Debug, Clone)]
pub struct WindowSurface {
    title: String,
}

impl WindowSurface {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Surface for WindowSurface {
    fn present(&mut self, scene: &Scene, opts: &RenderOptions) -> Result<()> {
        let rgb = scene_to_rgb(scene, opts)?;
        info!("opening chart window '{}'", self.title);
        display::show(rgb, opts.width, opts.height, &self.title)
    }
}
