//! Batch quantization driver
//!
//! Runs every requested palette size over every input file and writes one
//! BMP (and optionally one PNG preview) per run.

use median_cut::{MedianCutQuantizer, Palette, PaletteSize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::AppError;
use crate::models::{AppConfig, PaletteRequest};
use crate::rendering::{write_bmp, write_png};
use crate::services::raw_reader::{read_raw, RawImage};

/// Outcome of one (input, palette size) run
#[derive(Debug, Clone)]
pub struct JobReport {
    pub input: PathBuf,
    pub colors: PaletteSize,
    pub output: PathBuf,
    pub preview: Option<PathBuf>,
    /// Palette entries that came from the image (the rest are black padding)
    pub filled: usize,
    pub elapsed: Duration,
}

pub struct QuantizePipeline {
    config: AppConfig,
}

impl QuantizePipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Output path for `image` quantized to `colors`: `<dir>/<stem>_<colors>.<ext>`
    pub fn output_path(&self, image: &RawImage, colors: PaletteSize, ext: &str) -> PathBuf {
        let dir = match &self.config.output_dir {
            Some(dir) => dir.clone(),
            None => image
                .spec
                .path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        dir.join(format!("{}_{}.{}", image.spec.stem(), colors, ext))
    }

    /// Quantize every input at every requested size.
    ///
    /// Stops at the first failure; files already written stay on disk.
    pub fn run(
        &self,
        inputs: &[PathBuf],
        request: &PaletteRequest,
    ) -> Result<Vec<JobReport>, AppError> {
        if let Some(dir) = &self.config.output_dir {
            std::fs::create_dir_all(dir)?;
        }

        let mut reports = Vec::new();
        for input in inputs {
            let image = read_raw(input)?;
            for colors in request.sizes() {
                reports.push(self.run_one(&image, colors)?);
            }
        }
        Ok(reports)
    }

    /// Quantize one loaded image to one palette size and write the outputs
    pub fn run_one(&self, image: &RawImage, colors: PaletteSize) -> Result<JobReport, AppError> {
        let started = Instant::now();
        tracing::info!(
            input = %image.spec.path.display(),
            width = image.width(),
            height = image.height(),
            colors = colors.get(),
            "Quantizing"
        );

        let quantized = MedianCutQuantizer::new(colors).quantize(
            &image.pixels,
            image.width(),
            image.height(),
        )?;
        let filled = quantized.palette().filled();
        if filled < colors.get() {
            tracing::warn!(
                filled,
                colors = colors.get(),
                "Image has fewer pixels than palette slots; padding with black"
            );
        }

        let output = self.output_path(image, colors, "bmp");
        let bytes = write_bmp(&output, &quantized)?;

        let preview = if self.config.preview {
            let path = self.output_path(image, colors, "png");
            write_png(&path, &quantized)?;
            Some(path)
        } else {
            None
        };

        let elapsed = started.elapsed();
        tracing::info!(
            output = %output.display(),
            bytes,
            elapsed_ms = elapsed.as_millis() as u64,
            "Wrote quantized image"
        );

        Ok(JobReport {
            input: image.spec.path.clone(),
            colors,
            output,
            preview,
            filled,
            elapsed,
        })
    }

    /// Build only the palette for one input file
    pub fn palette_for(&self, input: &Path, colors: PaletteSize) -> Result<Palette, AppError> {
        let image = read_raw(input)?;
        Ok(MedianCutQuantizer::new(colors).palette(&image.pixels)?)
    }
}
