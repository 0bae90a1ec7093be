//! Renderable figures for the PNG writer (enabled with `--features png`).
//!
//! A [`Figure`] only has to produce an RGBA raster for a given canvas size;
//! [`LineFigure`] is the built-in implementation: line series scaled into a
//! framed plot area.

use dataslot_core::config::PngConfig;
use image::{Rgba, RgbaImage};

use crate::error::Result;

pub trait Figure {
    /// Rasterize onto a `config.width` x `config.height` canvas.
    fn render(&self, config: &PngConfig) -> Result<RgbaImage>;
}

/// Series colors, cycled in insertion order.
pub const SERIES_COLORS: [Rgba<u8>; 6] = [
    Rgba([31, 119, 180, 255]),  // blue
    Rgba([255, 127, 14, 255]),  // orange
    Rgba([44, 160, 44, 255]),   // green
    Rgba([214, 39, 40, 255]),   // red
    Rgba([148, 103, 189, 255]), // purple
    Rgba([140, 86, 75, 255]),   // brown
];

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FRAME: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Fraction of the canvas left blank on each side of the plot area.
const MARGIN: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: Rgba<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineFigure {
    series: Vec<Series>,
}

impl LineFigure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series from parallel x/y slices; extra values on either side are ignored.
    pub fn plot(&mut self, label: impl Into<String>, xs: &[f64], ys: &[f64]) -> &mut Self {
        let color = SERIES_COLORS[self.series.len() % SERIES_COLORS.len()];
        self.series.push(Series {
            label: label.into(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            color,
        });
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Bounding box of all finite points, padded when degenerate.
    fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut finite = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .peekable();
        let &&(x0, y0) = finite.peek()?;
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
        for &(x, y) in finite {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if x_max == x_min {
            x_min -= 0.5;
            x_max += 0.5;
        }
        if y_max == y_min {
            y_min -= 0.5;
            y_max += 0.5;
        }
        Some((x_min, x_max, y_min, y_max))
    }
}

impl Figure for LineFigure {
    fn render(&self, config: &PngConfig) -> Result<RgbaImage> {
        let mut img = RgbaImage::from_pixel(config.width, config.height, BACKGROUND);
        let (w, h) = (config.width as f64, config.height as f64);
        let left = (w * MARGIN).floor();
        let right = (w * (1.0 - MARGIN)).ceil() - 1.0;
        let top = (h * MARGIN).floor();
        let bottom = (h * (1.0 - MARGIN)).ceil() - 1.0;

        draw_line(&mut img, (left, top), (left, bottom), FRAME);
        draw_line(&mut img, (left, bottom), (right, bottom), FRAME);

        let Some((x_min, x_max, y_min, y_max)) = self.bounds() else {
            return Ok(img);
        };
        let to_pixel = |(x, y): (f64, f64)| {
            let px = left + (x - x_min) / (x_max - x_min) * (right - left);
            let py = bottom - (y - y_min) / (y_max - y_min) * (bottom - top);
            (px, py)
        };

        for series in &self.series {
            // Non-finite points break the polyline.
            let mut prev: Option<(f64, f64)> = None;
            for &point in &series.points {
                if !(point.0.is_finite() && point.1.is_finite()) {
                    prev = None;
                    continue;
                }
                let p = to_pixel(point);
                match prev {
                    Some(q) => draw_line(&mut img, q, p, series.color),
                    None => put(&mut img, p.0 as i64, p.1 as i64, series.color),
                }
                prev = Some(p);
            }
        }
        Ok(img)
    }
}

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line between two pixel positions; off-canvas pixels are skipped.
fn draw_line(img: &mut RgbaImage, from: (f64, f64), to: (f64, f64), color: Rgba<u8>) {
    let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
    let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
