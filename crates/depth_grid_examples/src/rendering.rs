use std::path::Path;

use depth_grid::prelude::*;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Rendering options for [`render_overlay_to_png`].
#[derive(Clone, Debug)]
pub struct OverlayStyle {
    /// Depth mapped to black in the background shading.
    pub max_depth: f32,
    /// Color of pixels that hit nothing.
    pub sky: [u8; 3],
    /// Outline color of regions whose sample had no hit.
    pub no_hit: [u8; 3],
    /// Half length of the center crosshair, in pixels.
    pub crosshair: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            max_depth: 8.0,
            sky: [170, 200, 235],
            no_hit: [128, 128, 128],
            crosshair: 12,
        }
    }
}

/// Green for near, red for far, linear in between.
fn ramp(distance: f32, max_depth: f32) -> [u8; 3] {
    let t = (distance / max_depth).clamp(0.0, 1.0);
    [(255.0 * t) as u8, (255.0 * (1.0 - t)) as u8, 40]
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

/// Draws the frame's depth as grayscale, fills each probe neighborhood with its sample's
/// color and marks the frame center, then writes a PNG.
pub fn render_overlay_to_png<F: HitTestFrame>(
    frame: &F,
    grid: &GridSpec,
    samples: &[DistanceSample],
    style: &OverlayStyle,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let FrameDimensions { width, height } = grid.dimensions;
    let mut img = RgbImage::from_fn(width, height, |x, y| {
        match probe_point(frame, x as i32, y as i32) {
            Some(d) => {
                let shade = (255.0 * (1.0 - (d / style.max_depth).clamp(0.0, 1.0))) as u8;
                Rgb([shade, shade, shade])
            }
            None => Rgb(style.sky),
        }
    });

    for sample in samples {
        let Some(area) = grid.neighborhood(sample.region_index) else {
            continue;
        };
        if sample.is_absent() {
            for p in area.pixels() {
                let on_edge = p.x == area.min.x
                    || p.y == area.min.y
                    || p.x == area.max.x - 1
                    || p.y == area.max.y - 1;
                if on_edge {
                    put(&mut img, p.x, p.y, style.no_hit);
                }
            }
        } else {
            let color = ramp(sample.distance, style.max_depth);
            for p in area.pixels() {
                put(&mut img, p.x, p.y, color);
            }
        }
    }

    let c = grid.dimensions.center();
    for d in -style.crosshair..=style.crosshair {
        put(&mut img, c.x + d, c.y, [255, 255, 255]);
        put(&mut img, c.x, c.y + d, [255, 255, 255]);
    }

    let out_path = out_path.as_ref();
    img.save(out_path)?;
    info!("Wrote overlay to {}.", out_path.display());
    Ok(())
}

/// Renders the display state as a text table, one row of region texts per line.
pub fn display_table(display: &DisplayState, cols: usize) -> String {
    display
        .regions()
        .chunks(cols.max(1))
        .map(|row| {
            row.iter()
                .map(|r| format!("{:>8}", r.as_deref().unwrap_or("-")))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_goes_from_green_to_red() {
        assert_eq!(ramp(0.0, 8.0), [0, 255, 40]);
        assert_eq!(ramp(8.0, 8.0), [255, 0, 40]);
        assert_eq!(ramp(100.0, 8.0), [255, 0, 40]);
    }

    #[test]
    fn display_table_marks_missing_values() {
        let mut display = DisplayState::new(4);
        display.publish(0, 1.5);
        display.publish(3, 2.0);
        assert_eq!(
            display_table(&display, 2),
            "     1.5        -\n       -        2"
        );
    }
}
