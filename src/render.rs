//! The sampling loop: one camera ray per pixel center, one intersection test
//! against the scene's sphere, and a write of the sphere color on a hit.
//! Pixels that miss keep whatever the framebuffer already holds.
//!
//! A hit is the nearest root inside the ray's `[tmin, tmax]`, not the bare
//! discriminant test, so a sphere behind the camera is not drawn.

use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;

use crate::error::RenderError;
use crate::film::{Color, Framebuffer};
use crate::scene::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStats {
    pub pixels: usize,
    pub hits: usize,
    pub elapsed: Duration,
}

/// Color seen through pixel `(px, py)`, or `None` when the ray misses.
pub fn shade(scene: &Scene, px: usize, py: usize) -> Option<Color> {
    let ray = scene.camera.generate_ray(px, py);
    scene.sphere.intersect(&ray).map(|_| scene.sphere.color)
}

fn check_resolution(scene: &Scene, fb: &Framebuffer) -> Result<(), RenderError> {
    let camera = &scene.camera;
    if fb.width() != camera.width || fb.height() != camera.height {
        return Err(RenderError::ResolutionMismatch {
            width: camera.width,
            height: camera.height,
            actual_width: fb.width(),
            actual_height: fb.height(),
        });
    }
    Ok(())
}

fn render_row(scene: &Scene, py: usize, row: &mut [Color]) -> usize {
    let mut hits = 0;
    for (px, pixel) in row.iter_mut().enumerate() {
        if let Some(color) = shade(scene, px, py) {
            *pixel = color;
            hits += 1;
        }
    }
    hits
}

fn finish(fb: &Framebuffer, hits: usize, start: Instant) -> RenderStats {
    let stats = RenderStats {
        pixels: fb.pixels().len(),
        hits,
        elapsed: start.elapsed(),
    };
    info!(
        "rendered {}x{}: {} of {} pixels hit in {:?}",
        fb.width(),
        fb.height(),
        stats.hits,
        stats.pixels,
        stats.elapsed
    );
    stats
}

/// Renders on the calling thread, row by row.
pub fn render(scene: &Scene, fb: &mut Framebuffer) -> Result<RenderStats, RenderError> {
    check_resolution(scene, fb)?;
    debug!("rendering sequentially, sphere {}", scene.sphere);

    let start = Instant::now();
    let width = fb.width();
    let hits: usize = fb
        .pixels_mut()
        .chunks_mut(width)
        .enumerate()
        .map(|(py, row)| render_row(scene, py, row))
        .sum();

    Ok(finish(fb, hits, start))
}

/// Renders rows on the rayon pool. Rows are disjoint slices of the
/// framebuffer, so the result is identical to [`render`].
pub fn render_parallel(scene: &Scene, fb: &mut Framebuffer) -> Result<RenderStats, RenderError> {
    check_resolution(scene, fb)?;
    debug!(
        "rendering on {} threads, sphere {}",
        rayon::current_num_threads(),
        scene.sphere
    );

    let start = Instant::now();
    let width = fb.width();
    let hits: usize = fb
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .map(|(py, row)| render_row(scene, py, row))
        .sum();

    Ok(finish(fb, hits, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneConfig;
    use std::collections::VecDeque;

    fn reference_scene() -> Scene {
        SceneConfig::default().build().unwrap()
    }

    fn sphere_mask(scene: &Scene, fb: &Framebuffer) -> Vec<bool> {
        fb.pixels()
            .iter()
            .map(|&p| {
                if p == scene.sphere.color {
                    true
                } else {
                    assert_eq!(p, scene.background);
                    false
                }
            })
            .collect()
    }

    /// Size of the 4-connected region containing `start`.
    fn flood_fill(mask: &[bool], width: usize, height: usize, start: (usize, usize)) -> usize {
        let mut seen = vec![false; mask.len()];
        let mut queue = VecDeque::new();
        let mut size = 0;
        queue.push_back(start);
        seen[start.1 * width + start.0] = true;
        while let Some((x, y)) = queue.pop_front() {
            size += 1;
            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push((x - 1, y));
            }
            if x + 1 < width {
                neighbours.push((x + 1, y));
            }
            if y > 0 {
                neighbours.push((x, y - 1));
            }
            if y + 1 < height {
                neighbours.push((x, y + 1));
            }
            for (nx, ny) in neighbours {
                let i = ny * width + nx;
                if mask[i] && !seen[i] {
                    seen[i] = true;
                    queue.push_back((nx, ny));
                }
            }
        }
        size
    }

    #[test]
    fn reference_scene_draws_one_centered_disc() {
        let scene = reference_scene();
        let mut fb = scene.framebuffer();
        let stats = render(&scene, &mut fb).unwrap();

        let (w, h) = (fb.width(), fb.height());
        let mask = sphere_mask(&scene, &fb);
        let hits = mask.iter().filter(|&&m| m).count();
        assert_eq!(stats.hits, hits);
        assert_eq!(stats.pixels, w * h);

        // the silhouette has angular radius asin(3/8), i.e. a disc of radius
        // 3 * tan(asin(3/8)) on the plane at focal length 3, 0.01 per pixel
        let angle = (3.0f64 / 8.0).asin();
        let radius_px = 3.0 * angle.tan() / 0.01;
        let expected = std::f64::consts::PI * radius_px * radius_px;
        assert!(
            (hits as f64 - expected).abs() / expected < 0.02,
            "{} hits, expected about {}",
            hits,
            expected
        );

        let (mut sx, mut sy) = (0.0f64, 0.0f64);
        for y in 0..h {
            for x in 0..w {
                if mask[y * w + x] {
                    sx += x as f64;
                    sy += y as f64;
                }
            }
        }
        let center = (w as f64 - 1.0) / 2.0;
        assert!((sx / hits as f64 - center).abs() < 0.5);
        assert!((sy / hits as f64 - center).abs() < 0.5);

        assert_eq!(flood_fill(&mask, w, h, (w / 2, h / 2)), hits);

        // corners stay background
        assert_eq!(fb.get(0, 0), scene.background);
        assert_eq!(fb.get(w - 1, h - 1), scene.background);
    }

    #[test]
    fn parallel_matches_sequential() {
        let scene = SceneConfig {
            width: 64,
            height: 48,
            pixel_width: 0.05,
            pixel_height: 0.05,
            sphere_center: [0.5, -0.25, 0.0],
            ..SceneConfig::default()
        }
        .build()
        .unwrap();

        let mut sequential = scene.framebuffer();
        let mut parallel = scene.framebuffer();
        let a = render(&scene, &mut sequential).unwrap();
        let b = render_parallel(&scene, &mut parallel).unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(a.hits, b.hits);
        assert!(a.hits > 0);
    }

    #[test]
    fn misses_leave_existing_pixels_untouched() {
        let scene = SceneConfig {
            width: 8,
            height: 8,
            sphere_center: [100.0, 0.0, 0.0],
            ..SceneConfig::default()
        }
        .build()
        .unwrap();

        let marker = Color::new(0.1, 0.2, 0.3);
        let mut fb = Framebuffer::new(8, 8, marker);
        let stats = render(&scene, &mut fb).unwrap();
        assert_eq!(stats.hits, 0);
        assert!(fb.pixels().iter().all(|&p| p == marker));
    }

    #[test]
    fn sphere_behind_camera_is_invisible() {
        let scene = SceneConfig {
            width: 16,
            height: 16,
            camera_position: [0.0, 0.0, 8.0],
            ..SceneConfig::default()
        }
        .build()
        .unwrap();
        let mut fb = scene.framebuffer();
        assert_eq!(render(&scene, &mut fb).unwrap().hits, 0);
    }

    #[test]
    fn rejects_mismatched_framebuffer() {
        let scene = reference_scene();
        let mut fb = Framebuffer::new(10, 10, scene.background);
        assert!(matches!(
            render_parallel(&scene, &mut fb),
            Err(RenderError::ResolutionMismatch { width: 400, actual_width: 10, .. })
        ));
    }

    #[test]
    fn shade_center_and_corner() {
        let scene = reference_scene();
        assert_eq!(shade(&scene, 200, 200), Some(scene.sphere.color));
        assert_eq!(shade(&scene, 0, 0), None);
    }
}
