//! A small ray tracer core: point/vector algebra, rays, a sphere primitive and
//! a per-pixel sampling loop that fills a framebuffer.
//!
//! ```
//! use tfrt::render::render;
//! use tfrt::scene::SceneConfig;
//!
//! let scene = SceneConfig { width: 32, height: 32, pixel_width: 0.1, pixel_height: 0.1, ..SceneConfig::default() }
//!     .build()
//!     .unwrap();
//! let mut framebuffer = scene.framebuffer();
//! let stats = render(&scene, &mut framebuffer).unwrap();
//! assert!(stats.hits > 0);
//! assert_eq!(framebuffer.get(16, 16), scene.sphere.color);
//! ```

pub mod camera;
pub mod error;
pub mod film;
pub mod logger;
pub mod math;
pub mod output;
pub mod ray;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod vecmath;
