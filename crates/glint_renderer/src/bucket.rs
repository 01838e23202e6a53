//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon. Pixels never depend on
//! each other, so the assembled image is identical to [`render`](crate::render).

use crate::renderer::render_pixel;
use crate::{RenderConfig, Scene};
use glint_core::ImageBuffer;
use rayon::prelude::*;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering a `width` x `height` image in row-major order.
///
/// Edge buckets are cropped to the image. A `bucket_size` of 0 is treated as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// RGBA8 pixels in row-major order within the bucket
    pub pixels: Vec<[u8; 4]>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<[u8; 4]>) -> Self {
        Self { bucket, pixels }
    }
}

/// Render a single bucket of a `width` x `height` image.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(scene, global_x, global_y, width, height, config));
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Render the entire scene with one rayon task per bucket.
pub fn render_parallel(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    let buckets = generate_buckets(width, height, config.bucket_size);
    log::debug!(
        "Rendering {}x{} in {} buckets of {}px on {} threads",
        width,
        height,
        buckets.len(),
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, width, height, config))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.blit(result.bucket.x, result.bucket.y, result.bucket.width, &result.pixels);
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reference_scene, render};

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 100, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 100);
    }

    #[test]
    fn test_row_major_order() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(
            buckets,
            vec![
                Bucket::new(0, 0, 64, 64),
                Bucket::new(64, 0, 36, 64),
                Bucket::new(0, 64, 64, 6),
                Bucket::new(64, 64, 36, 6),
            ]
        );
    }

    #[test]
    fn test_zero_bucket_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_empty_image_has_no_buckets() {
        assert!(generate_buckets(0, 10, 8).is_empty());
    }

    #[test]
    fn test_render_bucket_matches_full_render() {
        let scene = reference_scene();
        let config = RenderConfig::default();
        let full = render(&scene, 40, 30, &config);

        let bucket = Bucket::new(8, 4, 16, 10);
        let result = render_bucket(&bucket, &scene, 40, 30, &config);
        assert_eq!(result.pixels.len(), 160);
        assert_eq!(result.pixels[0], full.get(8, 4));
        assert_eq!(result.pixels[159], full.get(23, 13));
    }

    #[test]
    fn test_parallel_matches_sequential_with_partial_buckets() {
        let scene = reference_scene();
        let config = RenderConfig {
            bucket_size: 16,
            ..Default::default()
        };

        let sequential = render(&scene, 50, 37, &config);
        let parallel = render_parallel(&scene, 50, 37, &config);
        assert_eq!(sequential, parallel);
    }
}
