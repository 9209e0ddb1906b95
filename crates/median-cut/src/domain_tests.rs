//! Domain-critical regression tests for median-cut.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{MedianCutQuantizer, QuantizeError};
    use crate::color::Rgb;
    use crate::palette::{PaletteBuilder, PaletteSize};
    use crate::partition::partition;
    use pretty_assertions::assert_eq;

    /// Small deterministic generator so the tests need no extra crates.
    struct Lcg(u64);

    impl Lcg {
        fn next_u8(&mut self) -> u8 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (self.0 >> 56) as u8
        }

        fn color(&mut self) -> Rgb {
            Rgb::new(self.next_u8(), self.next_u8(), self.next_u8())
        }
    }

    fn noise_image(width: usize, height: usize, seed: u64) -> Vec<Rgb> {
        let mut rng = Lcg(seed);
        (0..width * height).map(|_| rng.color()).collect()
    }

    fn quantizer(n: usize) -> MedianCutQuantizer {
        MedianCutQuantizer::new(PaletteSize::new(n).unwrap())
    }

    // ========================================================================
    // Palette size
    // ========================================================================

    /// If this breaks, it means: the recursion under- or over-produces leaves
    /// for images that have at least as many pixels as palette slots.
    #[test]
    fn test_palette_has_exactly_n_entries() {
        let pixels = noise_image(16, 16, 7);
        for depth in 0..=8 {
            let n = 1usize << depth;
            let image = quantizer(n).quantize(&pixels, 16, 16).unwrap();
            assert_eq!(image.palette().len(), n, "palette length for n={n}");
            assert_eq!(
                image.palette().filled(),
                n,
                "REGRESSION: {n} slots but only {} leaves from 256 pixels",
                image.palette().filled()
            );
        }
    }

    /// If this breaks, it means: an image whose pixel count equals the
    /// palette size no longer gives every pixel its own leaf.
    #[test]
    fn test_pixel_count_equal_to_palette_size() {
        let pixels = noise_image(4, 2, 99);
        let image = quantizer(8).quantize(&pixels, 4, 2).unwrap();
        assert_eq!(image.palette().filled(), 8);

        let mut palette = image.palette().colors().to_vec();
        let mut source = pixels.clone();
        palette.sort_by_key(|c| c.to_bytes());
        source.sort_by_key(|c| c.to_bytes());
        assert_eq!(palette, source, "each single-pixel leaf is the pixel itself");
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, it means: something in the pipeline (most likely the
    /// sort) is no longer deterministic, so repeated runs give different
    /// palettes or index grids.
    #[test]
    fn test_quantization_is_deterministic() {
        // Few distinct values so channel ties are everywhere
        let mut rng = Lcg(42);
        let pixels: Vec<Rgb> = (0..32 * 32)
            .map(|_| Rgb::new(rng.next_u8() & 0xC0, rng.next_u8() & 0xC0, rng.next_u8() & 0xC0))
            .collect();

        for n in [2, 16, 64] {
            let first = quantizer(n).quantize(&pixels, 32, 32).unwrap();
            let second = quantizer(n).quantize(&pixels, 32, 32).unwrap();
            assert_eq!(first.palette(), second.palette());
            assert_eq!(first.grid(), second.grid());
        }
    }

    /// If this breaks, it means: the splitting sort stopped being stable.
    /// Equal-key pixels must keep their input order, which decides which
    /// side of the cut they land on.
    #[test]
    fn test_stable_sort_decides_the_split() {
        // Red ties everywhere; green tags the input order.
        let mut working = vec![
            Rgb::new(5, 10, 0),
            Rgb::new(5, 200, 0),
            Rgb::new(5, 30, 0),
            Rgb::new(0, 120, 0),
        ];
        // Green is widest (190), so the sort is by green:
        // 10, 30, 120, 200 -> left [10, 30], right [120, 200]
        let mut palette = Vec::new();
        partition(&mut working, 0, 3, 1, &mut palette).unwrap();
        assert_eq!(palette, vec![Rgb::new(5, 20, 0), Rgb::new(2, 160, 0)]);

        // Now force a red sort with ties: input order must survive within red=5.
        let mut working = vec![
            Rgb::new(5, 1, 0),
            Rgb::new(5, 2, 0),
            Rgb::new(0, 3, 0),
            Rgb::new(5, 4, 0),
            Rgb::new(5, 5, 0),
            Rgb::new(9, 6, 0),
        ];
        let mut palette = Vec::new();
        partition(&mut working, 0, 5, 1, &mut palette).unwrap();
        let tags: Vec<u8> = working.iter().map(|c| c.g()).collect();
        assert_eq!(tags, vec![3, 1, 2, 4, 5, 6]);
        assert_eq!(palette, vec![Rgb::new(2, 2, 0), Rgb::new(7, 5, 0)]);
    }

    // ========================================================================
    // Nearest-color mapping
    // ========================================================================

    /// If this breaks, it means: the mapper assigns a palette index that is
    /// not the closest by squared distance, or breaks ties toward a later
    /// index.
    #[test]
    fn test_every_pixel_gets_its_nearest_lowest_index() {
        let pixels = noise_image(24, 12, 2024);
        for n in [4, 32] {
            let image = quantizer(n).quantize(&pixels, 24, 12).unwrap();
            let colors = image.palette().colors();

            for (pixel, &idx) in pixels.iter().zip(image.grid().indices()) {
                let idx = idx as usize;
                assert!(idx < n, "index {idx} out of range for {n} colors");
                let chosen = pixel.distance_sq(colors[idx]);
                for (other, &entry) in colors.iter().enumerate() {
                    let d = pixel.distance_sq(entry);
                    assert!(chosen <= d, "pixel {pixel} mapped to {idx} but {other} is closer");
                    if other < idx {
                        assert!(
                            d > chosen,
                            "pixel {pixel}: index {other} ties with chosen {idx}; lowest must win"
                        );
                    }
                }
            }
        }
    }

    // ========================================================================
    // Worked scenarios
    // ========================================================================

    /// If this breaks, it means: the leaf formula no longer collapses to the
    /// pixel itself for a single-pixel box.
    #[test]
    fn test_single_pixel_round_trip() {
        let image = quantizer(1).quantize(&[Rgb::new(200, 10, 50)], 1, 1).unwrap();
        assert_eq!(image.palette().colors(), &[Rgb::new(200, 10, 50)]);
        assert_eq!(image.grid().indices(), &[0]);
    }

    /// If this breaks, it means: zero-spread boxes crash the partitioner, or
    /// duplicate palette entries no longer resolve to the first index.
    #[test]
    fn test_uniform_image_maps_to_first_entry() {
        let color = Rgb::new(10, 20, 30);
        let pixels = vec![color; 16];
        let image = quantizer(4).quantize(&pixels, 4, 4).unwrap();

        assert_eq!(image.palette().colors(), &[color; 4]);
        assert!(image.grid().indices().iter().all(|&i| i == 0));
    }

    /// If this breaks, it means: channel selection no longer prefers red on
    /// a tie. Red and green both span 0..=255 here; cutting on red emits the
    /// low-red box first, cutting on green would emit it second.
    #[test]
    fn test_red_wins_channel_ties() {
        let pixels = [
            Rgb::new(0, 255, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(255, 0, 0),
        ];
        let image = quantizer(2).quantize(&pixels, 4, 1).unwrap();
        assert_eq!(
            image.palette().colors(),
            &[Rgb::new(0, 255, 0), Rgb::new(255, 0, 0)]
        );
        assert_eq!(image.grid().indices(), &[0, 1, 0, 1]);

        let reds_only = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 0, 0),
        ];
        let image = quantizer(2).quantize(&reds_only, 4, 1).unwrap();
        assert_eq!(
            image.palette().colors(),
            &[Rgb::new(0, 0, 0), Rgb::new(255, 0, 0)]
        );
    }

    /// If this breaks, it means: palette slots can be left undefined when the
    /// image has few distinct colors.
    #[test]
    fn test_two_color_image_fills_all_slots() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        let pixels: Vec<Rgb> = (0..16).map(|i| if i % 2 == 0 { black } else { white }).collect();

        let image = quantizer(8).quantize(&pixels, 4, 4).unwrap();
        assert_eq!(image.palette().len(), 8);
        assert_eq!(image.palette().filled(), 8);
        for &entry in image.palette().colors() {
            assert!(entry == black || entry == white, "unexpected entry {entry}");
        }
        for (pixel, &idx) in pixels.iter().zip(image.grid().indices()) {
            assert_eq!(image.palette().colors()[idx as usize], *pixel);
        }
    }

    /// If this breaks, it means: an image smaller than the palette either
    /// crashes the recursion or leaves slots without a color.
    #[test]
    fn test_tiny_image_pads_with_black() {
        let pixels = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
        let image = quantizer(8).quantize(&pixels, 2, 1).unwrap();
        assert_eq!(image.palette().len(), 8);
        assert_eq!(image.palette().filled(), 2);
        assert!(image.palette().colors()[2..].iter().all(|&c| c == Rgb::BLACK));
        assert_eq!(image.grid().indices(), &[1, 0]);
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// If this breaks, it means: invalid requests reach the partitioner
    /// instead of being rejected up front.
    #[test]
    fn test_invalid_requests_fail_early() {
        assert_eq!(
            PaletteSize::new(6),
            Err(QuantizeError::InvalidPaletteSize { requested: 6 })
        );
        assert_eq!(
            PaletteBuilder::new(PaletteSize::new(2).unwrap()).build(&mut []),
            Err(QuantizeError::EmptyInput)
        );
        assert_eq!(
            quantizer(2).quantize(&[], 4, 4),
            Err(QuantizeError::EmptyInput)
        );
    }
}
