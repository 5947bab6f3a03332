//! Tests for pixel sources over decoded images and in-memory grids

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use terramap::classify::color::RgbSample;
    use terramap::classify::voter::{PixelRead, PixelSource};
    use terramap::spatial::raster::PixelGrid;

    // Tests decoded images report in-bounds pixels and their dimensions
    // Verified by swapping x and y in the lookup
    #[test]
    fn test_rgb_image_reads() {
        let mut img = RgbImage::from_pixel(4, 2, Rgb([0, 0, 0]));
        img.put_pixel(3, 1, Rgb([10, 20, 30]));

        assert_eq!(PixelSource::dimensions(&img), (4, 2));
        assert_eq!(
            img.read(3, 1),
            PixelRead::Color(RgbSample::new(10, 20, 30))
        );
        assert_eq!(img.read(0, 0), PixelRead::Color(RgbSample::new(0, 0, 0)));
    }

    // Tests coordinates outside a decoded image are reported, not panicked on
    // Verified by casting negative coordinates to u32
    #[test]
    fn test_rgb_image_out_of_bounds() {
        let img = RgbImage::new(4, 2);
        assert_eq!(img.read(4, 0), PixelRead::OutOfBounds);
        assert_eq!(img.read(0, 2), PixelRead::OutOfBounds);
        assert_eq!(img.read(-1, 0), PixelRead::OutOfBounds);
        assert_eq!(img.read(0, -1), PixelRead::OutOfBounds);
        assert_eq!(img.read(i64::MAX, 0), PixelRead::OutOfBounds);
    }

    // Tests in-memory grids are indexed by x then y
    // Verified by transposing the grid lookup
    #[test]
    fn test_pixel_grid_reads() {
        let mut grid = PixelGrid::filled(3, 2, RgbSample::new(1, 1, 1));
        grid.set(2, 1, RgbSample::new(9, 9, 9));
        grid.set(7, 7, RgbSample::new(5, 5, 5));

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.pixels().dim(), (2, 3));
        assert_eq!(grid.read(2, 1), PixelRead::Color(RgbSample::new(9, 9, 9)));
        assert_eq!(grid.read(1, 2), PixelRead::OutOfBounds);
        assert_eq!(grid.read(-1, 1), PixelRead::OutOfBounds);
    }
}
