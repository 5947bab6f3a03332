//! Tests for source image decoding and PNG export

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;
    use terramap::MapError;
    use terramap::io::image::{export_png, load_rgb_image};

    // Tests decoded images keep their size and colors
    // Verified by converting to grayscale on load
    #[test]
    fn test_load_rgb_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("source.png");
        let mut img = RgbImage::from_pixel(5, 3, Rgb([99, 155, 255]));
        img.put_pixel(4, 2, Rgb([185, 122, 87]));
        img.save(&path).unwrap();

        let loaded = load_rgb_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (5, 3));
        assert_eq!(loaded.get_pixel(4, 2), &Rgb([185, 122, 87]));
    }

    // Tests alpha is dropped when decoding RGBA sources
    // Verified by premultiplying alpha on load
    #[test]
    fn test_load_drops_alpha() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("alpha.png");
        RgbaImage::from_pixel(2, 2, Rgba([34, 177, 76, 10]))
            .save(&path)
            .unwrap();

        let loaded = load_rgb_image(&path).unwrap();
        assert_eq!(loaded.get_pixel(0, 0), &Rgb([34, 177, 76]));
    }

    // Tests BMP sources are decoded as well as PNG
    // Verified by disabling the bmp codec
    #[test]
    fn test_load_bmp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("source.bmp");
        RgbImage::from_pixel(3, 3, Rgb([230, 230, 230]))
            .save(&path)
            .unwrap();

        let loaded = load_rgb_image(&path).unwrap();
        assert_eq!(loaded.get_pixel(1, 1), &Rgb([230, 230, 230]));
    }

    // Tests missing files report the requested path
    // Verified by reporting a placeholder path
    #[test]
    fn test_load_missing_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.png");
        match load_rgb_image(&path) {
            Err(MapError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => unreachable!("Expected ImageLoad, got {other:?}"),
        }
    }

    // Tests PNG export creates missing parent directories
    // Verified by removing directory creation
    #[test]
    fn test_export_png_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("view.png");
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 100, 0, 255]));

        export_png(&img, &path).unwrap();

        assert!(path.exists());
        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reloaded.get_pixel(3, 3), &Rgba([0, 100, 0, 255]));
    }
}
