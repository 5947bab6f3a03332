//! Tests for map rendering and the artifact viewer

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use terramap::MapError;
    use terramap::render::colors::{BACKGROUND_COLOR, FALLBACK_COLOR, SymbolColors};
    use terramap::render::viewer::{MapViewer, SurfaceSize, ViewOutcome, render_map};
    use terramap::spatial::OutputMap;

    fn map(text: &str) -> OutputMap {
        OutputMap::from_text(text).unwrap()
    }

    // Tests zero-sized surfaces are rejected
    // Verified by accepting zero height
    #[test]
    fn test_surface_size_validation() {
        assert!(SurfaceSize::new(0, 10).is_err());
        assert!(matches!(
            SurfaceSize::new(10, 0),
            Err(MapError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
        let default = SurfaceSize::default();
        assert_eq!((default.width(), default.height()), (800, 650));
    }

    // Tests each quadrant of a 2x2 map takes its symbol color
    // Verified by transposing rows and columns
    #[test]
    fn test_render_quadrants() {
        let colors = SymbolColors::default();
        let surface = SurfaceSize::new(40, 20).unwrap();
        let img = render_map(&map("GA\nMS\n"), surface, &colors);

        assert_eq!(img.dimensions(), (40, 20));
        assert_eq!(img.get_pixel(5, 5).0, colors.lookup('G'));
        assert_eq!(img.get_pixel(35, 5).0, colors.lookup('A'));
        assert_eq!(img.get_pixel(5, 15).0, colors.lookup('M'));
        assert_eq!(img.get_pixel(35, 15).0, colors.lookup('S'));
    }

    // Tests fractional tiles still cover the whole surface
    // Verified by truncating tile sizes
    #[test]
    fn test_render_covers_surface() {
        let colors = SymbolColors::new(vec![('x', [1, 1, 1, 255])], FALLBACK_COLOR);
        let surface = SurfaceSize::new(100, 65).unwrap();
        let img = render_map(&map("xxx\nxxx\nxxx\n"), surface, &colors);

        assert!(img.pixels().all(|p| p.0 == [1, 1, 1, 255]));
    }

    // Tests unrecognized symbols are drawn in the fallback color
    // Verified by skipping unknown symbols
    #[test]
    fn test_render_unknown_symbol() {
        let img = render_map(
            &map("Z\n"),
            SurfaceSize::new(4, 4).unwrap(),
            &SymbolColors::default(),
        );
        assert_eq!(img.get_pixel(2, 2).0, FALLBACK_COLOR);
    }

    // Tests an empty map renders only the background
    // Verified by dividing by zero columns
    #[test]
    fn test_render_empty_map() {
        let img = render_map(
            &OutputMap::empty(),
            SurfaceSize::new(8, 6).unwrap(),
            &SymbolColors::default(),
        );
        assert!(img.pixels().all(|p| p.0 == BACKGROUND_COLOR));
    }

    // Tests viewing a stored artifact writes a PNG of the surface size
    // Verified by reading from the wrong folder
    #[test]
    fn test_view_renders_artifact() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("hyrule.txt"), "GgA\nMSF\n").unwrap();
        let viewer = MapViewer::new(
            temp_dir.path().to_path_buf(),
            SurfaceSize::new(30, 20).unwrap(),
            SymbolColors::default(),
        );

        let image_path = viewer.default_image_path("hyrule.txt");
        assert_eq!(image_path, temp_dir.path().join("hyrule.png"));

        let outcome = viewer.view("hyrule.txt", &image_path).unwrap();
        assert_eq!(
            outcome,
            ViewOutcome::Rendered {
                map_path: temp_dir.path().join("hyrule.txt"),
                image_path: image_path.clone(),
                rows: 2,
                cols: 3,
            }
        );

        let saved = image::open(&image_path).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (30, 20));
        assert_eq!(saved.get_pixel(25, 15).0, SymbolColors::default().lookup('F'));
    }

    // Tests a missing artifact is reported instead of failing
    // Verified by propagating the not-found error
    #[test]
    fn test_view_missing_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let viewer = MapViewer::new(
            temp_dir.path().to_path_buf(),
            SurfaceSize::default(),
            SymbolColors::default(),
        );
        let image_path = temp_dir.path().join("never.png");

        let outcome = viewer.view("masmorra9.txt", &image_path).unwrap();
        assert_eq!(
            outcome,
            ViewOutcome::NotFound {
                map_path: temp_dir.path().join("masmorra9.txt"),
            }
        );
        assert!(!image_path.exists());
    }

    // Tests malformed artifacts surface as errors
    // Verified by rendering ragged rows
    #[test]
    fn test_view_malformed_artifact() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("bad.txt"), "GG\nG\n").unwrap();
        let viewer = MapViewer::new(
            temp_dir.path().to_path_buf(),
            SurfaceSize::default(),
            SymbolColors::default(),
        );

        let result = viewer.view("bad.txt", &temp_dir.path().join("bad.png"));
        assert!(matches!(result, Err(MapError::MalformedMap { line: 2, .. })));
    }
}
