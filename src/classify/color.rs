//! RGB samples and the distance metric used for palette matching

/// One pixel's color as read from a source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbSample {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbSample {
    /// Create a sample from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array in `[r, g, b]` order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Unweighted Euclidean distance in RGB space
    pub fn distance(self, other: Self) -> f64 {
        self.squared_distance(other).sqrt()
    }

    fn squared_distance(self, other: Self) -> f64 {
        self.channels()
            .iter()
            .zip(other.channels())
            .map(|(&a, b)| {
                let delta = f64::from(a) - f64::from(b);
                delta * delta
            })
            .sum()
    }
}

impl From<[u8; 3]> for RgbSample {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<image::Rgb<u8>> for RgbSample {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}
