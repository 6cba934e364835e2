//! Galaxy color palette

/// An RGB color triple
pub type Rgb = [u8; 3];

/// The four colors every galaxy render is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Bright center of the galaxy
    pub core: Rgb,
    /// Spiral-arm tone between core and rim
    pub mid: Rgb,
    /// Deep-space rim and vignette background
    pub outer: Rgb,
    /// Base color of the star overlay
    pub star: Rgb,
}

impl Palette {
    /// Cosmic Spectrum violet palette
    pub const COSMIC: Palette = Palette {
        core: [230, 214, 255],
        mid: [170, 90, 255],
        outer: [32, 6, 66],
        star: [245, 228, 255],
    };

    pub(crate) fn core_f32(&self) -> [f32; 3] {
        to_f32(self.core)
    }

    pub(crate) fn mid_f32(&self) -> [f32; 3] {
        to_f32(self.mid)
    }

    pub(crate) fn outer_f32(&self) -> [f32; 3] {
        to_f32(self.outer)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::COSMIC
    }
}

#[inline]
fn to_f32(c: Rgb) -> [f32; 3] {
    [c[0] as f32, c[1] as f32, c[2] as f32]
}

/// Euclidean distance between two colors in RGB space
pub fn rgb_distance(a: Rgb, b: Rgb) -> f32 {
    let d = |i: usize| a[i] as f32 - b[i] as f32;
    (d(0) * d(0) + d(1) * d(1) + d(2) * d(2)).sqrt()
}
