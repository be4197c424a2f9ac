//! Color map system.

use std::collections::HashMap;

use glam::Vec3;

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Samples the color map at a given value (0 to 1).
    #[must_use]
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);

        if self.colors.is_empty() {
            return Vec3::ZERO;
        }

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let n = self.colors.len() - 1;
        let idx = (t * n as f32).floor() as usize;
        let idx = idx.min(n - 1);
        let frac = t * n as f32 - idx as f32;

        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }
}

/// Registry for managing color maps.
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with default color maps.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            color_maps: HashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Grayscale ramp, used for magnitude/brightness rendering.
        self.register(ColorMap::new(
            "grayscale",
            vec![Vec3::ZERO, Vec3::ONE],
        ));

        // Coolwarm diverging map, used for signed scalar fields.
        self.register(ColorMap::new(
            "coolwarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.406, 0.537, 0.934),
                Vec3::new(0.602, 0.731, 0.999),
                Vec3::new(0.788, 0.845, 0.939),
                Vec3::new(0.867, 0.864, 0.863),
                Vec3::new(0.944, 0.760, 0.672),
                Vec3::new(0.941, 0.568, 0.447),
                Vec3::new(0.836, 0.342, 0.261),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        ));

        // Viridis.
        self.register(ColorMap::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        ));
    }

    /// Registers a color map, replacing any with the same name.
    pub fn register(&mut self, map: ColorMap) {
        self.color_maps.insert(map.name.clone(), map);
    }

    /// Gets a color map by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Gets a color map by name, or the grayscale fallback.
    #[must_use]
    pub fn get_or_default(&self, name: &str) -> &ColorMap {
        self.get(name)
            .or_else(|| self.get("grayscale"))
            .expect("grayscale color map always registered")
    }
}

impl Default for ColorMapRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a vector to a display color: direction to hue, magnitude to
/// brightness.
///
/// The hue is taken from the vector's orientation in the xy plane, so equal
/// directions get equal hues regardless of magnitude. Magnitude (after
/// scaling) saturates at 1.
#[must_use]
pub fn vector_color(v: Vec3, scale: f32) -> Vec3 {
    let mag = (v.length() * scale).clamp(0.0, 1.0);
    if mag <= f32::EPSILON {
        return Vec3::ZERO;
    }
    let hue = v.y.atan2(v.x).to_degrees().rem_euclid(360.0);
    hsv_to_rgb(hue, 1.0, mag)
}

/// Converts HSV (h in degrees, s and v in [0, 1]) to RGB.
#[must_use]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let h = h.rem_euclid(360.0) / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as u32 {
        0 => Vec3::new(v, t, p),
        1 => Vec3::new(q, v, p),
        2 => Vec3::new(p, v, t),
        3 => Vec3::new(p, q, v),
        4 => Vec3::new(t, p, v),
        _ => Vec3::new(v, p, q),
    }
}
