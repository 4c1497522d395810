use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: month label → Color32
// ---------------------------------------------------------------------------

/// Maps each month label of the loaded dataset to a distinct colour for the
/// bar chart. Duplicate labels share a colour.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map from the month labels in dataset order.
    pub fn new(months: &[String]) -> Self {
        let unique: Vec<&String> = {
            let mut seen = Vec::new();
            for m in months {
                if !seen.contains(&m) {
                    seen.push(m);
                }
            }
            seen
        };
        let palette = generate_palette(unique.len());
        let mapping = unique
            .into_iter()
            .zip(palette)
            .map(|(m, c)| (m.clone(), c))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a month label.
    pub fn color_for(&self, month: &str) -> Color32 {
        self.mapping
            .get(month)
            .copied()
            .unwrap_or(Color32::LIGHT_BLUE)
    }
}
