use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::aggregate::MarginBand;

// ---------------------------------------------------------------------------
// Fixed accent palette
// ---------------------------------------------------------------------------

pub const BLUE: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb);
pub const PURPLE: Color32 = Color32::from_rgb(0x7c, 0x3a, 0xed);
pub const GREEN: Color32 = Color32::from_rgb(0x05, 0x96, 0x69);
pub const ORANGE: Color32 = Color32::from_rgb(0xd9, 0x77, 0x06);
pub const RED: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
pub const CYAN: Color32 = Color32::from_rgb(0x08, 0x91, 0xb2);
pub const MUTED: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);

/// Series colours, in assignment order.
pub const ACCENTS: [Color32; 6] = [BLUE, PURPLE, GREEN, ORANGE, RED, CYAN];

/// Colour of a margin band.
pub fn band_color(band: MarginBand) -> Color32 {
    match band {
        MarginBand::High => GREEN,
        MarginBand::Medium => ORANGE,
        MarginBand::Low => RED,
    }
}

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

/// `n` series colours: the accent palette first, generated hues after it.
pub fn series_colors(n: usize) -> Vec<Color32> {
    let mut colors: Vec<Color32> = ACCENTS.iter().copied().take(n).collect();
    if n > ACCENTS.len() {
        colors.extend(generate_palette(n - ACCENTS.len()));
    }
    colors
}

// ---------------------------------------------------------------------------
// Color mapping: series label → Color32
// ---------------------------------------------------------------------------

/// Maps series labels (categories, regions, …) to stable colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Assign colours to `labels` in the given order.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let labels: Vec<&str> = labels.into_iter().collect();
        let palette = series_colors(labels.len());
        let mapping = labels
            .into_iter()
            .zip(palette)
            .map(|(l, c)| (l.to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}
