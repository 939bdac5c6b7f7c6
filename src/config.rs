// Tunables for the particle field. Compile-time defaults only; tests build
// their own configs through struct update syntax.

use crate::color::Color;

pub const CANVAS_ID: &str = "particles-canvas";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    // Pairs strictly closer than this get a connecting line
    pub connection_distance: f64,
    // Per-axis velocity is drawn from [-max_speed, max_speed)
    pub max_speed: f64,
    pub radius_range: (f64, f64),
    pub particle_color: Color,
    pub glow_blur: f64,
    pub line_color: Color,
    pub line_width: f64,
    pub max_line_opacity: f64,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 100;
    pub const CONNECTION_DISTANCE: f64 = 150.0;
    pub const MAX_SPEED: f64 = 0.5 / 2.0;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            connection_distance: FieldConfig::CONNECTION_DISTANCE,
            max_speed: FieldConfig::MAX_SPEED,
            radius_range: (1.0, 3.0),
            particle_color: Color::from_u32(0x64b4ff99),
            glow_blur: 10.0,
            line_color: Color::from_u32(0x64b4ffff),
            line_width: 1.0,
            max_line_opacity: 0.5,
        }
    }
}
