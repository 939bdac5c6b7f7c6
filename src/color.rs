// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    // CSS rgba() string using the color's own alpha
    pub fn to_css(&self) -> String {
        self.to_css_with_alpha((self.alpha() * 1000.0).round() / 1000.0)
    }

    // CSS rgba() string with alpha overridden, clamped to 0..=1
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.max(0.0).min(1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x1a4d7cff);
        assert_eq!(
            c,
            Color {
                r: 0x1a,
                g: 0x4d,
                b: 0x7c,
                a: 0xff
            }
        );
    }

    #[test]
    fn css_rounds_own_alpha() {
        assert_eq!(Color::from_u32(0x64b4ff80).to_css(), "rgba(100, 180, 255, 0.502)");
        assert_eq!(Color::from_u32(0x000000ff).to_css(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn override_alpha_is_clamped() {
        let c = Color::from_u32(0x64b4ffff);
        assert_eq!(c.to_css_with_alpha(0.25), "rgba(100, 180, 255, 0.25)");
        assert_eq!(c.to_css_with_alpha(3.0), "rgba(100, 180, 255, 1)");
        assert_eq!(c.to_css_with_alpha(-1.0), "rgba(100, 180, 255, 0)");
    }
}
