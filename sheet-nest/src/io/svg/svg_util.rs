use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher};
use svg::node::element::Rectangle;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Write the label of each part on top of it
    #[serde(default = "default_true")]
    pub draw_labels: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_labels: true,
        }
    }
}

pub const N_PART_COLORS: usize = 8;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub bin_fill: Color,
    pub part_fills: [Color; N_PART_COLORS],
    pub part_fill_opac: f64,
    pub text_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::STEEL
    }
}

impl SvgLayoutTheme {
    pub const STEEL: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        bin_fill: Color(0xF9, 0xFA, 0xFB),
        part_fills: [
            Color(0x3B, 0x82, 0xF6), // BLUE
            Color(0xF5, 0x9E, 0x0B), // AMBER
            Color(0x10, 0xB9, 0x81), // EMERALD
            Color(0xEF, 0x44, 0x44), // RED
            Color(0x8B, 0x5C, 0xF6), // VIOLET
            Color(0xEC, 0x48, 0x99), // PINK
            Color(0x06, 0xB6, 0xD4), // CYAN
            Color(0x14, 0xB8, 0xA6), // TEAL
        ],
        part_fill_opac: 0.25,
        text_color: Color(0x1F, 0x29, 0x37),
    };

    /// Fill color for parts with `label`, parts sharing a label share a color.
    pub fn part_fill(&self, label: &str) -> Color {
        let mut hasher = DefaultHasher::new();
        label.hash(&mut hasher);
        self.part_fills[(hasher.finish() % N_PART_COLORS as u64) as usize]
    }
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> anyhow::Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        anyhow::ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

pub fn rectangle(x: f64, y: f64, width: f64, height: f64, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height);
    for param in params {
        rect = rect.set(param.0, param.1)
    }
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_round_trip_through_hex() {
        let c = Color::try_from("#3B82F6").unwrap();
        assert_eq!(c, Color(0x3B, 0x82, 0xF6));
        assert_eq!(c.to_string(), "#3B82F6");
        assert!(Color::try_from("#3B82").is_err());
        assert!(Color::try_from("zzzzzz").is_err());
    }

    #[test]
    fn draw_options_fall_back_to_the_steel_theme() {
        let options: SvgDrawOptions = serde_json::from_str(r#"{ "draw_labels": false }"#).unwrap();
        assert_eq!(options.theme, SvgLayoutTheme::STEEL);
        assert!(!options.draw_labels);

        let json = serde_json::to_string(&SvgLayoutTheme::default()).unwrap();
        assert!(json.contains(r##""bin_fill":"#F9FAFB""##));
    }

    #[test]
    fn same_label_same_color() {
        let theme = SvgLayoutTheme::default();
        assert_eq!(theme.part_fill("TAMPO"), theme.part_fill("TAMPO"));
    }
}
