use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::Rgba;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{FractalError, Result};
use crate::transform::CoordinateSpace;

// Beyond this the leaf count no longer fits comfortably in memory
pub const ORDER_LIMIT: u32 = 15;
// Largest side length a config may allow; keeps the RGBA buffer addressable
pub const SIZE_LIMIT: u32 = 16384;

// Opaque RGB colour written as "#rrggbb" (or "#rgb") in config files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const BLACK: HexColor = HexColor([0, 0, 0]);
    pub const WHITE: HexColor = HexColor([255, 255, 255]);

    pub fn to_rgba(self) -> Rgba<u8> {
        let [r, g, b] = self.0;
        Rgba([r, g, b, 255])
    }
}

impl FromStr for HexColor {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self> {
        let rgb: Srgb<u8> = s
            .trim()
            .parse()
            .map_err(|e| FractalError::Config(format!("bad colour {:?}: {}", s, e)))?;
        let (r, g, b) = rgb.into_components();
        Ok(HexColor([r, g, b]))
    }
}

impl TryFrom<String> for HexColor {
    type Error = FractalError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// Everything a draw needs besides the order/size inputs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub coordinate_space: CoordinateSpace,
    pub background: HexColor,
    pub fill: HexColor,
    pub max_order: u32,
    pub max_size: u32,
    // restored by reset
    pub default_order: u32,
    pub default_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            coordinate_space: CoordinateSpace::Pixel,
            background: HexColor::BLACK,
            fill: HexColor::WHITE,
            max_order: 10,
            max_size: 4096,
            default_order: 5,
            default_size: 600,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RenderConfig =
            serde_json::from_str(json).map_err(|e| FractalError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loaded render config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if let CoordinateSpace::Centered { margin } = self.coordinate_space {
            if !(margin > 0.0 && margin <= 1.0) {
                return Err(FractalError::Config(format!(
                    "margin must be in (0, 1], got {}",
                    margin
                )));
            }
        }
        if self.max_order > ORDER_LIMIT {
            return Err(FractalError::Config(format!(
                "max_order {} exceeds {}",
                self.max_order, ORDER_LIMIT
            )));
        }
        if self.max_size == 0 || self.max_size > SIZE_LIMIT {
            return Err(FractalError::Config(format!(
                "max_size {} is outside 1..={}",
                self.max_size, SIZE_LIMIT
            )));
        }
        if self.default_order > self.max_order {
            return Err(FractalError::Config(format!(
                "default_order {} exceeds max_order {}",
                self.default_order, self.max_order
            )));
        }
        if self.default_size == 0 || self.default_size > self.max_size {
            return Err(FractalError::Config(format!(
                "default_size {} is outside 1..={}",
                self.default_size, self.max_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reset_values() {
        let c = RenderConfig::default();
        assert_eq!(c.default_order, 5);
        assert_eq!(c.default_size, 600);
        assert_eq!(c.coordinate_space, CoordinateSpace::Pixel);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn hex_colors_parse_and_print() {
        let c: HexColor = "#ff8000".parse().unwrap();
        assert_eq!(c, HexColor([255, 128, 0]));
        assert_eq!(c.to_string(), "#ff8000");
        assert_eq!("#fff".parse::<HexColor>().unwrap(), HexColor::WHITE);
        assert!("not-a-colour".parse::<HexColor>().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let c = RenderConfig::from_json_str(
            r##"{ "fill": "#00ff00", "coordinate_space": { "mode": "centered", "margin": 0.9 } }"##,
        )
        .unwrap();
        assert_eq!(c.fill, HexColor([0, 255, 0]));
        assert_eq!(c.background, HexColor::BLACK);
        assert_eq!(c.coordinate_space, CoordinateSpace::Centered { margin: 0.9 });
        assert_eq!(c.max_order, 10);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(RenderConfig::from_json_str(r#"{ "fill": "purple-ish" }"#).is_err());
        assert!(
            RenderConfig::from_json_str(r#"{ "coordinate_space": { "mode": "centered", "margin": 1.5 } }"#)
                .is_err()
        );
        assert!(RenderConfig::from_json_str(r#"{ "max_order": 40 }"#).is_err());
        assert!(RenderConfig::from_json_str(r#"{ "default_size": 0 }"#).is_err());
        assert!(RenderConfig::from_json_str(r#"{ "max_size": 0 }"#).is_err());
        assert!(RenderConfig::from_json_str(r#"{ "max_size": 4294967295 }"#).is_err());
        assert!(RenderConfig::from_json_str(r#"{ "max_size": 16385 }"#).is_err());
        assert!(RenderConfig::from_json_str(r#"{ "max_size": 16384 }"#).is_ok());
    }

    #[test]
    fn config_roundtrips_through_json() {
        let c = RenderConfig {
            coordinate_space: CoordinateSpace::centered(),
            ..RenderConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"#ffffff\""));
        assert_eq!(RenderConfig::from_json_str(&json).unwrap(), c);
    }
}
