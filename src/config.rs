// Scene settings, loaded from a JSON file or taken from defaults.
//
// Keys are camelCase, so a scene file looks like:
//
// {
//   "targetFps": 60,
//   "surfaces": [
//     { "width": 320, "height": 200, "cursorRadius": 40,
//       "colors": { "1": "#e33", "2": "#3a3" },
//       "matrix": ["1102", "0220"] }
//   ]
// }
//
// Every field is optional. Values are checked by `validate`, not clamped.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::{Error, Result};
use crate::grid::Palette;
use crate::pixel::PixelParams;
use crate::pointer;

/// Refresh rate used when nothing else is asked for (1000/60 ms per frame).
pub const DEFAULT_FPS: usize = 60;

/// The "PXLME" logo.
const DEFAULT_MATRIX: [&str; 5] = [
    "110010101000100010111",
    "101010101000110110100",
    "110001001000101010110",
    "100010101000100010100",
    "100010101110100010111",
];

/// One drawing surface: its size, motion tuning and picture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceConfig {
    /// Label used in logs and the window title.
    pub container_id: Option<String>,
    pub width: usize,
    pub height: usize,
    pub cursor_radius: f64,
    pub speed_up: f64,
    pub speed_down: f64,
    pub pixel_rubbing: f64,
    pub pixel_size: f64,
    pub pixel_size_max: f64,
    pub pixel_size_ratio: f64,
    /// Single-character key -> "#rgb" / "#rrggbb".
    pub colors: BTreeMap<String, String>,
    pub matrix: Vec<String>,
    /// Colour the surface is cleared to every frame.
    pub background: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        let motion = PixelParams::default();
        Self {
            container_id: None,
            width: 320,
            height: 320,
            cursor_radius: pointer::DEFAULT_RADIUS,
            speed_up: motion.speed_up,
            speed_down: motion.speed_down,
            pixel_rubbing: motion.rubbing,
            pixel_size: motion.size,
            pixel_size_max: motion.size_max,
            pixel_size_ratio: motion.size_ratio,
            colors: BTreeMap::from([("1".to_string(), "#000000".to_string())]),
            matrix: DEFAULT_MATRIX.iter().map(|r| r.to_string()).collect(),
            background: "#fff".to_string(),
        }
    }
}

fn positive(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be a positive number, got {v}")))
    }
}

impl SurfaceConfig {
    /// Reject settings that would produce NaN or runaway motion later.
    /// The matrix shape is checked when the grid is built.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "surface size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        positive("cursorRadius", self.cursor_radius)?;
        positive("speedUp", self.speed_up)?;
        positive("speedDown", self.speed_down)?;
        positive("pixelSize", self.pixel_size)?;
        positive("pixelSizeMax", self.pixel_size_max)?;

        if !(self.pixel_rubbing > 0.0 && self.pixel_rubbing < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "pixelRubbing must be in (0, 1), got {}",
                self.pixel_rubbing
            )));
        }
        if self.pixel_size_max < self.pixel_size {
            return Err(Error::InvalidConfig(format!(
                "pixelSizeMax ({}) is smaller than pixelSize ({})",
                self.pixel_size_max, self.pixel_size
            )));
        }
        if !(self.pixel_size_ratio.is_finite() && self.pixel_size_ratio >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "pixelSizeRatio must be >= 0, got {}",
                self.pixel_size_ratio
            )));
        }

        self.palette()?;
        color::parse_hex(&self.background)?;
        Ok(())
    }

    pub fn pixel_params(&self) -> PixelParams {
        PixelParams {
            speed_up: self.speed_up,
            speed_down: self.speed_down,
            rubbing: self.pixel_rubbing,
            size: self.pixel_size,
            size_max: self.pixel_size_max,
            size_ratio: self.pixel_size_ratio,
        }
    }

    /// Parsed `colors` table.
    pub fn palette(&self) -> Result<Palette> {
        let mut out = Palette::new();
        for (key, value) in &self.colors {
            let mut chars = key.chars();
            let (Some(k), None) = (chars.next(), chars.next()) else {
                return Err(Error::InvalidConfig(format!(
                    "colour key {key:?} must be a single character"
                )));
            };
            out.insert(k, color::pack(color::parse_hex(value)?));
        }
        Ok(out)
    }

    pub fn background_color(&self) -> Result<u32> {
        Ok(color::pack(color::parse_hex(&self.background)?))
    }

    /// Human readable name for logs.
    pub fn label(&self, index: usize) -> String {
        self.container_id
            .clone()
            .unwrap_or_else(|| format!("surface #{index}"))
    }
}

/// Everything one run of the app shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    pub target_fps: usize,
    pub surfaces: Vec<SurfaceConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { target_fps: DEFAULT_FPS, surfaces: vec![SurfaceConfig::default()] }
    }
}

impl SceneConfig {
    /// Read and check a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json(&text)?;
        log::info!("Loaded scene from {} ({} surface(s))", path.display(), scene.surfaces.len());
        Ok(scene)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let mut scene: SceneConfig = serde_json::from_str(text)?;
        if scene.surfaces.is_empty() {
            log::warn!("Scene lists no surfaces, using the default one");
            scene.surfaces.push(SurfaceConfig::default());
        }
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_fps == 0 {
            return Err(Error::InvalidConfig("targetFps must be at least 1".into()));
        }
        for (i, s) in self.surfaces.iter().enumerate() {
            s.validate()
                .map_err(|e| Error::InvalidConfig(format!("{}: {e}", s.label(i))))?;
        }
        Ok(())
    }
}
