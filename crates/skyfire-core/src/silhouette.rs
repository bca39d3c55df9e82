//! Silhouette data: the colored-region + outline point sets that define an
//! entity's visual shape, loaded from external text assets.
//!
//! The simulation core only consumes the bounding extents (to size collision
//! boxes); the full point data is carried for the renderer, which caches a
//! rasterized surface per scale.
//!
//! Text format, one line per group, `//` comments and blank lines skipped:
//! - colored file: `r,g,b x0,y0 x1,y1 ...` (one colored region per line)
//! - outline file: `x0,y0 x1,y1 ...` (one closed polygon per line)

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{SILHOUETTE_MIN_EXTENT, SILHOUETTE_PAD};
use crate::enums::AssetKey;

/// Errors raised while locating or parsing silhouette assets.
#[derive(Debug)]
pub enum AssetError {
    /// Required asset files are absent. Fails the responsible entity's
    /// construction; the caller decides to skip or abort.
    NotFound { key: AssetKey },
    /// An asset file exists but a line does not match the format.
    Malformed { key: AssetKey, line: usize },
    /// Underlying I/O failure other than absence.
    Io { key: AssetKey, source: std::io::Error },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound { key } => {
                write!(f, "silhouette asset not found: {:?}", key)
            }
            AssetError::Malformed { key, line } => {
                write!(f, "malformed silhouette data for {:?} at line {}", key, line)
            }
            AssetError::Io { key, source } => {
                write!(f, "i/o error loading silhouette {:?}: {}", key, source)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One same-colored group of fill points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredRegion {
    pub color: (u8, u8, u8),
    pub points: Vec<(i32, i32)>,
}

/// Parsed silhouette: fill regions, outline polygons, and bounding extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Silhouette {
    pub colored_regions: Vec<ColoredRegion>,
    pub outlines: Vec<Vec<(i32, i32)>>,
    /// Unscaled bounding width, padded and floored to a usable minimum.
    pub width: f32,
    /// Unscaled bounding height, padded and floored to a usable minimum.
    pub height: f32,
}

impl Silhouette {
    /// Parse the colored-region and outline files for `key`.
    ///
    /// Degenerate point sets do not fail: extents are floored at
    /// [`SILHOUETTE_MIN_EXTENT`] so downstream collision boxes stay usable.
    pub fn parse(key: AssetKey, colored: &str, outlines: &str) -> Result<Self, AssetError> {
        let colored_regions = parse_colored(key, colored)?;
        let outline_groups = parse_outlines(key, outlines)?;

        let mut max_x = 0i32;
        let mut max_y = 0i32;
        for region in &colored_regions {
            for &(x, y) in &region.points {
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }

        let width = (max_x as f32 + SILHOUETTE_PAD).max(SILHOUETTE_MIN_EXTENT);
        let height = (max_y as f32 + SILHOUETTE_PAD).max(SILHOUETTE_MIN_EXTENT);

        Ok(Self {
            colored_regions,
            outlines: outline_groups,
            width,
            height,
        })
    }

    /// A tiny built-in diamond shape, used by in-memory stores and tests.
    pub fn placeholder(extent: i32) -> Self {
        let e = extent.max(1);
        let mid = e / 2;
        Self::parse(
            AssetKey::Enemy,
            &format!("200,40,40 {mid},0 0,{mid} {mid},{e} {e},{mid}"),
            &format!("{mid},0 0,{mid} {mid},{e} {e},{mid}"),
        )
        .expect("placeholder silhouette is well-formed")
    }
}

fn parse_point(s: &str) -> Option<(i32, i32)> {
    let (x, y) = s.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with("//"))
}

fn parse_colored(key: AssetKey, text: &str) -> Result<Vec<ColoredRegion>, AssetError> {
    let mut regions = Vec::new();
    for (line_no, line) in data_lines(text) {
        let mut parts = line.split_whitespace();
        let color_part = parts.next().ok_or(AssetError::Malformed { key, line: line_no })?;
        let mut rgb = color_part.split(',').map(|c| c.trim().parse::<u8>());
        let color = match (rgb.next(), rgb.next(), rgb.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b))) => (r, g, b),
            _ => return Err(AssetError::Malformed { key, line: line_no }),
        };
        let mut points = Vec::new();
        for p in parts {
            points.push(parse_point(p).ok_or(AssetError::Malformed { key, line: line_no })?);
        }
        regions.push(ColoredRegion { color, points });
    }
    Ok(regions)
}

fn parse_outlines(key: AssetKey, text: &str) -> Result<Vec<Vec<(i32, i32)>>, AssetError> {
    let mut groups = Vec::new();
    for (line_no, line) in data_lines(text) {
        let mut points = Vec::new();
        for p in line.split_whitespace() {
            points.push(parse_point(p).ok_or(AssetError::Malformed { key, line: line_no })?);
        }
        groups.push(points);
    }
    Ok(groups)
}

/// Capability for resolving silhouette data. The simulation takes this at
/// construction instead of reaching for any global asset registry.
pub trait SilhouetteStore: Send {
    fn load(&self, key: AssetKey) -> Result<Silhouette, AssetError>;
}

/// Directory-backed store: `<root>/<asset folder>/colored.txt` and
/// `<root>/<asset folder>/outline.txt`.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, key: AssetKey, file: &str) -> Result<String, AssetError> {
        let path = self.root.join(key.folder()).join(file);
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AssetError::NotFound { key }
            } else {
                AssetError::Io { key, source: e }
            }
        })
    }
}

impl SilhouetteStore for DirStore {
    fn load(&self, key: AssetKey) -> Result<Silhouette, AssetError> {
        let colored = self.read(key, "colored.txt")?;
        let outlines = self.read(key, "outline.txt")?;
        Silhouette::parse(key, &colored, &outlines)
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    shapes: HashMap<AssetKey, Silhouette>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with placeholder shapes for every asset the
    /// simulation can request.
    pub fn with_default_shapes() -> Self {
        use crate::enums::{ProjectileKind, ShipClass};

        let mut store = Self::new();
        for class in [ShipClass::Interceptor, ShipClass::Striker, ShipClass::Phantom] {
            store.insert(AssetKey::Ship(class), Silhouette::placeholder(100));
        }
        store.insert(AssetKey::Enemy, Silhouette::placeholder(80));
        store.insert(AssetKey::Turret, Silhouette::placeholder(120));
        for kind in [
            ProjectileKind::PlayerShot,
            ProjectileKind::TurretShot,
            ProjectileKind::EnemyShot,
        ] {
            store.insert(AssetKey::Projectile(kind), Silhouette::placeholder(20));
        }
        store
    }

    pub fn insert(&mut self, key: AssetKey, silhouette: Silhouette) {
        self.shapes.insert(key, silhouette);
    }

    pub fn remove(&mut self, key: AssetKey) {
        self.shapes.remove(&key);
    }
}

impl SilhouetteStore for MemoryStore {
    fn load(&self, key: AssetKey) -> Result<Silhouette, AssetError> {
        self.shapes
            .get(&key)
            .cloned()
            .ok_or(AssetError::NotFound { key })
    }
}
