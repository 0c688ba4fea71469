//! Scene files: named masks placed in a plane plus the queries to run on them.
//!
//! ```json
//! {
//!   "masks": [
//!     { "name": "frame", "shape": { "pbm": "frame-ascii.pbm" } },
//!     { "name": "hole", "shape": { "invert": "frame" } },
//!     { "name": "wall", "shape": { "box": { "w": 4, "h": 20 } }, "x": 12 }
//!   ],
//!   "queries": [
//!     { "collision": ["frame", "wall"] },
//!     { "framed_by": { "mask": "frame", "frame": { "x": 0, "y": 0, "w": 10, "h": 10 } } }
//!   ]
//! }
//! ```

use std::{
    collections::HashMap,
    error::Error,
    fmt,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use mask::{geometry::Rect, pbm, BoxMask, DecodeError, Mask};
use serde::Deserialize;

#[derive(Debug)]
pub enum LoadError {
    IoError(PathBuf, std::io::Error),
    JsonError(serde_json::error::Error),
    DecodeError(PathBuf, DecodeError),
    UnknownMask(String),
    DuplicateMask(String),
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::IoError(_, e) => Some(e),
            LoadError::JsonError(e) => Some(e),
            LoadError::DecodeError(_, e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::IoError(path, e) => write!(f, "{}: {}", path.display(), e),
            LoadError::JsonError(e) => write!(f, "bad scene file: {}", e),
            LoadError::DecodeError(path, e) => write!(f, "{}: {}", path.display(), e),
            LoadError::UnknownMask(name) => write!(f, "no mask named {:?}", name),
            LoadError::DuplicateMask(name) => write!(f, "mask {:?} is defined twice", name),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Scene {
    pub masks: Vec<MaskDefinition>,
    #[serde(default)]
    pub queries: Vec<Query>,
}

#[derive(Debug, Deserialize)]
pub struct MaskDefinition {
    pub name: String,
    pub shape: Shape,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Pbm(PathBuf),
    Box { w: u32, h: u32 },
    /// Inversion of a mask defined earlier in the scene
    Invert(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Collision(String, String),
    Within(String, String),
    FramedBy { mask: String, frame: Rect },
}

#[derive(Debug, PartialEq, Eq)]
pub struct QueryResult {
    pub description: String,
    pub outcome: bool,
}

pub fn load_scene(path: &Path) -> Result<Scene, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::IoError(path.to_owned(), e))?;
    serde_json::from_reader(file).map_err(LoadError::JsonError)
}

pub fn load_pbm(path: &Path) -> Result<Mask, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::IoError(path.to_owned(), e))?;
    let bitmap = pbm::decode(&bytes).map_err(|e| LoadError::DecodeError(path.to_owned(), e))?;
    log::debug!("{}:\n{}", path.display(), bitmap.grid());
    Ok(bitmap.into())
}

pub fn build_masks(scene: &Scene, data_dir: &Path) -> Result<HashMap<String, Mask>, LoadError> {
    let mut masks = HashMap::new();
    for definition in &scene.masks {
        let mut mask = match &definition.shape {
            Shape::Pbm(path) => load_pbm(&data_dir.join(path))?,
            Shape::Box { w, h } => BoxMask::new(*w, *h).into(),
            Shape::Invert(name) => lookup(&masks, name)?.invert(),
        };
        if definition.x.is_some() || definition.y.is_some() {
            let origin = mask.origin();
            mask = mask.at(
                definition.x.unwrap_or(origin.x),
                definition.y.unwrap_or(origin.y),
            );
        }

        log::debug!("mask {:?} covers {:?}", definition.name, mask.bounds());
        if masks.insert(definition.name.clone(), mask).is_some() {
            return Err(LoadError::DuplicateMask(definition.name.clone()));
        }
    }
    log::info!("built {} masks", masks.len());
    Ok(masks)
}

pub fn run_queries(
    scene: &Scene,
    masks: &HashMap<String, Mask>,
) -> Result<Vec<QueryResult>, LoadError> {
    scene
        .queries
        .iter()
        .map(|query| -> Result<QueryResult, LoadError> {
            let (operation, names, outcome) = match query {
                Query::Collision(a, b) => (
                    "collision",
                    [a, b].iter().join(", "),
                    mask::collision(lookup(masks, a)?, lookup(masks, b)?),
                ),
                Query::Within(a, b) => (
                    "within",
                    [a, b].iter().join(", "),
                    mask::within(lookup(masks, a)?, lookup(masks, b)?),
                ),
                Query::FramedBy { mask: name, frame } => (
                    "framed_by",
                    format!("{}, {:?}", name, frame),
                    lookup(masks, name)?.framed_by(*frame),
                ),
            };
            Ok(QueryResult {
                description: format!("{}({})", operation, names),
                outcome,
            })
        })
        .collect()
}

fn lookup<'a>(masks: &'a HashMap<String, Mask>, name: &str) -> Result<&'a Mask, LoadError> {
    masks
        .get(name)
        .ok_or_else(|| LoadError::UnknownMask(name.to_owned()))
}
