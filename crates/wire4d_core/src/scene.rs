//! Scene storage and serialization
//!
//! [`SceneFile`] is the serializable description loaded from RON files.
//! [`Scene`] is the runtime list of objects the cameras draw, in insertion
//! order. 3D and 4D objects share one scene; each camera sees them in its own
//! dimension through [`Scene::spatial_objects`] and [`Scene::hyper_objects`].

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::GeometryError;
use crate::shapes::{ObjectTemplate, ShapeTemplate};
use crate::spatial::SpatialObject;

/// An object in 3D or 4D space
#[derive(Clone, Debug, PartialEq)]
pub enum SceneObject {
    Spatial(SpatialObject<3>),
    Hyper(SpatialObject<4>),
}

impl SceneObject {
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self {
            SceneObject::Spatial(obj) => obj.validate(),
            SceneObject::Hyper(obj) => obj.validate(),
        }
    }

    /// Number of points
    pub fn point_count(&self) -> usize {
        match self {
            SceneObject::Spatial(obj) => obj.points.len(),
            SceneObject::Hyper(obj) => obj.points.len(),
        }
    }

    /// The object as seen by a 3D camera
    pub fn as_spatial(&self) -> Cow<'_, SpatialObject<3>> {
        match self {
            SceneObject::Spatial(obj) => Cow::Borrowed(obj),
            SceneObject::Hyper(obj) => Cow::Owned(obj.flatten()),
        }
    }

    /// The object as seen by a 4D camera
    pub fn as_hyper(&self) -> Cow<'_, SpatialObject<4>> {
        match self {
            SceneObject::Spatial(obj) => Cow::Owned(obj.lift()),
            SceneObject::Hyper(obj) => Cow::Borrowed(obj),
        }
    }
}

impl From<SpatialObject<3>> for SceneObject {
    fn from(obj: SpatialObject<3>) -> Self {
        SceneObject::Spatial(obj)
    }
}

impl From<SpatialObject<4>> for SceneObject {
    fn from(obj: SpatialObject<4>) -> Self {
        SceneObject::Hyper(obj)
    }
}

/// A serializable scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Objects in draw order
    #[serde(default)]
    pub objects: Vec<ObjectTemplate>,
}

impl SceneFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Builder: append an object template
    pub fn with_object(mut self, object: ObjectTemplate) -> Self {
        self.objects.push(object);
        self
    }

    /// Load a scene description from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse a scene description from RON text
    pub fn from_ron(contents: &str) -> Result<Self, SceneLoadError> {
        Ok(ron::from_str(contents)?)
    }

    /// Save the description to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// The runtime list of objects to draw
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub name: String,
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Instantiate every object of a scene description
    pub fn from_file(file: &SceneFile) -> Result<Self, SceneLoadError> {
        let mut scene = Self::new(file.name.clone());
        for template in &file.objects {
            scene.push(template.to_object()?)?;
        }
        Ok(scene)
    }

    /// Load and instantiate a RON scene file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let path = path.as_ref();
        let scene = Self::from_file(&SceneFile::load(path)?)?;
        log::info!(
            "Loaded scene '{}' from {} ({} objects)",
            scene.name,
            path.display(),
            scene.len()
        );
        Ok(scene)
    }

    /// Parse and instantiate a scene from RON text
    pub fn from_ron(contents: &str) -> Result<Self, SceneLoadError> {
        Self::from_file(&SceneFile::from_ron(contents)?)
    }

    /// Add an object after checking its topology
    pub fn push(&mut self, object: impl Into<SceneObject>) -> Result<(), GeometryError> {
        let object = object.into();
        object.validate()?;
        log::debug!(
            "Scene '{}': added object with {} points",
            self.name,
            object.point_count()
        );
        self.objects.push(object);
        Ok(())
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Replace the contents with a single object selector preset
    ///
    /// Unknown names leave the scene untouched.
    pub fn select(&mut self, name: &str) -> Result<(), SceneLoadError> {
        let shape = ShapeTemplate::preset(name)
            .ok_or_else(|| SceneLoadError::UnknownShape(name.to_string()))?;
        let object = shape.create()?;
        object.validate()?;
        self.clear();
        self.objects.push(object);
        log::info!("Selected object '{}'", name);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// Every object as seen in 3D; 4D objects lose their u component
    pub fn spatial_objects(&self) -> impl Iterator<Item = Cow<'_, SpatialObject<3>>> {
        self.objects.iter().map(SceneObject::as_spatial)
    }

    /// Every object as seen in 4D; 3D objects sit at u = 0
    pub fn hyper_objects(&self) -> impl Iterator<Item = Cow<'_, SpatialObject<4>>> {
        self.objects.iter().map(SceneObject::as_hyper)
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// An object has invalid topology
    Geometry(GeometryError),
    /// No preset with this name
    UnknownShape(String),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl From<GeometryError> for SceneLoadError {
    fn from(e: GeometryError) -> Self {
        SceneLoadError::Geometry(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneLoadError::Geometry(e) => write!(f, "Invalid geometry: {}", e),
            SceneLoadError::UnknownShape(name) => write!(f, "Unknown shape: {}", name),
        }
    }
}

impl std::error::Error for SceneLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneLoadError::Io(e) => Some(e),
            SceneLoadError::Parse(e) => Some(e),
            SceneLoadError::Geometry(e) => Some(e),
            SceneLoadError::UnknownShape(_) => None,
        }
    }
}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}
