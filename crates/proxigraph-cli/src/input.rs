use crate::error::{CliError, Result};
use nalgebra::Point3;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug)]
struct EntityRecord {
    x: f64,
    y: f64,
    z: f64,
    #[serde(default)]
    mass: Option<f64>,
}

/// Entity positions and optional per-entity masses, in file order (entity 1 is the first row).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Entities {
    pub positions: Vec<Point3<f64>>,
    pub masses: Vec<Option<f64>>,
}

impl Entities {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Reads a headed CSV with `x`, `y`, `z` columns and an optional `mass` column.
pub fn read_entities<R: Read>(reader: R) -> Result<Entities> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entities = Entities::default();
    for record in csv_reader.deserialize::<EntityRecord>() {
        let record = record?;
        entities.positions.push(Point3::new(record.x, record.y, record.z));
        entities.masses.push(record.mass);
    }
    Ok(entities)
}

pub fn read_entities_from_path(path: &Path) -> Result<Entities> {
    debug!("Reading entities from: {:?}", path);
    let file = File::open(path)?;
    let entities = read_entities(file).map_err(|e| match e {
        CliError::Csv(source) => CliError::FileParsing {
            path: path.to_path_buf(),
            source: source.into(),
        },
        other => other,
    })?;
    debug!(num_entities = entities.len(), "Entities loaded.");
    Ok(entities)
}
