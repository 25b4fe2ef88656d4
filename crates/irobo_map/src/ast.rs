//! AST for the map mini-language.

/// A parsed map: grid rows plus entity placements and paint marks.
///
/// Serialized maps are tagged `"type": "map"` at the top level, matching the
/// layout consumed by downstream robot tooling.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MapAst {
    /// Grid rows, verbatim from the source (leading spaces significant).
    pub map: Vec<String>,
    /// Named entities placed on the grid.
    pub extra: Vec<Placement>,
    /// Painted cells.
    pub paint: Vec<PaintMark>,
}

impl MapAst {
    /// Returns true if the map has no rows, placements, or paint marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty() && self.extra.is_empty() && self.paint.is_empty()
    }

    /// Number of grid rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.map.len()
    }

    /// Width of the widest grid row, in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.map
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MapAst {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MapAst", 4)?;
        state.serialize_field("type", "map")?;
        state.serialize_field("map", &self.map)?;
        state.serialize_field("extra", &self.extra)?;
        state.serialize_field("paint", &self.paint)?;
        state.end()
    }
}

/// A named entity placed at a grid cell.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Placement {
    /// Entity name, verbatim from the source.
    pub name: String,
    /// Zero-based column.
    pub x: u32,
    /// Zero-based row.
    pub y: u32,
}

/// A painted cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaintMark {
    /// Canonical color name resolved from its code.
    pub color: &'static str,
    /// Canonical stroke name resolved from its code.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: &'static str,
    /// Zero-based column.
    pub x: u32,
    /// Zero-based row.
    pub y: u32,
}
