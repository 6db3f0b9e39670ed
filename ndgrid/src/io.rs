//! Serde support for grids.
//!
//! `NdGrid<T, D>` serializes as `{ extents: [..], data: [..] }` and
//! `Grid<T>` as `{ rows, cols, data: [..] }`, with `data` in row-major
//! order. Deserialization checks the rank and the element count and rejects
//! input that does not describe a whole grid.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use ndgrid_core::CoreError;

use crate::grid2d::Grid;
use crate::nd::NdGrid;

#[derive(serde::Deserialize)]
#[serde(rename = "NdGrid")]
struct NdGridRepr<T> {
    extents: Vec<usize>,
    data: Vec<T>,
}

#[derive(serde::Deserialize)]
#[serde(rename = "Grid")]
struct GridRepr<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Serialize, const D: usize> Serialize for NdGrid<T, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extents = self.extents();
        let mut state = serializer.serialize_struct("NdGrid", 2)?;
        state.serialize_field("extents", &extents[..])?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de, T: Deserialize<'de>, const D: usize> Deserialize<'de> for NdGrid<T, D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let repr = NdGridRepr::<T>::deserialize(deserializer)?;
        let extents = <[usize; D]>::try_from(repr.extents.as_slice()).map_err(|_| {
            de::Error::custom(CoreError::RankMismatch {
                expected: D,
                got: repr.extents.len(),
            })
        })?;
        NdGrid::from_vec(extents, repr.data).map_err(de::Error::custom)
    }
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("rows", &self.rows())?;
        state.serialize_field("cols", &self.cols())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let repr = GridRepr::<T>::deserialize(deserializer)?;
        Grid::from_vec(repr.rows, repr.cols, repr.data).map_err(de::Error::custom)
    }
}
