use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::booking::domain::errors::FormError;

/// Sizes offered by the clothing size picker
pub const CLOTHING_SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Editable fields of a participant record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParticipantField {
    FullName,
    Dni,
    Age,
    ClothingSize,
}

impl ParticipantField {
    pub const ALL: [ParticipantField; 4] = [
        ParticipantField::FullName,
        ParticipantField::Dni,
        ParticipantField::Age,
        ParticipantField::ClothingSize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantField::FullName => "fullName",
            ParticipantField::Dni => "dni",
            ParticipantField::Age => "age",
            ParticipantField::ClothingSize => "clothingSize",
        }
    }
}

impl fmt::Display for ParticipantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(ParticipantField::FullName),
            "dni" => Ok(ParticipantField::Dni),
            "age" => Ok(ParticipantField::Age),
            "clothingSize" => Ok(ParticipantField::ClothingSize),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// One row of the participant roster, all values kept as entered
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    pub full_name: String,
    pub dni: String,
    pub age: String,
    /// Empty when no size was picked
    #[serde(default)]
    pub clothing_size: String,
}

impl ParticipantRecord {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ParticipantField) -> &str {
        match field {
            ParticipantField::FullName => &self.full_name,
            ParticipantField::Dni => &self.dni,
            ParticipantField::Age => &self.age,
            ParticipantField::ClothingSize => &self.clothing_size,
        }
    }

    pub fn set(&mut self, field: ParticipantField, value: String) {
        match field {
            ParticipantField::FullName => self.full_name = value,
            ParticipantField::Dni => self.dni = value,
            ParticipantField::Age => self.age = value,
            ParticipantField::ClothingSize => self.clothing_size = value,
        }
    }
}
