#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Activity {
    Walking,
    Running,
    Cycling,
}

impl Activity {
    /// Metabolic equivalent of the activity, i.e. energy cost relative to
    /// resting metabolism.
    pub fn met(&self) -> f64 {
        match self {
            Activity::Walking => 3.5,
            Activity::Running => 7.5,
            Activity::Cycling => 6.0,
        }
    }
}
