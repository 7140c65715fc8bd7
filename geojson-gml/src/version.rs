//! See documentation for [`GmlVersion`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GmlError;

/// Target GML dialect.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GmlVersion {
    /// GML 2.1.2 simple features: `coordinates` elements, `outerBoundaryIs`/`innerBoundaryIs` rings.
    #[serde(rename = "2.1.2")]
    V2_1_2,
    /// GML 3.2.1: `pos`/`posList` elements, `gml:id` attributes, `exterior`/`interior` rings.
    #[default]
    #[serde(rename = "3.2.1")]
    V3_2_1,
}

impl GmlVersion {
    /// SRS used when the caller does not provide one.
    pub fn default_srs_name(&self) -> &'static str {
        match self {
            GmlVersion::V2_1_2 => "EPSG:4326",
            GmlVersion::V3_2_1 => "http://www.opengis.net/def/crs/EPSG/0/4326",
        }
    }

    /// Version string, e.g. `"3.2.1"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GmlVersion::V2_1_2 => "2.1.2",
            GmlVersion::V3_2_1 => "3.2.1",
        }
    }
}

impl Display for GmlVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GmlVersion {
    type Err = GmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" | "2.1.2" => Ok(GmlVersion::V2_1_2),
            "3" | "3.2.1" => Ok(GmlVersion::V3_2_1),
            other => Err(GmlError::UnknownVersion(other.to_string())),
        }
    }
}
