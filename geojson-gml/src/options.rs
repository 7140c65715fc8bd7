//! Encoding options.
//!
//! [`EncodeOptions`] is what a caller configures once (and can be read from JSON with the same keys the
//! GeoJSON-to-WFS tooling uses: `srsName`, `srsDimension`, `gmlId`, `gmlIds`). The encoder derives a fresh
//! [`ElementOptions`] value for every element it writes, so sibling members never see each other's
//! attributes.

use serde::{Deserialize, Serialize};

use crate::version::GmlVersion;

/// Caller-level encoding options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncodeOptions {
    /// SRS identifier of the root element. `None` selects the version default, an empty string omits the
    /// attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srs_name: Option<String>,
    /// Coordinate dimension written on `pos`/`posList` elements. GML 3.2.1 only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srs_dimension: Option<u32>,
    /// `gml:id` of the root element. GML 3.2.1 only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gml_id: Option<String>,
    /// `gml:id` of every member of a multi-geometry, matched by position. GML 3.2.1 only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gml_ids: Vec<String>,
}

impl EncodeOptions {
    /// Sets the SRS identifier.
    pub fn with_srs_name(mut self, srs_name: impl Into<String>) -> Self {
        self.srs_name = Some(srs_name.into());
        self
    }

    /// Omits the `srsName` attribute from every element.
    pub fn without_srs_name(mut self) -> Self {
        self.srs_name = Some(String::new());
        self
    }

    /// Sets the coordinate dimension.
    pub fn with_srs_dimension(mut self, srs_dimension: u32) -> Self {
        self.srs_dimension = Some(srs_dimension);
        self
    }

    /// Sets the root `gml:id`.
    pub fn with_gml_id(mut self, gml_id: impl Into<String>) -> Self {
        self.gml_id = Some(gml_id.into());
        self
    }

    /// Sets positional member ids.
    pub fn with_gml_ids<I, S>(mut self, gml_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gml_ids = gml_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if any of the GML 3 only options is set.
    pub fn has_v3_options(&self) -> bool {
        self.srs_dimension.is_some() || self.gml_id.is_some() || !self.gml_ids.is_empty()
    }

    /// Options of the root element for the given version.
    ///
    /// `fallback_id` (the geometry's own id) becomes the root `gml:id` when no `gml_id` is set, so ids read
    /// from GeoJSON survive without repeating them in the options.
    pub fn root<'a>(
        &'a self,
        version: GmlVersion,
        fallback_id: Option<&'a str>,
    ) -> ElementOptions<'a> {
        ElementOptions {
            srs_name: Some(
                self.srs_name
                    .as_deref()
                    .unwrap_or(version.default_srs_name()),
            ),
            srs_dimension: self.srs_dimension,
            gml_id: self.gml_id.as_deref().or(fallback_id),
            gml_ids: &self.gml_ids,
        }
    }
}

/// Attributes of a single encoded element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementOptions<'a> {
    /// Value of `srsName`.
    pub srs_name: Option<&'a str>,
    /// Value of `srsDimension` on the coordinate element.
    pub srs_dimension: Option<u32>,
    /// Value of `gml:id`.
    pub gml_id: Option<&'a str>,
    /// Positional ids of the members, if this element is a multi-geometry.
    pub gml_ids: &'a [String],
}

impl<'a> ElementOptions<'a> {
    /// Options carrying only the SRS identifier.
    pub fn srs(srs_name: &'a str) -> Self {
        Self {
            srs_name: Some(srs_name),
            ..Default::default()
        }
    }

    /// Id assigned to the member at `index`: the member's own id, then the positional id, then none.
    pub fn member_id(&self, index: usize, own_id: Option<&'a str>) -> Option<&'a str> {
        own_id
            .filter(|id| !id.is_empty())
            .or_else(|| self.gml_ids.get(index).map(String::as_str))
            .filter(|id| !id.is_empty())
    }

    /// Options of a member element inheriting SRS attributes of its parent.
    pub fn inherited(&self, gml_id: Option<&'a str>) -> Self {
        Self {
            srs_name: self.srs_name,
            srs_dimension: self.srs_dimension,
            gml_id,
            gml_ids: &[],
        }
    }
}
