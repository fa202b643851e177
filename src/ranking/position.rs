//! Positional description of a bounding box
//!
//! The frame is split into thirds on each axis using the box center. The
//! label is user-facing text: "center", a single band ("top", "left"), or
//! "{vertical} {horizontal}" with the vertical band first.

use std::fmt;

use super::analysis::BoundingBox;
use crate::error::CoreResult;

const LOWER_BAND_LIMIT: f64 = 0.33;
const UPPER_BAND_LIMIT: f64 = 0.66;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalBand {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalBand {
    Top,
    Middle,
    Bottom,
}

impl HorizontalBand {
    pub fn from_center(x: f64) -> Self {
        if x < LOWER_BAND_LIMIT {
            HorizontalBand::Left
        } else if x > UPPER_BAND_LIMIT {
            HorizontalBand::Right
        } else {
            HorizontalBand::Center
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalBand::Left => "left",
            HorizontalBand::Center => "center",
            HorizontalBand::Right => "right",
        }
    }
}

impl VerticalBand {
    pub fn from_center(y: f64) -> Self {
        if y < LOWER_BAND_LIMIT {
            VerticalBand::Top
        } else if y > UPPER_BAND_LIMIT {
            VerticalBand::Bottom
        } else {
            VerticalBand::Middle
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalBand::Top => "top",
            VerticalBand::Middle => "middle",
            VerticalBand::Bottom => "bottom",
        }
    }
}

/// Where in the frame an item sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub vertical: VerticalBand,
    pub horizontal: HorizontalBand,
}

impl Placement {
    pub fn of(bbox: &BoundingBox) -> CoreResult<Self> {
        bbox.validate()?;
        let (cx, cy) = bbox.center();
        Ok(Self {
            vertical: VerticalBand::from_center(cy),
            horizontal: HorizontalBand::from_center(cx),
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.vertical, self.horizontal) {
            (VerticalBand::Middle, HorizontalBand::Center) => f.write_str("center"),
            (v, HorizontalBand::Center) => f.write_str(v.as_str()),
            (VerticalBand::Middle, h) => f.write_str(h.as_str()),
            (v, h) => write!(f, "{} {}", v.as_str(), h.as_str()),
        }
    }
}

/// Label such as "top left", "bottom" or "center"
pub fn describe_position(bbox: &BoundingBox) -> CoreResult<String> {
    Ok(Placement::of(bbox)?.to_string())
}
