//! Domain model for AHU unit configuration documents.
//!
//! # Overview
//!
//! - [`UnitDocument`] - deserialization root: unit-level settings plus the
//!   ordered module list
//! - [`ModuleDimension`] - one physical AHU module segment
//! - [`UnitConfig`] - unit-level settings consumed by the layout engine
//!   (global tunnels, global interior walls, separator wall thickness)
//!
//! The legacy application compared free-form strings for tunnel position,
//! tunnel type, and airflow direction, silently falling through on typos.
//! Here those are closed enums whose `FromStr` implementations accept the
//! historical spellings (including `""` and `"None"` for the standard
//! tunnel position) and reject anything else at the deserialization
//! boundary.
//!
//! Model values are immutable during a layout pass: the engine only ever
//! derives drawable geometry from them.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::dimension::{
    self, DEFAULT_HEIGHT_IN, DEFAULT_LENGTH_IN, DEFAULT_WALL_THICKNESS_IN, DEFAULT_WIDTH_IN,
};

/// An unknown value for a closed-enum field in a unit document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} `{value}`, valid values: {expected}")]
pub struct InvalidValue {
    field: &'static str,
    value: String,
    expected: &'static str,
}

impl InvalidValue {
    fn new(field: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// Which stacked partition a module belongs to.
///
/// `Standard`, the empty string, and `"None"` all classify a module into
/// the standard (non-stacked) partition; every module belongs to exactly
/// one of the three partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum TunnelPosition {
    #[default]
    Standard,
    Top,
    Bottom,
}

impl FromStr for TunnelPosition {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "None" | "none" | "Standard" | "standard" => Ok(Self::Standard),
            "Top" | "top" => Ok(Self::Top),
            "Bottom" | "bottom" => Ok(Self::Bottom),
            _ => Err(InvalidValue::new(
                "tunnel position",
                s,
                "Standard, Top, Bottom",
            )),
        }
    }
}

impl TryFrom<String> for TunnelPosition {
    type Error = InvalidValue;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Whether a stacked section is a service tunnel or a vestibule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum TunnelType {
    #[default]
    Tunnel,
    Vestibule,
}

impl FromStr for TunnelType {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "Tunnel" | "tunnel" => Ok(Self::Tunnel),
            "Vestibule" | "vestibule" => Ok(Self::Vestibule),
            _ => Err(InvalidValue::new("tunnel type", s, "Tunnel, Vestibule")),
        }
    }
}

impl TryFrom<String> for TunnelType {
    type Error = InvalidValue;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Airflow annotation direction for a module or a global tunnel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum AirflowDirection {
    #[default]
    None,
    BackToFront,
    FrontToBack,
    Vestibule,
}

impl AirflowDirection {
    /// Returns true for any direction that produces a drawable indicator.
    pub fn is_annotated(self) -> bool {
        self != Self::None
    }
}

impl FromStr for AirflowDirection {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "None" | "none" => Ok(Self::None),
            "Back-To-Front" | "back-to-front" => Ok(Self::BackToFront),
            "Front-To-Back" | "front-to-back" => Ok(Self::FrontToBack),
            "Vestibule" | "vestibule" => Ok(Self::Vestibule),
            _ => Err(InvalidValue::new(
                "airflow direction",
                s,
                "None, Back-To-Front, Front-To-Back, Vestibule",
            )),
        }
    }
}

impl TryFrom<String> for AirflowDirection {
    type Error = InvalidValue;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A single interior wall inside one module.
///
/// `distance_in` is always measured from the nearer named edge: the left
/// wall from the module's top edge, the right wall backward from the
/// bottom edge, the front/back walls from the leading/trailing edge.
#[derive(Debug, Clone, Deserialize)]
pub struct InteriorWall {
    /// Distance from the reference edge, in inches.
    #[serde(default)]
    pub distance_in: f32,

    /// Wall thickness as a dimension string; defaults to 4 inches.
    #[serde(default = "InteriorWall::default_thickness")]
    pub thickness: String,
}

impl InteriorWall {
    fn default_thickness() -> String {
        "4".to_string()
    }

    /// Parsed wall thickness in inches, with the documented default.
    pub fn thickness_in(&self) -> f32 {
        dimension::parse_inches_or(&self.thickness, DEFAULT_WALL_THICKNESS_IN)
    }
}

impl Default for InteriorWall {
    fn default() -> Self {
        Self {
            distance_in: 0.0,
            thickness: Self::default_thickness(),
        }
    }
}

/// The four optional interior walls of a module. Absent means not present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteriorWalls {
    #[serde(default)]
    pub left: Option<InteriorWall>,
    #[serde(default)]
    pub right: Option<InteriorWall>,
    #[serde(default)]
    pub front: Option<InteriorWall>,
    #[serde(default)]
    pub back: Option<InteriorWall>,
}

/// Exterior wall presence flags for the four module edges.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ExteriorWalls {
    #[serde(default)]
    pub front: bool,
    #[serde(default)]
    pub back: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

/// One physical AHU module segment.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDimension {
    /// Module identifier shown in the module body label.
    pub id: String,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Module-type tag (fan, coil, filter, ...). Informational only.
    #[serde(default)]
    pub module_type: String,

    /// Module length along the unit axis, as a dimension string.
    #[serde(default)]
    pub length: String,

    /// Module width across the unit, as a dimension string.
    #[serde(default)]
    pub width: String,

    /// Module height, as a dimension string. Not drawn in plan view but
    /// carried for summary output.
    #[serde(default)]
    pub height: String,

    #[serde(default)]
    pub tunnel_position: TunnelPosition,

    #[serde(default)]
    pub tunnel_type: TunnelType,

    /// Stacked tunnel heights, as dimension strings.
    #[serde(default)]
    pub top_tunnel_height: String,
    #[serde(default)]
    pub bottom_tunnel_height: String,

    #[serde(default)]
    pub airflow: AirflowDirection,

    #[serde(default)]
    pub interior_walls: InteriorWalls,

    #[serde(default)]
    pub exterior_walls: ExteriorWalls,
}

impl ModuleDimension {
    /// Parsed module length in inches, defaulting to 48.
    pub fn length_in(&self) -> f32 {
        dimension::parse_inches_or(&self.length, DEFAULT_LENGTH_IN)
    }

    /// Parsed module width in inches, defaulting to 100.
    pub fn width_in(&self) -> f32 {
        dimension::parse_inches_or(&self.width, DEFAULT_WIDTH_IN)
    }

    /// Parsed module height in inches, defaulting to 100.
    pub fn height_in(&self) -> f32 {
        dimension::parse_inches_or(&self.height, DEFAULT_HEIGHT_IN)
    }
}

/// A global tunnel strip on one side of the unit.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GlobalTunnel {
    #[serde(default)]
    pub include: bool,
    #[serde(default)]
    pub airflow: AirflowDirection,
}

/// The three global tunnel strips a unit may carry.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GlobalTunnels {
    #[serde(default)]
    pub left: GlobalTunnel,
    #[serde(default)]
    pub right: GlobalTunnel,
    #[serde(default)]
    pub middle: GlobalTunnel,
}

/// A unit-level interior wall spanning the full unit height.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GlobalWall {
    #[serde(default)]
    pub include: bool,
    /// Position from the unit's start edge, in inches.
    #[serde(default)]
    pub position_in: f32,
}

/// Unit-level configuration consumed by the layout engine.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitConfig {
    #[serde(default)]
    pub tunnels: GlobalTunnels,

    /// Up to two unit-level interior walls.
    #[serde(default)]
    pub first_wall: Option<GlobalWall>,
    #[serde(default)]
    pub second_wall: Option<GlobalWall>,

    /// Thickness of the separator wall between consecutive modules, in
    /// inches.
    #[serde(default = "UnitConfig::default_wall_thickness")]
    pub wall_thickness_in: f32,
}

impl UnitConfig {
    fn default_wall_thickness() -> f32 {
        DEFAULT_WALL_THICKNESS_IN
    }

    /// Iterates the global walls that carry the include flag.
    pub fn included_walls(&self) -> impl Iterator<Item = GlobalWall> + '_ {
        [self.first_wall, self.second_wall]
            .into_iter()
            .flatten()
            .filter(|wall| wall.include)
    }
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            tunnels: GlobalTunnels::default(),
            first_wall: None,
            second_wall: None,
            wall_thickness_in: Self::default_wall_thickness(),
        }
    }
}

/// Deserialization root of a unit configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitDocument {
    #[serde(default)]
    pub unit: UnitConfig,

    /// Ordered module list; order is the left-to-right placement order.
    #[serde(default)]
    pub modules: Vec<ModuleDimension>,
}
