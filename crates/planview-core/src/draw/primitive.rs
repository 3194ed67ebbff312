//! Primitive shapes, roles, and styles emitted by the layout engine.

use crate::{
    color::Color,
    draw::Stroke,
    geometry::{Point, Rect},
};

/// Logical role of a primitive inside a plan view.
///
/// Roles let tests assert on layout output ("exactly one separator wall
/// between two modules") and drive z-ordering via
/// [`RenderLayer`](crate::draw::RenderLayer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A module body rectangle.
    ModuleBody,
    /// Module identifier label centered in the body.
    ModuleLabel,
    /// Separator wall between two consecutive modules.
    SeparatorWall,
    /// Exterior wall strip on a module edge.
    ExteriorWall,
    /// Per-module interior wall strip.
    InteriorWall,
    /// Distance label attached to an interior wall.
    WallLabel,
    /// Unit-level interior wall spanning the full unit height.
    GlobalWall,
    /// Global tunnel strip.
    Tunnel,
    /// Global tunnel caption.
    TunnelLabel,
    /// Dashed bounding frame around the view extent.
    Frame,
    /// Airflow arrow or vestibule glyph.
    Airflow,
    /// The "AIR" caption chip on an airflow arrow.
    AirflowCaption,
    /// BACK/FRONT/LEFT/RIGHT edge labels.
    OrientationLabel,
    /// View title caption in stacked mode.
    ViewTitle,
}

/// Horizontal text alignment relative to the anchor point.
///
/// Maps directly onto the SVG `text-anchor` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAlign {
    /// Returns the SVG text-anchor value.
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Geometry of a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    Line {
        from: Point,
        to: Point,
    },
    Polygon {
        points: Vec<Point>,
    },
    Ellipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
    },
    Text {
        anchor: Point,
        content: String,
        font_size: f32,
        align: TextAlign,
    },
}

/// Fill and stroke of a primitive. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    fill: Option<Color>,
    stroke: Option<Stroke>,
}

impl Style {
    pub fn new(fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { fill, stroke }
    }

    /// Fill only, no stroke.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            stroke: None,
        }
    }

    /// Stroke only, no fill.
    pub fn stroked(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }
}

/// One drawable element: role + geometry + style.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    role: Role,
    shape: Shape,
    style: Style,
}

impl Primitive {
    pub fn new(role: Role, shape: Shape, style: Style) -> Self {
        Self { role, shape, style }
    }

    /// A rectangle primitive.
    pub fn rect(role: Role, rect: Rect, style: Style) -> Self {
        Self::new(role, Shape::Rect(rect), style)
    }

    /// A line segment primitive.
    pub fn line(role: Role, from: Point, to: Point, stroke: Stroke) -> Self {
        Self::new(role, Shape::Line { from, to }, Style::stroked(stroke))
    }

    /// A filled polygon primitive (arrowheads).
    pub fn polygon(role: Role, points: Vec<Point>, fill: Color) -> Self {
        Self::new(role, Shape::Polygon { points }, Style::filled(fill))
    }

    /// An ellipse primitive (vestibule glyphs).
    pub fn ellipse(role: Role, center: Point, radius_x: f32, radius_y: f32, style: Style) -> Self {
        Self::new(
            role,
            Shape::Ellipse {
                center,
                radius_x,
                radius_y,
            },
            style,
        )
    }

    /// A centered text primitive with the default (black) fill.
    pub fn text(role: Role, anchor: Point, content: impl Into<String>, font_size: f32) -> Self {
        Self::text_aligned(role, anchor, content, font_size, TextAlign::Middle)
    }

    /// A text primitive with explicit alignment.
    pub fn text_aligned(
        role: Role,
        anchor: Point,
        content: impl Into<String>,
        font_size: f32,
        align: TextAlign,
    ) -> Self {
        Self::new(
            role,
            Shape::Text {
                anchor,
                content: content.into(),
                font_size,
                align,
            },
            Style::filled(Color::default()),
        )
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The rectangle geometry, if this primitive is a rectangle.
    pub fn as_rect(&self) -> Option<Rect> {
        match self.shape {
            Shape::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    /// The text content, if this primitive is a text label.
    pub fn as_text(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
