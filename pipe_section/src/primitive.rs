// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagram primitives and the ordered scene that holds them.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

/// A shape in logical units.
///
/// With the `serde` feature this (de)serializes to the diagram description
/// format: `{"type": "arc", "point": [x, y], "r": 1}`,
/// `{"type": "rect", "point": [x, y], "width": 4, "height": 3}` and
/// `{"type": "line", "path": [[x, y], ...]}`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Primitive {
    /// A filled circle.
    Arc {
        /// Center in logical units.
        #[cfg_attr(feature = "serde", serde(rename = "point", with = "serde_point"))]
        center: Point,
        /// Radius in logical units.
        #[cfg_attr(feature = "serde", serde(rename = "r"))]
        radius: f64,
    },
    /// A filled rectangle hanging from its anchor corner.
    ///
    /// `origin` is the upper-left corner in logical space: the rectangle spans
    /// `[origin.x, origin.x + width]` horizontally and
    /// `[origin.y - height, origin.y]` vertically.
    Rect {
        /// Anchor corner in logical units.
        #[cfg_attr(feature = "serde", serde(rename = "point", with = "serde_point"))]
        origin: Point,
        /// Extent along +x in logical units.
        width: f64,
        /// Extent along -y in logical units.
        height: f64,
    },
    /// An open polyline.
    Line {
        /// Vertices in drawing order. Fewer than two points draws nothing.
        #[cfg_attr(feature = "serde", serde(with = "serde_point::path"))]
        path: Vec<Point>,
    },
}

/// The variant of a [`Primitive`], without its geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// [`Primitive::Arc`].
    Arc,
    /// [`Primitive::Rect`].
    Rect,
    /// [`Primitive::Line`].
    Line,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Arc => "arc",
            Self::Rect => "rect",
            Self::Line => "line",
        })
    }
}

impl Primitive {
    /// Creates a circle.
    pub fn arc(center: impl Into<Point>, radius: f64) -> Self {
        Self::Arc {
            center: center.into(),
            radius,
        }
    }

    /// Creates a rectangle anchored at its upper-left corner.
    pub fn rect(origin: impl Into<Point>, width: f64, height: f64) -> Self {
        Self::Rect {
            origin: origin.into(),
            width,
            height,
        }
    }

    /// Creates a polyline.
    pub fn line<P: Into<Point>>(path: impl IntoIterator<Item = P>) -> Self {
        Self::Line {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the variant tag.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Arc { .. } => PrimitiveKind::Arc,
            Self::Rect { .. } => PrimitiveKind::Rect,
            Self::Line { .. } => PrimitiveKind::Line,
        }
    }

    /// Whether rendering this primitive produces any output.
    pub fn is_drawable(&self) -> bool {
        match self {
            Self::Arc { .. } | Self::Rect { .. } => true,
            Self::Line { path } => path.len() >= 2,
        }
    }
}

/// An ordered list of primitives.
///
/// Order is both paint order and hit-test priority: the first primitive that
/// contains a click wins.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Appends a primitive, builder style.
    pub fn with(mut self, primitive: Primitive) -> Self {
        self.push(primitive);
        self
    }

    /// Primitive at `index`.
    pub fn get(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    /// Primitives in scene order.
    pub fn iter(&self) -> core::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The primitives as a slice.
    pub fn as_slice(&self) -> &[Primitive] {
        &self.primitives
    }
}

impl From<Vec<Primitive>> for Scene {
    fn from(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Primitive;
    type IntoIter = core::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Points as `[x, y]` pairs in the description format.
#[cfg(feature = "serde")]
mod serde_point {
    use kurbo::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(p: &Point, s: S) -> Result<S::Ok, S::Error> {
        (p.x, p.y).serialize(s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Point, D::Error> {
        let (x, y) = <(f64, f64)>::deserialize(d)?;
        Ok(Point::new(x, y))
    }

    pub(super) mod path {
        use alloc::vec::Vec;

        use kurbo::Point;
        use serde::{Deserialize, Deserializer, Serializer};

        pub(crate) fn serialize<S: Serializer>(path: &[Point], s: S) -> Result<S::Ok, S::Error> {
            s.collect_seq(path.iter().map(|p| (p.x, p.y)))
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Point>, D::Error> {
            let pairs = Vec::<(f64, f64)>::deserialize(d)?;
            Ok(pairs.into_iter().map(|(x, y)| Point::new(x, y)).collect())
        }
    }
}
