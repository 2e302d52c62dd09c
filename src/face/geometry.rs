/*
 *  face/geometry.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Square face geometry derived from widget bounds
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::prelude::{Point, Size};

/// Per-frame face geometry
///
/// Never stored between frames; always rebuilt from the current bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Length of the square face: `min(width, height)`
    pub side: u32,

    /// Center of the face, `(side/2, side/2)`
    pub center: Point,

    /// Face radius, `side/2`
    pub radius: i32,
}

impl Geometry {
    pub fn from_bounds(bounds: Size) -> Self {
        let side = bounds.width.min(bounds.height);
        let half = (side / 2) as i32;
        Self {
            side,
            center: Point::new(half, half),
            radius: half,
        }
    }

    /// `fraction` of the side, as a float length.
    #[inline]
    pub fn scaled(&self, fraction: f32) -> f32 {
        self.side as f32 * fraction
    }

    /// A radius `fraction` of the side in from the edge, truncated to whole pixels.
    #[inline]
    pub fn inset_radius(&self, fraction: f32) -> i32 {
        self.center.x - self.scaled(fraction) as i32
    }
}

/// Widget padding in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Padding {
    #[serde(default)]
    pub left: u32,
    #[serde(default)]
    pub top: u32,
    #[serde(default)]
    pub right: u32,
    #[serde(default)]
    pub bottom: u32,
}

impl Padding {
    pub const fn uniform(p: u32) -> Self {
        Self { left: p, top: p, right: p, bottom: p }
    }

    /// Left plus right, pinned at `u32::MAX`.
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom, pinned at `u32::MAX`.
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Square the widget: the face side is the smaller padded extent and
/// each padding pair is added back on its own axis.
pub fn measure_square(available: Size, padding: Padding) -> Size {
    let w = available.width.saturating_sub(padding.horizontal());
    let h = available.height.saturating_sub(padding.vertical());
    let side = w.min(h);
    Size::new(
        side.saturating_add(padding.horizontal()),
        side.saturating_add(padding.vertical()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_from_bounds() {
        let g = Geometry::from_bounds(Size::new(300, 200));
        assert_eq!(g.side, 200);
        assert_eq!(g.center, Point::new(100, 100));
        assert_eq!(g.radius, 100);

        // odd sides floor
        let g = Geometry::from_bounds(Size::new(101, 240));
        assert_eq!(g.side, 101);
        assert_eq!(g.center, Point::new(50, 50));
    }

    #[test]
    fn test_inset_radius_truncates() {
        let g = Geometry::from_bounds(Size::new(150, 150));
        // 150 * 0.12 = 18.0, 150 * 0.05 = 7.5 -> 7
        assert_eq!(g.inset_radius(0.12), 75 - 18);
        assert_eq!(g.inset_radius(0.05), 75 - 7);
    }

    #[test]
    fn test_measure_square() {
        let pad = Padding { left: 4, top: 2, right: 6, bottom: 8 };
        let m = measure_square(Size::new(200, 120), pad);
        // min(200-10, 120-10) = 110
        assert_eq!(m, Size::new(120, 120));

        let m = measure_square(Size::new(90, 300), pad);
        // min(80, 290) = 80
        assert_eq!(m, Size::new(90, 90));

        let m = measure_square(Size::new(64, 128), Padding::default());
        assert_eq!(m, Size::new(64, 64));
    }

    #[test]
    fn test_huge_padding_saturates() {
        let pad = Padding { left: u32::MAX, top: 0, right: 1, bottom: u32::MAX - 1 };
        assert_eq!(pad.horizontal(), u32::MAX);
        assert_eq!(pad.vertical(), u32::MAX - 1);

        // no room left for the face, the request is just the padding
        let m = measure_square(Size::new(100, 100), pad);
        assert_eq!(m, Size::new(u32::MAX, u32::MAX - 1));
    }

    #[test]
    fn test_measure_square_padding_exceeds_bounds() {
        let m = measure_square(Size::new(5, 100), Padding::uniform(4));
        assert_eq!(m, Size::new(8, 8));
    }
}
