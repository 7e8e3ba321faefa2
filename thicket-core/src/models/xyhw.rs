//! Window and screen rectangles.
use serde::{Deserialize, Serialize};

/// Window placement. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct Xyhw {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Split along the x axis, the first part is `ratio` of the width.
    #[must_use]
    pub fn split_vertical(&self, ratio: f32) -> (Self, Self) {
        let first_w = (self.w as f32 * ratio).round() as u32;
        let first = Self {
            w: first_w,
            ..*self
        };
        let second = Self {
            x: self.x + first_w as i32,
            w: self.w.saturating_sub(first_w),
            ..*self
        };
        (first, second)
    }

    /// Split along the y axis, the first part is `ratio` of the height.
    #[must_use]
    pub fn split_horizontal(&self, ratio: f32) -> (Self, Self) {
        let first_h = (self.h as f32 * ratio).round() as u32;
        let first = Self {
            h: first_h,
            ..*self
        };
        let second = Self {
            y: self.y + first_h as i32,
            h: self.h.saturating_sub(first_h),
            ..*self
        };
        (first, second)
    }

    /// Shrink on every side, never collapsing below one pixel nor leaving the original.
    #[must_use]
    pub fn shrink(&self, amount: u32) -> Self {
        let dx = amount.min(self.w / 2);
        let dy = amount.min(self.h / 2);
        Self {
            x: self.x.saturating_add(i32::try_from(dx).unwrap_or(i32::MAX)),
            y: self.y.saturating_add(i32::try_from(dy).unwrap_or(i32::MAX)),
            w: (self.w - 2 * dx).max(1),
            h: (self.h - 2 * dy).max(1),
        }
    }

    /// Resize so the rectangle plus a border of `border` fits in the original.
    #[must_use]
    pub fn without_border(&self, border: u32) -> Self {
        Self {
            w: self.w.saturating_sub(border.saturating_mul(2)).max(1),
            h: self.h.saturating_sub(border.saturating_mul(2)).max(1),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitting_vertically_should_keep_the_full_width() {
        let rect = Xyhw::new(0, 0, 1001, 500);
        let (first, second) = rect.split_vertical(0.5);
        assert_eq!(first.w + second.w, 1001);
        assert_eq!(second.x, first.w as i32);
        assert_eq!(first.h, 500);
        assert_eq!(second.h, 500);
    }

    #[test]
    fn splitting_horizontally_should_offset_the_second_part() {
        let rect = Xyhw::new(10, 20, 300, 200);
        let (first, second) = rect.split_horizontal(0.25);
        assert_eq!(first, Xyhw::new(10, 20, 300, 50));
        assert_eq!(second, Xyhw::new(10, 70, 300, 150));
    }

    #[test]
    fn shrinking_a_tiny_rectangle_should_not_collapse_it() {
        let rect = Xyhw::new(0, 0, 4, 4);
        let shrunk = rect.shrink(10);
        assert_eq!(shrunk.w, 1);
        assert_eq!(shrunk.h, 1);
    }

    #[test]
    fn huge_gaps_and_borders_should_saturate() {
        let rect = Xyhw::new(10, 20, 1920, 1080);
        let shrunk = rect.shrink(3_000_000_000);
        assert_eq!(shrunk, Xyhw::new(970, 560, 1, 1));
        let bordered = rect.without_border(u32::MAX);
        assert_eq!(bordered, Xyhw::new(10, 20, 1, 1));
    }
}
