use glam::Vec2;

/// Offset of the zoom hint from the long-press point, before subtracting the
/// hint's own size.
pub const DEFAULT_HINT_OFFSET: Vec2 = Vec2::new(-130.0, -80.0);

/// Request to show a transient "drag up/down to zoom" hint.
///
/// Handed to the host's hint callback when a long press starts long-press
/// zoom. Drawing it is entirely up to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomHint {
    /// Where the long press landed.
    pub anchor: Vec2,
    /// Suggested offset of the hint's top-left corner from `anchor`.
    pub offset: Vec2,
}

impl ZoomHint {
    /// Hint at `anchor` with the default offset.
    #[must_use]
    pub fn at(anchor: Vec2) -> Self {
        Self {
            anchor,
            offset: DEFAULT_HINT_OFFSET,
        }
    }

    /// Top-left corner for a hint of `size`, placed up and to the left of
    /// the finger so it stays visible.
    #[must_use]
    pub fn top_left(&self, size: Vec2) -> Vec2 {
        self.anchor + self.offset - size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_clears_the_finger() {
        let hint = ZoomHint::at(Vec2::new(400.0, 300.0));
        assert_eq!(hint.top_left(Vec2::new(100.0, 40.0)), Vec2::new(170.0, 180.0));
    }
}
