#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placement of a surface within its host window, in logical coordinates.
///
/// Maps raw event positions into surface-local and normalized coordinates.
/// No clamping is performed here; a zero-size surface produces non-finite
/// normalized components, which consumers treat as "no valid target".
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceBounds {
    pub origin: [f32; 2],
    pub size: [f32; 2],
}

impl SurfaceBounds {
    pub fn new(origin: [f32; 2], size: [f32; 2]) -> Self {
        Self { origin, size }
    }

    /// Surface-local coordinates of a window-level position
    pub fn to_local(&self, position: [f32; 2]) -> [f32; 2] {
        [position[0] - self.origin[0], position[1] - self.origin[1]]
    }

    /// Normalized coordinates of a surface-local position
    pub fn to_normalized(&self, local: [f32; 2]) -> [f32; 2] {
        [local[0] / self.size[0], local[1] / self.size[1]]
    }

    /// Window-level position straight to normalized coordinates
    pub fn normalize(&self, position: [f32; 2]) -> [f32; 2] {
        self.to_normalized(self.to_local(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_to_local() {
        let bounds = SurfaceBounds::new([10.0, 20.0], [200.0, 100.0]);
        let local = bounds.to_local([60.0, 70.0]);
        assert_approx_eq!(f32, local[0], 50.0);
        assert_approx_eq!(f32, local[1], 50.0);
    }

    #[test]
    fn test_to_normalized() {
        let bounds = SurfaceBounds::new([0.0, 0.0], [200.0, 100.0]);
        let norm = bounds.to_normalized([50.0, 75.0]);
        assert_approx_eq!(f32, norm[0], 0.25);
        assert_approx_eq!(f32, norm[1], 0.75);
    }

    #[test]
    fn test_normalize_with_offset_origin() {
        let bounds = SurfaceBounds::new([100.0, 50.0], [400.0, 200.0]);
        let norm = bounds.normalize([300.0, 150.0]);
        assert_approx_eq!(f32, norm[0], 0.5);
        assert_approx_eq!(f32, norm[1], 0.5);
    }

    #[test]
    fn test_degenerate_size_is_non_finite() {
        let bounds = SurfaceBounds::new([0.0, 0.0], [0.0, 0.0]);
        let norm = bounds.normalize([10.0, 10.0]);
        assert!(!norm[0].is_finite());
        assert!(!norm[1].is_finite());
    }
}
