//! Shared geometry calculations for annotation rendering

/// Arrow geometry constants
pub mod arrow {
    /// Arrowhead length in canvas pixels
    pub const HEAD_LENGTH: f32 = 16.0;
    /// Arrowhead half-angle from the shaft in radians (30 degrees)
    pub const HEAD_ANGLE: f32 = 0.523_598_8; // 30.0_f32.to_radians()
    /// Minimum arrow length for a head direction to exist
    pub const MIN_LENGTH: f32 = 1.0;

    /// Calculate the two back corners of the arrowhead for an arrow from
    /// start to end. Returns (head1_x, head1_y, head2_x, head2_y), or None
    /// when the arrow is too short to have a direction.
    pub fn head_points(
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        head_length: f32,
    ) -> Option<(f32, f32, f32, f32)> {
        let dx = end_x - start_x;
        let dy = end_y - start_y;
        let length = (dx * dx + dy * dy).sqrt();
        if length < MIN_LENGTH {
            return None;
        }

        // Unit direction vector (pointing from start to end)
        let nx = dx / length;
        let ny = dy / length;

        let cos_a = HEAD_ANGLE.cos();
        let sin_a = HEAD_ANGLE.sin();

        // First corner (reverse direction rotated clockwise)
        let head1_dx = -nx * cos_a - (-ny) * sin_a;
        let head1_dy = -nx * sin_a + (-ny) * cos_a;
        let head1_x = end_x + head1_dx * head_length;
        let head1_y = end_y + head1_dy * head_length;

        // Second corner (reverse direction rotated counter-clockwise)
        let head2_dx = -nx * cos_a + (-ny) * sin_a;
        let head2_dy = -nx * (-sin_a) + (-ny) * cos_a;
        let head2_x = end_x + head2_dx * head_length;
        let head2_y = end_y + head2_dy * head_length;

        Some((head1_x, head1_y, head2_x, head2_y))
    }
}

/// Shape rendering constants
pub mod shape {
    /// Alpha for the translucent interior fill of rectangles (0-255)
    pub const FILL_ALPHA: u8 = 31; // ~0.12
}

/// Text rendering constants
pub mod text {
    /// Drop shadow offset in pixels, applied on both axes
    pub const SHADOW_OFFSET: i32 = 2;
}

/// Normalize min/max coordinates from arbitrary start/end points
#[inline]
pub fn normalize_rect(x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32, f32, f32) {
    let (min_x, max_x) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    let (min_y, max_y) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
    (min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rect_orders_coordinates() {
        assert_eq!(
            normalize_rect(10.0, 20.0, 5.0, 2.0),
            normalize_rect(5.0, 2.0, 10.0, 20.0)
        );
        assert_eq!(normalize_rect(10.0, 2.0, 5.0, 20.0), (5.0, 2.0, 10.0, 20.0));
    }

    #[test]
    fn test_head_points_symmetric_around_shaft() {
        // Horizontal arrow pointing right; corners sit behind the tip,
        // mirrored across the shaft
        let (h1x, h1y, h2x, h2y) =
            arrow::head_points(0.0, 0.0, 100.0, 0.0, arrow::HEAD_LENGTH).unwrap();
        assert!((h1x - h2x).abs() < 1e-4);
        assert!((h1y + h2y).abs() < 1e-4);
        assert!(h1x < 100.0);

        // At 30 degrees the corners sit head_length*cos(30) behind the tip
        let expected_x = 100.0 - arrow::HEAD_LENGTH * arrow::HEAD_ANGLE.cos();
        assert!((h1x - expected_x).abs() < 1e-3);
    }

    #[test]
    fn test_head_points_zero_length_is_none() {
        assert!(arrow::head_points(50.0, 50.0, 50.0, 50.0, arrow::HEAD_LENGTH).is_none());
    }
}
