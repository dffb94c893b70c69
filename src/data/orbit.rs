use glam::Vec3;

/// Accumulated drag rotation, in degrees.
///
/// Pitch stays within the limit handed to [`OrbitState::drag_to`]; yaw is
/// never clamped and wraps through the trigonometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbitState {
    pub yaw: f32,
    pub pitch: f32,
    anchor: (f64, f64),
    dragging: bool,
}

impl OrbitState {
    pub fn new(anchor: (f64, f64)) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            anchor,
            dragging: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn anchor(&self) -> (f64, f64) {
        self.anchor
    }

    pub fn begin_drag(&mut self, (x, y): (f64, f64)) {
        self.dragging = true;
        self.anchor = (x, y);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Returns whether the angles changed, i.e. a drag was in progress.
    pub fn drag_to(&mut self, (x, y): (f64, f64), sensitivity: f32, pitch_limit: f32) -> bool {
        if !self.dragging {
            return false;
        }

        // screen y grows downward
        let x_offset = (x - self.anchor.0) as f32 * sensitivity;
        let y_offset = (self.anchor.1 - y) as f32 * sensitivity;
        self.anchor = (x, y);

        self.yaw += x_offset;
        self.pitch = (self.pitch + y_offset).clamp(-pitch_limit, pitch_limit);
        true
    }

    /// Tilts `point` by the pitch around Y, then turns the result by the yaw
    /// around Z.
    pub fn rotate(&self, point: Vec3) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();

        let new_x = point.x * cos_pitch + point.z * sin_pitch;
        let new_y = point.y;
        let new_z = -point.x * sin_pitch + point.z * cos_pitch;

        Vec3::new(
            new_x * cos_yaw - new_y * sin_yaw,
            new_x * sin_yaw + new_y * cos_yaw,
            new_z,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;
    use crate::data::sphere_points::generate_seeded;

    const SENSITIVITY: f32 = 0.1;
    const PITCH_LIMIT: f32 = 89.0;

    fn dragging_from(anchor: (f64, f64)) -> OrbitState {
        let mut state = OrbitState::new((600.0, 500.0));
        state.begin_drag(anchor);
        state
    }

    #[test]
    fn horizontal_drag_turns_yaw() {
        let mut state = dragging_from((100.0, 100.0));

        assert!(state.drag_to((110.0, 100.0), SENSITIVITY, PITCH_LIMIT));

        assert_abs_diff_eq!(state.yaw, 1.0, epsilon = 1e-6);
        assert_eq!(state.pitch, 0.0);
        assert_eq!(state.anchor(), (110.0, 100.0));
    }

    #[test]
    fn upward_drag_raises_pitch() {
        let mut state = dragging_from((100.0, 100.0));

        state.drag_to((100.0, 80.0), SENSITIVITY, PITCH_LIMIT);

        assert_abs_diff_eq!(state.pitch, 2.0, epsilon = 1e-6);
        assert_eq!(state.yaw, 0.0);
    }

    #[rstest]
    #[case(-1000.0, 89.0)]
    #[case(1000.0, -89.0)]
    fn pitch_saturates_at_limit(#[case] end_y: f64, #[case] expected: f32) {
        let mut state = dragging_from((0.0, 0.0));

        state.drag_to((0.0, end_y), SENSITIVITY, PITCH_LIMIT);
        assert_eq!(state.pitch, expected);

        // further drags in the same direction stay pinned
        state.drag_to((0.0, 2.0 * end_y), SENSITIVITY, PITCH_LIMIT);
        assert_eq!(state.pitch, expected);
    }

    #[test]
    fn yaw_is_never_clamped() {
        let mut state = dragging_from((0.0, 0.0));

        (1..=10).for_each(|i| {
            state.drag_to((i as f64 * 1000.0, 0.0), SENSITIVITY, PITCH_LIMIT);
        });

        assert_abs_diff_eq!(state.yaw, 1000.0, epsilon = 1e-3);
    }

    #[test]
    fn idle_moves_are_ignored() {
        let mut state = OrbitState::new((600.0, 500.0));

        assert!(!state.drag_to((700.0, 300.0), SENSITIVITY, PITCH_LIMIT));
        assert_eq!((state.yaw, state.pitch), (0.0, 0.0));
        assert_eq!(state.anchor(), (600.0, 500.0));

        state.begin_drag((700.0, 300.0));
        state.end_drag();
        assert!(!state.drag_to((800.0, 200.0), SENSITIVITY, PITCH_LIMIT));
        assert_eq!((state.yaw, state.pitch), (0.0, 0.0));
    }

    #[rstest]
    #[case(90.0, 0.0, Vec3::X, Vec3::Y)]
    #[case(0.0, 90.0, Vec3::X, Vec3::NEG_Z)]
    #[case(0.0, 90.0, Vec3::Z, Vec3::X)]
    #[case(180.0, 0.0, Vec3::Y, Vec3::NEG_Y)]
    #[case(90.0, 45.0, Vec3::Z, Vec3::new(0.0, 0.5f32.sqrt(), 0.5f32.sqrt()))]
    fn rotates_pitch_then_yaw(
        #[case] yaw: f32,
        #[case] pitch: f32,
        #[case] point: Vec3,
        #[case] expected: Vec3,
    ) {
        let state = OrbitState {
            yaw,
            pitch,
            ..OrbitState::new((0.0, 0.0))
        };

        let rotated = state.rotate(point);

        assert_abs_diff_eq!(rotated.x, expected.x, epsilon = 1e-5);
        assert_abs_diff_eq!(rotated.y, expected.y, epsilon = 1e-5);
        assert_abs_diff_eq!(rotated.z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn rotation_preserves_sphere() {
        let state = OrbitState {
            yaw: 123.0,
            pitch: -37.0,
            ..OrbitState::new((0.0, 0.0))
        };

        generate_seeded(100, 11).iter().for_each(|point| {
            let rotated = state.rotate(point.position());
            assert_abs_diff_eq!(rotated.length(), 1.0, epsilon = 1e-5);
        });
    }

    #[test]
    fn zero_angles_leave_seeded_points_unchanged() {
        let points = generate_seeded(3, 2024);
        let state = OrbitState::new((600.0, 500.0));

        let rotated = points
            .iter()
            .map(|point| state.rotate(point.position()))
            .collect::<Vec<_>>();

        assert_eq!(rotated.len(), 3);
        points.iter().zip(rotated).for_each(|(point, rotated)| {
            assert_eq!(rotated, point.position());
        });
    }
}
