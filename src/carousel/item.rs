//! A single carousel entry and its per-frame visual state.

use glam::{Mat4, Vec3};

/// How an item is shaded: a bound texture or a flat tint color.
///
/// Both variants flow through the same material pipeline; flat-color items
/// bind a 1x1 white texture and carry the color in the tint uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Appearance {
    /// Index of a texture owned by the renderer.
    Textured(usize),
    /// RGB tint in `[0, 1]`.
    FlatColor([f32; 3]),
}

/// One entry on the carousel ring.
///
/// `position`, `angle`, and `look_at_angle_y` are fixed at creation;
/// `rotation_y` and `scale_factor` are rewritten every frame by the
/// carousel's visual update.
#[derive(Debug, Clone)]
pub struct Item {
    /// Stable identity, equal to the ring index.
    pub id: usize,
    /// World position on the ring circle (y = 0 plane).
    pub position: Vec3,
    /// Ring angle this item was placed at, in radians.
    pub angle: f32,
    /// Y rotation that makes the item face the ring center: `atan2(x, z)`.
    pub look_at_angle_y: f32,
    /// Current facing rotation, in radians.
    pub rotation_y: f32,
    /// Snapshot of `rotation_y` taken when the item loses selection, used
    /// as the source for the settle-back interpolation.
    pub rotation_y_start: f32,
    /// Current uniform scale (1.0 at rest).
    pub scale_factor: f32,
    /// Mesh handle (index into the renderer's mesh set).
    pub mesh: usize,
    /// Surface appearance.
    pub appearance: Appearance,
}

impl Item {
    /// Place item `index` of `count` on a ring of the given radius.
    #[must_use]
    pub fn on_ring(
        index: usize,
        count: usize,
        radius: f32,
        mesh: usize,
        appearance: Appearance,
    ) -> Self {
        let angle = index as f32 / count as f32 * std::f32::consts::TAU;
        let x = angle.sin() * radius;
        let z = angle.cos() * radius;
        let look_at_angle_y = x.atan2(z);

        Self {
            id: index,
            position: Vec3::new(x, 0.0, z),
            angle,
            look_at_angle_y,
            rotation_y: look_at_angle_y,
            rotation_y_start: 0.0,
            scale_factor: 1.0,
            mesh,
            appearance,
        }
    }

    /// Model matrix: translate to the ring position, spin about the local
    /// Y axis, then apply uniform scale (translate outermost, so the item
    /// rotates and scales about its own origin).
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_scale(Vec3::splat(self.scale_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_placement_matches_reference_layout() {
        // N = 10, radius = 10: item 0 sits at (0, 0, 10)
        let item = Item::on_ring(0, 10, 10.0, 0, Appearance::FlatColor([1.0; 3]));
        assert!(item.position.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
        assert_eq!(item.angle, 0.0);

        // item 2 is at angle 2*PI*2/10 ~ 1.2566, position ~ (9.511, 0, 3.090)
        let item = Item::on_ring(2, 10, 10.0, 0, Appearance::FlatColor([1.0; 3]));
        assert!((item.angle - 1.256_637).abs() < 1e-5);
        assert!(item.position.abs_diff_eq(Vec3::new(9.510_565, 0.0, 3.090_170), 1e-4));
    }

    #[test]
    fn look_at_angle_faces_ring_center() {
        for i in 0..10 {
            let item = Item::on_ring(i, 10, 10.0, 0, Appearance::Textured(0));
            // atan2(sin a * r, cos a * r) recovers the placement angle
            // wrapped into (-PI, PI]
            let expected = item.position.x.atan2(item.position.z);
            assert_eq!(item.look_at_angle_y, expected);
        }
    }

    #[test]
    fn model_matrix_places_local_origin_at_ring_position() {
        let mut item = Item::on_ring(3, 8, 12.5, 1, Appearance::Textured(2));
        item.rotation_y = 2.3;
        item.scale_factor = 1.4;
        let world = item.model_matrix().transform_point3(Vec3::ZERO);
        assert!(world.abs_diff_eq(item.position, 1e-4));
    }
}
