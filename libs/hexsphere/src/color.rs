//! # Tile Colors
//!
//! RGBA colors for flat-shaded tiles, drawn from an injected random source
//! so a seeded session always paints the same planet.

use rand::Rng;

use crate::polyhedron::Polyhedron;

/// RGBA color, components in `[0.0, 1.0]`, f32 for the GPU.
pub type Color = [f32; 4];

/// Draws an opaque color with uniformly random RGB components.
///
/// # Example
///
/// ```rust
/// use hexsphere::color::random_color;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let color = random_color(&mut rng);
/// assert_eq!(color[3], 1.0);
/// ```
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>(), 1.0]
}

/// Gives every face group that has no color yet a random one.
///
/// Groups are visited in ascending handle order, so the same seed paints
/// the same mesh the same way. Colors already assigned are kept. Returns
/// the number of groups painted.
pub fn paint_groups<R: Rng + ?Sized>(poly: &mut Polyhedron, rng: &mut R) -> usize {
    let uncolored: Vec<_> = poly
        .group_sizes()
        .into_keys()
        .filter(|group| poly.color_of(*group).is_none())
        .collect();
    for group in &uncolored {
        poly.set_color(*group, random_color(rng));
    }
    uncolored.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::build_icosahedron;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_color_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let color = random_color(&mut rng);
            for channel in &color[..3] {
                assert!((0.0..1.0).contains(channel));
            }
            assert_eq!(color[3], 1.0);
        }
    }

    #[test]
    fn test_random_color_reproducible_under_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_color(&mut a), random_color(&mut b));
    }

    #[test]
    fn test_paint_groups_colors_every_face_group_once() {
        let mut poly = build_icosahedron(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(paint_groups(&mut poly, &mut rng), 20);
        let painted: Vec<_> = poly
            .faces()
            .map(|(_, face)| poly.color_of(face.group))
            .collect();
        assert!(painted.iter().all(Option::is_some));

        // A second pass has nothing left to paint and keeps the colors.
        assert_eq!(paint_groups(&mut poly, &mut rng), 0);
        let again: Vec<_> = poly
            .faces()
            .map(|(_, face)| poly.color_of(face.group))
            .collect();
        assert_eq!(painted, again);
    }

    #[test]
    fn test_paint_groups_keeps_existing_colors() {
        let mut poly = build_icosahedron(1.0).unwrap();
        let (_, face) = poly.faces().next().unwrap();
        let group = face.group;
        poly.set_color(group, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(paint_groups(&mut poly, &mut StdRng::seed_from_u64(0)), 19);
        assert_eq!(poly.color_of(group), Some([1.0, 0.0, 0.0, 1.0]));
    }
}
