use std::collections::HashMap;

use hexsphere::color::paint_groups;
use hexsphere::{
    build_icosahedron, construct_buffers, hexify, normalize, tesselate, Action, ExportOptions,
    GeodesicConfig, Session,
};
use rand::{rngs::StdRng, SeedableRng};

/// Vertices per distinct color, keyed by the color's bit pattern.
fn color_multiplicity(colors: &[f32]) -> HashMap<[u32; 4], usize> {
    let mut counts = HashMap::new();
    for color in colors.chunks(4) {
        let key = [color[0], color[1], color[2], color[3]].map(f32::to_bits);
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

#[test]
fn round_trip_produces_unit_sphere_with_twelve_pentagons() {
    let ico = build_icosahedron(1.0).unwrap();
    let twice = tesselate(&tesselate(&ico).unwrap()).unwrap();
    let mut planet = hexify(&twice).unwrap();
    normalize(&mut planet, 1.0).unwrap();
    paint_groups(&mut planet, &mut StdRng::seed_from_u64(2024));

    let buffers = construct_buffers(&planet, ExportOptions::default()).unwrap();
    assert!(buffers.vertex_count() > 0);
    assert_eq!(buffers.triangle_count(), 320 * 9);

    for vertex in buffers.vertices.chunks(3) {
        let norm = (vertex[0] * vertex[0] + vertex[1] * vertex[1] + vertex[2] * vertex[2]).sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "vertex off the sphere: {norm}");
    }

    let counts = color_multiplicity(&buffers.colors);
    let pentagons = counts.values().filter(|n| **n == 5 * 3).count();
    let hexagons = counts.values().filter(|n| **n == 6 * 3).count();
    assert_eq!(pentagons, 12);
    assert_eq!(pentagons + hexagons, counts.len());
    // One tile per face of the subdivided mesh plus one per vertex.
    assert_eq!(counts.len(), 320 + 162);
}

#[test]
fn session_keys_match_direct_calls() {
    let mut session = Session::new(GeodesicConfig::with_seed(8)).unwrap();
    for key in ['T', 'T', 'Y', 'U'] {
        assert!(session.press_key(key).unwrap());
    }

    let twice = tesselate(&tesselate(&build_icosahedron(1.0).unwrap()).unwrap()).unwrap();
    let mut direct = hexify(&twice).unwrap();
    normalize(&mut direct, 1.0).unwrap();

    let from_session = construct_buffers(session.polyhedron(), ExportOptions::default()).unwrap();
    let from_calls = construct_buffers(&direct, ExportOptions::default()).unwrap();
    assert_eq!(from_session.vertices, from_calls.vertices);
    assert_eq!(from_session.indices, from_calls.indices);
}

#[test]
fn extruded_tiles_keep_flat_tops() {
    let mut session = Session::new(GeodesicConfig {
        export: ExportOptions {
            lines: true,
            sides: true,
        },
        ..GeodesicConfig::with_seed(31)
    })
    .unwrap();
    for action in [Action::Tesselate, Action::Hexify, Action::Normalize, Action::Extrude] {
        session.apply(action).unwrap();
    }

    let poly = session.polyhedron();
    let mut radius_of_group = HashMap::new();
    for (_, node) in poly.nodes() {
        let radius = node.position.length();
        let seen = *radius_of_group.entry(node.group).or_insert(radius);
        assert!((seen - radius).abs() < 1e-12);
    }
    for radius in radius_of_group.values() {
        assert!([0.9, 1.0, 1.1].iter().any(|s| (s - radius).abs() < 1e-12));
    }

    let buffers = session.buffers().unwrap();
    assert_eq!(buffers.vertex_count(), buffers.indices.len() + 1);
    let sides = buffers.sides.as_ref().unwrap();
    assert_eq!(sides.len(), buffers.indices.len());
    let origin = buffers.indices.len() as u32;
    assert!(sides.chunks(3).all(|side| side[0] == origin));
}
