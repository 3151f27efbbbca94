use hexsphere::{build_icosahedron, hexify, normalize, tesselate, Polyhedron};

fn icosphere(depth: u32) -> Polyhedron {
    let mut poly = build_icosahedron(1.0).unwrap();
    for _ in 0..depth {
        poly = tesselate(&poly).unwrap();
    }
    poly
}

#[test]
fn euler_characteristic_is_two_at_every_depth() {
    for depth in 0..=3 {
        let poly = icosphere(depth);
        let vertices = poly.node_count() as i64;
        let edges = poly.adjacency().edge_count() as i64;
        let faces = poly.face_count() as i64;
        assert_eq!(faces, 20 * 4i64.pow(depth));
        assert_eq!(edges, faces * 3 / 2);
        assert_eq!(vertices - edges + faces, 2, "depth {depth}");
    }
}

#[test]
fn only_twelve_vertices_have_degree_five() {
    for depth in 0..=3 {
        let degrees = icosphere(depth).node_degrees();
        let fives = degrees.values().filter(|d| **d == 5).count();
        let sixes = degrees.values().filter(|d| **d == 6).count();
        assert_eq!(fives, 12, "depth {depth}");
        assert_eq!(fives + sixes, degrees.len());
    }
}

#[test]
fn normalize_keeps_topology() {
    for depth in 0..=3 {
        let mut poly = icosphere(depth);
        let edges = poly.adjacency().edge_count();
        normalize(&mut poly, 1.0).unwrap();
        assert_eq!(poly.adjacency().edge_count(), edges);
        assert_eq!(poly.euler_characteristic(), 2);
        assert!(poly.is_closed_manifold());
    }
}

#[test]
fn tiles_count_faces_plus_vertices() {
    for depth in 0..=3 {
        let poly = icosphere(depth);
        let tiles = hexify(&poly).unwrap();
        let sizes = tiles.group_sizes();
        assert_eq!(sizes.len(), poly.face_count() + poly.node_count());
        assert_eq!(sizes.values().filter(|n| **n == 5).count(), 12);
        assert!(sizes.values().all(|n| *n == 5 || *n == 6));
    }
}
