mod support;

use fractalmesh::float_types::{PI, Real};
use fractalmesh::surface::{
    ApollonianGasket, KleinBottle, Mandelbox, Mandelbulb, Surface, SurfaceKind, TorusKnot,
};
use support::{approx_eq, bounding_box, params};

#[test]
fn grid_surfaces_have_square_vertex_and_face_counts() {
    for kind in SurfaceKind::ALL
        .into_iter()
        .filter(|&k| k != SurfaceKind::Mandelbox)
    {
        for n in [2usize, 3, 7, 16] {
            let (scale, resolution) = params(1.5, n as i64);
            let mesh = kind.sample(scale, resolution);
            assert_eq!(mesh.vertex_count(), n * n, "{kind} at {n}");
            assert_eq!(mesh.face_count(), 2 * (n - 1) * (n - 1), "{kind} at {n}");
            assert_eq!(mesh.dangling_face_count(), 0, "{kind} at {n}");
        }
    }
}

#[test]
fn mandelbox_lattice_counts() {
    let (scale, resolution) = params(2.0, 3);
    let mesh = Mandelbox.sample(scale, resolution);
    assert_eq!(mesh.vertex_count(), 27);
    assert_eq!(mesh.face_count(), 16);
}

#[test]
fn mandelbox_spans_the_cube() {
    let (scale, resolution) = params(2.0, 5);
    let mesh = Mandelbox.sample(scale, resolution);
    assert_eq!(bounding_box(&mesh.vertices), [-2.0, -2.0, -2.0, 2.0, 2.0, 2.0]);

    // k is the innermost axis
    assert_eq!(mesh.vertices[0].coords.as_slice(), &[-2.0, -2.0, -2.0]);
    assert_eq!(mesh.vertices[1].coords.as_slice(), &[-2.0, -2.0, -1.0]);
    assert_eq!(mesh.vertices[5].coords.as_slice(), &[-2.0, -1.0, -2.0]);
    assert_eq!(mesh.vertices[124].coords.as_slice(), &[2.0, 2.0, 2.0]);
}

#[test]
fn mandelbulb_first_row_collapses_to_pole() {
    // theta = 0 on the first row, so every point sits on the +z axis at r(phi)
    let (scale, resolution) = params(1.0, 6);
    let mesh = Mandelbulb.sample(scale, resolution);
    for (j, p) in mesh.vertices.iter().take(6).enumerate() {
        let phi = 2.0 * PI * j as Real / 6.0;
        let r = 1.0 + 0.2 * (3.0 * phi).cos();
        assert!(approx_eq(p.x, 0.0, 1e-12));
        assert!(approx_eq(p.y, 0.0, 1e-12));
        assert!(approx_eq(p.z, r, 1e-12));
    }
}

#[test]
fn apollonian_gasket_radius_follows_polar_angle() {
    let (scale, resolution) = params(2.0, 8);
    let mesh = ApollonianGasket.sample(scale, resolution);
    for i in 0..8 {
        let theta = PI * i as Real / 8.0;
        let expected = 2.0 * (1.0 + 0.5 * (4.0 * theta).cos());
        for j in 0..8 {
            let radius = mesh.vertices[i * 8 + j].coords.norm();
            assert!(approx_eq(radius, expected.abs(), 1e-9), "cell ({i}, {j})");
        }
    }
}

#[test]
fn torus_knot_height_is_scale_times_sin_phi() {
    let (scale, resolution) = params(3.0, 4);
    let mesh = TorusKnot.sample(scale, resolution);
    // phi steps by a quarter turn along the inner axis
    let expected = [0.0, 3.0, 0.0, -3.0];
    for (idx, p) in mesh.vertices.iter().enumerate() {
        assert!(approx_eq(p.z, expected[idx % 4], 1e-12), "vertex {idx}");
    }
    // i = 0, j = 0: r = S + 0.2·S
    assert!(approx_eq(mesh.vertices[0].x, 3.6, 1e-12));
}

#[test]
fn klein_bottle_first_sample() {
    let (scale, resolution) = params(2.0, 4);
    let mesh = KleinBottle.sample(scale, resolution);
    // theta = phi = 0: x = r·(1 - 0), y = 0, z = 0 with r = 1
    let p = mesh.vertices[0];
    assert!(approx_eq(p.x, 1.0, 1e-12));
    assert!(approx_eq(p.y, 0.0, 1e-12));
    assert!(approx_eq(p.z, 0.0, 1e-12));
}

#[test]
fn wrapped_and_straight_kinds_share_face_layout() {
    let (scale, resolution) = params(1.0, 5);
    assert_eq!(
        TorusKnot.sample(scale, resolution).faces,
        Mandelbulb.sample(scale, resolution).faces
    );
    assert_eq!(
        KleinBottle.sample(scale, resolution).faces,
        ApollonianGasket.sample(scale, resolution).faces
    );
}

#[test]
fn sampling_is_deterministic() {
    for kind in SurfaceKind::ALL {
        let (scale, resolution) = params(0.75, 9);
        assert_eq!(kind.sample(scale, resolution), kind.sample(scale, resolution), "{kind}");
    }
}

#[test]
fn kind_names_round_trip() {
    for kind in SurfaceKind::ALL {
        assert_eq!(kind.name().parse::<SurfaceKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert!("Mandelbulb".parse::<SurfaceKind>().is_err());
    assert!("torus knot".parse::<SurfaceKind>().is_err());
}

#[test]
fn display_names() {
    let names: Vec<String> = SurfaceKind::ALL.into_iter().map(SurfaceKind::display_name).collect();
    assert_eq!(
        names,
        ["Mandelbulb", "Mandelbox", "Torus knot", "Apollonian gasket", "Klein bottle"]
    );
}

#[test]
fn sample_count_matches_grid_dimension() {
    let (_, resolution) = params(1.0, 12);
    assert_eq!(SurfaceKind::Mandelbox.sample_count(resolution), Some(1728));
    assert_eq!(SurfaceKind::KleinBottle.sample_count(resolution), Some(144));
}
