use approx::assert_abs_diff_eq;
use glam::Vec3;
use lattice_mesh::{build, ConfigurationError, GridDims, LatticeCoord, MeshConfig, MeshData};

fn normal_at(mesh: &MeshData, dims: GridDims, x: u32, y: u32, z: u32) -> Vec3 {
    let index = dims.vertex_index(LatticeCoord::new(x, y, z)).unwrap();
    mesh.normals()[index as usize]
}

#[test]
fn unit_box_has_eight_vertices_and_twelve_triangles() {
    let mesh = build(&MeshConfig::new_box(GridDims::uniform(1))).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.triangles().flatten().all(|i| i < 8));
    mesh.check_watertight().unwrap();
}

#[test]
fn small_sphere_vertices_lie_on_unit_sphere() {
    let mesh = build(&MeshConfig::sphere(2, 1.0)).unwrap();
    assert_eq!(mesh.vertex_count(), 26);
    for position in mesh.positions() {
        assert_abs_diff_eq!(position.length(), 1.0, epsilon = 1e-4);
    }
}

#[test]
fn sphere_normals_point_away_from_center() {
    let mesh = build(&MeshConfig::sphere(5, 3.0)).unwrap();
    for (position, normal) in mesh.positions().iter().zip(mesh.normals()) {
        let radial = position.normalize();
        assert_abs_diff_eq!(normal.dot(radial), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(position.length(), 3.0, epsilon = 1e-3);
    }
}

#[test]
fn rounded_box_flat_patches_and_corners() {
    let dims = GridDims::uniform(4);
    let mesh = build(&MeshConfig::rounded_box(dims, 1)).unwrap();

    assert_eq!(normal_at(&mesh, dims, 2, 4, 2), Vec3::Y);
    assert_eq!(normal_at(&mesh, dims, 2, 0, 2), Vec3::NEG_Y);
    assert_eq!(normal_at(&mesh, dims, 4, 2, 2), Vec3::X);
    assert_eq!(normal_at(&mesh, dims, 2, 2, 0), Vec3::NEG_Z);

    for (x, y, z) in [(0, 0, 0), (4, 4, 4), (0, 4, 4), (4, 0, 0)] {
        let normal = normal_at(&mesh, dims, x, y, z);
        assert!(normal.to_array().iter().all(|c| c.abs() > 0.5), "{normal}");
        assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn rounded_box_vertices_sit_at_roundness_from_inner_box() {
    let dims = GridDims::new(6, 4, 8);
    let roundness = 2;
    let mesh = build(&MeshConfig::rounded_box(dims, roundness)).unwrap();
    let r = roundness as f32;
    let max = Vec3::new(dims.x as f32, dims.y as f32, dims.z as f32) - Vec3::splat(r);

    for position in mesh.positions() {
        let inner = position.clamp(Vec3::splat(r), max);
        assert_abs_diff_eq!(position.distance(inner), r, epsilon = 1e-4);
    }
}

#[test]
fn builds_are_deterministic() {
    for config in [
        MeshConfig::new_box(GridDims::new(3, 5, 2)),
        MeshConfig::rounded_box(GridDims::uniform(6), 3),
        MeshConfig::sphere(7, 0.5),
    ] {
        let first = build(&config).unwrap();
        let second = build(&config).unwrap();
        assert_eq!(first, second);
        let bits = |mesh: &MeshData| -> Vec<u32> {
            mesh.positions_f32().iter().map(|f| f.to_bits()).collect()
        };
        assert_eq!(bits(&first), bits(&second));
    }
}

#[test]
fn config_loads_from_json() {
    let config: MeshConfig = serde_json::from_str(
        r#"{ "dims": { "x": 4, "y": 4, "z": 4 }, "shape": { "type": "rounded_box", "roundness": 1 } }"#,
    )
    .unwrap();
    assert_eq!(config, MeshConfig::rounded_box(GridDims::uniform(4), 1));
    assert!(build(&config).is_ok());
}

#[test]
fn invalid_configs_produce_no_mesh() {
    let err = build(&MeshConfig::new_box(GridDims::new(0, 2, 2))).unwrap_err();
    assert!(matches!(err, ConfigurationError::AxisTooSmall { value: 0, .. }));

    let err = build(&MeshConfig::rounded_box(GridDims::new(4, 3, 4), 2)).unwrap_err();
    assert_eq!(err, ConfigurationError::RoundnessTooLarge { roundness: 2, max: 1 });

    let err = build(&MeshConfig::sphere(3, 0.0)).unwrap_err();
    assert_eq!(err, ConfigurationError::InvalidRadius(0.0));

    let err = build(&MeshConfig::new_box(GridDims::new(2, 256, 2))).unwrap_err();
    assert!(matches!(err, ConfigurationError::AxisTooLarge { value: 256, .. }));
}
