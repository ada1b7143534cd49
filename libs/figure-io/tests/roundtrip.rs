use approx::assert_relative_eq;
use config::constants::{GlobalConfig, TEXT_ROUNDTRIP_TOLERANCE};
use figure_io::{load_mesh, read_bezier, read_mesh, save_mesh, write_mesh, write_sections, IoError};
use figure_mesh::{primitives, Cone, Cuboid, Point, ShapeKind, Sphere, TriangleMesh};
use tempfile::tempdir;

fn assert_points_close(actual: &[Point], expected: impl IntoIterator<Item = Point>) {
    let expected: Vec<Point> = expected.into_iter().collect();
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(&expected) {
        assert_relative_eq!(a.x, e.x, epsilon = TEXT_ROUNDTRIP_TOLERANCE);
        assert_relative_eq!(a.y, e.y, epsilon = TEXT_ROUNDTRIP_TOLERANCE);
        assert_relative_eq!(a.z, e.z, epsilon = TEXT_ROUNDTRIP_TOLERANCE);
    }
}

fn round_trip(mesh: &TriangleMesh) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shape.3d");
    save_mesh(&path, mesh, &GlobalConfig::default()).unwrap();

    let data = load_mesh(&path).unwrap();
    assert_eq!(data.kind, Some(mesh.kind()));
    assert_eq!(data.triangle_count(), mesh.triangle_count());
    assert_points_close(&data.positions, mesh.positions());
    assert_points_close(&data.normals, mesh.normal_vectors());
}

/// Writes `mesh`, reads the text back, writes the loaded data again and
/// returns both texts.
fn rewrite(mesh: &TriangleMesh, config: &GlobalConfig) -> (String, String) {
    let mut first = Vec::new();
    write_mesh(&mut first, mesh, config).unwrap();

    let data = read_mesh(first.as_slice()).unwrap();
    let normals = (!data.normals.is_empty()).then(|| data.normals.iter().copied());
    let mut second = Vec::new();
    write_sections(
        &mut second,
        data.kind.unwrap(),
        data.positions.iter().copied(),
        normals,
        config,
    )
    .unwrap();

    (String::from_utf8(first).unwrap(), String::from_utf8(second).unwrap())
}

#[test]
fn rewritten_text_is_byte_identical() {
    let config = GlobalConfig::default();
    let meshes = [
        primitives::sphere(&Sphere::new(1.5, 12, 8)).unwrap(),
        primitives::cone(&Cone::new(1.0 / 3.0, 2.0, 7, 3)).unwrap(),
        primitives::cuboid(&Cuboid::from_whd(0.1, 2.0 / 3.0, 5.0), 2).unwrap(),
    ];
    for mesh in &meshes {
        let (first, second) = rewrite(mesh, &config);
        assert_eq!(first, second, "{:?}", mesh.kind());
    }

    let (sphere, _) = rewrite(&meshes[0], &config);
    assert!(sphere.lines().any(|l| l == "normals"));
}

#[test]
fn rewritten_text_is_byte_identical_at_other_precisions() {
    let mesh = primitives::sphere(&Sphere::new(2.0, 9, 5)).unwrap();
    for precision in [0, 3, 12] {
        let config = GlobalConfig::new(precision).unwrap();
        let (first, second) = rewrite(&mesh, &config);
        assert_eq!(first, second, "precision {precision}");
    }
}

#[test]
fn box_survives_a_file_round_trip() {
    round_trip(&primitives::cuboid(&Cuboid::from_whd(2.0, 3.0, 4.0), 3).unwrap());
}

#[test]
fn cone_survives_a_file_round_trip() {
    round_trip(&primitives::cone(&Cone::new(1.0, 2.0, 10, 4)).unwrap());
}

#[test]
fn sphere_round_trip_keeps_normals() {
    let mesh = primitives::sphere(&Sphere::new(1.5, 12, 8)).unwrap();
    round_trip(&mesh);

    let dir = tempdir().unwrap();
    let path = dir.path().join("sphere.3d");
    save_mesh(&path, &mesh, &GlobalConfig::default()).unwrap();
    let data = load_mesh(&path).unwrap();
    assert_eq!(data.kind, Some(ShapeKind::Sphere));
    assert_eq!(data.normals.len(), data.positions.len());
    for n in &data.normals {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn written_file_uses_six_decimals() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tri.3d");
    let mesh = primitives::triangle(&figure_mesh::Triangle::new(
        Point::new(0.1, 0.2, 0.3),
        Point::X,
        Point::Y,
    ));
    save_mesh(&path, &mesh, &GlobalConfig::default()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().next(), Some("triangle"));
    assert_eq!(text.lines().nth(1), Some("0.100000 0.200000 0.300000"));
}

#[test]
fn bezier_file_to_mesh() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("flat.patch");
    let mut text = String::from("1\n");
    text.push_str(&(0..16).map(|i| i.to_string()).collect::<Vec<_>>().join(", "));
    text.push_str("\n16\n");
    for i in 0..16 {
        text.push_str(&format!("{}, 0.0, {}\n", i % 4, i / 4));
    }
    std::fs::write(&path, text).unwrap();

    let surface = read_bezier(&path).unwrap();
    let mesh = primitives::bezier(&surface, 2).unwrap();
    assert_eq!(mesh.triangle_count(), 2 * 8 * 8);
    round_trip(&mesh);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_mesh(dir.path().join("absent.3d")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
    let err = read_bezier(dir.path().join("absent.patch")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}
