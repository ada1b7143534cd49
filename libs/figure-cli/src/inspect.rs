//! Summary of an existing mesh file.

use anyhow::{Context, Result};
use figure_io::{load_mesh, writer::header, MeshData};
use std::path::Path;

/// Loads `path` and returns a human-readable summary.
pub fn inspect(path: &Path) -> Result<String> {
    let data = load_mesh(path).with_context(|| format!("Failed to read mesh {:?}", path))?;
    Ok(summarize(&data))
}

/// Formats kind, counts and bounding box of a loaded mesh.
pub fn summarize(data: &MeshData) -> String {
    let kind = data.kind.map_or("unknown", header);
    let (min, max) = data.bounding_box();

    format!(
        "kind:      {kind}\n\
         triangles: {}\n\
         vertices:  {}\n\
         normals:   {}\n\
         min:       {:.6} {:.6} {:.6}\n\
         max:       {:.6} {:.6} {:.6}\n",
        data.triangle_count(),
        data.positions.len(),
        data.normals.len(),
        min.x,
        min.y,
        min.z,
        max.x,
        max.y,
        max.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use figure_io::read_mesh;
    use tempfile::tempdir;

    #[test]
    fn test_summary_of_triangle() {
        let data = read_mesh("triangle\n0 0 0\n2 0 0\n0 -1 3\n".as_bytes()).unwrap();
        let summary = summarize(&data);
        assert!(summary.contains("kind:      triangle"));
        assert!(summary.contains("triangles: 1"));
        assert!(summary.contains("vertices:  3"));
        assert!(summary.contains("normals:   0"));
        assert!(summary.contains("min:       0.000000 -1.000000 0.000000"));
        assert!(summary.contains("max:       2.000000 0.000000 3.000000"));
    }

    #[test]
    fn test_unknown_kind() {
        let data = read_mesh("torus\n".as_bytes()).unwrap();
        assert!(summarize(&data).contains("kind:      unknown"));
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempdir().unwrap();
        let err = inspect(&dir.path().join("none.3d")).unwrap_err();
        assert!(format!("{err:#}").contains("none.3d"));
    }
}
