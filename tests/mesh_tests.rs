use spin_cube::mesh::{box_mesh, cube_mesh, SKY_BLUE};

#[cfg(test)]
mod cube_geometry_tests {
    use super::*;

    #[test]
    fn test_cube_has_expected_counts() {
        let (vertices, indices) = cube_mesh();

        assert_eq!(vertices.len(), 24, "Cube should have 4 vertices per face");
        assert_eq!(indices.len(), 36, "Cube should have 2 triangles per face");
    }

    #[test]
    fn test_indices_are_in_bounds() {
        let (vertices, indices) = cube_mesh();

        for &i in &indices {
            assert!(
                (i as usize) < vertices.len(),
                "Index {} out of bounds for {} vertices",
                i,
                vertices.len()
            );
        }
    }

    #[test]
    fn test_unit_cube_extents() {
        let (vertices, _) = cube_mesh();

        for v in &vertices {
            for &c in &v.position {
                assert!(
                    (c.abs() - 0.5).abs() < 1e-6,
                    "Unit cube corner coordinate should be +-0.5, got {}",
                    c
                );
            }
        }
    }

    #[test]
    fn test_normals_are_axis_aligned_unit_vectors() {
        let (vertices, _) = cube_mesh();

        for v in &vertices {
            let [nx, ny, nz] = v.normal;
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            assert!((len - 1.0).abs() < 1e-6, "Normal should be unit length");

            let axis_components = [nx, ny, nz].iter().filter(|c| c.abs() > 0.5).count();
            assert_eq!(axis_components, 1, "Face normal should lie on one axis");
        }
    }

    #[test]
    fn test_box_mesh_respects_dimensions() {
        let (vertices, _) = box_mesh(2.0, 4.0, 6.0);

        let max_x = vertices.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let max_y = vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        let max_z = vertices.iter().map(|v| v.position[2]).fold(f32::MIN, f32::max);

        assert_eq!(max_x, 1.0);
        assert_eq!(max_y, 2.0);
        assert_eq!(max_z, 3.0);
    }

    #[test]
    fn test_material_color_is_opaque() {
        assert_eq!(SKY_BLUE[3], 1.0, "Demo material should be fully opaque");
    }
}
