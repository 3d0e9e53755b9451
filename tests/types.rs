use sceneglue::{MeshSegment, SceneMesh, Vector4};

/// Ensure that segments & meshes can compile with any unsigned index type with width <= `size_of::`<usize>
#[test]
#[allow(clippy::just_underscores_and_digits)]
fn segment_index() {
    let _8 = SceneMesh::<u8>::from_parts(vec![0; 4], vec![MeshSegment::new(1, 3)]);
    let _16 = SceneMesh::<u16>::from_parts(vec![0; 4], vec![MeshSegment::new(1, 3)]);
    #[cfg(not(target_pointer_width = "16"))]
    {
        // size_of::<usize>() > 16
        let _32 = SceneMesh::<u32>::from_parts(vec![0; 4], vec![MeshSegment::new(1, 3)]);
        #[cfg(not(target_pointer_width = "32"))]
        {
            // size_of::<usize>() > 32
            let _64 = SceneMesh::<u64>::from_parts(vec![0; 4], vec![MeshSegment::new(1, 3)]);
        }
    }
    let _size = SceneMesh::<usize>::from_parts(vec![0; 4], vec![MeshSegment::new(1, 3)]);
}

/// Ensure that vectors can compile with either float width
#[test]
#[allow(clippy::just_underscores_and_digits)]
fn vector_real() {
    let _32 = Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0);
    let _64 = Vector4::<f64>::new(1.0, 2.0, 3.0, 4.0);
    let _default: Vector4 = Vector4::default();
}
