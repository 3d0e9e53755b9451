use clap::Parser;
use sceneglue::{mesh, Axis, NativeVector, SceneMesh, Vector4};

mod cli;

pub fn main() -> Result<(), sceneglue::Error> {
    let cli = cli::Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let vector = Vector4::from(cli.vector);
    let native: nalgebra::Vector4<f32> = vector.to_native();
    for axis in Axis::all() {
        let value = NativeVector::component(&native, axis.index())?;
        tracing::debug!(?axis, value, "native component");
    }
    let back = Vector4::from_native(&native);
    let lossless = back.to_array().map(f32::to_bits) == vector.to_array().map(f32::to_bits);
    tracing::info!(%vector, %back, lossless, "round-tripped vector across the native boundary");

    let mut scene = SceneMesh::<u32>::with_indices((0..cli.buffer_len).collect());
    for segment in mesh::pack(cli.counts.iter().copied())? {
        match scene.push_segment(segment) {
            Ok(position) => tracing::info!(
                position,
                offset = segment.index_offset(),
                count = segment.index_count(),
                "segment fits"
            ),
            Err(e) => tracing::warn!(%e, "segment does not fit"),
        }
    }
    tracing::info!(
        accepted = scene.len(),
        requested = cli.counts.len(),
        buffer_len = scene.index_count(),
        "laid out segments"
    );

    Ok(())
}
