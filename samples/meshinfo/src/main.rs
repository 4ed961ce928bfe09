use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use clap::Parser;
use meshdata::{AttributeDescriptor, AttributeName, IndexDescriptor, MeshBuffer, MeshData, MeshError};
use nalgebra::Vector3;

mod cli;
mod grid;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error(transparent)]
    Grid(#[from] grid::GridError),
    #[error("expected a whole number of f32 XYZ triples in {path:?}, found {len} bytes")]
    Positions { path: PathBuf, len: usize },
    #[error("released & re-wrapped mesh differs from the original")]
    RoundTrip,
}

/// Log what's in a mesh, through the converting accessors.
fn report(mesh: &MeshData<'_>) -> Result<(), MeshError> {
    println!("{mesh}");
    if mesh.has_attribute(AttributeName::Positions3D) {
        let positions = mesh.positions_3d(0)?;
        let (min, max) = positions.iter().fold(
            (Vector3::repeat(f32::INFINITY), Vector3::repeat(f32::NEG_INFINITY)),
            |(min, max), p| (min.inf(&p), max.sup(&p)),
        );
        tracing::info!(min = ?min.as_slice(), max = ?max.as_slice(), "position bounds");
    }
    for id in 0..mesh.attribute_count_of(AttributeName::TextureCoordinates2D) {
        tracing::info!(
            set = id,
            count = mesh.texture_coordinates_2d(id)?.len(),
            "texture coordinates"
        );
    }
    if mesh.is_indexed() {
        let indices = mesh.indices_as_u32();
        let triangles = indices.len() / 3;
        let highest = indices.iter().copied().max();
        tracing::info!(triangles, ?highest, vertices = mesh.vertex_count(), "indices");
    }
    Ok(())
}

/// Take the buffers out of a mesh and put them back into a new one.
fn round_trip(mut mesh: MeshData<'static>) -> Result<MeshData<'static>, Error> {
    let indices = *mesh.index_descriptor();
    let attributes = mesh.attribute_descriptors().to_vec();
    let before = (mesh.indices_as_u32(), mesh.positions_3d(0)?);

    let index_data = mesh.release_indices();
    let vertex_data = mesh.release_vertices();
    tracing::debug!(
        index_bytes = index_data.len(),
        vertex_bytes = vertex_data.len(),
        "released buffers"
    );

    let rewrapped = MeshData::new(
        index_data,
        vertex_data,
        indices,
        attributes,
        mesh.importer_state(),
    )?;
    if before != (rewrapped.indices_as_u32(), rewrapped.positions_3d(0)?) {
        return Err(Error::RoundTrip);
    }
    tracing::info!("round trip ok");
    Ok(rewrapped)
}

/// Inspect a raw position file without copying it.
#[tracing::instrument]
fn inspect_mapped(path: &Path) -> Result<(), Error> {
    let file = File::open(path)?;
    #[allow(unsafe_code)]
    let map = unsafe { memmap2::Mmap::map(&file)? };
    let stride = 3 * std::mem::size_of::<f32>();
    if map.len() % stride != 0 {
        return Err(Error::Positions {
            path: path.to_owned(),
            len: map.len(),
        });
    }
    let mesh = MeshData::new(
        MeshBuffer::default(),
        &map[..],
        IndexDescriptor::none(),
        vec![AttributeDescriptor::packed::<Vector3<f32>>(
            AttributeName::Positions3D,
            0,
            map.len() / stride,
        )],
        None,
    )?;
    report(&mesh)?;
    Ok(())
}

pub fn main() -> Result<(), Error> {
    let cli = cli::Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let mesh = grid::grid(cli.grid, cli.index_type.into())?;
    report(&mesh)?;
    let mesh = round_trip(mesh)?;
    tracing::debug!(?mesh);

    if let Some(path) = &cli.positions {
        inspect_mapped(path)?;
    }
    Ok(())
}
