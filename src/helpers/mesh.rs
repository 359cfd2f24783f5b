use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::Mesh;
use stargen::Starfield;

/// Point transparency, combined with the per-star brightness.
const STAR_ALPHA: f32 = 0.9;

/// Builds a point-list mesh from a generated star field.
///
/// One vertex per star. Brightness is baked into the vertex color so the
/// material can stay a plain unlit white.
pub fn star_mesh(field: &Starfield) -> Mesh {
    let positions = field.positions();
    let colors: Vec<[f32; 4]> = field
        .stars()
        .iter()
        .map(|star| [star.brightness, star.brightness, star.brightness, STAR_ALPHA])
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use stargen::StarfieldSettings;

    #[test]
    fn one_vertex_per_star() {
        let settings = StarfieldSettings {
            count: 512,
            radius: 1.5,
        };
        let field = stargen::generate_with_rng(&settings, &mut StdRng::seed_from_u64(3));
        let mesh = star_mesh(&field);

        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert_eq!(mesh.count_vertices(), 512);
    }
}
