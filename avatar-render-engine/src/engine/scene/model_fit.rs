use bevy::image::ImageSampler;
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;
use bevy::render::primitives::Aabb;
use bevy::render::render_resource::Face;

use constants::model::FIT_TARGET_SIZE;

use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::progress::LoadingProgress;

/// Root of the spawned avatar scene.
#[derive(Component)]
pub struct AvatarModel;

/// Uniform scale and root translation that fit a model with the given
/// bounding box to `FIT_TARGET_SIZE` along its largest dimension and
/// re-centre it at the origin. Degenerate boxes keep unit scale.
pub fn fit_transform(min: Vec3, max: Vec3) -> (f32, Vec3) {
    let size = max - min;
    let largest = size.x.max(size.y).max(size.z);
    let scale = if largest > f32::EPSILON {
        FIT_TARGET_SIZE / largest
    } else {
        1.0
    };
    let center = (min + max) * 0.5;
    (scale, -center * scale)
}

/// One-shot pass over the freshly spawned model: per-mesh shadow flags and
/// bounding volumes, material normalization, then whole-model fit. Runs a
/// frame or two after the spawn, once mesh data and transforms have settled.
pub fn normalize_and_fit(
    mut loading_progress: ResMut<LoadingProgress>,
    roots: Query<Entity, With<AvatarModel>>,
    children: Query<&Children>,
    mesh_entities: Query<(
        Entity,
        &GlobalTransform,
        &Mesh3d,
        Option<&MeshMaterial3d<StandardMaterial>>,
    )>,
    meshes: Res<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut transforms: Query<&mut Transform, With<AvatarModel>>,
    orbit: Option<ResMut<OrbitCamera>>,
    mut commands: Commands,
) {
    if loading_progress.model_fitted || !loading_progress.scene_spawned {
        return;
    }
    let Ok(root) = roots.single() else {
        return;
    };

    let mut min = Vec3::MAX;
    let mut max = Vec3::MIN;
    let mut mesh_count = 0usize;

    for descendant in children.iter_descendants(root) {
        let Ok((entity, global, mesh3d, material_handle)) = mesh_entities.get(descendant) else {
            continue;
        };
        let Some(aabb) = meshes.get(&mesh3d.0).and_then(Mesh::compute_aabb) else {
            continue;
        };
        mesh_count += 1;

        commands
            .entity(entity)
            .insert(aabb)
            .remove::<(NotShadowCaster, NotShadowReceiver)>();

        for corner in aabb_corners(&aabb) {
            let world = global.transform_point(corner);
            min = min.min(world);
            max = max.max(world);
        }

        if let Some(handle) = material_handle {
            if let Some(material) = materials.get_mut(&handle.0) {
                normalize_material(material, &mut images);
            }
        }
    }

    // Mesh data can arrive a frame after the scene root; try again next frame.
    if mesh_count == 0 {
        return;
    }

    let (scale, offset) = fit_transform(min, max);
    if let Ok(mut transform) = transforms.get_mut(root) {
        transform.scale = Vec3::splat(scale);
        transform.translation = offset;
    }

    if let Some(mut orbit) = orbit {
        orbit.focus = Vec3::ZERO;
    }

    loading_progress.model_fitted = true;
    info!("Model fitted across {mesh_count} meshes: scale {scale:.3}, offset {offset}");
}

/// Single-sided rendering with back-face culling, linear filtering on every
/// attached texture map.
fn normalize_material(material: &mut StandardMaterial, images: &mut Assets<Image>) {
    material.double_sided = false;
    material.cull_mode = Some(Face::Back);

    let maps = [
        material.base_color_texture.clone(),
        material.normal_map_texture.clone(),
        material.metallic_roughness_texture.clone(),
        material.occlusion_texture.clone(),
    ];
    for handle in maps.into_iter().flatten() {
        if let Some(image) = images.get_mut(&handle) {
            image.sampler = ImageSampler::linear();
        }
    }
}

fn aabb_corners(aabb: &Aabb) -> [Vec3; 8] {
    let min: Vec3 = (aabb.center - aabb.half_extents).into();
    let max: Vec3 = (aabb.center + aabb.half_extents).into();
    [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(min.x, max.y, max.z),
        Vec3::new(max.x, max.y, max.z),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factor_is_target_over_largest_dimension() {
        let (scale, _) = fit_transform(Vec3::new(1.0, 1.0, 1.0), Vec3::new(5.0, 3.0, 2.0));
        assert!((scale - FIT_TARGET_SIZE / 4.0).abs() < 1e-6);
    }

    #[test]
    fn fitted_bounding_box_is_centred_at_origin() {
        let min = Vec3::new(-3.0, 0.0, 2.0);
        let max = Vec3::new(1.0, 8.0, 4.0);
        let (scale, offset) = fit_transform(min, max);

        let centre = (min + max) * 0.5;
        let fitted_centre = centre * scale + offset;
        assert!(fitted_centre.length() < 1e-5, "centre was {fitted_centre}");

        let fitted_size = (max - min) * scale;
        let largest = fitted_size.x.max(fitted_size.y).max(fitted_size.z);
        assert!((largest - FIT_TARGET_SIZE).abs() < 1e-5);
    }

    #[test]
    fn degenerate_box_keeps_unit_scale() {
        let point = Vec3::new(2.0, 1.0, -4.0);
        let (scale, offset) = fit_transform(point, point);
        assert_eq!(scale, 1.0);
        assert_eq!(offset, -point);
    }

    #[test]
    fn corner_set_spans_the_box() {
        let aabb = Aabb::from_min_max(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        let corners = aabb_corners(&aabb);
        assert_eq!(corners.len(), 8);
        let min = corners.iter().copied().reduce(Vec3::min).unwrap();
        let max = corners.iter().copied().reduce(Vec3::max).unwrap();
        assert_eq!(min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Vec3::new(1.0, 2.0, 3.0));
    }
}
