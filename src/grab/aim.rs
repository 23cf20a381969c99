use avian3d::prelude::*;
use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;

use super::components::{GrabLayer, GrabViewpoint};
use crate::settings::GrabSettings;

/// A single ray intersection against one target class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimHit {
    /// Leaf entity owning the hit collider
    pub entity: Entity,
    /// World-space contact point
    pub point: Vec3,
    /// World-space surface normal at the contact point
    pub normal: Vec3,
}

/// This frame's ray intersections, one slot per target class.
///
/// Overwritten every frame by the aim system. Tests and custom ray sources
/// can write it directly when the aim system is disabled.
#[derive(Resource, Default, Debug, Clone)]
pub struct AimHits {
    pub surface: Option<AimHit>,
    pub item: Option<AimHit>,
}

/// Cast the view ray against the surface and item layers.
///
/// The viewpoint's world transform is computed from this frame's `Transform`
/// hierarchy, so look systems running earlier in `Update` are not a frame
/// behind.
pub(crate) fn cast_aim_rays(
    settings: Res<GrabSettings>,
    spatial_query: SpatialQuery,
    viewpoint_query: Query<Entity, With<GrabViewpoint>>,
    transform_helper: TransformHelper,
    mut hits: ResMut<AimHits>,
) {
    *hits = AimHits::default();

    let viewpoint = match viewpoint_query.single() {
        Ok(viewpoint) => viewpoint,
        Err(QuerySingleError::MultipleEntities(_)) => {
            warn!("Multiple GrabViewpoint entities, not aiming");
            return;
        }
        Err(QuerySingleError::NoEntities(_)) => return,
    };
    let Ok(viewpoint) = transform_helper.compute_global_transform(viewpoint) else {
        return;
    };

    let origin = viewpoint.translation();
    let direction = viewpoint.forward();

    hits.surface = cast_against(
        &spatial_query,
        origin,
        direction,
        settings.max_distance,
        GrabLayer::Surface,
    );
    hits.item = cast_against(
        &spatial_query,
        origin,
        direction,
        settings.max_distance,
        GrabLayer::Item,
    );
}

fn cast_against(
    spatial_query: &SpatialQuery,
    origin: Vec3,
    direction: Dir3,
    max_distance: f32,
    layer: GrabLayer,
) -> Option<AimHit> {
    let filter = SpatialQueryFilter::from_mask(layer);
    let hit = spatial_query.cast_ray(origin, direction, max_distance, true, &filter)?;

    Some(AimHit {
        entity: hit.entity,
        point: origin + direction * hit.distance,
        normal: hit.normal,
    })
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;
    use std::time::Duration;

    use bevy::scene::ScenePlugin;
    use bevy::time::TimeUpdateStrategy;

    use super::*;
    use crate::grab::{GrabPlugin, GrabPluginConfig};

    fn physics_app(max_distance: f32) -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            TransformPlugin,
            AssetPlugin::default(),
            ScenePlugin,
        ))
        .init_asset::<Mesh>()
        .add_plugins((
            PhysicsPlugins::default(),
            GrabPlugin::new(GrabPluginConfig {
                settings: Some(GrabSettings {
                    max_distance,
                    ..default()
                }),
                load_settings: false,
                cast_rays: true,
            }),
        ))
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            1.0 / 60.0,
        )));
        app.finish();
        app
    }

    fn spawn_viewpoint(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((GrabViewpoint, Transform::default()))
            .id()
    }

    /// Unit cube straight ahead of the viewpoint at `depth` along -Z
    fn spawn_cube(app: &mut App, depth: f32, layers: CollisionLayers) -> Entity {
        app.world_mut()
            .spawn((
                RigidBody::Static,
                Collider::cuboid(1.0, 1.0, 1.0),
                layers,
                Transform::from_xyz(0.0, 0.0, -depth),
            ))
            .id()
    }

    fn settle(app: &mut App) {
        for _ in 0..5 {
            app.update();
        }
    }

    fn hits(app: &App) -> AimHits {
        app.world().resource::<AimHits>().clone()
    }

    fn assert_hit(hit: Option<AimHit>, entity: Entity, point: Vec3) {
        let hit = hit.expect("expected a hit");
        assert_eq!(hit.entity, entity);
        assert!(hit.point.abs_diff_eq(point, 1e-3), "{:?} != {:?}", hit.point, point);
        assert!(hit.normal.abs_diff_eq(Vec3::Z, 1e-3), "{:?}", hit.normal);
    }

    #[test]
    fn surface_ray_passes_through_items() {
        let mut app = physics_app(10.0);
        spawn_viewpoint(&mut app);
        let item = spawn_cube(&mut app, 3.0, GrabLayer::item());
        let surface = spawn_cube(&mut app, 5.0, GrabLayer::surface());
        settle(&mut app);

        let hits = hits(&app);
        assert_hit(hits.item, item, Vec3::new(0.0, 0.0, -2.5));
        assert_hit(hits.surface, surface, Vec3::new(0.0, 0.0, -4.5));
    }

    #[test]
    fn item_ray_passes_through_surfaces() {
        let mut app = physics_app(10.0);
        spawn_viewpoint(&mut app);
        let surface = spawn_cube(&mut app, 3.0, GrabLayer::surface());
        let item = spawn_cube(&mut app, 5.0, GrabLayer::item());
        settle(&mut app);

        let hits = hits(&app);
        assert_hit(hits.surface, surface, Vec3::new(0.0, 0.0, -2.5));
        assert_hit(hits.item, item, Vec3::new(0.0, 0.0, -4.5));
    }

    #[test]
    fn default_layer_is_ignored_by_both_rays() {
        let mut app = physics_app(10.0);
        spawn_viewpoint(&mut app);
        spawn_cube(&mut app, 3.0, CollisionLayers::default());
        settle(&mut app);

        let hits = hits(&app);
        assert!(hits.item.is_none());
        assert!(hits.surface.is_none());
    }

    #[test]
    fn hits_beyond_max_distance_are_dropped() {
        let mut app = physics_app(4.0);
        spawn_viewpoint(&mut app);
        let item = spawn_cube(&mut app, 3.0, GrabLayer::item());
        spawn_cube(&mut app, 5.0, GrabLayer::surface());
        settle(&mut app);

        let hits = hits(&app);
        assert_hit(hits.item, item, Vec3::new(0.0, 0.0, -2.5));
        assert!(hits.surface.is_none());
    }

    #[test]
    fn multiple_viewpoints_clear_the_hits() {
        let mut app = physics_app(10.0);
        spawn_viewpoint(&mut app);
        spawn_cube(&mut app, 3.0, GrabLayer::item());
        spawn_cube(&mut app, 5.0, GrabLayer::surface());
        settle(&mut app);
        assert!(hits(&app).item.is_some());

        spawn_viewpoint(&mut app);
        app.update();

        let hits = hits(&app);
        assert!(hits.item.is_none());
        assert!(hits.surface.is_none());
    }

    #[test]
    fn viewpoint_moved_this_frame_aims_from_its_new_pose() {
        let mut app = physics_app(10.0);
        let viewpoint = spawn_viewpoint(&mut app);
        spawn_cube(&mut app, 3.0, GrabLayer::item());
        spawn_cube(&mut app, 5.0, GrabLayer::surface());
        settle(&mut app);
        assert!(hits(&app).surface.is_some());

        // Turn around: nothing behind the viewpoint
        app.world_mut()
            .entity_mut(viewpoint)
            .insert(Transform::from_rotation(Quat::from_rotation_y(PI)));
        app.update();

        let hits = hits(&app);
        assert!(hits.item.is_none());
        assert!(hits.surface.is_none());
    }
}
