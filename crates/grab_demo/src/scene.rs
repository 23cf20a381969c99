//! Demo room: floor, table, a slanted shelf and a few composite props.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy_grab_place::{GrabBoundary, GrabLayer};

/// Colors used by the demo room
mod colors {
    use bevy::prelude::*;

    pub const FLOOR: Color = Color::srgb(0.35, 0.37, 0.4);
    pub const WOOD: Color = Color::srgb(0.55, 0.38, 0.22);
    pub const SHELF: Color = Color::srgb(0.45, 0.5, 0.6);
    pub const MUG: Color = Color::srgb(0.9, 0.9, 0.85);
    pub const CRATE: Color = Color::srgb(0.75, 0.6, 0.35);
    pub const BALL: Color = Color::srgb(0.85, 0.25, 0.2);
    pub const LAMP: Color = Color::srgb(0.95, 0.85, 0.4);
}

pub struct DemoScenePlugin;

impl Plugin for DemoScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_lighting, spawn_room));
    }
}

fn spawn_lighting(mut commands: Commands) {
    commands.spawn(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut material = |color: Color| materials.add(StandardMaterial::from(color));

    let floor_mat = material(colors::FLOOR);
    let wood_mat = material(colors::WOOD);
    let shelf_mat = material(colors::SHELF);
    let mug_mat = material(colors::MUG);
    let crate_mat = material(colors::CRATE);
    let ball_mat = material(colors::BALL);
    let lamp_mat = material(colors::LAMP);

    // Furniture and props live under separate boundaries so a hit on any
    // part resolves to the furniture piece or prop, never to the group.
    let furniture = commands
        .spawn((
            Name::new("Furniture"),
            GrabBoundary,
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    let props = commands
        .spawn((
            Name::new("Props"),
            GrabBoundary,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    // Floor: top face normal is exactly up
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Cuboid::new(20.0, 0.2, 20.0))),
        MeshMaterial3d(floor_mat),
        Transform::from_xyz(0.0, -0.1, 0.0),
        Collider::cuboid(20.0, 0.2, 20.0),
        GrabLayer::surface(),
        ChildOf(furniture),
    ));

    // Table: only the top is a surface, legs are plain meshes
    let table = commands
        .spawn((
            Name::new("Table"),
            Transform::from_xyz(0.0, 0.0, 0.0),
            Visibility::default(),
            ChildOf(furniture),
        ))
        .id();
    commands.spawn((
        Name::new("Table Top"),
        Mesh3d(meshes.add(Cuboid::new(1.6, 0.06, 0.9))),
        MeshMaterial3d(wood_mat.clone()),
        Transform::from_xyz(0.0, 0.77, 0.0),
        Collider::cuboid(1.6, 0.06, 0.9),
        GrabLayer::surface(),
        ChildOf(table),
    ));
    let leg_mesh = meshes.add(Cuboid::new(0.06, 0.74, 0.06));
    for (x, z) in [(-0.7, -0.38), (0.7, -0.38), (-0.7, 0.38), (0.7, 0.38)] {
        commands.spawn((
            Name::new("Table Leg"),
            Mesh3d(leg_mesh.clone()),
            MeshMaterial3d(wood_mat.clone()),
            Transform::from_xyz(x, 0.37, z),
            ChildOf(table),
        ));
    }

    // Slanted shelf: hit normals are never exactly up, so drops are refused
    commands.spawn((
        Name::new("Slanted Shelf"),
        Mesh3d(meshes.add(Cuboid::new(1.2, 0.05, 0.5))),
        MeshMaterial3d(shelf_mat),
        Transform::from_xyz(-2.5, 1.1, -1.0).with_rotation(Quat::from_rotation_x(0.35)),
        Collider::cuboid(1.2, 0.05, 0.5),
        GrabLayer::surface(),
        ChildOf(furniture),
    ));

    // Mug: body and handle are separate colliders of one prop
    let mug = commands
        .spawn((
            Name::new("Mug"),
            Transform::from_xyz(-0.4, 0.86, 0.1).with_rotation(Quat::from_rotation_y(0.6)),
            Visibility::default(),
            ChildOf(props),
        ))
        .id();
    commands.spawn((
        Name::new("Mug Body"),
        Mesh3d(meshes.add(Cylinder::new(0.05, 0.12))),
        MeshMaterial3d(mug_mat.clone()),
        Transform::default(),
        Collider::cylinder(0.05, 0.12),
        GrabLayer::item(),
        ChildOf(mug),
    ));
    commands.spawn((
        Name::new("Mug Handle"),
        Mesh3d(meshes.add(Torus::new(0.015, 0.035))),
        MeshMaterial3d(mug_mat),
        Transform::from_xyz(0.065, 0.0, 0.0).with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        Collider::sphere(0.035),
        GrabLayer::item(),
        ChildOf(mug),
    ));

    // Crate: a single-part prop
    commands.spawn((
        Name::new("Crate"),
        Mesh3d(meshes.add(Cuboid::new(0.3, 0.3, 0.3))),
        MeshMaterial3d(crate_mat),
        Transform::from_xyz(1.5, 0.15, -1.0).with_rotation(Quat::from_rotation_y(0.3)),
        Collider::cuboid(0.3, 0.3, 0.3),
        GrabLayer::item(),
        ChildOf(props),
    ));

    // Ball
    commands.spawn((
        Name::new("Ball"),
        Mesh3d(meshes.add(Sphere::new(0.12))),
        MeshMaterial3d(ball_mat),
        Transform::from_xyz(0.4, 0.92, -0.1),
        Collider::sphere(0.12),
        GrabLayer::item(),
        ChildOf(props),
    ));

    // Desk lamp: base, arm and shade
    let lamp = commands
        .spawn((
            Name::new("Lamp"),
            Transform::from_xyz(0.6, 0.8, 0.25),
            Visibility::default(),
            ChildOf(props),
        ))
        .id();
    let lamp_parts = [
        ("Lamp Base", Cylinder::new(0.08, 0.02), Vec3::new(0.0, 0.01, 0.0)),
        ("Lamp Arm", Cylinder::new(0.01, 0.3), Vec3::new(0.0, 0.17, 0.0)),
        ("Lamp Shade", Cylinder::new(0.07, 0.08), Vec3::new(0.0, 0.34, 0.0)),
    ];
    for (name, shape, offset) in lamp_parts {
        commands.spawn((
            Name::new(name),
            Mesh3d(meshes.add(shape)),
            MeshMaterial3d(lamp_mat.clone()),
            Transform::from_translation(offset),
            Collider::cylinder(shape.radius, shape.half_height * 2.0),
            GrabLayer::item(),
            ChildOf(lamp),
        ));
    }
}
