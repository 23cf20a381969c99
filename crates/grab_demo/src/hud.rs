//! Crosshair and interaction status overlay using Bevy native UI.

use bevy::prelude::*;
use bevy::ui::px;
use bevy_grab_place::{InteractionPhase, InteractionState, ItemDropped, ItemPickedUp};

/// Counts of completed interactions
#[derive(Resource, Default)]
pub struct InteractionStats {
    pub picked: usize,
    pub placed: usize,
}

// Marker components for HUD elements
#[derive(Component)]
struct PhaseText;

#[derive(Component)]
struct StatsText;

#[derive(Component)]
struct Crosshair;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionStats>()
            .add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (count_interactions, update_phase_text, update_stats_text, update_crosshair),
            );
    }
}

fn spawn_hud(mut commands: Commands) {
    // Full-screen overlay root, ignores picking
    commands
        .spawn((
            Name::new("HUD Root"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            Pickable::IGNORE,
        ))
        .with_children(|root| {
            // Top bar: phase + counters
            root.spawn((
                Node {
                    margin: UiRect::top(px(12.0)),
                    padding: UiRect::axes(px(20.0), px(8.0)),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    border_radius: BorderRadius::all(px(8.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ))
            .with_children(|bar| {
                bar.spawn((
                    PhaseText,
                    Text::new("Click a prop to pick it up"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));

                bar.spawn((
                    StatsText,
                    Text::new("0 picked / 0 placed"),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::srgba(0.7, 0.7, 0.7, 1.0)),
                ));
            });
        });

    // Crosshair dot in the middle of the screen
    commands.spawn((
        Crosshair,
        Name::new("Crosshair"),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(50.0),
            top: Val::Percent(50.0),
            width: px(6.0),
            height: px(6.0),
            margin: UiRect::all(px(-3.0)),
            border_radius: BorderRadius::all(px(3.0)),
            ..default()
        },
        BackgroundColor(Color::WHITE),
        Pickable::IGNORE,
    ));
}

fn count_interactions(
    mut picked_events: MessageReader<ItemPickedUp>,
    mut dropped_events: MessageReader<ItemDropped>,
    mut stats: ResMut<InteractionStats>,
) {
    stats.picked += picked_events.read().count();
    stats.placed += dropped_events.read().count();
}

fn update_phase_text(
    state: Res<InteractionState>,
    mut query: Query<(&mut Text, &mut TextColor), With<PhaseText>>,
) {
    for (mut text, mut color) in query.iter_mut() {
        let (message, tint) = match state.phase() {
            InteractionPhase::Idle if state.hovered_item.is_some() => {
                ("Click to pick up", Color::srgb(0.4, 0.8, 1.0))
            }
            InteractionPhase::Idle => ("Click a prop to pick it up", Color::WHITE),
            InteractionPhase::Holding if state.hovered_surface.is_some() => {
                ("Surface is not flat", Color::srgb(1.0, 0.4, 0.3))
            }
            InteractionPhase::Holding => ("Aim at a flat surface", Color::srgb(1.0, 0.6, 0.0)),
            InteractionPhase::PreviewingDrop => {
                ("E / Q to rotate, click to place", Color::srgb(0.2, 1.0, 0.3))
            }
        };
        **text = message.into();
        color.0 = tint;
    }
}

fn update_stats_text(stats: Res<InteractionStats>, mut query: Query<&mut Text, With<StatsText>>) {
    if !stats.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        **text = format!("{} picked / {} placed", stats.picked, stats.placed);
    }
}

/// Tint the crosshair when something interactable is under it
fn update_crosshair(
    state: Res<InteractionState>,
    mut query: Query<&mut BackgroundColor, With<Crosshair>>,
) {
    let target = if state.is_holding() {
        state.drop_legal
    } else {
        state.hovered_item.is_some()
    };

    for mut background in query.iter_mut() {
        background.0 = if target {
            Color::srgb(0.2, 1.0, 0.3)
        } else {
            Color::WHITE
        };
    }
}
