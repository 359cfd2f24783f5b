use crate::ui::bundles::*;
use crate::ui::components::*;
use bevy::ecs::relationship::RelatedSpawnerCommands;
use bevy::prelude::*;

/// Large section heading with the standard enter animation.
pub fn spawn_heading(parent: &mut RelatedSpawnerCommands<ChildOf>, text: &str) -> Entity {
    parent
        .spawn((
            LabelBundle::new(text, 40.0, Color::WHITE)
                .with_margin(UiRect::bottom(Val::Px(48.0))),
            FadeIn::new(0.0, 0.8, 20.0),
        ))
        .id()
}

pub fn spawn_label(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    text: &str,
    font_size: f32,
    color: Color,
) -> Entity {
    parent
        .spawn(LabelBundle::new(text, font_size, color))
        .id()
}

pub fn spawn_badge(parent: &mut RelatedSpawnerCommands<ChildOf>, text: &str) -> Entity {
    parent
        .spawn(BadgeBundle::new())
        .with_children(|parent| {
            parent.spawn(LabelBundle::new(text, 12.0, Color::WHITE));
        })
        .id()
}

/// Outlined button that records its target URL when pressed.
pub fn spawn_link_button(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    label: &str,
    url: &str,
) -> Entity {
    parent
        .spawn((
            OutlineButtonBundle::new(),
            LinkButton {
                url: url.to_string(),
            },
        ))
        .with_children(|parent| {
            parent.spawn(LabelBundle::new(label, 16.0, Color::WHITE));
        })
        .id()
}

/// Outlined button carrying an arbitrary marker, for app-level actions.
pub fn spawn_button_with_marker(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    label: &str,
    marker: impl Bundle,
) -> Entity {
    parent
        .spawn((OutlineButtonBundle::new(), marker))
        .with_children(|parent| {
            parent.spawn(LabelBundle::new(label, 16.0, Color::WHITE));
        })
        .id()
}
