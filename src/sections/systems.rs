use crate::content::*;
use crate::sections::components::*;
use crate::ui::bundles::{CardBundle, LabelBundle};
use crate::ui::components::FadeIn;
use crate::ui::widgets::*;
use bevy::ecs::relationship::RelatedSpawnerCommands;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Pixels per wheel "line" on mice that report line deltas.
const LINE_SCROLL_PX: f32 = 60.0;
const SCROLL_LERP_SPEED: f32 = 6.0;

const DIM_TEXT: Color = Color::srgb(0.8, 0.8, 0.8);
const CARD_WIDTH: f32 = 400.0;

pub fn setup_sections(mut commands: Commands, content: Res<PortfolioContent>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                overflow: Overflow::clip(),
                ..default()
            },
            SectionsRoot,
            ScrollState::default(),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        flex_direction: FlexDirection::Column,
                        top: Val::Px(0.0),
                        ..default()
                    },
                    ScrollColumn,
                ))
                .with_children(|parent| {
                    spawn_intro(parent, &content.profile);
                    spawn_about(parent, &content.about);
                    spawn_skills(parent, &content.skills);
                    spawn_projects(parent, &content.projects);
                    spawn_experience(parent, &content.experience);
                    spawn_contact(parent, &content.contact);
                });
        });
}

pub fn cleanup_sections(mut commands: Commands, query: Query<Entity, With<SectionsRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// One viewport-tall centered column; every section shares this frame.
fn spawn_section(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    index: usize,
    build: impl FnOnce(&mut RelatedSpawnerCommands<ChildOf>),
) {
    parent
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Vh(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(32.0)),
                ..default()
            },
            Section { index },
        ))
        .with_children(build);
}

fn spawn_intro(parent: &mut RelatedSpawnerCommands<ChildOf>, profile: &Profile) {
    spawn_section(parent, 0, |parent| {
        parent.spawn((
            LabelBundle::new(&profile.greeting, 64.0, Color::WHITE),
            FadeIn::new(0.0, 0.8, 50.0),
        ));
        parent.spawn((
            LabelBundle::new(&profile.name, 48.0, Color::WHITE),
            FadeIn::new(0.0, 0.8, 50.0),
        ));
        parent.spawn((
            LabelBundle::new(&profile.tagline, 20.0, Color::WHITE)
                .with_margin(UiRect::bottom(Val::Px(32.0))),
            FadeIn::new(0.2, 0.8, 20.0),
        ));
        spawn_button_with_marker(
            parent,
            &profile.call_to_action,
            (ScrollToSection(1), FadeIn::new(0.4, 0.8, 20.0)),
        );
    });
}

fn spawn_about(parent: &mut RelatedSpawnerCommands<ChildOf>, about: &About) {
    spawn_section(parent, 1, |parent| {
        spawn_heading(parent, "About Me");
        parent
            .spawn(Node {
                width: Val::Px(640.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(20.0),
                ..default()
            })
            .with_children(|parent| {
                for paragraph in &about.paragraphs {
                    parent.spawn((
                        LabelBundle::new(paragraph, 16.0, Color::WHITE),
                        FadeIn::new(0.2, 0.8, 20.0),
                    ));
                }
            });
    });
}

fn spawn_skills(parent: &mut RelatedSpawnerCommands<ChildOf>, skills: &[SkillGroup]) {
    spawn_section(parent, 2, |parent| {
        spawn_heading(parent, "Interstellar Skills");
        spawn_card_grid(parent, |parent| {
            for (i, group) in skills.iter().enumerate() {
                parent
                    .spawn((
                        CardBundle::new(CARD_WIDTH),
                        FadeIn::new(0.2 + i as f32 * 0.1, 0.8, 24.0),
                    ))
                    .with_children(|parent| {
                        spawn_label(parent, &group.name, 20.0, Color::WHITE);
                        for skill in &group.skills {
                            spawn_label(parent, &format!("• {skill}"), 16.0, DIM_TEXT);
                        }
                    });
            }
        });
    });
}

fn spawn_projects(parent: &mut RelatedSpawnerCommands<ChildOf>, projects: &[Project]) {
    spawn_section(parent, 3, |parent| {
        spawn_heading(parent, "Projects");
        spawn_card_grid(parent, |parent| {
            for (i, project) in projects.iter().enumerate() {
                parent
                    .spawn((
                        CardBundle::new(CARD_WIDTH),
                        FadeIn::new(0.2 + i as f32 * 0.1, 0.8, 24.0),
                    ))
                    .with_children(|parent| {
                        spawn_label(parent, &project.name, 20.0, Color::WHITE);
                        spawn_label(parent, &project.description, 14.0, DIM_TEXT);
                        parent
                            .spawn(Node {
                                flex_direction: FlexDirection::Row,
                                flex_wrap: FlexWrap::Wrap,
                                column_gap: Val::Px(8.0),
                                row_gap: Val::Px(8.0),
                                ..default()
                            })
                            .with_children(|parent| {
                                for tech in &project.tech {
                                    spawn_badge(parent, tech);
                                }
                            });
                        spawn_link_button(parent, "Visit Project", &project.link);
                    });
            }
        });
    });
}

fn spawn_experience(parent: &mut RelatedSpawnerCommands<ChildOf>, jobs: &[Job]) {
    spawn_section(parent, 4, |parent| {
        spawn_heading(parent, "Career Journey");
        parent
            .spawn(Node {
                width: Val::Px(640.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(32.0),
                ..default()
            })
            .with_children(|parent| {
                for (i, job) in jobs.iter().enumerate() {
                    parent
                        .spawn((
                            CardBundle::new(640.0),
                            FadeIn::new(0.2 + i as f32 * 0.1, 0.8, 24.0),
                        ))
                        .with_children(|parent| {
                            spawn_label(parent, &job.role, 20.0, Color::WHITE);
                            spawn_label(
                                parent,
                                &format!("{} - {}", job.company, job.period),
                                14.0,
                                DIM_TEXT,
                            );
                            for achievement in &job.achievements {
                                spawn_label(parent, &format!("• {achievement}"), 16.0, Color::WHITE);
                            }
                        });
                }
            });
    });
}

fn spawn_contact(parent: &mut RelatedSpawnerCommands<ChildOf>, contact: &[ContactLink]) {
    spawn_section(parent, 5, |parent| {
        spawn_heading(parent, "Get in Touch");
        parent
            .spawn((
                Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(16.0),
                    ..default()
                },
                FadeIn::new(0.2, 0.8, 20.0),
            ))
            .with_children(|parent| {
                for link in contact {
                    spawn_link_button(parent, &link.label, &link.url);
                }
            });
    });
}

fn spawn_card_grid(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    build: impl FnOnce(&mut RelatedSpawnerCommands<ChildOf>),
) {
    parent
        .spawn(Node {
            width: Val::Px(2.0 * CARD_WIDTH + 100.0),
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(32.0),
            row_gap: Val::Px(32.0),
            ..default()
        })
        .with_children(build);
}

pub fn scroll_on_wheel(
    mut mouse_wheel: MessageReader<MouseWheel>,
    windows: Query<&Window>,
    sections: Query<&Section>,
    mut scroll_query: Query<&mut ScrollState, With<SectionsRoot>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut scroll) = scroll_query.single_mut() else {
        return;
    };
    let section_count = section_count(&sections);

    for wheel in mouse_wheel.read() {
        let delta = wheel_delta_px(wheel.unit, wheel.y);
        scroll.target = clamp_scroll(scroll.target - delta, section_count, window.height());
    }
}

pub fn handle_scroll_buttons(
    button_query: Query<(&Interaction, &ScrollToSection), Changed<Interaction>>,
    windows: Query<&Window>,
    sections: Query<&Section>,
    mut scroll_query: Query<&mut ScrollState, With<SectionsRoot>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    for (interaction, target) in &button_query {
        if *interaction == Interaction::Pressed {
            if let Ok(mut scroll) = scroll_query.single_mut() {
                scroll.target = clamp_scroll(
                    target.0 as f32 * window.height(),
                    section_count(&sections),
                    window.height(),
                );
            }
        }
    }
}

fn section_count(sections: &Query<&Section>) -> usize {
    sections.iter().map(|s| s.index + 1).max().unwrap_or(0)
}

/// Chases the scroll target every frame, snapping the last half pixel so the
/// column settles instead of drifting forever.
pub fn smooth_scroll(
    time: Res<Time>,
    mut scroll_query: Query<&mut ScrollState, With<SectionsRoot>>,
    mut column_query: Query<&mut Node, With<ScrollColumn>>,
) {
    let Ok(mut scroll) = scroll_query.single_mut() else {
        return;
    };
    let Ok(mut column) = column_query.single_mut() else {
        return;
    };

    let lerp_factor = (SCROLL_LERP_SPEED * time.delta_secs()).min(1.0);
    scroll.current += (scroll.target - scroll.current) * lerp_factor;
    if (scroll.target - scroll.current).abs() < 0.5 {
        scroll.current = scroll.target;
    }

    column.top = Val::Px(-scroll.current);
}

fn wheel_delta_px(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => y * LINE_SCROLL_PX,
        MouseScrollUnit::Pixel => y,
    }
}

/// Sections are exactly one viewport tall, so the column can scroll at most
/// `(sections - 1) * viewport`.
fn clamp_scroll(target: f32, section_count: usize, viewport_height: f32) -> f32 {
    let max = section_count.saturating_sub(1) as f32 * viewport_height;
    target.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-100.0, 0.0)]
    #[case(0.0, 0.0)]
    #[case(2345.0, 2345.0)]
    #[case(99999.0, 4500.0)]
    fn scroll_is_clamped_to_the_column(#[case] target: f32, #[case] expected: f32) {
        assert_eq!(clamp_scroll(target, 6, 900.0), expected);
    }

    #[test]
    fn single_section_cannot_scroll() {
        assert_eq!(clamp_scroll(500.0, 1, 900.0), 0.0);
        assert_eq!(clamp_scroll(500.0, 0, 900.0), 0.0);
    }

    #[test]
    fn line_deltas_convert_to_pixels() {
        assert_eq!(wheel_delta_px(MouseScrollUnit::Line, 2.0), 120.0);
        assert_eq!(wheel_delta_px(MouseScrollUnit::Pixel, 2.0), 2.0);
    }
}
