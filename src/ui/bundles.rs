use crate::ui::components::*;
use bevy::color::Color;
use bevy::prelude::*;

#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: &str, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(color),
            node: Node::default(),
        }
    }

    pub fn with_margin(mut self, margin: UiRect) -> Self {
        self.node.margin = margin;
        self
    }
}

/// Transparent card with a thin white border, the page's hover-card look.
#[derive(Bundle)]
pub struct CardBundle {
    pub node: Node,
    pub background: BackgroundColor,
    pub border_color: BorderColor,
    pub border_radius: BorderRadius,
}

impl CardBundle {
    pub fn new(width: f32) -> Self {
        Self {
            node: Node {
                width: Val::Px(width),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(20.0)),
                row_gap: Val::Px(10.0),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            background: BackgroundColor(Color::NONE),
            border_color: BorderColor::all(Color::WHITE),
            border_radius: BorderRadius::all(Val::Px(10.0)),
        }
    }
}

/// Small rounded pill used for tech badges on project cards.
#[derive(Bundle)]
pub struct BadgeBundle {
    pub node: Node,
    pub background: BackgroundColor,
    pub border_radius: BorderRadius,
}

impl BadgeBundle {
    pub fn new() -> Self {
        Self {
            node: Node {
                padding: UiRect::axes(Val::Px(8.0), Val::Px(3.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background: BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.2)),
            border_radius: BorderRadius::all(Val::Px(4.0)),
        }
    }
}

/// Outlined button on a transparent background; the hover state inverts it
/// to white-on-black via `ButtonConfig`.
#[derive(Bundle)]
pub struct OutlineButtonBundle {
    pub button: Button,
    pub node: Node,
    pub background: BackgroundColor,
    pub border_color: BorderColor,
    pub border_radius: BorderRadius,
    pub interaction: Interaction,
    pub marker: UIButton,
    pub config: ButtonConfig,
}

impl OutlineButtonBundle {
    pub fn new() -> Self {
        Self {
            button: Button,
            node: Node {
                padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            background: BackgroundColor(Color::NONE),
            border_color: BorderColor::all(Color::WHITE),
            border_radius: BorderRadius::all(Val::Px(6.0)),
            interaction: Interaction::None,
            marker: UIButton,
            config: ButtonConfig {
                normal_color: Color::NONE,
                hover_color: Color::srgba(1.0, 1.0, 1.0, 0.15),
                pressed_color: Color::srgba(1.0, 1.0, 1.0, 0.25),
            },
        }
    }
}
