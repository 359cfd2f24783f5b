use crate::ui::components::*;
use bevy::color::Alpha;
use bevy::prelude::*;

pub fn handle_button_interactions(
    mut button_query: Query<
        (&Interaction, &mut BackgroundColor, &ButtonConfig),
        (Changed<Interaction>, With<UIButton>),
    >,
) {
    for (interaction, mut bg_color, config) in button_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *bg_color = BackgroundColor(config.pressed_color);
            }
            Interaction::Hovered => {
                *bg_color = BackgroundColor(config.hover_color);
            }
            Interaction::None => {
                *bg_color = BackgroundColor(config.normal_color);
            }
        }
    }
}

// There is no in-app browser; surfacing the URL is all a native single-window
// page can do with an external link.
pub fn handle_link_buttons(
    link_query: Query<(&Interaction, &LinkButton), Changed<Interaction>>,
) {
    for (interaction, link) in &link_query {
        if *interaction == Interaction::Pressed {
            info!("Link pressed: {}", link.url);
        }
    }
}

/// Captures spawn-time alphas and moves freshly added elements to their
/// animation start: fully transparent, offset below the resting position.
pub fn init_fade_ins(
    mut fade_query: Query<
        (
            &mut FadeIn,
            &mut Node,
            Option<&mut TextColor>,
            Option<&mut BackgroundColor>,
            Option<&mut BorderColor>,
        ),
        Added<FadeIn>,
    >,
) {
    for (mut fade, mut node, text_color, background, border) in fade_query.iter_mut() {
        if let Some(mut color) = text_color {
            fade.base_text_alpha = color.0.alpha();
            color.0.set_alpha(0.0);
        }
        if let Some(mut color) = background {
            fade.base_background_alpha = color.0.alpha();
            color.0.set_alpha(0.0);
        }
        if let Some(mut border) = border {
            fade.base_border_alpha = border.top.alpha();
            *border = BorderColor::all(border.top.with_alpha(0.0));
        }
        node.top = Val::Px(fade.rise);
    }
}

pub fn advance_fade_ins(
    time: Res<Time>,
    mut fade_query: Query<(
        &mut FadeIn,
        &mut Node,
        Option<&mut TextColor>,
        Option<&mut BackgroundColor>,
        Option<&mut BorderColor>,
    )>,
) {
    let delta = time.delta_secs();
    for (mut fade, mut node, text_color, background, border) in fade_query.iter_mut() {
        if fade.finished() {
            continue;
        }
        fade.elapsed += delta;
        let t = ease_out_cubic(fade.progress());

        node.top = Val::Px(fade.rise * (1.0 - t));
        if let Some(mut color) = text_color {
            color.0.set_alpha(fade.base_text_alpha * t);
        }
        if let Some(mut color) = background {
            color.0.set_alpha(fade.base_background_alpha * t);
        }
        if let Some(mut border) = border {
            *border = BorderColor::all(border.top.with_alpha(fade.base_border_alpha * t));
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_hits_endpoints_and_decelerates() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // front-loaded: halfway through time, most of the way through motion
        assert!(ease_out_cubic(0.5) > 0.8);
    }
}
