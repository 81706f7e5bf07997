//! Terminal art for icon handles, with multi-color layer support
//!
//! Each icon is one or more layers of ASCII art. Spaces are transparent, so
//! later layers draw over earlier ones only where they have ink.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::icons::IconHandle;

// ============================================================================
// Sprite data
// All layers of one icon share the same 5x13 grid.
// ============================================================================

mod sprite_data {
    pub const SUN_RAYS: &str = concat!(
        r"    \   /", "\n",
        r"     .-.", "\n",
        r"  -- (   ) --", "\n",
        r"     `-'", "\n",
        r"    /   \", "\n",
    );

    pub const PARTIAL_SUN: &str = concat!(
        r"  \  /", "\n",
        r"_ /''", "\n",
        r"  \_", "\n",
        r"  /", "\n",
        "\n",
    );

    pub const FRONT_CLOUD: &str = concat!(
        "\n",
        r"     .--.", "\n",
        r"  .-(    ).", "\n",
        r" (___.__)__)", "\n",
        "\n",
    );

    pub const HIGH_CLOUD: &str = concat!(
        r"     .--.", "\n",
        r"  .-(    ).", "\n",
        r" (___.__)__)", "\n",
        "\n",
        "\n",
    );

    pub const RAIN_DROPS: &str = concat!(
        "\n",
        "\n",
        "\n",
        r"   ' ' ' '", "\n",
        r"  ' ' ' '", "\n",
    );

    pub const LIGHTNING: &str = concat!(
        "\n",
        "\n",
        "\n",
        r"    _/  _/", "\n",
        r"    /   /", "\n",
    );

    pub const GUSTS: &str = concat!(
        "\n",
        r"  ~~~~~~~-.", "\n",
        r" ~~~~~~~~~ )", "\n",
        r"  ~~~~~~-'", "\n",
        "\n",
    );

    pub const DROPLET: &str = concat!(
        r"      .", "\n",
        r"     / \", "\n",
        r"    (   )", "\n",
        r"     `-'", "\n",
        "\n",
    );
}

/// Rows every sprite occupies.
pub const SPRITE_HEIGHT: u16 = 5;

const YELLOW: Color = Color::Rgb(250, 210, 80);
const CLOUD_GRAY: Color = Color::Rgb(200, 200, 215);
const STORM_GRAY: Color = Color::Rgb(120, 120, 140);
const RAIN_BLUE: Color = Color::Rgb(80, 140, 200);
const WIND_TEAL: Color = Color::Rgb(150, 220, 200);

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(Vec::len).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flatten()
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);

    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);

        for col_idx in 0..max_width {
            // Topmost ink wins; the last layer is the foreground
            let ink = layers
                .iter()
                .zip(&layer_lines)
                .rev()
                .find_map(|(layer, lines)| {
                    lines
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                });
            let (ch, color) = ink.unwrap_or((' ', Color::Reset));

            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }

        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

fn layers_for(icon: IconHandle) -> Vec<SpriteLayer> {
    use sprite_data::*;

    let layer = |content, color| SpriteLayer { content, color };
    match icon {
        IconHandle::Sun => vec![layer(SUN_RAYS, YELLOW)],
        IconHandle::CloudySunny => vec![layer(PARTIAL_SUN, YELLOW), layer(FRONT_CLOUD, CLOUD_GRAY)],
        IconHandle::Rain => vec![layer(HIGH_CLOUD, CLOUD_GRAY), layer(RAIN_DROPS, RAIN_BLUE)],
        IconHandle::Storm => vec![layer(HIGH_CLOUD, STORM_GRAY), layer(LIGHTNING, YELLOW)],
        IconHandle::Wind => vec![layer(GUSTS, WIND_TEAL)],
        IconHandle::Humidity => vec![layer(DROPLET, RAIN_BLUE)],
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Colored art for `icon`, [`SPRITE_HEIGHT`] rows tall.
pub fn icon_sprite(icon: IconHandle) -> Text<'static> {
    composite_layers(&layers_for(icon))
}

/// The sprite when `available_height` fits it, otherwise the emoji on one line.
pub fn icon_art(icon: IconHandle, available_height: u16) -> Text<'static> {
    if available_height >= SPRITE_HEIGHT {
        icon_sprite(icon)
    } else {
        Text::from(Line::from(icon.emoji()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ICONS: [IconHandle; 6] = [
        IconHandle::Sun,
        IconHandle::Rain,
        IconHandle::CloudySunny,
        IconHandle::Storm,
        IconHandle::Wind,
        IconHandle::Humidity,
    ];

    fn plain(text: &Text<'_>) -> String {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_all_sprites_have_fixed_height() {
        for icon in ALL_ICONS {
            let text = icon_sprite(icon);
            assert_eq!(
                text.lines.len(),
                SPRITE_HEIGHT as usize,
                "Sprite {:?} should be {} rows",
                icon,
                SPRITE_HEIGHT
            );
        }
    }

    #[test]
    fn test_foreground_layer_wins() {
        let back = SpriteLayer {
            content: "aaa",
            color: Color::Red,
        };
        let front = SpriteLayer {
            content: " b ",
            color: Color::Blue,
        };
        let text = composite_layers(&[back, front]);
        assert_eq!(plain(&text), "aba");
        assert_eq!(text.lines[0].spans[0].style.fg, Some(Color::Red));
        assert_eq!(text.lines[0].spans[1].style.fg, Some(Color::Blue));
    }

    #[test]
    fn test_rain_has_cloud_and_drops() {
        let art = plain(&icon_sprite(IconHandle::Rain));
        assert!(art.contains("(___.__)__)"));
        assert!(art.contains("' ' ' '"));
    }

    #[test]
    fn test_emoji_fallback_when_too_small() {
        let text = icon_art(IconHandle::Sun, 2);
        assert_eq!(text.lines.len(), 1);
        assert_eq!(plain(&text), IconHandle::Sun.emoji());

        let text = icon_art(IconHandle::Sun, SPRITE_HEIGHT);
        assert_eq!(text.lines.len(), SPRITE_HEIGHT as usize);
    }
}
