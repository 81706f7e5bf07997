//! Paints a [`VisualNode`] tree into a ratatui frame
//!
//! Sizes are measured in terminal cells. Leaves have fixed heights; cards add
//! a border on every side. When the tree is taller than the area, hero icons
//! and the headline collapse to a single row; if it still does not fit, the
//! bottom is clipped and earlier sections keep their full height.

use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::sprites::{self, SPRITE_HEIGHT};
use crate::view::{
    Align, Arrangement, Axis, CARD_PURPLE, Container, IconNode, IconSize, Rgb, Surface, TextNode,
    TextRole, VisualNode,
};

/// Rows for the headline temperature when rendered as FIGlet art.
pub const HEADLINE_HEIGHT: u16 = 4;
/// Columns per card in a scrollable row.
pub const SCROLL_ITEM_WIDTH: u16 = 12;
/// Density-independent pixels per terminal column of spacing.
const DP_PER_CELL: u16 = 8;

const TEXT_COLOR: Color = Color::White;
const CAPTION_COLOR: Color = Color::Rgb(220, 215, 240);

pub struct NodeView;

pub struct NodeViewProps<'a> {
    pub node: &'a VisualNode,
    /// First visible child of the scrollable row
    pub scroll_offset: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    /// Sprites and FIGlet headline
    Full,
    /// Every leaf on a single row
    Compact,
}

impl Density {
    /// The roomiest density whose layout fits in `height` rows.
    pub fn for_height(node: &VisualNode, height: u16) -> Self {
        if node_height(node, Density::Full) <= height {
            Density::Full
        } else {
            Density::Compact
        }
    }
}

struct PaintContext {
    density: Density,
    scroll_offset: usize,
}

impl Component<Action> for NodeView {
    type Props<'a> = NodeViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let ctx = PaintContext {
            density: Density::for_height(props.node, area.height),
            scroll_offset: props.scroll_offset,
        };
        paint(frame, area, props.node, &ctx);
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// Rows `node` needs at `density`.
pub fn node_height(node: &VisualNode, density: Density) -> u16 {
    match node {
        VisualNode::Text(text) => match (text.role, density) {
            (TextRole::Headline, Density::Full) => HEADLINE_HEIGHT,
            _ => 1,
        },
        VisualNode::Icon(icon) => match (icon.size, density) {
            (IconSize::Hero, Density::Full) => SPRITE_HEIGHT,
            _ => 1,
        },
        VisualNode::Container(container) => {
            let heights = container.children.iter().map(|c| node_height(c, density));
            let inner = match container.axis {
                Axis::Vertical => heights.sum(),
                Axis::Horizontal => heights.max().unwrap_or(0),
            };
            inner + surface_inset(container.surface) * 2
        }
    }
}

/// Columns `node` needs; text is measured by display width.
pub fn node_width(node: &VisualNode) -> u16 {
    match node {
        VisualNode::Text(text) => Line::from(text.text.as_str()).width() as u16,
        VisualNode::Icon(icon) => match icon.size {
            IconSize::Hero => SCROLL_ITEM_WIDTH + 1,
            _ => 2,
        },
        VisualNode::Container(container) => {
            let widths = container.children.iter().map(node_width);
            let inner = match container.axis {
                Axis::Vertical => widths.max().unwrap_or(0),
                Axis::Horizontal => widths.sum(),
            };
            inner + surface_inset(container.surface) * 2
        }
    }
}

fn surface_inset(surface: Surface) -> u16 {
    match surface {
        Surface::Card => 1,
        Surface::Plain | Surface::Gradient { .. } => 0,
    }
}

// ============================================================================
// Painting
// ============================================================================

fn paint(frame: &mut Frame, area: Rect, node: &VisualNode, ctx: &PaintContext) {
    if area.is_empty() {
        return;
    }
    match node {
        VisualNode::Text(text) => paint_text(frame, area, text, ctx),
        VisualNode::Icon(icon) => paint_icon(frame, area, icon, ctx),
        VisualNode::Container(container) => paint_container(frame, area, container, ctx),
    }
}

fn paint_text(frame: &mut Frame, area: Rect, node: &TextNode, ctx: &PaintContext) {
    // Headlines are always centered FIGlet art
    if node.role == TextRole::Headline && ctx.density == Density::Full {
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(headline_gradient());
        frame.render_widget(ArtBox::new(&renderer, &node.text), area);
        return;
    }

    let color = match node.role {
        TextRole::Caption => CAPTION_COLOR,
        _ => TEXT_COLOR,
    };
    let mut style = Style::default().fg(color);
    if node.role.is_bold() {
        style = style.bold();
    }
    let line = Line::styled(node.text.as_str(), style);
    frame.render_widget(
        Paragraph::new(line).alignment(text_alignment(node.align)),
        area,
    );
}

fn paint_icon(frame: &mut Frame, area: Rect, node: &IconNode, ctx: &PaintContext) {
    let art = match (node.size, ctx.density) {
        (IconSize::Hero, Density::Full) => sprites::icon_art(node.icon, area.height),
        _ => Line::from(node.icon.emoji()).into(),
    };
    frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), area);
}

fn paint_container(frame: &mut Frame, area: Rect, container: &Container, ctx: &PaintContext) {
    let inner = paint_surface(frame, area, container.surface);

    match (container.axis, container.scroll) {
        (Axis::Vertical, _) => paint_column(frame, inner, container, ctx),
        (Axis::Horizontal, false) => paint_row(frame, inner, container, ctx),
        (Axis::Horizontal, true) => paint_scroll_row(frame, inner, container, ctx),
    }
}

/// Fill the surface and return the area left for children.
fn paint_surface(frame: &mut Frame, area: Rect, surface: Surface) -> Rect {
    match surface {
        Surface::Plain => area,
        Surface::Card => {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(to_color(CARD_PURPLE.lerp(Rgb(255, 255, 255), 0.3))))
                .style(Style::default().bg(to_color(CARD_PURPLE)));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            inner
        }
        Surface::Gradient { from, to } => {
            let span = area.width.saturating_sub(1).max(1) as f32;
            let buf = frame.buffer_mut();
            for x in area.left()..area.right() {
                let t = (x - area.left()) as f32 / span;
                let color = to_color(from.lerp(to, t));
                for y in area.top()..area.bottom() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(color);
                    }
                }
            }
            area
        }
    }
}

fn paint_column(frame: &mut Frame, area: Rect, container: &Container, ctx: &PaintContext) {
    let heights: Vec<u16> = container
        .children
        .iter()
        .map(|child| node_height(child, ctx.density))
        .collect();
    let total = heights.iter().fold(0u16, |sum, h| sum.saturating_add(*h));
    if total > area.height {
        paint_column_clipped(frame, area, container, &heights, ctx);
        return;
    }

    let constraints = heights.iter().map(|h| Constraint::Length(*h));
    let (flex, spacing) = flex_for(container.arrangement);
    let chunks = Layout::vertical(constraints)
        .flex(flex)
        .spacing(spacing)
        .split(area);

    for (child, chunk) in container.children.iter().zip(chunks.iter()) {
        paint(frame, *chunk, child, ctx);
    }
}

/// Children keep their measured heights from the top; whatever passes the
/// bottom edge is cut off.
fn paint_column_clipped(
    frame: &mut Frame,
    area: Rect,
    container: &Container,
    heights: &[u16],
    ctx: &PaintContext,
) {
    let mut y = area.top();
    for (child, height) in container.children.iter().zip(heights) {
        if y >= area.bottom() {
            break;
        }
        let height = (*height).min(area.bottom() - y);
        if height > 0 {
            paint(frame, Rect { y, height, ..area }, child, ctx);
        }
        y += height;
    }
}

fn paint_row(frame: &mut Frame, area: Rect, container: &Container, ctx: &PaintContext) {
    let constraints = container
        .children
        .iter()
        .map(|child| Constraint::Length(node_width(child)));
    let (flex, spacing) = flex_for(container.arrangement);
    let chunks = Layout::horizontal(constraints)
        .flex(flex)
        .spacing(spacing)
        .split(area);

    for (child, chunk) in container.children.iter().zip(chunks.iter()) {
        paint(frame, *chunk, child, ctx);
    }
}

/// Fixed-width cards starting at `ctx.scroll_offset`; only whole cards are drawn.
fn paint_scroll_row(frame: &mut Frame, area: Rect, container: &Container, ctx: &PaintContext) {
    let (_, spacing) = flex_for(container.arrangement);
    let visible = visible_items(area.width, spacing);
    let items: Vec<&VisualNode> = container
        .children
        .iter()
        .skip(ctx.scroll_offset)
        .take(visible)
        .collect();
    if items.is_empty() {
        return;
    }

    let chunks = Layout::horizontal(items.iter().map(|_| Constraint::Length(SCROLL_ITEM_WIDTH)))
        .flex(Flex::Start)
        .spacing(spacing)
        .split(area);

    for (child, chunk) in items.into_iter().zip(chunks.iter()) {
        paint(frame, *chunk, child, ctx);
    }
}

/// How many whole cards fit in `width` columns.
pub fn visible_items(width: u16, spacing: u16) -> usize {
    ((width + spacing) / (SCROLL_ITEM_WIDTH + spacing)) as usize
}

fn flex_for(arrangement: Arrangement) -> (Flex, u16) {
    match arrangement {
        Arrangement::Start => (Flex::Start, 0),
        Arrangement::Center => (Flex::Center, 0),
        Arrangement::SpaceBetween => (Flex::SpaceBetween, 0),
        Arrangement::SpaceEvenly => (Flex::SpaceAround, 0),
        Arrangement::SpacedBy(dp) => (Flex::Start, dp.div_ceil(DP_PER_CELL)),
    }
}

fn text_alignment(align: Align) -> Alignment {
    match align {
        Align::Start => Alignment::Left,
        Align::Center => Alignment::Center,
    }
}

fn headline_gradient() -> Fill {
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(255, 255, 255),
        ArtColor::rgb(255, 220, 180),
    ))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{ForecastData, TempUnit};
    use crate::screen::{compose_screen, compose_screen_with_week};
    use tui_dispatch::testing::*;

    fn sample_screen() -> VisualNode {
        let data = ForecastData::sample();
        compose_screen(&data.current, &data.hourly, TempUnit::Celsius)
    }

    #[test]
    fn test_full_screen_height() {
        // title 1 + hero 5 + timestamp 1 + headline 4 + high/low 1
        // + detail strip 5 + label 1 + hourly row 5
        assert_eq!(node_height(&sample_screen(), Density::Full), 23);
        assert_eq!(node_height(&sample_screen(), Density::Compact), 16);
    }

    #[test]
    fn test_density_falls_back_when_tall() {
        let data = ForecastData::sample();
        let with_week =
            compose_screen_with_week(&data.current, &data.hourly, &data.daily, TempUnit::Celsius);
        assert_eq!(Density::for_height(&sample_screen(), 23), Density::Full);
        assert_eq!(Density::for_height(&with_week, 23), Density::Compact);
    }

    #[test]
    fn test_overflowing_column_clips_at_bottom() {
        let data = ForecastData::sample();
        let with_week =
            compose_screen_with_week(&data.current, &data.hourly, &data.daily, TempUnit::Celsius);
        assert!(node_height(&with_week, Density::Compact) > 23);

        let mut render = RenderHarness::new(80, 23);
        let mut view = NodeView;
        let output = render.render_to_string_plain(|frame| {
            view.render(
                frame,
                frame.area(),
                NodeViewProps {
                    node: &with_week,
                    scroll_offset: 0,
                },
            );
        });

        for text in ["20%", "5km/h", "80%", "Today", "01:00 PM", "Next 7 Days", "Tuesday"] {
            assert!(output.contains(text), "missing {text:?} in:\n{output}");
        }
        assert!(!output.contains("Monday"), "last day should be clipped:\n{output}");
    }

    #[test]
    fn test_visible_items() {
        assert_eq!(visible_items(12, 1), 1);
        assert_eq!(visible_items(25, 1), 2);
        assert_eq!(visible_items(11, 1), 0);
        assert_eq!(visible_items(80, 1), 6);
    }

    #[test]
    fn test_render_scroll_offset() {
        let mut render = RenderHarness::new(80, 23);
        let mut view = NodeView;
        let screen = sample_screen();

        let first = render.render_to_string_plain(|frame| {
            view.render(
                frame,
                frame.area(),
                NodeViewProps {
                    node: &screen,
                    scroll_offset: 0,
                },
            );
        });
        // Timestamp line plus the first card
        assert_eq!(first.matches("12:00 PM").count(), 2, "first card visible:\n{first}");

        let shifted = render.render_to_string_plain(|frame| {
            view.render(
                frame,
                frame.area(),
                NodeViewProps {
                    node: &screen,
                    scroll_offset: 1,
                },
            );
        });
        assert_eq!(shifted.matches("12:00 PM").count(), 1, "first card scrolled away:\n{shifted}");
        assert!(shifted.contains("01:00 PM"));
        assert!(shifted.contains("26°"));
    }

    #[test]
    fn test_render_detail_strip() {
        let mut render = RenderHarness::new(80, 23);
        let mut view = NodeView;
        let screen = sample_screen();

        let output = render.render_to_string_plain(|frame| {
            view.render(
                frame,
                frame.area(),
                NodeViewProps {
                    node: &screen,
                    scroll_offset: 0,
                },
            );
        });

        for text in ["Mostly Cloudy", "H:27 L:18", "20%", "5km/h", "80%", "Humidity", "Today"] {
            assert!(output.contains(text), "missing {text:?} in:\n{output}");
        }
    }
}
