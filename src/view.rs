//! Toolkit-independent visual tree
//!
//! Renderers build a [`VisualNode`] tree from forecast data; a host paints
//! it. Nothing here knows about terminals.

use crate::icons::IconHandle;

// ============================================================================
// Colors
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend towards `other`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Screen background, left edge.
pub const BACKGROUND_START: Rgb = Rgb(0x59, 0x46, 0x9d);
/// Screen background, right edge.
pub const BACKGROUND_END: Rgb = Rgb(0x64, 0x3d, 0x37);
/// Card fill for the detail strip and hourly items.
pub const CARD_PURPLE: Rgb = Rgb(0x6e, 0x5b, 0xb8);

// ============================================================================
// Leaves
// ============================================================================

/// Typographic role of a text line. Sizes are in scale-independent points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    Title,
    Subtitle,
    Headline,
    Body,
    Value,
    Caption,
    Item,
}

impl TextRole {
    pub fn font_size(self) -> u16 {
        match self {
            TextRole::Title => 20,
            TextRole::Subtitle => 19,
            TextRole::Headline => 63,
            TextRole::Body | TextRole::Value => 16,
            TextRole::Caption => 14,
            TextRole::Item => 18,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, TextRole::Headline | TextRole::Value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    #[default]
    Start,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub role: TextRole,
    pub align: Align,
}

impl TextNode {
    pub fn new(text: impl Into<String>, role: TextRole) -> Self {
        Self {
            text: text.into(),
            role,
            align: Align::Start,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconSize {
    Hero,
    Item,
    Detail,
    Inline,
}

impl IconSize {
    /// Edge length in density-independent pixels
    pub fn dp(self) -> u16 {
        match self {
            IconSize::Hero => 150,
            IconSize::Item => 45,
            IconSize::Detail => 34,
            IconSize::Inline => 24,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IconNode {
    pub icon: IconHandle,
    pub size: IconSize,
    /// Accessibility text
    pub description: String,
}

impl IconNode {
    pub fn new(icon: IconHandle, size: IconSize, description: impl Into<String>) -> Self {
        Self {
            icon,
            size,
            description: description.into(),
        }
    }
}

// ============================================================================
// Containers
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// How children share the main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Arrangement {
    #[default]
    Start,
    Center,
    SpaceBetween,
    SpaceEvenly,
    /// Fixed gap between children, in dp
    SpacedBy(u16),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Surface {
    #[default]
    Plain,
    /// Rounded purple card
    Card,
    /// Horizontal gradient from left to right
    Gradient { from: Rgb, to: Rgb },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub axis: Axis,
    pub arrangement: Arrangement,
    pub surface: Surface,
    /// Children may overflow the main axis and scroll
    pub scroll: bool,
    pub children: Vec<VisualNode>,
}

impl Container {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            arrangement: Arrangement::Start,
            surface: Surface::Plain,
            scroll: false,
            children: Vec::new(),
        }
    }

    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn arranged(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    pub fn surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn scrollable(mut self) -> Self {
        self.scroll = true;
        self
    }

    pub fn child(mut self, node: impl Into<VisualNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn extend<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<VisualNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Something to display: a line of text, an icon, or a layout container.
#[derive(Clone, Debug, PartialEq)]
pub enum VisualNode {
    Text(TextNode),
    Icon(IconNode),
    Container(Container),
}

impl From<TextNode> for VisualNode {
    fn from(node: TextNode) -> Self {
        VisualNode::Text(node)
    }
}

impl From<IconNode> for VisualNode {
    fn from(node: IconNode) -> Self {
        VisualNode::Icon(node)
    }
}

impl From<Container> for VisualNode {
    fn from(node: Container) -> Self {
        VisualNode::Container(node)
    }
}

impl VisualNode {
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            VisualNode::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_icon(&self) -> Option<&IconNode> {
        match self {
            VisualNode::Icon(icon) => Some(icon),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            VisualNode::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Direct children; empty for leaves.
    pub fn children(&self) -> &[VisualNode] {
        match self {
            VisualNode::Container(container) => &container.children,
            _ => &[],
        }
    }

    /// First scrollable container, depth first.
    pub fn scroll_row(&self) -> Option<&Container> {
        let container = self.as_container()?;
        if container.scroll {
            return Some(container);
        }
        container.children.iter().find_map(VisualNode::scroll_row)
    }

    /// All text in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_texts(self, &mut out);
        out
    }

    /// All icons in document order.
    pub fn icons(&self) -> Vec<IconHandle> {
        let mut out = Vec::new();
        collect_icons(self, &mut out);
        out
    }
}

fn collect_texts<'a>(node: &'a VisualNode, out: &mut Vec<&'a str>) {
    match node {
        VisualNode::Text(text) => out.push(&text.text),
        VisualNode::Icon(_) => {}
        VisualNode::Container(container) => {
            for child in &container.children {
                collect_texts(child, out);
            }
        }
    }
}

fn collect_icons(node: &VisualNode, out: &mut Vec<IconHandle>) {
    match node {
        VisualNode::Text(_) => {}
        VisualNode::Icon(icon) => out.push(icon.icon),
        VisualNode::Container(container) => {
            for child in &container.children {
                collect_icons(child, out);
            }
        }
    }
}
