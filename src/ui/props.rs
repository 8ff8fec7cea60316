use super::*;
use std::borrow::Cow;

#[derive(Debug, Clone, Bundle)]
pub struct Props {
    pub content: TextContent,
    pub palette_set: PaletteSet,
    // layout
    pub border_radius: BorderRadius,
    pub border_color: BorderColor,
    pub bg_color: BackgroundColor,
    pub node: Node,
}

#[allow(dead_code)]
impl Props {
    pub fn new(c: impl Into<TextContent>) -> Self {
        Self {
            content: c.into(),
            palette_set: PaletteSet::default(),
            node: Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                align_content: AlignContent::Center,
                justify_items: JustifyItems::Center,
                justify_content: JustifyContent::Center,
                border: UiRect::all(Px(2.0)),
                padding: UiRect::horizontal(Vw(3.0)),
                ..Default::default()
            },
            bg_color: BackgroundColor(colors::NEUTRAL900),
            border_color: BorderColor::all(colors::NEUTRAL850),
            border_radius: BorderRadius::all(size::BORDER_RADIUS),
        }
    }

    pub fn font_size(mut self, s: f32) -> Self {
        self.content.font.font_size = s;
        self
    }
    pub fn color(mut self, c: Color) -> Self {
        *self.content.color = c;
        self
    }
    pub fn bg_color(mut self, color: Color) -> Self {
        self.bg_color = BackgroundColor(color);
        self
    }
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = BorderColor::all(color);
        self
    }
    pub fn border_radius(mut self, r: Val) -> Self {
        self.border_radius = BorderRadius::all(r);
        self
    }
    pub fn node(mut self, new: Node) -> Self {
        self.node = new;
        self
    }
    pub fn border(mut self, b: UiRect) -> Self {
        self.node.border = b;
        self
    }
    pub fn hidden(mut self) -> Self {
        self.node.display = Display::None;
        self
    }
    pub fn width(mut self, w: Val) -> Self {
        self.node.width = w;
        self
    }
    pub fn height(mut self, h: Val) -> Self {
        self.node.height = h;
        self
    }
    pub fn row_gap(mut self, g: Val) -> Self {
        self.node.row_gap = g;
        self
    }
    pub fn margin(mut self, m: UiRect) -> Self {
        self.node.margin = m;
        self
    }
    pub fn padding(mut self, p: UiRect) -> Self {
        self.node.padding = p;
        self
    }
    pub fn flex_direction(mut self, d: FlexDirection) -> Self {
        self.node.flex_direction = d;
        self
    }
    pub fn palette_set(mut self, p: PaletteSet) -> Self {
        self.palette_set = p;
        self
    }
    pub fn text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.content = text.into().into();
        self
    }
    pub fn into_text_bundle(self) -> impl Bundle {
        self.content
    }
}

impl Default for Props {
    fn default() -> Self {
        Props::new("")
    }
}

#[derive(Debug, Clone, Bundle)]
pub struct TextContent {
    pub text: Text,
    pub color: TextColor,
    pub layout: TextLayout,
    pub font: TextFont,
    pub border: BorderColor,
}

impl From<Cow<'static, str>> for TextContent {
    fn from(text: Cow<'static, str>) -> Self {
        Self {
            text: Text(text.into()),
            ..Default::default()
        }
    }
}
impl From<&'static str> for TextContent {
    fn from(text: &'static str) -> Self {
        Cow::Borrowed(text).into()
    }
}
impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Cow::<'static, str>::Owned(text).into()
    }
}
impl Default for TextContent {
    fn default() -> Self {
        Self {
            text: "".into(),
            color: colors::NEUTRAL300.into(),
            layout: TextLayout::new_with_justify(Justify::Center),
            font: TextFont::from_font_size(size::FONT_SIZE),
            border: BorderColor {
                bottom: colors::NEUTRAL100,
                ..BorderColor::DEFAULT
            },
        }
    }
}

// To be able to provide just "my-label" as an argument for UI widgets
impl<T: Into<TextContent>> From<T> for Props {
    fn from(value: T) -> Self {
        Props::new(value.into())
    }
}
