use crate::base64;

use super::colors::{format_decimal, Color};

pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

/// Identicon image prepared for serialization
pub struct RenderedImage {
    pub size: u32,
    pub foreground: Color,
    pub background: Color,
    pub rectangles: Vec<Rectangle>,
}

impl RenderedImage {
    pub fn new(size: u32, foreground: Color, background: Color) -> Self {
        Self {
            size,
            foreground,
            background,
            rectangles: vec![],
        }
    }

    pub fn add_rectangle(
        &mut self,
        x: u32,
        y: u32,
        side: u32,
        color: Color,
    ) -> () {
        self.rectangles.push(Rectangle {
            x,
            y,
            width: side,
            height: side,
            color,
        });
    }

    fn stroke_width(&self) -> f64 {
        f64::from(self.size) * 0.005
    }

    pub fn to_svg(&self) -> String {
        let background = self.background.to_string();
        let foreground = self.foreground.to_string();
        let mut svg = format!(
            concat!(
                "<svg xmlns='http://www.w3.org/2000/svg' ",
                "width='{size}' height='{size}' style='background-color:{background};'>",
                "<g style='fill:{foreground}; stroke:{foreground}; stroke-width:{stroke};'>",
            ),
            size=self.size,
            background=background,
            foreground=foreground,
            stroke=format_decimal(self.stroke_width()),
        );
        for rect in self.rectangles.iter() {
            // Background is painted by the canvas
            if rect.color.to_string() == background {
                continue;
            };
            svg += &format!(
                "<rect x='{}' y='{}' width='{}' height='{}'/>",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            );
        };
        svg += "</g></svg>";
        svg
    }

    pub fn to_base64(&self) -> String {
        base64::encode(self.to_svg())
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", SVG_MEDIA_TYPE, self.to_base64())
    }
}
