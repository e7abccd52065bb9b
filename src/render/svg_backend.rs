use std::fmt::Write as _;

use crate::core::SurfaceKind;
use crate::error::{AtlasError, AtlasResult};
use crate::render::{
    Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer, StrokeStyle,
    TextHAlign, TextPrimitive,
};

/// Renderer that serializes each frame into a standalone SVG document.
///
/// The last document per surface is kept so hosts can write or embed it.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    map_document: Option<String>,
    chart_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn document(&self, surface: SurfaceKind) -> Option<&str> {
        match surface {
            SurfaceKind::Map => self.map_document.as_deref(),
            SurfaceKind::Chart => self.chart_document.as_deref(),
        }
    }

    pub fn take_document(&mut self, surface: SurfaceKind) -> Option<String> {
        match surface {
            SurfaceKind::Map => self.map_document.take(),
            SurfaceKind::Chart => self.chart_document.take(),
        }
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> AtlasResult<()> {
        let document = render_svg_document(frame)?;
        match frame.surface {
            SurfaceKind::Map => self.map_document = Some(document),
            SurfaceKind::Chart => self.chart_document = Some(document),
        }
        Ok(())
    }
}

/// Serializes one validated frame into SVG markup.
pub fn render_svg_document(frame: &RenderFrame) -> AtlasResult<String> {
    frame.validate()?;
    let mut out = String::new();
    write_document(&mut out, frame)
        .map_err(|e| AtlasError::InvalidData(format!("failed to write svg document: {e}")))?;
    Ok(out)
}

fn write_document(out: &mut String, frame: &RenderFrame) -> std::fmt::Result {
    let root_class = match frame.surface {
        SurfaceKind::Map => "map",
        SurfaceKind::Chart => "chart",
    };
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{root_class}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.viewport.width,
        h = frame.viewport.height,
    )?;
    for path in &frame.paths {
        write_path(out, path)?;
    }
    for rect in &frame.rects {
        write_rect(out, rect)?;
    }
    for line in &frame.lines {
        write_line(out, line)?;
    }
    for text in &frame.texts {
        write_text(out, text)?;
    }
    out.push_str("</svg>\n");
    Ok(())
}

fn write_path(out: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    let mut data = String::new();
    for ring in &path.rings {
        for (index, point) in ring.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            write!(data, "{command}{},{}", px(point.x), px(point.y))?;
        }
        data.push('Z');
    }
    write!(out, "  <path")?;
    write_class(out, path.class_name.as_deref())?;
    write!(out, r#" d="{data}" fill-rule="evenodd""#)?;
    write_paint(out, path.fill_color, path.stroke)?;
    out.push_str("/>\n");
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(out, "  <rect")?;
    write_class(out, rect.class_name.as_deref())?;
    write!(
        out,
        r#" x="{}" y="{}" width="{}" height="{}""#,
        px(rect.x),
        px(rect.y),
        px(rect.width),
        px(rect.height)
    )?;
    write_paint(out, rect.fill_color, rect.stroke)?;
    out.push_str("/>\n");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        px(line.x1),
        px(line.y1),
        px(line.x2),
        px(line.y2),
        String::from(line.color),
        px(line.stroke_width)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let weight = if text.bold { r#" font-weight="bold""# } else { "" };
    writeln!(
        out,
        r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}" dominant-baseline="hanging"{weight}>{}</text>"#,
        px(text.x),
        px(text.y),
        px(text.font_size_px),
        String::from(text.color),
        escape_xml(&text.text)
    )
}

fn write_class(out: &mut String, class_name: Option<&str>) -> std::fmt::Result {
    match class_name {
        Some(class_name) => write!(out, r#" class="{}""#, escape_xml(class_name)),
        None => Ok(()),
    }
}

fn write_paint(out: &mut String, fill: Color, stroke: StrokeStyle) -> std::fmt::Result {
    write!(out, r#" fill="{}""#, String::from(fill))?;
    if stroke.is_visible() {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            String::from(stroke.color),
            px(stroke.width)
        )
    } else {
        write!(out, r#" stroke="none""#)
    }
}

/// Pixel values with at most three decimals.
fn px(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded}")
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
