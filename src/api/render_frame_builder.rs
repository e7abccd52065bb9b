use crate::core::SurfaceKind;
use crate::error::AtlasResult;
use crate::render::{
    Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer, StrokeStyle,
    TextHAlign, TextPrimitive,
};

use super::AtlasEngine;
use super::scene::ElementShape;

const LABEL_CLASS: &str = "infolabel";
const LABEL_PADDING: f64 = 8.0;
const LABEL_TITLE_SIZE: f64 = 18.0;
const LABEL_BODY_SIZE: f64 = 12.0;

impl<R: Renderer> AtlasEngine<R> {
    /// Materializes the current scene of `surface`, with transitions sampled
    /// at the current clock.
    pub fn build_render_frame(&self, surface: SurfaceKind) -> AtlasResult<RenderFrame> {
        let mut frame = match surface {
            SurfaceKind::Map => self.build_map_frame(),
            SurfaceKind::Chart => self.build_chart_frame(),
        };
        self.append_info_label(&mut frame);
        frame.validate()?;
        Ok(frame)
    }

    fn build_map_frame(&self) -> RenderFrame {
        let core = &self.core;
        let mut frame = RenderFrame::new(SurfaceKind::Map, core.config.map_viewport());
        for element in core.map_scene.iter() {
            let ElementShape::Region(shape) = &element.shape else {
                continue;
            };
            if shape.is_empty() {
                continue;
            }
            let fill = core
                .displayed(&element.id)
                .map_or(element.fill, |props| props.fill);
            frame.paths.push(
                PathPrimitive::new(shape.screen_rings(), fill, element.stroke)
                    .with_class(element.id.class_name()),
            );
        }
        frame
    }

    fn build_chart_frame(&self) -> RenderFrame {
        let core = &self.core;
        let chart = &core.config.chart;
        let metrics = core.metrics;
        let mut frame = RenderFrame::new(SurfaceKind::Chart, core.config.chart_viewport());

        for element in core.chart_scene.iter() {
            let Some(props) = core.displayed(&element.id) else {
                continue;
            };
            let Some(bar) = props.bar else {
                continue;
            };
            frame.rects.push(
                RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, props.fill)
                    .with_stroke(element.stroke)
                    .with_class(element.id.class_name()),
            );
        }

        frame.rects.push(
            RectPrimitive::new(
                metrics.left_padding,
                metrics.top_bottom_padding,
                metrics.inner_width,
                metrics.inner_height,
                Color::TRANSPARENT,
            )
            .with_stroke(chart.frame_stroke)
            .with_class("chartFrame"),
        );

        frame.texts.push(
            TextPrimitive::new(
                core.state.attribute.label(),
                chart.title_position.x,
                chart.title_position.y,
                chart.title_font_size,
                Color::BLACK,
                TextHAlign::Left,
            )
            .bold(),
        );

        let axis_x = metrics.left_padding;
        let (range_start, range_end) = core.state.vertical_scale.range();
        frame.lines.push(LinePrimitive::new(
            axis_x,
            range_start + metrics.top_bottom_padding,
            axis_x,
            range_end + metrics.top_bottom_padding,
            1.0,
            chart.axis_color,
        ));
        for tick in self.axis_ticks() {
            frame.lines.push(LinePrimitive::new(
                axis_x - chart.tick_size,
                tick.y,
                axis_x,
                tick.y,
                1.0,
                chart.axis_color,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label,
                axis_x - chart.tick_size - chart.tick_padding,
                tick.y - chart.axis_font_size / 2.0,
                chart.axis_font_size,
                chart.axis_color,
                TextHAlign::Right,
            ));
        }
        frame
    }

    fn append_info_label(&self, frame: &mut RenderFrame) {
        let Some(label) = self.core.highlight.label() else {
            return;
        };
        if label.surface != frame.surface {
            return;
        }
        let layout = self.core.config.layout;
        let origin = match frame.surface {
            SurfaceKind::Map => layout.map_origin,
            SurfaceKind::Chart => layout.chart_origin,
        };
        let placement = self.core.highlight.placement();
        let x = label.position.x - origin.x;
        let y = label.position.y - origin.y;

        frame.rects.push(
            RectPrimitive::new(x, y, placement.label_width, placement.label_height, Color::WHITE)
                .with_stroke(StrokeStyle::new(Color::rgb(0.6, 0.6, 0.6), 1.0))
                .with_class(LABEL_CLASS),
        );
        let text_x = x + LABEL_PADDING;
        let lines = [
            (label.title.as_str(), y + 6.0, LABEL_TITLE_SIZE, true),
            (label.subtitle.as_str(), y + 30.0, LABEL_BODY_SIZE, false),
            (label.name.as_str(), y + 48.0, LABEL_BODY_SIZE, false),
        ];
        for (text, text_y, size, bold) in lines {
            if text.is_empty() {
                continue;
            }
            let primitive =
                TextPrimitive::new(text, text_x, text_y, size, Color::BLACK, TextHAlign::Left);
            frame
                .texts
                .push(if bold { primitive.bold() } else { primitive });
        }
    }
}
