use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::artifact::ChartArtifact;
use crate::render::style::Color;

/// Suggested download name for exported charts.
pub const EXPORT_FILE_NAME: &str = "ecotype_distribution.png";
pub const EXPORT_MIME_TYPE: &str = "image/png";

/// Print-quality export resolution.
pub const EXPORT_DPI: f64 = 300.0;
const EXPORT_WIDTH_IN: f64 = 7.0;
const EXPORT_HEIGHT_IN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub segments_drawn: usize,
    pub hatches_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo backend that draws a `ChartArtifact` onto an
/// offscreen image surface.
///
/// Layout scales with the surface size: fixed percentage axis with gridlines
/// on the left, one stacked bar per group clipped to the plot area, and the
/// legend column on the right. Labels are drawn exactly as carried by the
/// artifact.
#[derive(Debug)]
pub struct CairoChartRenderer {
    surface: ImageSurface,
    width: f64,
    height: f64,
    last_stats: CairoRenderStats,
}

impl CairoChartRenderer {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        let width_px = i32::try_from(width)
            .map_err(|_| ChartError::InvalidData("surface width overflows i32".to_owned()))?;
        let height_px = i32::try_from(height)
            .map_err(|_| ChartError::InvalidData("surface height overflows i32".to_owned()))?;

        let surface = ImageSurface::create(Format::ARgb32, width_px, height_px)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            width: f64::from(width_px),
            height: f64::from(height_px),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn draw(&mut self, artifact: &ChartArtifact) -> ChartResult<()> {
        for stack in &artifact.stacks {
            for segment in &stack.segments {
                segment.style.color.validate()?;
            }
        }
        for entry in &artifact.legend {
            entry.style.color.validate()?;
        }

        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let mut stats = CairoRenderStats::default();

        apply_color(&context, Color::rgb(1.0, 1.0, 1.0));
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let layout = PlotLayout::for_size(self.width, self.height);
        self.draw_axis(&context, artifact, &layout, &mut stats)?;
        self.draw_stacks(&context, artifact, &layout, &mut stats)?;
        self.draw_group_labels(&context, artifact, &layout, &mut stats);
        self.draw_legend(&context, artifact, &layout, &mut stats)?;

        self.last_stats = stats;
        Ok(())
    }

    fn draw_axis(
        &self,
        context: &Context,
        artifact: &ChartArtifact,
        layout: &PlotLayout,
        stats: &mut CairoRenderStats,
    ) -> ChartResult<()> {
        let grid_color = Color::rgb(0.85, 0.85, 0.85);
        let axis_color = Color::rgb(0.0, 0.0, 0.0);
        let span = artifact.axis.max - artifact.axis.min;
        let tick_count = 5;

        for step in 0..=tick_count {
            let value = artifact.axis.min + span * f64::from(step) / f64::from(tick_count);
            let y = layout.value_to_y(value, artifact.axis.min, artifact.axis.max);

            apply_color(context, grid_color);
            context.set_line_width(layout.hairline);
            context.move_to(layout.plot_left, y);
            context.line_to(layout.plot_right(), y);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke gridline", err))?;
            stats.lines_drawn += 1;

            draw_text(
                context,
                &format!("{value:.0}"),
                layout.plot_left - layout.tick_gap,
                y - layout.tick_font_px * 0.7,
                layout.tick_font_px,
                axis_color,
                TextAnchor::Right,
            );
            stats.texts_drawn += 1;
        }

        apply_color(context, axis_color);
        context.set_line_width(layout.hairline * 1.5);
        context.move_to(layout.plot_left, layout.plot_top);
        context.line_to(layout.plot_left, layout.plot_bottom());
        context.line_to(layout.plot_right(), layout.plot_bottom());
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke axis", err))?;
        stats.lines_drawn += 2;

        Ok(())
    }

    fn draw_stacks(
        &self,
        context: &Context,
        artifact: &ChartArtifact,
        layout: &PlotLayout,
        stats: &mut CairoRenderStats,
    ) -> ChartResult<()> {
        if artifact.stacks.is_empty() {
            return Ok(());
        }

        // Overshooting stacks clip at the plot edge; the axis never rescales.
        context.save().map_err(|err| map_backend_error("failed to save context", err))?;
        context.rectangle(
            layout.plot_left,
            layout.plot_top,
            layout.plot_width,
            layout.plot_height,
        );
        context.clip();

        let slot = layout.plot_width / artifact.stacks.len() as f64;
        let bar_width = slot * 0.6;

        for (position, stack) in artifact.stacks.iter().enumerate() {
            let x = layout.plot_left + slot * position as f64 + (slot - bar_width) * 0.5;
            for segment in &stack.segments {
                if segment.value <= 0.0 {
                    continue;
                }
                let y_bottom =
                    layout.value_to_y(segment.baseline, artifact.axis.min, artifact.axis.max);
                let y_top =
                    layout.value_to_y(segment.top(), artifact.axis.min, artifact.axis.max);

                context.rectangle(x, y_top, bar_width, y_bottom - y_top);
                apply_color(context, segment.style.color);
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill segment", err))?;
                apply_color(context, Color::rgb(0.0, 0.0, 0.0));
                context.set_line_width(layout.hairline);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke segment edge", err))?;
                stats.segments_drawn += 1;

                if segment.style.hatched {
                    hatch_rect(context, x, y_top, bar_width, y_bottom - y_top, layout)?;
                    stats.hatches_drawn += 1;
                }
            }
        }

        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        Ok(())
    }

    fn draw_group_labels(
        &self,
        context: &Context,
        artifact: &ChartArtifact,
        layout: &PlotLayout,
        stats: &mut CairoRenderStats,
    ) {
        if artifact.stacks.is_empty() {
            return;
        }
        let slot = layout.plot_width / artifact.stacks.len() as f64;
        for (position, stack) in artifact.stacks.iter().enumerate() {
            let x = layout.plot_left + slot * (position as f64 + 0.5);
            draw_text(
                context,
                stack.group.display_label(),
                x,
                layout.plot_bottom() + layout.tick_gap,
                layout.label_font_px,
                Color::rgb(0.0, 0.0, 0.0),
                TextAnchor::Center,
            );
            stats.texts_drawn += 1;
        }
    }

    fn draw_legend(
        &self,
        context: &Context,
        artifact: &ChartArtifact,
        layout: &PlotLayout,
        stats: &mut CairoRenderStats,
    ) -> ChartResult<()> {
        let swatch = layout.label_font_px * 1.1;
        let row_height = swatch * 1.8;
        let x = layout.plot_right() + layout.legend_gap;
        let mut y = layout.plot_top;

        for entry in &artifact.legend {
            context.rectangle(x, y, swatch, swatch);
            apply_color(context, entry.style.color);
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill legend swatch", err))?;
            apply_color(context, Color::rgb(0.0, 0.0, 0.0));
            context.set_line_width(layout.hairline);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke legend swatch", err))?;
            if entry.style.hatched {
                hatch_rect(context, x, y, swatch, swatch, layout)?;
            }

            draw_text(
                context,
                &entry.label,
                x + swatch + layout.tick_gap,
                y,
                layout.label_font_px,
                Color::rgb(0.0, 0.0, 0.0),
                TextAnchor::Left,
            );
            stats.texts_drawn += 1;
            y += row_height;
        }

        Ok(())
    }
}

/// Pure function of the artifact: encodes a 7x6 inch chart at 300 DPI
/// (2100x1800 px) to PNG bytes for a download action.
pub fn export_png(artifact: &ChartArtifact) -> ChartResult<Vec<u8>> {
    let width = (EXPORT_WIDTH_IN * EXPORT_DPI).round() as u32;
    let height = (EXPORT_HEIGHT_IN * EXPORT_DPI).round() as u32;

    let mut renderer = CairoChartRenderer::new(width, height)?;
    renderer.draw(artifact)?;

    let mut bytes = Vec::new();
    renderer
        .surface()
        .write_to_png(&mut bytes)
        .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))?;
    debug!(bytes = bytes.len(), width, height, "chart exported to png");
    Ok(bytes)
}

/// Size-relative geometry for one draw pass.
struct PlotLayout {
    plot_left: f64,
    plot_top: f64,
    plot_width: f64,
    plot_height: f64,
    hairline: f64,
    tick_gap: f64,
    legend_gap: f64,
    tick_font_px: f64,
    label_font_px: f64,
}

impl PlotLayout {
    fn for_size(width: f64, height: f64) -> Self {
        Self {
            plot_left: width * 0.10,
            plot_top: height * 0.06,
            plot_width: width * 0.54,
            plot_height: height * 0.82,
            hairline: (height / 600.0).max(1.0),
            tick_gap: width * 0.01,
            legend_gap: width * 0.04,
            tick_font_px: height / 55.0,
            label_font_px: height / 48.0,
        }
    }

    fn plot_right(&self) -> f64 {
        self.plot_left + self.plot_width
    }

    fn plot_bottom(&self) -> f64 {
        self.plot_top + self.plot_height
    }

    fn value_to_y(&self, value: f64, axis_min: f64, axis_max: f64) -> f64 {
        let normalized = (value - axis_min) / (axis_max - axis_min);
        self.plot_bottom() - normalized * self.plot_height
    }
}

enum TextAnchor {
    Left,
    Center,
    Right,
}

fn draw_text(
    context: &Context,
    text: &str,
    x: f64,
    y: f64,
    font_size_px: f64,
    color: Color,
    anchor: TextAnchor,
) {
    if text.is_empty() {
        return;
    }
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", font_size_px.round()));
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match anchor {
        TextAnchor::Left => x,
        TextAnchor::Center => x - f64::from(text_width) / 2.0,
        TextAnchor::Right => x - f64::from(text_width),
    };

    apply_color(context, color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

/// Diagonal line hatching clipped to one rectangle.
fn hatch_rect(
    context: &Context,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    layout: &PlotLayout,
) -> ChartResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.rectangle(x, y, width, height);
    context.clip();

    apply_color(context, Color::rgb(0.0, 0.0, 0.0));
    context.set_line_width(layout.hairline);
    let spacing = (layout.label_font_px * 0.8).max(3.0);
    let mut offset = -height;
    while offset < width {
        context.move_to(x + offset, y + height);
        context.line_to(x + offset + height, y);
        offset += spacing;
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke hatch", err))?;

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))?;
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
