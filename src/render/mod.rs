mod artifact;
mod renderer;
mod shaping;
mod style;

pub use artifact::{AxisBounds, ChartArtifact, GroupStack, LegendEntry, StackedSegment};
pub use renderer::StackedProportionRenderer;
pub use shaping::{BidiShaper, LabelShaper, PassthroughShaper};
pub use style::{Color, SegmentStyle, Shade, segment_style};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoChartRenderer, CairoRenderStats, EXPORT_DPI, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
    export_png,
};
