use crate::{
    foundation::{
        core::{BezPath, Canvas, Rgba8},
        error::{ShadowLayoutError, ShadowLayoutResult},
    },
    render::canvas::{PaintMode, ShadowCanvas, StrokeStyle},
    silhouette::snapshot::ContentSnapshot,
};

/// One recorded [`ShadowCanvas::stroke_path`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeCall {
    pub path: BezPath,
    pub style: StrokeStyle,
    pub color: Rgba8,
    pub mode: PaintMode,
}

/// A canvas that rasterizes nothing and remembers every stroke.
///
/// Content is a plain RGBA8 buffer supplied by the caller; the shadow layer is never
/// composited into snapshots.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    size: Canvas,
    content: Vec<u8>,
    calls: Vec<StrokeCall>,
}

impl RecordingCanvas {
    pub fn new(size: Canvas) -> Self {
        Self {
            size,
            content: vec![0; size.pixel_count() * 4],
            calls: Vec::new(),
        }
    }

    pub fn with_content(rgba8: Vec<u8>, size: Canvas) -> ShadowLayoutResult<Self> {
        let mut canvas = Self::new(size);
        canvas.set_content(rgba8)?;
        Ok(canvas)
    }

    pub fn set_content(&mut self, rgba8: Vec<u8>) -> ShadowLayoutResult<()> {
        if rgba8.len() != self.size.pixel_count() * 4 {
            return Err(ShadowLayoutError::validation(
                "recording canvas content must match width*height*4",
            ));
        }
        self.content = rgba8;
        Ok(())
    }

    pub fn calls(&self) -> &[StrokeCall] {
        &self.calls
    }

    pub fn calls_with_mode(&self, mode: PaintMode) -> impl Iterator<Item = &StrokeCall> {
        self.calls.iter().filter(move |c| c.mode == mode)
    }

    pub fn take_calls(&mut self) -> Vec<StrokeCall> {
        std::mem::take(&mut self.calls)
    }
}

impl ShadowCanvas for RecordingCanvas {
    fn size(&self) -> Canvas {
        self.size
    }

    fn snapshot_content(&mut self) -> ShadowLayoutResult<ContentSnapshot<'_>> {
        ContentSnapshot::new(&self.content, self.size.width, self.size.height)
    }

    fn stroke_path(
        &mut self,
        path: &BezPath,
        style: &StrokeStyle,
        color: Rgba8,
        mode: PaintMode,
    ) -> ShadowLayoutResult<()> {
        self.calls.push(StrokeCall {
            path: path.clone(),
            style: *style,
            color,
            mode,
        });
        Ok(())
    }
}
