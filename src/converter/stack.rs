/// An element whose closing tag has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub level: usize,
    /// Tag name as written in the shorthand, before expansion
    pub tag: String,
}

/// Open elements of one conversion run; levels strictly increase from
/// bottom to top
#[derive(Debug, Default)]
pub struct ElementStack {
    frames: Vec<Frame>,
}

impl ElementStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop every frame opened at `level` or deeper, innermost first
    pub fn close_down_to(&mut self, level: usize) -> Vec<Frame> {
        let keep = self
            .frames
            .iter()
            .rposition(|frame| frame.level < level)
            .map_or(0, |idx| idx + 1);
        self.frames.drain(keep..).rev().collect()
    }

    /// Open a new element; `close_down_to(level)` must have run first
    pub fn push(&mut self, level: usize, tag: impl Into<String>) {
        debug_assert!(self.frames.last().map_or(true, |top| top.level < level));
        self.frames.push(Frame {
            level,
            tag: tag.into(),
        });
    }

    /// Pop every remaining frame, innermost first
    pub fn close_all(&mut self) -> Vec<Frame> {
        self.frames.drain(..).rev().collect()
    }
}
