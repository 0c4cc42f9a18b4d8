//! Append-only draw command log.

use bytemuck::{bytes_of, Pod, Zeroable};

use super::records::{
    CircleCommand, CommandHeader, CommandKind, ImageCommand, LineCommand, RectCommand,
    ScissorCommand, TextCommand, TriangleCommand,
};
use super::Commands;
use crate::error::BufferResult;
use crate::math::{Color, Rect, Vec2};
use crate::memory::{align_up, MemoryBuffer};

/// Alignment of every record in the buffer.
pub const COMMAND_ALIGN: usize = 8;

/// Opaque font identifier stored in text records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u32);

/// Opaque image identifier stored in image records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// Converts a float coordinate to screen space.
#[inline]
fn coord(v: f32) -> i16 {
    v as i16
}

/// Converts a float extent to screen space.
#[inline]
fn extent(v: f32) -> u16 {
    v.max(0.0) as u16
}

fn point(p: Vec2) -> [i16; 2] {
    [coord(p.x), coord(p.y)]
}

/// Records draw primitives into an offset-linked byte log.
///
/// The buffer tracks the active scissor so primitives fully outside of it are
/// culled before they are recorded. It is append-only within a frame; call
/// [`reset`](Self::reset) or [`clear`](Self::clear) between frames.
#[derive(Debug)]
pub struct CommandBuffer {
    memory: MemoryBuffer,
    clip: Rect,
}

impl CommandBuffer {
    /// Wraps an existing memory buffer.
    #[must_use]
    pub fn new(memory: MemoryBuffer) -> Self {
        Self { memory, clip: Rect::UNBOUNDED }
    }

    /// Creates a buffer over a zeroed fixed block of `size` bytes.
    #[must_use]
    pub fn fixed(size: usize) -> Self {
        Self::new(MemoryBuffer::fixed(vec![0u8; size].into_boxed_slice()))
    }

    /// Creates a growable heap buffer.
    ///
    /// # Errors
    ///
    /// See [`MemoryBuffer::new`].
    pub fn dynamic(initial_size: usize, grow_factor: f32) -> BufferResult<Self> {
        Ok(Self::new(MemoryBuffer::with_capacity(initial_size, grow_factor)?))
    }

    /// Returns the underlying memory buffer.
    #[inline]
    #[must_use]
    pub fn memory(&self) -> &MemoryBuffer {
        &self.memory
    }

    /// Returns the active scissor rectangle.
    #[inline]
    #[must_use]
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Returns the number of written bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.memory.allocated()
    }

    /// Returns true if nothing was recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memory.allocated() == 0
    }

    /// Iterates the recorded commands in order.
    #[must_use]
    pub fn iter(&self) -> Commands<'_> {
        Commands::new(self.memory.as_bytes())
    }

    /// Discards all commands, keeping statistics.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.clip = Rect::UNBOUNDED;
    }

    /// Discards all commands and statistics.
    pub fn clear(&mut self) {
        self.memory.clear();
        self.clip = Rect::UNBOUNDED;
    }

    /// Reserves a record of `size` bytes tagged `kind` and returns its offset.
    ///
    /// The header is written; the remaining `size - 8` bytes are left for the
    /// caller to fill through [`record_mut`](Self::record_mut).
    ///
    /// # Errors
    ///
    /// Propagates allocation failures; nothing is written on failure.
    pub fn push(&mut self, kind: CommandKind, size: usize) -> BufferResult<usize> {
        let size = size.max(CommandHeader::SIZE);
        let at = self.memory.alloc(size, COMMAND_ALIGN)?;
        let header = CommandHeader {
            kind: kind as u32,
            offset: align_up(size, COMMAND_ALIGN) as u32,
        };
        self.memory
            .bytes_mut(at, CommandHeader::SIZE)
            .copy_from_slice(bytes_of(&header));
        Ok(at)
    }

    /// Returns the writable bytes of a record reserved with [`push`](Self::push).
    ///
    /// # Panics
    ///
    /// Panics if the window lies outside the written region.
    pub fn record_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        self.memory.bytes_mut(offset, len)
    }

    fn emit<T: Pod>(&mut self, kind: CommandKind, record: T, trailing: &[u8]) -> Option<usize> {
        let head = std::mem::size_of::<T>();
        let at = self.push(kind, head + trailing.len()).ok()?;
        let bytes = self.memory.bytes_mut(at, head + trailing.len());
        // the record header is rebuilt by `push`, keep it
        bytes[CommandHeader::SIZE..head].copy_from_slice(&bytes_of(&record)[CommandHeader::SIZE..]);
        bytes[head..].copy_from_slice(trailing);
        Some(at)
    }

    fn visible(&self, rect: &Rect) -> bool {
        rect.intersects(&self.clip)
    }

    /// Sets the clip rectangle for all following commands. The active clip
    /// is left unchanged if the record does not fit.
    pub fn push_scissor(&mut self, rect: Rect) -> Option<usize> {
        let at = self.emit(
            CommandKind::Scissor,
            ScissorCommand {
                header: CommandHeader::zeroed(),
                x: coord(rect.x),
                y: coord(rect.y),
                w: extent(rect.w),
                h: extent(rect.h),
            },
            &[],
        )?;
        self.clip = rect;
        Some(at)
    }

    /// Lifts any clipping.
    pub fn reset_scissor(&mut self) -> Option<usize> {
        self.push_scissor(Rect::UNBOUNDED)
    }

    /// Records a line segment.
    pub fn push_line(&mut self, begin: Vec2, end: Vec2, color: Color) -> Option<usize> {
        let bounds = Rect::new(
            begin.x.min(end.x),
            begin.y.min(end.y),
            (begin.x - end.x).abs().max(1.0),
            (begin.y - end.y).abs().max(1.0),
        );
        if !self.visible(&bounds) {
            return None;
        }
        self.emit(
            CommandKind::Line,
            LineCommand {
                header: CommandHeader::zeroed(),
                begin: point(begin),
                end: point(end),
                color,
            },
            &[],
        )
    }

    /// Records a filled rectangle.
    pub fn push_rect(&mut self, rect: Rect, color: Color) -> Option<usize> {
        self.push_rect_framed(rect, color, Color::TRANSPARENT, 0.0, 0.0)
    }

    /// Records a rectangle with a frame of `border_width` pixels.
    pub fn push_rect_framed(
        &mut self,
        rect: Rect,
        color: Color,
        border_color: Color,
        border_width: f32,
        rounding: f32,
    ) -> Option<usize> {
        if !self.visible(&rect) {
            return None;
        }
        self.emit(
            CommandKind::Rect,
            RectCommand {
                header: CommandHeader::zeroed(),
                x: coord(rect.x),
                y: coord(rect.y),
                w: extent(rect.w),
                h: extent(rect.h),
                color,
                border_color,
                rounding,
                border_width,
            },
            &[],
        )
    }

    /// Records an ellipse inscribed in `rect`.
    pub fn push_circle(&mut self, rect: Rect, color: Color) -> Option<usize> {
        if !self.visible(&rect) {
            return None;
        }
        self.emit(
            CommandKind::Circle,
            CircleCommand {
                header: CommandHeader::zeroed(),
                x: coord(rect.x),
                y: coord(rect.y),
                w: extent(rect.w),
                h: extent(rect.h),
                color,
            },
            &[],
        )
    }

    /// Records a filled triangle.
    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) -> Option<usize> {
        let x = a.x.min(b.x).min(c.x);
        let y = a.y.min(b.y).min(c.y);
        let bounds = Rect::new(
            x,
            y,
            a.x.max(b.x).max(c.x) - x,
            a.y.max(b.y).max(c.y) - y,
        );
        if !self.visible(&bounds) {
            return None;
        }
        self.emit(
            CommandKind::Triangle,
            TriangleCommand {
                header: CommandHeader::zeroed(),
                a: point(a),
                b: point(b),
                c: point(c),
                color,
            },
            &[],
        )
    }

    /// Records an image blit.
    pub fn push_image(&mut self, rect: Rect, image: ImageHandle) -> Option<usize> {
        if !self.visible(&rect) {
            return None;
        }
        self.emit(
            CommandKind::Image,
            ImageCommand {
                header: CommandHeader::zeroed(),
                x: coord(rect.x),
                y: coord(rect.y),
                w: extent(rect.w),
                h: extent(rect.h),
                image: image.0,
            },
            &[],
        )
    }

    /// Records a text run. The string bytes are copied after the record.
    pub fn push_text(
        &mut self,
        rect: Rect,
        text: &str,
        font: FontHandle,
        background: Color,
        foreground: Color,
    ) -> Option<usize> {
        if text.is_empty() || !self.visible(&rect) {
            return None;
        }
        self.emit(
            CommandKind::Text,
            TextCommand {
                header: CommandHeader::zeroed(),
                font: font.0,
                x: coord(rect.x),
                y: coord(rect.y),
                w: extent(rect.w),
                h: extent(rect.h),
                background,
                foreground,
                length: text.len() as u32,
            },
            text.as_bytes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_fixed_64_byte_scenario() {
        let mut buffer = CommandBuffer::fixed(64);

        assert!(buffer.push_scissor(Rect::new(0.0, 0.0, 100.0, 100.0)).is_some());
        assert!(buffer.push_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE).is_some());
        assert_eq!(buffer.len(), 48);

        assert!(buffer.push_rect(Rect::new(5.0, 5.0, 10.0, 10.0), Color::BLACK).is_none());
        assert_eq!(buffer.len(), 48);

        let commands: Vec<_> = buffer.iter().collect();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], Command::Scissor(_)));
        assert!(matches!(commands[1], Command::Rect(r) if r.color == Color::WHITE));
    }

    #[test]
    fn test_dropped_scissor_keeps_clip() {
        let mut buffer = CommandBuffer::fixed(48);
        let clip = Rect::new(0.0, 0.0, 100.0, 100.0);
        buffer.push_scissor(clip);
        buffer.push_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);

        assert!(buffer.push_scissor(Rect::new(200.0, 200.0, 5.0, 5.0)).is_none());
        assert_eq!(buffer.clip(), clip);
        assert_eq!(buffer.iter().count(), 2);
    }

    #[test]
    fn test_text_payload_follows_record() {
        let mut buffer = CommandBuffer::fixed(256);
        buffer.push_text(
            Rect::new(0.0, 0.0, 50.0, 10.0),
            "hello",
            FontHandle(3),
            Color::BLACK,
            Color::WHITE,
        );
        buffer.push_line(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0), Color::WHITE);

        let commands: Vec<_> = buffer.iter().collect();
        assert_eq!(commands.len(), 2);
        match commands[0] {
            Command::Text { record, text } => {
                assert_eq!(text, "hello");
                assert_eq!(record.length, 5);
                assert_eq!(record.font, 3);
                // 32 + 5 rounded up to the record alignment
                assert_eq!(record.header.offset, 40);
            }
            _ => panic!("expected text"),
        }
        assert!(matches!(commands[1], Command::Line(_)));
    }

    #[test]
    fn test_scissor_culls_outside_primitives() {
        let mut buffer = CommandBuffer::fixed(256);
        buffer.push_scissor(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert!(buffer.push_rect(Rect::new(20.0, 20.0, 5.0, 5.0), Color::WHITE).is_none());
        assert!(buffer.push_circle(Rect::new(2.0, 2.0, 5.0, 5.0), Color::WHITE).is_some());
        assert_eq!(buffer.iter().count(), 2);
    }

    #[test]
    fn test_offsets_survive_growth() {
        let mut buffer = CommandBuffer::dynamic(16, 2.0).unwrap();
        for i in 0..32 {
            let x = i as f32;
            buffer.push_rect(Rect::new(x, 0.0, 1.0, 1.0), Color::rgb(i as u8, 0, 0));
        }

        let reds: Vec<u8> = buffer
            .iter()
            .filter_map(|command| match command {
                Command::Rect(rect) => Some(rect.color.r),
                _ => None,
            })
            .collect();
        assert_eq!(reds, (0..32).collect::<Vec<u8>>());
    }

    #[test]
    fn test_reset_restores_unbounded_clip() {
        let mut buffer = CommandBuffer::fixed(64);
        buffer.push_scissor(Rect::new(0.0, 0.0, 1.0, 1.0));
        buffer.reset();

        assert!(buffer.is_empty());
        assert_eq!(buffer.clip(), Rect::UNBOUNDED);
    }
}
