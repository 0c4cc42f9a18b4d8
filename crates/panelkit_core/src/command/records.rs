//! Binary layout of the draw records.
//!
//! Every record starts with a [`CommandHeader`]. All fields are plain data so
//! records can be copied in and out of the byte arena with `bytemuck`.
//!
//! | Record    | Size |
//! |-----------|------|
//! | scissor   | 16   |
//! | line      | 20   |
//! | rect      | 32   |
//! | circle    | 20   |
//! | triangle  | 24   |
//! | text      | 32 + string bytes |
//! | image     | 24   |

use bytemuck::{Pod, Zeroable};

use crate::math::Color;

/// Record type tag.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Placeholder that renderers skip.
    Nop = 0,
    /// Sets the clip rectangle for subsequent records.
    Scissor = 1,
    /// Straight line.
    Line = 2,
    /// Filled (optionally framed) rectangle.
    Rect = 3,
    /// Filled ellipse inscribed in a rectangle.
    Circle = 4,
    /// Filled triangle.
    Triangle = 5,
    /// Text run.
    Text = 6,
    /// Image blit.
    Image = 7,
}

impl TryFrom<u32> for CommandKind {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, u32> {
        Ok(match value {
            0 => Self::Nop,
            1 => Self::Scissor,
            2 => Self::Line,
            3 => Self::Rect,
            4 => Self::Circle,
            5 => Self::Triangle,
            6 => Self::Text,
            7 => Self::Image,
            other => return Err(other),
        })
    }
}

/// Common prefix of every record.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct CommandHeader {
    /// Raw [`CommandKind`].
    pub kind: u32,
    /// Byte distance from this header to the next one.
    pub offset: u32,
}

impl CommandHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Decodes the record type, if known.
    #[must_use]
    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::try_from(self.kind).ok()
    }
}

/// Clip rectangle for everything that follows.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct ScissorCommand {
    /// Header.
    pub header: CommandHeader,
    /// Left edge.
    pub x: i16,
    /// Top edge.
    pub y: i16,
    /// Width.
    pub w: u16,
    /// Height.
    pub h: u16,
}

/// Line segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct LineCommand {
    /// Header.
    pub header: CommandHeader,
    /// Start point.
    pub begin: [i16; 2],
    /// End point.
    pub end: [i16; 2],
    /// Stroke color.
    pub color: Color,
}

/// Rectangle with an optional frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RectCommand {
    /// Header.
    pub header: CommandHeader,
    /// Left edge.
    pub x: i16,
    /// Top edge.
    pub y: i16,
    /// Width.
    pub w: u16,
    /// Height.
    pub h: u16,
    /// Fill color.
    pub color: Color,
    /// Frame color, drawn when `border_width > 0`.
    pub border_color: Color,
    /// Corner rounding radius.
    pub rounding: f32,
    /// Frame thickness.
    pub border_width: f32,
}

/// Ellipse inscribed in a rectangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct CircleCommand {
    /// Header.
    pub header: CommandHeader,
    /// Left edge of the bounding box.
    pub x: i16,
    /// Top edge of the bounding box.
    pub y: i16,
    /// Bounding box width.
    pub w: u16,
    /// Bounding box height.
    pub h: u16,
    /// Fill color.
    pub color: Color,
}

/// Filled triangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct TriangleCommand {
    /// Header.
    pub header: CommandHeader,
    /// First corner.
    pub a: [i16; 2],
    /// Second corner.
    pub b: [i16; 2],
    /// Third corner.
    pub c: [i16; 2],
    /// Fill color.
    pub color: Color,
}

/// Image blit. The handle is opaque to the buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct ImageCommand {
    /// Header.
    pub header: CommandHeader,
    /// Left edge.
    pub x: i16,
    /// Top edge.
    pub y: i16,
    /// Width.
    pub w: u16,
    /// Height.
    pub h: u16,
    /// Renderer-defined image handle.
    pub image: u64,
}

/// Fixed part of a text record; `length` string bytes follow it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct TextCommand {
    /// Header.
    pub header: CommandHeader,
    /// Renderer-defined font handle.
    pub font: u32,
    /// Left edge.
    pub x: i16,
    /// Top edge.
    pub y: i16,
    /// Width.
    pub w: u16,
    /// Height.
    pub h: u16,
    /// Background color.
    pub background: Color,
    /// Glyph color.
    pub foreground: Color,
    /// Number of string bytes after the record.
    pub length: u32,
}
