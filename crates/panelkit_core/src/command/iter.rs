//! Walking the command log.

use bytemuck::{pod_read_unaligned, Pod};

use super::records::{
    CircleCommand, CommandHeader, CommandKind, ImageCommand, LineCommand, RectCommand,
    ScissorCommand, TextCommand, TriangleCommand,
};

/// A decoded record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    /// Placeholder or unknown record; renderers skip it.
    Nop,
    /// Clip rectangle for the following records.
    Scissor(ScissorCommand),
    /// Line segment.
    Line(LineCommand),
    /// Rectangle.
    Rect(RectCommand),
    /// Ellipse.
    Circle(CircleCommand),
    /// Triangle.
    Triangle(TriangleCommand),
    /// Text run with its string.
    Text {
        /// Fixed record.
        record: TextCommand,
        /// The string that follows the record.
        text: &'a str,
    },
    /// Image blit.
    Image(ImageCommand),
}

/// Iterator over the records of a command buffer.
///
/// Starts at offset zero and follows each header's `offset` until the next
/// header would not fit in the written bytes.
#[derive(Debug, Clone)]
pub struct Commands<'a> {
    bytes: &'a [u8],
    at: usize,
}

impl<'a> Commands<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, at: 0 }
    }

    fn read<T: Pod>(&self) -> Option<T> {
        let end = self.at + std::mem::size_of::<T>();
        let bytes = self.bytes.get(self.at..end)?;
        Some(pod_read_unaligned(bytes))
    }

    fn decode(&self, header: &CommandHeader) -> Option<Command<'a>> {
        let command = match header.kind() {
            None | Some(CommandKind::Nop) => Command::Nop,
            Some(CommandKind::Scissor) => Command::Scissor(self.read()?),
            Some(CommandKind::Line) => Command::Line(self.read()?),
            Some(CommandKind::Rect) => Command::Rect(self.read()?),
            Some(CommandKind::Circle) => Command::Circle(self.read()?),
            Some(CommandKind::Triangle) => Command::Triangle(self.read()?),
            Some(CommandKind::Image) => Command::Image(self.read()?),
            Some(CommandKind::Text) => {
                let record: TextCommand = self.read()?;
                let start = self.at + std::mem::size_of::<TextCommand>();
                let raw = self.bytes.get(start..start + record.length as usize)?;
                let text = std::str::from_utf8(raw).unwrap_or_default();
                Command::Text { record, text }
            }
        };
        Some(command)
    }
}

impl<'a> Iterator for Commands<'a> {
    type Item = Command<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let header: CommandHeader = self.read()?;
        let command = self.decode(&header)?;
        if header.offset == 0 {
            // a zero link would never advance
            self.at = self.bytes.len();
        } else {
            self.at += header.offset as usize;
        }
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandBuffer;

    #[test]
    fn test_empty_buffer_yields_nothing() {
        let buffer = CommandBuffer::fixed(32);
        assert_eq!(buffer.iter().next(), None);
    }

    #[test]
    fn test_raw_push_is_nop_for_unknown_payload() {
        let mut buffer = CommandBuffer::fixed(64);
        let at = buffer.push(CommandKind::Nop, 12).unwrap();
        buffer.record_mut(at + 8, 4).copy_from_slice(&[1, 2, 3, 4]);

        let commands: Vec<_> = buffer.iter().collect();
        assert_eq!(commands, vec![Command::Nop]);
    }
}
