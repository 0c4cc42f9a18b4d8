//! # Command Buffer Consumer Tests
//!
//! A renderer walks the buffer from the start, following record offsets and
//! tracking the active scissor.
//!
//! Run with: cargo test --package panelkit_core --test command_buffer_test

use panelkit_core::{
    Allocator, BufferError, BufferKind, Color, Command, CommandBuffer, FontHandle, MemoryBuffer, Rect, Vec2,
};

/// Primitive kinds a renderer would draw, tagged with the scissor in effect.
fn replay(buffer: &CommandBuffer) -> Vec<(&'static str, (i16, i16, u16, u16))> {
    let mut scissor = (0, 0, u16::MAX, u16::MAX);
    let mut drawn = Vec::new();
    for command in buffer.iter() {
        let kind = match command {
            Command::Scissor(s) => {
                scissor = (s.x, s.y, s.w, s.h);
                continue;
            }
            Command::Nop => continue,
            Command::Line(_) => "line",
            Command::Rect(_) => "rect",
            Command::Circle(_) => "circle",
            Command::Triangle(_) => "triangle",
            Command::Text { .. } => "text",
            Command::Image(_) => "image",
        };
        drawn.push((kind, scissor));
    }
    drawn
}

#[test]
fn verify_fixed_64_byte_frame() {
    let mut buffer = CommandBuffer::fixed(64);

    assert!(buffer.push_scissor(Rect::new(0.0, 0.0, 32.0, 32.0)).is_some());
    assert!(buffer.push_rect(Rect::new(1.0, 1.0, 8.0, 8.0), Color::WHITE).is_some());
    assert_eq!(buffer.memory().status().allocated, 48);
    assert!(buffer.push_rect(Rect::new(2.0, 2.0, 8.0, 8.0), Color::BLACK).is_none());

    let status = buffer.memory().status();
    assert_eq!(status.kind, BufferKind::Fixed);
    assert_eq!(status.allocated, 48);
    assert_eq!(status.needed, 80);
    assert_eq!(replay(&buffer), vec![("rect", (0, 0, 32, 32))]);
}

#[test]
fn verify_scissor_applies_until_replaced() {
    let mut buffer = CommandBuffer::dynamic(64, 1.5).expect("valid grow factor");

    buffer.push_scissor(Rect::new(0.0, 0.0, 100.0, 100.0));
    buffer.push_text(Rect::new(4.0, 4.0, 40.0, 10.0), "title", FontHandle(2), Color::BLACK, Color::WHITE);
    buffer.push_line(Vec2::new(0.0, 20.0), Vec2::new(100.0, 20.0), Color::WHITE);
    buffer.push_scissor(Rect::new(0.0, 20.0, 100.0, 80.0));
    buffer.push_circle(Rect::new(10.0, 30.0, 8.0, 8.0), Color::WHITE);
    buffer.push_triangle(Vec2::new(10.0, 50.0), Vec2::new(20.0, 50.0), Vec2::new(15.0, 60.0), Color::WHITE);
    buffer.reset_scissor();
    buffer.push_rect(Rect::new(200.0, 200.0, 8.0, 8.0), Color::WHITE);

    assert_eq!(
        replay(&buffer),
        vec![
            ("text", (0, 0, 100, 100)),
            ("line", (0, 0, 100, 100)),
            ("circle", (0, 20, 100, 80)),
            ("triangle", (0, 20, 100, 80)),
            ("rect", (0, 0, u16::MAX, u16::MAX)),
        ]
    );
}

#[test]
fn verify_invalid_grow_factor_rejected() {
    assert!(matches!(
        MemoryBuffer::with_capacity(64, 0.5),
        Err(BufferError::InvalidGrowFactor(_))
    ));
}

/// Allocator with a fixed byte budget.
struct Budget(usize);

impl Allocator for Budget {
    fn alloc(&mut self, size: usize) -> Option<Box<[u8]>> {
        self.0 = self.0.checked_sub(size)?;
        Some(vec![0u8; size].into_boxed_slice())
    }
}

#[test]
fn verify_refused_growth_keeps_earlier_records() {
    let memory = MemoryBuffer::new(Budget(32), 32, 2.0).expect("initial block fits the budget");
    let mut buffer = CommandBuffer::new(memory);

    assert!(buffer.push_rect(Rect::new(1.0, 1.0, 8.0, 8.0), Color::WHITE).is_some());
    assert!(buffer.push_rect(Rect::new(2.0, 2.0, 8.0, 8.0), Color::BLACK).is_none());

    let status = buffer.memory().status();
    assert_eq!(status.kind, BufferKind::Dynamic);
    assert_eq!(status.capacity, 32);
    assert_eq!(status.allocated, 32);
    assert_eq!(replay(&buffer), vec![("rect", (0, 0, u16::MAX, u16::MAX))]);
}
