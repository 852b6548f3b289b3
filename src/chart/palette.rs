#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

const fn color(name: &'static str, r: u8, g: u8, b: u8) -> Color {
    Color { name, rgb: [r, g, b] }
}

pub const PALETTE: [Color; 16] = [
    color("skyblue", 135, 206, 235),
    color("blue", 0, 0, 255),
    color("cyan", 0, 255, 255),
    color("navy", 0, 0, 128),
    color("deepskyblue", 0, 191, 255),
    color("orange", 255, 165, 0),
    color("red", 255, 0, 0),
    color("coral", 255, 127, 80),
    color("darkred", 139, 0, 0),
    color("gold", 255, 215, 0),
    color("green", 0, 128, 0),
    color("lime", 0, 255, 0),
    color("darkgreen", 0, 100, 0),
    color("purple", 128, 0, 128),
    color("violet", 238, 130, 238),
    color("magenta", 255, 0, 255),
];

/// Color of the `index`-th series of a chart, wrapping around the palette.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
