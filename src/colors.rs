//! Named colors in ARGB8888 format (alpha in the top byte).

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;

pub const BACKGROUND: u32 = BLACK;
pub const FILL: u32 = RED;
pub const WIREFRAME: u32 = WHITE;
pub const CHECKER_LIGHT: u32 = 0xFFE0E0E0;
pub const CHECKER_DARK: u32 = 0xFF303090;

/// Heartbeat overlay cycle.
pub const HEARTBEAT: [u32; 3] = [GREEN, RED, BLUE];

/// Packs 8-bit channels into an ARGB word.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packs_alpha_in_top_byte() {
        assert_eq!(argb(0xFF, 0, 0, 0), BLACK);
        assert_eq!(argb(0xFF, 0x12, 0x34, 0x56), 0xFF123456);
    }
}
