//! Named colors used by the tray icons (the classic web/X11 values).

use image::Rgba;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);
pub const ORANGE: Rgba<u8> = Rgba([255, 165, 0, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
pub const SILVER: Rgba<u8> = Rgba([192, 192, 192, 255]);
pub const MIDNIGHT_BLUE: Rgba<u8> = Rgba([25, 25, 112, 255]);
pub const LIGHT_BLUE: Rgba<u8> = Rgba([173, 216, 230, 255]);
pub const DARK_BLUE: Rgba<u8> = Rgba([0, 0, 139, 255]);
pub const SLATE_GRAY: Rgba<u8> = Rgba([112, 128, 144, 255]);
