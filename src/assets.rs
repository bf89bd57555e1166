//=========================================================================
// Game Assets
//=========================================================================
//
// Procedurally painted textures for the intro slides and the playing
// card sprite sheet, registered into an `AssetManager` at startup.
//
// Sprite names follow the usual playing-card atlas convention:
//   card{Clubs,Diamonds,Hearts,Spades}{A,2..10,J,Q,K}
//   cardBack_{blue,red}{1..5}
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::assets::{AssetError, AssetManager, SpriteSheet};
use crate::core::render::{Canvas, Color, Image, Rect, Surface};

//=== Names ===============================================================

pub const SPLASH: &str = "splash";
pub const FRAMEWORK_SLIDE: &str = "framework_slide";
pub const CREDITS_SLIDE: &str = "credits_slide";

/// Card shown face up on the table.
pub const TABLE_CARD: &str = "cardSpadesA";

/// Card back shown when the table card is face down.
pub const TABLE_CARD_BACK: &str = "cardBack_red5";

//=== Layout ==============================================================

/// Size of a single card sprite.
pub const CARD_SIZE: (u32, u32) = (70, 95);

const SUITS: [&str; 4] = ["Clubs", "Diamonds", "Hearts", "Spades"];
const RANKS: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];
const BACK_COLORS: [(&str, Color); 2] = [
    ("blue", Color::rgb(0x2b, 0x4c, 0x9b)),
    ("red", Color::rgb(0xb3, 0x22, 0x2b)),
];
const BACKS_PER_COLOR: u32 = 5;

const SLIDE_SIZE: (u32, u32) = (480, 270);

//=== Loading =============================================================

/// Builds every texture the game uses.
pub fn load() -> Result<AssetManager, AssetError> {
    let mut assets = AssetManager::new();

    assets.add_texture(SPLASH, slide(Color::rgb(0x18, 0x8d, 0x46), Color::WHITE));
    assets.add_texture(FRAMEWORK_SLIDE, slide(Color::rgb(0x20, 0x20, 0x28), Color::rgb(0xf7, 0x4c, 0x00)));
    assets.add_texture(CREDITS_SLIDE, slide(Color::rgb(0x28, 0x1e, 0x3c), Color::rgb(0xff, 0xd7, 0x00)));

    assets.load_sprite_sheet(&card_sheet())?;

    info!(target: "game", "Loaded {} textures", assets.len());
    Ok(assets)
}

//--- Card Sheet ----------------------------------------------------------

/// Paints the card atlas: one row per suit, then one row of backs.
pub fn card_sheet() -> SpriteSheet {
    let (card_w, card_h) = CARD_SIZE;
    let columns = RANKS.len() as u32;
    let rows = SUITS.len() as u32 + 1;

    let mut canvas = Canvas::new(columns * card_w, rows * card_h);
    canvas.fill(Color::TRANSPARENT);

    let mut regions = Vec::new();

    for (row, suit) in SUITS.iter().enumerate() {
        let pip_color = match *suit {
            "Diamonds" | "Hearts" => Color::RED,
            _ => Color::BLACK,
        };
        for (column, rank) in RANKS.iter().enumerate() {
            let rect = cell(column as u32, row as u32);
            paint_face(&mut canvas, rect, pip_color, column as u32 + 1);
            regions.push((format!("card{}{}", suit, rank), rect));
        }
    }

    let back_row = SUITS.len() as u32;
    let mut column = 0;
    for (name, color) in BACK_COLORS {
        for n in 1..=BACKS_PER_COLOR {
            let rect = cell(column, back_row);
            paint_back(&mut canvas, rect, color, n);
            regions.push((format!("cardBack_{}{}", name, n), rect));
            column += 1;
        }
    }

    let mut sheet = SpriteSheet::new(canvas.into_image());
    for (name, rect) in regions {
        sheet.define(name, rect);
    }
    sheet
}

fn cell(column: u32, row: u32) -> Rect {
    let (card_w, card_h) = CARD_SIZE;
    Rect::new((column * card_w) as i32, (row * card_h) as i32, card_w, card_h)
}

/// White card with a border, corner marks, and a pip bar sized by rank.
fn paint_face(canvas: &mut Canvas, rect: Rect, pip_color: Color, rank: u32) {
    canvas.fill_rect(rect, Color::rgb(0x60, 0x60, 0x60));
    canvas.fill_rect(inset(rect, 2), Color::WHITE);

    let mark = Rect::new(rect.x + 6, rect.y + 6, 8, 12);
    canvas.fill_rect(mark, pip_color);
    canvas.fill_rect(mark.at(rect.right() - 14, rect.bottom() - 18), pip_color);

    let bar_height = 4 * rank;
    let bar = Rect::new(
        rect.x + rect.width as i32 / 2 - 8,
        rect.y + (rect.height - bar_height) as i32 / 2,
        16,
        bar_height,
    );
    canvas.fill_rect(bar, pip_color);
}

/// Colored back with `stripes` horizontal bands.
fn paint_back(canvas: &mut Canvas, rect: Rect, color: Color, stripes: u32) {
    canvas.fill_rect(rect, Color::WHITE);
    let inner = inset(rect, 4);
    canvas.fill_rect(inner, color);

    let band = inner.height / (2 * stripes + 1);
    for i in 0..stripes {
        let y = inner.y + (band * (2 * i + 1)) as i32;
        canvas.fill_rect(Rect::new(inner.x + 4, y, inner.width - 8, band.max(1)), Color::WHITE);
    }
}

//--- Slides --------------------------------------------------------------

/// Full-color slide with an accent frame and banner.
fn slide(background: Color, accent: Color) -> Image {
    let (width, height) = SLIDE_SIZE;
    let mut canvas = Canvas::new(width, height);
    let bounds = Rect::from_size(width, height);

    canvas.fill(accent);
    canvas.fill_rect(inset(bounds, 6), background);
    canvas.fill_rect(Rect::new(60, height as i32 / 2 - 20, width - 120, 40), accent);

    canvas.into_image()
}

fn inset(rect: Rect, by: u32) -> Rect {
    Rect::new(
        rect.x + by as i32,
        rect.y + by as i32,
        rect.width.saturating_sub(2 * by),
        rect.height.saturating_sub(2 * by),
    )
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_defines_every_card_and_back() {
        let sheet = card_sheet();
        assert_eq!(sheet.len(), 4 * 13 + 10);

        for name in ["cardSpadesA", "cardHearts10", "cardClubsK", "cardBack_blue1", TABLE_CARD_BACK] {
            let image = sheet.get(name).unwrap();
            assert_eq!(image.size(), CARD_SIZE, "{} has the wrong size", name);
        }
    }

    #[test]
    fn unknown_sprite_is_reported() {
        assert_eq!(
            card_sheet().get("cardJoker").unwrap_err(),
            AssetError::SpriteNotFound("cardJoker".into())
        );
    }

    #[test]
    fn suit_colors_follow_convention() {
        let sheet = card_sheet();
        let hearts = sheet.get("cardHeartsA").unwrap();
        let spades = sheet.get("cardSpadesA").unwrap();

        assert_eq!(hearts.pixel(8, 8), Some(Color::RED));
        assert_eq!(spades.pixel(8, 8), Some(Color::BLACK));
    }

    #[test]
    fn load_registers_slides_and_cards() {
        let assets = load().unwrap();

        for name in [SPLASH, FRAMEWORK_SLIDE, CREDITS_SLIDE, TABLE_CARD, TABLE_CARD_BACK] {
            assert!(assets.contains(name), "{} missing", name);
        }
        assert_eq!(assets.get_texture(SPLASH).unwrap().size(), SLIDE_SIZE);
    }
}
