//! Screen rendering
//!
//! Draws the boot and status screens on the K10's panel: a 240x320
//! ST7789 rotated to 320x240 landscape. The status layout is fixed,
//! title bar on top, large rep count in the middle, activity label
//! underneath. Only the dynamic region is repainted on updates.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Text},
};
use heapless::String;
use profont::{PROFONT_14_POINT, PROFONT_24_POINT};

use repmate_core::counter::Observation;
use repmate_core::status::Rgb;

/// Logical screen width in landscape orientation
pub const SCREEN_W: u32 = 320;

const CENTER_X: i32 = (SCREEN_W / 2) as i32;

/// Text baselines (title and caption are static, count and label dynamic)
const TITLE_Y: i32 = 30;
const CAPTION_Y: i32 = 95;
const COUNT_Y: i32 = 150;
const STATUS_Y: i32 = 205;

/// Region blanked and repainted on every status update
const DYNAMIC_TOP: i32 = 120;
const DYNAMIC_H: u32 = 100;

/// Status screen renderer
///
/// Tracks whether the static parts have been drawn so that updates only
/// repaint the dynamic region.
pub struct StatusScreen {
    background_drawn: bool,
}

impl StatusScreen {
    /// Create a renderer with nothing drawn yet
    pub const fn new() -> Self {
        Self {
            background_drawn: false,
        }
    }

    /// Draw the boot splash
    pub fn draw_boot<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.background_drawn = false;
        target.clear(Rgb565::WHITE)?;

        let heading = MonoTextStyle::new(&PROFONT_24_POINT, Rgb565::BLUE);
        let subtitle = MonoTextStyle::new(&PROFONT_14_POINT, Rgb565::BLACK);

        Text::with_alignment(
            "Hello K10!",
            Point::new(CENTER_X, 110),
            heading,
            Alignment::Center,
        )
        .draw(target)?;
        Text::with_alignment(
            "Tiny Gym Buddy",
            Point::new(CENTER_X, 150),
            subtitle,
            Alignment::Center,
        )
        .draw(target)?;
        Ok(())
    }

    /// Draw the counter screen for the given snapshot
    pub fn draw_status<D>(&mut self, target: &mut D, snapshot: &Observation) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let static_style = MonoTextStyle::new(&PROFONT_14_POINT, Rgb565::BLACK);

        if !self.background_drawn {
            target.clear(Rgb565::WHITE)?;
            Text::with_alignment(
                "TINY GYM BUDDY",
                Point::new(CENTER_X, TITLE_Y),
                static_style,
                Alignment::Center,
            )
            .draw(target)?;
            Text::with_alignment(
                "REPS",
                Point::new(CENTER_X, CAPTION_Y),
                static_style,
                Alignment::Center,
            )
            .draw(target)?;
            self.background_drawn = true;
        }

        // Blank the dynamic region before redrawing it
        Rectangle::new(Point::new(0, DYNAMIC_TOP), Size::new(SCREEN_W, DYNAMIC_H))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
            .draw(target)?;

        let count_style = MonoTextStyle::new(&PROFONT_24_POINT, Rgb565::BLACK);
        Text::with_alignment(
            &format_count(snapshot.count),
            Point::new(CENTER_X, COUNT_Y),
            count_style,
            Alignment::Center,
        )
        .draw(target)?;

        let activity = snapshot.activity();
        let label_style = MonoTextStyle::new(&PROFONT_14_POINT, rgb565(activity.color()));
        Text::with_alignment(
            activity.label(),
            Point::new(CENTER_X, STATUS_Y),
            label_style,
            Alignment::Center,
        )
        .draw(target)?;
        Ok(())
    }
}

impl Default for StatusScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a rep count for display
fn format_count(count: u32) -> String<12> {
    let mut text: String<12> = String::new();
    let _ = write!(text, "{}", count);
    text
}

/// Convert an indicator color to the panel's 16-bit format
fn rgb565(color: Rgb) -> Rgb565 {
    Rgb565::new(color.r >> 3, color.g >> 2, color.b >> 3)
}
