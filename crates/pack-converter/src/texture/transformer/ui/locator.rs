//! Locator bar HUD sprites.
//!
//! Java ships the dots, arrows and background as separate sprites under
//! `gui/sprites/hud`. Bedrock uses differently cropped versions under `ui/`,
//! so each one is re-cut at the pack's scale.

use image::{ImageFormat, RgbaImage};

use crate::config::TextureConfig;
use crate::error::Result;
use crate::key::Key;
use crate::texture::transformer::{TextureTransformer, TransformContext};
use crate::util::image::{blank, crop, draw};

const DOT_MAPPING: [(&str, &str); 4] = [
    ("gui/sprites/hud/locator_bar_dot/default_0.png", "ui/locator_bar_dot_0.png"),
    ("gui/sprites/hud/locator_bar_dot/default_1.png", "ui/locator_bar_dot_1.png"),
    ("gui/sprites/hud/locator_bar_dot/default_2.png", "ui/locator_bar_dot_2.png"),
    ("gui/sprites/hud/locator_bar_dot/default_3.png", "ui/locator_bar_dot_3.png"),
];

const ARROW_UP: (&str, &str) = (
    "gui/sprites/hud/locator_bar_arrow_up.png",
    "ui/locator_arrow_up.png",
);
const ARROW_DOWN: (&str, &str) = (
    "gui/sprites/hud/locator_bar_arrow_down.png",
    "ui/locator_arrow_down.png",
);
const BACKGROUND: (&str, &str) = (
    "gui/sprites/hud/locator_bar_background.png",
    "ui/locator_bg.png",
);

/// Why a locator sprite could not be converted.
enum Skip {
    TooSmall,
    TooLarge { width: u64, height: u64 },
}

/// Converts the locator bar HUD sprites (dots, arrows, background).
pub struct LocatorTransformer;

impl LocatorTransformer {
    /// Java dots are 9x9 with a one pixel transparent border, Bedrock wants
    /// the 7x7 interior.
    fn convert_dot(&self, image: &RgbaImage) -> std::result::Result<RgbaImage, Skip> {
        let scale = image.width() / TextureConfig::JAVA_LOCATOR_DOT_SIZE;
        if scale == 0 {
            return Err(Skip::TooSmall);
        }
        let size = scale * TextureConfig::BEDROCK_LOCATOR_DOT_SIZE;

        let mut out = blank(size, size);
        draw(&mut out, &crop(image, scale, scale, size, size), 0, 0);
        Ok(out)
    }

    /// Arrows keep their width and the top four (scaled) rows, starting at
    /// `top` in the Java sprite.
    fn convert_arrow(&self, image: &RgbaImage, top: u32) -> std::result::Result<RgbaImage, Skip> {
        let scale = image.width() / TextureConfig::LOCATOR_ARROW_WIDTH;
        if scale == 0 {
            return Err(Skip::TooSmall);
        }
        let height = scale * TextureConfig::LOCATOR_ARROW_HEIGHT;

        let mut out = blank(image.width(), height);
        draw(&mut out, &crop(image, 0, top, image.width(), height), 0, 0);
        Ok(out)
    }

    /// Stretch the short Java background to the full Bedrock hotbar width by
    /// repeating its middle slice between the two end caps.
    /// The output grows to 182/12 of the source width, so it is bounded by
    /// `TextureConfig::MAX_LOCATOR_OUTPUT_PIXELS`.
    fn convert_background(&self, image: &RgbaImage) -> std::result::Result<RgbaImage, Skip> {
        let scale = image.width() / TextureConfig::JAVA_LOCATOR_BG_WIDTH;
        if scale == 0 {
            return Err(Skip::TooSmall);
        }
        let height = image.height();
        let wide = u64::from(scale) * u64::from(TextureConfig::BEDROCK_LOCATOR_BG_WIDTH);
        if wide * u64::from(height) > TextureConfig::MAX_LOCATOR_OUTPUT_PIXELS {
            return Err(Skip::TooLarge {
                width: wide,
                height: u64::from(height),
            });
        }
        let width = scale * TextureConfig::BEDROCK_LOCATOR_BG_WIDTH;
        let cap = scale * TextureConfig::LOCATOR_BG_CAP_WIDTH;
        let slice = scale * TextureConfig::LOCATOR_BG_SLICE_WIDTH;

        let mut out = blank(width, height);
        draw(&mut out, &crop(image, 0, 0, cap, height), 0, 0);

        let middle = crop(image, cap, 0, slice, height);
        let repeats = (width - 2 * cap) / slice;
        for i in 0..repeats {
            draw(&mut out, &middle, i * slice + cap, 0);
        }

        draw(
            &mut out,
            &crop(image, image.width() - cap, 0, cap, height),
            width - cap,
            0,
        );
        Ok(out)
    }

    fn apply(
        &self,
        context: &mut TransformContext<'_>,
        (java, bedrock): (&str, &str),
        convert: impl Fn(&RgbaImage) -> std::result::Result<RgbaImage, Skip>,
    ) -> Result<()> {
        let Some(texture) = context.poll(&Key::minecraft(java)?) else {
            return Ok(());
        };
        let image = self.read_image(&texture)?;

        match convert(&image) {
            Ok(converted) => {
                context.offer_image(Key::minecraft(bedrock)?, &converted, ImageFormat::Png)?;
                context.debug(&format!("Converted {java} to {bedrock}"));
            }
            Err(Skip::TooSmall) => context.warn(&format!(
                "Skipping {java}: {}x{} is too small for a locator sprite",
                image.width(),
                image.height()
            )),
            Err(Skip::TooLarge { width, height }) => context.warn(&format!(
                "Skipping {java}: converted sprite would be {width}x{height}, over the {} pixel limit",
                TextureConfig::MAX_LOCATOR_OUTPUT_PIXELS
            )),
        }
        Ok(())
    }
}

impl TextureTransformer for LocatorTransformer {
    fn name(&self) -> &'static str {
        "locator"
    }

    fn transform(&self, context: &mut TransformContext<'_>) -> Result<()> {
        for mapping in DOT_MAPPING {
            self.apply(context, mapping, |image| self.convert_dot(image))?;
        }
        self.apply(context, ARROW_UP, |image| self.convert_arrow(image, 1))?;
        self.apply(context, ARROW_DOWN, |image| self.convert_arrow(image, 0))?;
        self.apply(context, BACKGROUND, |image| self.convert_background(image))?;
        Ok(())
    }
}
