use mdconsole_core::argb;
use mdconsole_core::MessageLevel;

/// Packed opaque colours used to draw one message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    /// Text colour.
    pub text: u32,
    /// Box fill.
    pub background: u32,
    /// Accent stripe on the left edge.
    pub stripe: u32,
}

static INFO: ColorPalette = ColorPalette {
    text: argb::pack(255, 255, 255),
    background: argb::pack(15, 15, 15),
    stripe: argb::pack(15, 15, 15),
};

static WARN: ColorPalette = ColorPalette {
    text: argb::pack(224, 187, 0),
    background: argb::pack(25, 21, 0),
    stripe: argb::pack(180, 150, 0),
};

static ERROR: ColorPalette = ColorPalette {
    text: argb::pack(220, 0, 0),
    background: argb::pack(25, 0, 0),
    stripe: argb::pack(160, 0, 0),
};

impl ColorPalette {
    /// Palette for `level`.
    pub fn for_level(level: MessageLevel) -> &'static ColorPalette {
        match level {
            MessageLevel::Info => &INFO,
            MessageLevel::Warn => &WARN,
            MessageLevel::Error => &ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_an_opaque_palette() {
        for level in MessageLevel::ALL {
            let palette = ColorPalette::for_level(level);
            for color in [palette.text, palette.background, palette.stripe] {
                assert_eq!(argb::alpha(color), 255);
            }
        }
    }

    #[test]
    fn warn_and_error_are_distinct() {
        assert_ne!(
            ColorPalette::for_level(MessageLevel::Warn),
            ColorPalette::for_level(MessageLevel::Error)
        );
    }
}
