use clap::{builder::PossibleValue, ValueEnum};

/// Average brightness above which a dot is painted pink.
pub const BRIGHTNESS_THRESHOLD: u16 = 128;

/// Palette used for dots brighter than [`BRIGHTNESS_THRESHOLD`].
pub const PINK: RGBAColorFormat = RGBAColorFormat {
    red: 231,
    green: 84,
    blue: 128,
    alpha: u8::MAX,
};

/// Fixed red and blue channels of the dark palette. Green carries the
/// brightness of the original dot.
pub const DARK_RED: u8 = 1;
pub const DARK_BLUE: u8 = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGBAColorFormat {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl RGBAColorFormat {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    fn channel_sum(&self) -> u16 {
        self.red as u16 + self.green as u16 + self.blue as u16
    }

    /// Compares the real valued average `(r + g + b) / 3` against the
    /// threshold without leaving integer arithmetic.
    pub fn is_bright(&self) -> bool {
        self.channel_sum() > BRIGHTNESS_THRESHOLD * 3
    }

    pub fn average(&self, quantization: Quantization) -> u8 {
        quantization.divide_by_three(self.channel_sum())
    }

    pub fn recolor(&self, quantization: Quantization) -> Self {
        if self.is_bright() {
            Self {
                alpha: self.alpha,
                ..PINK
            }
        } else {
            Self {
                red: DARK_RED,
                green: self.average(quantization),
                blue: DARK_BLUE,
                alpha: self.alpha,
            }
        }
    }
}

impl From<[u8; 4]> for RGBAColorFormat {
    fn from(value: [u8; 4]) -> Self {
        let [red, green, blue, alpha] = value;
        Self::new(red, green, blue, alpha)
    }
}

impl From<RGBAColorFormat> for [u8; 4] {
    fn from(value: RGBAColorFormat) -> Self {
        [value.red, value.green, value.blue, value.alpha]
    }
}

/// How the fractional part of the dark palette's green channel is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quantization {
    #[default]
    Truncate,
    Nearest,
}

impl Quantization {
    // `sum` is at most 3 * 255, so the quotient always fits into a u8.
    // A third never lands on exactly .5, rounding needs no tie rule.
    fn divide_by_three(&self, sum: u16) -> u8 {
        let quotient = match self {
            Self::Truncate => sum / 3,
            Self::Nearest => (sum + 1) / 3,
        };
        quotient as u8
    }
}

impl ValueEnum for Quantization {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Truncate, Self::Nearest]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Truncate => Some(PossibleValue::new("Truncate")),
            Self::Nearest => Some(PossibleValue::new("Nearest")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Quantization, RGBAColorFormat, PINK};

    fn recolor(red: u8, green: u8, blue: u8, alpha: u8) -> RGBAColorFormat {
        RGBAColorFormat::new(red, green, blue, alpha).recolor(Quantization::Truncate)
    }

    #[test]
    fn bright_dot_becomes_pink() {
        assert_eq!(recolor(200, 200, 200, 255), RGBAColorFormat::new(231, 84, 128, 255));
        assert_eq!(recolor(255, 255, 255, 17), RGBAColorFormat::new(231, 84, 128, 17));
    }

    #[test]
    fn dark_dot_keeps_average_in_green() {
        assert_eq!(recolor(10, 10, 10, 255), RGBAColorFormat::new(1, 10, 32, 255));
        assert_eq!(recolor(0, 0, 0, 0), RGBAColorFormat::new(1, 0, 32, 0));
        assert_eq!(recolor(90, 0, 0, 3), RGBAColorFormat::new(1, 30, 32, 3));
    }

    #[test]
    fn average_of_exactly_128_is_dark() {
        assert_eq!(recolor(128, 128, 128, 255), RGBAColorFormat::new(1, 128, 32, 255));
    }

    #[test]
    fn threshold_uses_fractional_average() {
        // 385 / 3 = 128.33 is above the threshold although its integer part is not
        let just_above = recolor(129, 128, 128, 255);
        assert_eq!(just_above, RGBAColorFormat::new(231, 84, 128, 255));
        let two_thirds_above = recolor(129, 129, 128, 255);
        assert_eq!(two_thirds_above, RGBAColorFormat::new(231, 84, 128, 255));
    }

    #[test]
    fn truncation_drops_fraction() {
        // 32 / 3 = 10.67
        assert_eq!(recolor(10, 10, 12, 255).green, 10);
    }

    #[test]
    fn nearest_rounds_fraction() {
        let dot = RGBAColorFormat::new(10, 10, 12, 255);
        assert_eq!(dot.recolor(Quantization::Nearest).green, 11);
        let dot = RGBAColorFormat::new(10, 10, 11, 255);
        assert_eq!(dot.recolor(Quantization::Nearest).green, 10);
        let dot = RGBAColorFormat::new(128, 128, 128, 255);
        assert_eq!(dot.recolor(Quantization::Nearest).green, 128);
    }

    #[test]
    fn pink_is_fixed_point() {
        let once = recolor(250, 240, 230, 99);
        let twice = once.recolor(Quantization::Truncate);
        assert_eq!(once, twice);
        assert_eq!(twice, RGBAColorFormat { alpha: 99, ..PINK });
    }

    #[test]
    fn dark_is_not_fixed_point_in_general() {
        let once = recolor(100, 100, 100, 255);
        assert_eq!(once, RGBAColorFormat::new(1, 100, 32, 255));
        // (1 + 100 + 32) / 3 = 44
        let twice = once.recolor(Quantization::Truncate);
        assert_eq!(twice, RGBAColorFormat::new(1, 44, 32, 255));
        assert_ne!(once, twice);
    }

    #[test]
    fn convert_from_and_to_channel_array() {
        let dot = RGBAColorFormat::from([1, 2, 3, 4]);
        assert_eq!(dot, RGBAColorFormat::new(1, 2, 3, 4));
        assert_eq!(<[u8; 4]>::from(dot), [1, 2, 3, 4]);
    }
}
