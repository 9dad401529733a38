//! Typography scale and the responsive font size transform.
//!
//! Sizes are kept in `rem`. [`Typography::make_responsive`] shrinks every
//! variant above `1rem` for narrow screens and adds one media step per
//! breakpoint tier, each snapped to a 4px line grid so that text keeps
//! aligning with the line height.

use super::breakpoints::Breakpoint;

/// Text variants of the type scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Button,
    Caption,
    Overline,
}

impl Variant {
    pub const ALL: [Variant; 13] = [
        Variant::H1,
        Variant::H2,
        Variant::H3,
        Variant::H4,
        Variant::H5,
        Variant::H6,
        Variant::Subtitle1,
        Variant::Subtitle2,
        Variant::Body1,
        Variant::Body2,
        Variant::Button,
        Variant::Caption,
        Variant::Overline,
    ];

    /// Lowercase name used in class names.
    pub fn name(self) -> &'static str {
        match self {
            Variant::H1 => "h1",
            Variant::H2 => "h2",
            Variant::H3 => "h3",
            Variant::H4 => "h4",
            Variant::H5 => "h5",
            Variant::H6 => "h6",
            Variant::Subtitle1 => "subtitle1",
            Variant::Subtitle2 => "subtitle2",
            Variant::Body1 => "body1",
            Variant::Body2 => "body2",
            Variant::Button => "button",
            Variant::Caption => "caption",
            Variant::Overline => "overline",
        }
    }

    /// Element rendered for this variant when no tag is requested.
    pub fn default_tag(self) -> TextTag {
        match self {
            Variant::H1 => TextTag::H1,
            Variant::H2 => TextTag::H2,
            Variant::H3 => TextTag::H3,
            Variant::H4 => TextTag::H4,
            Variant::H5 => TextTag::H5,
            Variant::H6 | Variant::Subtitle1 | Variant::Subtitle2 => TextTag::H6,
            Variant::Body1 | Variant::Body2 => TextTag::P,
            Variant::Button | Variant::Caption | Variant::Overline => TextTag::Span,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// HTML element used to render a text node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Span,
    Div,
}

/// Font size applied from `min_width` upwards.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaStep {
    pub min_width: u32,
    pub font_size_rem: f64,
}

/// Resolved style of one variant.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeStyle {
    pub font_weight: u16,
    /// Size below the first media step.
    pub font_size_rem: f64,
    /// Unitless multiple of the font size.
    pub line_height: f64,
    pub letter_spacing_em: f64,
    pub uppercase: bool,
    pub responsive: Vec<MediaStep>,
}

/// Options of [`Typography::make_responsive`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResponsiveOptions {
    pub breakpoints: Vec<Breakpoint>,
    /// How strongly sizes shrink on the narrowest screens.
    pub factor: f64,
    /// Skip snapping to the line grid.
    pub disable_align: bool,
    pub variants: Vec<Variant>,
}

impl Default for ResponsiveOptions {
    fn default() -> Self {
        Self {
            breakpoints: vec![Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg],
            factor: 2.0,
            disable_align: false,
            variants: Variant::ALL.to_vec(),
        }
    }
}

/// Font stack plus the resolved type scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Typography {
    pub font_family: Vec<String>,
    /// Base font size in px that the scale is designed for.
    pub font_size: f64,
    /// Root element font size in px.
    pub html_font_size: f64,
    variants: [TypeStyle; 13],
}

/// (weight, size px, line height, letter spacing px, uppercase)
const SCALE: [(u16, f64, f64, f64, bool); 13] = [
    (300, 96.0, 1.167, -1.5, false),
    (300, 60.0, 1.2, -0.5, false),
    (400, 48.0, 1.167, 0.0, false),
    (400, 34.0, 1.235, 0.25, false),
    (400, 24.0, 1.334, 0.0, false),
    (500, 20.0, 1.6, 0.15, false),
    (400, 16.0, 1.75, 0.15, false),
    (500, 14.0, 1.57, 0.1, false),
    (400, 16.0, 1.5, 0.15, false),
    (400, 14.0, 1.43, 0.15, false),
    (500, 14.0, 1.75, 0.4, true),
    (400, 12.0, 1.66, 0.4, false),
    (400, 12.0, 2.66, 1.0, true),
];

impl Typography {
    pub fn new(font_family: Vec<String>) -> Self {
        let font_size = 14.0;
        let html_font_size = 16.0;
        let coef = font_size / 14.0;
        let variants = SCALE.map(|(font_weight, px, line_height, spacing_px, uppercase)| {
            TypeStyle {
                font_weight,
                font_size_rem: px / html_font_size * coef,
                line_height,
                letter_spacing_em: round_js(spacing_px / px, 100_000.0),
                uppercase,
                responsive: Vec::new(),
            }
        });
        Self {
            font_family,
            font_size,
            html_font_size,
            variants,
        }
    }

    pub fn variant(&self, variant: Variant) -> &TypeStyle {
        &self.variants[variant.index()]
    }

    /// Font stack joined for a CSS `font-family` declaration.
    ///
    /// Family names containing whitespace are quoted.
    pub fn font_family_css(&self) -> String {
        self.font_family
            .iter()
            .map(|family| {
                if family.contains(char::is_whitespace) {
                    format!("\"{}\"", family)
                } else {
                    family.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Scales variants across breakpoint tiers.
    ///
    /// `widths` are the minimum widths of `options.breakpoints`, in order.
    /// Variants at or below `1rem` are left untouched.
    pub fn make_responsive(&mut self, widths: &[u32], options: &ResponsiveOptions) {
        let Some(&widest) = widths.last() else {
            return;
        };
        if widest == 0 {
            return;
        }

        for variant in &options.variants {
            let html_font_size = self.html_font_size;
            let style = &mut self.variants[variant.index()];
            let max = style.font_size_rem;
            if max <= 1.0 {
                continue;
            }
            let min = 1.0 + (max - 1.0) / options.factor;
            let slope = (max - min) / f64::from(widest);
            let grid = font_grid(4.0, style.line_height, html_font_size);

            style.font_size_rem = min;
            style.responsive = widths
                .iter()
                .map(|&width| {
                    let mut value = min + slope * f64::from(width);
                    if !options.disable_align {
                        value = align_to_grid(value, grid);
                    }
                    MediaStep {
                        min_width: width,
                        font_size_rem: round_js(value, 10_000.0),
                    }
                })
                .collect();
        }
    }
}

/// Line grid step in `rem` for a given line height.
fn font_grid(pixels: f64, line_height: f64, html_font_size: f64) -> f64 {
    pixels / (line_height * html_font_size)
}

/// Snaps `size` to the nearest multiple of `grid`, rounding ties up.
fn align_to_grid(size: f64, grid: f64) -> f64 {
    let below = size - (size % grid);
    let above = below + grid;
    if size - below < above - size {
        below
    } else {
        above
    }
}

/// Rounds half up at the given scale (`10_000.0` keeps four decimals).
fn round_js(value: f64, scale: f64) -> f64 {
    (value * scale + 0.5).floor() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plex() -> Typography {
        Typography::new(vec!["IBM Plex Sans".to_string(), "sans-serif".to_string()])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_scale() {
        let t = plex();
        assert_close(t.variant(Variant::H1).font_size_rem, 6.0);
        assert_close(t.variant(Variant::H6).font_size_rem, 1.25);
        assert_close(t.variant(Variant::Body1).font_size_rem, 1.0);
        assert_close(t.variant(Variant::Caption).font_size_rem, 0.75);
        assert_close(t.variant(Variant::H1).letter_spacing_em, -0.01562);
        assert!(t.variant(Variant::Button).uppercase);
        assert_eq!(t.variant(Variant::H6).font_weight, 500);
    }

    #[test]
    fn test_font_family_css_quotes_spaced_names() {
        assert_eq!(plex().font_family_css(), "\"IBM Plex Sans\", sans-serif");
    }

    #[test]
    fn test_responsive_h6() {
        let mut t = plex();
        t.make_responsive(&[600, 900, 1200], &ResponsiveOptions::default());
        let h6 = t.variant(Variant::H6);
        assert_close(h6.font_size_rem, 1.125);
        let steps: Vec<_> = h6.responsive.iter().map(|s| s.min_width).collect();
        assert_eq!(steps, vec![600, 900, 1200]);
        for step in &h6.responsive {
            assert_close(step.font_size_rem, 1.25);
        }
    }

    #[test]
    fn test_responsive_h3_snaps_to_line_grid() {
        let mut t = plex();
        t.make_responsive(&[600, 900, 1200], &ResponsiveOptions::default());
        let h3 = t.variant(Variant::H3);
        assert_close(h3.font_size_rem, 2.0);
        assert_close(h3.responsive[0].font_size_rem, 2.5707);
        assert_close(h3.responsive[1].font_size_rem, 2.7849);
        assert_close(h3.responsive[2].font_size_rem, 2.9991);
    }

    #[test]
    fn test_responsive_without_alignment_is_linear() {
        let mut t = plex();
        let options = ResponsiveOptions {
            disable_align: true,
            ..ResponsiveOptions::default()
        };
        t.make_responsive(&[600, 900, 1200], &options);
        let h3 = t.variant(Variant::H3);
        assert_close(h3.responsive[0].font_size_rem, 2.5);
        assert_close(h3.responsive[1].font_size_rem, 2.75);
        assert_close(h3.responsive[2].font_size_rem, 3.0);
    }

    #[test]
    fn test_small_variants_untouched() {
        let mut t = plex();
        let before = t.clone();
        t.make_responsive(&[600, 900, 1200], &ResponsiveOptions::default());
        for variant in [
            Variant::Subtitle1,
            Variant::Body1,
            Variant::Body2,
            Variant::Caption,
            Variant::Overline,
        ] {
            assert_eq!(t.variant(variant), before.variant(variant));
        }
    }

    #[test]
    fn test_steps_never_shrink() {
        let mut t = plex();
        t.make_responsive(&[600, 900, 1200], &ResponsiveOptions::default());
        for variant in Variant::ALL {
            let style = t.variant(variant);
            let mut previous = style.font_size_rem;
            for step in &style.responsive {
                assert!(step.font_size_rem >= previous, "{:?} shrinks", variant);
                previous = step.font_size_rem;
            }
        }
    }

    #[test]
    fn test_no_breakpoints_is_noop() {
        let mut t = plex();
        let before = t.clone();
        t.make_responsive(&[], &ResponsiveOptions::default());
        assert_eq!(t, before);
    }
}
