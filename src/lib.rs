//! Category color gradients.
//!
//! Shade the `index`-th of `count` items with a color taken along the
//! palette of a category:
//!
//! - [`color_for_agenda`] for an [`AgendaCategory`],
//! - [`color_for_gradient`] for a [`GradientCategory`].
//!
//! Both are pure functions of their arguments.  The first item gets the
//! first stop of the palette, the last item its last stop, and the
//! items in between are interpolated piecewise-linearly in RGB.
//! `reversed` walks the palette the other way.
//!
//! ```
//! use category_gradient::{color_for_gradient, GradientCategory};
//! let c = color_for_gradient(GradientCategory::Blue, 2, 5, false)?;
//! assert!(c.b > c.r);
//! # Ok::<(), category_gradient::InvalidArgument>(())
//! ```
//!
//! Palettes can also be obtained in other pixel formats through
//! [`RGBColor`], and a whole list of colors can be produced at once
//! with [`ColorRange::sequence`].

use std::marker::PhantomData;
use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};
use tracing::{debug, trace};

mod palettes;
use palettes::ty::PaletteData;
pub use palettes::ty::{AgendaCategory, GradientCategory};

/// A color with red, green and blue channels in \[0, 1\].
pub type Color = RGB<f64>;

/// Rejected argument.
///
/// Positions are never clamped: an out of range index is reported to
/// the caller rather than turned into a plausible color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    /// The number of items must be at least 1.
    #[error("invalid argument: count must be at least 1, got {0}")]
    Count(isize),
    /// The index must satisfy `0 <= index < count`.
    #[error("invalid argument: index {index} is not in 0 .. {count}")]
    Index { index: isize, count: isize },
    /// A gradient needs at least two stops.
    #[error("invalid argument: a gradient needs at least 2 stops, got {0}")]
    Stops(usize),
    /// Unknown category name.
    #[error("invalid argument: unknown category “{0}”")]
    Category(String),
}

/// Return the color of the `index`-th of `count` items of the agenda
/// `category`.
///
/// # Errors
///
/// [`InvalidArgument`] if `count < 1` or `index` is not in `0 .. count`.
pub fn color_for_agenda(
    category: AgendaCategory, index: isize, count: isize, reversed: bool,
) -> Result<Color, InvalidArgument> {
    Color::agenda(category).color(index, count, reversed)
        .inspect_err(|e| debug!(%category, index, count, "{e}"))
}

/// Return the color of the `index`-th of `count` items shaded with the
/// gradient `category`.
///
/// # Errors
///
/// [`InvalidArgument`] if `count < 1` or `index` is not in `0 .. count`.
pub fn color_for_gradient(
    category: GradientCategory, index: isize, count: isize, reversed: bool,
) -> Result<Color, InvalidArgument> {
    Color::gradient_palette(category).color(index, count, reversed)
        .inspect_err(|e| debug!(%category, index, count, "{e}"))
}

/// The position of an item in an ordered sequence of items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    index: usize,
    count: usize, // Invariant: index < count
}

impl Position {
    /// Check that `count >= 1` and `0 <= index < count`.
    pub fn new(index: isize, count: isize) -> Result<Self, InvalidArgument> {
        if count < 1 {
            return Err(InvalidArgument::Count(count))
        }
        if index < 0 || index >= count {
            return Err(InvalidArgument::Index { index, count })
        }
        Ok(Position { index: index as usize, count: count as usize })
    }

    /// Rank of the item, in `0 .. count`.
    pub fn index(&self) -> usize { self.index }

    /// Number of items in the sequence (at least 1).
    pub fn count(&self) -> usize { self.count }

    /// The normalized position `t` ∈ \[0, 1\] of the item, `1 - t` if
    /// `reversed`.  A single item is at `t = 0` in both directions.
    pub fn t(&self, reversed: bool) -> f64 {
        normalized(self.index, self.count - 1, reversed)
    }
}

/// `k / last`, or `(last - k) / last` if `reversed`.
#[inline]
fn normalized(k: usize, last: usize, reversed: bool) -> f64 {
    if last == 0 { return 0. }
    let k = if reversed { last - k } else { k };
    k as f64 / last as f64
}

/// Piecewise-linear interpolation along `stops` (of length ≥ 2) at
/// `t` ∈ \[0, 1\].  The end stops are returned as is for `t = 0` and
/// `t = 1`.  A NaN `t` gives a NaN color.
fn interpolate(stops: &[Color], t: f64) -> Color {
    let last = stops.len() - 1;
    if t <= 0. { return stops[0] }
    if t >= 1. { return stops[last] }
    let segment = t * last as f64;
    let lo = (segment.floor() as usize).min(last - 1);
    let frac = segment - lo as f64;
    let c0 = stops[lo];
    let c1 = stops[lo + 1];
    RGB { r: c0.r + frac * (c1.r - c0.r),
          g: c0.g + frac * (c1.g - c0.g),
          b: c0.b + frac * (c1.b - c0.b) }
}

/// A range of colors parametrized by reals in \[0, 1\], defined by
/// an ordered list of stops.
pub trait ColorRange<Color: RGBColor> {
    /// The stops of the range (at least 2), in \[0, 1\] RGB.
    fn stops(&self) -> &[RGB<f64>];

    /// Returns the color corresponding to `t` ∈ \[0., 1.\].  Values of
    /// `t` outside that interval are clamped.
    fn rgb(&self, t: f64) -> Color {
        Color::from_rgb(interpolate(self.stops(), t.clamp(0., 1.)))
    }

    /// Returns the color of the `index`-th of `count` items, walking
    /// the stops backward if `reversed`.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if `count < 1` or `index` is not in
    /// `0 .. count`.
    fn color(&self, index: isize, count: isize, reversed: bool)
             -> Result<Color, InvalidArgument> {
        let pos = Position::new(index, count)?;
        Ok(self.rgb(pos.t(reversed)))
    }

    /// Return an iterator yielding the colors of `count` items, the
    /// same ones as [`ColorRange::color`] for each index in turn.  It
    /// is empty if `count == 0`.
    fn sequence(self, count: usize, reversed: bool) -> Sequence<Self, Color>
    where Self: Sized {
        if count == 0 {
            Sequence { range: self, color: PhantomData,
                       last: 0, reversed, i: 1, j: 0 } // Empty iterator
        } else {
            Sequence { range: self, color: PhantomData,
                       last: count - 1, reversed, i: 0, j: count - 1 }
        }
    }
}

impl<R, Color> ColorRange<Color> for &R
where R: ColorRange<Color>, Color: RGBColor {
    fn stops(&self) -> &[RGB<f64>] { R::stops(self) }
}

/// An iterator yielding the colors of a sequence of items.
///
/// Created by [`ColorRange::sequence`].
pub struct Sequence<R, Color> {
    range: R,
    color: PhantomData<Color>,
    last: usize, // index of the last item
    reversed: bool,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Sequence<R, Color>
where R: ColorRange<Color>, Color: RGBColor {
    /// Return the color of the item `k` (assuming it is in the range
    /// `0 ..= self.last`).
    fn rgb(&self, k: usize) -> Color {
        self.range.rgb(normalized(k, self.last, self.reversed))
    }
}

impl<R, Color> Iterator for Sequence<R, Color>
where R: ColorRange<Color>, Color: RGBColor {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.i <= self.j { self.j - self.i + 1 } else { 0 };
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Sequence<R, Color>
where R: ColorRange<Color>, Color: RGBColor {}

impl<R, Color> DoubleEndedIterator for Sequence<R, Color>
where R: ColorRange<Color>, Color: RGBColor {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 1\]).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (in \[0, 1\]).
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use category_gradient::{RGBColor, ColorRange};
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// assert_eq!(grad.rgb(0.5), RGB8::new(128, 0, 128));
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        Gradient { stops: vec![self.to_rgb(), c1.to_rgb()],
                   color: PhantomData }
    }

    /// The palette of the agenda `category`.
    #[inline]
    fn agenda(category: AgendaCategory) -> Palette<Self> {
        Palette::new(category.data())
    }

    /// The palette of the gradient `category`.
    #[inline]
    fn gradient_palette(category: GradientCategory) -> Palette<Self> {
        Palette::new(category.data())
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGB { r, g, b } = Self::to_rgb(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgb(RGB { r: x, g: x, b: x })
    }

    /// CSS notation `#rrggbb` of the color.
    fn css(&self) -> String {
        let RGB8 { r, g, b } = RGB8::from_rgb(self.to_rgb());
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Map `x` ∈ \[0, 1\] to the nearest integer channel value in
/// \[0, max\].
#[inline]
fn quantize(x: f64, max: f64) -> f64 { (x.clamp(0., 1.) * max).round() }

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: quantize(c.r, 255.) as u8,  g: quantize(c.g, 255.) as u8,
               b: quantize(c.b, 255.) as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB16 { r: quantize(c.r, 65535.) as u16,
                g: quantize(c.g, 65535.) as u16,
                b: quantize(c.b, 65535.) as u16 }
    }
}

// Colors with alpha are produced fully opaque; their alpha is ignored.

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { RGB8::new(self.r, self.g, self.b).to_rgb() }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        let RGB8 { r, g, b } = RGB8::from_rgb(c);
        RGBA { r, g, b, a: u8::MAX }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { RGB16::new(self.r, self.g, self.b).to_rgb() }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        let RGB16 { r, g, b } = RGB16::from_rgb(c);
        RGBA { r, g, b, a: u16::MAX }
    }
}

impl AgendaCategory {
    fn data(self) -> &'static PaletteData {
        use palettes::*;
        let data: &'static PaletteData = match self {
            AgendaCategory::Uncategorized => &*AGENDA_UNCATEGORIZED,
            AgendaCategory::Recuperate => &*AGENDA_RECUPERATE,
            AgendaCategory::Work => &*AGENDA_WORK,
            AgendaCategory::Social => &*AGENDA_SOCIAL,
            AgendaCategory::Exercise => &*AGENDA_EXERCISE,
            AgendaCategory::DeadTime => &*AGENDA_DEAD_TIME,
        };
        trace!(category = %self, palette = data.name, "agenda palette");
        data
    }
}

impl GradientCategory {
    fn data(self) -> &'static PaletteData {
        use palettes::*;
        let data: &'static PaletteData = match self {
            GradientCategory::Uncategorized => &*GRADIENT_UNCATEGORIZED,
            GradientCategory::White => &*GRADIENT_WHITE,
            GradientCategory::Green => &*GRADIENT_GREEN,
            GradientCategory::Blue => &*GRADIENT_BLUE,
            GradientCategory::Red => &*GRADIENT_RED,
            GradientCategory::Black => &*GRADIENT_BLACK,
        };
        trace!(category = %self, palette = data.name, "gradient palette");
        data
    }
}


/// A built-in palette.
///
/// Created by [`RGBColor::agenda`] and [`RGBColor::gradient_palette`].
/// See the [`ColorRange`] trait for methods.
#[derive(Clone, Copy)]
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }

    /// Returns the number of stops of the palette (at least 2).
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// The name of the palette, the one of its category.
    pub fn name(&self) -> &'static str { self.palette.name }

    /// Returns the stops of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgb(c)).collect()
    }

    /// The color of the first item of any sequence.
    pub fn first(&self) -> Color { Color::from_rgb(self.palette.rgb[0]) }

    /// The color of the last item of any sequence.
    pub fn last(&self) -> Color {
        Color::from_rgb(self.palette.rgb[self.len() - 1])
    }
}

impl<Color: RGBColor> ColorRange<Color> for Palette<Color> {
    fn stops(&self) -> &[RGB<f64>] { &self.palette.rgb }
}

/// Gradient through caller supplied stops.
///
/// Created by [`RGBColor::gradient`] or [`Gradient::from_stops`].  See
/// the [`ColorRange`] trait for methods.
#[derive(Clone, Debug)]
pub struct Gradient<Color> {
    stops: Vec<RGB<f64>>, // Invariant: length ≥ 2
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Gradient<Color> {
    /// Return the gradient going through `stops`, in order.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::Stops`] if fewer than 2 stops are given.
    pub fn from_stops<I>(stops: I) -> Result<Self, InvalidArgument>
    where I: IntoIterator<Item = Color> {
        let stops: Vec<_> = stops.into_iter().map(|c| c.to_rgb()).collect();
        if stops.len() < 2 {
            debug!(stops = stops.len(), "gradient rejected");
            return Err(InvalidArgument::Stops(stops.len()))
        }
        Ok(Gradient { stops, color: PhantomData })
    }

    /// Returns the number of stops of the gradient.
    pub fn len(&self) -> usize { self.stops.len() }

    /// Returns the stops of the gradient.
    pub fn colors(&self) -> Vec<Color> {
        self.stops.iter().map(|&c| Color::from_rgb(c)).collect()
    }

    pub fn first(&self) -> Color { Color::from_rgb(self.stops[0]) }

    pub fn last(&self) -> Color {
        Color::from_rgb(self.stops[self.stops.len() - 1])
    }
}

impl<Color: RGBColor> ColorRange<Color> for Gradient<Color> {
    fn stops(&self) -> &[RGB<f64>] { &self.stops }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COUNTS: std::ops::RangeInclusive<isize> = 1 ..= 20;

    fn assert_close(c0: Color, c1: Color) {
        let d = (c0.r - c1.r).abs().max((c0.g - c1.g).abs())
            .max((c0.b - c1.b).abs());
        assert!(d <= 1e-12, "{c0:?} ≉ {c1:?}");
    }

    fn gradient(cat: GradientCategory) -> Palette<Color> {
        Color::gradient_palette(cat)
    }

    #[test]
    fn first_item_is_first_stop() {
        for count in COUNTS {
            for cat in GradientCategory::ALL {
                assert_eq!(color_for_gradient(cat, 0, count, false),
                           Ok(gradient(cat).first()));
            }
            for cat in AgendaCategory::ALL {
                assert_eq!(color_for_agenda(cat, 0, count, false),
                           Ok(Color::agenda(cat).first()));
            }
        }
    }

    #[test]
    fn last_item_is_last_stop() {
        // A single item is both first and last: it gets the first stop.
        for count in 2 ..= 20 {
            for cat in GradientCategory::ALL {
                assert_eq!(color_for_gradient(cat, count - 1, count, false),
                           Ok(gradient(cat).last()));
            }
            for cat in AgendaCategory::ALL {
                assert_eq!(color_for_agenda(cat, count - 1, count, false),
                           Ok(Color::agenda(cat).last()));
            }
        }
    }

    #[test]
    fn reversal_mirrors_index() {
        for count in COUNTS {
            for index in 0 .. count {
                let mirror = count - 1 - index;
                for cat in GradientCategory::ALL {
                    assert_eq!(color_for_gradient(cat, index, count, true),
                               color_for_gradient(cat, mirror, count, false));
                }
                for cat in AgendaCategory::ALL {
                    assert_eq!(color_for_agenda(cat, index, count, true),
                               color_for_agenda(cat, mirror, count, false));
                }
            }
        }
    }

    #[test]
    fn single_item_is_first_stop() {
        for reversed in [false, true] {
            for cat in GradientCategory::ALL {
                assert_eq!(color_for_gradient(cat, 0, 1, reversed),
                           Ok(gradient(cat).first()));
            }
            for cat in AgendaCategory::ALL {
                assert_eq!(color_for_agenda(cat, 0, 1, reversed),
                           Ok(Color::agenda(cat).first()));
            }
        }
    }

    #[test]
    fn two_stop_palettes_are_monotonic() {
        fn channels(c: Color) -> [f64; 3] { [c.r, c.g, c.b] }
        for cat in AgendaCategory::ALL {
            let p = Color::agenda(cat);
            assert_eq!(p.len(), 2);
            let first = channels(p.first());
            let last = channels(p.last());
            for count in COUNTS {
                let colors: Vec<_> = p.sequence(count as usize, false)
                    .map(channels).collect();
                for w in colors.windows(2) {
                    for ch in 0 .. 3 {
                        if first[ch] <= last[ch] {
                            assert!(w[0][ch] <= w[1][ch], "{cat} {count}");
                        } else {
                            assert!(w[0][ch] >= w[1][ch], "{cat} {count}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn invalid_positions() {
        use GradientCategory::Green;
        assert_eq!(color_for_gradient(Green, 0, 0, false),
                   Err(InvalidArgument::Count(0)));
        assert_eq!(color_for_gradient(Green, 0, -3, true),
                   Err(InvalidArgument::Count(-3)));
        assert_eq!(color_for_gradient(Green, -1, 5, false),
                   Err(InvalidArgument::Index { index: -1, count: 5 }));
        assert_eq!(color_for_gradient(Green, 5, 5, false),
                   Err(InvalidArgument::Index { index: 5, count: 5 }));
        assert_eq!(color_for_agenda(AgendaCategory::Work, 7, 5, true),
                   Err(InvalidArgument::Index { index: 7, count: 5 }));
        assert_eq!(color_for_agenda(AgendaCategory::Work, 0, 0, true),
                   Err(InvalidArgument::Count(0)));
    }

    #[test]
    fn positions() {
        let pos = Position::new(2, 5).unwrap();
        assert_eq!((pos.index(), pos.count()), (2, 5));
        assert_eq!(pos.t(false), 0.5);
        assert_eq!(Position::new(1, 5).unwrap().t(true), 0.75);
        let single = Position::new(0, 1).unwrap();
        assert_eq!((single.index(), single.count()), (0, 1));
        assert_eq!(single.t(false), 0.);
        assert_eq!(single.t(true), 0.);
        assert_eq!(Position::new(isize::MIN, 3),
                   Err(InvalidArgument::Index { index: isize::MIN, count: 3 }));
        let huge = Position::new(isize::MAX - 1, isize::MAX).unwrap();
        assert_eq!(huge.t(false), 1.);
    }

    #[test]
    fn error_messages() {
        assert_eq!(InvalidArgument::Index { index: 5, count: 5 }.to_string(),
                   "invalid argument: index 5 is not in 0 .. 5");
        assert_eq!(InvalidArgument::Count(0).to_string(),
                   "invalid argument: count must be at least 1, got 0");
    }

    #[test]
    fn white_to_black() {
        let white = RGB { r: 1., g: 1., b: 1. };
        let black = RGB { r: 0., g: 0., b: 0. };
        let g = white.gradient(&black);
        let gray = |x: f64| RGB { r: x, g: x, b: x };
        assert_eq!(g.color(0, 4, false), Ok(white));
        assert_close(g.color(1, 4, false).unwrap(), gray(2. / 3.));
        assert_close(g.color(2, 4, false).unwrap(), gray(1. / 3.));
        assert_eq!(g.color(3, 4, false), Ok(black));
    }

    #[test]
    fn multi_stop_segments() {
        let blue = gradient(GradientCategory::Blue);
        assert_eq!(blue.len(), 3);
        let stops = blue.colors();
        // Odd counts put the middle item exactly on the middle stop.
        assert_eq!(blue.color(1, 3, false), Ok(stops[1]));
        assert_eq!(blue.color(2, 5, true), Ok(stops[1]));
        let mid = |a: f64, b: f64| (a + b) / 2.;
        let quarter = blue.color(1, 5, false).unwrap();
        assert_close(quarter, RGB { r: mid(stops[0].r, stops[1].r),
                                    g: mid(stops[0].g, stops[1].g),
                                    b: mid(stops[0].b, stops[1].b) });
    }

    #[test]
    fn uncategorized_is_neutral_gray() {
        for c in gradient(GradientCategory::Uncategorized).colors() {
            assert_eq!(c.r, c.g);
            assert_eq!(c.g, c.b);
        }
        assert_eq!(Color::agenda(AgendaCategory::Uncategorized).colors(),
                   gradient(GradientCategory::Uncategorized).colors());
    }

    #[test]
    fn rgb_clamps_t() {
        let red = gradient(GradientCategory::Red);
        assert_eq!(red.rgb(-0.5), red.first());
        assert_eq!(red.rgb(7.), red.last());
    }

    #[test]
    fn sequence_matches_queries() {
        let p = Color::agenda(AgendaCategory::Social);
        for count in COUNTS {
            for reversed in [false, true] {
                let seq: Vec<_> = p.sequence(count as usize, reversed).collect();
                let expected: Vec<_> = (0 .. count)
                    .map(|i| p.color(i, count, reversed).unwrap())
                    .collect();
                assert_eq!(seq, expected);
                let mut back: Vec<_> =
                    p.sequence(count as usize, reversed).rev().collect();
                back.reverse();
                assert_eq!(back, expected);
            }
        }
    }

    #[test]
    fn sequence_len() {
        let p = gradient(GradientCategory::Black);
        assert_eq!(p.sequence(0, false).next(), None);
        assert_eq!(p.sequence(0, true).next_back(), None);
        let mut seq = p.sequence(4, false);
        assert_eq!(seq.len(), 4);
        seq.next();
        seq.next_back();
        assert_eq!(seq.len(), 2);
        seq.next();
        seq.next();
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.next_back(), None);
    }

    #[test]
    fn gradient_by_reference() {
        let g = Gradient::from_stops([RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)])
            .unwrap();
        let colors: Vec<RGB8> = (&g).sequence(3, false).collect();
        assert_eq!(colors, vec![RGB8::new(0, 0, 0), RGB8::new(128, 128, 128),
                                RGB8::new(255, 255, 255)]);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn too_few_stops() {
        assert_eq!(Gradient::<Color>::from_stops([]).unwrap_err(),
                   InvalidArgument::Stops(0));
        assert_eq!(Gradient::from_stops([RGB8::new(1, 2, 3)]).unwrap_err(),
                   InvalidArgument::Stops(1));
    }

    #[test]
    fn pixel_formats() {
        let work = RGB8::agenda(AgendaCategory::Work);
        assert_eq!(work.first(), RGB8::new(25, 190, 25));
        assert_eq!(work.last(), RGB8::new(75, 240, 75));
        assert_eq!(RGBA8::agenda(AgendaCategory::Work).first(),
                   RGBA8::new(25, 190, 25, 255));
        assert_eq!(RGB16::gradient_palette(GradientCategory::White).first(),
                   RGB16::new(65535, 65535, 65535));
        assert_eq!(RGBA16::from_rgb(RGB { r: 0., g: 0.5, b: 2. }),
                   RGBA16::new(0, 32768, 65535, 65535));
        assert_eq!(RGB8::new(45, 100, 215).css(), "#2d64d7");
        assert_eq!(RGB8::new(255, 0, 0).to_gray(), RGB8::new(76, 76, 76));
    }

    #[test]
    fn concurrent_queries() {
        let expected: Vec<_> = GradientCategory::ALL.iter()
            .map(|&cat| color_for_gradient(cat, 3, 7, true))
            .collect();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0 .. 4).map(|_| s.spawn(|| {
                GradientCategory::ALL.iter()
                    .map(|&cat| color_for_gradient(cat, 3, 7, true))
                    .collect::<Vec<_>>()
            })).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn parse_categories() {
        for cat in AgendaCategory::ALL {
            assert_eq!(cat.to_string().parse::<AgendaCategory>(), Ok(cat));
        }
        for cat in GradientCategory::ALL {
            assert_eq!(cat.to_string().parse::<GradientCategory>(), Ok(cat));
        }
        assert_eq!("Dead-Time".parse::<AgendaCategory>(),
                   Ok(AgendaCategory::DeadTime));
        assert_eq!("purple".parse::<GradientCategory>(),
                   Err(InvalidArgument::Category("purple".to_string())));
        assert_eq!(AgendaCategory::default(), AgendaCategory::Uncategorized);
        assert_eq!(GradientCategory::default(), GradientCategory::Uncategorized);
    }

    #[test]
    fn palette_names() {
        assert_eq!(Color::agenda(AgendaCategory::DeadTime).name(), "dead-time");
        for cat in GradientCategory::ALL {
            assert_eq!(gradient(cat).name(), cat.name());
            assert!(gradient(cat).len() >= 2);
        }
    }
}
