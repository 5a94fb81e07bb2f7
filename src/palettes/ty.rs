use std::{fmt, str::FromStr};
pub(crate) use rgb::RGB;
use crate::InvalidArgument;

/// A stop-table: the ordered colors a gradient runs through.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGB<f64>>, // Invariant: length ≥ 2
}

/// Normalize 8-bit channels to \[0, 1\].
pub(crate) fn rgb8(r: u8, g: u8, b: u8) -> RGB<f64> {
    RGB { r: r as f64 / 255., g: g as f64 / 255., b: b as f64 / 255. }
}

macro_rules! category {
    (@count) => { 0 };
    (@count $x: ident $($xs: ident)*) => { 1 + category!(@count $($xs)*) };
    ($(#[$meta: meta])* $ty: ident {
        $($(#[$vmeta: meta])* $variant: ident => $name: literal,)*
    }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde",
                   derive(serde::Serialize, serde::Deserialize),
                   serde(rename_all = "kebab-case"))]
        pub enum $ty {
            #[default]
            $($(#[$vmeta])* $variant,)*
        }

        impl $ty {
            /// All categories, in declaration order.
            pub const ALL: [$ty; category!(@count $($variant)*)] =
                [$($ty::$variant),*];

            /// The name used by [`Display`](fmt::Display) and
            /// [`FromStr`].
            pub fn name(self) -> &'static str {
                match self { $($ty::$variant => $name,)* }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = InvalidArgument;

            /// Parse a category name, ignoring ASCII case.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL.iter().copied()
                    .find(|c| c.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| InvalidArgument::Category(s.to_string()))
            }
        }
    };
}

category! {
    /// Kind of agenda item.  Each kind is shaded along its own two-stop
    /// palette.
    AgendaCategory {
        /// Neutral gray, also used for anything not categorized.
        Uncategorized => "uncategorized",
        Recuperate => "recuperate",
        Work => "work",
        Social => "social",
        Exercise => "exercise",
        DeadTime => "dead-time",
    }
}

category! {
    /// Named color gradient.
    GradientCategory {
        /// Neutral gray ramp, the fallback palette.
        Uncategorized => "uncategorized",
        White => "white",
        Green => "green",
        Blue => "blue",
        Red => "red",
        Black => "black",
    }
}
