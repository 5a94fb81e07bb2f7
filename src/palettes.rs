// Written by target/debug/category-gradient-tools

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

// Agenda palettes (number of palettes: 6)

lazy_static! {
  pub(crate) static ref AGENDA_DEAD_TIME: PaletteData = PaletteData {
    name: "dead-time",
    rgb: vec![rgb8(65, 65, 65), rgb8(121, 121, 121)],
  };
}

lazy_static! {
  pub(crate) static ref AGENDA_EXERCISE: PaletteData = PaletteData {
    name: "exercise",
    rgb: vec![rgb8(215, 25, 25), rgb8(255, 105, 65)],
  };
}

lazy_static! {
  pub(crate) static ref AGENDA_RECUPERATE: PaletteData = PaletteData {
    name: "recuperate",
    rgb: vec![rgb8(255, 255, 255), rgb8(236, 236, 236)],
  };
}

lazy_static! {
  pub(crate) static ref AGENDA_SOCIAL: PaletteData = PaletteData {
    name: "social",
    rgb: vec![rgb8(45, 100, 215), rgb8(117, 172, 255)],
  };
}

lazy_static! {
  pub(crate) static ref AGENDA_UNCATEGORIZED: PaletteData = PaletteData {
    name: "uncategorized",
    rgb: vec![rgb8(200, 200, 200), rgb8(236, 236, 236)],
  };
}

lazy_static! {
  pub(crate) static ref AGENDA_WORK: PaletteData = PaletteData {
    name: "work",
    rgb: vec![rgb8(25, 190, 25), rgb8(75, 240, 75)],
  };
}

// Gradient palettes (number of palettes: 6)

lazy_static! {
  pub(crate) static ref GRADIENT_BLACK: PaletteData = PaletteData {
    name: "black",
    rgb: vec![rgb8(0, 0, 0), rgb8(65, 65, 65), rgb8(121, 121, 121)],
  };
}

lazy_static! {
  pub(crate) static ref GRADIENT_BLUE: PaletteData = PaletteData {
    name: "blue",
    rgb: vec![rgb8(45, 100, 215), rgb8(81, 136, 235), rgb8(117, 172, 255)],
  };
}

lazy_static! {
  pub(crate) static ref GRADIENT_GREEN: PaletteData = PaletteData {
    name: "green",
    rgb: vec![rgb8(25, 190, 25), rgb8(75, 240, 75)],
  };
}

lazy_static! {
  pub(crate) static ref GRADIENT_RED: PaletteData = PaletteData {
    name: "red",
    rgb: vec![rgb8(215, 25, 25), rgb8(235, 65, 45), rgb8(255, 105, 65)],
  };
}

lazy_static! {
  pub(crate) static ref GRADIENT_UNCATEGORIZED: PaletteData = PaletteData {
    name: "uncategorized",
    rgb: vec![rgb8(200, 200, 200), rgb8(236, 236, 236)],
  };
}

lazy_static! {
  pub(crate) static ref GRADIENT_WHITE: PaletteData = PaletteData {
    name: "white",
    rgb: vec![rgb8(255, 255, 255), rgb8(236, 236, 236)],
  };
}

