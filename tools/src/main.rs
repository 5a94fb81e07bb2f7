// Generates ../src/palettes.rs from the stop-tables in palettes.hjson.
// Run from the tools/ directory.

use std::{string::String,
          collections::BTreeMap,
          env,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value::{self, *};

type Stops = Vec<[u8; 3]>;

/// Palettes of one category family, keyed by category name.
type Palettes = BTreeMap<String, Stops>;

/// Convert colors such as "rgb(45,100,215)" to `[45, 100, 215]`.
fn parse_color(s: &str) -> [u8; 3] {
    if !(s.starts_with("rgb(") && s.ends_with(')')) {
        panic!("category-gradient-tools: not a color “{}”", s)
    }
    let mut colors = [0; 3];
    let channels: Vec<_> = s[4 .. s.len() - 1].split(',').collect();
    if channels.len() != 3 {
        panic!("category-gradient-tools: expected 3 channels in “{}”", s)
    }
    for (i, c) in channels.into_iter().enumerate() {
        let c = match str::parse::<u8>(c.trim()) {
            Ok(c) => c,
            Err(_) => panic!("category-gradient-tools: bad channel in “{}”", s) };
        colors[i] = c
    }
    colors
}

fn palettes_of_json(json: Option<&Value>, family: &str) -> Palettes {
    let mut map = Palettes::new();
    let palettes = match json {
        Some(Object(m)) => m,
        _ => panic!("category-gradient-tools: missing object “{family}”"),
    };
    for (name, stops) in palettes.iter() {
        let stops = match stops {
            Array(a) => a,
            _ => panic!("category-gradient-tools: {family}.{name} is not \
                         a list of colors") };
        let stops: Stops = stops.iter()
            .map(|v| match v {
                String(c) => parse_color(c),
                _ => panic!("category-gradient-tools: {v:?}") })
            .collect();
        if stops.len() < 2 {
            panic!("category-gradient-tools: {family}.{name} needs at least \
                    2 stops, got {}", stops.len())
        }
        map.insert(name.clone(), stops);
    }
    map
}

fn ident(family: &str, name: &str) -> String {
    format!("{}_{}", family, name.replace('-', "_")).to_ascii_uppercase()
}

fn write_palettes(fh: &mut impl Write, family: &str,
                  palettes: &Palettes) -> std::io::Result<()> {
    for (name, stops) in palettes {
        write!(fh, "lazy_static! {{\n  \
                    pub(crate) static ref {}: PaletteData = PaletteData {{\n    \
                    name: \"{name}\",\n    \
                    rgb: vec![",
               ident(family, name))?;
        for (i, [r, g, b]) in stops.iter().enumerate() {
            if i > 0 { write!(fh, ", ")?; }
            write!(fh, "rgb8({r}, {g}, {b})")?;
        }
        writeln!(fh, "],\n  }};\n}}\n")?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let fh_json = File::open("palettes.hjson")?;
    let json: Value = serde_hjson::from_reader(fh_json)?;
    let agenda = palettes_of_json(json.find("agenda"), "agenda");
    let gradient = palettes_of_json(json.find("gradient"), "gradient");

    let mut fh = BufWriter::new(File::create("../src/palettes.rs")?);
    writeln!(fh, "// Written by {}\n\n\
                  use lazy_static::lazy_static;\n\
                  pub(crate) mod ty;\n\
                  use ty::*;",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "\n// Agenda palettes (number of palettes: {})\n",
             agenda.len())?;
    write_palettes(&mut fh, "agenda", &agenda)?;
    writeln!(fh, "// Gradient palettes (number of palettes: {})\n",
             gradient.len())?;
    write_palettes(&mut fh, "gradient", &gradient)?;
    Ok(())
}
