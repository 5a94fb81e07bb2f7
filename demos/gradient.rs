//! Write `gradient.html` showing every category shaded over a few
//! sequence lengths.  Gradient categories named on the command line
//! (e.g. `green red`) restrict the gradient section to them.
//!
//! Set `RUST_LOG=category_gradient=trace` to see palette lookups.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use tracing::info;
use tracing_subscriber::EnvFilter;
use category_gradient::{AgendaCategory, ColorRange, GradientCategory,
                        Palette, RGBColor};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.css())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray().css())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, palette: Palette<RGB8>,
           comment: &str) -> Result<(), Err> {
    for (count, width) in [(1, 40), (5, 40), (12, 17), (150, 2)] {
        for reversed in [false, true] {
            let colors: Vec<_> = palette.sequence(count, reversed).collect();
            let c = format!("{comment} ({count} items{})",
                            if reversed { ", reversed" } else { "" });
            table_of_colors(fh, &colors, width, &c)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let gradients: Vec<GradientCategory> = {
        let args: Vec<_> = env::args().skip(1).collect();
        if args.is_empty() { GradientCategory::ALL.to_vec() }
        else { args.iter().map(|a| a.parse::<GradientCategory>())
                    .collect::<Result<_, _>>()? }
    };

    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Category gradients</title>\n\
                  </head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Agenda</h3>")?;
    for cat in AgendaCategory::ALL {
        let p = RGB8::agenda(cat);
        table_of_colors(&mut fh, &p.colors(), 40,
                        &format!("{cat} ({} stops)", p.len()))?;
        palette(&mut fh, p, &cat.to_string())?;
    }

    writeln!(fh, "<h3>Gradients</h3>")?;
    for &cat in &gradients {
        let p = RGB8::gradient_palette(cat);
        table_of_colors(&mut fh, &p.colors(), 40,
                        &format!("{cat} ({} stops)", p.len()))?;
        palette(&mut fh, p, &cat.to_string())?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    info!(agenda = AgendaCategory::ALL.len(), gradients = gradients.len(),
          "wrote gradient.html");
    Ok(())
}
