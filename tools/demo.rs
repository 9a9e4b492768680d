//! Render a callout to SVG on stdout.
//!
//! Usage: `callout-demo [attrs-file] [width] [height]`
//!
//! The attrs file is a strict `name = value` block; bad entries are reported
//! with source spans. Without arguments the default style is rendered at
//! 240x160.

use callout::{Callout, CalloutStyle};
use kurbo::Size;

fn main() -> miette::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let style = match args.first() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| miette::miette!("reading {path}: {e}"))?;
            CalloutStyle::parse(path, &text)?
        }
        None => CalloutStyle::default(),
    };

    let width = parse_dim(args.get(1), 240.0)?;
    let height = parse_dim(args.get(2), 160.0)?;

    let callout = Callout::new(style);
    print!("{}", callout.to_svg(Size::new(width, height)));
    Ok(())
}

fn parse_dim(arg: Option<&String>, default: f64) -> miette::Result<f64> {
    match arg {
        Some(raw) => raw
            .parse()
            .map_err(|e| miette::miette!("bad dimension {raw:?}: {e}")),
        None => Ok(default),
    }
}
