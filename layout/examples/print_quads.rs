//! Lays out text with a built-in font or an atlas descriptor and prints the quads.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p bitfont-layout --example print_quads -- mono "Hello, World!"
//! cargo run -p bitfont-layout --example print_quads -- path/to/atlas.toml "text" 1.5
//! ```

use std::env;

use anyhow::{Context, Result, bail};
use bitfont_atlas::{FontAtlas, FontId};
use bitfont_geometry::Point;
use bitfont_layout::{LayoutRequest, QuadBatch};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (font, text, kerning_offset) = match args.as_slice() {
        [font, text] => (font, text, 0.0),
        [font, text, kerning] => (
            font,
            text,
            kerning
                .parse::<f64>()
                .with_context(|| format!("Invalid kerning offset `{kerning}`"))?,
        ),
        _ => bail!("Usage: print_quads <mono|sans|atlas.toml> <text> [kerning-offset]"),
    };

    let loaded;
    let atlas = match font.parse::<FontId>() {
        Ok(id) => FontAtlas::builtin(id),
        Err(_) => {
            loaded = FontAtlas::load(font)?;
            &loaded
        }
    };

    let mut pen = Point::ZERO;
    let mut batch = QuadBatch::new();
    for line in text.lines() {
        let result = LayoutRequest::new(atlas, line)
            .with_pen(pen)
            .with_kerning_offset(kerning_offset)
            .layout();

        for quad in &result {
            let bounds = quad.bounds();
            println!(
                "{:?}\t[{}, {}] x [{}, {}]\tuv {:?} .. {:?}",
                char::from_u32(quad.char_code).unwrap_or(char::REPLACEMENT_CHARACTER),
                bounds.left,
                bounds.right,
                bounds.bottom,
                bounds.top,
                quad.uvs[0],
                quad.uvs[2],
            );
        }
        println!("pen\t({}, {})", result.pen().x, result.pen().y);

        batch.extend_from_layout(&result);
        pen = result.next_line(atlas.metrics().line_height);
    }

    println!(
        "{} quads, {} vertex bytes, {} indices",
        batch.quads(),
        batch.vertex_bytes().len(),
        batch.indices().len()
    );

    Ok(())
}
