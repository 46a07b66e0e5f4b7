//! A glider on a 6x6 grid, printed to the console and saved as XML and
//! HTML.
//!
//! ```text
//! cargo run -p lifegrid --example demo [OUTPUT_DIR]
//! ```
//!
//! Set `RUST_LOG=debug` to see the driver's progress.

use std::error::Error;
use std::path::PathBuf;

use lifegrid::prelude::*;

const WIDTH: u32 = 6;
const HEIGHT: u32 = 6;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = std::env::args().nth(1).map_or_else(PathBuf::new, PathBuf::from);
    let mut xml = WrittenOnCompleted::new(out_dir.join("test.xml"), XmlRepresentation::new());
    let mut html = WrittenOnCompleted::new(out_dir.join("test.html"), HtmlRepresentation::new());

    let config = EvolutionConfig::default()
        .size(WIDTH, HEIGHT)
        .rule(LifeRule::Conway)
        .populate_with_pattern(Pattern::glider().centered(WIDTH, HEIGHT))
        .observe(PrintToStream::stdout())
        .observe(&mut xml)
        .observe(&mut html)
        .stop(WhenRepeated::new().or(WhenStable::new()).or(WhenEmpty));

    let last = Evolution::new(config)?.evolve(100)?;
    if let Some(last) = last {
        log::info!("final population: {}", last.alive_count());
    }

    for (path, error) in [(xml.path(), xml.error()), (html.path(), html.error())] {
        if let Some(e) = error {
            log::error!("{} was not saved: {e}", path.display());
        }
    }
    Ok(())
}
