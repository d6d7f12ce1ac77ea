use std::sync::Arc;
use std::{env, error::Error, process};

use tracing_subscriber::EnvFilter;

use finestra::application::host::{EmptyContentSource, PassthroughExpander, ResponseMode};
use finestra::application::render::FragmentRenderService;
use finestra::config;
use finestra::domain::attrs::ShortcodeAttrs;

const USAGE: &str = "usage: render_fragment_dump <tag> <attrs-json> [content]";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let tag = args.next().expect(USAGE);
    let attrs_json = args.next().expect(USAGE);
    let content = args.next().unwrap_or_default();
    if args.next().is_some() {
        panic!("{USAGE}");
    }

    let attrs: ShortcodeAttrs = serde_json::from_str(&attrs_json)?;

    let settings = config::load(None)?;
    let service = FragmentRenderService::new(
        settings,
        Arc::new(EmptyContentSource),
        Arc::new(PassthroughExpander),
    );

    match service.render_tag(&tag, &attrs, &content, ResponseMode::Html) {
        Ok(html) => {
            println!("{html}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    }
}
