use std::fs::File;
use std::io::BufWriter;

use artgen::{ArtGenerator, ArtProfile, ArtStyle, defaults, demo_circles, generate_document, write_shapes};
use camino::{Utf8Path, Utf8PathBuf};
use miette::{IntoDiagnostic, WrapErr};
use rayon::prelude::*;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(&out_dir(args.get(2))),
        "demo" => demo(&out_dir(args.get(2))),
        "table" => {
            let rows = match args.get(2) {
                Some(n) => n.parse::<usize>().into_diagnostic().wrap_err("ROWS must be a number")?,
                None => defaults::SMALL_SHAPE_COUNT as usize,
            };
            table(rows)
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            usage();
            std::process::exit(1);
        }
    }
}

fn usage() {
    eprintln!("Usage: cargo xtask <command>");
    eprintln!("Commands:");
    eprintln!("  gallery [DIR]   Render the forest, dusk and vivid scenes to DIR/<style>.html");
    eprintln!("  demo [DIR]      Render the fixed circle demo and a random small demo");
    eprintln!("  table [ROWS]    Print a table of randomly generated shapes");
}

fn out_dir(arg: Option<&String>) -> Utf8PathBuf {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    match arg {
        Some(dir) => Utf8PathBuf::from(dir),
        None => manifest_dir.join("../gallery"),
    }
}

fn create(path: &Utf8Path) -> miette::Result<BufWriter<File>> {
    let file = File::create(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to create {path}"))?;
    Ok(BufWriter::new(file))
}

/// Each style gets its own writer and its own sampler, so they run in parallel.
fn gallery(dir: &Utf8Path) -> miette::Result<()> {
    std::fs::create_dir_all(dir).into_diagnostic()?;

    ArtStyle::ALL.par_iter().try_for_each(|style| {
        let path = dir.join(format!("{}.html", style.name()));
        let counts = generate_document(create(&path)?, defaults::TITLE, &style.profile())?;
        tracing::info!(%style, %path, %counts, "wrote scene");
        Ok(())
    })
}

fn demo(dir: &Utf8Path) -> miette::Result<()> {
    std::fs::create_dir_all(dir).into_diagnostic()?;

    let fixed = dir.join("circles.html");
    let profile = ArtProfile::small_demo();
    write_shapes(create(&fixed)?, defaults::TITLE, profile.canvas, &demo_circles()?)?;
    tracing::info!(path = %fixed, "wrote fixed demo");

    let random = dir.join("small.html");
    let counts = generate_document(create(&random)?, defaults::TITLE, &profile)?;
    tracing::info!(path = %random, %counts, "wrote random demo");
    Ok(())
}

fn table(rows: usize) -> miette::Result<()> {
    let mut generator = ArtGenerator::new(ArtProfile::small_demo().ranges)?;
    println!("{}", generator.table(rows)?);
    Ok(())
}
