// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chordbook::config::{DiagramSettings, SongbookFile};
use chordbook::ui::{App, Editor, FretboardWidget};
use chordbook::voicing::split_root;
use chordbook::{Voicing, VoicingStore};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::{info, Level};

/// Cell size used when printing a diagram to stdout
const SHOW_WIDTH: u16 = 30;
const SHOW_HEIGHT: u16 = 12;

fn print_usage() {
    println!("chordbook - Guitar chord diagrams");
    println!();
    println!("Usage: chordbook [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --list [ROOT]           List chords, grouped by root or for one root");
    println!("  --show <NAME>           Print the diagram for a chord");
    println!("  --edit <NAME>           Edit a chord diagram in the terminal");
    println!("  --remove <NAME>         Remove a custom chord (requires --songbook)");
    println!("  --help                  Show this help message");
    println!();
    println!("Options:");
    println!("  --songbook <FILE>       Load custom chords from FILE (saved after --edit)");
    println!("  --verbose               Log debug output to stderr");
}

/// Options that may appear anywhere on the command line
struct Options {
    songbook: Option<PathBuf>,
    verbose: bool,
    rest: Vec<String>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options {
        songbook: None,
        verbose: false,
        rest: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" | "-v" => options.verbose = true,
            "--songbook" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--songbook requires a file path"))?;
                options.songbook = Some(PathBuf::from(path));
            }
            _ => options.rest.push(arg.clone()),
        }
    }
    Ok(options)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

/// Build the store, replaying custom chords from the songbook if given
fn load_store(songbook: Option<&PathBuf>) -> Result<(VoicingStore, Option<SongbookFile>)> {
    let mut store = VoicingStore::new();
    let Some(path) = songbook else {
        return Ok((store, None));
    };
    let file = SongbookFile::load_or_default(path)?;
    let installed = file.install_custom_chords(&mut store);
    info!(path = ?path, installed, "custom chords loaded");
    Ok((store, Some(file)))
}

fn list_chords(store: &VoicingStore, root: Option<&str>) {
    match root {
        Some(root) => {
            let chords = store.chords_by_root(root);
            if chords.is_empty() {
                println!("No chords for root {}", root);
            }
            for voicing in chords {
                let marker = if store.is_custom(&voicing.name) { "*" } else { " " };
                println!("{} {}", marker, voicing);
            }
        }
        None => {
            for (root, chords) in store.library() {
                let names: Vec<_> = chords.iter().map(|v| v.name.as_str()).collect();
                println!("{:<3} {}", root, names.join("  "));
            }
        }
    }
}

/// Render a diagram into a plain-text block
fn diagram_text(voicing: &Voicing, settings: DiagramSettings) -> String {
    let area = Rect::new(0, 0, SHOW_WIDTH, SHOW_HEIGHT);
    let mut buf = Buffer::empty(area);
    FretboardWidget::from_voicing(voicing)
        .settings(settings)
        .render(area, &mut buf);

    let mut text = String::new();
    for y in 0..area.height {
        let line: String = (0..area.width)
            .map(|x| buf.content()[(y * area.width + x) as usize].symbol())
            .collect();
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

fn show_chord(store: &VoicingStore, name: &str, settings: DiagramSettings) {
    let voicing = store.find_voicing(name);
    if voicing.is_blank() {
        println!("No voicing for {}", name);
        return;
    }
    let (root, suffix) = split_root(&voicing.name);
    let suffix = if suffix.is_empty() { "major" } else { suffix };
    println!("{}  (root {}, {})", voicing, root, suffix);
    print!("{}", diagram_text(&voicing, settings));
}

fn edit_chord(
    name: &str,
    store: &mut VoicingStore,
    songbook: Option<(&PathBuf, &mut SongbookFile)>,
) -> Result<()> {
    let settings = songbook
        .as_ref()
        .map(|(_, file)| file.settings)
        .unwrap_or_default();
    let seed = store.find_voicing(name);
    let mut editor = Editor::new(name, &seed, settings);

    {
        let mut app = App::new()?;
        app.run(&mut editor, store)?;
    }

    if let Some((path, file)) = songbook {
        file.capture_custom_chords(store);
        file.save(path)?;
        println!("Saved {} custom chords to {:?}", file.custom_chords.len(), path);
    }
    if let Some(status) = editor.status() {
        println!("{}", status);
    }
    Ok(())
}

/// Drop a custom chord from the songbook file.
///
/// Returns whether an entry was removed; built-in names never are.
fn remove_custom_chord(name: &str, path: &PathBuf) -> Result<bool> {
    let (mut store, file) = load_store(Some(path))?;
    let mut file = file.unwrap_or_default();
    let removed = store.remove_chord(name.trim());
    if removed {
        file.capture_custom_chords(&store);
        file.save(path)?;
    }
    Ok(removed)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_options(&args)?;
    init_logging(options.verbose);

    let Some(command) = options.rest.first() else {
        println!("chordbook - Guitar chord diagrams");
        println!("Run with --help for usage information");
        return Ok(());
    };
    let argument = options.rest.get(1).map(String::as_str);

    match command.as_str() {
        "--list" => {
            let (store, _) = load_store(options.songbook.as_ref())?;
            list_chords(&store, argument);
        }
        "--show" => {
            let name = argument.ok_or_else(|| anyhow!("--show requires a chord name"))?;
            let (store, file) = load_store(options.songbook.as_ref())?;
            let settings = file.map(|f| f.settings).unwrap_or_default();
            show_chord(&store, name, settings);
        }
        "--edit" => {
            let name = argument.ok_or_else(|| anyhow!("--edit requires a chord name"))?;
            let (mut store, mut file) = load_store(options.songbook.as_ref())?;
            let songbook = options.songbook.as_ref().zip(file.as_mut());
            edit_chord(name, &mut store, songbook)?;
        }
        "--remove" => {
            let name = argument.ok_or_else(|| anyhow!("--remove requires a chord name"))?;
            let path = options
                .songbook
                .as_ref()
                .ok_or_else(|| anyhow!("--remove requires --songbook <FILE>"))?;
            if remove_custom_chord(name, path)? {
                println!("Removed {} from {:?}", name, path);
            } else {
                println!("{} is not a custom chord", name);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
