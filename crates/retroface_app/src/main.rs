//! Retroface demo binary
//!
//! Drives the watch face against the headless host and prints each
//! frame's paint directives. Run with:
//!
//! ```text
//! cargo run -p retroface_app -- --frames 3
//! cargo run -p retroface_app -- --list-themes
//! cargo run -p retroface_app -- --theme 1 --ambient
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use retroface_app::HeadlessSession;
use retroface_config::{FilePreferences, ThemePicker};
use retroface_face::host::{Clock, SystemClock};

#[derive(Parser, Debug)]
#[command(name = "retroface", about = "Drive the retroface watch face headlessly")]
struct Args {
    /// Asset directory containing themes.json and fonts
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))]
    assets: String,

    /// Preference file for the selected theme
    #[arg(long, default_value = "retroface-prefs.toml")]
    prefs: String,

    /// Surface width in pixels
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 320)]
    height: u32,

    /// Number of frames to render
    #[arg(long, default_value_t = 3)]
    frames: u32,

    /// Render in ambient mode
    #[arg(long)]
    ambient: bool,

    /// Select and persist a theme before rendering
    #[arg(long)]
    theme: Option<usize>,

    /// List the bundled themes and exit
    #[arg(long)]
    list_themes: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let prefs = FilePreferences::new(&args.prefs);

    let mut session = HeadlessSession::new(&args.assets, &prefs, SystemClock.now())
        .context("assembling watch face")?;

    if args.list_themes {
        let picker = ThemePicker::new(session.engine().catalog());
        for row in picker.rows() {
            println!("{}: {}", row.index, row.name);
        }
        return Ok(());
    }

    if let Some(index) = args.theme {
        let picker = ThemePicker::new(session.engine().catalog());
        picker.commit(index, &prefs).context("committing theme")?;
        session.engine_mut().set_theme(index)?;
    }

    session.start(args.width, args.height);
    if args.ambient {
        session.engine_mut().on_ambient_mode_changed(true);
    }

    for n in 0..args.frames {
        let frame = session.step()?;
        println!("frame {n}:");
        for command in &frame {
            println!("  {command:?}");
        }
    }

    Ok(())
}
