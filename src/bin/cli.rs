//! chipseq CLI: headless playback and WAV export.
//!
//! Usage:
//!   cs-cli                       play the bundled demo tune
//!   cs-cli song.h                play a song from a C array or raw file
//!   cs-cli song.bin --wav out.wav

use anyhow::{Context, Result};
use clap::Parser;
use cs_master::{Controller, PlaybackConfig, TickRate, DEFAULT_VOICES};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cs-cli", version, about = "Play or render chipseq songs")]
struct Args {
    /// Song file, raw bytes or hex text. Plays the demo tune when omitted.
    song: Option<PathBuf>,

    /// Render to a WAV file instead of playing
    #[arg(long, value_name = "OUT")]
    wav: Option<PathBuf>,

    /// Stop after this many seconds
    #[arg(long, default_value_t = 300)]
    seconds: u32,

    /// Sample rate for WAV rendering
    #[arg(
        long,
        value_name = "HZ",
        default_value_t = 44100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    rate: u32,

    /// Sequencer ticks per second (60 NTSC, 50 PAL)
    #[arg(
        long,
        value_name = "HZ",
        default_value_t = TickRate::NTSC.hz(),
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    tick_rate: u32,

    /// Restart the song when it ends
    #[arg(long = "loop")]
    looping: bool,

    /// Log sequencer events
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = PlaybackConfig {
        sample_rate: args.rate,
        tick_rate: TickRate(args.tick_rate),
        looping: args.looping,
        max_seconds: args.seconds,
    };
    let mut ctrl = Controller::new(config);

    match &args.song {
        Some(path) => {
            let data =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            ctrl.load(&data)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            println!("Song:     {}", path.display());
        }
        None => println!("Song:     demo"),
    }

    let summary = ctrl.summary();
    print!("{}", summary);
    println!(
        "Length:   {:.1}s at {} Hz",
        config.tick_rate.ticks_to_millis(summary.ticks) as f64 / 1000.0,
        config.tick_rate.hz()
    );
    println!();

    if summary.overflows(DEFAULT_VOICES) {
        tracing::warn!(
            "chords of {} notes exceed {} voices, extra notes steal channels",
            summary.longest_chord,
            DEFAULT_VOICES
        );
    }
    if !summary.terminated {
        tracing::warn!("song has no end marker");
    }

    match &args.wav {
        Some(wav) => render_to_wav(&ctrl, wav),
        None => {
            play_audio(&mut ctrl, Duration::from_secs(args.seconds.into()));
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn play_audio(ctrl: &mut Controller, limit: Duration) {
    ctrl.play();
    println!("Playing...");

    let started = Instant::now();
    while ctrl.is_playing() {
        if started.elapsed() >= limit {
            ctrl.stop();
            break;
        }
        if let Some(tick) = ctrl.position() {
            print!("\rTick: {:6}", tick);
            let _ = std::io::stdout().flush();
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    println!("\rDone.          ");
}

fn render_to_wav(ctrl: &Controller, path: &Path) -> Result<()> {
    let config = ctrl.config();
    println!("Rendering to {} at {} Hz...", path.display(), config.sample_rate);

    let wav = ctrl.render_to_wav();
    println!("Rendered {} bytes", wav.len());

    fs::write(path, &wav).with_context(|| format!("failed to write {}", path.display()))?;

    println!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["cs-cli"]).unwrap();
        assert_eq!(args.rate, 44100);
        assert_eq!(args.tick_rate, 60);
        assert!(args.song.is_none());
    }

    #[test]
    fn zero_rates_are_rejected() {
        assert!(Args::try_parse_from(["cs-cli", "--rate", "0"]).is_err());
        assert!(Args::try_parse_from(["cs-cli", "--tick-rate", "0"]).is_err());
    }

    #[test]
    fn pal_tick_rate() {
        let args = Args::try_parse_from(["cs-cli", "song.h", "--tick-rate", "50", "--loop"]).unwrap();
        assert_eq!(args.tick_rate, 50);
        assert!(args.looping);
    }
}
