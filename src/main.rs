// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Context, Result};
use ophis::config::{DisplayStyle, TheoryConfig};
use ophis::music::{essential_set, Chroma, Interval, Pitch, Preference};
use std::env;
use tracing::{debug, Level};

fn print_usage() {
    println!("ophis - Symbolic music theory");
    println!();
    println!("Usage: ophis [--config <PATH>] [--prefer <PREF>] [--verbose] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --chroma <NAME>         Describe a chroma (e.g. D#, EFLAT, fis)");
    println!("  --enharmonics <NAME> [--no-doubles]");
    println!("                          List the enharmonic spellings of a chroma,");
    println!("                          optionally without double accidentals");
    println!("  --interval <LOW> <HIGH> Name the interval from LOW up to HIGH");
    println!("                          (chroma names, or pitches such as C#0)");
    println!("  --augment <NAME> <N>    Raise a chroma by N half-steps or an");
    println!("                          interval short name (M3, P5); negative N lowers");
    println!("  --pitch <NAME>          Describe a pitch (e.g. C0, BFLAT-1)");
    println!("  --version               Show version information");
    println!("  --help                  Show this help message");
    println!();
    println!("Options:");
    println!("  --config <PATH>         Load spelling and display settings (YAML or TOML)");
    println!("  --prefer <PREF>         Spell every result with sharp, flat or contextual");
    println!("  --verbose               Log spelling fallbacks to stderr");
}

/// Global flags stripped from the argument list
struct Options {
    config: TheoryConfig,
    verbose: bool,
    command: Vec<String>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut config_path = None;
    let mut preference = None;
    let mut verbose = false;
    let mut command = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                config_path = Some(path.clone());
            }
            "--prefer" => {
                let name = iter
                    .next()
                    .ok_or_else(|| anyhow!("--prefer requires sharp, flat or contextual"))?;
                let parsed = Preference::from_name(name)
                    .ok_or_else(|| anyhow!("Invalid spelling preference: {}", name))?;
                preference = Some(parsed);
            }
            _ => command.push(arg.clone()),
        }
    }

    let mut config = match config_path {
        Some(path) => TheoryConfig::load(&path)?,
        None => TheoryConfig::default(),
    };
    if let Some(preference) = preference {
        config.spelling.augment = preference;
        config.spelling.diminish = preference;
        config.spelling.reduce = preference;
    }
    Ok(Options {
        config,
        verbose,
        command,
    })
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn require<'a>(command: &'a [String], count: usize, usage: &str) -> Result<&'a [String]> {
    if command.len() < count + 1 {
        return Err(anyhow!("{} requires {}", command[0], usage));
    }
    Ok(&command[1..=count])
}

fn parse_chroma(name: &str) -> Result<Chroma> {
    Chroma::from_name(name).with_context(|| format!("Invalid chroma: {}", name))
}

fn describe_chroma(chroma: Chroma, config: &TheoryConfig) {
    let style = config.display.style;
    println!("{}", style.render(&chroma));
    println!("  name:      {}", chroma.name());
    println!("  value:     {}", chroma.value());
    println!("  letter:    {} ({})", chroma.letter(), chroma.base_num());
    println!("  modifier:  {:+}", chroma.mod_val());
    println!("  syllable:  {}", chroma.syllable());
    println!("  ascii:     {}", chroma.ascii());
    println!("  unicode:   {}", chroma.unicode());
    println!("  verbose:   {}", chroma.verbose());
    println!("  lilypond:  {}", chroma.lilypond());
}

fn show_enharmonics(chroma: Chroma, include_doubles: bool, config: &TheoryConfig) -> Result<()> {
    let style = config.display.style;
    let set = chroma.enharmonics_with(true, include_doubles);
    let names: Vec<String> = set.iter().map(|c| style.render(&c)).collect();
    println!("{}", names.join(", "));

    let preference = config.spelling.reduce;
    let canonical = set.enharmonic_reduce(preference)?;
    println!("canonical ({}): {}", preference, style.render(&canonical));
    Ok(())
}

fn show_interval(low: &str, high: &str, style: DisplayStyle) -> Result<()> {
    if let (Ok(low), Ok(high)) = (Pitch::from_name(low), Pitch::from_name(high)) {
        let interval = high.interval_from(low);
        debug!("{:?} to {:?} is {:?}", low, high, interval);
        println!(
            "{} ({} half-steps)",
            interval.short_name(),
            interval.half_steps()
        );
        return Ok(());
    }

    let low = parse_chroma(low)?;
    let high = parse_chroma(high)?;
    let interval = high - low;
    println!(
        "{} ({} half-steps)",
        style.render(&interval),
        interval.half_steps()
    );
    Ok(())
}

fn show_augment(name: &str, amount: &str, config: &TheoryConfig) -> Result<()> {
    let chroma = parse_chroma(name)?;
    let style = config.display.style;

    let result = match amount.parse::<i32>() {
        Ok(n) if n >= 0 => chroma.augment_with(n, config.spelling.augment),
        Ok(n) => chroma.diminish_with(-n, config.spelling.diminish),
        Err(_) => {
            let interval = Interval::from_short_name(amount)
                .with_context(|| format!("Invalid half-step count or interval: {}", amount))?;
            chroma.augment_by(interval)
        }
    };
    println!("{}", style.render(&result));
    Ok(())
}

fn describe_pitch(name: &str, style: DisplayStyle) -> Result<()> {
    let pitch = Pitch::from_name(name).with_context(|| format!("Invalid pitch: {}", name))?;
    println!("{}", style.render(&pitch));
    println!("  value:     {}", pitch.value());
    println!("  octave:    {}", pitch.octave());
    println!("  chroma:    {}", pitch.chroma().name());
    println!("  lilypond:  {}", DisplayStyle::Lilypond.render(&pitch));
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_options(&args)?;
    init_logging(options.verbose);
    debug!("essential set holds {} chroma", essential_set().len());

    let command = &options.command;
    if command.is_empty() {
        println!("ophis - Symbolic music theory");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let config = &options.config;
    match command[0].as_str() {
        "--chroma" => {
            let args = require(command, 1, "a chroma name")?;
            describe_chroma(parse_chroma(&args[0])?, config);
        }
        "--enharmonics" => {
            let args = require(command, 1, "a chroma name")?;
            let include_doubles = match command.get(2).map(String::as_str) {
                None => true,
                Some("--no-doubles") => false,
                Some(other) => return Err(anyhow!("Unexpected argument: {}", other)),
            };
            show_enharmonics(parse_chroma(&args[0])?, include_doubles, config)?;
        }
        "--interval" => {
            let args = require(command, 2, "two chroma or pitch names")?;
            show_interval(&args[0], &args[1], config.display.style)?;
        }
        "--augment" => {
            let args = require(command, 2, "a chroma name and a distance")?;
            show_augment(&args[0], &args[1], config)?;
        }
        "--pitch" => {
            let args = require(command, 1, "a pitch name")?;
            describe_pitch(&args[0], config.display.style)?;
        }
        "--version" | "-V" => {
            println!("ophis {}", env!("CARGO_PKG_VERSION"));
        }
        "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
