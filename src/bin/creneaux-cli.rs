#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::Weekday;
use clap::{Args, Parser, Subcommand, ValueEnum};
use creneaux::{
    algebra::{classify, pairwise, sweep, split},
    hours::{bookable, BusinessHours, WeekOptions},
    io,
    model::Slot,
    offset::parse_offset,
    render::{RangeRenderer, SlotRenderer, TextRenderer},
    Overlap,
};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Algèbre de créneaux horaires en ligne de commande
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Format d'affichage des créneaux
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Export JSON du résultat
    #[arg(long, global = true)]
    out_json: Option<PathBuf>,

    /// Export CSV du résultat
    #[arg(long, global = true)]
    out_csv: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// `o: <début> d: <durée>`
    Text,
    /// `<début> → <fin>`
    Range,
}

/// Deux séquences, en ligne (`09:00+01:00,11:00+00:30`) ou en CSV.
#[derive(Args, Debug)]
struct Operands {
    #[arg(long, conflicts_with = "a_csv")]
    a: Option<String>,
    #[arg(long)]
    a_csv: Option<PathBuf>,
    #[arg(long, conflicts_with = "b_csv")]
    b: Option<String>,
    #[arg(long)]
    b_csv: Option<PathBuf>,
    /// Compare deux créneaux seuls (premier élément de chaque séquence)
    #[arg(long)]
    pairwise: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classer la relation entre deux créneaux
    Classify {
        #[arg(long)]
        a: Slot,
        #[arg(long)]
        b: Slot,
    },

    /// Différence A \ B
    Minus(Operands),

    /// Union fusionnée de A et B
    Union(Operands),

    /// Intersection de A et B
    Intersect(Operands),

    /// Découper un créneau en parts égales
    Split {
        #[arg(long)]
        slot: Slot,
        #[arg(long)]
        parts: i32,
    },

    /// Semaine type d'ouverture, pauses déduites
    Week {
        /// Heure d'ouverture (hh:mm)
        #[arg(long, default_value = "09:00")]
        open: String,
        /// Durée d'ouverture (hh:mm)
        #[arg(long, default_value = "08:00")]
        hours: String,
        /// Jours ouverts, ex. "mon,tue,wed"
        #[arg(long)]
        days: Option<String>,
        /// Pauses, relatives au lundi 00:00
        #[arg(long)]
        breaks: Option<String>,
        /// Découpe en rendez-vous de cette durée (hh:mm)
        #[arg(long)]
        slot_length: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let result = match &cli.cmd {
        Commands::Classify { a, b } => {
            let label = match classify(*a, *b) {
                Overlap::None => "none",
                Overlap::Intersect => "intersect",
                Overlap::Equal => "equal",
                Overlap::ProperSubset => "proper-subset",
            };
            println!("{label}");
            return Ok(());
        }
        Commands::Minus(ops) => apply(ops, pairwise::difference, sweep::difference)?,
        Commands::Union(ops) => apply(ops, pairwise::union, sweep::union)?,
        Commands::Intersect(ops) => apply(ops, pairwise::intersection, sweep::intersection)?,
        Commands::Split { slot, parts } => split(*slot, *parts)?,
        Commands::Week {
            open,
            hours,
            days,
            breaks,
            slot_length,
        } => {
            let mut opts = WeekOptions {
                open: parse_offset(open)?,
                duration: parse_offset(hours)?,
                ..WeekOptions::default()
            };
            if let Some(days) = days {
                opts.days = parse_days(days)?;
            }
            let week = BusinessHours::new(opts)?;
            let breaks = match breaks {
                Some(list) => parse_slots(list)?,
                None => Vec::new(),
            };
            let open = week.open_time(&breaks);
            match slot_length {
                Some(len) => bookable(&open, parse_offset(len)?)?,
                None => open,
            }
        }
    };

    emit(&cli, &result)
}

fn apply(
    ops: &Operands,
    single: fn(Slot, Slot) -> Vec<Slot>,
    sequence: fn(&[Slot], &[Slot]) -> Vec<Slot>,
) -> Result<Vec<Slot>> {
    let a = operand(ops.a.as_deref(), ops.a_csv.as_ref()).context("operand A")?;
    let b = operand(ops.b.as_deref(), ops.b_csv.as_ref()).context("operand B")?;

    if ops.pairwise {
        let (Some(x), Some(y)) = (a.first(), b.first()) else {
            bail!("--pairwise needs one slot on each side");
        };
        return Ok(single(*x, *y));
    }
    if !creneaux::is_canonical(&a) || !creneaux::is_canonical(&b) {
        bail!("slot sequences must be sorted by start and disjoint");
    }
    Ok(sequence(&a, &b))
}

fn operand(inline: Option<&str>, csv: Option<&PathBuf>) -> Result<Vec<Slot>> {
    match (inline, csv) {
        (Some(list), _) => parse_slots(list),
        (None, Some(path)) => io::import_slots_csv(path),
        (None, None) => Ok(Vec::new()),
    }
}

fn parse_slots(list: &str) -> Result<Vec<Slot>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Slot>().with_context(|| format!("invalid slot {s:?}")))
        .collect()
}

fn parse_days(list: &str) -> Result<Vec<Weekday>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Weekday>()
                .map_err(|_| anyhow::anyhow!("invalid weekday: {s}"))
        })
        .collect()
}

fn emit(cli: &Cli, slots: &[Slot]) -> Result<()> {
    if let Some(path) = &cli.out_json {
        io::export_slots_json(path, slots)?;
    }
    if let Some(path) = &cli.out_csv {
        io::export_slots_csv(path, slots)?;
    }
    let text = match cli.format {
        Format::Text => TextRenderer.render_all(slots),
        Format::Range => RangeRenderer.render_all(slots),
    };
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}
