use std::{io, ops::RangeInclusive, path::PathBuf};

use anyhow::Context;
use emosent_data::Column;
use rand::{Rng, SeedableRng as _};
use rand_distr::{Dirichlet, Distribution as _, LogNormal, Normal};
use rand_pcg::Pcg32;

use crate::util::Output;

/// Unicode blocks the generated emojis are drawn from, in order.
static EMOJI_BLOCKS: [(&str, RangeInclusive<u32>); 3] = [
    ("Emoticons", 0x1F600..=0x1F64F),
    ("Miscellaneous Symbols and Pictographs", 0x1F300..=0x1F5FF),
    ("Supplemental Symbols and Pictographs", 0x1F900..=0x1F9FF),
];

const MIN_OCCURRENCES: f64 = 5.0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of emoji rows to generate
    #[arg(long, default_value_t = 200)]
    rows: usize,
    /// Random seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg { rows, seed, output } = arg;
    let seed = seed.unwrap_or_else(|| rand::rng().random());

    let mut output = Output::from_output_path(output.clone())?;
    eprintln!("Generating {rows} emojis (seed {seed})...");
    write_dataset(&mut output, *rows, seed)
        .with_context(|| format!("Failed to write dataset to {}", output.display_path()))?;
    output.finish()?;
    eprintln!("Dataset written to {}", output.display_path());

    Ok(())
}

/// One synthetic row, holding every source column.
#[derive(Debug, Clone)]
struct GeneratedEmoji {
    glyph: char,
    block: &'static str,
    occurrences: f64,
    position: f64,
    shares: [f64; 3],
}

impl GeneratedEmoji {
    fn cell(&self, column: Column) -> String {
        let [negative, neutral, positive] = self.shares;
        match column {
            Column::Char => self.glyph.to_string(),
            Column::Image | Column::SentimentBar => String::new(),
            Column::UnicodeCodepoint => format!("0x{:x}", u32::from(self.glyph)),
            Column::Occurrences => self.occurrences.to_string(),
            Column::Position => format!("{:.3}", self.position),
            Column::Negative => format!("{negative:.3}"),
            Column::Neutral => format!("{neutral:.3}"),
            Column::Positive => format!("{positive:.3}"),
            Column::UnicodeName => format!("EMOJI {:04X}", u32::from(self.glyph)),
            Column::UnicodeBlock => self.block.to_owned(),
        }
    }
}

struct EmojiGenerator {
    rng: Pcg32,
    positive_leaning: Dirichlet<f64, 3>,
    negative_leaning: Dirichlet<f64, 3>,
    occurrences: LogNormal<f64>,
    position_noise: Normal<f64>,
}

impl EmojiGenerator {
    fn new(seed: u64) -> anyhow::Result<Self> {
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            positive_leaning: Dirichlet::new([1.0, 2.0, 3.0])
                .context("invalid Dirichlet concentration")?,
            negative_leaning: Dirichlet::new([3.0, 2.0, 1.0])
                .context("invalid Dirichlet concentration")?,
            occurrences: LogNormal::new(6.0, 1.5).context("invalid log-normal parameters")?,
            position_noise: Normal::new(0.0, 0.15).context("invalid normal parameters")?,
        })
    }

    fn generate(&mut self, glyph: char, block: &'static str) -> GeneratedEmoji {
        let shares = if self.rng.random_bool(0.5) {
            self.positive_leaning.sample(&mut self.rng)
        } else {
            self.negative_leaning.sample(&mut self.rng)
        };
        let sentiment = shares[2] - shares[0];
        let position =
            (0.5 + 0.15 * sentiment + self.position_noise.sample(&mut self.rng)).clamp(0.0, 1.0);
        let occurrences = self
            .occurrences
            .sample(&mut self.rng)
            .round()
            .max(MIN_OCCURRENCES);
        GeneratedEmoji {
            glyph,
            block,
            occurrences,
            position,
            shares,
        }
    }
}

/// Code points of the generated emojis, cycling through [`EMOJI_BLOCKS`].
fn emoji_glyphs() -> impl Iterator<Item = (char, &'static str)> {
    EMOJI_BLOCKS
        .iter()
        .flat_map(|(block, range)| {
            range
                .clone()
                .filter_map(char::from_u32)
                .map(move |glyph| (glyph, *block))
        })
        .cycle()
}

fn write_dataset<W>(output: W, rows: usize, seed: u64) -> anyhow::Result<()>
where
    W: io::Write,
{
    let mut generator = EmojiGenerator::new(seed)?;
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(Column::ALL.map(Column::source_header))?;
    for (glyph, block) in emoji_glyphs().take(rows) {
        let emoji = generator.generate(glyph, block);
        writer.write_record(Column::ALL.map(|column| emoji.cell(column)))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn generate_text(rows: usize, seed: u64) -> String {
        let mut buf = Vec::new();
        write_dataset(&mut buf, rows, seed).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_generated_dataset_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(generate_text(200, 7).as_bytes()).unwrap();
        file.flush().unwrap();

        let table = emosent_data::load(file.path()).unwrap();
        assert_eq!(table.len(), 200);
        for record in &table {
            assert!(record.occurrences >= MIN_OCCURRENCES);
            assert!((0.0..=1.0).contains(&record.position));
            let total = record.negative + record.neutral + record.positive;
            assert!((total - 1.0).abs() < 0.01, "shares sum to {total}");
        }
        assert!(table.iter().any(|r| r.positive_flag));
        assert!(table.iter().any(|r| !r.positive_flag));
    }

    #[test]
    fn test_source_header() {
        let text = generate_text(3, 1);
        let header = text.lines().next().unwrap();
        assert_eq!(header, Column::source_header_line());
        assert!(text.lines().nth(1).unwrap().starts_with("😀,,0x1f600,"));
    }

    #[test]
    fn test_same_seed_same_output() {
        assert_eq!(generate_text(20, 42), generate_text(20, 42));
        assert_ne!(generate_text(20, 42), generate_text(20, 43));
    }

    #[test]
    fn test_zero_rows() {
        let text = generate_text(0, 1);
        let table = emosent_data::load_from_reader(text.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_glyphs_wrap_around() {
        let total = EMOJI_BLOCKS
            .iter()
            .map(|(_, range)| range.clone().count())
            .sum::<usize>();
        let glyphs = emoji_glyphs().take(total + 1).collect::<Vec<_>>();
        assert_eq!(glyphs[total], glyphs[0]);
    }
}
