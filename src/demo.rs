use std::io::Write;

use anyhow::{Context, Result};

use crate::completion::CompletionService;
use crate::conversion::{self, ConversionKind, DemoConfig};

pub const COMPLETIONS_PER_ITEM: u32 = 3;

pub const ROMAJI_SENTENCES: &[&str] = &[
    "watashi no namae ha nakano desu .",
    "watashinonamaehanakanodesu .",
    "1nen ha 1gatu3ka kara hajimarimasu .",
    "kagikakko ha [ to ] de kakomimasu . ",
    "ringo ga 1ko to mikan ga 3ko arimasu . ",
    "koyuu meishi ha tokui deha arimasen . tanaka san to satou san ha yuumei nanode daijyoubu desu . ",
    "AWS Systems Manager no kanritaisyou insutansu nisuru",
    "honkijiha , EC2 insutansu wo Systems Manager no Kanritaisyou insutansu ni surumadeno tejyun desu . ",
    "AWS komyunithi- AMI de teikyou sareteiru Windows Server 2019 no AMI niha, hajimekara SSM Agent ga insuto-ru sareteimasu .",
    "watashi ha nihongo wo syaberu kotoga dekimasu .",
    "Emacs kuraianto kara riyou dekiruyouni narimashita .",
    "Emacs kara riyou dekiru kanji henkan enjin desu .",
    "toriaezu , ugokuyouni narimashita .",
];

pub const KANJI_WORDS: &[&str] = &["漢字", "東西南北", "行う", "東京特許許可局"];

/// Romanized sentences first, then the kanji words.
pub async fn run(
    service: &dyn CompletionService,
    config: &DemoConfig,
    out: &mut impl Write,
) -> Result<()> {
    run_corpus(service, config, ConversionKind::MixedScript, ROMAJI_SENTENCES, out).await?;
    run_corpus(service, config, ConversionKind::Reading, KANJI_WORDS, out).await
}

/// Stops at the first failing item; earlier items have already been written.
pub async fn run_corpus(
    service: &dyn CompletionService,
    config: &DemoConfig,
    kind: ConversionKind,
    corpus: &[&str],
    out: &mut impl Write,
) -> Result<()> {
    for (index, input) in corpus.iter().enumerate() {
        let outputs = conversion::convert(service, config, kind, input, COMPLETIONS_PER_ITEM)
            .await
            .with_context(|| format!("Conversion of item {} (`{input}`) failed", index + 1))?;

        write_item(out, input, &outputs).context("Failed to write to output")?;
    }

    Ok(())
}

fn write_item(out: &mut impl Write, input: &str, outputs: &[String]) -> std::io::Result<()> {
    writeln!(out, "IN : {input}")?;
    for output in outputs {
        writeln!(out, "OUT: {output}")?;
    }
    writeln!(out)?;
    out.flush()
}
