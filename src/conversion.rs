use anyhow::Result;
use strum::{Display, EnumString};

use crate::completion::{CompletionRequest, CompletionService, Message, Role};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConversionKind {
    /// Romanized sentence to a kanji/kana mixed sentence.
    MixedScript,
    /// Kanji to its hiragana reading.
    Reading,
}

/// Fixed prompt material for one conversion kind.
#[derive(Debug)]
pub struct ConversionTemplate {
    pub system: &'static str,
    pub user_prefix: &'static str,
    pub example_input: &'static str,
    pub example_output: &'static str,
}

const MIXED_SCRIPT: ConversionTemplate = ConversionTemplate {
    system: "あなたはローマ字を日本語に変換するアシスタントです。",
    user_prefix: "ローマ字の文を漢字仮名混じり文にしてください。 : ",
    example_input: "watashi no namae ha nakano desu .",
    example_output: "私の名前は中野です。",
};

const READING: ConversionTemplate = ConversionTemplate {
    system: "あなたは漢字が与えられると、ひらがなに変換するアシスタントです。",
    user_prefix: "次をひらがなのみで表記してください。 : ",
    example_input: "東西南北",
    example_output: "とうざいなんぼく",
};

impl ConversionKind {
    pub fn template(self) -> &'static ConversionTemplate {
        match self {
            ConversionKind::MixedScript => &MIXED_SCRIPT,
            ConversionKind::Reading => &READING,
        }
    }
}

/// Settings shared by every request of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub model: String,
    pub temperature: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl DemoConfig {
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }
}

/// System instruction, one worked example, then the live input as the last user turn.
pub fn build_messages(kind: ConversionKind, input: &str) -> Vec<Message> {
    let template = kind.template();
    vec![
        Message::new(Role::System, template.system),
        Message::new(
            Role::User,
            format!("{}{}", template.user_prefix, template.example_input),
        ),
        Message::new(Role::Assistant, template.example_output),
        Message::new(Role::User, format!("{}{input}", template.user_prefix)),
    ]
}

pub async fn convert(
    service: &dyn CompletionService,
    config: &DemoConfig,
    kind: ConversionKind,
    input: &str,
    n: u32,
) -> Result<Vec<String>> {
    let request = CompletionRequest {
        model: config.model.clone(),
        temperature: config.temperature,
        n,
        messages: build_messages(kind, input),
    };

    tracing::debug!(%kind, model = %request.model, n, input, "requesting completions");
    let outputs = service.complete(&request).await?;
    tracing::debug!(%kind, returned = outputs.len(), "received completions");

    Ok(outputs)
}
