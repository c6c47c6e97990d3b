use cadence_core::GenerationMode;

use crate::client::CompletionParams;

const SPEECH_SYSTEM: &str = "You are a world-class motivational speaker. You write powerful, \
inspiring speeches that move people to action, using vivid imagery, personal stories and \
emotional appeals. Every speech has a strong opening, a compelling body and a memorable \
conclusion.";

const SONG_SYSTEM: &str = "You are a spoken-word artist and motivational rapper. You write \
punchy, rhythmic motivational pieces with short lines, pauses and a rap cadence. Delivery is \
spoken or rapped only, never sung. You lean on repetition, rhyme and rhythm.";

/// Instructions and sampling parameters for one generation mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptTemplate {
    pub mode: GenerationMode,
    pub system: &'static str,
    /// Target word count, inclusive
    pub words: (u32, u32),
    pub params: CompletionParams,
}

impl PromptTemplate {
    /// Template selected by `mode`
    pub const fn for_mode(mode: GenerationMode) -> Self {
        match mode {
            GenerationMode::Speech => Self {
                mode,
                system: SPEECH_SYSTEM,
                words: (300, 500),
                params: CompletionParams {
                    temperature: 0.8,
                    max_tokens: 1000,
                },
            },
            GenerationMode::Song => Self {
                mode,
                system: SONG_SYSTEM,
                words: (100, 200),
                params: CompletionParams {
                    temperature: 0.8,
                    max_tokens: 500,
                },
            },
        }
    }

    /// User message asking for a piece about `topic`
    pub fn user_prompt(&self, topic: &str) -> String {
        let (min, max) = self.words;

        match self.mode {
            GenerationMode::Speech => format!(
                "Create a motivational speech about: {topic}\n\n\
                 Requirements:\n\
                 - {min}-{max} words\n\
                 - Engaging and emotional\n\
                 - Include specific examples or metaphors\n\
                 - Open strongly, build momentum through the body\n\
                 - End with a powerful call to action"
            ),
            GenerationMode::Song => format!(
                "Create a motivational spoken-word piece about: {topic}\n\n\
                 Requirements:\n\
                 - {min}-{max} words\n\
                 - Short, punchy lines (5-10 words per line)\n\
                 - Rap/spoken-word style (NO singing, no melodic lines)\n\
                 - Use rhythm and rhyme\n\
                 - Include pauses (use \"...\" or line breaks)\n\
                 - A repeated hook/chorus\n\
                 - High energy and intensity"
            ),
        }
    }
}
