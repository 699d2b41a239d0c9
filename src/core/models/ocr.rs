/// Position of a word in the engine's block / paragraph / line hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LinePosition {
    pub block: i32,
    pub paragraph: i32,
    pub line: i32,
}

#[derive(Debug, Clone)]
pub struct DetectedWord {
    pub content: String,
    pub position: LinePosition,
    pub confidence: f32,
}

impl DetectedWord {
    pub fn new(content: String, block: i32, paragraph: i32, line: i32, confidence: f32) -> Self {
        Self {
            content,
            position: LinePosition {
                block,
                paragraph,
                line,
            },
            confidence,
        }
    }
}

/// One recognized line of text.
#[derive(Debug, Clone)]
pub struct DetectedText {
    pub content: String,
    pub confidence: f32,
    pub words: Vec<DetectedWord>,
}

impl DetectedText {
    fn from_words(words: Vec<DetectedWord>) -> Self {
        let content = words
            .iter()
            .map(|word| word.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let confidence = if words.is_empty() {
            0.0
        } else {
            words.iter().map(|word| word.confidence).sum::<f32>() / words.len() as f32
        };

        Self {
            content,
            confidence,
            words,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OcrResult {
    pub text_blocks: Vec<DetectedText>,
    pub full_text: String,
}

impl OcrResult {
    /// Groups words into lines in reading order. Blank words are dropped; a
    /// blank line between paragraphs or blocks is kept in `full_text`.
    pub fn from_words(words: Vec<DetectedWord>) -> Self {
        let mut lines: Vec<(LinePosition, Vec<DetectedWord>)> = Vec::new();

        for word in words {
            if word.content.trim().is_empty() {
                continue;
            }
            match lines.last_mut() {
                Some((position, line_words)) if *position == word.position => {
                    line_words.push(word);
                }
                _ => lines.push((word.position, vec![word])),
            }
        }

        let mut full_text = String::new();
        let mut previous_position: Option<LinePosition> = None;
        let mut text_blocks = Vec::with_capacity(lines.len());

        for (position, line_words) in lines {
            if let Some(previous) = previous_position {
                full_text.push('\n');
                if previous.block != position.block || previous.paragraph != position.paragraph {
                    full_text.push('\n');
                }
            }
            let detected = DetectedText::from_words(line_words);
            full_text.push_str(&detected.content);
            text_blocks.push(detected);
            previous_position = Some(position);
        }

        Self {
            text_blocks,
            full_text,
        }
    }

    pub fn word_count(&self) -> usize {
        self.text_blocks.iter().map(|block| block.words.len()).sum()
    }

    pub fn mean_confidence(&self) -> Option<f32> {
        if self.text_blocks.is_empty() {
            return None;
        }
        let total: f32 = self.text_blocks.iter().map(|block| block.confidence).sum();
        Some(total / self.text_blocks.len() as f32)
    }
}
