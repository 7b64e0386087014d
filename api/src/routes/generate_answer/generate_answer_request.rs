use answerer::{Answer, AnswerRequest, ContextChunk, ContextInput};
use serde::{Deserialize, Serialize};

/// Request payload for /generate_answer.
#[derive(Debug, Deserialize)]
pub struct GenerateAnswerRequest {
    /// Natural language question.
    pub question: String,
    /// Retrieved context: one plain string, or labeled fragments.
    pub context: ContextDto,
}

/// Wire shape of the context: a bare string or a list of fragments.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContextDto {
    Plain(String),
    Chunks(Vec<ChunkDto>),
}

/// One retrieved fragment with its source label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkDto {
    pub text: String,
    pub file: String,
}

/// Response payload for /generate_answer; the answer shape mirrors the
/// request's context shape.
#[derive(Debug, Serialize)]
pub struct GenerateAnswerResponse {
    pub answer: AnswerDto,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnswerDto {
    Text(String),
    Paragraphs(Vec<ParagraphDto>),
}

/// One answer paragraph with the fragment that grounds it.
#[derive(Debug, Serialize)]
pub struct ParagraphDto {
    pub paragraph: String,
    pub source: ChunkDto,
}

impl From<ChunkDto> for ContextChunk {
    fn from(dto: ChunkDto) -> Self {
        ContextChunk {
            text: dto.text,
            file: dto.file,
        }
    }
}

impl From<ContextChunk> for ChunkDto {
    fn from(chunk: ContextChunk) -> Self {
        ChunkDto {
            text: chunk.text,
            file: chunk.file,
        }
    }
}

impl GenerateAnswerRequest {
    /// Convert the wire payload into the domain request.
    pub fn into_domain(self) -> AnswerRequest {
        AnswerRequest {
            question: self.question,
            context: match self.context {
                ContextDto::Plain(text) => ContextInput::Plain(text),
                ContextDto::Chunks(chunks) => {
                    ContextInput::Chunks(chunks.into_iter().map(Into::into).collect())
                }
            },
        }
    }
}

impl From<Answer> for GenerateAnswerResponse {
    fn from(answer: Answer) -> Self {
        let answer = match answer {
            Answer::Text(text) => AnswerDto::Text(text),
            Answer::Paragraphs(paragraphs) => AnswerDto::Paragraphs(
                paragraphs
                    .into_iter()
                    .map(|p| ParagraphDto {
                        paragraph: p.paragraph,
                        source: p.source.into(),
                    })
                    .collect(),
            ),
        };
        Self { answer }
    }
}
