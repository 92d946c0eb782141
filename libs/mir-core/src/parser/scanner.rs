//! Stateful line-scanner recovering questions from exam text.

use crate::types::{Alternative, ParserConfig, Question};

use super::comment::extract_comment;
use super::reorder::{reorder_alternatives, RawAlternative};
use super::{ANSWER_LINE, NUMBERED_PREFIX, NUMBERED_START};

/// Parse extracted exam text into questions.
///
/// Lines that match no part of the block grammar (page headers, column
/// artifacts) are skipped as noise. Question blocks that never reach four
/// strictly sequential alternatives before the input ends are dropped;
/// the caller sees fewer questions, never an error.
pub fn parse(text: &str, config: &ParserConfig) -> Vec<Question> {
    Scanner::new(text, config).run()
}

/// Scanner state, one variant per phase of a question block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Looking for a "N. text" line that opens a question.
    SeekQuestion,
    /// Appending body lines until the "1." alternative sentinel.
    AccumulateQuestion,
    /// Trial-parsing four strictly sequential alternatives.
    TrialAlternatives,
    /// At most one "Respuesta correcta: N" line.
    SeekAnswerLine,
    /// Optional trailing "Comentario:" block.
    ExtractComment,
    /// Emit the question and return to SeekQuestion.
    Commit,
}

struct Scanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    state: State,
    preserve_order: bool,

    // Scratch for the question in flight.
    numero: u32,
    pregunta: String,
    alternativas: Vec<RawAlternative>,
    respuesta: u32,
    comentario: Option<String>,

    questions: Vec<Question>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, config: &ParserConfig) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
            state: State::SeekQuestion,
            preserve_order: config.preserve_order,
            numero: 0,
            pregunta: String::new(),
            alternativas: Vec::new(),
            respuesta: 0,
            comentario: None,
            questions: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Question> {
        loop {
            match self.state {
                State::SeekQuestion => {
                    if !self.seek_question() {
                        break;
                    }
                }
                State::AccumulateQuestion => {
                    if !self.accumulate_question() {
                        // Input ended mid-question: the partial block is dropped.
                        break;
                    }
                }
                State::TrialAlternatives => self.trial_alternatives(),
                State::SeekAnswerLine => self.seek_answer_line(),
                State::ExtractComment => self.extract_comment(),
                State::Commit => self.commit(),
            }
        }
        self.questions
    }

    /// Advance to the next "N. text" line. Returns false at end of input.
    fn seek_question(&mut self) -> bool {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            if let Some(caps) = NUMBERED_START.captures(line) {
                if let Ok(numero) = caps[1].parse::<u32>() {
                    self.numero = numero;
                    self.pregunta = caps[2].to_string();
                    self.alternativas.clear();
                    self.respuesta = 0;
                    self.comentario = None;
                    self.pos += 1;
                    self.state = State::AccumulateQuestion;
                    return true;
                }
            }
            self.pos += 1;
        }
        false
    }

    /// Grow the question body until the "1." sentinel. Returns false at
    /// end of input.
    fn accumulate_question(&mut self) -> bool {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            if line.is_empty() {
                self.pos += 1;
                continue;
            }
            if let Some(caps) = NUMBERED_START.captures(line) {
                if &caps[1] == "1" {
                    self.state = State::TrialAlternatives;
                    return true;
                }
            }
            self.pregunta.push(' ');
            self.pregunta.push_str(line);
            self.pos += 1;
        }
        false
    }

    /// All-or-nothing attempt to read alternatives 1..4 in strict
    /// sequence starting at the sentinel line.
    ///
    /// On success the cursor lands on the first line after the block. On
    /// failure the whole block is abandoned (one attempt per question,
    /// never a partial Question) and seeking resumes where the sequence
    /// broke, so the next question line is not lost.
    fn trial_alternatives(&mut self) {
        let mut cur = self.pos;
        let mut alts: Vec<RawAlternative> = Vec::with_capacity(4);

        for expected in 1..=4u32 {
            while cur < self.lines.len() && self.lines[cur].trim().is_empty() {
                cur += 1;
            }
            if cur >= self.lines.len() {
                break;
            }

            let line = self.lines[cur].trim();
            let caps = match NUMBERED_START.captures(line) {
                Some(caps) => caps,
                None => break,
            };
            if caps[1].parse::<u32>() != Ok(expected) {
                break;
            }

            let mut texto = caps[2].to_string();
            cur += 1;

            // Multiline alternative text; blank lines are skipped, never
            // terminators.
            while cur < self.lines.len() {
                let sig = self.lines[cur].trim();
                if sig.is_empty() {
                    cur += 1;
                    continue;
                }
                if NUMBERED_PREFIX.is_match(sig)
                    || sig.starts_with("Respuesta correcta")
                    || sig.starts_with("Comentario")
                {
                    break;
                }
                texto.push(' ');
                texto.push_str(sig);
                cur += 1;
            }

            alts.push(RawAlternative {
                numero: expected,
                texto: texto.trim().to_string(),
            });
        }

        if alts.len() == 4 {
            self.alternativas = alts;
            self.pos = cur;
            self.state = State::SeekAnswerLine;
        } else {
            self.pos = cur;
            self.state = State::SeekQuestion;
        }
    }

    /// Consume a "Respuesta correcta: N" line if present. A declared
    /// index outside 1..4 is treated as absent.
    fn seek_answer_line(&mut self) {
        if self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            if let Some(caps) = ANSWER_LINE.captures(line) {
                self.respuesta = match caps[1].parse::<u32>() {
                    Ok(n) if (1..=4).contains(&n) => n,
                    _ => 0,
                };
                self.pos += 1;
            }
        }
        self.state = State::ExtractComment;
    }

    fn extract_comment(&mut self) {
        let (comentario, new_pos) = extract_comment(&self.lines, self.pos);
        self.comentario = comentario;
        self.pos = new_pos;
        self.state = State::Commit;
    }

    fn commit(&mut self) {
        let alternativas = if (1..=4).contains(&self.respuesta) {
            reorder_alternatives(
                &self.alternativas,
                self.respuesta,
                self.comentario.as_deref(),
                self.preserve_order,
            )
        } else {
            self.alternativas
                .iter()
                .map(|alt| Alternative {
                    numero: alt.numero,
                    texto: alt.texto.clone(),
                    comentario: None,
                })
                .collect()
        };

        self.questions.push(Question {
            numero: self.numero,
            pregunta: self.pregunta.trim().to_string(),
            alternativas,
            respuesta_original: self.respuesta,
            comentario: self.comentario.take(),
        });
        self.state = State::SeekQuestion;
    }
}
