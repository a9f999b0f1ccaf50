//! Rewrite-instruction builder.
//!
//! Turns a detection report into editor-facing instructions: one block per
//! flagged signal (score ≥ 3), ordered by weighted severity so the worst
//! offenders come first. The output is plain text meant to be pasted into
//! an editing brief or a downstream rewriting tool.

use crate::report::{DetectionReport, SignalReport};

/// Returned when nothing scores high enough to need fixing.
const CLEAN_MESSAGE: &str = "The content already scores well on AI detection. \
     Make only light stylistic improvements to make it sound more natural and human.";

/// Signals with this score or higher get a rewrite instruction.
const FLAG_THRESHOLD: u8 = 3;

/// Build rewrite instructions from a detection report.
///
/// Flagged signals are ordered by `score * weight` descending; ties keep
/// signal-id order. Each block names the problem, gives concrete editing
/// guidance, and quotes the signal's diagnostic detail.
pub fn build_rewrite_instructions(report: &DetectionReport) -> String {
    let mut flagged: Vec<&SignalReport> = report
        .signals
        .iter()
        .filter(|s| s.score >= FLAG_THRESHOLD)
        .collect();
    flagged.sort_by(|a, b| {
        (u16::from(b.score) * u16::from(b.weight)).cmp(&(u16::from(a.score) * u16::from(a.weight)))
    });

    if flagged.is_empty() {
        return CLEAN_MESSAGE.to_string();
    }

    let blocks: Vec<String> = flagged.iter().map(|s| instruction_for(s)).collect();
    blocks.join("\n\n")
}

/// Join up to `limit` examples with `sep`, prefixed for appending.
fn found_suffix(examples: &[String], limit: usize, sep: &str) -> String {
    if examples.is_empty() {
        String::new()
    } else {
        format!(
            " Found: {}",
            examples
                .iter()
                .take(limit)
                .cloned()
                .collect::<Vec<_>>()
                .join(sep)
        )
    }
}

fn instruction_for(s: &SignalReport) -> String {
    let score = s.score;
    match s.signal_id {
        1 => format!(
            "LEXICAL DIVERSITY (scored {score}/5): The vocabulary pattern reads as generated. \
             Reuse common words more naturally and drop AI signature terms — humans repeat \
             words instead of reaching for a thesaurus. {}",
            s.detail
        ),
        2 => format!(
            "SENTENCE BURSTINESS (scored {score}/5): Sentences are too uniform in length. \
             Mix VERY short punchy sentences (3-7 words) with longer complex ones (25+ words). \
             Create dramatic variation. Current: {}",
            s.detail
        ),
        3 => format!(
            "TOPIC DISCIPLINE (scored {score}/5): Paragraphs hold topic with unnatural \
             discipline. Let the text drift a little — a brief aside or tangent between \
             paragraphs reads as human. {}",
            s.detail
        ),
        4 => format!(
            "REPETITIVE PATTERNS (scored {score}/5): {}. Rephrase these repeated structures \
             using different syntax each time.{}",
            s.detail,
            found_suffix(&s.examples, 3, "; ")
        ),
        5 => format!(
            "PERSONAL VOICE (scored {score}/5): Not enough first-person perspective. Add \
             \"I\", \"my\", \"we\" naturally and cut impersonal constructions (\"it is\", \
             \"there are\"). Share brief personal opinions or experiences. {}",
            s.detail
        ),
        6 => format!(
            "PASSIVE VOICE (scored {score}/5): Too much passive voice — convert most \
             constructions to active voice with a clear subject. {}",
            s.detail
        ),
        7 => format!(
            "CASUAL REGISTER (scored {score}/5): The prose is too formal. Use contractions \
             (don't, can't, it's) and the occasional colloquial phrase the way people \
             actually write. {}",
            s.detail
        ),
        8 => format!(
            "TRANSITION OVERUSE (scored {score}/5): Too many AI-typical transitions. Remove \
             or replace words like \"furthermore\", \"moreover\", \"additionally\", \
             \"consequently\". Use simpler connectors or restructure sentences to flow \
             without explicit transitions.{}",
            found_suffix(&s.examples, 5, ", ")
        ),
        9 => format!(
            "SENTENCE COMPLEXITY (scored {score}/5): Sentences are too uniformly complex. \
             Mix simple, compound, and complex sentences more naturally. Include some \
             fragments for emphasis. {}",
            s.detail
        ),
        10 => format!(
            "EMOTION & SUBJECTIVITY (scored {score}/5): Too neutral and objective. Add \
             personal opinions, emotional reactions (\"I love this\", \"frustrating\", \
             \"impressive\"), and subjective judgments. {}",
            s.detail
        ),
        11 => format!(
            "AI CLICHES (scored {score}/5): Contains AI-typical phrases that must be \
             eliminated. REMOVE or REPHRASE: \"delve\", \"landscape\", \"it's worth \
             noting\", \"in today's\", \"comprehensive\", \"game-changer\", \"leverage\", \
             \"a testament to\", \"pivotal\".{}",
            found_suffix(&s.examples, 5, "; ")
        ),
        12 => format!(
            "RHETORICAL QUESTIONS (scored {score}/5): Formulaic self-answering questions \
             read as filler. Cut \"But what does this mean?\" constructions; ask a question \
             only when the text genuinely wonders. {}",
            s.detail
        ),
        13 => format!(
            "TENSE RIGIDITY (scored {score}/5): The text holds one tense with machine \
             discipline. Shift tense where the material calls for it — anecdotes in past, \
             observations in present. {}",
            s.detail
        ),
        14 => format!(
            "ADVERB OVERUSE (scored {score}/5): Too many adverbs and intensifiers. Remove \
             or replace: \"significantly\", \"effectively\", \"essentially\", \
             \"incredibly\", \"extremely\", \"remarkably\", \"ultimately\".{}",
            found_suffix(&s.examples, 5, ", ")
        ),
        15 => format!(
            "SPECIFICITY (scored {score}/5): Not enough specific details. Add real names, \
             specific numbers, dates, brands, locations, or technical specifications, and \
             cut vague appeals to \"experts\" and \"studies\". {}",
            s.detail
        ),
        16 => format!(
            "FORMATTING RIGIDITY (scored {score}/5): The scaffolding is too regular — \
             headers, bullets, and same-size paragraphs everywhere. Vary paragraph lengths \
             and fold some lists back into prose. {}",
            s.detail
        ),
        17 => format!(
            "FIGURATIVE LANGUAGE (scored {score}/5): Replace worn-out stock metaphors with \
             fresh comparisons, or cut them entirely. An original simile beats \"tip of the \
             iceberg\" every time.{}",
            found_suffix(&s.examples, 5, "; ")
        ),
        18 => format!(
            "NUANCE (scored {score}/5): The text hedges with symmetric \"on the one hand\" \
             balance and commits to nothing. Take a position and carve out specific, \
             concrete exceptions instead. {}",
            s.detail
        ),
        19 => format!(
            "PROMPT LEAKAGE (scored {score}/5): Assistant framing or template placeholders \
             leaked into the text. Delete every trace — these are direct evidence of pasted \
             model output.{}",
            found_suffix(&s.examples, 3, "; ")
        ),
        20 => format!(
            "PREDICTABILITY (scored {score}/5): The text is too predictable in word \
             choices. Use more unexpected words, surprising comparisons, and less obvious \
             phrasing. Humans are less predictable than AI. {}",
            s.detail
        ),
        21 => format!(
            "COLON LEAD-INS (scored {score}/5): Too many \"X: Y\" patterns typical of AI. \
             Restructure sentences that use colons as lead-ins into flowing prose.{}",
            found_suffix(&s.examples, 3, "; ")
        ),
        _ => format!(
            "Signal {} ({}, scored {score}/5): {}",
            s.signal_id, s.name, s.detail
        ),
    }
}
