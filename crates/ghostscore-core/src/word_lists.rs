//! Frozen word lists and phrase patterns for authorship scoring.
//!
//! Every list here is calibration data: the signal threshold ladders were
//! tuned against these exact entries, so edits shift scoring behavior.
//! All data is immutable after first use and safe to share across threads.

use std::collections::HashSet;
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

/// Vocabulary that large models over-select. Matched as substrings of
/// lowercased text, so inflections ("delves", "leveraged") count.
pub static AI_SIGNATURE_WORDS: &[&str] = &[
    "delve",
    "tapestry",
    "multifaceted",
    "comprehensive",
    "cutting-edge",
    "game-changer",
    "leverage",
    "pivotal",
    "foster",
    "realm",
    "landscape",
    "seamless",
    "holistic",
    "synergy",
    "paradigm",
    "testament",
    "underscore",
    "unwavering",
    "meticulous",
    "beacon",
];

/// Substring matcher over [`AI_SIGNATURE_WORDS`].
pub static SIGNATURE_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(AI_SIGNATURE_WORDS).expect("valid patterns"));

/// Transition phrases characteristic of generated prose.
pub static AI_TRANSITION_PHRASES: &[&str] = &[
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "subsequently",
    "nevertheless",
    "nonetheless",
    "in conclusion",
    "in summary",
    "to summarize",
    "in essence",
    "as such",
    "it is important to note",
    "it is worth noting",
    "first and foremost",
    "in addition to this",
];

/// Substring matcher over [`AI_TRANSITION_PHRASES`].
pub static TRANSITION_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(AI_TRANSITION_PHRASES).expect("valid patterns"));

/// Stock phrases that read as filler.
pub static AI_CLICHES: &[&str] = &[
    "it is worth noting",
    "it's worth noting",
    "it is important to note",
    "in today's fast-paced world",
    "in today's digital age",
    "in the ever-evolving",
    "at the end of the day",
    "when it comes to",
    "a testament to",
    "plays a crucial role",
    "plays a pivotal role",
    "unlock the potential",
    "unlock the power",
    "take it to the next level",
    "a game changer",
    "dive deep",
    "let's dive in",
    "without further ado",
    "needless to say",
    "it goes without saying",
    "look no further",
    "embark on a journey",
    "treasure trove",
    "in the realm of",
];

/// Substring matcher over [`AI_CLICHES`].
pub static CLICHE_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(AI_CLICHES).expect("valid patterns"));

/// Intensity adverbs that pad sentences without adding information.
pub static FLUFF_ADVERBS: &[&str] = &[
    "significantly",
    "effectively",
    "essentially",
    "fundamentally",
    "incredibly",
    "extremely",
    "remarkably",
    "ultimately",
    "seamlessly",
    "undoubtedly",
    "undeniably",
    "truly",
    "genuinely",
    "absolutely",
    "substantially",
    "considerably",
    "profoundly",
    "invariably",
];

/// Word-boundary patterns for [`FLUFF_ADVERBS`].
pub static FLUFF_ADVERB_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FLUFF_ADVERBS
        .iter()
        .map(|adv| Regex::new(&format!(r"\b{adv}\b")).expect("valid regex"))
        .collect()
});

/// Worn-out figurative phrases.
pub static DEAD_METAPHORS: &[&str] = &[
    "tip of the iceberg",
    "double-edged sword",
    "low-hanging fruit",
    "level playing field",
    "move the needle",
    "the big picture",
    "perfect storm",
    "think outside the box",
    "push the envelope",
    "paradigm shift",
    "uncharted territory",
    "breath of fresh air",
    "elephant in the room",
    "silver bullet",
    "calm before the storm",
];

/// Substring matcher over [`DEAD_METAPHORS`].
pub static DEAD_METAPHOR_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(DEAD_METAPHORS).expect("valid patterns"));

/// Meta-commentary that leaks assistant framing or prompt scaffolding.
/// Each pattern is tested once against the lowercased, trimmed text.
pub static PROMPT_LEAKAGE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        r"as an ai(?: language)? model",
        r"as a large language model",
        r"i (?:cannot|can't) (?:browse|access)",
        r"as of my (?:knowledge|last) (?:cutoff|update)",
        r"i hope this (?:article|guide|post|overview|helps)",
        r"here is (?:a|an|the) (?:article|essay|blog post|rewritten version)",
        r"^certainly[,!]",
        r"^sure[,!] here",
        r"in this (?:article|essay|blog post|guide), we will",
        r"i don't have (?:access to )?real-time",
        r"\[insert [^\]]*\]",
        r"feel free to (?:adjust|modify|customize)",
    ]
    .into_iter()
    .map(|src| (src, Regex::new(src).expect("valid regex")))
    .collect()
});

/// "Label: payoff" lead-ins common in generated listicle prose.
/// Scanned globally against lowercased text.
pub static COLON_LEADINS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bthe bottom line:",
        r"\bkey takeaways?:",
        r"\bthe takeaway:",
        r"\bpro tip:",
        r"\bthe result:",
        r"\bthe answer:",
        r"\bthe verdict:",
        r"\bthe catch:",
        r"\bthe best part:",
        r"\bhere's the (?:thing|deal|truth|kicker):",
        r"\bspoiler(?: alert)?:",
        r"\bin short:",
        r"\bfirst things first:",
        r"\bremember:",
    ]
    .into_iter()
    .map(|src| Regex::new(src).expect("valid regex"))
    .collect()
});

/// High-frequency English vocabulary for the predictability measure.
/// Only entries longer than three letters matter to the score, but the
/// set keeps short ones for completeness.
pub static COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "that", "have", "with", "this", "from", "they", "will", "would", "there",
        "their", "what", "about", "which", "when", "make", "like", "time", "just", "know", "take",
        "people", "into", "year", "your", "good", "some", "could", "them", "other", "than", "then",
        "look", "only", "come", "over", "think", "also", "back", "after", "work", "first", "well",
        "even", "want", "because", "these", "give", "most", "find", "here", "thing", "many",
        "tell", "very", "still", "should", "being", "much", "where", "before", "right", "through",
        "down", "long", "little", "great", "same", "another", "while", "last", "might", "must",
        "never", "world", "need", "feel", "three", "state", "high", "really", "something", "life",
        "left", "each", "between", "under", "again", "place", "around", "however", "home", "small",
        "found", "those", "does", "part", "against", "asked", "going", "point", "different",
        "away", "turn", "every", "start", "hand", "show", "large", "both", "often", "always",
        "next", "began", "came", "since", "used", "until", "without", "made", "during", "water",
        "been", "called", "more", "word", "number", "most", "said", "were", "years", "things",
        "best", "better", "sure", "almost", "enough", "took", "once", "help", "keep", "seem",
        "seemed", "together", "along", "later", "knew", "though", "less", "means", "mean",
        "question", "certain", "answer", "within", "several", "change", "course", "early",
        "toward", "today", "week", "month", "night", "story", "young", "given", "order", "group",
        "country", "problem", "fact", "case", "company", "system", "program", "during", "house",
        "school", "become", "became", "person", "money", "least", "whole", "reason", "members",
        "getting", "making", "maybe", "actually", "probably", "usually", "anything", "everything",
        "nothing", "someone", "everyone", "anyone", "done", "doing", "having", "using", "trying",
        "looking", "working", "thought", "believe", "understand", "important", "possible",
        "available", "different", "example", "experience", "information", "idea", "real", "true",
        "kind", "sort", "read", "write", "written", "name", "line", "side", "open", "close",
        "call", "move", "play", "live", "stay", "stop", "talk", "walk", "seen", "heard", "hear",
        "told", "says", "goes", "gets", "comes", "takes", "makes", "wants", "needs", "uses",
        "way", "ways", "day", "days", "end", "set", "put", "lot", "big", "new", "old", "own",
        "few", "far", "off", "yet", "may", "say", "see", "get", "got", "how", "now", "out", "use",
    ]
    .into_iter()
    .collect()
});

/// Function words excluded from paragraph-overlap keyword sets.
pub static DRIFT_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
        "to", "of", "in", "for", "on", "with", "at", "by", "from", "as", "into", "through",
        "during", "before", "after", "above", "below", "between", "out", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
        "each", "every", "both", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "just", "because", "but",
        "and", "or", "if", "while", "that", "this", "it", "its", "i", "me", "my", "we", "our",
        "you", "your", "he", "she", "they", "them", "their", "what", "which", "who", "whom",
    ]
    .into_iter()
    .collect()
});

/// First-person pronouns.
pub static FIRST_PERSON_PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["i", "me", "my", "mine", "myself", "we", "us", "our", "ours"]
        .into_iter()
        .collect()
});

/// Tally pattern occurrences in `haystack`, unique patterns in first-match
/// order. `patterns` must be the slice `matcher` was built from, and the
/// haystack must already be lowercased.
pub(crate) fn phrase_hits<'a>(
    matcher: &AhoCorasick,
    patterns: &[&'a str],
    haystack: &str,
) -> Vec<(&'a str, usize)> {
    let mut counts = vec![0usize; patterns.len()];
    let mut order = Vec::new();
    for m in matcher.find_overlapping_iter(haystack) {
        let id = m.pattern().as_usize();
        if counts[id] == 0 {
            order.push(id);
        }
        counts[id] += 1;
    }
    order
        .into_iter()
        .map(|id| (patterns[id], counts[id]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_matcher_finds_inflections() {
        let hits = phrase_hits(
            &SIGNATURE_MATCHER,
            AI_SIGNATURE_WORDS,
            "we delved into a comprehensive plan",
        );
        let found: Vec<&str> = hits.iter().map(|(w, _)| *w).collect();
        assert_eq!(found, vec!["delve", "comprehensive"]);
    }

    #[test]
    fn phrase_hits_counts_repeats() {
        let hits = phrase_hits(
            &TRANSITION_MATCHER,
            AI_TRANSITION_PHRASES,
            "furthermore, this. furthermore, that. moreover, more.",
        );
        assert_eq!(hits, vec![("furthermore", 2), ("moreover", 1)]);
    }

    #[test]
    fn cliche_list_covers_worth_noting_variants() {
        let hits = phrase_hits(
            &CLICHE_MATCHER,
            AI_CLICHES,
            "it is worth noting that it's worth noting things",
        );
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn common_words_contains_high_frequency_vocabulary() {
        assert!(COMMON_WORDS.contains("because"));
        assert!(COMMON_WORDS.contains("through"));
        assert!(!COMMON_WORDS.contains("heuristic"));
    }

    #[test]
    fn leakage_patterns_compile_and_anchor() {
        let (_, certainly) = &PROMPT_LEAKAGE_PATTERNS[6];
        assert!(certainly.is_match("certainly! here you go"));
        assert!(!certainly.is_match("this is certainly fine"));
    }
}
