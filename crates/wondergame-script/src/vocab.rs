//! Vocabulary normalization: verb synonyms, filler words, and the noun
//! aliases the scenes recognize.

/// Collapses a verb synonym onto its canonical form. Unknown words pass
/// through unchanged.
pub(crate) fn normalize_verb(word: &str) -> &str {
    match word {
        "observe" | "see" | "view" | "watch" | "peek" | "glance" => "look",
        "inspect" | "check" | "study" | "investigate" | "analyze" | "read" => "examine",
        "feel" | "grab" | "hold" | "handle" | "press" => "touch",
        "speak" | "talk" | "tell" | "shout" | "whisper" => "say",
        "inv" | "i" => "inventory",
        "leave" | "escape" | "quit" | "q" => "exit",
        "cls" | "clr" => "clear",
        "?" | "commands" => "help",
        other => other,
    }
}

/// Words that carry no meaning for command matching.
pub(crate) fn is_filler(word: &str) -> bool {
    matches!(
        word,
        "the" | "a" | "an" | "at" | "on" | "in" | "to" | "of" | "with" | "around" | "my"
    )
}

/// Resolves the first recognizable noun among `words` to its canonical
/// object key.
pub(crate) fn resolve_object(words: &[&str]) -> Option<&'static str> {
    for &word in words {
        let key = match word {
            "sign" | "poster" | "plaque" => "sign",
            "terminal" | "computer" | "screen" | "monitor" | "console" => "terminal",
            "bunk" | "bed" | "cot" => "bunk",
            "wall" | "walls" | "room" => "wall",
            "post-it" | "postit" | "note" | "sticky" => "postit",
            _ => continue,
        };
        return Some(key);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_verbs_pass_through() {
        assert_eq!(normalize_verb("dance"), "dance");
        assert_eq!(normalize_verb("read"), "examine");
    }

    #[test]
    fn first_recognized_noun_wins() {
        assert_eq!(resolve_object(&["old", "computer"]), Some("terminal"));
        assert_eq!(resolve_object(&["sign", "terminal"]), Some("sign"));
        assert_eq!(resolve_object(&["nothing", "here"]), None);
    }
}
