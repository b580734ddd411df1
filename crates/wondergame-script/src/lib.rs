//! # WonderGame Script
//!
//! The text command interpreter behind the game's terminal scenes. Input
//! is normalized in three passes: verb synonyms collapse onto a small
//! canonical set, filler words are dropped, and the remaining words are
//! matched against the objects the current scene knows about. The
//! interpreter owns the scripted state of the opening cell, including the
//! discovery chain that unlocks the first walkable room.

mod vocab;

use tracing::debug;

use vocab::{is_filler, normalize_verb, resolve_object};

/// A side effect the front-end must act on after printing the lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScriptEvent {
    #[default]
    None,
    /// Leave the terminal scene and enter the named room.
    Transition(String),
    Quit,
    ClearScreen,
}

/// The result of interpreting one line of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    pub lines: Vec<String>,
    pub event: ScriptEvent,
}

impl CommandOutcome {
    fn say(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            event: ScriptEvent::None,
        }
    }

    fn event(lines: &[&str], event: ScriptEvent) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            event,
        }
    }
}

/// Interpreter state for the opening cell.
///
/// The discovery chain: examining the terminal reveals a post-it stuck to
/// its casing, reading the post-it teaches the player to `look harder`,
/// and looking harder opens the way out.
#[derive(Debug, Default)]
pub struct CommandProcessor {
    terminal_examined: bool,
    postit_read: bool,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text shown when the scene begins.
    pub fn intro(&self) -> Vec<String> {
        [
            "You wake on a thin bunk in a grey room.",
            "A sign hangs on the wall. An old terminal hums in the corner.",
            "",
            "Type HELP for commands.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Interprets one line of player input.
    pub fn process(&mut self, input: &str) -> CommandOutcome {
        let lowered = input.to_lowercase();
        let words: Vec<&str> = lowered
            .split_whitespace()
            .filter(|w| !is_filler(w))
            .collect();
        let Some((&first, rest)) = words.split_first() else {
            return CommandOutcome::say(&["Say something. Anything."]);
        };
        let verb = normalize_verb(first);
        debug!(verb, ?rest, "command");

        match verb {
            "help" => CommandOutcome::say(&[
                "Things you can do:",
                "  look               examine <thing>",
                "  touch <thing>      say <words>",
                "  inventory          clear",
                "  exit",
            ]),
            "inventory" => CommandOutcome::say(&[
                "You are carrying: nothing.",
                "You are carried by: this room, apparently.",
            ]),
            "clear" => CommandOutcome::event(&[], ScriptEvent::ClearScreen),
            "exit" => CommandOutcome::event(&["The room lets you go. For now."], ScriptEvent::Quit),
            "say" => {
                if rest.is_empty() {
                    CommandOutcome::say(&["You open your mouth. Nothing comes out."])
                } else {
                    CommandOutcome {
                        lines: vec![
                            format!("You say \"{}\".", rest.join(" ")),
                            "The walls do not answer.".to_string(),
                        ],
                        event: ScriptEvent::None,
                    }
                }
            }
            "look" => self.look(rest),
            "examine" => self.examine(rest),
            "touch" => self.touch(rest),
            _ => CommandOutcome::say(&["You can't do that. Or you can, and nothing happens."]),
        }
    }

    fn look(&mut self, rest: &[&str]) -> CommandOutcome {
        if rest.contains(&"harder") {
            return if self.postit_read {
                CommandOutcome::event(
                    &[
                        "You look harder.",
                        "The grey peels away like old paint. There was a room",
                        "underneath the whole time.",
                    ],
                    ScriptEvent::Transition("room_1".to_string()),
                )
            } else {
                CommandOutcome::say(&["You squint. The room stays stubbornly grey."])
            };
        }
        if rest.is_empty() {
            let mut lines = vec![
                "A grey room. A bunk, a sign, a terminal.".to_string(),
                "The walls are the colour of a forgotten screensaver.".to_string(),
            ];
            if self.terminal_examined {
                lines.push("A yellow post-it clings to the terminal.".to_string());
            }
            return CommandOutcome { lines, event: ScriptEvent::None };
        }
        // "look <thing>" reads as examine.
        self.examine(rest)
    }

    fn examine(&mut self, rest: &[&str]) -> CommandOutcome {
        match resolve_object(rest) {
            Some("sign") => CommandOutcome::say(&[
                "The sign reads: \"WONDER is a privilege, not a right.\"",
                "Someone has underlined \"privilege\" three times.",
            ]),
            Some("terminal") => {
                self.terminal_examined = true;
                CommandOutcome::say(&[
                    "The terminal's cursor blinks at you, unbothered.",
                    "A yellow post-it is stuck to its casing.",
                ])
            }
            Some("postit") => {
                if self.terminal_examined {
                    self.postit_read = true;
                    CommandOutcome::say(&[
                        "Handwritten, hurried:",
                        "  \"none of this is load-bearing. LOOK HARDER.\"",
                    ])
                } else {
                    CommandOutcome::say(&["You don't see that here. Yet."])
                }
            }
            Some("bunk") => CommandOutcome::say(&[
                "The bunk has exactly one blanket's worth of comfort.",
            ]),
            Some("wall") => CommandOutcome::say(&[
                "Flat. Grey. Slightly warm, which is worse somehow.",
            ]),
            Some(_) | None => {
                CommandOutcome::say(&["You study it closely. It remains what it was."])
            }
        }
    }

    fn touch(&mut self, rest: &[&str]) -> CommandOutcome {
        match resolve_object(rest) {
            Some("terminal") => CommandOutcome::say(&[
                "The keys are worn smooth. Someone typed here for a long time.",
            ]),
            Some("wall") => CommandOutcome::say(&["The wall hums faintly under your palm."]),
            Some("postit") if self.terminal_examined => {
                CommandOutcome::say(&["It peels at the corner but holds on."])
            }
            _ => CommandOutcome::say(&["Your fingers find nothing worth keeping."]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(p: &mut CommandProcessor, line: &str) -> CommandOutcome {
        p.process(line)
    }

    #[test]
    fn verb_synonyms_collapse() {
        let mut p = CommandProcessor::new();
        let canonical = run(&mut p, "examine sign");
        for alias in ["inspect sign", "read the sign", "check sign", "study sign"] {
            assert_eq!(run(&mut p, alias).lines, canonical.lines, "{alias}");
        }
    }

    #[test]
    fn filler_words_are_ignored() {
        let mut p = CommandProcessor::new();
        let terse = run(&mut p, "look sign");
        let mut q = CommandProcessor::new();
        let wordy = run(&mut q, "look at the sign");
        assert_eq!(terse.lines, wordy.lines);
    }

    #[test]
    fn empty_input_prompts() {
        let mut p = CommandProcessor::new();
        assert_eq!(run(&mut p, "   ").lines, vec!["Say something. Anything."]);
    }

    #[test]
    fn unknown_verbs_are_shrugged_at() {
        let mut p = CommandProcessor::new();
        let out = run(&mut p, "defenestrate bunk");
        assert_eq!(out.event, ScriptEvent::None);
        assert!(!out.lines.is_empty());
    }

    #[test]
    fn postit_is_hidden_until_the_terminal_is_examined() {
        let mut p = CommandProcessor::new();
        let early = run(&mut p, "read post-it");
        assert_eq!(early.lines, vec!["You don't see that here. Yet."]);

        run(&mut p, "examine terminal");
        let found = run(&mut p, "read post-it");
        assert!(found.lines[0].starts_with("Handwritten"));
    }

    #[test]
    fn look_harder_is_gated_on_the_postit() {
        let mut p = CommandProcessor::new();
        assert_eq!(run(&mut p, "look harder").event, ScriptEvent::None);

        run(&mut p, "check the computer");
        run(&mut p, "read note");
        let out = run(&mut p, "look harder");
        assert_eq!(out.event, ScriptEvent::Transition("room_1".to_string()));
    }

    #[test]
    fn room_description_grows_with_discoveries() {
        let mut p = CommandProcessor::new();
        let before = run(&mut p, "look").lines.len();
        run(&mut p, "examine monitor");
        let after = run(&mut p, "look").lines.len();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn control_commands_raise_their_events() {
        let mut p = CommandProcessor::new();
        assert_eq!(run(&mut p, "clear").event, ScriptEvent::ClearScreen);
        assert_eq!(run(&mut p, "cls").event, ScriptEvent::ClearScreen);
        assert_eq!(run(&mut p, "q").event, ScriptEvent::Quit);
        assert_eq!(run(&mut p, "leave").event, ScriptEvent::Quit);
    }

    #[test]
    fn inventory_has_aliases() {
        let mut p = CommandProcessor::new();
        let long = run(&mut p, "inventory");
        assert_eq!(run(&mut p, "inv").lines, long.lines);
        assert_eq!(run(&mut p, "i").lines, long.lines);
    }

    #[test]
    fn say_echoes_the_words() {
        let mut p = CommandProcessor::new();
        let out = run(&mut p, "shout hello walls");
        assert_eq!(out.lines[0], "You say \"hello walls\".");
    }
}
