use crate::models::{CharacterCue, Conf, Diagnostic, DiagnosticKind};
use crate::parser::text_processor::RawBlock;
use crate::utils::fountain_constants::{
    ACTION_FORCE, CENTERED, CHARACTER_EXTENSION, CHARACTER_FORCE, FORCED_SCENE_HEADING,
    FORCED_TRANSITION, LYRIC, PAGE_BREAK, PARENTHETICAL, SCENE_HEADING, SCENE_NUMBER, SECTION,
    SYNOPSIS, TIMES_OF_DAY, TIME_OF_DAY_SUFFIX, TRANSITIONS, TRANSITION_TO,
};
use crate::utils::is_upper_text;

/// 分类后的元素，按原文顺序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    SceneHeading { text: String, number: Option<String> },
    Action(String),
    CharacterCue(CharacterCue),
    Parenthetical(String),
    Dialogue(String),
    Transition(String),
    Centered(String),
    Lyric(String),
    PageBreak,
    Section { level: usize, text: String },
    Synopsis(String),
}

/// 块内逐行分类时的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    None,
    AfterCue,
    AfterParenthetical,
    InDialogue,
}

impl ClassifierState {
    fn in_speaker_run(self) -> bool {
        self != ClassifierState::None
    }
}

/// 场景标题：INT/EXT 等开头，或全大写且以 `- DAY` 之类结尾
pub fn is_scene_heading(line: &str) -> bool {
    if SCENE_HEADING.is_match(line) || FORCED_SCENE_HEADING.is_match(line) {
        return true;
    }
    let line = SCENE_NUMBER.replace(line, "");
    if !is_upper_text(&line) {
        return false;
    }
    TIME_OF_DAY_SUFFIX
        .captures(&line)
        .and_then(|caps| caps.get(1))
        .map_or(false, |time| TIMES_OF_DAY.contains(&time.as_str()))
}

/// 转场：全大写，以 `TO:` 结尾或属于常见转场写法
pub fn is_transition(line: &str) -> bool {
    let line = line.trim();
    is_upper_text(line) && (TRANSITION_TO.is_match(line) || TRANSITIONS.contains(&line))
}

pub fn is_parenthetical(line: &str) -> bool {
    PARENTHETICAL.is_match(line)
}

/// 去掉 `@` 和 `^` 之后的角色名与扩展
fn split_cue(line: &str) -> (String, Option<String>, bool, bool) {
    let mut text = line.trim();
    let forced = CHARACTER_FORCE.is_match(text);
    if forced {
        text = text.trim_start_matches('@').trim_start();
    }

    let mut dual = false;
    if let Some(rest) = text.strip_prefix('^') {
        dual = true;
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix('^') {
        dual = true;
        text = rest.trim_end();
    }

    match CHARACTER_EXTENSION.captures(text) {
        Some(caps) => {
            let name = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            let ext = caps.get(2).map(|m| m.as_str().to_string());
            (name, ext, dual, forced)
        }
        None => (text.to_string(), None, dual, forced),
    }
}

/// 角色名：全大写（忽略扩展和 `^`），或用 `@` 强制
pub fn is_character_cue(line: &str) -> bool {
    let (name, _, _, forced) = split_cue(line);
    if name.is_empty() {
        return false;
    }
    forced || is_upper_text(&name)
}

pub fn parse_character_cue(line: &str, conf: &Conf) -> CharacterCue {
    let (name, extension, dual, _) = split_cue(line);
    let continued = extension
        .as_deref()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(&conf.text_contd));
    CharacterCue {
        name,
        extension,
        continued,
        dual,
    }
}

fn scene_heading(line: &str) -> Element {
    let mut text = line.trim();
    if FORCED_SCENE_HEADING.is_match(text) {
        text = &text[1..];
    }
    let number = SCENE_NUMBER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());
    let text = SCENE_NUMBER.replace(text, "").trim().to_string();
    Element::SceneHeading { text, number }
}

/// 只看块的首行就能确定、且独占整块的类型
fn classify_first_line(block: &RawBlock) -> Option<Element> {
    let line = block.first_line();
    if ACTION_FORCE.is_match(line) || CHARACTER_FORCE.is_match(line) {
        return None;
    }

    if PAGE_BREAK.is_match(line) {
        return Some(Element::PageBreak);
    }
    if let Some(caps) = SECTION.captures(line) {
        let level = caps.get(1).map_or(1, |m| m.as_str().len());
        let text = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
        return Some(Element::Section { level, text });
    }
    if let Some(caps) = SYNOPSIS.captures(line) {
        let text = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
        return Some(Element::Synopsis(text));
    }
    if is_scene_heading(line) {
        return Some(scene_heading(line));
    }
    if block.is_single_line() {
        if is_transition(line) {
            return Some(Element::Transition(line.trim().to_string()));
        }
        if !CENTERED.is_match(line) {
            if let Some(caps) = FORCED_TRANSITION.captures(line) {
                let text = caps.get(1).map_or("", |m| m.as_str()).to_string();
                return Some(Element::Transition(text));
            }
        }
    }
    None
}

/// 对单个原始块分类
///
/// 首行决定块的类型；块内其余各行按状态机逐行处理，对白在块结束（空行）时结束。
pub fn classify_block(
    block: &RawBlock,
    conf: &Conf,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut action: Vec<String> = Vec::new();
    let mut state = ClassifierState::None;

    let flush_action = |action: &mut Vec<String>, elements: &mut Vec<Element>| {
        if !action.is_empty() {
            elements.push(Element::Action(action.join("\n")));
            action.clear();
        }
    };

    let mut rest = &block.lines[..];
    if let Some(element) = classify_first_line(block) {
        elements.push(element);
        rest = &block.lines[1..];
    }

    for (offset, line) in rest.iter().enumerate() {
        let index = block.lines.len() - rest.len() + offset;
        let is_first = index == 0;
        let has_next = index + 1 < block.lines.len();

        if let Some(caps) = ACTION_FORCE.captures(line) {
            let indent = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(3).map_or("", |m| m.as_str());
            if state == ClassifierState::AfterCue {
                report_unterminated(block, index, diagnostics);
            }
            state = ClassifierState::None;
            action.push(format!("{}{}", indent, text));
            continue;
        }

        let forced_cue = CHARACTER_FORCE.is_match(line);
        let starts_run = forced_cue
            || (is_first && has_next && !state.in_speaker_run() && is_character_cue(line));
        if starts_run {
            if state == ClassifierState::AfterCue {
                report_unterminated(block, index, diagnostics);
            }
            flush_action(&mut action, &mut elements);
            elements.push(Element::CharacterCue(parse_character_cue(line, conf)));
            state = ClassifierState::AfterCue;
            continue;
        }

        if state.in_speaker_run() {
            if is_parenthetical(line) {
                elements.push(Element::Parenthetical(line.trim().to_string()));
                state = ClassifierState::AfterParenthetical;
            } else {
                elements.push(Element::Dialogue(line.trim().to_string()));
                state = ClassifierState::InDialogue;
            }
            continue;
        }

        if let Some(caps) = CENTERED.captures(line) {
            flush_action(&mut action, &mut elements);
            let text = caps.get(1).map_or("", |m| m.as_str()).to_string();
            elements.push(Element::Centered(text));
            continue;
        }
        if let Some(caps) = LYRIC.captures(line) {
            flush_action(&mut action, &mut elements);
            let text = caps.get(1).map_or("", |m| m.as_str()).to_string();
            elements.push(Element::Lyric(text));
            continue;
        }

        action.push(line.to_string());
    }

    if state == ClassifierState::AfterCue {
        report_unterminated(block, block.lines.len(), diagnostics);
    }
    flush_action(&mut action, &mut elements);
    elements
}

fn report_unterminated(block: &RawBlock, index: usize, diagnostics: &mut Vec<Diagnostic>) {
    let line = block.start_line + index.saturating_sub(1);
    Diagnostic::new(DiagnosticKind::UnterminatedSpeakerRun, line, "角色名后没有对白")
        .report(diagnostics);
}

/// 依次对所有正文块分类
pub fn classify(
    blocks: &[RawBlock],
    conf: &Conf,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Element> {
    blocks
        .iter()
        .flat_map(|block| classify_block(block, conf, diagnostics))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::text_processor::split_blocks;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classify_text(text: &str) -> Vec<Element> {
        let blocks = split_blocks(text);
        classify(&blocks, &Conf::default(), &mut Vec::new())
    }

    fn cue(name: &str) -> Element {
        Element::CharacterCue(CharacterCue::new(name))
    }

    #[rstest]
    #[case("INT. MESS")]
    #[case("EXT. NOSTROMO - NIGHT")]
    #[case("est. city skyline")]
    #[case("INT/EXT. CAR - MOVING")]
    #[case("I/E AIRLOCK")]
    #[case("int mess hall")]
    #[case("KANE'S QUARTERS - LATER")]
    fn recognizes_scene_headings(#[case] line: &str) {
        assert!(is_scene_heading(line), "{line}");
    }

    #[rstest]
    #[case("INTERIOR decorating is hard.")]
    #[case("Esther walks in.")]
    #[case("KANE")]
    #[case("The Kitchen - Day")]
    fn rejects_non_headings(#[case] line: &str) {
        assert!(!is_scene_heading(line), "{line}");
    }

    #[test]
    fn forced_heading_and_scene_number() {
        assert_eq!(
            classify_text(".MESS HALL #12A#\n"),
            vec![Element::SceneHeading {
                text: "MESS HALL".into(),
                number: Some("12A".into())
            }]
        );
        assert_eq!(
            classify_text("...and then nothing.\n"),
            vec![Element::Action("...and then nothing.".into())]
        );
    }

    #[rstest]
    #[case("CUT TO:")]
    #[case("SMASH CUT TO:")]
    #[case("DISSOLVE TO:")]
    #[case("FADE OUT.")]
    fn recognizes_transitions(#[case] line: &str) {
        assert_eq!(classify_text(line), vec![Element::Transition(line.into())]);
    }

    #[test]
    fn forced_transition_and_centered() {
        assert_eq!(
            classify_text("> Burn to white.\n"),
            vec![Element::Transition("Burn to white.".into())]
        );
        assert_eq!(classify_text("> THE END <\n"), vec![Element::Centered("THE END".into())]);
    }

    #[test]
    fn cue_then_dialogue() {
        assert_eq!(
            classify_text("KANE\nFirst thing I'm going to do is eat some decent food.\n"),
            vec![
                cue("KANE"),
                Element::Dialogue("First thing I'm going to do is eat some decent food.".into()),
            ]
        );
    }

    #[test]
    fn cue_parenthetical_dialogue() {
        assert_eq!(
            classify_text("KANE\n(stands up)\nOoooooh.\n"),
            vec![
                cue("KANE"),
                Element::Parenthetical("(stands up)".into()),
                Element::Dialogue("Ooooooh.".into()),
            ]
        );
    }

    #[test]
    fn lone_uppercase_line_is_action() {
        assert_eq!(
            classify_text("BANG!\n\nKane screams.\n"),
            vec![
                Element::Action("BANG!".into()),
                Element::Action("Kane screams.".into()),
            ]
        );
    }

    #[test]
    fn punctuation_only_line_is_not_a_cue() {
        assert_eq!(
            classify_text("...\nSilence.\n"),
            vec![Element::Action("...\nSilence.".into())]
        );
    }

    #[test]
    fn extension_and_dual_marker() {
        let elements = classify_text("RIPLEY (CONT'D) ^\nWhat's wrong.\n");
        let Element::CharacterCue(cue) = &elements[0] else {
            panic!("expected a cue, got {:?}", elements[0]);
        };
        assert_eq!(cue.name, "RIPLEY");
        assert_eq!(cue.extension.as_deref(), Some("(CONT'D)"));
        assert!(cue.continued);
        assert!(cue.dual);

        let elements = classify_text("^LAMBERT\nWhat's the matter.\n");
        assert!(matches!(&elements[0], Element::CharacterCue(c) if c.dual && c.name == "LAMBERT"));
    }

    #[test]
    fn forced_action_and_forced_cue() {
        assert_eq!(
            classify_text("!SCANNING THE AREA\nNothing moves.\n"),
            vec![Element::Action("SCANNING THE AREA\nNothing moves.".into())]
        );
        assert_eq!(
            classify_text("@McCLANE\nYippee ki-yay.\n"),
            vec![cue("McCLANE"), Element::Dialogue("Yippee ki-yay.".into())]
        );
    }

    #[test]
    fn forced_cue_without_dialogue_is_reported() {
        let blocks = split_blocks("@Mother\n");
        let mut diags = Vec::new();
        let elements = classify(&blocks, &Conf::default(), &mut diags);
        assert_eq!(elements, vec![cue("Mother")]);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::UnterminatedSpeakerRun);
    }

    #[test]
    fn uppercase_line_inside_action_is_action() {
        assert_eq!(
            classify_text("The door opens.\nKANE\nwalks in.\n"),
            vec![Element::Action("The door opens.\nKANE\nwalks in.".into())]
        );
    }

    #[test]
    fn sections_synopses_and_page_breaks() {
        assert_eq!(
            classify_text("# ACT ONE\n\n## Arrival\n\n= The crew wakes up.\n\n===\n"),
            vec![
                Element::Section { level: 1, text: "ACT ONE".into() },
                Element::Section { level: 2, text: "Arrival".into() },
                Element::Synopsis("The crew wakes up.".into()),
                Element::PageBreak,
            ]
        );
    }

    #[test]
    fn lyrics() {
        assert_eq!(
            classify_text("~Willy Wonka! Willy Wonka!\n"),
            vec![Element::Lyric("Willy Wonka! Willy Wonka!".into())]
        );
    }

    #[test]
    fn heading_block_with_trailing_action() {
        assert_eq!(
            classify_text("INT. MESS\nThe crew eats.\n"),
            vec![
                Element::SceneHeading { text: "INT. MESS".into(), number: None },
                Element::Action("The crew eats.".into()),
            ]
        );
    }
}
