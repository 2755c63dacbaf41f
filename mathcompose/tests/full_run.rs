use mathcompose::{
    emit::Line,
    resolve,
    sequence::KeySequence,
    tables::{Case, GREEK_FONTS, LATIN_FONTS},
    CharacterNames, GenerateOptions, Generator, ResolutionRequest, Summary, Tables, UcdNames,
};
use std::{collections::HashSet, sync::OnceLock};

fn names() -> &'static UcdNames {
    static NAMES: OnceLock<UcdNames> = OnceLock::new();
    NAMES.get_or_init(|| UcdNames::load().unwrap())
}

fn lookup(style: &str, case: Case, letter: &str) -> Option<char> {
    resolve(names(), &ResolutionRequest::new(style, case, letter))
}

#[test]
fn resolve_scenarios() {
    assert_eq!(lookup("BOLD", Case::Capital, "A"), Some('\u{1D400}'));
    assert_eq!(lookup("GREEK", Case::Small, "alpha"), Some('\u{03B1}'));
    assert_eq!(lookup("GREEK", Case::Small, "final sigma"), Some('\u{03C2}'));
    assert_eq!(lookup("GREEK", Case::Capital, "lamda"), Some('\u{039B}'));
    assert_eq!(lookup("ITALIC", Case::Small, "H"), Some('\u{210E}'));
    assert_eq!(lookup("ITALIC", Case::Small, "I"), Some('\u{1D456}'));
    assert_eq!(lookup("FRAKTUR", Case::Capital, "C"), Some('\u{212D}'));
    assert_eq!(lookup("FRAKTUR", Case::Capital, "A"), Some('\u{1D504}'));
    assert_eq!(lookup("SCRIPT", Case::Capital, "B"), Some('\u{212C}'));
    assert_eq!(lookup("SCRIPT", Case::Small, "E"), Some('\u{212F}'));
    assert_eq!(lookup("DOUBLE-STRUCK", Case::Capital, "R"), Some('\u{211D}'));
    assert_eq!(lookup("DOUBLE-STRUCK", Case::Digit, "ZERO"), Some('\u{1D7D8}'));
    assert_eq!(lookup("SANS-SERIF BOLD ITALIC", Case::Small, "omega"), Some('\u{1D7C2}'));
    assert_eq!(lookup("SCRIPT", Case::Capital, "NOT A LETTER"), None);
    assert_eq!(lookup("GREEK", Case::Small, "A"), None);
}

#[test]
fn resolve_is_deterministic() {
    let tables = Tables::standard().unwrap();
    for group in &tables.groups {
        for font in &group.fonts {
            for entry in group.alphabet.entries() {
                let req = ResolutionRequest::new(&font.style(), group.case, &entry.name);
                assert_eq!(resolve(names(), &req), resolve(names(), &req));
            }
        }
    }
}

#[test]
fn full_run() {
    let tables = Tables::standard().unwrap();
    let generator = Generator::new(&tables, names()).options(GenerateOptions { strict: true });
    assert_eq!(generator.lines().count(), tables.line_count());
    assert_eq!(tables.line_count(), 1063);

    let mut out = Vec::new();
    let mut diag = Vec::new();
    let summary = generator.write_to(&mut out, &mut diag).unwrap();
    assert_eq!(summary, Summary { mapped: 1063 - 43, missing: 0 });
    assert!(diag.is_empty());

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "# bold capital letter ⟨b⟩:");
    assert_eq!(lines[2], "<Multi_key> <f> <b> <A> : \"𝐀\"");
    assert!(lines.contains(&"<Multi_key> <f> <i> <h> : \"ℎ\""));
    assert!(lines.contains(&"<Multi_key> <f> <f> <C> : \"ℭ\""));
    assert!(lines.contains(&"# greek small letter ⟨g⟩:"));
    assert!(lines.contains(&"<Multi_key> <g> <a> : \"α\""));
    assert!(lines.contains(&"<Multi_key> <g> <S> : \"ς\""));
    assert!(lines.contains(&"<Multi_key> <G> <O> : \"Ω\""));
    assert!(lines.contains(&"<Multi_key> <f> <g> <b> <a> : \"𝛂\""));
    assert!(lines.contains(&"<Multi_key> <f> <G> <N> <T> : \"𝞗\""));
    assert!(lines.contains(&"# double-struck digit letter ⟨B⟩:"));
    assert_eq!(lines.last(), Some(&"<Multi_key> <f> <A> <9> : \"𝟵\""));
}

#[test]
fn sequences_are_unique() {
    let tables = Tables::standard().unwrap();
    let generator = Generator::new(&tables, names());
    let mut seen = HashSet::new();
    for line in generator.lines() {
        if let Line::Mapping { sequence, .. } = line {
            assert!(seen.insert(sequence.clone()), "duplicate sequence {sequence}");
        }
    }
    assert!(seen.contains(&KeySequence::plain(Some('G'), 'a')));
    assert!(seen.contains(&KeySequence::styled(None, 'B', '0')));
}

#[test]
fn every_font_has_a_header() {
    let tables = Tables::standard().unwrap();
    let headers = Generator::new(&tables, names())
        .lines()
        .filter(|x| matches!(x, Line::Header { .. }))
        .count();
    assert_eq!(headers, 2 * LATIN_FONTS.len() + 2 * GREEK_FONTS.len() + 5);
    assert!(names().lookup("PLANCK CONSTANT").is_some());
}
