//! Text measurement and word wrap
//!
//! Widths come from the standard Helvetica AFM tables so that the line count
//! used for page-break decisions is the same one the renderer draws. Builtin
//! PDF fonts only cover a Latin subset, so text is folded to ASCII first.

/// Millimeters per typographic point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Font faces used by the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// Fallback width for characters outside the table (1/1000 em)
const AVERAGE_CHAR_WIDTH: u16 = 556;

/// Helvetica advance widths for ASCII 0x20..=0x7E (1/1000 em)
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // sp .. /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0 .. 9
    278, 278, 584, 584, 584, 556, 1015,                                             // : .. @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // A .. M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N .. Z
    278, 278, 278, 469, 556, 333,                                                   // [ .. `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // a .. m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // n .. z
    334, 260, 334, 584,                                                             // { .. ~
];

/// Helvetica-Bold advance widths for ASCII 0x20..=0x7E (1/1000 em)
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn char_width(c: char, style: FontStyle) -> u16 {
    let code = c as usize;
    if !(32..=126).contains(&code) {
        return AVERAGE_CHAR_WIDTH;
    }
    match style {
        // Oblique shares the upright metrics
        FontStyle::Regular | FontStyle::Italic => HELVETICA_WIDTHS[code - 32],
        FontStyle::Bold => HELVETICA_BOLD_WIDTHS[code - 32],
    }
}

/// Fold text to the ASCII subset the builtin fonts render reliably
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' => out.push(c),
            '\t' | '\n' | '\r' => out.push(' '),
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => out.push('a'),
            'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => out.push('A'),
            'ç' => out.push('c'),
            'Ç' => out.push('C'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'È' | 'É' | 'Ê' | 'Ë' => out.push('E'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'Ì' | 'Í' | 'Î' | 'Ï' => out.push('I'),
            'ñ' => out.push('n'),
            'Ñ' => out.push('N'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => out.push('o'),
            'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => out.push('O'),
            'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
            'Ù' | 'Ú' | 'Û' | 'Ü' => out.push('U'),
            'ý' | 'ÿ' => out.push('y'),
            'Ý' => out.push('Y'),
            'ß' => out.push_str("ss"),
            '‘' | '’' => out.push('\''),
            '“' | '”' => out.push('"'),
            '–' | '—' | '·' | '•' => out.push('-'),
            '…' => out.push_str("..."),
            '→' => out.push_str("->"),
            '×' => out.push('x'),
            '°' => out.push_str("deg"),
            c if c.is_control() => {}
            _ => out.push('?'),
        }
    }
    out
}

/// Width of already-sanitized text in millimeters
pub fn text_width_mm(text: &str, style: FontStyle, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, style) as u32).sum();
    units as f32 / 1000.0 * size_pt * MM_PER_PT
}

/// Greedy word wrap; words wider than a line are split by character
pub fn wrap_text(text: &str, style: FontStyle, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let clean = sanitize(text);
    let fits = |s: &str| text_width_mm(s, style, size_pt) <= max_width_mm;

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in clean.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
        } else {
            // Break an over-long word into line-sized chunks
            for c in word.chars() {
                current.push(c);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Limit to `max_chars` characters, marking the cut with `...`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let head: String = trimmed.chars().take(keep).collect();
    format!("{}...", head.trim_end())
}

/// Sanitize and shorten until the text fits `max_width_mm`
pub fn fit_to_width(text: &str, style: FontStyle, size_pt: f32, max_width_mm: f32) -> String {
    let clean = sanitize(text);
    if text_width_mm(&clean, style, size_pt) <= max_width_mm {
        return clean;
    }
    let mut chars: Vec<char> = clean.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = format!("{}...", chars.iter().collect::<String>().trim_end());
        if text_width_mm(&candidate, style, size_pt) <= max_width_mm {
            return candidate;
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_uses_metrics() {
        // 'i' is much narrower than 'W' in Helvetica
        let narrow = text_width_mm("iiii", FontStyle::Regular, 10.0);
        let wide = text_width_mm("WWWW", FontStyle::Regular, 10.0);
        assert!(wide > narrow * 3.0);

        // 1000 units at 72pt is exactly one inch
        let inch = text_width_mm("@@", FontStyle::Bold, 72.0 / 1.95);
        assert!((inch - 25.4).abs() < 0.01);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = text_width_mm("Bench Press", FontStyle::Regular, 9.0);
        let bold = text_width_mm("Bench Press", FontStyle::Bold, 9.0);
        assert!(bold > regular);
        assert_eq!(
            text_width_mm("Bench Press", FontStyle::Italic, 9.0),
            regular
        );
    }

    #[test]
    fn test_sanitize_folds_accents() {
        assert_eq!(sanitize("João Silva"), "Joao Silva");
        assert_eq!(sanitize("Ação — rápida"), "Acao - rapida");
        assert_eq!(sanitize("line\nbreak"), "line break");
        assert_eq!(sanitize("日本"), "??");
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "Keep your core braced and control the eccentric phase of every repetition \
                    while breathing out on the way up";
        let lines = wrap_text(text, FontStyle::Regular, 9.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, FontStyle::Regular, 9.0) <= 60.0);
        }
        assert_eq!(lines.join(" "), sanitize(text).split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_short_and_empty() {
        assert_eq!(wrap_text("Squat", FontStyle::Regular, 9.0, 100.0), vec!["Squat"]);
        assert!(wrap_text("", FontStyle::Regular, 9.0, 100.0).is_empty());
        assert!(wrap_text("   ", FontStyle::Regular, 9.0, 100.0).is_empty());
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let word = "a".repeat(200);
        let lines = wrap_text(&word, FontStyle::Regular, 9.0, 20.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width_mm(line, FontStyle::Regular, 9.0) <= 20.0);
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Squat", 28), "Squat");
        let long = "Single-arm dumbbell row on incline bench with pause";
        let cut = truncate_chars(long, 28);
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() <= 28);
        assert_eq!(truncate_chars("Supino inclinado com halteres", 10), "Supino...");
    }

    #[test]
    fn test_fit_to_width() {
        let fitted = fit_to_width("Posterior chain and hamstrings", FontStyle::Regular, 8.5, 25.0);
        assert!(fitted.ends_with("..."));
        assert!(text_width_mm(&fitted, FontStyle::Regular, 8.5) <= 25.0);
        assert_eq!(fit_to_width("Legs", FontStyle::Regular, 8.5, 25.0), "Legs");
    }
}
