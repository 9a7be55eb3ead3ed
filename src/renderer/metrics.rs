//! Static Helvetica metrics and WinAnsi encoding for the base-14 fonts
//!
//! Widths are AFM units (1/1000 em) for ASCII 0x20..=0x7E, indexed by
//! `char - 32`. The oblique faces share the upright widths.

use crate::layout::{FontStyle, TextMeasure};

const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
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

const FALLBACK_WIDTH: u16 = 556;

const MM_PER_PT: f64 = 25.4 / 72.0;

/// PostScript name of the base-14 face used for a style
pub fn base_font(font: FontStyle) -> &'static str {
    match font {
        FontStyle::Normal => "Helvetica",
        FontStyle::Bold => "Helvetica-Bold",
        FontStyle::Italic => "Helvetica-Oblique",
        FontStyle::BoldItalic => "Helvetica-BoldOblique",
    }
}

/// Width of one character in AFM units
pub fn char_width(c: char, font: FontStyle) -> u16 {
    let table = if font.is_bold() {
        &HELVETICA_BOLD
    } else {
        &HELVETICA
    };
    let lookup = |c: char| table[c as usize - 32];

    match c {
        ' '..='~' => lookup(c),
        '•' => 350,
        '–' | '€' => 556,
        '—' => 1000,
        '‘' | '’' => {
            if font.is_bold() {
                278
            } else {
                222
            }
        }
        '“' | '”' => {
            if font.is_bold() {
                500
            } else {
                333
            }
        }
        _ => base_letter(c).map(lookup).unwrap_or(FALLBACK_WIDTH),
    }
}

/// ASCII letter an accented Latin-1 letter is measured as
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(base)
}

/// Encode text for a WinAnsiEncoding font; unmappable characters become `?`
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Text measurement with the standard Helvetica metrics
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl TextMeasure for HelveticaMetrics {
    fn measure_width(&self, text: &str, font: FontStyle, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(char_width(c, font))).sum();
        f64::from(units) / 1000.0 * size * MM_PER_PT
    }
}
