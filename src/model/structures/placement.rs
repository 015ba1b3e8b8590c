use std::fmt;

/// Canonical placement key parsed from a free-form rank label.
///
/// The dataset names the same placement in several ways depending on which
/// record produced it: final results use ASCII ordinals ("1st", "5th"),
/// scoring rules and honor rolls use the Chinese labels ("冠军", "第五"),
/// and display rows may decorate the label ("1st 🥇"). All synonyms parse
/// to the same key so that a rule table written in one script scores
/// placements recorded in the other.
///
/// Labels that are not placements at all ("3-0", "A组") parse to `None`;
/// callers treat those rows as unscored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    Champion,
    RunnerUp,
    Third,
    Fourth,
    Nth(u32)
}

impl Placement {
    pub fn parse(label: &str) -> Option<Placement> {
        // Decorations ("1st 🥇") follow the label after whitespace.
        let token = label.split_whitespace().next()?;

        match token {
            "冠军" => return Some(Placement::Champion),
            "亚军" => return Some(Placement::RunnerUp),
            "季军" => return Some(Placement::Third),
            "殿军" => return Some(Placement::Fourth),
            _ => {}
        }

        parse_ascii_ordinal(token)
            .or_else(|| parse_cjk_ordinal(token))
            .map(Placement::from_rank)
    }

    fn from_rank(rank: u32) -> Placement {
        match rank {
            1 => Placement::Champion,
            2 => Placement::RunnerUp,
            3 => Placement::Third,
            4 => Placement::Fourth,
            n => Placement::Nth(n)
        }
    }
}

/// "1st", "2nd", "3rd", "12th"
fn parse_ascii_ordinal(token: &str) -> Option<u32> {
    let digits_end = token.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }

    let (digits, suffix) = token.split_at(digits_end);
    match suffix {
        "st" | "nd" | "rd" | "th" => digits.parse().ok(),
        _ => None
    }
}

/// "第五", "第10"
fn parse_cjk_ordinal(token: &str) -> Option<u32> {
    let rest = token.strip_prefix('第')?;

    if rest.chars().all(|c| c.is_ascii_digit()) && !rest.is_empty() {
        return rest.parse().ok();
    }

    match rest {
        "一" => Some(1),
        "二" => Some(2),
        "三" => Some(3),
        "四" => Some(4),
        "五" => Some(5),
        "六" => Some(6),
        "七" => Some(7),
        "八" => Some(8),
        "九" => Some(9),
        "十" => Some(10),
        _ => None
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Champion => write!(f, "1st"),
            Placement::RunnerUp => write!(f, "2nd"),
            Placement::Third => write!(f, "3rd"),
            Placement::Fourth => write!(f, "4th"),
            Placement::Nth(n) => write!(f, "{}th", n)
        }
    }
}
