//! Byte classification tables.
//!
//! All tables are `const` data built at compile time. Each is indexed by
//! byte value, so a lookup is one load. Non-ASCII bytes are never members:
//! they only appear inside opaque zones (quoted values, attribute sets,
//! text nodes), which the scanner passes through without classifying.

/// `[`
pub const SQUARE_BRACE_L: u8 = b'[';
/// `]`
pub const SQUARE_BRACE_R: u8 = b']';
/// `(`
pub const ROUND_BRACE_L: u8 = b'(';
/// `)`
pub const ROUND_BRACE_R: u8 = b')';
/// `{`
pub const CURLY_BRACE_L: u8 = b'{';
/// `}`
pub const CURLY_BRACE_R: u8 = b'}';
/// `>`
pub const ANGLE_RIGHT: u8 = b'>';
/// `<`
pub const ANGLE_LEFT: u8 = b'<';

/// Non-alphanumeric bytes allowed in an abbreviation outside brackets.
const SPECIAL: &[u8] = b"#.*:$-_!@%^+>/";

/// Operators that need an operand on their left: multiply, sibling,
/// child and climb-up.
const LEADING_OPERATORS: &[u8] = b"*+>^";

#[allow(
    clippy::cast_lossless,
    reason = "usize::from is not callable in const fn"
)]
const fn build_table(members: &[u8], alphanumeric: bool) -> [bool; 256] {
    let mut table = [false; 256];
    if alphanumeric {
        let mut b: u8 = 0;
        while b < 128 {
            table[b as usize] = b.is_ascii_alphanumeric();
            b += 1;
        }
    }
    let mut i = 0;
    while i < members.len() {
        table[members[i] as usize] = true;
        i += 1;
    }
    table
}

static ABBREVIATION: [bool; 256] = build_table(SPECIAL, true);
static OPERATOR: [bool; 256] = build_table(LEADING_OPERATORS, false);

/// ASCII letter, digit, or one of `# . * : $ - _ ! @ % ^ + > /`.
#[inline]
pub fn is_abbreviation(b: u8) -> bool {
    ABBREVIATION[usize::from(b)]
}

/// One of the operators stripped from the front of an extracted span.
#[inline]
pub fn is_leading_operator(b: u8) -> bool {
    OPERATOR[usize::from(b)]
}

/// Space, tab, and the other ASCII whitespace bytes.
#[inline]
pub fn is_white_space(b: u8) -> bool {
    b.is_ascii_whitespace()
}

/// Bytes allowed in a tag or attribute name: ASCII letters, digits, `-`, `:`.
#[inline]
pub fn is_ident(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':'
}

/// The close byte paired with an open bracket, if `open` is one.
#[inline]
pub fn matching_close(open: u8) -> Option<u8> {
    match open {
        SQUARE_BRACE_L => Some(SQUARE_BRACE_R),
        ROUND_BRACE_L => Some(ROUND_BRACE_R),
        CURLY_BRACE_L => Some(CURLY_BRACE_R),
        _ => None,
    }
}
