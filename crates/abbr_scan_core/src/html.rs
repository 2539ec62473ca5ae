//! HTML-like tag detection, read backward from a `>`.
//!
//! The extractor calls [`is_at_html_tag`] whenever it meets a `>` outside of
//! brackets. A `>` is an abbreviation operator (child) unless it closes a
//! tag such as `<div class="x">` or `</p>`, in which case the abbreviation
//! must not extend to its left.
//!
//! Recognised shape, written left to right:
//!
//! ```text
//! < /? name (ws+ attr)* ws* /? >
//! attr  = name | name=value | name="..." | name='...'
//! value = run of bytes except whitespace, quotes, `=`, `<`, `>`
//! ```

use crate::chars::{is_ident, is_white_space, ANGLE_LEFT, ANGLE_RIGHT};
use crate::quotes::{eat_quoted, is_quote};
use crate::BackCursor;

const SLASH: u8 = b'/';
const EQUALS: u8 = b'=';

/// One whitespace-separated piece of a tag, read right to left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TagPart {
    /// A bare identifier: the tag name or a boolean attribute.
    Name,
    /// `name=value` with a quoted or unquoted value.
    Attribute,
}

/// Returns `true` if the bytes ending at the cursor form an HTML-like tag.
///
/// The cursor must sit right after the candidate `>`. It is taken by value,
/// so the caller's position is never affected.
pub fn is_at_html_tag(mut cursor: BackCursor<'_>) -> bool {
    if !cursor.eat(ANGLE_RIGHT) {
        return false;
    }

    // self-closing `<br/>` or `<br />`
    cursor.eat(SLASH);
    cursor.eat_while(is_white_space);

    loop {
        match eat_tag_part(&mut cursor) {
            Some(TagPart::Name) => {
                if cursor.eat(ANGLE_LEFT) {
                    return true;
                }
                if cursor.eat(SLASH) {
                    // closing tag: `</name>`
                    return cursor.eat(ANGLE_LEFT);
                }
                if !cursor.eat_while(is_white_space) {
                    return false;
                }
            }
            Some(TagPart::Attribute) => {
                // an attribute is never the first thing after `<`
                if !cursor.eat_while(is_white_space) {
                    return false;
                }
            }
            None => return false,
        }
    }
}

/// Consume one name or attribute behind the cursor.
fn eat_tag_part(cursor: &mut BackCursor<'_>) -> Option<TagPart> {
    if cursor.peek().is_some_and(is_quote) {
        let ok = eat_quoted(cursor) && cursor.eat(EQUALS) && cursor.eat_while(is_ident);
        return ok.then_some(TagPart::Attribute);
    }

    let end = *cursor;
    if cursor.eat_while(is_unquoted_value) && cursor.eat(EQUALS) && cursor.eat_while(is_ident) {
        return Some(TagPart::Attribute);
    }

    *cursor = end;
    cursor.eat_while(is_ident).then_some(TagPart::Name)
}

fn is_unquoted_value(b: u8) -> bool {
    !is_white_space(b) && !is_quote(b) && b != EQUALS && b != ANGLE_LEFT && b != ANGLE_RIGHT
}
