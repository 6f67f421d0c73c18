//! Stylesheet reader using the `cssparser` crate.
//!
//! This module tokenizes CSS input and builds a [`Document`] out of it. It
//! keeps the text of selectors, at-rule preludes and declaration values so
//! that a transform can read them back as strings. Comments next to
//! whitespace are left out of that text.

use cssparser::{
    Delimiter, ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, SourceLocation,
    Token,
};

type CssResult<'i, T> = std::result::Result<T, CssParseError<'i, Error>>;
use std::path::{Path, PathBuf};

use crate::document::{Document, NodeId, NodeKind, Position, SourceSpan};
use crate::logging::targets;
use crate::{Error, Result};

/// Parse a CSS stylesheet string into a document tree.
///
/// # Error Recovery
///
/// A statement that is neither a block, an at-rule nor a `property: value`
/// declaration does not fail the parse. The reader:
/// 1. Logs the problem via `tracing::warn!`
/// 2. Skips to the end of the statement
/// 3. Continues with the next one
///
/// # Example
///
/// ```
/// use type_shorthand_core::parse_css;
///
/// let doc = parse_css("@type --s 15px; h1 { type: 20px 30px; }").unwrap();
/// assert_eq!(doc.children(doc.root()).unwrap().len(), 2);
/// ```
pub fn parse_css(css: &str) -> Result<Document> {
    parse_into(Document::new(), css)
}

/// Parse a CSS stylesheet, recording `file` for diagnostics.
pub fn parse_css_with_file(css: &str, file: impl Into<PathBuf>) -> Result<Document> {
    parse_into(Document::with_file(file), css)
}

/// Load and parse a stylesheet from a file.
///
/// The path is recorded on the document so diagnostics can name it.
pub fn parse_css_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_css_with_file(&content, path)
}

fn parse_into(mut doc: Document, css: &str) -> Result<Document> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let root = doc.root();

    parse_block_contents(&mut parser, &mut doc, root)?;

    tracing::debug!(target: targets::PARSER, nodes = doc.len(), "parsed stylesheet");
    Ok(doc)
}

/// Parse the statements of the root or of a `{ ... }` block into `parent`.
fn parse_block_contents(
    parser: &mut Parser<'_, '_>,
    doc: &mut Document,
    parent: NodeId,
) -> Result<()> {
    loop {
        let start = parser.current_source_location();
        let state = parser.state();

        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) | Token::Semicolon => {}
            Token::Comment(text) => {
                let id = doc.create_comment(text);
                doc.append(parent, id)?;
                set_span(doc, id, start, parser.current_source_location())?;
            }
            Token::AtKeyword(name) => {
                parse_at_rule(parser, doc, parent, name.to_string(), start)?;
            }
            _ => {
                parser.reset(&state);
                parse_rule_or_declaration(parser, doc, parent, start)?;
            }
        }
    }

    Ok(())
}

/// Parse an at-rule after its `@name` token.
fn parse_at_rule(
    parser: &mut Parser<'_, '_>,
    doc: &mut Document,
    parent: NodeId,
    name: String,
    start: SourceLocation,
) -> Result<()> {
    let params = parser
        .parse_until_before(Delimiter::Semicolon | Delimiter::CurlyBracketBlock, |p| {
            text_without_comments(p)
        })
        .map_err(into_error)?
        .trim()
        .to_string();

    let has_block = matches!(parser.next(), Ok(Token::CurlyBracketBlock));
    let id = if has_block {
        doc.create_at_rule_block(name, params)
    } else {
        doc.create_at_rule(name, params)
    };
    doc.append(parent, id)?;

    if has_block {
        parse_nested(parser, doc, id)?;
    }

    set_span(doc, id, start, parser.current_source_location())?;
    Ok(())
}

/// Parse either `selector { ... }` or `property: value`.
fn parse_rule_or_declaration(
    parser: &mut Parser<'_, '_>,
    doc: &mut Document,
    parent: NodeId,
    start: SourceLocation,
) -> Result<()> {
    let text = parser
        .parse_until_before(Delimiter::Semicolon | Delimiter::CurlyBracketBlock, |p| {
            text_without_comments(p)
        })
        .map_err(into_error)?;

    if matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        let id = doc.create_rule(text.trim());
        doc.append(parent, id)?;
        parse_nested(parser, doc, id)?;
        set_span(doc, id, start, parser.current_source_location())?;
        return Ok(());
    }

    let Some((property, value)) = text.split_once(':') else {
        tracing::warn!(
            target: targets::PARSER,
            line = start.line + 1,
            column = start.column,
            "Skipping statement without ':': {}",
            text.trim()
        );
        return Ok(());
    };

    let property = property.trim();
    if property.is_empty() {
        tracing::warn!(
            target: targets::PARSER,
            line = start.line + 1,
            column = start.column,
            "Skipping declaration without a property name"
        );
        return Ok(());
    }

    let (value, important) = split_important(value);
    let id = doc.create_declaration(property, value);
    if important
        && let NodeKind::Declaration { important, .. } = doc.kind_mut(id)?
    {
        *important = true;
    }
    doc.append(parent, id)?;
    set_span(doc, id, start, parser.current_source_location())?;
    Ok(())
}

/// Parse the block that was just opened by a `{` token.
fn parse_nested(parser: &mut Parser<'_, '_>, doc: &mut Document, parent: NodeId) -> Result<()> {
    parser
        .parse_nested_block(|p| {
            parse_block_contents(p, doc, parent).map_err(|e| p.new_custom_error(e))
        })
        .map_err(into_error)
}

fn consume_all<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, ()> {
    while parser.next_including_whitespace_and_comments().is_ok() {}
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Space,
    Comment,
    Other,
}

/// Consume the rest of the input and return its text.
///
/// A comment bordered by whitespace or by either end of the text is dropped.
/// A comment wedged between two tokens stays, so the tokens are not joined.
/// Comments inside `(...)`, `[...]` and functions are kept verbatim.
fn text_without_comments<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, String> {
    let mut pieces = Vec::new();
    loop {
        let before = parser.position();
        let (piece, opens_block) = match parser.next_including_whitespace_and_comments() {
            Ok(Token::WhiteSpace(_)) => (Piece::Space, false),
            Ok(Token::Comment(_)) => (Piece::Comment, false),
            Ok(
                Token::Function(_)
                | Token::ParenthesisBlock
                | Token::SquareBracketBlock
                | Token::CurlyBracketBlock,
            ) => (Piece::Other, true),
            Ok(_) => (Piece::Other, false),
            Err(_) => break,
        };
        if opens_block {
            parser.parse_nested_block(|p| consume_all(p))?;
        }
        pieces.push((piece, parser.slice_from(before)));
    }

    let loose = |piece: Option<&(Piece, &str)>| {
        matches!(piece, None | Some((Piece::Space, _)))
    };
    let mut text = String::new();
    for (i, &(piece, slice)) in pieces.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|j| pieces.get(j));
        if piece == Piece::Comment && (loose(prev) || loose(pieces.get(i + 1))) {
            continue;
        }
        text.push_str(slice);
    }
    Ok(text)
}

/// Strip a trailing `!important` flag from a declaration value.
fn split_important(value: &str) -> (&str, bool) {
    const FLAG: &str = "!important";

    let trimmed = value.trim();
    if trimmed.len() >= FLAG.len()
        && trimmed.is_char_boundary(trimmed.len() - FLAG.len())
        && trimmed[trimmed.len() - FLAG.len()..].eq_ignore_ascii_case(FLAG)
    {
        (trimmed[..trimmed.len() - FLAG.len()].trim_end(), true)
    } else {
        (trimmed, false)
    }
}

fn set_span(
    doc: &mut Document,
    id: NodeId,
    start: SourceLocation,
    end: SourceLocation,
) -> Result<()> {
    let span = SourceSpan::at(start.line + 1, start.column)
        .with_end(Position::new(end.line + 1, end.column));
    doc.set_source(id, Some(span))?;
    Ok(())
}

/// Turn a `cssparser` error into a reader error.
///
/// Custom errors carry a failure from building the tree. Basic errors come
/// from `cssparser` itself, for example when a closure passed to
/// `parse_until_before` leaves input behind.
fn into_error(error: CssParseError<'_, Error>) -> Error {
    let (line, column) = (error.location.line + 1, error.location.column);
    match error.kind {
        ParseErrorKind::Custom(inner) => inner,
        ParseErrorKind::Basic(kind) => Error::parse(format!("{kind:?}"), line, column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::BasicParseErrorKind;

    fn kinds(doc: &Document, parent: NodeId) -> Vec<NodeKind> {
        doc.children(parent)
            .unwrap()
            .iter()
            .map(|&id| doc.kind(id).unwrap().clone())
            .collect()
    }

    #[test]
    fn parse_blockless_at_rule() {
        let doc = parse_css("@type --s 10px 15px;").unwrap();

        assert_eq!(
            kinds(&doc, doc.root()),
            vec![NodeKind::AtRule {
                name: "type".into(),
                params: "--s 10px 15px".into(),
                has_block: false,
            }]
        );
    }

    #[test]
    fn parse_at_rule_without_params_or_semicolon() {
        let doc = parse_css("@type").unwrap();

        assert_eq!(
            kinds(&doc, doc.root()),
            vec![NodeKind::AtRule {
                name: "type".into(),
                params: String::new(),
                has_block: false,
            }]
        );
    }

    #[test]
    fn parse_params_keep_inner_whitespace() {
        let doc = parse_css("@type --s    /    / 1px;").unwrap();
        let child = doc.children(doc.root()).unwrap()[0];

        assert!(matches!(
            doc.kind(child).unwrap(),
            NodeKind::AtRule { params, .. } if params == "--s    /    / 1px"
        ));
    }

    #[test]
    fn parse_rule_with_declarations() {
        let doc = parse_css("h1 { type: 20px 30px; color: red !important }").unwrap();
        let rule = doc.children(doc.root()).unwrap()[0];

        assert_eq!(
            doc.kind(rule).unwrap(),
            &NodeKind::Rule {
                selector: "h1".into()
            }
        );
        assert_eq!(
            kinds(&doc, rule),
            vec![
                NodeKind::Declaration {
                    property: "type".into(),
                    value: "20px 30px".into(),
                    important: false,
                },
                NodeKind::Declaration {
                    property: "color".into(),
                    value: "red".into(),
                    important: true,
                },
            ]
        );
    }

    #[test]
    fn parse_selector_with_colon() {
        let doc = parse_css("a:hover { color: red }").unwrap();
        let rule = doc.children(doc.root()).unwrap()[0];

        assert_eq!(
            doc.kind(rule).unwrap(),
            &NodeKind::Rule {
                selector: "a:hover".into()
            }
        );
    }

    #[test]
    fn parse_nested_at_rule_block() {
        let css = "@media (min-width: 10px) { h1 { @type 12px; } }";
        let doc = parse_css(css).unwrap();
        let media = doc.children(doc.root()).unwrap()[0];
        let rule = doc.children(media).unwrap()[0];

        assert!(doc.kind(media).unwrap().is_at_rule_named("media"));
        assert!(matches!(
            doc.kind(media).unwrap(),
            NodeKind::AtRule { params, has_block: true, .. } if params == "(min-width: 10px)"
        ));
        assert!(doc.kind(doc.children(rule).unwrap()[0]).unwrap().is_at_rule_named("type"));
    }

    #[test]
    fn parse_comments() {
        let doc = parse_css("/* heading */ h1 {}").unwrap();

        assert_eq!(
            kinds(&doc, doc.root())[0],
            NodeKind::Comment {
                text: " heading ".into()
            }
        );
    }

    #[test]
    fn params_and_values_drop_loose_comments() {
        let doc = parse_css("@type --s /* big */ 10px 15px; h1 { type: 10px /* lh */ 15px; }")
            .unwrap();
        let children = doc.children(doc.root()).unwrap();

        assert!(matches!(
            doc.kind(children[0]).unwrap(),
            NodeKind::AtRule { params, .. } if params == "--s  10px 15px"
        ));
        assert_eq!(
            kinds(&doc, children[1]),
            vec![NodeKind::Declaration {
                property: "type".into(),
                value: "10px  15px".into(),
                important: false,
            }]
        );
    }

    #[test]
    fn comments_at_the_edges_are_dropped() {
        let doc = parse_css("h1 /* title */ { color: /* x */ red /* y */ }").unwrap();
        let rule = doc.children(doc.root()).unwrap()[0];

        assert_eq!(
            doc.kind(rule).unwrap(),
            &NodeKind::Rule {
                selector: "h1".into()
            }
        );
        assert!(matches!(
            doc.kind(doc.children(rule).unwrap()[0]).unwrap(),
            NodeKind::Declaration { value, .. } if value == "red"
        ));
    }

    #[test]
    fn wedged_and_nested_comments_are_kept() {
        let doc = parse_css("@x a/**/b; @media (min-width: /* w */ 10px) {}").unwrap();
        let children = doc.children(doc.root()).unwrap();

        assert!(matches!(
            doc.kind(children[0]).unwrap(),
            NodeKind::AtRule { params, .. } if params == "a/**/b"
        ));
        assert!(matches!(
            doc.kind(children[1]).unwrap(),
            NodeKind::AtRule { params, .. } if params == "(min-width: /* w */ 10px)"
        ));
    }

    #[test]
    fn basic_errors_become_parse_errors() {
        let mut input = ParserInput::new("h1");
        let parser = Parser::new(&mut input);

        let err = into_error(parser.new_error(BasicParseErrorKind::QualifiedRuleInvalid));
        assert!(matches!(err, Error::Parse { line: 1, column: 1, .. }));
    }

    #[test]
    fn parse_records_positions() {
        let doc = parse_css_with_file("h1 {\n  type: 10px;\n}", "app.css").unwrap();
        let rule = doc.children(doc.root()).unwrap()[0];
        let decl = doc.children(rule).unwrap()[0];

        let loc = doc.location(decl).unwrap();
        assert_eq!((loc.line, loc.column), (2, 3));
        assert_eq!(loc.to_string(), "app.css:2:3");
    }

    #[test]
    fn skip_statement_without_colon() {
        let doc = parse_css("h1 { garbage; color: red }").unwrap();
        let rule = doc.children(doc.root()).unwrap()[0];

        assert_eq!(doc.children(rule).unwrap().len(), 1);
        assert!(doc.kind(doc.children(rule).unwrap()[0]).unwrap().is_declaration_of("color"));
    }

    #[test]
    fn split_important_flag() {
        assert_eq!(split_important(" red !important "), ("red", true));
        assert_eq!(split_important("red !IMPORTANT"), ("red", true));
        assert_eq!(split_important("red"), ("red", false));
    }
}
