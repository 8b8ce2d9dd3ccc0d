//! Statement parser for graph descriptions.
//!
//! A description is a sequence of statements separated by newlines or `;`:
//!
//! ```text
//! # comments run to the end of the line
//! root app.sol
//! node "lib/Safe Math.sol"
//! "lib/Safe Math.sol" -> app.sol
//! ```
//!
//! Names are either bare words (anything but whitespace, `"`, `#` and `;`)
//! or double-quoted strings. The parser recovers at the end of a broken
//! line, so every syntax error of a description is reported in one pass.

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, eof, opt, preceded, repeat, terminated},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, none_of, one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
};

/// Rich diagnostic information for syntax errors.
///
/// Attached to winnow errors via `.context()`; the error span covers
/// `start` up to the position where parsing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SyntaxDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<SyntaxDiagnostic>>;

/// A node name together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Name {
    pub(crate) value: String,
    pub(crate) span: Span,
    quoted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeclKind {
    Root,
    Node,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Statement {
    Declare { kind: DeclKind, name: Name },
    Edge { from: Name, to: Name },
}

fn inline_space(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t' || c == '\r')
        .void()
        .parse_next(input)
}

fn comment<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded('#', take_while(0.., |c: char| c != '\n')).parse_next(input)
}

/// Whitespace, empty statements and comments between statements.
fn blank(input: &mut Input<'_>) -> IResult<()> {
    repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_whitespace() || c == ';').void(),
            comment.void(),
        )),
    )
    .parse_next(input)
}

fn terminator(input: &mut Input<'_>) -> IResult<()> {
    alt(('\n'.void(), ';'.void(), eof.void())).parse_next(input)
}

fn arrow(input: &mut Input<'_>) -> IResult<bool> {
    opt(literal("->")).map(|arrow| arrow.is_some()).parse_next(input)
}

fn rest_of_line(input: &mut Input<'_>) -> IResult<()> {
    (take_while(0.., |c: char| c != '\n'), opt('\n'))
        .void()
        .parse_next(input)
}

/// Parse a double-quoted name. Only `\"` and `\\` are escapes.
fn quoted_name(input: &mut Input<'_>) -> IResult<String> {
    let start = input.current_token_start();

    let escape = preceded(
        '\\',
        cut_err(one_of(['"', '\\'])).context(SyntaxDiagnostic {
            code: ErrorCode::E003,
            message: "invalid escape sequence",
            help: Some("only `\\\"` and `\\\\` can be escaped in quoted names"),
            start,
        }),
    );

    let content = repeat(0.., alt((escape, none_of(['"', '\\', '\n'])))).fold(
        String::new,
        |mut acc: String, ch: char| {
            acc.push(ch);
            acc
        },
    );

    preceded(
        '"',
        cut_err(terminated(content, '"')).context(SyntaxDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated string literal",
            help: Some("add closing `\"` before the end of the line"),
            start,
        }),
    )
    .parse_next(input)
}

fn bare_name(input: &mut Input<'_>) -> IResult<String> {
    take_while(1.., |c: char| !c.is_whitespace() && !matches!(c, '"' | '#' | ';'))
        .verify(|word: &str| word != "->")
        .map(str::to_owned)
        .parse_next(input)
}

fn name(input: &mut Input<'_>) -> IResult<Name> {
    alt((
        quoted_name.map(|value| (value, true)),
        bare_name.map(|value| (value, false)),
    ))
    .with_span()
    .map(|((value, quoted), range)| Name {
        value,
        span: Span::new(range),
        quoted,
    })
    .parse_next(input)
}

/// Parse one `root`, `node` or edge statement, without its terminator.
fn statement(input: &mut Input<'_>) -> IResult<Statement> {
    let start = input.current_token_start();
    let first = name(input)?;
    inline_space(input)?;

    if arrow(input)? {
        inline_space(input)?;
        let to = cut_err(name)
            .context(SyntaxDiagnostic {
                code: ErrorCode::E101,
                message: "missing edge target",
                help: Some("write the dependent after the arrow: `lib.sol -> app.sol`"),
                start,
            })
            .parse_next(input)?;
        return Ok(Statement::Edge { from: first, to });
    }

    let kind = match (first.quoted, first.value.as_str()) {
        (false, "root") => DeclKind::Root,
        (false, "node") => DeclKind::Node,
        _ => {
            return Err(ErrMode::Cut(ContextError::new().add_context(
                input,
                &input.checkpoint(),
                SyntaxDiagnostic {
                    code: ErrorCode::E100,
                    message: "expected a declaration or an edge",
                    help: Some(
                        "use `root <name>`, `node <name>` or `<dependency> -> <dependent>`; \
                         separate `->` from names with spaces",
                    ),
                    start,
                },
            )));
        }
    };

    let declared = cut_err(name)
        .context(SyntaxDiagnostic {
            code: ErrorCode::E102,
            message: "missing declared name",
            help: Some("name the node being declared: `node lib.sol`"),
            start,
        })
        .parse_next(input)?;

    Ok(Statement::Declare {
        kind,
        name: declared,
    })
}

/// Trailing whitespace and comment, then a newline, `;` or end of input.
fn end_of_statement(input: &mut Input<'_>) -> IResult<()> {
    inline_space(input)?;
    opt(comment).parse_next(input)?;

    let start = input.current_token_start();
    cut_err(terminator)
        .context(SyntaxDiagnostic {
            code: ErrorCode::E002,
            message: "unexpected characters after statement",
            help: Some("put each statement on its own line or separate statements with `;`"),
            start,
        })
        .parse_next(input)
}

/// Byte offset just past the character starting at `pos`.
fn next_boundary(source: &str, pos: usize) -> usize {
    source
        .get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(source.len(), |ch| pos + ch.len_utf8())
}

/// Convert a winnow error into a diagnostic.
///
/// Uses the first [`SyntaxDiagnostic`] context when one was attached and
/// falls back to E100 (unexpected token) otherwise.
fn to_diagnostic(
    err: ErrMode<ContextError<SyntaxDiagnostic>>,
    error_pos: usize,
    source: &str,
) -> Diagnostic {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    if let Some(SyntaxDiagnostic {
        code,
        message,
        help,
        start,
    }) = context_error.context().next()
    {
        let end = error_pos.max(next_boundary(source, *start));
        let span = Span::new(*start..end.min(source.len()));

        let mut diag = Diagnostic::error(*message)
            .with_code(*code)
            .with_label(span, code.description());
        if let Some(help) = help {
            diag = diag.with_help(*help);
        }
        return diag;
    }

    let start = error_pos.min(source.len());
    let span = Span::new(start..next_boundary(source, start));
    Diagnostic::error("expected a declaration or an edge")
        .with_code(ErrorCode::E100)
        .with_label(span, ErrorCode::E100.description())
}

/// Parse every statement of `source`, collecting syntax errors.
pub(crate) fn parse_statements(source: &str) -> (Vec<Statement>, DiagnosticCollector) {
    let mut input = LocatingSlice::new(source);
    let mut statements = Vec::new();
    let mut diagnostics = DiagnosticCollector::new();

    loop {
        // Only optional alternatives are repeated, so this cannot fail.
        let _ = blank(&mut input);
        if input.is_empty() {
            break;
        }

        let before = input.current_token_start();
        match terminated(statement, end_of_statement).parse_next(&mut input) {
            Ok(stmt) => statements.push(stmt),
            Err(err) => {
                let error_pos = input.current_token_start();
                diagnostics.emit(to_diagnostic(err, error_pos, source));

                let _ = rest_of_line(&mut input);
                if input.current_token_start() == before && !input.is_empty() {
                    input.next_token();
                }
            }
        }
    }

    (statements, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> Vec<Statement> {
        let (statements, diagnostics) = parse_statements(source);
        assert!(
            diagnostics.finish().is_ok(),
            "Unexpected errors for: {source}"
        );
        statements
    }

    fn error_codes(source: &str) -> Vec<ErrorCode> {
        let (_, diagnostics) = parse_statements(source);
        let err = diagnostics.finish().expect_err("Expected parse errors");
        err.diagnostics().iter().filter_map(|d| d.code()).collect()
    }

    fn edge_names(statement: &Statement) -> (&str, &str) {
        match statement {
            Statement::Edge { from, to } => (from.value.as_str(), to.value.as_str()),
            other => panic!("Expected edge, got {other:?}"),
        }
    }

    #[test]
    fn test_declarations() {
        let statements = parse_ok("root app.sol\nnode lib/Math.sol\n");

        assert_eq!(statements.len(), 2);
        match &statements[0] {
            Statement::Declare { kind, name } => {
                assert_eq!(*kind, DeclKind::Root);
                assert_eq!(name.value, "app.sol");
                assert_eq!(name.span, Span::new(5..12));
            }
            other => panic!("Expected declaration, got {other:?}"),
        }
        match &statements[1] {
            Statement::Declare { kind, name } => {
                assert_eq!(*kind, DeclKind::Node);
                assert_eq!(name.value, "lib/Math.sol");
            }
            other => panic!("Expected declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_edge() {
        let statements = parse_ok("lib.sol -> app.sol");

        assert_eq!(statements.len(), 1);
        assert_eq!(edge_names(&statements[0]), ("lib.sol", "app.sol"));
    }

    #[test]
    fn test_composite_names() {
        let statements = parse_ok("Ownable@access/Ownable.sol -> Token@token/Token.sol");

        assert_eq!(
            edge_names(&statements[0]),
            ("Ownable@access/Ownable.sol", "Token@token/Token.sol")
        );
    }

    #[test]
    fn test_quoted_names() {
        let statements = parse_ok(r#"node "lib/Safe Math.sol"; "a \"b\"" -> "c\\d""#);

        assert_eq!(statements.len(), 2);
        match &statements[0] {
            Statement::Declare { name, .. } => assert_eq!(name.value, "lib/Safe Math.sol"),
            other => panic!("Expected declaration, got {other:?}"),
        }
        assert_eq!(edge_names(&statements[1]), ("a \"b\"", "c\\d"));
    }

    #[test]
    fn test_quoted_keyword_is_a_name() {
        let statements = parse_ok(r#""root" -> app"#);

        assert_eq!(edge_names(&statements[0]), ("root", "app"));
    }

    #[test]
    fn test_keyword_as_edge_endpoint() {
        let statements = parse_ok("node -> root");

        assert_eq!(edge_names(&statements[0]), ("node", "root"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let source = "# header\n\n  root a # trailing\n;;\n\tb -> a\n# footer";
        let statements = parse_ok(source);

        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_semicolon_separated() {
        let statements = parse_ok("root a; node b; b -> a;");

        assert_eq!(statements.len(), 3);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_ok("").is_empty());
        assert!(parse_ok("  \n# only a comment\n").is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(error_codes("node \"open\nroot b"), vec![ErrorCode::E001]);
    }

    #[test]
    fn test_invalid_escape() {
        assert_eq!(error_codes(r#"node "bad\n""#), vec![ErrorCode::E003]);
    }

    #[test]
    fn test_missing_edge_target() {
        assert_eq!(error_codes("a ->"), vec![ErrorCode::E101]);
    }

    #[test]
    fn test_missing_declared_name() {
        assert_eq!(error_codes("root\n"), vec![ErrorCode::E102]);
    }

    #[test]
    fn test_arrow_without_spaces() {
        assert_eq!(error_codes("a->b"), vec![ErrorCode::E100]);
    }

    #[test]
    fn test_stray_arrow() {
        assert_eq!(error_codes("-> app"), vec![ErrorCode::E100]);
    }

    #[test]
    fn test_trailing_garbage() {
        assert_eq!(error_codes("a -> b c"), vec![ErrorCode::E002]);
    }

    #[test]
    fn test_recovers_and_reports_every_line() {
        let source = "root a\nbogus\nb ->\nnode \"x\nb -> a\n";
        let (statements, diagnostics) = parse_statements(source);

        assert_eq!(statements.len(), 2);
        let err = diagnostics.finish().unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().filter_map(|d| d.code()).collect();
        assert_eq!(codes, vec![ErrorCode::E100, ErrorCode::E101, ErrorCode::E001]);
    }

    #[test]
    fn test_error_span_starts_at_statement() {
        let source = "root a\nlib.sol ->\n";
        let (_, diagnostics) = parse_statements(source);
        let err = diagnostics.finish().unwrap_err();

        let span = err.diagnostics()[0].primary_span().unwrap();
        assert_eq!(span.start(), 7);
        assert!(span.end() <= source.len());
    }

    #[test]
    fn test_span_never_splits_characters() {
        let source = "naïve";
        let (_, diagnostics) = parse_statements(source);
        let err = diagnostics.finish().unwrap_err();

        let span = err.diagnostics()[0].primary_span().unwrap();
        assert!(source.is_char_boundary(span.start()));
        assert!(source.is_char_boundary(span.end()));
    }
}
