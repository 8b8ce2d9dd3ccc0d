//! miette reports for depgrid errors and parser warnings.
//!
//! A [`DepgridError::Parse`] holding several diagnostics turns into one
//! report per diagnostic, each rendered against the description source.

use std::{error::Error, fmt};

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity, SourceCode,
    SourceSpan,
};

use depgrid::DepgridError;
use depgrid_parser::{Span, error::Diagnostic};

/// A report miette can render.
pub type Report<'a> = Box<dyn MietteDiagnostic + 'a>;

/// A parser diagnostic paired with the description it points into.
#[derive(Debug)]
struct SourceReport<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl fmt::Display for SourceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl Error for SourceReport<'_> {}

impl MietteDiagnostic for SourceReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(if self.diag.severity().is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = to_source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A [`DepgridError`] that has no location in the description.
#[derive(Debug)]
struct ErrorReport<'a>(&'a DepgridError);

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl Error for ErrorReport<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            DepgridError::Io(_) => "depgrid::io",
            DepgridError::Parse { .. } => return None,
            DepgridError::Cycle { .. } => "depgrid::cycle",
            DepgridError::Layout(_) => "depgrid::layout",
            DepgridError::Export(_) => "depgrid::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            DepgridError::Cycle { .. } => Some(Box::new(
                "remove one of the edges between these nodes, or set `cycle_policy = \"allow\"`",
            )),
            DepgridError::Layout(_) => Some(Box::new("declare at least one node with `root`")),
            _ => None,
        }
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Reports for `err`: one per diagnostic for parse errors, one otherwise.
pub fn error_reports(err: &DepgridError) -> Vec<Report<'_>> {
    match err {
        DepgridError::Parse { err: parse_err, src } => source_reports(parse_err.diagnostics(), src),
        _ => vec![Box::new(ErrorReport(err)) as Report<'_>],
    }
}

/// Reports for diagnostics found in `src`, such as the warnings kept on a
/// parsed document.
pub fn source_reports<'a>(diagnostics: &'a [Diagnostic], src: &'a str) -> Vec<Report<'a>> {
    diagnostics
        .iter()
        .map(|diag| Box::new(SourceReport { diag, src }) as Report<'a>)
        .collect()
}

/// Render a report with miette's graphical handler.
pub fn render(report: &dyn MietteDiagnostic) -> String {
    let mut out = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut out, report)
        .expect("Writing to String buffer is infallible");
    out
}

#[cfg(test)]
mod tests {
    use depgrid::{GridBuilder, identifier::Id};

    use super::*;

    fn parse_error(source: &str) -> DepgridError {
        GridBuilder::default()
            .parse(source)
            .expect_err("description is invalid")
    }

    #[test]
    fn test_one_report_per_parse_diagnostic() {
        let err = parse_error("node a\nnode a\nb ->\n");

        let codes: Vec<String> = error_reports(&err)
            .iter()
            .filter_map(|report| report.code().map(|code| code.to_string()))
            .collect();

        assert_eq!(codes, vec!["E101", "E200"]);
    }

    #[test]
    fn test_duplicate_declaration_points_at_both_names() {
        let err = parse_error("node a\nnode a\n");
        let reports = error_reports(&err);

        let labels: Vec<LabeledSpan> = reports[0].labels().expect("labels").collect();
        assert_eq!(labels.len(), 2);

        let primary = labels.iter().find(|label| label.primary()).unwrap();
        assert_eq!(primary.offset(), 12);
        assert_eq!(primary.label(), Some("declared again here"));
    }

    #[test]
    fn test_undeclared_endpoint_renders_as_warning() {
        let source = "root app\nghost -> app\n";
        let document = GridBuilder::default().parse(source).unwrap();

        let reports = source_reports(document.warnings(), source);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity(), Some(Severity::Warning));
        assert!(render(&*reports[0]).contains("ghost"));
    }

    #[test]
    fn test_cycle_report() {
        let err = DepgridError::Cycle {
            members: vec![Id::new("a.sol"), Id::new("b.sol")],
        };

        let reports = error_reports(&err);

        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].code().map(|code| code.to_string()),
            Some("depgrid::cycle".to_string())
        );
        assert!(reports[0].help().is_some());
        assert!(reports[0].labels().is_none());
        assert_eq!(
            reports[0].to_string(),
            "Dependency cycle between `a.sol`, `b.sol`"
        );
    }
}
