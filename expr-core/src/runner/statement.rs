use crate::lexer::prelude::is_identifier;

pub const PRINT_MARKER: &str = "cout<<";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind<'src> {
    Assignment { name: &'src str },
    Print,
    Expression,
}

// One trimmed statement of a submission. `expr` is the expression text to
// run through the pipeline; `offset` is where it sits in the submission,
// so token spans can stay absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'src> {
    pub kind: StatementKind<'src>,
    pub expr: &'src str,
    pub offset: u32,
}

pub fn split_statements(src: &str) -> Vec<Statement<'_>> {
    let mut statements = vec![];
    let mut start = 0;

    for (idx, ch) in src.char_indices() {
        if ch == ';' || ch == '\n' {
            push_statement(&mut statements, src, start, idx);
            start = idx + 1;
        }
    }

    push_statement(&mut statements, src, start, src.len());

    statements
}

fn push_statement<'src>(
    statements: &mut Vec<Statement<'src>>,
    src: &'src str,
    start: usize,
    end: usize
) {
    let raw = &src[start..end];
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return;
    }

    let offset = start + (raw.len() - raw.trim_start().len());

    statements.push(classify_statement(trimmed, offset as u32));
}

fn classify_statement(text: &str, offset: u32) -> Statement<'_> {
    if let Some(rest) = text.strip_prefix(PRINT_MARKER) {
        let expr = rest.trim();
        let skipped = PRINT_MARKER.len() + (rest.len() - rest.trim_start().len());

        return Statement {
            kind: StatementKind::Print,
            expr,
            offset: offset + skipped as u32,
        };
    }

    if let Some((lhs, rhs)) = text.split_once('=') {
        let name = lhs.trim();
        let expr = rhs.trim();

        if is_identifier(name) && !expr.is_empty() {
            let skipped = lhs.len() + 1 + (rhs.len() - rhs.trim_start().len());

            return Statement {
                kind: StatementKind::Assignment { name },
                expr,
                offset: offset + skipped as u32,
            };
        }
    }

    Statement {
        kind: StatementKind::Expression,
        expr: text,
        offset,
    }
}
