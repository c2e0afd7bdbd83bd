use crate::utils::prelude::SrcSpan;

// A lexeme that matched none of the token classes. Scanning keeps going;
// the lexeme is still emitted as an Unknown token and the anomaly is kept
// around for whoever drives the lexer to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalAnomaly {
    pub lexeme: String,
    pub line: u32,
    pub location: SrcSpan,
}

impl LexicalAnomaly {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        (
            "Unrecognized lexeme",
            vec![format!("`{}` does not match any token class", self.lexeme)]
        )
    }
}
