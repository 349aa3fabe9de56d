use crate::{
    blocks::{Block, BlockKind},
    inline::tokenize,
};

use super::{
    ParseOptions, UnterminatedFence,
    kinds::{BlockQuote, CodeFence, FenceOpen, Heading, IndentedCode, ListItemSyntax, ThematicBreak},
};

/// Line scanner that turns a document into blocks.
///
/// At each cursor position the line is classified by the first matching
/// rule (heading, rule, quote run, fenced code, indented code, list run,
/// blank, paragraph). Multi-line kinds look ahead and report how many lines
/// they consumed.
pub struct BlockLexer<'a> {
    lines: Vec<&'a str>,
    options: &'a ParseOptions,
}

impl<'a> BlockLexer<'a> {
    pub fn new(document: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            lines: document.split('\n').collect(),
            options,
        }
    }

    pub fn run(self) -> Vec<Block> {
        let mut out = vec![];
        let mut i = 0;
        while i < self.lines.len() {
            let consumed = self.lex_at(i, &mut out);
            debug_assert!(consumed > 0, "lexer made no progress at line {i}");
            i += consumed.max(1);
        }
        out
    }

    /// Classifies the line at `i`, pushes any blocks, returns lines consumed.
    fn lex_at(&self, i: usize, out: &mut Vec<Block>) -> usize {
        let line = self.lines[i];

        if let Some((level, text)) = Heading::parse(line) {
            out.push(Block::new(BlockKind::Heading {
                level,
                rich_text: tokenize(text),
            }));
            return 1;
        }

        if ThematicBreak::matches(line) {
            out.push(Block::new(BlockKind::HorizontalRule));
            return 1;
        }

        if BlockQuote::starts(line) {
            return self.lex_quote_run(i, out);
        }

        if let Some(open) = CodeFence::open(line) {
            return self.lex_fenced_code(i, open, out);
        }

        if IndentedCode::starts(line) {
            return self.lex_indented_code(i, out);
        }

        if ListItemSyntax::is_member(line) {
            return self.lex_list_run(i, out);
        }

        if line.trim().is_empty() {
            return 1;
        }

        out.push(paragraph(line));
        1
    }

    fn lex_quote_run(&self, i: usize, out: &mut Vec<Block>) -> usize {
        let mut j = i;
        let mut last_emitted: Option<usize> = None;

        while j < self.lines.len() && BlockQuote::starts(self.lines[j]) {
            let line = self.lines[j];
            if BlockQuote::is_bare(line) {
                j += 1;
                continue;
            }

            let (level, offset) = BlockQuote::strip_prefixes(line);
            let text = &line[offset..];

            let continues_previous = j > i && {
                let prev = self.lines[j - 1];
                BlockQuote::has_text(prev) && BlockQuote::strip_prefixes(prev).0 == level
            };

            match last_emitted {
                Some(idx) if continues_previous => {
                    if let BlockKind::Blockquote { rich_text, .. } = &mut out[idx].kind {
                        rich_text.extend(tokenize(&format!(" {text}")));
                    }
                }
                _ => {
                    out.push(Block::new(BlockKind::Blockquote {
                        level,
                        rich_text: tokenize(text),
                    }));
                    last_emitted = Some(out.len() - 1);
                }
            }
            j += 1;
        }

        j - i
    }

    fn lex_fenced_code(&self, i: usize, open: FenceOpen<'_>, out: &mut Vec<Block>) -> usize {
        let body_start = i + 1;
        let close = (body_start..self.lines.len())
            .find(|&j| CodeFence::closes(open.kind, self.lines[j]));

        let (body_end, consumed) = match close {
            Some(j) => (j, j + 1 - i),
            None => match self.options.unterminated_fence {
                UnterminatedFence::ConsumeToEnd => (self.lines.len(), self.lines.len() - i),
                UnterminatedFence::Reparse => {
                    log::debug!("unterminated fence at line {i}, reparsing following lines");
                    out.push(paragraph(self.lines[i]));
                    return 1;
                }
            },
        };

        out.push(Block::new(BlockKind::Code {
            raw_text: self.lines[body_start..body_end].join("\n"),
            language: open.language.map(str::to_string),
        }));
        consumed
    }

    fn lex_indented_code(&self, i: usize, out: &mut Vec<Block>) -> usize {
        let mut j = i;
        while j < self.lines.len() && IndentedCode::starts(self.lines[j]) {
            j += 1;
        }

        out.push(Block::new(BlockKind::Code {
            raw_text: self.lines[i..j].join("\n"),
            language: None,
        }));
        j - i
    }

    fn lex_list_run(&self, i: usize, out: &mut Vec<Block>) -> usize {
        let mut j = i;
        while j < self.lines.len() && ListItemSyntax::is_member(self.lines[j]) {
            let line = self.lines[j];
            let item = ListItemSyntax::capture(line);
            debug_assert!(item.is_some(), "list member failed capture: {line:?}");

            match item {
                Some(item) => out.push(Block::new(BlockKind::ListItem {
                    level: item.level(),
                    format: item.format,
                    rich_text: tokenize(item.text),
                })),
                None => log::warn!("dropping malformed list line {j}: {line:?}"),
            }
            j += 1;
        }
        j - i
    }
}

fn paragraph(line: &str) -> Block {
    Block::new(BlockKind::Paragraph {
        rich_text: tokenize(line),
    })
}
