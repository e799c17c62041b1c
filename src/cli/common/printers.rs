// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Pretty printers for reporting information.
use std::{borrow::Cow, sync::Mutex};

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

lazy_static::lazy_static! {
    static ref WARNING_PRINTER: Mutex<WarningPrinter> = Mutex::new(WarningPrinter::default());
}

type Block = Vec<Cow<'static, str>>;

/// The tree-drawing symbol for a line within a block of lines. Only the first
/// line of a block gets a branch; the last block's branch closes the tree.
fn tree_symbol(i_line: usize, last_line: bool, last_block: bool) -> char {
    match (i_line, last_line, last_block) {
        (0, false, _) => VERTICAL_AND_RIGHT,
        (0, _, false) => VERTICAL_AND_RIGHT,
        (0, true, true) => UP_AND_RIGHT,
        _ => VERTICAL,
    }
}

fn for_each_tree_line<F: FnMut(char, &str)>(blocks: &[Block], mut f: F) {
    let num_blocks = blocks.len();
    for (i_block, block) in blocks.iter().enumerate() {
        let num_lines = block.len();
        for (i_line, line) in block.iter().enumerate() {
            f(
                tree_symbol(i_line, i_line + 1 == num_lines, i_block + 1 == num_blocks),
                line,
            );
        }
    }
}

pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Vec<Block>,
}

impl InfoPrinter {
    pub(crate) fn new(title: Cow<'static, str>) -> Self {
        Self {
            title,
            blocks: vec![],
        }
    }

    pub(crate) fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    pub(crate) fn push_block(&mut self, block: Block) {
        if !block.is_empty() {
            self.blocks.push(block);
        }
    }

    pub(crate) fn display(self) {
        log::info!("{}", console::style(self.title).bold());
        for_each_tree_line(&self.blocks, |symbol, line| log::info!("{symbol} {line}"));
        log::info!("");
    }
}

#[derive(Default)]
struct WarningPrinter {
    blocks: Vec<Block>,
}

impl WarningPrinter {
    fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    fn display(&mut self) {
        log::debug!("Displaying warnings");
        if self.blocks.is_empty() {
            return;
        }

        log::warn!("{}", console::style("Warnings").bold());
        for_each_tree_line(&self.blocks, |symbol, line| log::warn!("{symbol} {line}"));
        log::warn!("");
        self.blocks.clear();
    }
}

/// Things that can be deferred as warnings, to be displayed together by
/// [`display_warnings`].
pub(crate) trait Warn {
    fn warn(self);
}

fn with_warning_printer<F: FnOnce(&mut WarningPrinter)>(f: F) {
    // Collected warnings are still valid if the lock is poisoned.
    let mut printer = match WARNING_PRINTER.lock() {
        Ok(p) => p,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut printer);
}

impl Warn for &'static str {
    fn warn(self) {
        with_warning_printer(|p| p.push_line(self.into()));
    }
}

impl Warn for String {
    fn warn(self) {
        with_warning_printer(|p| p.push_line(self.into()));
    }
}

/// Print out any warnings that have been collected while reading catalogues
/// and parsing arguments. The collected warnings are cleared afterwards.
pub(crate) fn display_warnings() {
    with_warning_printer(|p| p.display());
}
