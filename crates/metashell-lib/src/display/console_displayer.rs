//! Human-readable output.

use metashell_core::{Backtrace, CallGraphNode, Colors, Frame, Text, Type};

use super::Displayer;
use super::call_graph::render_call_graph;
use super::console::Console;
use super::indenter::Indenter;

/// Presentation settings for [`ConsoleDisplayer`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleConfig {
    pub colored: bool,
}

pub struct ConsoleDisplayer<C> {
    console: C,
    colors: Colors,
}

impl<C: Console> ConsoleDisplayer<C> {
    pub fn new(console: C, config: ConsoleConfig) -> Self {
        Self {
            console,
            colors: Colors::new(config.colored),
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn show_colored(&mut self, text: &str, color: &str) {
        if self.colors.is_enabled() {
            self.console.show(color);
            self.console.show(text);
            self.console.show(self.colors.reset);
        } else {
            self.console.show(text);
        }
    }

    fn show_frame_label(&mut self, frame: &Frame) {
        self.console.show(frame.name().name());
        if let Some(kind) = frame.kind() {
            self.console.show(&format!(" ({})", kind));
        }
    }
}

impl<C: Console> Displayer for ConsoleDisplayer<C> {
    fn show_raw_text(&mut self, text: &str) {
        self.console.show(text);
        self.console.new_line();
    }

    fn show_error(&mut self, msg: &str) {
        if msg.is_empty() {
            return;
        }
        self.show_colored(msg, self.colors.bright_red);
        self.console.new_line();
    }

    fn show_type(&mut self, ty: &Type) {
        self.show_cpp_code(ty.name());
    }

    fn show_comment(&mut self, text: &Text) {
        let mut ind = Indenter::new(self.console.width(), " * ");
        ind.raw("/*");
        for p in &text.paragraphs {
            if p.content.is_empty() {
                ind.empty_line();
            } else {
                ind.left_align(
                    &p.content,
                    &format!(" * {}", p.rest_of_lines_indentation),
                    &format!(" * {}", p.first_line_indentation),
                );
            }
        }
        ind.raw(" */");

        self.show_cpp_code(&ind.str());
    }

    fn show_cpp_code(&mut self, code: &str) {
        if code.is_empty() {
            return;
        }
        self.console.show(code);
        self.console.new_line();
    }

    fn show_frame(&mut self, frame: &Frame) {
        self.show_frame_label(frame);
        self.console.new_line();
    }

    fn show_backtrace(&mut self, trace: &Backtrace) {
        for (i, frame) in trace.iter().enumerate() {
            self.show_colored(&format!("#{} ", i), self.colors.white);
            self.show_frame(frame);
        }
    }

    fn show_call_graph(&mut self, nodes: &[CallGraphNode]) {
        for line in render_call_graph(nodes, self.console.width(), self.colors) {
            self.console.show(&line);
            self.console.new_line();
        }
    }
}
