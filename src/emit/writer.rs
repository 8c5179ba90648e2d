//! Output buffer with indentation tracking
//!
//! Accumulates emitted C text. Only `write_line` and `write_indented` prefix indentation; `write`
//! appends verbatim so headers and opening braces can share a line.

use super::config::EmitConfig;

/// Writer that tracks indentation and builds the emitted C text
#[derive(Debug)]
pub struct CodeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: EmitConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl CodeWriter {
    /// Create a new writer with the given config
    pub fn new(config: EmitConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the accumulated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level (clamped at zero)
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn push_indent(&mut self) {
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    /// Append raw text, no indentation and no newline.
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.output.push_str(s);
        self.at_line_start = false;
    }

    /// Write the current indentation followed by `s`, leaving the line open.
    pub fn write_indented(&mut self, s: &str) {
        self.push_indent();
        self.output.push_str(s);
        self.at_line_start = false;
    }

    /// Write an indented line terminated by `\n`.
    pub fn write_line(&mut self, s: &str) {
        self.write_indented(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Whether nothing has been written on the current line yet.
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Get current indentation level
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the configuration
    pub fn config(&self) -> &EmitConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> CodeWriter {
        CodeWriter::new(EmitConfig::default())
    }

    // ========================================
    // Constructor and finish tests
    // ========================================

    #[test]
    fn test_new_writer_empty_output() {
        let writer = default_writer();
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_new_writer_at_line_start() {
        let writer = default_writer();
        assert!(writer.at_line_start());
        assert_eq!(writer.current_indent(), 0);
    }

    #[test]
    fn test_new_writer_with_custom_config() {
        let writer = CodeWriter::new(EmitConfig::new().with_indent_width(2));
        assert_eq!(writer.config().indent_width, 2);
    }

    // ========================================
    // Write tests
    // ========================================

    #[test]
    fn test_write_simple() {
        let mut writer = default_writer();
        writer.write("hello");
        assert!(!writer.at_line_start());
        assert_eq!(writer.finish(), "hello");
    }

    #[test]
    fn test_write_empty_string() {
        let mut writer = default_writer();
        writer.write("");
        assert!(writer.at_line_start());
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_write_ignores_indentation() {
        let mut writer = default_writer();
        writer.indent();
        writer.write("raw");
        assert_eq!(writer.finish(), "raw");
    }

    #[test]
    fn test_write_multiple() {
        let mut writer = default_writer();
        writer.write("hello");
        writer.write(" ");
        writer.write("world");
        assert_eq!(writer.finish(), "hello world");
    }

    // ========================================
    // write_line / write_indented tests
    // ========================================

    #[test]
    fn test_write_line_adds_newline() {
        let mut writer = default_writer();
        writer.write_line("hello");
        assert!(writer.at_line_start());
        assert_eq!(writer.finish(), "hello\n");
    }

    #[test]
    fn test_write_line_empty_string() {
        let mut writer = default_writer();
        writer.write_line("");
        assert_eq!(writer.finish(), "\n");
    }

    #[test]
    fn test_write_line_multiple() {
        let mut writer = default_writer();
        writer.write_line("line1");
        writer.write_line("line2");
        assert_eq!(writer.finish(), "line1\nline2\n");
    }

    #[test]
    fn test_write_indented_then_write() {
        let mut writer = default_writer();
        writer.indent();
        writer.write_indented("if (x) ");
        writer.write("{");
        writer.newline();
        assert_eq!(writer.finish(), "    if (x) {\n");
    }

    // ========================================
    // Indent/dedent tests
    // ========================================

    #[test]
    fn test_indent_increases_level() {
        let mut writer = default_writer();
        writer.indent();
        assert_eq!(writer.current_indent(), 1);
    }

    #[test]
    fn test_dedent_decreases_level() {
        let mut writer = default_writer();
        writer.indent();
        writer.indent();
        writer.dedent();
        assert_eq!(writer.current_indent(), 1);
    }

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = default_writer();
        writer.dedent();
        writer.dedent();
        assert_eq!(writer.current_indent(), 0);
    }

    #[test]
    fn test_indent_affects_output() {
        let mut writer = default_writer();
        writer.indent();
        writer.write_line("indented");
        writer.dedent();
        writer.write_line("not indented");
        assert_eq!(writer.finish(), "    indented\nnot indented\n");
    }

    #[test]
    fn test_indent_width_2() {
        let mut writer = CodeWriter::new(EmitConfig::new().with_indent_width(2));
        writer.indent();
        writer.indent();
        writer.write_line("text");
        assert_eq!(writer.finish(), "    text\n"); // 2 * 2 = 4 spaces
    }

    #[test]
    fn test_indent_width_zero() {
        let mut writer = CodeWriter::new(EmitConfig::new().with_indent_width(0));
        writer.indent();
        writer.write_line("flat");
        assert_eq!(writer.finish(), "flat\n");
    }

    // ========================================
    // Complex scenarios
    // ========================================

    #[test]
    fn test_nested_indentation() {
        let mut writer = default_writer();

        writer.write_line("int main()");
        writer.write_line("{");
        writer.indent();
        writer.write_indented("if (ok) ");
        writer.write("{");
        writer.newline();
        writer.indent();
        writer.write_line("run();");
        writer.dedent();
        writer.write_line("}");
        writer.dedent();
        writer.write_line("}");

        let expected = "int main()\n{\n    if (ok) {\n        run();\n    }\n}\n";
        assert_eq!(writer.finish(), expected);
    }

    #[test]
    fn test_struct_block_generation() {
        let mut writer = default_writer();

        writer.write_line("struct Point {");
        writer.indent();
        writer.write_line("int x;");
        writer.write_line("int y;");
        writer.dedent();
        writer.write_line("};");

        assert_eq!(writer.finish(), "struct Point {\n    int x;\n    int y;\n};\n");
    }
}
